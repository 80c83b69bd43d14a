//! TUI application state and logic

use crate::core::{GuessError, LetterClass, Word};
use crate::game::{
    CANCEL_POLL_INTERVAL, CancelToken, GameConfig, GameSession, RoundOutcome, SessionStatus,
};
use crate::wordlists::choose_secret;
use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use rustc_hash::FxHashMap;
use std::io;
use tracing::info;

/// Application state
pub struct App<'a> {
    pub words: &'a [Word],
    pub config: GameConfig,
    pub session: GameSession,
    pub input_mode: InputMode,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub cancel: CancelToken,
    rng: StdRng,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Index = attempts used for a win
    pub guess_distribution: Vec<usize>,
}

impl Statistics {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

fn pick_session(words: &[Word], config: GameConfig, rng: &mut StdRng) -> Result<GameSession> {
    let secret = choose_secret(words, rng)
        .context("word list is empty")?
        .clone();
    Ok(GameSession::new(secret, config)?)
}

impl<'a> App<'a> {
    /// Create the app and start the first game
    ///
    /// # Errors
    ///
    /// Returns an error if `words` is empty or a secret does not fit `config`.
    pub fn new(
        words: &'a [Word],
        config: GameConfig,
        mut rng: StdRng,
        cancel: CancelToken,
    ) -> Result<Self> {
        let session = pick_session(words, config, &mut rng)?;

        Ok(Self {
            words,
            config,
            session,
            input_mode: InputMode::Guessing,
            input_buffer: String::new(),
            messages: vec![Message {
                text: format!(
                    "Guess the {}-letter word in {} attempts.",
                    config.word_length, config.max_attempts
                ),
                style: MessageStyle::Info,
            }],
            stats: Statistics {
                guess_distribution: vec![0; config.max_attempts + 1],
                ..Statistics::default()
            },
            should_quit: false,
            cancel,
            rng,
        })
    }

    /// Submit the input buffer as a guess
    ///
    /// # Errors
    ///
    /// Returns an error only if the session is already finished.
    pub fn submit_guess(&mut self) -> Result<()> {
        let input = std::mem::take(&mut self.input_buffer);

        match self.session.submit(&input)? {
            RoundOutcome::Rejected(err) => {
                self.input_buffer = input;
                self.add_message(&rejection_text(&err), MessageStyle::Error);
            }
            RoundOutcome::Scored { .. } => {
                let left = self.session.attempts_left();
                self.add_message(
                    &format!("{left} attempt{} left", if left == 1 { "" } else { "s" }),
                    MessageStyle::Info,
                );
            }
            RoundOutcome::Won { .. } => {
                let used = self.session.attempts_used();
                self.record_finished(true);
                let celebration = match used {
                    1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                    2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                    3 => "✨ SPLENDID! Three guesses! ✨",
                    4 => "👏 GREAT JOB! Four guesses! 👏",
                    5 => "🎉 NICE WORK! Five guesses! 🎉",
                    _ => "🎊 SOLVED! 🎊",
                };
                self.add_message(celebration, MessageStyle::Success);
                self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
            }
            RoundOutcome::Lost { .. } => {
                self.record_finished(false);
                let secret = self.session.secret().text().to_string();
                self.add_message(
                    &format!("Out of attempts. The word was {secret}"),
                    MessageStyle::Error,
                );
                self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
            }
        }

        Ok(())
    }

    fn record_finished(&mut self, won: bool) {
        self.stats.total_games += 1;
        if won {
            self.stats.games_won += 1;
            let used = self.session.attempts_used();
            if let Some(slot) = self.stats.guess_distribution.get_mut(used) {
                *slot += 1;
            }
        }
        self.input_mode = InputMode::GameOver;
        info!(
            status = %self.session.status(),
            attempts_used = self.session.attempts_used(),
            "game finished"
        );
    }

    /// Start a new game with a fresh secret
    ///
    /// # Errors
    ///
    /// Returns an error if no secret can be picked.
    pub fn new_game(&mut self) -> Result<()> {
        self.session = pick_session(self.words, self.config, &mut self.rng)?;
        self.input_buffer.clear();
        self.messages.clear();
        self.input_mode = InputMode::Guessing;
        self.add_message("New game started!", MessageStyle::Info);
        Ok(())
    }

    /// Abort the running session and leave
    pub fn shut_down(&mut self) {
        self.session.abort();
        self.should_quit = true;
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Best class seen so far for every guessed letter
    #[must_use]
    pub fn letter_hints(&self) -> FxHashMap<char, LetterClass> {
        let mut hints = FxHashMap::default();
        for (guess, feedback) in self.session.history() {
            for (&letter, class) in guess.letters().iter().zip(feedback.iter()) {
                hints
                    .entry(letter)
                    .and_modify(|best: &mut LetterClass| *best = (*best).max(class))
                    .or_insert(class);
            }
        }
        hints
    }

    fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> Result<()> {
        if matches!(code, KeyCode::Char('c')) && modifiers.contains(KeyModifiers::CONTROL) {
            self.cancel.cancel();
            return Ok(());
        }

        match self.input_mode {
            InputMode::GameOver => match code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') => self.new_game()?,
                _ => {}
            },
            InputMode::Guessing => match code {
                KeyCode::Esc => self.cancel.cancel(),
                KeyCode::Char(c)
                    if !modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
                {
                    self.input_buffer.push(c);
                }
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => self.submit_guess()?,
                _ => {}
            },
        }

        Ok(())
    }
}

fn rejection_text(err: &GuessError) -> String {
    match err {
        GuessError::InvalidWordData => "Letters only, please!".to_string(),
        GuessError::InvalidWordLength { expected, .. } => {
            format!("Word must be exactly {expected} letters!")
        }
        GuessError::LengthMismatch { .. } => err.to_string(),
    }
}

/// Run the TUI application
///
/// Returns the status of the last session.
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<SessionStatus> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
) -> Result<SessionStatus> {
    loop {
        if app.cancel.is_cancelled() {
            app.shut_down();
        }
        if app.should_quit {
            break;
        }

        terminal.draw(|f| super::rendering::ui(f, &app))?;

        // Poll so a cancel request from elsewhere is seen without a key press
        if !event::poll(CANCEL_POLL_INTERVAL)? {
            continue;
        }

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key.code, key.modifiers)?;
        }
    }

    Ok(app.session.status())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;

    fn app(words: &[Word]) -> App<'_> {
        App::new(
            words,
            GameConfig::new(5, 3),
            StdRng::seed_from_u64(3),
            CancelToken::new(),
        )
        .unwrap()
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(KeyCode::Char(c), KeyModifiers::NONE).unwrap();
        }
        app.handle_key(KeyCode::Enter, KeyModifiers::NONE).unwrap();
    }

    #[test]
    fn winning_updates_stats_and_mode() {
        let words = words_from_slice(&["water"], 5);
        let mut app = app(&words);

        type_text(&mut app, "otter");
        assert_eq!(app.input_mode, InputMode::Guessing);
        type_text(&mut app, "water");

        assert_eq!(app.session.status(), SessionStatus::Won);
        assert_eq!(app.input_mode, InputMode::GameOver);
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.guess_distribution[2], 1);
        assert!((app.stats.win_rate() - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn rejected_input_keeps_buffer_and_attempts() {
        let words = words_from_slice(&["water"], 5);
        let mut app = app(&words);

        type_text(&mut app, "ab1");
        assert_eq!(app.session.attempts_used(), 0);
        assert_eq!(app.input_buffer, "ab1");
        assert!(matches!(
            app.messages.last().map(|m| m.style),
            Some(MessageStyle::Error)
        ));
    }

    #[test]
    fn modifier_chords_do_not_type_letters() {
        let words = words_from_slice(&["water"], 5);
        let mut app = app(&words);

        app.handle_key(KeyCode::Char('u'), KeyModifiers::CONTROL)
            .unwrap();
        app.handle_key(KeyCode::Char('x'), KeyModifiers::ALT).unwrap();
        app.handle_key(KeyCode::Char('W'), KeyModifiers::SHIFT)
            .unwrap();

        assert_eq!(app.input_buffer, "W");
        assert!(!app.cancel.is_cancelled());
    }

    #[test]
    fn losing_then_new_game() {
        let words = words_from_slice(&["water"], 5);
        let mut app = app(&words);

        for guess in ["otter", "hound", "badly"] {
            type_text(&mut app, guess);
        }
        assert_eq!(app.session.status(), SessionStatus::Lost);
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 0);

        app.handle_key(KeyCode::Char('n'), KeyModifiers::NONE).unwrap();
        assert_eq!(app.session.status(), SessionStatus::InProgress);
        assert_eq!(app.session.attempts_used(), 0);
        assert_eq!(app.input_mode, InputMode::Guessing);
    }

    #[test]
    fn ctrl_c_requests_cancel_and_shut_down_aborts() {
        let words = words_from_slice(&["water"], 5);
        let mut app = app(&words);

        app.handle_key(KeyCode::Char('c'), KeyModifiers::CONTROL)
            .unwrap();
        assert!(app.cancel.is_cancelled());
        assert!(app.input_buffer.is_empty());

        app.shut_down();
        assert!(app.should_quit);
        assert_eq!(app.session.status(), SessionStatus::Aborted);
    }

    #[test]
    fn letter_hints_keep_best_class() {
        let words = words_from_slice(&["otter"], 5);
        let mut app = app(&words);

        // PPAPA: T present, O present then absent
        type_text(&mut app, "toott");
        // AEAAE: T and R exact
        type_text(&mut app, "stair");

        let hints = app.letter_hints();
        assert_eq!(hints.get(&'T'), Some(&LetterClass::Exact));
        assert_eq!(hints.get(&'O'), Some(&LetterClass::Present));
        assert_eq!(hints.get(&'S'), Some(&LetterClass::Absent));
        assert_eq!(hints.get(&'R'), Some(&LetterClass::Exact));
        assert_eq!(hints.get(&'Z'), None);
    }

    #[test]
    fn empty_word_list_is_an_error() {
        let result = App::new(
            &[],
            GameConfig::default(),
            StdRng::seed_from_u64(1),
            CancelToken::new(),
        );
        assert!(result.is_err());
    }
}
