//! Game session state machine
//!
//! `InProgress` is the only non-terminal state. A round reads raw text,
//! normalizes and validates it, and only then consumes an attempt and scores
//! the guess. Rejected input repeats the round at no cost.

use super::{CancelToken, GameConfig, GuessSource, Presenter};
use crate::core::{Feedback, GuessError, Word, evaluate};
use std::fmt;
use std::io;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Lifecycle state of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    InProgress,
    Won,
    Lost,
    Aborted,
}

impl SessionStatus {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::InProgress => "in progress",
            Self::Won => "won",
            Self::Lost => "lost",
            Self::Aborted => "aborted",
        };
        f.write_str(name)
    }
}

/// Result of submitting one line of input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundOutcome {
    /// Input was not an admissible guess; no attempt consumed
    Rejected(GuessError),
    /// Guess scored, game continues
    Scored { guess: Word, feedback: Feedback },
    /// Guess matched the secret
    Won { guess: Word, feedback: Feedback },
    /// Guess scored and it was the last attempt
    Lost { guess: Word, feedback: Feedback },
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Failed to read guess: {0}")]
    InputAcquisition(#[source] io::Error),

    #[error("Secret word {secret} has {actual} letters, expected {expected}")]
    SecretLength {
        secret: String,
        expected: usize,
        actual: usize,
    },

    #[error("A game needs at least one attempt")]
    NoAttempts,

    #[error("Session already finished ({0})")]
    Finished(SessionStatus),

    #[error("Evaluator precondition violated: {0}")]
    Precondition(#[source] GuessError),
}

/// One game against one secret word
#[derive(Debug)]
pub struct GameSession {
    secret: Word,
    config: GameConfig,
    attempts_used: usize,
    status: SessionStatus,
    history: Vec<(Word, Feedback)>,
}

impl GameSession {
    /// Start a session
    ///
    /// # Errors
    /// Returns [`SessionError::SecretLength`] if the secret does not have
    /// `config.word_length` letters, or [`SessionError::NoAttempts`] if
    /// `config.max_attempts` is zero.
    pub fn new(secret: Word, config: GameConfig) -> Result<Self, SessionError> {
        if secret.len() != config.word_length {
            return Err(SessionError::SecretLength {
                secret: secret.text().to_string(),
                expected: config.word_length,
                actual: secret.len(),
            });
        }
        if config.max_attempts == 0 {
            return Err(SessionError::NoAttempts);
        }

        Ok(Self {
            secret,
            config,
            attempts_used: 0,
            status: SessionStatus::InProgress,
            history: Vec::with_capacity(config.max_attempts),
        })
    }

    #[must_use]
    pub const fn status(&self) -> SessionStatus {
        self.status
    }

    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    #[must_use]
    pub const fn config(&self) -> GameConfig {
        self.config
    }

    #[must_use]
    pub const fn attempts_used(&self) -> usize {
        self.attempts_used
    }

    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.config.max_attempts
    }

    #[must_use]
    pub const fn attempts_left(&self) -> usize {
        self.config.max_attempts - self.attempts_used
    }

    /// Scored guesses so far, oldest first
    #[must_use]
    pub fn history(&self) -> &[(Word, Feedback)] {
        &self.history
    }

    /// Force the `Aborted` state. Has no effect on a finished session.
    pub fn abort(&mut self) {
        if self.status == SessionStatus::InProgress {
            warn!(attempts_used = self.attempts_used, "session aborted");
            self.status = SessionStatus::Aborted;
        }
    }

    fn ensure_in_progress(&self) -> Result<(), SessionError> {
        if self.status.is_terminal() {
            return Err(SessionError::Finished(self.status));
        }
        Ok(())
    }

    /// Play one round with already-acquired raw text
    ///
    /// # Errors
    /// Returns [`SessionError::Finished`] if the session is over. Invalid
    /// input is not an error: it yields [`RoundOutcome::Rejected`]. Only
    /// player mistakes are rejected; any other [`GuessError`] is a
    /// [`SessionError::Precondition`].
    pub fn submit(&mut self, raw: &str) -> Result<RoundOutcome, SessionError> {
        self.ensure_in_progress()?;

        let guess = match Word::with_length(raw, self.config.word_length) {
            Ok(guess) => guess,
            Err(err) if err.is_input_error() => {
                debug!(%err, "guess rejected");
                return Ok(RoundOutcome::Rejected(err));
            }
            Err(err) => return Err(SessionError::Precondition(err)),
        };

        self.attempts_used += 1;
        let feedback = evaluate(&self.secret, &guess).map_err(SessionError::Precondition)?;
        debug!(
            attempt = self.attempts_used,
            guess = %guess,
            feedback = %feedback,
            "guess scored"
        );
        self.history.push((guess.clone(), feedback.clone()));

        if feedback.is_win() {
            self.status = SessionStatus::Won;
            info!(attempts_used = self.attempts_used, "session won");
            return Ok(RoundOutcome::Won { guess, feedback });
        }

        if self.attempts_used == self.config.max_attempts {
            self.status = SessionStatus::Lost;
            info!(attempts_used = self.attempts_used, "session lost");
            return Ok(RoundOutcome::Lost { guess, feedback });
        }

        Ok(RoundOutcome::Scored { guess, feedback })
    }

    /// Drive the session to a terminal state
    ///
    /// Checks `cancel` before every read. A read that fails after cancellation
    /// was requested ends the session as `Aborted` without error.
    ///
    /// # Errors
    /// Returns [`SessionError::InputAcquisition`] (after moving to `Aborted`)
    /// if the source fails, and [`SessionError::Finished`] if called on a
    /// finished session.
    pub fn run<S, P>(
        &mut self,
        source: &mut S,
        presenter: &mut P,
        cancel: &CancelToken,
    ) -> Result<SessionStatus, SessionError>
    where
        S: GuessSource + ?Sized,
        P: Presenter + ?Sized,
    {
        self.ensure_in_progress()?;
        info!(
            word_length = self.config.word_length,
            max_attempts = self.config.max_attempts,
            "session started"
        );

        while self.status == SessionStatus::InProgress {
            if cancel.is_cancelled() {
                self.abort();
                break;
            }

            presenter.round_started(self.attempts_used + 1, self.config.max_attempts);

            let raw = match source.read_guess() {
                Ok(raw) => raw,
                Err(_) if cancel.is_cancelled() => {
                    self.abort();
                    break;
                }
                Err(err) => {
                    self.abort();
                    presenter.finished(self.status, &self.secret, self.attempts_used);
                    return Err(SessionError::InputAcquisition(err));
                }
            };

            match self.submit(&raw)? {
                RoundOutcome::Rejected(err) => presenter.rejected(&err),
                RoundOutcome::Scored { guess, feedback }
                | RoundOutcome::Lost { guess, feedback } => presenter.scored(&guess, &feedback),
                RoundOutcome::Won { .. } => {}
            }
        }

        presenter.finished(self.status, &self.secret, self.attempts_used);
        Ok(self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::ChannelSource;
    use std::collections::VecDeque;
    use std::thread;
    use std::time::Duration;

    struct ScriptedSource {
        lines: VecDeque<io::Result<String>>,
        reads: usize,
        cancel_on_read: Option<CancelToken>,
    }

    impl ScriptedSource {
        fn new(lines: &[&str]) -> Self {
            Self {
                lines: lines.iter().map(|l| Ok((*l).to_string())).collect(),
                reads: 0,
                cancel_on_read: None,
            }
        }
    }

    impl GuessSource for ScriptedSource {
        fn read_guess(&mut self) -> io::Result<String> {
            self.reads += 1;
            if let Some(token) = &self.cancel_on_read {
                token.cancel();
            }
            self.lines.pop_front().unwrap_or_else(|| {
                Err(io::Error::new(io::ErrorKind::UnexpectedEof, "end of input"))
            })
        }
    }

    #[derive(Debug, PartialEq, Eq)]
    enum Event {
        Round(usize),
        Rejected(GuessError),
        Scored(String, String),
        Finished(SessionStatus, usize),
    }

    #[derive(Default)]
    struct Recorder {
        events: Vec<Event>,
    }

    impl Recorder {
        fn scored(&self) -> usize {
            self.events
                .iter()
                .filter(|e| matches!(e, Event::Scored(..)))
                .count()
        }
    }

    impl Presenter for Recorder {
        fn round_started(&mut self, attempt: usize, _max_attempts: usize) {
            self.events.push(Event::Round(attempt));
        }

        fn rejected(&mut self, error: &GuessError) {
            self.events.push(Event::Rejected(error.clone()));
        }

        fn scored(&mut self, guess: &Word, feedback: &Feedback) {
            self.events
                .push(Event::Scored(guess.text().to_string(), feedback.to_string()));
        }

        fn finished(&mut self, status: SessionStatus, _secret: &Word, attempts_used: usize) {
            self.events.push(Event::Finished(status, attempts_used));
        }
    }

    fn session(secret: &str, max_attempts: usize) -> GameSession {
        let secret = Word::new(secret).unwrap();
        GameSession::new(secret, GameConfig::new(5, max_attempts)).unwrap()
    }

    #[test]
    fn invalid_input_is_retried_without_consuming_attempts() {
        let mut game = session("HOUND", 5);
        let mut source = ScriptedSource::new(&["IN V4LID\n", "abc\n", "  hound \n"]);
        let mut presenter = Recorder::default();

        let status = game
            .run(&mut source, &mut presenter, &CancelToken::new())
            .unwrap();

        assert_eq!(status, SessionStatus::Won);
        assert_eq!(game.attempts_used(), 1);
        assert_eq!(
            presenter.events,
            vec![
                Event::Round(1),
                Event::Rejected(GuessError::InvalidWordData),
                Event::Round(1),
                Event::Rejected(GuessError::InvalidWordLength {
                    expected: 5,
                    actual: 3
                }),
                Event::Round(1),
                Event::Finished(SessionStatus::Won, 1),
            ]
        );
    }

    #[test]
    fn exhausting_attempts_loses() {
        let mut game = session("OTTER", 3);
        let mut source = ScriptedSource::new(&["water", "toott", "hound", "otter"]);
        let mut presenter = Recorder::default();

        let status = game
            .run(&mut source, &mut presenter, &CancelToken::new())
            .unwrap();

        assert_eq!(status, SessionStatus::Lost);
        assert_eq!(game.attempts_used(), 3);
        assert_eq!(game.attempts_left(), 0);
        assert_eq!(presenter.scored(), 3);
        // The fourth line is never read
        assert_eq!(source.reads, 3);
        assert_eq!(
            presenter.events[1],
            Event::Scored("WATER".to_string(), "AAEEE".to_string())
        );
        assert_eq!(
            presenter.events.last(),
            Some(&Event::Finished(SessionStatus::Lost, 3))
        );
    }

    #[test]
    fn end_of_input_aborts_with_error() {
        let mut game = session("HOUND", 5);
        let mut source = ScriptedSource::new(&["water"]);
        let mut presenter = Recorder::default();

        let err = game
            .run(&mut source, &mut presenter, &CancelToken::new())
            .unwrap_err();

        assert!(matches!(
            err,
            SessionError::InputAcquisition(ref e) if e.kind() == io::ErrorKind::UnexpectedEof
        ));
        assert_eq!(game.status(), SessionStatus::Aborted);
        assert_eq!(game.attempts_used(), 1);
        assert_eq!(
            presenter.events.last(),
            Some(&Event::Finished(SessionStatus::Aborted, 1))
        );
    }

    #[test]
    fn cancelled_before_start_never_reads() {
        let mut game = session("HOUND", 5);
        let mut source = ScriptedSource::new(&["hound"]);
        let mut presenter = Recorder::default();
        let cancel = CancelToken::new();
        cancel.cancel();

        let status = game.run(&mut source, &mut presenter, &cancel).unwrap();

        assert_eq!(status, SessionStatus::Aborted);
        assert_eq!(source.reads, 0);
        assert_eq!(game.attempts_used(), 0);
    }

    #[test]
    fn cancel_is_observed_between_rounds() {
        let mut game = session("HOUND", 5);
        let cancel = CancelToken::new();
        let mut source = ScriptedSource::new(&["water", "hound"]);
        source.cancel_on_read = Some(cancel.clone());
        let mut presenter = Recorder::default();

        let status = game.run(&mut source, &mut presenter, &cancel).unwrap();

        // First guess is still scored, the second is never read
        assert_eq!(status, SessionStatus::Aborted);
        assert_eq!(game.attempts_used(), 1);
        assert_eq!(source.reads, 1);
        assert_eq!(presenter.scored(), 1);
    }

    #[test]
    fn read_failure_after_cancel_is_not_an_error() {
        let mut game = session("HOUND", 5);
        let cancel = CancelToken::new();
        let mut source = ScriptedSource::new(&[]);
        source.cancel_on_read = Some(cancel.clone());
        let mut presenter = Recorder::default();

        let status = game.run(&mut source, &mut presenter, &cancel).unwrap();
        assert_eq!(status, SessionStatus::Aborted);
    }

    /// Reader that never produces a line, like an idle terminal
    struct IdleStdin;

    impl io::Read for IdleStdin {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            thread::sleep(Duration::from_secs(3600));
            Ok(0)
        }
    }

    #[test]
    fn cancel_from_another_thread_unblocks_waiting_read() {
        let mut game = session("HOUND", 5);
        let cancel = CancelToken::new();
        let mut source = ChannelSource::spawn(io::BufReader::new(IdleStdin), cancel.clone());
        let mut presenter = Recorder::default();

        let remote = cancel.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(30));
            remote.cancel();
        });

        let status = game.run(&mut source, &mut presenter, &cancel).unwrap();

        assert_eq!(status, SessionStatus::Aborted);
        assert_eq!(game.attempts_used(), 0);
        assert_eq!(
            presenter.events,
            vec![Event::Round(1), Event::Finished(SessionStatus::Aborted, 0)]
        );
    }

    #[test]
    fn submit_tracks_attempts_and_history() {
        let mut game = session("WATER", 5);

        assert_eq!(
            game.submit("ab1").unwrap(),
            RoundOutcome::Rejected(GuessError::InvalidWordData)
        );
        assert_eq!(game.attempts_used(), 0);

        let outcome = game.submit("otter").unwrap();
        assert_eq!(
            outcome,
            RoundOutcome::Scored {
                guess: Word::new("OTTER").unwrap(),
                feedback: "AAEEE".parse().unwrap(),
            }
        );
        assert_eq!(game.attempts_used(), 1);

        assert!(matches!(
            game.submit("water").unwrap(),
            RoundOutcome::Won { .. }
        ));
        assert_eq!(game.status(), SessionStatus::Won);
        assert_eq!(game.history().len(), 2);
        assert_eq!(game.history()[0].0.text(), "OTTER");
    }

    #[test]
    fn rejections_are_player_input_errors() {
        let mut game = session("WATER", 5);
        for raw in ["", "wat3r", "abc", "waters"] {
            match game.submit(raw).unwrap() {
                RoundOutcome::Rejected(err) => assert!(err.is_input_error(), "{raw:?}"),
                other => panic!("{raw:?} was not rejected: {other:?}"),
            }
        }
        assert_eq!(game.attempts_used(), 0);
    }

    #[test]
    fn finished_session_rejects_further_rounds() {
        let mut game = session("WATER", 1);
        assert!(matches!(
            game.submit("otter").unwrap(),
            RoundOutcome::Lost { .. }
        ));
        assert!(matches!(
            game.submit("water"),
            Err(SessionError::Finished(SessionStatus::Lost))
        ));

        // Abort does not overwrite a terminal state
        game.abort();
        assert_eq!(game.status(), SessionStatus::Lost);
    }

    #[test]
    fn abort_moves_in_progress_to_aborted() {
        let mut game = session("WATER", 5);
        game.abort();
        assert_eq!(game.status(), SessionStatus::Aborted);
        assert!(matches!(
            game.submit("water"),
            Err(SessionError::Finished(SessionStatus::Aborted))
        ));
    }

    #[test]
    fn secret_must_match_configured_length() {
        let secret = Word::new("HOUNDS").unwrap();
        let err = GameSession::new(secret, GameConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            SessionError::SecretLength {
                expected: 5,
                actual: 6,
                ..
            }
        ));

        let secret = Word::new("HOUND").unwrap();
        assert!(matches!(
            GameSession::new(secret, GameConfig::new(5, 0)),
            Err(SessionError::NoAttempts)
        ));
    }
}
