//! TUI rendering with ratatui
//!
//! Board, keyboard and status panels for the game interface.

use super::app::{App, InputMode, MessageStyle};
use crate::core::LetterClass;
use crate::game::SessionStatus;
use crate::output::formatters::create_progress_bar;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};
use rustc_hash::FxHashMap;

const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50), // Board
            Constraint::Percentage(50), // Keyboard + messages
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🟩 WORDLE 🟨")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn class_style(class: LetterClass) -> Style {
    let bg = match class {
        LetterClass::Exact => Color::Green,
        LetterClass::Present => Color::Yellow,
        LetterClass::Absent => Color::DarkGray,
    };
    Style::default()
        .fg(Color::Black)
        .bg(bg)
        .add_modifier(Modifier::BOLD)
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let session = &app.session;
    let word_length = session.config().word_length;
    let history = session.history();

    let mut lines = Vec::with_capacity(session.max_attempts() * 2);
    for row in 0..session.max_attempts() {
        let spans: Vec<Span> = if let Some((guess, feedback)) = history.get(row) {
            guess
                .letters()
                .iter()
                .zip(feedback.iter())
                .flat_map(|(letter, class)| {
                    [
                        Span::styled(format!(" {letter} "), class_style(class)),
                        Span::raw(" "),
                    ]
                })
                .collect()
        } else if row == history.len() && session.status() == SessionStatus::InProgress {
            // Row being typed
            let typed: Vec<char> = app.input_buffer.chars().collect();
            (0..word_length.max(typed.len()))
                .flat_map(|i| {
                    let text = typed
                        .get(i)
                        .map_or_else(|| " _ ".to_string(), |c| format!(" {} ", c.to_uppercase()));
                    [
                        Span::styled(
                            text,
                            Style::default()
                                .fg(Color::White)
                                .add_modifier(Modifier::BOLD),
                        ),
                        Span::raw(" "),
                    ]
                })
                .collect()
        } else {
            (0..word_length)
                .flat_map(|_| {
                    [
                        Span::styled(" · ", Style::default().fg(Color::DarkGray)),
                        Span::raw(" "),
                    ]
                })
                .collect()
        };
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(format!(
                " Board {}/{} ",
                session.attempts_used(),
                session.max_attempts()
            ))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    if app.input_mode == InputMode::GameOver {
        let rows = u16::try_from(app.config.max_attempts).unwrap_or(u16::MAX);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(8),                      // Keyboard
                Constraint::Length(rows.saturating_add(2)), // Distribution
                Constraint::Min(3),                         // Messages
            ])
            .split(area);

        render_keyboard(f, app, chunks[0]);
        render_distribution(f, app, chunks[1]);
        render_messages(f, app, chunks[2]);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(8), // Keyboard
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    render_keyboard(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

/// Wins per number of guesses, one bar per attempt count
fn render_distribution(f: &mut Frame, app: &App, area: Rect) {
    let distribution = &app.stats.guess_distribution;
    let most = distribution.iter().copied().max().unwrap_or(0);
    let last_win =
        (app.session.status() == SessionStatus::Won).then_some(app.session.attempts_used());

    let lines: Vec<Line> = distribution
        .iter()
        .enumerate()
        .skip(1)
        .map(|(guesses, &count)| {
            let bar = create_progress_bar(count as f64, most as f64, 20);
            let style = if last_win == Some(guesses) {
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            Line::from(Span::styled(format!("{guesses}: {bar} {count}"), style))
        })
        .collect();

    let panel = Paragraph::new(lines).block(
        Block::default()
            .title(" Guess Distribution ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(panel, area);
}

fn keyboard_span(letter: char, hints: &FxHashMap<char, LetterClass>) -> Span<'static> {
    let style = hints
        .get(&letter)
        .map_or_else(|| Style::default().fg(Color::White), |&class| class_style(class));
    Span::styled(format!(" {letter} "), style)
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let hints = app.letter_hints();

    let mut lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| Line::from(row.chars().map(|c| keyboard_span(c, &hints)).collect::<Vec<_>>()))
        .collect();

    // Letters outside the Latin keyboard (e.g. Ä, Ж) get their own row
    let mut extra: Vec<char> = hints
        .keys()
        .copied()
        .filter(|c| !KEYBOARD_ROWS.iter().any(|row| row.contains(*c)))
        .collect();
    extra.sort_unstable();
    if !extra.is_empty() {
        lines.push(Line::from(
            extra
                .into_iter()
                .map(|c| keyboard_span(c, &hints))
                .collect::<Vec<_>>(),
        ));
    }

    let keyboard = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Letters ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(keyboard, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::GameOver => (
            " Game over | Press 'n' for new game or 'q' to quit ",
            "",
            Color::Green,
        ),
        InputMode::Guessing => (
            " Type your guess | Enter to submit | Esc to quit ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let status_text = format!("Game: {}", app.session.status());
    f.render_widget(
        Paragraph::new(status_text).alignment(Alignment::Center),
        chunks[0],
    );

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.win_rate()
    );
    f.render_widget(
        Paragraph::new(stats_text).alignment(Alignment::Center),
        chunks[1],
    );

    let attempts_text = format!("Attempts left: {}", app.session.attempts_left());
    f.render_widget(
        Paragraph::new(attempts_text).alignment(Alignment::Center),
        chunks[2],
    );

    let help_text = match app.input_mode {
        InputMode::GameOver => "q: Quit | n: New Game",
        InputMode::Guessing => "Enter: Submit | Esc/Ctrl+C: Quit",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
