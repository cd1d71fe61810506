//! TUI rendering with ratatui
//!
//! Stateless projection of the session, keyboard and statistics.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{KEYBOARD_ROWS, Outcome};
use crate::game::{Cell, GuessValidator, MAX_ATTEMPTS, SessionState};
use crate::stats::StatsStorage;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui<V: GuessValidator, S: StatsStorage>(f: &mut Frame, app: &App<'_, V, S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(14),   // Board, keyboard and side panel
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let side = if app.show_stats { 45 } else { 0 };
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(100 - side),
            Constraint::Percentage(side),
        ])
        .split(chunks[1]);

    render_game_panel(f, app, main_chunks[0]);
    if app.show_stats {
        render_info_panel(f, app, main_chunks[1]);
    }

    render_status(f, app, chunks[2]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🌱 WORD GARDEN - Guess the Word")
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

fn outcome_style(outcome: Option<Outcome>) -> Style {
    let base = Style::default().add_modifier(Modifier::BOLD);
    match outcome {
        Some(Outcome::Correct) => base.fg(Color::Black).bg(Color::Green),
        Some(Outcome::Present) => base.fg(Color::Black).bg(Color::Yellow),
        Some(Outcome::Absent) => base.fg(Color::White).bg(Color::DarkGray),
        None => base.fg(Color::White),
    }
}

fn board_line(cells: &[Cell]) -> Line<'static> {
    let mut spans = Vec::with_capacity(cells.len() * 2);
    for cell in cells {
        let letter = cell.letter.map_or('·', char::from);
        spans.push(Span::styled(format!(" {letter} "), outcome_style(cell.outcome)));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn render_game_panel<V: GuessValidator, S: StatsStorage>(
    f: &mut Frame,
    app: &App<'_, V, S>,
    area: Rect,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(MAX_ATTEMPTS as u16 * 2 + 1), // Board
            Constraint::Min(5),                              // Keyboard
        ])
        .split(area);

    let mut lines = Vec::with_capacity(MAX_ATTEMPTS * 2);
    for cells in app.session.board() {
        lines.push(board_line(cells));
        lines.push(Line::from(""));
    }

    let title = match app.session.state() {
        SessionState::Filling => format!(" Attempt {}/{MAX_ATTEMPTS} ", app.session.row() + 1),
        SessionState::Won => " Solved! ".to_string(),
        SessionState::Lost => format!(" The word was {} ", app.session.solution()),
    };

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, chunks[0]);

    let keyboard = app.session.keyboard();
    let key_lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .bytes()
                .flat_map(|b| {
                    [
                        Span::styled(
                            format!(" {} ", char::from(b)),
                            outcome_style(keyboard.get(b)),
                        ),
                        Span::raw(" "),
                    ]
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let keys = Paragraph::new(key_lines)
        .alignment(Alignment::Center)
        .block(Block::default().title(" Keyboard ").borders(Borders::ALL));
    f.render_widget(keys, chunks[1]);
}

fn render_info_panel<V: GuessValidator, S: StatsStorage>(
    f: &mut Frame,
    app: &App<'_, V, S>,
    area: Rect,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(11), // Statistics
            Constraint::Min(5),     // Messages
        ])
        .split(area);

    render_stats(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_stats<V: GuessValidator, S: StatsStorage>(
    f: &mut Frame,
    app: &App<'_, V, S>,
    area: Rect,
) {
    let record = app.stats.record();
    // Label, spaces and count take about 8 columns
    let bar_space = usize::from(area.width.saturating_sub(10));

    let mut lines = vec![
        Line::from(format!(
            "Played {} | Won {} | {:.0}%",
            record.games_played(),
            record.games_won(),
            record.win_rate()
        )),
        Line::from(""),
    ];

    for row in record.histogram() {
        let width = (bar_space * usize::from(row.width_percent) / 100).max(1);
        let color = if row.is_failure {
            Color::Red
        } else {
            Color::Green
        };
        lines.push(Line::from(vec![
            Span::raw(format!("{} ", row.label)),
            Span::styled("█".repeat(width), Style::default().fg(color)),
            Span::raw(format!(" {}", row.count)),
        ]));
    }

    let stats = Paragraph::new(lines).block(
        Block::default()
            .title(" Statistics ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(stats, area);
}

fn render_messages<V: GuessValidator, S: StatsStorage>(
    f: &mut Frame,
    app: &App<'_, V, S>,
    area: Rect,
) {
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

fn render_status<V: GuessValidator, S: StatsStorage>(
    f: &mut Frame,
    app: &App<'_, V, S>,
    area: Rect,
) {
    let help_text = match app.input_mode {
        InputMode::Playing => "A-Z: Type | Enter: Submit | ←: Delete | Tab: Stats | Esc: Quit",
        InputMode::GameOver => "n: New Game | Tab: Stats | q: Quit",
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::TOP));
    f.render_widget(help, area);
}
