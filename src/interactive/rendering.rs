//! TUI rendering with ratatui
//!
//! Board, keyboard and status panels for the Numberle game.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{ALPHABET, EQUATION_LEN, KeyState, Mark};
use crate::game::MAX_ATTEMPTS;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

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
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🔢 NUMBERLE - Guess the Equation")
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

const fn mark_style(mark: Mark) -> Style {
    match mark {
        Mark::Exact => Style::new().fg(Color::Black).bg(Color::Green),
        Mark::Present => Style::new().fg(Color::Black).bg(Color::Yellow),
        Mark::Absent => Style::new().fg(Color::White).bg(Color::DarkGray),
    }
}

const fn key_style(state: KeyState) -> Style {
    match state {
        KeyState::Exact => Style::new().fg(Color::Black).bg(Color::Green),
        KeyState::Misplaced => Style::new().fg(Color::Black).bg(Color::Yellow),
        KeyState::Absent => Style::new().fg(Color::DarkGray),
        KeyState::Unused => Style::new().fg(Color::White),
    }
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let empty = Style::default().fg(Color::DarkGray);
    let mut lines = Vec::with_capacity(MAX_ATTEMPTS as usize * 2);

    for row in 0..MAX_ATTEMPTS as usize {
        let spans: Vec<Span> = if let Some(entry) = app.board.get(row) {
            entry
                .guess
                .chars()
                .enumerate()
                .flat_map(|(i, c)| {
                    [
                        Span::styled(format!(" {c} "), mark_style(entry.feedback.mark(i))),
                        Span::raw(" "),
                    ]
                })
                .collect()
        } else if row == app.board.len() && app.input_mode == InputMode::Playing {
            // Row being typed
            let typed: Vec<char> = app.input_buffer.chars().collect();
            (0..EQUATION_LEN)
                .flat_map(|i| {
                    let cell = typed.get(i).map_or_else(|| " · ".to_string(), |c| format!(" {c} "));
                    [
                        Span::styled(cell, Style::default().add_modifier(Modifier::BOLD)),
                        Span::raw(" "),
                    ]
                })
                .collect()
        } else {
            (0..EQUATION_LEN)
                .flat_map(|_| [Span::styled(" · ", empty), Span::raw(" ")])
                .collect()
        };

        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Keyboard
            Constraint::Length(3), // Attempts gauge
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    render_keyboard(f, app, chunks[0]);
    render_attempts(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let knowledge = app.session.knowledge();
    let key = |c: char| {
        [
            Span::styled(format!(" {c} "), key_style(knowledge.state_of(c))),
            Span::raw(" "),
        ]
    };

    let (digits, operators) = ALPHABET.split_at(10);
    let lines = vec![
        Line::from(digits.iter().flat_map(|&c| key(c)).collect::<Vec<_>>()),
        Line::from(operators.iter().flat_map(|&c| key(c)).collect::<Vec<_>>()),
    ];

    let keyboard = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Symbols ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(keyboard, area);
}

fn render_attempts(f: &mut Frame, app: &App, area: Rect) {
    let used = app.session.attempts_used();
    let percent = u16::from(used) * 100 / u16::from(MAX_ATTEMPTS);

    let gauge = Gauge::default()
        .block(Block::default().title(" Attempts ").borders(Borders::ALL))
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent)
        .label(format!(
            "{used}/{MAX_ATTEMPTS} used | {} remaining",
            app.session.attempts_remaining()
        ));
    f.render_widget(gauge, area);
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
        InputMode::Playing => (
            " Enter Equation (7 symbols) | Enter: Submit | Ctrl-N: New Game | Esc: Quit ",
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
            Constraint::Percentage(33),
            Constraint::Percentage(34),
            Constraint::Percentage(33),
        ])
        .split(area);

    let mode_text = if app.session.config().strict_validation {
        "Mode: Strict"
    } else {
        "Mode: Lenient"
    };
    let mode = Paragraph::new(mode_text).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.win_rate()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let target_text = app
        .session
        .target()
        .map_or_else(|| "Target: hidden".to_string(), |t| format!("Target: {t}"));
    let target = Paragraph::new(target_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(target, chunks[2]);
}
