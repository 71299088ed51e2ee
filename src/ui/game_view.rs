use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::board_widget::{self, Highlights, Palette};
use crate::game::{GameKind, GameSession, Player};

pub fn render_menu(frame: &mut Frame, selected: GameKind, message: &Option<String>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(6),    // Choices
            Constraint::Length(3), // Message
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    let header = Paragraph::new("Choose a game")
        .style(Style::default().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Board Games"));
    frame.render_widget(header, chunks[0]);

    let mut lines = vec![Line::from("")];
    for (i, kind) in GameKind::ALL.into_iter().enumerate() {
        let label = format!("{}. {}", i + 1, kind.name());
        if kind == selected {
            lines.push(Line::from(Span::styled(
                format!("\u{25b6} {label}"),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )));
        } else {
            lines.push(Line::from(format!("  {label}")));
        }
    }
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), chunks[1]);

    render_message(frame, message, chunks[2]);
    render_controls(
        frame,
        "\u{2191}/\u{2193}: Choose  |  1/2: Pick  |  Enter: Play  |  Q: Quit",
        chunks[3],
    );
}

pub fn render_game(
    frame: &mut Frame,
    session: &GameSession,
    palette: &Palette,
    highlights: Highlights<'_>,
    message: &Option<String>,
) {
    let kind = session.kind();
    let board_height = session.grid().height() as u16 + 4;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),         // Header
            Constraint::Min(board_height), // Board
            Constraint::Length(3),         // Message
            Constraint::Length(3),         // Controls
        ])
        .split(frame.area());

    render_header(frame, session, palette, chunks[0]);
    board_widget::render_board(frame, session.grid(), kind, palette, highlights, chunks[1]);
    render_message(frame, message, chunks[2]);

    let controls = match kind {
        GameKind::ConnectFour => {
            "\u{2190}/\u{2192}: Move  |  Enter: Drop  |  R: Restart  |  M: Menu  |  Q: Quit"
        }
        GameKind::Checkers => {
            "Arrows: Move  |  Enter: Select/Place  |  R: Restart  |  M: Menu  |  Q: Quit"
        }
    };
    render_controls(frame, controls, chunks[3]);
}

/// Both player labels, the one to move drawn on its own colour.
fn render_header(frame: &mut Frame, session: &GameSession, palette: &Palette, area: Rect) {
    let current = session.current_player();
    let mut spans = Vec::new();
    for player in [Player::A, Player::B] {
        let label = format!(" {} ", palette.name(player));
        let style = if current == Some(player) {
            Style::default()
                .fg(Color::Black)
                .bg(palette.color(player))
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.color(player))
        };
        spans.push(Span::styled(label, style));
        spans.push(Span::raw("   "));
    }

    let status = if session.is_terminal() {
        "Game Over".to_string()
    } else {
        format!("Move {}", session.move_count() + 1)
    };
    spans.push(Span::raw(status));

    let header = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(session.kind().name()),
        );

    frame.render_widget(header, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, text: &str, area: Rect) {
    let controls = Paragraph::new(Line::from(text.to_string()))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Controls"),
        );

    frame.render_widget(controls, area);
}
