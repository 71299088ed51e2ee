use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::config::PlayersConfig;
use crate::error::ConfigError;
use crate::game::{Cell, GameKind, Grid, Player, Position};

const PIECE: &str = " \u{25cf} ";
const TARGET: &str = " \u{00b7} ";

/// Player names and piece colours, resolved once from the config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    players: [(String, Color); 2],
}

impl Palette {
    pub fn from_config(players: &PlayersConfig) -> Result<Self, ConfigError> {
        Ok(Palette {
            players: [
                (players.a.name.clone(), players.a.color()?),
                (players.b.name.clone(), players.b.color()?),
            ],
        })
    }

    pub fn name(&self, player: Player) -> &str {
        &self.players[slot(player)].0
    }

    pub fn color(&self, player: Player) -> Color {
        self.players[slot(player)].1
    }
}

fn slot(player: Player) -> usize {
    match player {
        Player::A => 0,
        Player::B => 1,
    }
}

/// Cursor and selection overlays drawn on top of the cells.
#[derive(Debug, Clone, Copy, Default)]
pub struct Highlights<'a> {
    /// Column marker (Connect Four) or cell cursor (Checkers)
    pub cursor: Option<Position>,
    pub selected: Option<Position>,
    pub targets: &'a [Position],
}

/// Build the board as text lines, top row first.
pub fn board_lines(
    grid: &Grid,
    kind: GameKind,
    palette: &Palette,
    highlights: Highlights<'_>,
) -> Vec<Line<'static>> {
    let cursor_x = highlights.cursor.map(|pos| pos.x);
    let mut lines = Vec::with_capacity(grid.height() + 4);

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw("   ")];
    for x in 0..grid.width() {
        let label = format!(" {} ", x + 1);
        if Some(x) == cursor_x {
            col_line.push(Span::styled(
                label,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(label));
        }
    }
    col_line.push(Span::raw("  "));
    lines.push(Line::from(col_line));

    let rule = "\u{2550}".repeat(3 * grid.width() + 1);
    lines.push(Line::from(format!("  \u{2554}{rule}\u{2557}")));

    for y in (0..grid.height()).rev() {
        let prefix = match kind {
            GameKind::ConnectFour => "  \u{2551}".to_string(),
            GameKind::Checkers => format!("{:>2}\u{2551}", y + 1),
        };
        let mut row_spans = vec![Span::raw(prefix)];

        for x in 0..grid.width() {
            let pos = Position::new(x, y);
            let cell = grid.get(pos).unwrap_or_default();
            row_spans.push(cell_span(pos, cell, kind, palette, &highlights));
        }

        row_spans.push(Span::raw(" \u{2551}"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from(format!("  \u{255a}{rule}\u{255d}")));

    if kind == GameKind::ConnectFour {
        let mut indicator_line = vec![Span::raw("   ")];
        for x in 0..grid.width() {
            if Some(x) == cursor_x {
                indicator_line.push(Span::styled(" \u{25b2} ", Style::default().fg(Color::Cyan)));
            } else {
                indicator_line.push(Span::raw("   "));
            }
        }
        indicator_line.push(Span::raw("  "));
        lines.push(Line::from(indicator_line));
    }

    lines
}

fn cell_span(
    pos: Position,
    cell: Cell,
    kind: GameKind,
    palette: &Palette,
    highlights: &Highlights<'_>,
) -> Span<'static> {
    let mut style = Style::default();
    if kind == GameKind::Checkers && crate::game::rules::CheckersRules::is_dark_square(pos) {
        style = style.bg(Color::DarkGray);
    }

    let symbol = match cell {
        Cell::Occupied(player) => {
            style = style.fg(palette.color(player));
            PIECE
        }
        Cell::Empty if highlights.targets.contains(&pos) => {
            style = style.fg(Color::Cyan);
            TARGET
        }
        Cell::Empty if kind == GameKind::ConnectFour => {
            style = style.fg(Color::DarkGray);
            " . "
        }
        Cell::Empty => "   ",
    };

    if kind == GameKind::Checkers {
        if highlights.selected == Some(pos) {
            style = style.bg(Color::Cyan).add_modifier(Modifier::BOLD);
        }
        if highlights.cursor == Some(pos) {
            style = style.add_modifier(Modifier::REVERSED);
        }
    }

    Span::styled(symbol, style)
}

/// Render the board centred in the given area.
pub fn render_board(
    frame: &mut Frame,
    grid: &Grid,
    kind: GameKind,
    palette: &Palette,
    highlights: Highlights<'_>,
    area: Rect,
) {
    let lines = board_lines(grid, kind, palette, highlights);
    let widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(widget, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameSession;

    fn palette() -> Palette {
        Palette::from_config(&PlayersConfig::default()).unwrap()
    }

    fn text(line: &Line<'_>) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    #[test]
    fn test_palette_from_config() {
        let palette = palette();
        assert_eq!(palette.name(Player::A), "Player 1");
        assert_eq!(palette.color(Player::B), Color::Blue);
    }

    #[test]
    fn test_connect_four_lines() {
        let mut session = GameSession::new(GameKind::ConnectFour);
        session
            .submit_move(crate::game::MoveInput::Drop { column: 2 })
            .unwrap();

        let highlights = Highlights {
            cursor: Some(Position::new(2, 0)),
            ..Highlights::default()
        };
        let lines = board_lines(session.grid(), GameKind::ConnectFour, &palette(), highlights);

        // header, top border, six rows, bottom border, indicator
        assert_eq!(lines.len(), 10);
        assert_eq!(text(&lines[1]), format!("  \u{2554}{}\u{2557}", "\u{2550}".repeat(22)));

        // the bottom row is drawn last, just above the border
        let bottom = text(&lines[7]);
        assert!(bottom.contains(PIECE));
        assert_eq!(text(&lines[2]).matches(" . ").count(), 7);

        let indicator = text(&lines[9]);
        assert_eq!(indicator.find('\u{25b2}'), Some(3 + 2 * 3 + 1));
    }

    #[test]
    fn test_checkers_lines_show_targets() {
        let session = GameSession::new(GameKind::Checkers);
        let targets = session.legal_targets(Position::new(1, 1));
        let highlights = Highlights {
            cursor: Some(Position::new(1, 1)),
            selected: Some(Position::new(1, 1)),
            targets: &targets,
        };
        let lines = board_lines(session.grid(), GameKind::Checkers, &palette(), highlights);

        // header, top border, eight rows, bottom border
        assert_eq!(lines.len(), 11);
        // row 3 (index y = 2) holds the two reachable squares
        let row = text(&lines[2 + (7 - 2)]);
        assert!(row.starts_with(" 3"));
        assert_eq!(row.matches(TARGET).count(), 2);
        // home row of player 1 has four pieces
        assert_eq!(text(&lines[2 + 7]).matches(PIECE).count(), 4);
    }
}
