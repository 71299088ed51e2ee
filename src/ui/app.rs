use crate::config::AppConfig;
use crate::error::{ConfigError, IllegalMove, MoveError};
use crate::game::{GameKind, GameSession, GameStatus, MoveInput, MoveReport, Position};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::io;
use tracing::debug;

use super::board_widget::{Highlights, Palette};
use super::selection::{Click, Selection};

enum Screen {
    Menu { selected: GameKind },
    Playing(ActiveGame),
}

struct ActiveGame {
    session: GameSession,
    cursor: Position,
    selection: Selection,
}

impl ActiveGame {
    fn new(kind: GameKind) -> Self {
        let session = GameSession::new(kind);
        let cursor = match kind {
            GameKind::ConnectFour => Position::new(session.grid().width() / 2, 0),
            GameKind::Checkers => Position::new(1, 1),
        };
        ActiveGame {
            session,
            cursor,
            selection: Selection::default(),
        }
    }
}

pub struct App {
    screen: Screen,
    palette: Palette,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(config: &AppConfig) -> Result<Self, ConfigError> {
        Ok(App {
            screen: Screen::Menu {
                selected: config.game.default_kind,
            },
            palette: Palette::from_config(&config.players)?,
            should_quit: false,
            message: None,
        })
    }

    /// Skip the menu and start straight into a game
    pub fn with_game(mut self, kind: GameKind) -> Self {
        self.start(kind);
        self
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        B::Error: Into<io::Error>,
    {
        loop {
            terminal
                .draw(|f| self.render(f))
                .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
            self.should_quit = true;
            return;
        }

        match &mut self.screen {
            Screen::Menu { selected } => match key.code {
                KeyCode::Up | KeyCode::Down => {
                    *selected = match *selected {
                        GameKind::ConnectFour => GameKind::Checkers,
                        GameKind::Checkers => GameKind::ConnectFour,
                    };
                }
                KeyCode::Char('1') => *selected = GameKind::ConnectFour,
                KeyCode::Char('2') => *selected = GameKind::Checkers,
                KeyCode::Enter | KeyCode::Char(' ') => {
                    let kind = *selected;
                    self.start(kind);
                }
                _ => {}
            },
            Screen::Playing(game) => match key.code {
                KeyCode::Left => Self::move_cursor(game, -1, 0),
                KeyCode::Right => Self::move_cursor(game, 1, 0),
                KeyCode::Up => Self::move_cursor(game, 0, 1),
                KeyCode::Down => Self::move_cursor(game, 0, -1),
                KeyCode::Enter | KeyCode::Char(' ') => self.activate(),
                KeyCode::Char('r') => {
                    game.session.reset();
                    game.selection.clear();
                    self.message = Some("New game started!".to_string());
                }
                KeyCode::Char('m') => {
                    let kind = game.session.kind();
                    self.screen = Screen::Menu { selected: kind };
                }
                _ => {}
            },
        }
    }

    fn start(&mut self, kind: GameKind) {
        debug!(game = %kind, "starting game");
        self.screen = Screen::Playing(ActiveGame::new(kind));
        self.message = None;
    }

    fn move_cursor(game: &mut ActiveGame, dx: isize, dy: isize) {
        // Connect Four only ever aims at a column
        let dy = if game.session.kind() == GameKind::ConnectFour {
            0
        } else {
            dy
        };
        if let Some(next) = game.cursor.offset(dx, dy) {
            if game.session.grid().contains(next) {
                game.cursor = next;
            }
        }
    }

    /// Enter/space on the board
    fn activate(&mut self) {
        let Screen::Playing(game) = &mut self.screen else {
            return;
        };

        let Some(mover) = game.session.current_player() else {
            self.message = Some("Game over! Press 'r' to restart.".to_string());
            return;
        };

        let input = match game.session.kind() {
            GameKind::ConnectFour => MoveInput::Drop {
                column: game.cursor.x,
            },
            GameKind::Checkers => {
                match game.selection.click(game.session.grid(), mover, game.cursor) {
                    Click::Move { from, to } => MoveInput::Jump { from, to },
                    Click::WrongTurn(player) => {
                        self.message = Some(format!("{}'s turn!", self.palette.name(player)));
                        return;
                    }
                    Click::Selected(_) | Click::Cleared | Click::Ignored => return,
                }
            }
        };

        match game.session.submit_move(input) {
            Ok(report) => {
                game.selection.clear();
                self.message = Self::report_message(&self.palette, &report);
            }
            Err(MoveError::IllegalMove(IllegalMove::ColumnFull { .. })) => {
                self.message = Some("Column is full!".to_string());
            }
            Err(MoveError::GameOver(_)) => {
                self.message = Some("Game is over!".to_string());
            }
            Err(err) => {
                self.message = Some(format!("Invalid move: {err}"));
            }
        }
    }

    fn report_message(palette: &Palette, report: &MoveReport) -> Option<String> {
        match report.status {
            GameStatus::InProgress => None,
            GameStatus::Won(player) => Some(format!("{} wins!", palette.name(player))),
            GameStatus::Tied => Some("It's a tie!".to_string()),
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        match &self.screen {
            Screen::Menu { selected } => {
                super::game_view::render_menu(frame, *selected, &self.message)
            }
            Screen::Playing(game) => {
                let targets = game
                    .selection
                    .selected()
                    .map(|from| game.session.legal_targets(from))
                    .unwrap_or_default();
                let highlights = Highlights {
                    cursor: Some(game.cursor),
                    selected: game.selection.selected(),
                    targets: &targets,
                };
                super::game_view::render_game(
                    frame,
                    &game.session,
                    &self.palette,
                    highlights,
                    &self.message,
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Cell, GameOutcome, Player};

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::from(code));
    }

    fn session(app: &App) -> &GameSession {
        match &app.screen {
            Screen::Playing(game) => &game.session,
            Screen::Menu { .. } => panic!("not playing"),
        }
    }

    #[test]
    fn test_menu_starts_selected_game() {
        let mut app = App::new(&AppConfig::default()).unwrap();
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert_eq!(session(&app).kind(), GameKind::Checkers);

        press(&mut app, KeyCode::Char('m'));
        assert!(matches!(
            app.screen,
            Screen::Menu {
                selected: GameKind::Checkers
            }
        ));
        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Enter);
        assert_eq!(session(&app).kind(), GameKind::ConnectFour);
    }

    #[test]
    fn test_connect_four_win_message() {
        let mut app = App::new(&AppConfig::default())
            .unwrap()
            .with_game(GameKind::ConnectFour);

        // A in column 3, B in column 4, four times over
        for _ in 0..3 {
            press(&mut app, KeyCode::Enter);
            press(&mut app, KeyCode::Right);
            press(&mut app, KeyCode::Enter);
            press(&mut app, KeyCode::Left);
        }
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.message.as_deref(), Some("Player 1 wins!"));
        assert_eq!(
            session(&app).outcome(),
            Some(GameOutcome::Winner(Player::A))
        );

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.message.as_deref(), Some("Game over! Press 'r' to restart."));

        press(&mut app, KeyCode::Char('r'));
        assert!(!session(&app).is_terminal());
        assert_eq!(session(&app).move_count(), 0);
    }

    #[test]
    fn test_full_column_message() {
        let mut app = App::new(&AppConfig::default())
            .unwrap()
            .with_game(GameKind::ConnectFour);
        for _ in 0..6 {
            press(&mut app, KeyCode::Enter);
        }
        assert_eq!(app.message, None);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.message.as_deref(), Some("Column is full!"));
    }

    #[test]
    fn test_checkers_select_and_move() {
        let mut app = App::new(&AppConfig::default())
            .unwrap()
            .with_game(GameKind::Checkers);

        // cursor starts on (1,1): pick it up, move to (2,2)
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Enter);

        let session = session(&app);
        assert_eq!(session.current_player(), Some(Player::B));
        assert_eq!(
            session.grid().get(Position::new(2, 2)).unwrap(),
            Cell::Occupied(Player::A)
        );
        assert_eq!(session.grid().get(Position::new(1, 1)).unwrap(), Cell::Empty);
    }

    #[test]
    fn test_checkers_wrong_turn_message() {
        let mut app = App::new(&AppConfig::default())
            .unwrap()
            .with_game(GameKind::Checkers);

        // walk the cursor up to (1,7), a piece of player 2
        for _ in 0..6 {
            press(&mut app, KeyCode::Up);
        }
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.message.as_deref(), Some("Player 1's turn!"));
    }

    #[test]
    fn test_checkers_illegal_destination_keeps_selection() {
        let mut app = App::new(&AppConfig::default())
            .unwrap()
            .with_game(GameKind::Checkers);

        press(&mut app, KeyCode::Enter); // select (1,1)
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Up); // (1,3)
        press(&mut app, KeyCode::Enter);

        assert!(app
            .message
            .as_deref()
            .is_some_and(|msg| msg.starts_with("Invalid move:")));
        match &app.screen {
            Screen::Playing(game) => {
                assert_eq!(game.selection.selected(), Some(Position::new(1, 1)));
                assert_eq!(game.session.current_player(), Some(Player::A));
            }
            Screen::Menu { .. } => panic!("not playing"),
        }
    }

    #[test]
    fn test_cursor_stays_on_board() {
        let mut app = App::new(&AppConfig::default())
            .unwrap()
            .with_game(GameKind::ConnectFour);
        for _ in 0..10 {
            press(&mut app, KeyCode::Right);
        }
        match &app.screen {
            Screen::Playing(game) => assert_eq!(game.cursor, Position::new(6, 0)),
            Screen::Menu { .. } => panic!("not playing"),
        }
    }

    #[test]
    fn test_quit() {
        let mut app = App::new(&AppConfig::default()).unwrap();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }
}
