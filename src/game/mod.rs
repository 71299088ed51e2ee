//! Core game logic: the shared grid, players, per-game rules, the turn state
//! machine and the session that ties them together.

mod grid;
mod player;
pub mod rules;
mod session;
mod turn;

pub use grid::{Cell, Grid, OutOfBounds, Position};
pub use player::Player;
pub use rules::{GameKind, GameOutcome, GameRules, MoveInput, PlannedMove, Verdict};
pub use session::{GameSession, GameStatus, MoveReport};
pub use turn::{TurnController, TurnState};
