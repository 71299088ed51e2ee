//! Per-game rules selected when a session is created: initial layout, move
//! validation and outcome detection.

mod checkers;
mod connect_four;

use std::fmt;

pub use checkers::CheckersRules;
pub use connect_four::ConnectFourRules;

use super::{Cell, Grid, Player, Position};
use crate::error::{IllegalMove, MoveError};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum GameKind {
    #[default]
    ConnectFour,
    Checkers,
}

impl GameKind {
    pub const ALL: [GameKind; 2] = [GameKind::ConnectFour, GameKind::Checkers];

    pub fn name(self) -> &'static str {
        match self {
            GameKind::ConnectFour => "Connect Four",
            GameKind::Checkers => "Checkers",
        }
    }
}

impl fmt::Display for GameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A move as submitted by the front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveInput {
    /// Drop a piece into a column (Connect Four)
    Drop { column: usize },
    /// Move a piece from one cell to another (Checkers)
    Jump { from: Position, to: Position },
}

impl MoveInput {
    fn kind_name(&self) -> &'static str {
        match self {
            MoveInput::Drop { .. } => "drop",
            MoveInput::Jump { .. } => "piece",
        }
    }
}

/// Result of scanning the grid after a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    NoWinYet,
    Win(Player),
    Tie,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Tie,
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOutcome::Winner(player) => write!(f, "{player} wins!"),
            GameOutcome::Tie => f.write_str("It's a tie!"),
        }
    }
}

/// A validated move, ready to be applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlannedMove {
    Place {
        target: Position,
    },
    Step {
        from: Position,
        to: Position,
    },
    Capture {
        from: Position,
        to: Position,
        captured: Position,
    },
}

impl PlannedMove {
    pub fn is_capture(&self) -> bool {
        matches!(self, PlannedMove::Capture { .. })
    }

    pub fn captured(&self) -> Option<Position> {
        match *self {
            PlannedMove::Capture { captured, .. } => Some(captured),
            _ => None,
        }
    }

    /// Cell changes this move makes for `mover`, in application order.
    pub fn mutations(&self, mover: Player) -> Vec<(Position, Cell)> {
        match *self {
            PlannedMove::Place { target } => vec![(target, mover.to_cell())],
            PlannedMove::Step { from, to } => vec![(from, Cell::Empty), (to, mover.to_cell())],
            PlannedMove::Capture { from, to, captured } => vec![
                (from, Cell::Empty),
                (to, mover.to_cell()),
                (captured, Cell::Empty),
            ],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameRules {
    ConnectFour(ConnectFourRules),
    Checkers(CheckersRules),
}

impl GameRules {
    pub fn for_kind(kind: GameKind) -> Self {
        match kind {
            GameKind::ConnectFour => GameRules::ConnectFour(ConnectFourRules),
            GameKind::Checkers => GameRules::Checkers(CheckersRules),
        }
    }

    pub fn kind(&self) -> GameKind {
        match self {
            GameRules::ConnectFour(_) => GameKind::ConnectFour,
            GameRules::Checkers(_) => GameKind::Checkers,
        }
    }

    /// Board a fresh game starts from
    pub fn initial_grid(&self) -> Grid {
        match self {
            GameRules::ConnectFour(rules) => rules.initial_grid(),
            GameRules::Checkers(rules) => rules.initial_grid(),
        }
    }

    /// Check `input` for `mover` against the current grid without mutating it.
    pub fn validate(
        &self,
        grid: &Grid,
        mover: Player,
        input: MoveInput,
    ) -> Result<PlannedMove, MoveError> {
        match (self, input) {
            (GameRules::ConnectFour(rules), MoveInput::Drop { column }) => {
                rules.validate(grid, column)
            }
            (GameRules::Checkers(rules), MoveInput::Jump { from, to }) => {
                rules.validate(grid, mover, from, to)
            }
            (rules, input) => Err(IllegalMove::WrongInput {
                input: input.kind_name(),
                game: rules.kind().name(),
            }
            .into()),
        }
    }

    /// Scan the grid right after `mover` has moved
    pub fn check_outcome(&self, grid: &Grid, mover: Player) -> Verdict {
        match self {
            GameRules::ConnectFour(rules) => rules.check_outcome(grid, mover),
            GameRules::Checkers(rules) => rules.check_outcome(grid),
        }
    }
}
