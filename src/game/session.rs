use tracing::{debug, info, warn};

use super::{
    Cell, GameKind, GameOutcome, GameRules, Grid, MoveInput, Player, Position, TurnController,
    TurnState,
};
use crate::error::MoveError;

/// Player A always opens
const FIRST_PLAYER: Player = Player::A;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Player),
    Tied,
}

/// What an accepted move changed, for the front end to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveReport {
    pub mover: Player,
    /// Cell changes in application order
    pub mutations: Vec<(Position, Cell)>,
    /// Opponent piece removed by a capturing jump
    pub captured: Option<Position>,
    pub status: GameStatus,
    /// `None` once the game is over
    pub next_player: Option<Player>,
}

/// One game in progress: the grid, whose turn it is and how many moves
/// have been made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    rules: GameRules,
    grid: Grid,
    turn: TurnController,
    move_count: usize,
}

impl GameSession {
    /// Start a new game of the given kind
    pub fn new(kind: GameKind) -> Self {
        let rules = GameRules::for_kind(kind);
        info!(game = %kind, "new session");
        GameSession {
            grid: rules.initial_grid(),
            rules,
            turn: TurnController::new(FIRST_PLAYER),
            move_count: 0,
        }
    }

    pub fn kind(&self) -> GameKind {
        self.rules.kind()
    }

    /// Get reference to grid
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn move_count(&self) -> usize {
        self.move_count
    }

    pub fn turn_state(&self) -> TurnState {
        self.turn.state()
    }

    /// Player to move, `None` once the game is over
    pub fn current_player(&self) -> Option<Player> {
        self.turn.current_player()
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.turn.outcome()
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome().is_some()
    }

    pub fn status(&self) -> GameStatus {
        match self.outcome() {
            None => GameStatus::InProgress,
            Some(GameOutcome::Winner(player)) => GameStatus::Won(player),
            Some(GameOutcome::Tie) => GameStatus::Tied,
        }
    }

    /// Validate and apply a move. On error nothing about the session changes.
    pub fn submit_move(&mut self, input: MoveInput) -> Result<MoveReport, MoveError> {
        let mover = match self.turn.state() {
            TurnState::Turn(player) => player,
            TurnState::GameOver(outcome) => {
                warn!(?input, %outcome, "move submitted after game over");
                return Err(MoveError::GameOver(outcome));
            }
        };

        let planned = self
            .rules
            .validate(&self.grid, mover, input)
            .inspect_err(|err| warn!(?input, %mover, %err, "move rejected"))?;

        let mutations = planned.mutations(mover);
        let mut grid = self.grid.clone();
        for &(pos, cell) in &mutations {
            grid.set(pos, cell)?;
        }
        self.grid = grid;
        self.move_count += 1;

        let verdict = self.rules.check_outcome(&self.grid, mover);
        let state = self.turn.advance(planned.is_capture(), verdict);
        debug!(?planned, %mover, ?verdict, move_count = self.move_count, "move applied");
        if let TurnState::GameOver(outcome) = state {
            info!(game = %self.kind(), %outcome, moves = self.move_count, "game over");
        }

        Ok(MoveReport {
            mover,
            mutations,
            captured: planned.captured(),
            status: self.status(),
            next_player: self.current_player(),
        })
    }

    /// Discard the current game and start over with the same rules
    pub fn reset(&mut self) {
        info!(game = %self.kind(), moves = self.move_count, "session reset");
        self.grid = self.rules.initial_grid();
        self.turn = TurnController::new(FIRST_PLAYER);
        self.move_count = 0;
    }

    /// Columns that can still take a piece (Connect Four)
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.is_terminal() || self.kind() != GameKind::ConnectFour {
            return Vec::new();
        }
        (0..self.grid.width())
            .filter(|&column| self.grid.column_first_empty_row(column).is_some())
            .collect()
    }

    /// Cells the current player could move the piece at `from` to (Checkers)
    pub fn legal_targets(&self, from: Position) -> Vec<Position> {
        match (self.rules, self.current_player()) {
            (GameRules::Checkers(rules), Some(mover)) => {
                rules.legal_targets(&self.grid, mover, from)
            }
            _ => Vec::new(),
        }
    }
}
