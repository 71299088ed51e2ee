use super::{GameOutcome, Player, Verdict};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnState {
    Turn(Player),
    GameOver(GameOutcome),
}

/// Decides who moves next. Once the game is over the state never changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnController {
    state: TurnState,
}

impl TurnController {
    pub fn new(first: Player) -> Self {
        TurnController {
            state: TurnState::Turn(first),
        }
    }

    pub fn state(&self) -> TurnState {
        self.state
    }

    /// Player to move, or `None` once the game is over
    pub fn current_player(&self) -> Option<Player> {
        match self.state {
            TurnState::Turn(player) => Some(player),
            TurnState::GameOver(_) => None,
        }
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        match self.state {
            TurnState::GameOver(outcome) => Some(outcome),
            TurnState::Turn(_) => None,
        }
    }

    /// Advance after a completed legal move.
    ///
    /// A capture keeps the turn with the mover. Nothing forces that player to
    /// capture again; the turn simply stays until they move.
    pub fn advance(&mut self, captured: bool, verdict: Verdict) -> TurnState {
        let TurnState::Turn(mover) = self.state else {
            return self.state;
        };

        self.state = match verdict {
            Verdict::Win(player) => TurnState::GameOver(GameOutcome::Winner(player)),
            Verdict::Tie => TurnState::GameOver(GameOutcome::Tie),
            Verdict::NoWinYet if captured => TurnState::Turn(mover),
            Verdict::NoWinYet => TurnState::Turn(mover.other()),
        };
        self.state
    }
}
