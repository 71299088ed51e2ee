use crate::game::{Grid, Player, Position};

/// What a click on the checkers board means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Click {
    /// Own piece picked up
    Selected(Position),
    /// Selection dropped by clicking a piece again
    Cleared,
    /// Tried to pick up a piece while it is the other player's turn
    WrongTurn(Player),
    /// Piece and destination chosen; submit this move
    Move { from: Position, to: Position },
    Ignored,
}

/// Piece currently picked up by the player to move.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    piece: Option<Position>,
}

impl Selection {
    pub fn selected(&self) -> Option<Position> {
        self.piece
    }

    pub fn clear(&mut self) {
        self.piece = None;
    }

    pub fn click(&mut self, grid: &Grid, mover: Player, pos: Position) -> Click {
        let Ok(cell) = grid.get(pos) else {
            return Click::Ignored;
        };

        match (self.piece, cell.owner()) {
            (Some(_), Some(_)) => {
                self.piece = None;
                Click::Cleared
            }
            (None, Some(owner)) if owner != mover => Click::WrongTurn(mover),
            (None, Some(_)) => {
                self.piece = Some(pos);
                Click::Selected(pos)
            }
            (Some(from), None) => Click::Move { from, to: pos },
            (None, None) => Click::Ignored,
        }
    }
}
