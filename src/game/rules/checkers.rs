use super::{PlannedMove, Verdict};
use crate::error::{IllegalMove, MoveError};
use crate::game::{Cell, Grid, Player, Position};

pub const SIZE: usize = 8;

/// Rows each player starts on
const HOME_ROWS: [(Player, [usize; 2]); 2] = [(Player::A, [0, 1]), (Player::B, [6, 7])];

/// Simplified checkers: men only, no kings, no forced captures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CheckersRules;

impl CheckersRules {
    /// Row delta of a single forward step. A moves up the board, B down.
    pub fn forward(player: Player) -> isize {
        match player {
            Player::A => 1,
            Player::B => -1,
        }
    }

    /// Pieces sit on squares whose column and row share parity.
    pub fn is_dark_square(pos: Position) -> bool {
        pos.x % 2 == pos.y % 2
    }

    pub fn initial_grid(&self) -> Grid {
        Grid::from_fn(SIZE, SIZE, |pos| {
            if !Self::is_dark_square(pos) {
                return Cell::Empty;
            }
            HOME_ROWS
                .iter()
                .find(|(_, rows)| rows.contains(&pos.y))
                .map_or(Cell::Empty, |(player, _)| player.to_cell())
        })
    }

    pub fn validate(
        &self,
        grid: &Grid,
        mover: Player,
        from: Position,
        to: Position,
    ) -> Result<PlannedMove, MoveError> {
        let origin = grid.get(from)?;
        if grid.is_occupied(to)? {
            return Err(IllegalMove::DestinationOccupied(to).into());
        }
        if origin.owner() != Some(mover) {
            return Err(IllegalMove::NotYourPiece(from).into());
        }

        let forward = Self::forward(mover);
        let (dx, dy) = from.delta_to(to);

        match (dx.abs(), dy) {
            (1, dy) if dy == forward => Ok(PlannedMove::Step { from, to }),
            (2, dy) if dy == 2 * forward => {
                let over = from
                    .offset(dx / 2, forward)
                    .ok_or(IllegalMove::BadDirection { from, to })?;
                if grid.get(over)?.owner() == Some(mover.other()) {
                    Ok(PlannedMove::Capture {
                        from,
                        to,
                        captured: over,
                    })
                } else {
                    Err(IllegalMove::NothingToCapture(over).into())
                }
            }
            _ => Err(IllegalMove::BadDirection { from, to }.into()),
        }
    }

    /// Destinations `mover` could legally reach from `from`
    pub fn legal_targets(&self, grid: &Grid, mover: Player, from: Position) -> Vec<Position> {
        let forward = Self::forward(mover);
        [(-1, forward), (1, forward), (-2, 2 * forward), (2, 2 * forward)]
            .into_iter()
            .filter_map(|(dx, dy)| from.offset(dx, dy))
            .filter(|&to| grid.contains(to))
            .filter(|&to| self.validate(grid, mover, from, to).is_ok())
            .collect()
    }

    /// A side with no pieces left has lost. When both sides are empty the
    /// second report stands.
    pub fn check_outcome(&self, grid: &Grid) -> Verdict {
        let mut verdict = Verdict::NoWinYet;
        if !grid.has_pieces(Player::A) {
            verdict = Verdict::Win(Player::B);
        }
        if !grid.has_pieces(Player::B) {
            verdict = Verdict::Win(Player::A);
        }
        verdict
    }
}
