use tracing::trace;

use super::{PlannedMove, Verdict};
use crate::error::{IllegalMove, MoveError};
use crate::game::{Grid, OutOfBounds, Player, Position};

pub const WIDTH: usize = 7;
pub const HEIGHT: usize = 6;
const RUN_LENGTH: isize = 4;

/// Right, up, rising diagonal, falling diagonal
const DIRECTIONS: [(isize, isize); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConnectFourRules;

impl ConnectFourRules {
    pub fn initial_grid(&self) -> Grid {
        Grid::new(WIDTH, HEIGHT)
    }

    /// The piece lands on the lowest empty row of the column.
    pub fn validate(&self, grid: &Grid, column: usize) -> Result<PlannedMove, MoveError> {
        if column >= grid.width() {
            return Err(OutOfBounds {
                pos: Position::new(column, 0),
                width: grid.width(),
                height: grid.height(),
            }
            .into());
        }

        let row = grid
            .column_first_empty_row(column)
            .ok_or(IllegalMove::ColumnFull { column })?;

        Ok(PlannedMove::Place {
            target: Position::new(column, row),
        })
    }

    /// Scan every origin row by row, trying each direction, for a run of four
    /// belonging to `mover`.
    pub fn check_outcome(&self, grid: &Grid, mover: Player) -> Verdict {
        for y in 0..grid.height() {
            for x in 0..grid.width() {
                let origin = Position::new(x, y);
                for (dx, dy) in DIRECTIONS {
                    if is_run(grid, origin, dx, dy, mover) {
                        trace!(%origin, dx, dy, "winning run");
                        return Verdict::Win(mover);
                    }
                }
            }
        }

        if grid.is_full() {
            Verdict::Tie
        } else {
            Verdict::NoWinYet
        }
    }
}

/// True if all `RUN_LENGTH` cells from `origin` along `(dx, dy)` are on the
/// grid and owned by `player`.
fn is_run(grid: &Grid, origin: Position, dx: isize, dy: isize, player: Player) -> bool {
    (0..RUN_LENGTH).all(|step| {
        origin
            .offset(dx * step, dy * step)
            .and_then(|pos| grid.get(pos).ok())
            .is_some_and(|cell| cell.owner() == Some(player))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Cell;

    fn drop_piece(grid: &mut Grid, column: usize, player: Player) -> Position {
        let target = match ConnectFourRules.validate(grid, column).unwrap() {
            PlannedMove::Place { target } => target,
            other => panic!("unexpected move {other:?}"),
        };
        grid.set(target, player.to_cell()).unwrap();
        target
    }

    #[test]
    fn test_drop_lands_on_lowest_empty_row() {
        let mut grid = ConnectFourRules.initial_grid();
        assert_eq!(drop_piece(&mut grid, 3, Player::A), Position::new(3, 0));
        assert_eq!(drop_piece(&mut grid, 3, Player::B), Position::new(3, 1));
        assert_eq!(grid.get(Position::new(3, 1)).unwrap(), Cell::Occupied(Player::B));
    }

    #[test]
    fn test_every_column_fills_then_rejects() {
        for column in 0..WIDTH {
            let mut grid = ConnectFourRules.initial_grid();
            for row in 0..HEIGHT {
                assert_eq!(drop_piece(&mut grid, column, Player::A), Position::new(column, row));
            }
            assert_eq!(
                ConnectFourRules.validate(&grid, column),
                Err(MoveError::IllegalMove(IllegalMove::ColumnFull { column }))
            );
        }
    }

    #[test]
    fn test_invalid_column() {
        let grid = ConnectFourRules.initial_grid();
        assert!(matches!(
            ConnectFourRules.validate(&grid, WIDTH),
            Err(MoveError::OutOfBounds(_))
        ));
    }

    #[test]
    fn test_horizontal_win() {
        let mut grid = ConnectFourRules.initial_grid();
        for column in 0..3 {
            drop_piece(&mut grid, column, Player::A);
            assert_eq!(ConnectFourRules.check_outcome(&grid, Player::A), Verdict::NoWinYet);
        }
        drop_piece(&mut grid, 3, Player::A);
        assert_eq!(ConnectFourRules.check_outcome(&grid, Player::A), Verdict::Win(Player::A));
    }

    #[test]
    fn test_vertical_win_four_in_one_column() {
        let mut grid = ConnectFourRules.initial_grid();
        for _ in 0..3 {
            drop_piece(&mut grid, 3, Player::A);
            assert_eq!(ConnectFourRules.check_outcome(&grid, Player::A), Verdict::NoWinYet);
        }
        drop_piece(&mut grid, 3, Player::A);
        assert_eq!(ConnectFourRules.check_outcome(&grid, Player::A), Verdict::Win(Player::A));
    }

    #[test]
    fn test_rising_diagonal_win() {
        let mut grid = ConnectFourRules.initial_grid();
        drop_piece(&mut grid, 0, Player::A);

        drop_piece(&mut grid, 1, Player::B);
        drop_piece(&mut grid, 1, Player::A);

        drop_piece(&mut grid, 2, Player::B);
        drop_piece(&mut grid, 2, Player::B);
        drop_piece(&mut grid, 2, Player::A);

        drop_piece(&mut grid, 3, Player::B);
        drop_piece(&mut grid, 3, Player::B);
        drop_piece(&mut grid, 3, Player::B);
        assert_eq!(ConnectFourRules.check_outcome(&grid, Player::A), Verdict::NoWinYet);

        drop_piece(&mut grid, 3, Player::A);
        assert_eq!(ConnectFourRules.check_outcome(&grid, Player::A), Verdict::Win(Player::A));
    }

    #[test]
    fn test_falling_diagonal_win() {
        let mut grid = ConnectFourRules.initial_grid();
        drop_piece(&mut grid, 6, Player::B);

        drop_piece(&mut grid, 5, Player::A);
        drop_piece(&mut grid, 5, Player::B);

        drop_piece(&mut grid, 4, Player::A);
        drop_piece(&mut grid, 4, Player::A);
        drop_piece(&mut grid, 4, Player::B);

        drop_piece(&mut grid, 3, Player::A);
        drop_piece(&mut grid, 3, Player::A);
        drop_piece(&mut grid, 3, Player::A);
        assert_eq!(ConnectFourRules.check_outcome(&grid, Player::B), Verdict::NoWinYet);

        drop_piece(&mut grid, 3, Player::B);
        assert_eq!(ConnectFourRules.check_outcome(&grid, Player::B), Verdict::Win(Player::B));
    }

    #[test]
    fn test_only_mover_pieces_count() {
        let mut grid = ConnectFourRules.initial_grid();
        for column in 0..4 {
            drop_piece(&mut grid, column, Player::B);
        }
        assert_eq!(ConnectFourRules.check_outcome(&grid, Player::A), Verdict::NoWinYet);
        assert_eq!(ConnectFourRules.check_outcome(&grid, Player::B), Verdict::Win(Player::B));
    }

    #[test]
    fn test_run_may_not_wrap_off_the_edge() {
        let mut grid = ConnectFourRules.initial_grid();
        for column in 4..WIDTH {
            drop_piece(&mut grid, column, Player::A);
        }
        // three on the right edge plus one on the left edge of the next row
        grid.set(Position::new(0, 1), Player::A.to_cell()).unwrap();
        assert_eq!(ConnectFourRules.check_outcome(&grid, Player::A), Verdict::NoWinYet);
    }

    #[test]
    fn test_full_board_without_win_is_tie() {
        // Column pairs AABBAA / BBAABB never line up four in any direction.
        let grid = Grid::from_fn(WIDTH, HEIGHT, |pos| {
            let band = (pos.y / 2 + pos.x) % 2;
            if band == 0 {
                Player::A.to_cell()
            } else {
                Player::B.to_cell()
            }
        });
        assert!(grid.is_full());
        assert_eq!(ConnectFourRules.check_outcome(&grid, Player::A), Verdict::Tie);
        assert_eq!(ConnectFourRules.check_outcome(&grid, Player::B), Verdict::Tie);
    }

    #[test]
    fn test_win_on_full_board_beats_tie() {
        let grid = Grid::from_fn(WIDTH, HEIGHT, |_| Player::A.to_cell());
        assert_eq!(ConnectFourRules.check_outcome(&grid, Player::A), Verdict::Win(Player::A));
    }
}
