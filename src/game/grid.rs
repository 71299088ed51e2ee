use std::fmt;

use super::Player;

/// A board coordinate as `(column, row)`. Row 0 is the bottom row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub const fn new(x: usize, y: usize) -> Self {
        Position { x, y }
    }

    /// Shift by a signed delta. `None` if either coordinate would go negative;
    /// the upper bound is checked by the grid.
    pub fn offset(self, dx: isize, dy: isize) -> Option<Position> {
        Some(Position {
            x: self.x.checked_add_signed(dx)?,
            y: self.y.checked_add_signed(dy)?,
        })
    }

    /// Signed `(dx, dy)` from `self` to `other`.
    pub fn delta_to(self, other: Position) -> (isize, isize) {
        (
            other.x as isize - self.x as isize,
            other.y as isize - self.y as isize,
        )
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(Player),
}

impl Cell {
    /// The player occupying this cell, if any
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// A coordinate outside the grid was used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("position {pos} is outside the {width}x{height} grid")]
pub struct OutOfBounds {
    pub pos: Position,
    pub width: usize,
    pub height: usize,
}

/// Fixed-size board of cells, stored column-major so that a column is a
/// contiguous slice from the bottom row upward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an empty grid
    pub fn new(width: usize, height: usize) -> Self {
        Grid {
            width,
            height,
            cells: vec![Cell::Empty; width * height],
        }
    }

    /// Create a grid whose cells are produced by `f`
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(Position) -> Cell) -> Self {
        let cells = (0..width)
            .flat_map(|x| (0..height).map(move |y| Position::new(x, y)))
            .map(&mut f)
            .collect();
        Grid {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.x < self.width && pos.y < self.height
    }

    fn index(&self, pos: Position) -> Result<usize, OutOfBounds> {
        if !self.contains(pos) {
            return Err(OutOfBounds {
                pos,
                width: self.width,
                height: self.height,
            });
        }
        Ok(pos.x * self.height + pos.y)
    }

    /// Get the cell at a specific position
    pub fn get(&self, pos: Position) -> Result<Cell, OutOfBounds> {
        self.index(pos).map(|i| self.cells[i])
    }

    /// Overwrite the cell at a position. Legality is the caller's concern.
    pub fn set(&mut self, pos: Position, cell: Cell) -> Result<(), OutOfBounds> {
        let i = self.index(pos)?;
        self.cells[i] = cell;
        Ok(())
    }

    pub fn is_occupied(&self, pos: Position) -> Result<bool, OutOfBounds> {
        self.get(pos).map(|cell| !cell.is_empty())
    }

    /// Lowest empty row in column `x`, or `None` if the column is full or
    /// does not exist.
    pub fn column_first_empty_row(&self, x: usize) -> Option<usize> {
        if x >= self.width {
            return None;
        }
        let column = &self.cells[x * self.height..(x + 1) * self.height];
        column.iter().position(|cell| cell.is_empty())
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Number of cells owned by `player`
    pub fn count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .filter(|cell| cell.owner() == Some(player))
            .count()
    }

    pub fn has_pieces(&self, player: Player) -> bool {
        self.cells.iter().any(|cell| cell.owner() == Some(player))
    }

    /// Iterate all positions with their cells, row by row from the bottom.
    pub fn iter(&self) -> impl Iterator<Item = (Position, Cell)> + '_ {
        (0..self.height).flat_map(move |y| {
            (0..self.width).map(move |x| {
                let pos = Position::new(x, y);
                (pos, self.cells[x * self.height + y])
            })
        })
    }
}
