use std::fmt;

/// Stable identifier of a tile, assigned at creation (1-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileId(pub usize);

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Zero-based grid coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub row: usize,
    pub col: usize,
}

impl Point {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The point one step in `direction`, if it stays inside a `size`×`size` grid.
    pub fn step(self, direction: Direction, size: usize) -> Option<Self> {
        let (dr, dc) = direction.as_offset();
        let row = self.row as isize + dr;
        let col = self.col as isize + dc;

        if row >= 0 && row < size as isize && col >= 0 && col < size as isize {
            Some(Self::new(row as usize, col as usize))
        } else {
            None
        }
    }

    pub const fn linear_index(self, size: usize) -> usize {
        self.row * size + self.col
    }

    pub fn is_adjacent(self, other: Self) -> bool {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col) == 1
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArrayPosition {
    pub curr_index: usize,
    /// `None` until the tile takes part in its first swap.
    pub prev_index: Option<usize>,
}

/// 1-based row/column labels used for grid placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Boundary {
    pub row: String,
    pub column: String,
}

impl Boundary {
    pub fn from_point(point: Point) -> Self {
        Self {
            row: (point.row + 1).to_string(),
            column: (point.col + 1).to_string(),
        }
    }
}

/// Screen axis a draggable tile is constrained to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockAxis {
    X,
    Y,
}

impl fmt::Display for LockAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            LockAxis::X => "x",
            LockAxis::Y => "y",
        };
        write!(f, "{}", s)
    }
}

/// Side of the blank tile a neighbor sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Lookup order used when collecting the blank tile's neighbors.
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    /// `(row, col)` delta of one step in this direction.
    pub fn as_offset(&self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn lock_axis(&self) -> LockAxis {
        match self {
            Direction::Up | Direction::Down => LockAxis::Y,
            Direction::Left | Direction::Right => LockAxis::X,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            Direction::Up => "Up",
            Direction::Down => "Down",
            Direction::Left => "Left",
            Direction::Right => "Right",
        };
        write!(f, "{}", s)
    }
}

/// A single grid cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    pub id: TileId,
    pub label: String,
    pub point: Point,
    pub array_position: ArrayPosition,
    /// Labels computed at creation; swaps do not update them.
    pub boundary: Boundary,
    pub blank: bool,
    pub lock_axis: Option<LockAxis>,
    pub disabled: bool,
}

impl Tile {
    pub(crate) fn new(number: usize, point: Point, curr_index: usize) -> Self {
        Self {
            id: TileId(number),
            label: number.to_string(),
            point,
            array_position: ArrayPosition {
                curr_index,
                prev_index: None,
            },
            boundary: Boundary::from_point(point),
            blank: false,
            lock_axis: None,
            disabled: true,
        }
    }

    /// Boundary labels for the tile's current point, for layouts that track moves.
    pub fn current_boundary(&self) -> Boundary {
        Boundary::from_point(self.point)
    }

    pub fn is_draggable(&self) -> bool {
        !self.disabled
    }
}

#[cfg(test)]
#[path = "tile_test.rs"]
mod tests;
