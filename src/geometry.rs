//! Positions, directions and grid extents shared by the board and the bot.

/// Axis direction of a ship run or a probing step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Right,
    Down,
    Left,
    Up,
}

impl Direction {
    /// All four directions, in scan order.
    pub const ALL: [Direction; 4] = [
        Direction::Right,
        Direction::Down,
        Direction::Left,
        Direction::Up,
    ];

    /// The direction pointing the opposite way.
    pub fn inverse(self) -> Direction {
        match self {
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Up => Direction::Down,
        }
    }
}

/// A cell coordinate: `x` is the column, `y` the row. Coordinates are signed
/// because neighbor probes and bot walks may step off the grid; such
/// positions simply fail the bounds check.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Create a position at (`x`, `y`).
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The position `amount` cells away in `direction`.
    pub fn offset(self, direction: Direction, amount: i32) -> Position {
        match direction {
            Direction::Right => Position::new(self.x + amount, self.y),
            Direction::Down => Position::new(self.x, self.y + amount),
            Direction::Left => Position::new(self.x - amount, self.y),
            Direction::Up => Position::new(self.x, self.y - amount),
        }
    }

    /// The adjacent position one cell away in `direction`.
    pub fn step(self, direction: Direction) -> Position {
        self.offset(direction, 1)
    }
}

/// Width and height of a grid, fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimension {
    pub width: i32,
    pub height: i32,
}

impl Dimension {
    /// Create a dimension of `width` by `height` cells.
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Whether `pos` lies inside these extents.
    pub fn contains(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.width && pos.y >= 0 && pos.y < self.height
    }
}
