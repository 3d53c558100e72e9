use serde::Serialize;

/// Grid coordinate. Rows and columns are never negative.
pub type Coordinate = u64;

/// Discrete simulation time.
pub type Time = u64;

/// Manhattan distance between `(ax, ay)` and `(bx, by)`.
#[inline]
pub fn distance(ax: Coordinate, ay: Coordinate, bx: Coordinate, by: Coordinate) -> u64 {
    ax.abs_diff(bx) + ay.abs_diff(by)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Position {
    pub x: Coordinate,
    pub y: Coordinate,
}

impl Position {
    pub const ORIGIN: Position = Position { x: 0, y: 0 };

    pub const fn new(x: Coordinate, y: Coordinate) -> Self {
        Position { x, y }
    }

    #[inline]
    pub fn distance_to(&self, to: &Position) -> u64 {
        distance(self.x, self.y, to.x, to.y)
    }
}

impl From<(Coordinate, Coordinate)> for Position {
    fn from((x, y): (Coordinate, Coordinate)) -> Self {
        Position { x, y }
    }
}
