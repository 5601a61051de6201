use std::fmt;

/// Offsets of the 8-neighbourhood around a cell.
const NEIGHBOUR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A position on a grid, `row` first.
///
/// Coordinates are plain values: they are never bounds checked here, so a
/// coordinate may well lie off the board. `Grid` decides what is in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Coordinate {
    pub row: i32,
    pub col: i32,
}

impl Coordinate {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Coordinate shifted by `dr` rows and `dc` columns.
    pub const fn offset(self, dr: i32, dc: i32) -> Self {
        Self {
            row: self.row + dr,
            col: self.col + dc,
        }
    }

    /// The eight surrounding coordinates, unclipped.
    pub fn neighbours(self) -> impl Iterator<Item = Coordinate> {
        NEIGHBOUR_OFFSETS
            .into_iter()
            .map(move |(dr, dc)| self.offset(dr, dc))
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
