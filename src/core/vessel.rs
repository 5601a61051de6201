//! Vessel definitions: a straight run of cells with health.

use std::fmt;

use crate::core::coordinate::Coordinate;

/// Orientation of a vessel on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Orientation {
    /// Cells extend along the row, column increasing.
    Horizontal,
    /// Cells extend down the column, row increasing.
    Vertical,
}

impl Orientation {
    /// Step from one occupied cell to the next, as (rows, cols).
    fn step(self) -> (i32, i32) {
        match self {
            Orientation::Horizontal => (0, 1),
            Orientation::Vertical => (1, 0),
        }
    }
}

/// A vessel anchored at a coordinate.
///
/// Construction never checks bounds; a candidate may hang off the grid and is
/// rejected by `Grid::place_vessel`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Vessel {
    anchor: Coordinate,
    length: usize,
    orientation: Orientation,
    health: usize,
}

impl Vessel {
    /// Create an undamaged vessel.
    pub fn new(anchor: Coordinate, length: usize, orientation: Orientation) -> Self {
        Self {
            anchor,
            length,
            orientation,
            health: length,
        }
    }

    /// The `length` cells starting at the anchor, in order.
    pub fn occupied_cells(&self) -> impl Iterator<Item = Coordinate> {
        let anchor = self.anchor;
        let (dr, dc) = self.orientation.step();
        (0..self.length as i32).map(move |i| anchor.offset(dr * i, dc * i))
    }

    /// Whether a shot at `target` would strike this vessel.
    pub fn is_hit_by(&self, target: Coordinate) -> bool {
        self.occupied_cells().any(|c| c == target)
    }

    /// Remove one point of health. Only the grid does this, once per fresh shot.
    pub(crate) fn take_hit(&mut self) {
        self.health = self.health.saturating_sub(1);
    }

    pub fn is_destroyed(&self) -> bool {
        self.health == 0
    }

    pub fn health(&self) -> usize {
        self.health
    }

    pub fn anchor(&self) -> Coordinate {
        self.anchor
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }
}

impl fmt::Debug for Vessel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Vessel {{ anchor: {}, length: {}, orientation: {:?}, health: {} }}",
            self.anchor, self.length, self.orientation, self.health,
        )
    }
}
