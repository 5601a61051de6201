//! Random fleet placement with a global attempt budget.

use rand::Rng;

use crate::core::common::BoardError;
use crate::core::config::{FLEET, PLACEMENT_ATTEMPTS};
use crate::core::coordinate::Coordinate;
use crate::core::grid::Grid;
use crate::core::vessel::{Orientation, Vessel};

/// Places a fixed list of vessel lengths at random positions.
///
/// A late vessel may find no legal spot on a crowded grid, so instead of
/// backtracking the placer gives up after `max_attempts` tries across the
/// whole fleet and the grid is thrown away.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FleetPlacer {
    lengths: &'static [usize],
    max_attempts: usize,
}

impl FleetPlacer {
    pub const fn new(lengths: &'static [usize], max_attempts: usize) -> Self {
        Self {
            lengths,
            max_attempts,
        }
    }

    /// The standard ten-vessel fleet with the standard budget.
    pub const fn standard() -> Self {
        Self::new(&FLEET, PLACEMENT_ATTEMPTS)
    }

    /// Fill `grid` with the fleet and clear its placement reservations.
    ///
    /// On `PlacementBudgetExhausted` the grid holds a partial fleet and must be
    /// discarded.
    pub fn populate<R: Rng, const N: usize>(
        &self,
        grid: &mut Grid<N>,
        rng: &mut R,
    ) -> Result<(), BoardError> {
        let mut attempts = 0;
        for &length in self.lengths {
            loop {
                attempts += 1;
                if attempts > self.max_attempts {
                    return Err(BoardError::PlacementBudgetExhausted {
                        attempts: self.max_attempts,
                    });
                }
                // Anchors may land one past the last index; place_vessel rejects those.
                let anchor = Coordinate::new(
                    rng.random_range(0..=N as i32),
                    rng.random_range(0..=N as i32),
                );
                let orientation = if rng.random() {
                    Orientation::Horizontal
                } else {
                    Orientation::Vertical
                };
                match grid.place_vessel(Vessel::new(anchor, length, orientation)) {
                    Ok(()) => break,
                    Err(BoardError::InvalidPlacement) => continue,
                    Err(e) => return Err(e),
                }
            }
        }
        log::debug!("fleet placed after {} attempts", attempts);
        grid.reset_attempts();
        Ok(())
    }

    /// Populate fresh grids until one succeeds.
    pub fn build<R: Rng, const N: usize>(&self, rng: &mut R) -> Grid<N> {
        let mut discarded = 0usize;
        loop {
            let mut grid = Grid::new();
            match self.populate(&mut grid, rng) {
                Ok(()) => {
                    if discarded > 0 {
                        log::debug!("discarded {} grids before a full placement", discarded);
                    }
                    return grid;
                }
                Err(e) => {
                    discarded += 1;
                    log::debug!("restarting placement: {}", e);
                }
            }
        }
    }
}

impl Default for FleetPlacer {
    fn default() -> Self {
        Self::standard()
    }
}
