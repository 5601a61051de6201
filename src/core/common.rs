//! Common types for the rules engine: board errors and shot outcomes.

use crate::core::cellset::CellSetError;
use crate::core::coordinate::Coordinate;

/// Result of a shot that the grid accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ShotOutcome {
    /// No vessel at the target.
    Miss,
    /// A vessel was damaged but is still afloat.
    Hit,
    /// The shot destroyed the last healthy cell of a vessel.
    Sunk,
}

impl ShotOutcome {
    /// `Hit` and `Sunk` let the shooter move again; `Miss` passes the turn.
    pub fn grants_extra_turn(self) -> bool {
        matches!(self, ShotOutcome::Hit | ShotOutcome::Sunk)
    }
}

/// A resolved shot: where it landed and what it did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Shot {
    pub target: Coordinate,
    pub outcome: ShotOutcome,
}

impl Shot {
    /// Whether the shooter keeps the move.
    pub fn repeats_turn(&self) -> bool {
        self.outcome.grants_extra_turn()
    }
}

/// Errors returned by Grid and FleetPlacer operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// Shot target lies outside the grid.
    #[error("({row}, {col}) is off the board")]
    OutOfBounds { row: i32, col: i32 },
    /// Shot target was already fired at, or is a revealed clearance cell.
    #[error("({row}, {col}) has already been fired at")]
    AlreadyAttempted { row: i32, col: i32 },
    /// Vessel leaves the grid, overlaps a vessel or touches its clearance halo.
    #[error("vessel cannot be placed there")]
    InvalidPlacement,
    /// The random placer ran out of attempts; the grid must be discarded.
    #[error("fleet placement gave up after {attempts} attempts")]
    PlacementBudgetExhausted { attempts: usize },
    /// Underlying cell set error.
    #[error(transparent)]
    CellSet(#[from] CellSetError),
}

impl BoardError {
    /// Shot errors are settled by picking another target.
    pub fn is_retryable_shot(&self) -> bool {
        matches!(
            self,
            BoardError::OutOfBounds { .. } | BoardError::AlreadyAttempted { .. }
        )
    }
}
