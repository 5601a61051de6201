//! Game grid: fleet placement, clearance halos and shot resolution.

use std::fmt;

use crate::core::cellset::CellSet;
use crate::core::common::{BoardError, ShotOutcome};
use crate::core::config::BOARD_SIZE;
use crate::core::coordinate::Coordinate;
use crate::core::vessel::Vessel;

/// Display state of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Empty,
    /// Healthy vessel segment.
    Ship,
    /// Revealed clearance halo around a destroyed vessel.
    Clearance,
    Hit,
    Miss,
}

/// The standard 10×10 grid.
pub type StandardGrid = Grid<BOARD_SIZE>;

/// An `N×N` grid with its fleet.
///
/// The busy set holds every cell that is unavailable: during placement that is
/// ship cells plus their halos, during play it is every attempted shot plus
/// the revealed halos of destroyed vessels.
pub struct Grid<const N: usize> {
    cells: [[Cell; N]; N],
    busy: CellSet<N>,
    vessels: Vec<Vessel>,
    destroyed: usize,
    hidden: bool,
}

impl<const N: usize> Grid<N> {
    /// Create an empty grid with no vessels.
    pub fn new() -> Self {
        Grid {
            cells: [[Cell::Empty; N]; N],
            busy: CellSet::new(),
            vessels: Vec::new(),
            destroyed: 0,
            hidden: false,
        }
    }

    /// Side length of the grid.
    pub const fn size(&self) -> usize {
        N
    }

    /// `true` iff row or column lies outside `[0, N)`.
    pub fn is_out_of_bounds(&self, c: Coordinate) -> bool {
        Self::index(c).is_none()
    }

    fn index(c: Coordinate) -> Option<(usize, usize)> {
        let row = usize::try_from(c.row).ok()?;
        let col = usize::try_from(c.col).ok()?;
        (row < N && col < N).then_some((row, col))
    }

    /// Place a vessel, reserving its clearance halo.
    ///
    /// Fails without touching the grid if the vessel has no cells or any
    /// occupied cell is off the board or busy, which covers both overlapping
    /// vessels and touching halos.
    pub fn place_vessel(&mut self, vessel: Vessel) -> Result<(), BoardError> {
        if vessel.length() == 0 {
            return Err(BoardError::InvalidPlacement);
        }
        let mut occupied = Vec::with_capacity(vessel.length());
        for c in vessel.occupied_cells() {
            let (r, col) = Self::index(c).ok_or(BoardError::InvalidPlacement)?;
            if self.busy.contains(r, col)? {
                return Err(BoardError::InvalidPlacement);
            }
            occupied.push((r, col));
        }
        for &(r, c) in &occupied {
            self.cells[r][c] = Cell::Ship;
            self.busy.insert(r, c)?;
        }
        self.vessels.push(vessel);
        self.outline(&vessel, false)?;
        Ok(())
    }

    /// Mark the in-bounds 8-neighbourhood of `vessel` busy. With `reveal` the
    /// newly reserved cells are also shown as clearance.
    fn outline(&mut self, vessel: &Vessel, reveal: bool) -> Result<(), BoardError> {
        for cell in vessel.occupied_cells() {
            for n in cell.neighbours() {
                let Some((r, c)) = Self::index(n) else {
                    continue;
                };
                if self.busy.insert(r, c)? && reveal {
                    self.cells[r][c] = Cell::Clearance;
                }
            }
        }
        Ok(())
    }

    /// Forget placement reservations before play begins.
    pub fn reset_attempts(&mut self) {
        self.busy.clear();
    }

    /// Resolve an incoming shot.
    pub fn receive_shot(&mut self, target: Coordinate) -> Result<ShotOutcome, BoardError> {
        let (r, c) = Self::index(target).ok_or(BoardError::OutOfBounds {
            row: target.row,
            col: target.col,
        })?;
        if !self.busy.insert(r, c)? {
            return Err(BoardError::AlreadyAttempted {
                row: target.row,
                col: target.col,
            });
        }

        let Some(idx) = self.vessels.iter().position(|v| v.is_hit_by(target)) else {
            self.cells[r][c] = Cell::Miss;
            log::trace!("shot at {} missed", target);
            return Ok(ShotOutcome::Miss);
        };

        self.cells[r][c] = Cell::Hit;
        let vessel = &mut self.vessels[idx];
        vessel.take_hit();
        if !vessel.is_destroyed() {
            log::trace!("shot at {} hit vessel {}", target, idx);
            return Ok(ShotOutcome::Hit);
        }

        let vessel = *vessel;
        self.destroyed += 1;
        self.outline(&vessel, true)?;
        log::debug!(
            "shot at {} sank {:?} ({} destroyed)",
            target,
            vessel,
            self.destroyed
        );
        Ok(ShotOutcome::Sunk)
    }

    /// Number of destroyed vessels; never decreases.
    pub fn destroyed_count(&self) -> usize {
        self.destroyed
    }

    /// The fleet in placement order.
    pub fn vessels(&self) -> &[Vessel] {
        &self.vessels
    }

    /// Display state, row-major.
    pub fn cells(&self) -> &[[Cell; N]; N] {
        &self.cells
    }

    /// Display state of one cell, `None` off the board.
    pub fn cell(&self, c: Coordinate) -> Option<Cell> {
        Self::index(c).map(|(r, col)| self.cells[r][col])
    }

    /// Whether `c` is currently in the busy set.
    pub fn is_attempted(&self, c: Coordinate) -> bool {
        Self::index(c)
            .map(|(r, col)| self.busy.contains(r, col).unwrap_or(false))
            .unwrap_or(false)
    }

    /// Whether any cell can still be fired at.
    pub fn has_open_cells(&self) -> bool {
        self.busy.len() < N * N
    }

    /// Whether vessel cells are concealed when rendered.
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }
}

impl<const N: usize> Default for Grid<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> fmt::Debug for Grid<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Grid<{}> {{\n  busy: {:?},\n  vessels: {:?},\n  destroyed: {},\n  hidden: {}\n}}",
            N, self.busy, self.vessels, self.destroyed, self.hidden
        )
    }
}
