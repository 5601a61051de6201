/// Side length of the standard square grid.
pub const BOARD_SIZE: usize = 10;

/// Vessel lengths every side places, in placement order.
pub const FLEET: [usize; 10] = [4, 3, 3, 2, 2, 2, 1, 1, 1, 1];

/// Number of vessels per fleet; sinking this many ends the match.
pub const FLEET_SIZE: usize = FLEET.len();

/// Placement attempts allowed for a whole fleet before the grid is discarded.
pub const PLACEMENT_ATTEMPTS: usize = 2000;

/// Total number of cells occupied by the standard fleet.
pub const TOTAL_FLEET_CELLS: usize = 4 + 3 + 3 + 2 + 2 + 2 + 1 + 1 + 1 + 1;
