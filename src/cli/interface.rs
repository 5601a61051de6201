use std::fmt::Write as _;

use crate::core::{Cell, Grid, Side};

fn glyph(cell: Cell, hidden: bool) -> char {
    match cell {
        Cell::Empty => '_',
        Cell::Ship if hidden => '_',
        Cell::Ship => '■',
        Cell::Hit => 'X',
        Cell::Miss | Cell::Clearance => '.',
    }
}

/// Render a grid as text. Hidden grids show vessel cells as water.
pub fn render_grid<const N: usize>(grid: &Grid<N>) -> String {
    let mut out = String::from("   ");
    for c in 0..N {
        let _ = write!(out, " {:>2} ", c);
    }
    for (r, row) in grid.cells().iter().enumerate() {
        let _ = write!(out, "\n{:>2} |", r);
        for &cell in row {
            let _ = write!(out, " {} |", glyph(cell, grid.is_hidden()));
        }
    }
    out
}

/// Display the player's own grid (top) and the enemy grid (bottom).
pub fn print_boards<const N: usize>(own: &Grid<N>, enemy: &Grid<N>) {
    println!("{}", "-".repeat(4 * N + 3));
    println!("Your board:");
    println!("{}", render_grid(own));
    println!("{}", "-".repeat(4 * N + 3));
    println!("Enemy board:");
    println!("{}", render_grid(enemy));
    println!("{}", "-".repeat(4 * N + 3));
}

pub fn print_greeting() {
    println!("╔══════════════════════════════════════╗");
    println!("║              SEA  BATTLE             ║");
    println!("╚══════════════════════════════════════╝");
    println!("Sink all ten enemy vessels before yours go down.");
}

pub fn print_rules() {
    println!("  input format: row col");
    println!("  row - row number, from 0");
    println!("  col - column number, from 0");
    println!("  a hit or a sinking earns another shot");
}

/// Announce the end of a match from the point of view of `human`.
pub fn print_outcome(winner: Side, human: Side) {
    if winner == human {
        println!("Victory! Every enemy vessel is on the sea bed.");
    } else {
        println!("Defeat. Your whole fleet has been sunk.");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Coordinate, Orientation, Vessel};

    #[test]
    fn hidden_grid_conceals_ships_only() {
        let mut grid = Grid::<3>::new();
        grid.place_vessel(Vessel::new(Coordinate::new(0, 0), 1, Orientation::Horizontal))
            .unwrap();
        grid.place_vessel(Vessel::new(Coordinate::new(2, 2), 1, Orientation::Horizontal))
            .unwrap();
        grid.reset_attempts();
        grid.receive_shot(Coordinate::new(2, 2)).unwrap();

        let shown = render_grid(&grid);
        assert!(shown.contains('■'));
        assert!(shown.contains('X'));

        grid.set_hidden(true);
        let concealed = render_grid(&grid);
        assert!(!concealed.contains('■'));
        assert!(concealed.contains('X'));
        assert_eq!(shown.replace('■', "_"), concealed);
    }

    #[test]
    fn one_line_per_row() {
        let grid = Grid::<4>::new();
        assert_eq!(render_grid(&grid).lines().count(), 5);
    }
}
