//! Core sea battle rules engine
//!
//! This module contains the board and ship domain model, the random fleet
//! placer and the match state machine. It has no knowledge of terminals or
//! stdin; presentation lives in `crate::cli` and `crate::player::cli`.

pub mod cellset;
pub mod common;
pub mod config;
pub mod coordinate;
pub mod game;
pub mod grid;
pub mod placer;
pub mod vessel;

// Re-export commonly used types
pub use cellset::{CellSet, CellSetError};
pub use common::{BoardError, Shot, ShotOutcome};
pub use config::*;
pub use coordinate::Coordinate;
pub use game::{Match, MatchState, Side, Turn};
pub use grid::{Cell, Grid, StandardGrid};
pub use placer::FleetPlacer;
pub use vessel::{Orientation, Vessel};
