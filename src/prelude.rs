//! Commonly used types and utilities for ease of import.

pub use crate::core::{
    BoardError, Coordinate, FleetPlacer, Grid, Match, MatchState, Orientation, Shot, ShotOutcome,
    Side, StandardGrid, Vessel, BOARD_SIZE, FLEET_SIZE,
};
pub use crate::player::{AutomatedCombatant, Combatant, HumanCombatant};
