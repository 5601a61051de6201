//! Combatant trait and implementations
//!
//! This module defines the Combatant trait and provides concrete implementations:
//! - AutomatedCombatant: picks uniformly random targets
//! - HumanCombatant: reads targets from a line-based input

use rand::rngs::SmallRng;

use crate::core::{BoardError, Coordinate, Grid, Shot};

/// Interface implemented by the two kinds of combatant.
///
/// A Combatant is responsible for:
/// - Selecting a target each time it is asked
/// - Hearing about rejected targets and resolved shots
pub trait Combatant<const N: usize> {
    /// Choose the next target. Errors are collaborator failures such as closed
    /// input, never rule violations.
    fn choose_target(&mut self, rng: &mut SmallRng) -> anyhow::Result<Coordinate>;

    /// Told when the enemy grid refused a target.
    fn report_rejected(&mut self, target: Coordinate, err: &BoardError) {
        log::debug!("target {} rejected: {}", target, err);
    }

    /// Told once a shot has been resolved.
    fn report_outcome(&mut self, _shot: &Shot) {}

    /// Fire at `enemy` until a target is accepted.
    ///
    /// Off-board and repeated targets are reported and a new target is chosen;
    /// the loop ends as soon as the grid resolves a shot. The returned shot's
    /// [`Shot::repeats_turn`] says whether this combatant moves again.
    ///
    /// Fails if every enemy cell has already been fired at, since no target
    /// could ever be accepted.
    fn take_turn(&mut self, rng: &mut SmallRng, enemy: &mut Grid<N>) -> anyhow::Result<Shot> {
        if !enemy.has_open_cells() {
            anyhow::bail!("no open cells left on the enemy grid");
        }
        loop {
            let target = self.choose_target(rng)?;
            match enemy.receive_shot(target) {
                Ok(outcome) => {
                    let shot = Shot { target, outcome };
                    self.report_outcome(&shot);
                    return Ok(shot);
                }
                Err(e) if e.is_retryable_shot() => self.report_rejected(target, &e),
                Err(e) => return Err(e.into()),
            }
        }
    }
}

// Re-export implementations
pub mod ai;
pub use ai::AutomatedCombatant;

pub mod cli;
pub use cli::{parse_target, HumanCombatant, InputError};
