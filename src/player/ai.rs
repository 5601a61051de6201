use rand::rngs::SmallRng;
use rand::Rng;

use crate::core::Coordinate;

use super::Combatant;

/// Computer opponent that fires at uniformly random cells.
///
/// It never aims off the board, so the only retries it sees come from cells
/// that were already attempted.
#[derive(Debug, Default, Clone, Copy)]
pub struct AutomatedCombatant;

impl AutomatedCombatant {
    pub fn new() -> Self {
        Self
    }
}

impl<const N: usize> Combatant<N> for AutomatedCombatant {
    fn choose_target(&mut self, rng: &mut SmallRng) -> anyhow::Result<Coordinate> {
        let target = Coordinate::new(
            rng.random_range(0..N as i32),
            rng.random_range(0..N as i32),
        );
        log::trace!("automated combatant aims at {}", target);
        Ok(target)
    }
}
