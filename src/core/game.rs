//! Match orchestration: turn holding and the win condition.

use rand::rngs::SmallRng;

use crate::core::common::Shot;
use crate::core::config::FLEET_SIZE;
use crate::core::grid::Grid;
use crate::player::Combatant;

/// One of the two seats at the table. `First` moves first; in an interactive
/// game it is the human.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    First,
    Second,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }
}

/// Current status of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchState {
    InProgress,
    Finished { winner: Side },
}

/// Record of one dispatched move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Turn {
    pub side: Side,
    pub shot: Shot,
}

struct Seat<const N: usize> {
    combatant: Box<dyn Combatant<N>>,
    grid: Grid<N>,
}

/// Two combatants, each with its own grid, firing at each other.
pub struct Match<const N: usize> {
    first: Seat<N>,
    second: Seat<N>,
    to_move: Side,
    turns: usize,
    target_score: usize,
    state: MatchState,
}

impl<const N: usize> Match<N> {
    /// Seat two combatants with their populated grids. `first` moves first.
    pub fn new(
        first: Box<dyn Combatant<N>>,
        first_grid: Grid<N>,
        second: Box<dyn Combatant<N>>,
        second_grid: Grid<N>,
    ) -> Self {
        Self {
            first: Seat {
                combatant: first,
                grid: first_grid,
            },
            second: Seat {
                combatant: second,
                grid: second_grid,
            },
            to_move: Side::First,
            turns: 0,
            target_score: FLEET_SIZE,
            state: MatchState::InProgress,
        }
    }

    /// Dispatch one move. Returns `None` once the match is finished.
    ///
    /// A miss hands the move to the other side; a hit or a sinking keeps it.
    pub fn step(&mut self, rng: &mut SmallRng) -> anyhow::Result<Option<Turn>> {
        if let MatchState::Finished { .. } = self.state {
            return Ok(None);
        }

        let side = self.to_move;
        let (attacker, defender) = match side {
            Side::First => (&mut self.first, &mut self.second),
            Side::Second => (&mut self.second, &mut self.first),
        };
        let shot = attacker.combatant.take_turn(rng, &mut defender.grid)?;
        self.turns += 1;

        if !shot.repeats_turn() {
            self.to_move = side.opponent();
        }
        log::debug!(
            "turn {}: {:?} fired at {} -> {:?}",
            self.turns,
            side,
            shot.target,
            shot.outcome
        );

        if self.second.grid.destroyed_count() >= self.target_score {
            self.finish(Side::First);
        } else if self.first.grid.destroyed_count() >= self.target_score {
            self.finish(Side::Second);
        }
        Ok(Some(Turn { side, shot }))
    }

    fn finish(&mut self, winner: Side) {
        log::info!("match finished after {} turns, {:?} wins", self.turns, winner);
        self.state = MatchState::Finished { winner };
    }

    /// Step until the match is decided and return the winner.
    pub fn play(&mut self, rng: &mut SmallRng) -> anyhow::Result<Side> {
        loop {
            if let MatchState::Finished { winner } = self.state {
                return Ok(winner);
            }
            self.step(rng)?;
        }
    }

    pub fn state(&self) -> MatchState {
        self.state
    }

    /// The winning side once finished.
    pub fn winner(&self) -> Option<Side> {
        match self.state {
            MatchState::Finished { winner } => Some(winner),
            MatchState::InProgress => None,
        }
    }

    /// Side whose combatant moves next.
    pub fn to_move(&self) -> Side {
        self.to_move
    }

    /// Number of moves dispatched so far.
    pub fn turns(&self) -> usize {
        self.turns
    }

    /// Destroyed vessels needed to win.
    pub fn target_score(&self) -> usize {
        self.target_score
    }

    /// The grid owned by `side`, i.e. the one its opponent fires at.
    pub fn grid(&self, side: Side) -> &Grid<N> {
        match side {
            Side::First => &self.first.grid,
            Side::Second => &self.second.grid,
        }
    }
}
