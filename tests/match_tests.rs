use std::collections::VecDeque;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::{
    AutomatedCombatant, BoardError, Combatant, Coordinate, FleetPlacer, Grid, Match, MatchState,
    Orientation, Shot, ShotOutcome, Side, StandardGrid, Vessel, FLEET_SIZE, TOTAL_FLEET_CELLS,
};

/// Fires at a fixed list of targets and remembers what it was told.
struct Scripted {
    targets: VecDeque<Coordinate>,
    rejected: Vec<Coordinate>,
}

impl Scripted {
    fn new(targets: impl IntoIterator<Item = Coordinate>) -> Self {
        Self {
            targets: targets.into_iter().collect(),
            rejected: Vec::new(),
        }
    }
}

impl<const N: usize> Combatant<N> for Scripted {
    fn choose_target(&mut self, _rng: &mut SmallRng) -> anyhow::Result<Coordinate> {
        self.targets
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("script exhausted"))
    }

    fn report_rejected(&mut self, target: Coordinate, _err: &BoardError) {
        self.rejected.push(target);
    }
}

fn grid_with(vessels: &[Vessel]) -> StandardGrid {
    let mut grid = Grid::new();
    for &v in vessels {
        grid.place_vessel(v).unwrap();
    }
    grid.reset_attempts();
    grid
}

fn at(row: i32, col: i32) -> Coordinate {
    Coordinate::new(row, col)
}

#[test]
fn test_hit_then_miss_gives_one_extra_turn() {
    let mut rng = SmallRng::seed_from_u64(0);
    let first_grid = grid_with(&[Vessel::new(at(9, 0), 2, Orientation::Horizontal)]);
    let second_grid = grid_with(&[Vessel::new(at(0, 0), 2, Orientation::Horizontal)]);
    let mut game: Match<10> = Match::new(
        Box::new(Scripted::new([at(0, 0), at(5, 5)])),
        first_grid,
        Box::new(Scripted::new([at(4, 4)])),
        second_grid,
    );

    assert_eq!(game.to_move(), Side::First);
    let t1 = game.step(&mut rng).unwrap().unwrap();
    assert_eq!((t1.side, t1.shot.outcome), (Side::First, ShotOutcome::Hit));
    assert_eq!(game.to_move(), Side::First);

    let t2 = game.step(&mut rng).unwrap().unwrap();
    assert_eq!((t2.side, t2.shot.outcome), (Side::First, ShotOutcome::Miss));
    assert_eq!(game.to_move(), Side::Second);

    let t3 = game.step(&mut rng).unwrap().unwrap();
    assert_eq!(t3.side, Side::Second);
    assert_eq!(game.to_move(), Side::First);
    assert_eq!(game.turns(), 3);
    assert_eq!(game.state(), MatchState::InProgress);
}

#[test]
fn test_sinking_keeps_the_move() {
    let mut rng = SmallRng::seed_from_u64(0);
    let mut game: Match<10> = Match::new(
        Box::new(Scripted::new([at(3, 3)])),
        grid_with(&[Vessel::new(at(9, 9), 1, Orientation::Vertical)]),
        Box::new(Scripted::new([])),
        grid_with(&[Vessel::new(at(3, 3), 1, Orientation::Vertical)]),
    );
    let turn = game.step(&mut rng).unwrap().unwrap();
    assert_eq!(turn.shot, Shot { target: at(3, 3), outcome: ShotOutcome::Sunk });
    assert!(turn.shot.repeats_turn());
    assert_eq!(game.to_move(), Side::First);
    assert_eq!(game.grid(Side::Second).destroyed_count(), 1);
}

#[test]
fn test_rejected_targets_are_retried_within_one_turn() {
    let mut rng = SmallRng::seed_from_u64(0);
    let mut combatant = Scripted::new([at(10, 0), at(0, 0), at(0, 0), at(0, 1)]);
    let mut grid = grid_with(&[Vessel::new(at(5, 5), 1, Orientation::Vertical)]);

    let shot = Combatant::<10>::take_turn(&mut combatant, &mut rng, &mut grid).unwrap();
    assert_eq!(shot.outcome, ShotOutcome::Miss);
    assert_eq!(shot.target, at(0, 0));
    assert!(!shot.repeats_turn());
    assert_eq!(combatant.rejected, vec![at(10, 0)]);

    let shot = Combatant::<10>::take_turn(&mut combatant, &mut rng, &mut grid).unwrap();
    assert_eq!(shot.target, at(0, 1));
    assert_eq!(combatant.rejected, vec![at(10, 0), at(0, 0)]);
}

#[test]
fn test_clearing_the_enemy_fleet_finishes_the_match() {
    let mut rng = SmallRng::seed_from_u64(99);
    let placer = FleetPlacer::standard();
    let first_grid: StandardGrid = placer.build(&mut rng);
    let second_grid: StandardGrid = placer.build(&mut rng);
    let targets: Vec<_> = second_grid
        .vessels()
        .iter()
        .flat_map(|v| v.occupied_cells())
        .collect();
    assert_eq!(targets.len(), TOTAL_FLEET_CELLS);

    let mut game: Match<10> = Match::new(
        Box::new(Scripted::new(targets)),
        first_grid,
        Box::new(Scripted::new([])),
        second_grid,
    );
    let winner = game.play(&mut rng).unwrap();
    assert_eq!(winner, Side::First);
    assert_eq!(game.winner(), Some(Side::First));
    assert_eq!(game.turns(), TOTAL_FLEET_CELLS);
    assert_eq!(game.grid(Side::Second).destroyed_count(), FLEET_SIZE);
    assert_eq!(game.grid(Side::First).destroyed_count(), 0);

    // Finished is terminal: nothing else is dispatched.
    assert!(game.step(&mut rng).unwrap().is_none());
    assert_eq!(game.turns(), TOTAL_FLEET_CELLS);
    assert_eq!(game.state(), MatchState::Finished { winner: Side::First });
}

#[test]
fn test_automated_match_runs_to_completion() {
    let mut rng = SmallRng::seed_from_u64(123);
    let placer = FleetPlacer::standard();
    let first: StandardGrid = placer.build(&mut rng);
    let second: StandardGrid = placer.build(&mut rng);
    let mut game: Match<10> = Match::new(
        Box::new(AutomatedCombatant::new()),
        first,
        Box::new(AutomatedCombatant::new()),
        second,
    );
    let winner = game.play(&mut rng).unwrap();
    let loser = winner.opponent();

    assert_eq!(game.grid(loser).destroyed_count(), game.target_score());
    assert!(game.grid(winner).destroyed_count() < game.target_score());
    // Each side can fire at most once per cell.
    assert!(game.turns() <= 2 * 100);
}

#[test]
fn test_script_failure_propagates() {
    let mut rng = SmallRng::seed_from_u64(0);
    let mut game: Match<10> = Match::new(
        Box::new(Scripted::new([])),
        grid_with(&[]),
        Box::new(Scripted::new([])),
        grid_with(&[]),
    );
    assert!(game.step(&mut rng).is_err());
    assert_eq!(game.turns(), 0);
    assert_eq!(game.state(), MatchState::InProgress);
}

#[test]
fn test_short_fleets_end_in_an_error_instead_of_spinning() {
    let mut rng = SmallRng::seed_from_u64(5);
    let mut game: Match<10> = Match::new(
        Box::new(AutomatedCombatant::new()),
        grid_with(&[Vessel::new(at(0, 0), 1, Orientation::Vertical)]),
        Box::new(AutomatedCombatant::new()),
        grid_with(&[Vessel::new(at(9, 9), 1, Orientation::Vertical)]),
    );
    // One vessel each can never reach the target score.
    assert!(game.play(&mut rng).is_err());
    assert_eq!(game.state(), MatchState::InProgress);
    let exhausted = [Side::First, Side::Second]
        .into_iter()
        .any(|side| !game.grid(side).has_open_cells());
    assert!(exhausted);
}

#[test]
fn test_take_turn_on_exhausted_grid_fails() {
    let mut rng = SmallRng::seed_from_u64(0);
    let mut grid = Grid::<1>::new();
    grid.receive_shot(at(0, 0)).unwrap();
    let mut combatant = Scripted::new([at(0, 0)]);
    assert!(Combatant::<1>::take_turn(&mut combatant, &mut rng, &mut grid).is_err());
    assert!(combatant.rejected.is_empty());
}
