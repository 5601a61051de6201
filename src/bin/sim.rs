use rand::{rngs::SmallRng, SeedableRng};
use seabattle::{AutomatedCombatant, FleetPlacer, Match, Side, StandardGrid, BOARD_SIZE};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    seabattle::init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!(
            "Usage: {} <seed> <games>",
            args.first().map_or("sim", String::as_str)
        );
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let games: usize = args[2].parse()?;

    let mut rng = SmallRng::seed_from_u64(seed);
    let placer = FleetPlacer::standard();
    let mut results = Vec::with_capacity(games);
    let (mut first_wins, mut second_wins) = (0usize, 0usize);

    for _ in 0..games {
        let first: StandardGrid = placer.build(&mut rng);
        let second: StandardGrid = placer.build(&mut rng);
        let mut game: Match<BOARD_SIZE> = Match::new(
            Box::new(AutomatedCombatant::new()),
            first,
            Box::new(AutomatedCombatant::new()),
            second,
        );
        let winner = game.play(&mut rng)?;
        match winner {
            Side::First => first_wins += 1,
            Side::Second => second_wins += 1,
        }
        results.push(json!({
            "winner": winner,
            "turns": game.turns(),
            "first_destroyed": game.grid(Side::First).destroyed_count(),
            "second_destroyed": game.grid(Side::Second).destroyed_count(),
        }));
    }

    let summary = json!({
        "seed": seed,
        "games": results,
        "first_wins": first_wins,
        "second_wins": second_wins,
        "winner": if first_wins >= second_wins { "first" } else { "second" },
    });

    println!("{}", serde_json::to_string(&summary)?);
    Ok(())
}
