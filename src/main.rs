use std::io::{self, BufRead, Write};

use clap::{Parser, Subcommand};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use seabattle::cli::{print_boards, print_greeting, print_outcome, print_rules, render_grid};
use seabattle::prelude::*;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the computer in this terminal.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, help = "Show the enemy fleet instead of hiding it")]
        reveal: bool,
        #[arg(long, help = "Skip the greeting and the rules question")]
        skip_intro: bool,
    },
    /// Watch two computer players fight it out.
    Watch {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

fn make_rng(seed: Option<u64>) -> SmallRng {
    if let Some(s) = seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    }
}

fn main() -> anyhow::Result<()> {
    seabattle::init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            seed,
            reveal,
            skip_intro,
        } => play(seed, reveal, skip_intro),
        Commands::Watch { seed } => watch(seed),
    }
}

fn play(seed: Option<u64>, reveal: bool, skip_intro: bool) -> anyhow::Result<()> {
    if !skip_intro {
        intro()?;
    }
    let mut rng = make_rng(seed);
    let placer = FleetPlacer::standard();
    let own: StandardGrid = placer.build(&mut rng);
    let mut enemy: StandardGrid = placer.build(&mut rng);
    enemy.set_hidden(!reveal);

    let human = HumanCombatant::new(io::stdin().lock(), io::stdout());
    let mut game: Match<BOARD_SIZE> = Match::new(
        Box::new(human),
        own,
        Box::new(AutomatedCombatant::new()),
        enemy,
    );

    while game.winner().is_none() {
        if game.to_move() == Side::First {
            print_boards(game.grid(Side::First), game.grid(Side::Second));
        }
        if let Some(turn) = game.step(&mut rng)? {
            if turn.side == Side::Second {
                println!(
                    "Enemy fires at {}: {:?}",
                    turn.shot.target, turn.shot.outcome
                );
            }
        }
    }

    print_boards(game.grid(Side::First), game.grid(Side::Second));
    if let Some(winner) = game.winner() {
        print_outcome(winner, Side::First);
    }
    Ok(())
}

fn intro() -> anyhow::Result<()> {
    print_greeting();
    print!("Do you remember the rules? (+/-): ");
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    if answer.trim() == "-" {
        print_rules();
    }
    Ok(())
}

fn watch(seed: Option<u64>) -> anyhow::Result<()> {
    let mut rng = make_rng(seed);
    let placer = FleetPlacer::standard();
    let first: StandardGrid = placer.build(&mut rng);
    let second: StandardGrid = placer.build(&mut rng);

    let mut game: Match<BOARD_SIZE> = Match::new(
        Box::new(AutomatedCombatant::new()),
        first,
        Box::new(AutomatedCombatant::new()),
        second,
    );
    while let Some(turn) = game.step(&mut rng)? {
        println!(
            "#{:<3} {:?} fires at {}: {:?}",
            game.turns(),
            turn.side,
            turn.shot.target,
            turn.shot.outcome
        );
    }

    println!("First fleet:\n{}", render_grid(game.grid(Side::First)));
    println!("Second fleet:\n{}", render_grid(game.grid(Side::Second)));
    if let Some(winner) = game.winner() {
        println!("{:?} wins after {} turns", winner, game.turns());
    }
    Ok(())
}
