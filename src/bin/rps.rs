//! Terminal front end.
//!
//! Plays the drill interactively: shows the opponent's gesture and the
//! objective, asks for a gesture, and offers another game at the end.

use anyhow::Result;
use clap::Parser;
use dialoguer::{Confirm, Select};
use rps_trainer::{view, GameConfig, GameRng, Gesture, RoundEngine};

#[derive(Parser, Debug)]
#[command(name = "rps", about = "Beat the game's gesture, or lose to it on purpose")]
struct Args {
    /// RNG seed, for replaying a game
    #[arg(long)]
    seed: Option<u64>,

    /// Rounds per game
    #[arg(long, default_value_t = rps_trainer::core::config::DEFAULT_ROUNDS,
          value_parser = clap::value_parser!(u32).range(1..))]
    rounds: u32,

    /// Stop after one game
    #[arg(long)]
    once: bool,

    /// Print each finished game's summary as JSON
    #[arg(long)]
    json: bool,

    /// Log every scored round
    #[arg(short, long)]
    verbose: bool,
}

fn log(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    // Only fails if a logger is already set.
    let _ = simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    );
}

/// Play rounds until the game ends.
fn play(engine: &mut RoundEngine) -> Result<()> {
    let items: Vec<String> = Gesture::ALL
        .iter()
        .map(|g| format!("{} {}", g.glyph(), g))
        .collect();

    while !engine.is_game_over() {
        println!();
        println!("{}", view::opponent_line(engine));
        println!("{}", view::round_line(engine));
        println!("{}", view::score_line(engine));

        let selection = Select::new()
            .with_prompt(view::prompt(engine))
            .items(&items)
            .default(0)
            .interact()?;

        let choice = Gesture::ALL[selection];
        let delta = engine.submit_choice(choice);
        println!("{} {}", choice.glyph(), view::delta_feedback(delta));
    }

    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    log(args.verbose);

    let rng = match args.seed {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_entropy(),
    };
    let seed = rng.seed();

    let config = GameConfig::new().with_rounds(args.rounds);
    let mut engine = RoundEngine::with_config(config, rng);

    println!("{}", view::TITLE);
    println!("{}", view::seed_line(seed));

    loop {
        play(&mut engine)?;

        println!();
        println!("Game Over");
        println!("{}", view::game_over_message(&engine));
        println!("{}", view::seed_line(seed));
        if args.json {
            println!("{}", serde_json::to_string(&engine.summary())?);
        }

        if args.once {
            break;
        }
        let again = Confirm::new()
            .with_prompt("Play again?")
            .default(true)
            .interact()?;
        if !again {
            break;
        }
        engine.new_game();
    }

    Ok(())
}
