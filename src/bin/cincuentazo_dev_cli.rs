// src/bin/cincuentazo_dev_cli.rs

use cincuentazo_engine::api::build_session_view;
use cincuentazo_engine::domain::player::MachineStrategy;
use cincuentazo_engine::domain::{PlayerId, SessionConfig};
use cincuentazo_engine::engine::{
    check_eliminations, next_active_player, take_turn_with, GameSession, MachineTurn,
    RandomSource,
};
use cincuentazo_engine::infra::{DeterministicRng, SystemRng};
use clap::Parser;
use tracing::info;

#[derive(Parser)]
#[command(name = "cincuentazo_dev_cli")]
#[command(about = "Auto-played Cincuentazo game for manual inspection")]
struct Args {
    /// Number of machine players (1..=3)
    #[arg(short, long, default_value = "1")]
    machines: u8,

    /// Seed for a reproducible game
    #[arg(long)]
    seed: Option<u64>,

    /// Stop after this many turns even if nobody has won
    #[arg(long, default_value = "500")]
    max_turns: u32,

    /// Print the final session view as JSON
    #[arg(long)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let filter = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    println!("cincuentazo_dev_cli: стартуем авто-партию…");

    let config = SessionConfig::new(args.machines);
    match args.seed {
        Some(seed) => run(GameSession::new(config, DeterministicRng::from_seed(seed))?, &args),
        None => run(GameSession::new(config, SystemRng)?, &args),
    }
}

/// Все места (включая назначенного игрока) ходят по стратегии "первая подходящая".
fn run<R: RandomSource>(
    mut session: GameSession<R>,
    args: &Args,
) -> Result<(), Box<dyn std::error::Error>> {
    print_state(&session);

    let mut current: PlayerId = 0;
    let mut turns = 0u32;

    while !session.is_game_over() && turns < args.max_turns {
        turns += 1;
        let name = session.player(current)?.name.clone();

        match take_turn_with(&mut session, current, MachineStrategy::FirstPlayable)? {
            MachineTurn::Played {
                card,
                table_sum,
                drawn,
            } => {
                let drawn = drawn.map(|c| c.to_string()).unwrap_or_else(|| "-".into());
                println!("[{turns:>3}] {name}: сыграл {card}, сумма={table_sum}, добрал {drawn}");
            }
            MachineTurn::Passed => {
                println!("[{turns:>3}] {name}: пас (нечем ходить)");
            }
        }

        for id in check_eliminations(&mut session)? {
            println!("      {} выбывает", session.player(id)?.name);
        }

        match next_active_player(&session, current) {
            Some(next) => current = next,
            None => break,
        }
    }

    println!();
    print_state(&session);

    match session.winner() {
        Some(id) => info!(winner = %session.player(id)?.name, turns, "game finished"),
        None if session.is_game_over() => info!(turns, "game finished without a winner"),
        None => info!(turns, "turn limit reached"),
    }

    if args.json {
        let view = build_session_view(&session, |_| true);
        println!("{}", serde_json::to_string_pretty(&view)?);
    }

    Ok(())
}

fn print_state<R: RandomSource>(session: &GameSession<R>) {
    println!(
        "Стол: {} | сумма={} | колода={}",
        session.current_table_card(),
        session.table_sum(),
        session.deck_size()
    );
    for p in session.players() {
        let cards: Vec<String> = p.cards().iter().map(|c| c.to_string()).collect();
        let status = if p.eliminated { " (выбыл)" } else { "" };
        println!("  {}{}: [{}]", p.name, status, cards.join(" "));
    }
}
