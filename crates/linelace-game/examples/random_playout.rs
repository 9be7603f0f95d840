//! Example driving seeded sessions to completion.
//!
//! This example shows how to:
//! - Create a `Session` with a seeded random number generator
//! - Scan candidate poses and drop shapes until the session ends
//! - Drain and display the session's event queue
//!
//! # Usage
//!
//! ```sh
//! cargo run --example random_playout
//! ```
//!
//! Replay a specific session:
//!
//! ```sh
//! cargo run --example random_playout -- --seed 42
//! ```
//!
//! Play a harder tier with a move cap:
//!
//! ```sh
//! cargo run --example random_playout -- --difficulty 2 --max-moves 500
//! ```

use std::process;

use clap::Parser;
use linelace_core::Vec2;
use linelace_engine::validate;
use linelace_game::{GameEvent, Session};
use rand::{RngExt as _, SeedableRng as _};
use rand_pcg::Pcg64Mcg;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Seed for the session; random when omitted.
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Difficulty tier index.
    #[arg(long, value_name = "INDEX", default_value_t = 0)]
    difficulty: usize,

    /// Stop after this many successful placements.
    #[arg(long, value_name = "COUNT", default_value_t = 10_000)]
    max_moves: u32,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let seed = args.seed.unwrap_or_else(|| rand::rng().random());
    let mut rng = Pcg64Mcg::seed_from_u64(seed);
    let mut session = match Session::new(args.difficulty, 0, &mut rng) {
        Ok(session) => session,
        Err(err) => {
            eprintln!("{err}");
            process::exit(2);
        }
    };

    println!("Seed: {seed}");
    println!(
        "Board: {}x{}, goal: {}",
        session.grid().width(),
        session.grid().height(),
        session.tier().points_to_win
    );
    println!();

    while !session.is_finished() && session.moves() < args.max_moves {
        let Some((slot, pose)) = first_fit(&session) else {
            break;
        };
        session
            .drop_shape(slot, pose, &mut rng)
            .expect("slot holds a shape");
        for event in session.take_events() {
            print_event(&event);
        }
    }

    println!();
    println!("Moves: {}", session.moves());
    println!("Final score: {}", session.score());
    println!("Best score: {}", session.best_score());
}

/// Scans half-cell poses over the board and returns the first slot and pose
/// that snap.
fn first_fit(session: &Session) -> Option<(usize, Vec2)> {
    let grid = session.grid();
    for (slot, shape) in session.slots().iter().enumerate() {
        let Some(shape) = shape else { continue };
        for ky in 0..=2 * (u16::from(grid.height()) + 1) {
            for kx in 0..=2 * (u16::from(grid.width()) + 1) {
                let pose = Vec2::new(
                    0.5f32.mul_add(f32::from(kx), -0.5),
                    0.5f32.mul_add(f32::from(ky), -0.5),
                );
                if validate(shape, pose, grid).is_some() {
                    return Some((slot, pose));
                }
            }
        }
    }
    None
}

fn print_event(event: &GameEvent) {
    match event {
        GameEvent::ScoreChanged { score, delta } => println!("score: {score} (+{delta})"),
        GameEvent::ComboChanged { combo } => println!("combo: {combo}"),
        GameEvent::CellsCompleted { cells } => println!("completed {} cell(s)", cells.len()),
        GameEvent::LinesCleared { plan } => println!("cleared {} cell(s)", plan.cell_count()),
        GameEvent::WrongMove => println!("wrong move"),
        GameEvent::NoSpace => println!("no space left"),
        GameEvent::Finished {
            success,
            is_best_score,
        } => {
            let outcome = if *success { "won" } else { "lost" };
            let best = if *is_best_score { " (new best)" } else { "" };
            println!("session {outcome}{best}");
        }
    }
}
