//! Fifteen Puzzle Demo
//!
//! Keeps scrambled fifteen-puzzle boards ready in a background queue, takes
//! one, and walks through the move mechanics: direct moves, prerequisite
//! chains and the progress metric.
//!
//! Run with `RUST_LOG=taquin_generate=debug` to watch the queue refill.

use taquin::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() {
    let filter = EnvFilter::builder()
        .with_default_directive("taquin_generate=info".parse().unwrap())
        .from_env_lossy();
    tracing_subscriber::fmt().with_env_filter(filter).init();

    println!("Taquin Fifteen-Puzzle Demo");
    println!("==========================\n");

    let style = catalogue::classic_4x4();
    println!(
        "Style: {} ({}x{}, scrambled to progress <= {})",
        style.name(),
        style.rows(),
        style.columns(),
        style.threshold()
    );

    // Keep two boards ready; generation happens off-thread.
    let generator = QueuedGenerator::for_style(&style, 2);
    generator.wait_until_ready();

    let mut board = generator.next();
    println!("\nScrambled board (progress {:.3}):", board.progress());
    print!("{board}");

    let moves = board.possible_moves();
    println!("\n{} direct moves are available:", moves.len());
    for operation in &moves {
        println!("  {operation}");
    }

    // Pick a move whose tile is walled off from the empty cell, so the
    // tiles in between must be pushed out of the way first.
    let chained = board
        .all_positions()
        .flat_map(|start| MoveDirection::ALL.map(|direction| MoveOperation::new(start, direction)))
        .find(|&operation| {
            board
                .resolve(operation)
                .prerequisites()
                .is_some_and(|chain| !chain.is_empty())
        })
        .expect("a 4x4 board always has a move with prerequisites");

    if let Some(chain) = board.resolve(chained).prerequisites() {
        println!("\n`{chained}` needs help first:");
        for helper in chain {
            println!("  {helper}");
        }
    }

    let applied = board
        .apply_chain(chained)
        .expect("resolved moves stay legal on an untouched board");
    println!("Applied {} moves in one chain:", applied.len());
    print!("{board}");
    println!("Progress is now {:.3}", board.progress());

    println!("\n--- Draining the queue ---\n");

    for round in 1..=3 {
        let board = generator.next();
        println!("Board {round} (progress {:.3}):", board.progress());
        print!("{board}");
        println!();
    }

    println!("Boards left in the queue: {}", generator.available());
}
