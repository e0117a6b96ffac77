//! Queue behavior: availability, refills, stall retries and shutdown.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use taquin_scramble::ScrambleError;
use taquin_styles::catalogue;
use taquin_test::{solved_3x3, sorted_labels};

use crate::generator::QueuedGenerator;

/// Polls until the queue holds at least `level` boards; the worker tops
/// the queue up on its own, so this only bounds how long we wait for it.
fn wait_for_level(generator: &QueuedGenerator, level: usize) {
    let deadline = Instant::now() + Duration::from_secs(10);
    while generator.available() < level {
        assert!(
            Instant::now() < deadline,
            "queue never refilled to {level}"
        );
        thread::sleep(Duration::from_millis(5));
    }
}

#[test]
fn next_returns_three_times_and_refills() {
    let generator = QueuedGenerator::new(2, || Ok(solved_3x3()));
    assert_eq!(generator.target_length(), 2);

    for _ in 0..3 {
        let board = generator.next();
        assert_eq!(board.tile_count(), 8);

        // Taking a board triggers a background refill
        generator.wait_until_ready();
        assert!(generator.available() >= 1);
    }

    wait_for_level(&generator, 2);
    assert_eq!(generator.available(), 2);
}

#[test]
fn wait_until_ready_does_not_consume() {
    let generator = QueuedGenerator::new(1, || Ok(solved_3x3()));

    generator.wait_until_ready();
    assert_eq!(generator.available(), 1);

    // The board is still there to take
    let board = generator.next();
    assert_eq!(board.tile_count(), 8);
}

#[test]
fn stalled_generations_are_retried() {
    let attempts = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&attempts);

    let generator = QueuedGenerator::new(1, move || {
        // The first two attempts stall; the third produces a board
        if counter.fetch_add(1, Ordering::SeqCst) < 2 {
            Err(ScrambleError::Stalled {
                best_progress: 0.9,
                target: 0.3,
                rounds: 8,
            })
        } else {
            Ok(solved_3x3())
        }
    });

    let board = generator.next();
    assert_eq!(board.tile_count(), 8);
    assert!(attempts.load(Ordering::SeqCst) >= 3);
}

#[test]
fn for_style_delivers_boards_at_or_below_the_threshold() {
    let style = catalogue::classic_3x3();
    let generator = QueuedGenerator::for_style(&style, 1);

    let board = generator.next();

    assert!(board.progress() <= style.threshold());
    assert_eq!(board.rows(), 3);
    // Generation relocates tiles, never swaps them out
    assert_eq!(sorted_labels(&board), sorted_labels(&style.solved_board()));
}

#[test]
fn dropping_the_generator_joins_the_worker() {
    let generator = QueuedGenerator::new(1, || Ok(solved_3x3()));
    let _ = generator.next();
    drop(generator);
}

#[test]
#[should_panic(expected = "at least 1")]
fn zero_length_queue_is_rejected() {
    let _ = QueuedGenerator::new(0, || Ok(solved_3x3()));
}
