//! The bounded background board queue.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Condvar, Mutex};
use std::thread::{self, JoinHandle};

use tracing::{debug, trace};

use taquin_core::Board;
use taquin_scramble::{ScrambleError, Scrambler};
use taquin_styles::BoardStyle;

/// Random-walk length used when generating from a style, per cell.
const WALK_STEPS_PER_CELL: usize = 20;

/// A bounded queue of pre-scrambled boards kept full by a background
/// worker.
///
/// The worker owns the generation source and tops the queue up to the
/// target length; consuming a board wakes it to restore the level, so a
/// caller is only ever made to wait when consumption outpaces generation.
/// Sources may fail transiently (a scramble run can stall); the worker
/// retries until a board comes out, and a source that can fail forever is
/// a configuration error, not something the queue recovers from.
///
/// Boards handed out are owned by the caller outright; nothing refers
/// back to the generator.
///
/// # Examples
///
/// ```
/// use taquin_generate::QueuedGenerator;
/// use taquin_styles::catalogue;
///
/// let generator = QueuedGenerator::for_style(&catalogue::classic_4x4(), 2);
///
/// let board = generator.next();
/// assert!(!board.is_solved());
/// ```
pub struct QueuedGenerator {
    shared: Arc<Shared>,
    length: usize,
    worker: Option<JoinHandle<()>>,
}

struct Shared {
    queue: Mutex<Vec<Board>>,
    /// Signalled when a board lands in the queue.
    ready: Condvar,
    /// Signalled when a board is taken or the generator shuts down.
    space: Condvar,
    shutdown: AtomicBool,
}

impl QueuedGenerator {
    /// Starts a generator that keeps `length` boards from `source` queued.
    ///
    /// The worker begins populating immediately.
    ///
    /// # Panics
    ///
    /// Panics if `length` is zero; a generator that holds nothing ready
    /// serves no purpose.
    pub fn new<F>(length: usize, source: F) -> Self
    where
        F: FnMut() -> Result<Board, ScrambleError> + Send + 'static,
    {
        assert!(length >= 1, "target queue length must be at least 1");
        let shared = Arc::new(Shared {
            queue: Mutex::new(Vec::with_capacity(length)),
            ready: Condvar::new(),
            space: Condvar::new(),
            shutdown: AtomicBool::new(false),
        });

        let worker_shared = Arc::clone(&shared);
        let worker = thread::spawn(move || run_worker(&worker_shared, length, source));

        QueuedGenerator {
            shared,
            length,
            worker: Some(worker),
        }
    }

    /// Starts a generator for `style` with the standard source: a solved
    /// board, a random walk, then a greedy descent to the style's
    /// threshold.
    pub fn for_style(style: &BoardStyle, length: usize) -> Self {
        let style = style.clone();
        let steps = (style.rows() * style.columns()) as usize * WALK_STEPS_PER_CELL;
        let mut scrambler = Scrambler::new();
        Self::new(length, move || {
            let mut board = style.solved_board();
            scrambler.randomize(&mut board, steps);
            scrambler.scramble(&mut board, style.threshold())?;
            Ok(board)
        })
    }

    /// Takes a ready board, blocking until one is available.
    ///
    /// Removal is LIFO; queued boards of one style are interchangeable.
    /// Taking a board wakes the worker to restore the target length.
    pub fn next(&self) -> Board {
        let mut queue = self.shared.queue.lock().unwrap();
        while queue.is_empty() {
            queue = self.shared.ready.wait(queue).unwrap();
        }
        let board = queue.pop().expect("queue is non-empty after wait");
        self.shared.space.notify_all();
        board
    }

    /// Blocks until at least one board is available, without taking one.
    pub fn wait_until_ready(&self) {
        let mut queue = self.shared.queue.lock().unwrap();
        while queue.is_empty() {
            queue = self.shared.ready.wait(queue).unwrap();
        }
    }

    /// Number of boards ready right now.
    pub fn available(&self) -> usize {
        self.shared.queue.lock().unwrap().len()
    }

    /// The queue length the worker keeps restoring.
    pub fn target_length(&self) -> usize {
        self.length
    }
}

impl Drop for QueuedGenerator {
    fn drop(&mut self) {
        self.shared.shutdown.store(true, Ordering::SeqCst);
        self.shared.space.notify_all();
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

fn run_worker<F>(shared: &Shared, length: usize, mut source: F)
where
    F: FnMut() -> Result<Board, ScrambleError>,
{
    debug!(event = "generator_start", length);
    'refill: loop {
        // Sleep while the queue is full; a consumer or shutdown wakes us.
        {
            let mut queue = shared.queue.lock().unwrap();
            while queue.len() >= length {
                if shared.shutdown.load(Ordering::SeqCst) {
                    break 'refill;
                }
                queue = shared.space.wait(queue).unwrap();
            }
        }
        if shared.shutdown.load(Ordering::SeqCst) {
            break;
        }

        // Generate outside the lock; stalls are transient, retry.
        let board = loop {
            if shared.shutdown.load(Ordering::SeqCst) {
                break 'refill;
            }
            match source() {
                Ok(board) => break board,
                Err(error) => {
                    debug!(event = "generation_retry", error = %error);
                }
            }
        };

        let mut queue = shared.queue.lock().unwrap();
        queue.push(board);
        trace!(event = "board_queued", available = queue.len());
        shared.ready.notify_all();
    }
    debug!(event = "generator_stop");
}
