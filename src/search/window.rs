//! Window Start Strategies
//!
//! Each search scans a fixed-size window of the ID sequence. Where that window begins is
//! decided by a `WindowStart` implementation injected into the engine, so production can
//! follow the wall clock while tests pin the start to a known index.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::{Mutex, PoisonError};
use std::time::{SystemTime, UNIX_EPOCH};

/// Source of the first index scanned by a search.
pub trait WindowStart: Send + Sync {
    /// Returns an index in `0..len`, or `0` when `len` is zero.
    fn start_index(&self, len: usize) -> usize;
}

/// Derives the start from the current UNIX time in nanoseconds.
///
/// Consecutive calls land on different, unpredictable windows without any cursor state.
#[derive(Debug, Default, Clone, Copy)]
pub struct ClockWindow;

impl WindowStart for ClockWindow {
    fn start_index(&self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        (nanos % len as u128) as usize
    }
}

/// Pseudo-random starts drawn from an explicitly seeded generator.
///
/// The same seed replays the same sequence of windows across runs.
pub struct SeededWindow {
    rng: Mutex<StdRng>,
}

impl SeededWindow {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl WindowStart for SeededWindow {
    fn start_index(&self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        rng.random_range(0..len)
    }
}

/// Always starts at the same index (reduced modulo the sequence length).
#[derive(Debug, Clone, Copy)]
pub struct FixedWindow(pub usize);

impl WindowStart for FixedWindow {
    fn start_index(&self, len: usize) -> usize {
        if len == 0 { 0 } else { self.0 % len }
    }
}
