//! Time and randomness seams for the sequencer.

use std::cell::Cell;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Millisecond clock.
pub trait Clock {
    fn now_ms(&self) -> u64;
}

/// Clock moved by hand, for tests and hosts with their own time base.
///
/// # Examples
/// ```
/// use tiptop_viewer::{Clock, ManualClock};
/// let clock = ManualClock::new(100);
/// clock.advance(250);
/// assert_eq!(clock.now_ms(), 350);
/// ```
#[derive(Debug, Default, Clone)]
pub struct ManualClock {
    now: Cell<u64>,
}

impl ManualClock {
    pub fn new(start_ms: u64) -> Self {
        Self {
            now: Cell::new(start_ms),
        }
    }

    pub fn advance(&self, ms: u64) {
        self.now.set(self.now.get().saturating_add(ms));
    }

    /// Moves to `ms`; earlier values are ignored so time never runs backwards.
    pub fn set(&self, ms: u64) {
        self.now.set(self.now.get().max(ms));
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now.get()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_ms(&self) -> u64 {
        (**self).now_ms()
    }
}

/// Source of per-tick progress increments.
pub trait Jitter {
    /// Returns a value in `[0, max]`.
    fn sample(&mut self, max: f64) -> f64;
}

/// Uniform jitter from a seeded [`SmallRng`].
#[derive(Debug, Clone)]
pub struct RandomJitter {
    rng: SmallRng,
}

impl RandomJitter {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Jitter for RandomJitter {
    fn sample(&mut self, max: f64) -> f64 {
        if max > 0.0 {
            self.rng.gen_range(0.0..=max)
        } else {
            0.0
        }
    }
}

/// Always returns the same increment, capped at `max`.
///
/// # Examples
/// ```
/// use tiptop_viewer::{FixedJitter, Jitter};
/// let mut jitter = FixedJitter(3.0);
/// assert_eq!(jitter.sample(5.0), 3.0);
/// assert_eq!(jitter.sample(2.0), 2.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedJitter(pub f64);

impl Jitter for FixedJitter {
    fn sample(&mut self, max: f64) -> f64 {
        self.0.min(max)
    }
}
