//! Random source abstraction
//!
//! This module provides a [`RandomSource`] trait that abstracts over where the
//! randomness for new-group placement comes from, allowing production code to
//! use the process-wide generator while tests can use a seeded or scripted one.
//!
//! # Example
//!
//! ```
//! use sticky_order::{RandomSource, SeededRandom};
//!
//! let mut a = SeededRandom::new(7);
//! let mut b = SeededRandom::new(7);
//! assert_eq!(a.pick_index(10), b.pick_index(10));
//! ```

use std::collections::VecDeque;
use std::fmt::Debug;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A source of uniformly distributed indexes.
///
/// Only consulted when the first entry of a previously unseen group is placed.
pub trait RandomSource: Send + Debug {
    /// Returns an index in `0..bound`, uniformly distributed.
    ///
    /// `bound` is always at least 1; implementations return 0 for a bound of 0 or 1.
    fn pick_index(&mut self, bound: usize) -> usize;
}

/// Production source using the thread-local generator from `rand`.
///
/// This is the default random source.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn pick_index(&mut self, bound: usize) -> usize {
        if bound <= 1 {
            return 0;
        }
        rand::thread_rng().gen_range(0..bound)
    }
}

/// Deterministic source seeded from a `u64`.
///
/// Two sources created with the same seed produce the same picks.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn pick_index(&mut self, bound: usize) -> usize {
        if bound <= 1 {
            return 0;
        }
        self.rng.gen_range(0..bound)
    }
}

/// Source that replays a fixed list of picks.
///
/// Each pick is clamped to `bound - 1`. Once the script runs out, every
/// further pick is 0, i.e. the new group goes in front.
///
/// ```
/// use sticky_order::{RandomSource, ScriptedRandom};
///
/// let mut script = ScriptedRandom::new([2, 9]);
/// assert_eq!(script.pick_index(3), 2);
/// assert_eq!(script.pick_index(3), 2); // clamped
/// assert_eq!(script.pick_index(3), 0); // exhausted
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    picks: VecDeque<usize>,
}

impl ScriptedRandom {
    pub fn new(picks: impl IntoIterator<Item = usize>) -> Self {
        Self {
            picks: picks.into_iter().collect(),
        }
    }

    /// Number of scripted picks not yet consumed.
    pub fn remaining(&self) -> usize {
        self.picks.len()
    }
}

impl RandomSource for ScriptedRandom {
    fn pick_index(&mut self, bound: usize) -> usize {
        let pick = self.picks.pop_front().unwrap_or(0);
        pick.min(bound.saturating_sub(1))
    }
}
