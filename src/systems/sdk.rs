// src/systems/sdk.rs

//! # Systems SDK
//!
//! Shared harness for the Monte-Carlo **systems** (playout, assessment,
//! selection). A system describes *one trial* as a pure-ish closure over a
//! [`Dice`] stream; the harness repeats it, counts wins and hands back an
//! [`Estimate`].
//!
//! ## What this SDK gives you
//! - [`TrialPlan`]: how many trials, how they are chunked, and whether chunks
//!   run on the rayon pool.
//! - [`count_wins`]: runs a trial closure `plan.trials` times. Each chunk gets
//!   its own child stream seeded from the caller's generator, so results are
//!   identical whether chunks run sequentially or in parallel.
//! - [`Hook`]: observe each turn of a playout (tracing, property tests)
//!   without touching the simulator.
//!
//! ## Determinism
//! - Same caller seed + same plan ⇒ same estimate, on any thread count.
//! - Changing `chunk` changes the streams and therefore the draws.
//!
//! ## Testing a system
//! - Seed a `WyRand`, run twice, compare. Use large `trials` and a few
//!   standard errors of slack for statistical assertions.

use bevy_prng::WyRand;
use rand_core::{RngCore, SeedableRng};
use tracing::trace;

use crate::error::{Result, non_zero};
use crate::mechanics::{Dice, Player, Score, stoch};

/// Trials run by the estimator unless told otherwise.
pub const DEFAULT_TRIALS: usize = 1000;
/// Trials per independent stream.
pub const DEFAULT_CHUNK: usize = 250;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TrialPlan {
    pub trials: usize,
    pub chunk: usize,
    /// Run chunks on the rayon pool (needs the `parallel` feature).
    pub parallel: bool,
}

impl Default for TrialPlan {
    fn default() -> Self {
        Self { trials: DEFAULT_TRIALS, chunk: DEFAULT_CHUNK, parallel: cfg!(feature = "parallel") }
    }
}

impl TrialPlan {
    pub fn with_trials(trials: usize) -> Self {
        Self { trials, ..Self::default() }
    }

    pub fn sequential(self) -> Self {
        Self { parallel: false, ..self }
    }

    pub fn validate(&self) -> Result<()> {
        non_zero("trials", self.trials)?;
        non_zero("chunk", self.chunk)?;
        Ok(())
    }

    /// Trial counts per chunk; the last chunk takes the remainder.
    fn chunk_sizes(&self) -> Vec<usize> {
        let full = self.trials / self.chunk;
        let rest = self.trials % self.chunk;
        let mut sizes = vec![self.chunk; full];
        if rest > 0 {
            sizes.push(rest);
        }
        sizes
    }
}

/// Win count over a number of trials.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Estimate {
    pub wins: usize,
    pub trials: usize,
}

impl Estimate {
    /// Fraction of trials won, in [0, 1].
    pub fn p(&self) -> f64 {
        if self.trials == 0 { 0.0 } else { self.wins as f64 / self.trials as f64 }
    }

    /// sqrt(p(1-p)/n).
    pub fn std_err(&self) -> f64 {
        if self.trials == 0 {
            return 0.0;
        }
        let p = self.p();
        (p * (1.0 - p) / self.trials as f64).sqrt()
    }
}

/// One completed turn of a playout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TurnRecord {
    pub player: Player,
    pub pairs: u32,
    pub points: u32,
    /// Score after the turn's points were banked.
    pub score: Score,
}

/// A playout observer. All methods default to no-ops.
pub trait Hook {
    fn on_turn(&mut self, _turn: &TurnRecord) {}
    fn on_finish(&mut self, _winner: Player, _score: &Score) {}
}

impl Hook for () {}

/// Collects every turn.
impl Hook for Vec<TurnRecord> {
    fn on_turn(&mut self, turn: &TurnRecord) {
        self.push(*turn);
    }
}

/// Run `trial` `plan.trials` times and count how often it returns `true`.
///
/// `rng` only seeds the per-chunk streams; it advances by one draw per chunk.
pub fn count_wins<R, F>(plan: &TrialPlan, rng: &mut R, trial: F) -> Result<Estimate>
where
    R: RngCore + ?Sized,
    F: Fn(&mut Dice<WyRand>) -> Result<bool> + Sync,
{
    plan.validate()?;
    let sizes = plan.chunk_sizes();
    let seeds = stoch::child_seeds(rng, sizes.len());
    let jobs: Vec<(u64, usize)> = seeds.into_iter().zip(sizes).collect();

    let run_chunk = |&(seed, size): &(u64, usize)| -> Result<usize> {
        let mut dice = Dice::new(WyRand::from_seed(seed.to_le_bytes()));
        let mut wins = 0;
        for _ in 0..size {
            if trial(&mut dice)? {
                wins += 1;
            }
        }
        trace!(seed, size, wins, "chunk done");
        Ok(wins)
    };

    let wins = if plan.parallel {
        run_parallel(&jobs, &run_chunk)?
    } else {
        jobs.iter().map(run_chunk).sum::<Result<usize>>()?
    };
    Ok(Estimate { wins, trials: plan.trials })
}

#[cfg(feature = "parallel")]
fn run_parallel<F>(jobs: &[(u64, usize)], run_chunk: &F) -> Result<usize>
where
    F: Fn(&(u64, usize)) -> Result<usize> + Sync,
{
    use rayon::prelude::*;
    jobs.par_iter().map(run_chunk).sum()
}

#[cfg(not(feature = "parallel"))]
fn run_parallel<F>(jobs: &[(u64, usize)], run_chunk: &F) -> Result<usize>
where
    F: Fn(&(u64, usize)) -> Result<usize> + Sync,
{
    jobs.iter().map(run_chunk).sum()
}
