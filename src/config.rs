//! Run configuration. Plain struct with defaults; the binary maps CLI flags
//! onto it.

use bevy_prng::WyRand;
use rand_core::SeedableRng;

use crate::error::{Result, non_zero};
use crate::mechanics::Policy;
use crate::systems::sdk::{DEFAULT_CHUNK, DEFAULT_TRIALS, TrialPlan};
use crate::systems::select::DEFAULT_MAX_ROLLS;

/// Trials per candidate when the computer picks its real move.
pub const COMPUTER_TRIALS: usize = 5000;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Config {
    /// Stand-in policy for every simulated turn after the candidate one.
    pub policy: Policy,
    /// Trials for one-off assessments.
    pub trials: usize,
    /// Trials per candidate during the computer's turn.
    pub computer_trials: usize,
    /// Trials per independent stream.
    pub chunk: usize,
    pub parallel: bool,
    pub max_rolls: u32,
    /// `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Computer sits in seat 0 and opens the game.
    pub computer_first: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            policy: Policy::default(),
            trials: DEFAULT_TRIALS,
            computer_trials: COMPUTER_TRIALS,
            chunk: DEFAULT_CHUNK,
            parallel: cfg!(feature = "parallel"),
            max_rolls: DEFAULT_MAX_ROLLS,
            seed: None,
            computer_first: false,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        self.policy.validate()?;
        non_zero("trials", self.trials)?;
        non_zero("computer_trials", self.computer_trials)?;
        non_zero("chunk", self.chunk)?;
        non_zero("max_rolls", self.max_rolls as usize)?;
        Ok(())
    }

    pub fn plan(&self, trials: usize) -> TrialPlan {
        TrialPlan { trials, chunk: self.chunk, parallel: self.parallel }
    }

    /// Plan for one-off assessments (`trials` per candidate).
    pub fn default_plan(&self) -> TrialPlan {
        self.plan(self.trials)
    }

    /// Plan for the computer's real move (`computer_trials` per candidate).
    pub fn computer_plan(&self) -> TrialPlan {
        self.plan(self.computer_trials)
    }

    /// Master generator: seeded when `seed` is set, OS entropy otherwise.
    pub fn rng(&self) -> WyRand {
        match self.seed {
            Some(seed) => WyRand::from_seed(seed.to_le_bytes()),
            None => WyRand::from_os_rng(),
        }
    }
}
