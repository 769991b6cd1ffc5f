//! Greedy roll-count selection: scan K = 1, 2, 3, … and stop at the first
//! strict decrease of the estimate, committing to the previous K.

use rand_core::RngCore;
use tracing::{debug, info};

use crate::climb_greedy;
use crate::error::{Result, non_zero};
use crate::mechanics::{Player, RollPolicy, Score};
use crate::systems::assess::assess;
use crate::systems::sdk::TrialPlan;

/// Hard stop for the upward scan.
pub const DEFAULT_MAX_ROLLS: u32 = 60;

#[derive(Clone, Debug, PartialEq)]
pub struct Selection {
    /// Committed number of dice-pairs, at least 1.
    pub rolls: u32,
    /// Estimate for `rolls`.
    pub estimate: f64,
    /// Every candidate evaluated, in order.
    pub checked: Vec<(u32, f64)>,
    /// The scan hit `max_rolls` before the estimate dropped.
    pub capped: bool,
}

/// Greedy scan with a caller-supplied evaluator (estimate for K pairs).
///
/// Ties keep climbing. Noise near a plateau can stop the scan early; that is
/// the intended behaviour of a one-step lookahead.
pub fn choose_rolls_with<F>(mut eval: F, max_rolls: u32) -> Result<Selection>
where
    F: FnMut(u32) -> Result<f64>,
{
    let max_rolls = non_zero("max_rolls", max_rolls as usize)? as u32;
    let climb = climb_greedy(
        1u32,
        |&k| -> Result<f64> {
            let p = eval(k)?;
            debug!(rolls = k, estimate = p, "checked candidate");
            Ok(p)
        },
        |&k| k + 1,
        (max_rolls - 1) as usize,
    )?;
    info!(rolls = climb.best, estimate = climb.value, capped = climb.capped, "chose rolls");
    Ok(Selection {
        rolls: climb.best,
        estimate: climb.value,
        checked: climb.trail,
        capped: climb.capped,
    })
}

/// Greedy scan using [`assess`] for every candidate.
pub fn choose_rolls<R, P>(
    score: Score,
    to_move: Player,
    policy: &P,
    plan: &TrialPlan,
    max_rolls: u32,
    rng: &mut R,
) -> Result<Selection>
where
    R: RngCore + ?Sized,
    P: RollPolicy + Sync + ?Sized,
{
    choose_rolls_with(
        |k| Ok(assess(k, score, to_move, policy, plan, &mut *rng)?.p()),
        max_rolls,
    )
}
