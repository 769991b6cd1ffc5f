//! Move assessment: Monte-Carlo estimate of the win probability for the
//! player on the move if they roll exactly `rolls` dice-pairs this turn and
//! everyone follows `policy` afterwards.

use rand_core::RngCore;
use tracing::debug_span;

use crate::error::{Result, non_zero};
use crate::mechanics::{Player, RollPolicy, Score};
use crate::systems::playout::play_random;
use crate::systems::sdk::{Estimate, TrialPlan, count_wins};

/// Each trial rolls `2 * rolls` faces for `to_move`, banks the result on a
/// copy of `score`, then plays the rest of the game with the opponent on the
/// move (also after a bust). Wins are counted for `to_move` directly.
///
/// Candidates are not paired: every call draws fresh faces, so two calls with
/// different `rolls` differ by sampling noise as well.
pub fn assess<R, P>(
    rolls: u32,
    score: Score,
    to_move: Player,
    policy: &P,
    plan: &TrialPlan,
    rng: &mut R,
) -> Result<Estimate>
where
    R: RngCore + ?Sized,
    P: RollPolicy + Sync + ?Sized,
{
    non_zero("rolls", rolls as usize)?;
    let _span = debug_span!("assess", rolls, trials = plan.trials).entered();

    count_wins(plan, rng, |dice| {
        let mut s = score;
        s.bank(to_move, dice.roll_turn(rolls));
        let winner = play_random(s, to_move.other(), policy, dice)?;
        Ok(winner == to_move)
    })
}
