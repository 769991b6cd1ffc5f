//! Random playout: plays a game to the end with a fixed roll policy for both
//! sides. This is the stochastic oracle behind move assessment.

use rand_core::RngCore;

use crate::error::{Error, Result};
use crate::mechanics::{Dice, Player, RollPolicy, Score};
use crate::systems::sdk::{Hook, TurnRecord};

/// Play from `score` with `to_move` on the move until someone reaches the win
/// score, and return the winner. `score` is a copy; the caller's is untouched.
///
/// Fails with [`Error::InvalidPolicy`] the first time `policy` asks for zero
/// dice-pairs.
pub fn play_random<R, P>(
    score: Score,
    to_move: Player,
    policy: &P,
    dice: &mut Dice<R>,
) -> Result<Player>
where
    R: RngCore,
    P: RollPolicy + ?Sized,
{
    play_random_with(score, to_move, policy, dice, &mut ())
}

/// [`play_random`] that reports every turn to `hook`.
pub fn play_random_with<R, P, H>(
    mut score: Score,
    mut to_move: Player,
    policy: &P,
    dice: &mut Dice<R>,
    hook: &mut H,
) -> Result<Player>
where
    R: RngCore,
    P: RollPolicy + ?Sized,
    H: Hook + ?Sized,
{
    loop {
        if let Some(winner) = score.winner() {
            hook.on_finish(winner, &score);
            return Ok(winner);
        }

        let pairs = policy.pairs(dice.rng_mut());
        if pairs == 0 {
            return Err(Error::InvalidPolicy { pairs });
        }
        let points = dice.roll_turn(pairs);
        score.bank(to_move, points);
        hook.on_turn(&TurnRecord { player: to_move, pairs, points, score });

        to_move = to_move.other();
    }
}
