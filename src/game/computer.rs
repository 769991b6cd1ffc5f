//! Computer turn: pick a roll count with the greedy Monte-Carlo scan, then
//! roll it for real.

use std::io::Write;

use rand_core::RngCore;

use super::faces_line;
use crate::config::Config;
use crate::error::Result;
use crate::mechanics::{Dice, Player, Score, WIN_SCORE, turn_points};
use crate::systems::assess::assess;
use crate::systems::select::choose_rolls_with;

/// Play one computer turn for `me`. Returns `true` if the turn won the game.
///
/// `sim_rng` seeds the assessment streams; `dice` is the real table.
pub fn computer_turn<S, R, O>(
    score: &mut Score,
    me: Player,
    cfg: &Config,
    sim_rng: &mut S,
    dice: &mut Dice<R>,
    out: &mut O,
) -> Result<bool>
where
    S: RngCore + ?Sized,
    R: RngCore,
    O: Write + ?Sized,
{
    let plan = cfg.computer_plan();
    let snapshot = *score;

    let selection = choose_rolls_with(
        |k| {
            if k > 1 {
                writeln!(out, "Checking number of rolls: {k}.")?;
            }
            Ok(assess(k, snapshot, me, &cfg.policy, &plan, &mut *sim_rng)?.p())
        },
        cfg.max_rolls,
    )?;
    writeln!(out, "Chosen number of rolls {}.", selection.rolls)?;

    let faces = dice.roll_pairs(selection.rolls);
    let points = turn_points(&faces);
    writeln!(out, "PC rolled {}.", faces_line(&faces))?;
    if points == 0 {
        writeln!(out, "PC busts.")?;
        return Ok(false);
    }
    score.bank(me, points);
    writeln!(out, "PC banks {points}.")?;
    Ok(score[me] >= WIN_SCORE)
}
