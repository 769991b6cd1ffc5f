/*!
`dice_race` — a push-your-luck dice race to 100 with a Monte-Carlo opponent.

What it does
- Scores a turn: roll N dice-pairs, any 1 busts the turn to 0, otherwise
  bank the sum of all faces.
- Plays random games to the end (`systems::playout`) with a stand-in roll
  policy for both sides.
- Estimates the win probability of "roll exactly K pairs now" by repeating
  turn + playout over many trials (`systems::assess`).
- Picks K greedily: K = 1, 2, 3, … until the estimate drops
  (`systems::select`, driven by [`climb_greedy`]).
- Runs a human-vs-computer game over any `BufRead`/`Write` pair (`game`).

How to use (call surface only)
- Build a seeded generator (`bevy_prng::WyRand`) and a `TrialPlan`.
- Call `choose_rolls(score, to_move, &policy, &plan, max_rolls, &mut rng)`
  to get a `Selection`, or `assess(...)` for a single candidate.
- Or hand a `Config` to `game::Match` and call `run(input, output)`.

What it does NOT do
- No exact probability solver, no persistence, no strategy learning.
*/

pub mod config;
pub mod error;
pub mod game;
pub mod mechanics;
pub mod systems;

pub use config::Config;
pub use error::{Error, Result};
pub use mechanics::{Dice, Player, Policy, RollPolicy, Score, WIN_SCORE, turn_points};
pub use systems::assess::assess;
pub use systems::playout::{play_random, play_random_with};
pub use systems::sdk::{Estimate, Hook, TrialPlan, TurnRecord};
pub use systems::select::{Selection, choose_rolls, choose_rolls_with};

/// Result of a [`climb_greedy`] run.
#[derive(Clone, Debug, PartialEq)]
pub struct Climb<X> {
    /// Last point that did not lose to its successor.
    pub best: X,
    pub value: f64,
    /// Every point evaluated, in order, with its value.
    pub trail: Vec<(X, f64)>,
    /// Stopped because `max_steps` ran out, not because a step lost.
    pub capped: bool,
}

/// Greedy one-step climb: x_{t+1} = step(x_t), kept while
/// eval(x_{t+1}) >= eval(x_t). Stops at the first strict decrease and returns
/// x_t, or after `max_steps` accepted steps.
pub fn climb_greedy<X, Eval, Step, E>(
    x0: X,
    mut eval: Eval,
    mut step: Step,
    max_steps: usize,
) -> std::result::Result<Climb<X>, E>
where
    X: Clone,
    Eval: FnMut(&X) -> std::result::Result<f64, E>,
    Step: FnMut(&X) -> X,
{
    let mut best = x0;
    let mut value = eval(&best)?;
    let mut trail = vec![(best.clone(), value)];

    for _ in 0..max_steps {
        let next = step(&best);
        let next_value = eval(&next)?;
        trail.push((next.clone(), next_value));
        if next_value < value {
            return Ok(Climb { best, value, trail, capped: false });
        }
        best = next;
        value = next_value;
    }
    Ok(Climb { best, value, trail, capped: true })
}
