// Run with:
//   cargo run --release --example assess_table

use dice_race::{Config, Player, Score, assess, choose_rolls};

fn main() {
    let cfg = Config { trials: 5_000, seed: Some(2024), ..Config::default() };
    if let Err(e) = cfg.validate() {
        eprintln!("invalid configuration: {e}");
        return;
    }
    let mut rng = cfg.rng();
    let plan = cfg.default_plan();
    let to_move = Player::First;

    for score in [Score::new(0, 0), Score::new(60, 85), Score::new(90, 40)] {
        println!("== score {:?}, player {} to move ==", score.as_array(), to_move);
        for k in 1..=10 {
            match assess(k, score, to_move, &cfg.policy, &plan, &mut rng) {
                Ok(est) => println!("  K={k:>2}  p={:.3} ± {:.3}", est.p(), est.std_err()),
                Err(e) => {
                    eprintln!("assessment failed: {e}");
                    return;
                }
            }
        }
        match choose_rolls(score, to_move, &cfg.policy, &plan, cfg.max_rolls, &mut rng) {
            Ok(sel) => println!("  greedy pick: K={} (p={:.3})", sel.rolls, sel.estimate),
            Err(e) => eprintln!("selection failed: {e}"),
        }
    }
}
