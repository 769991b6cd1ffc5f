// tests/core.rs
use bevy_prng::WyRand;
use dice_race::{
    Dice, Hook, Player, Policy, Score, TrialPlan, TurnRecord, WIN_SCORE, assess, choose_rolls,
    choose_rolls_with, play_random, play_random_with, turn_points,
};
use rand_core::{RngCore, SeedableRng};
use std::cell::RefCell;
use std::rc::Rc;

fn rng(seed: u64) -> WyRand {
    WyRand::from_seed(seed.to_le_bytes())
}

/// Generator stuck on one value: `u64::MAX` rolls sixes, `0` rolls ones.
struct Constant(u64);

impl RngCore for Constant {
    fn next_u32(&mut self) -> u32 {
        (self.0 >> 32) as u32
    }
    fn next_u64(&mut self) -> u64 {
        self.0
    }
    fn fill_bytes(&mut self, dst: &mut [u8]) {
        dst.fill(self.0 as u8);
    }
}

/* ──────────────────────────────────────────────────────────────────────────
1) Bust rule — result is 0 or the exact sum, never anything else
────────────────────────────────────────────────────────────────────────── */

#[test]
fn turn_points_is_zero_or_sum() {
    let mut dice = Dice::new(rng(1));
    for pairs in 0..12 {
        for _ in 0..500 {
            let faces = dice.roll_pairs(pairs);
            let sum: u32 = faces.iter().map(|&f| f as u32).sum();
            let pts = turn_points(&faces);
            if faces.contains(&1) {
                assert_eq!(pts, 0, "{faces:?}");
            } else {
                assert_eq!(pts, sum, "{faces:?}");
            }
        }
    }
}

/* ──────────────────────────────────────────────────────────────────────────
2) Fixed faces — sixes under "always one pair"
────────────────────────────────────────────────────────────────────────── */

#[test]
fn sixes_first_turn_scores_twelve_then_switches() {
    let mut dice = Dice::new(Constant(u64::MAX));
    let mut turns: Vec<TurnRecord> = Vec::new();
    let winner = play_random_with(
        Score::default(),
        Player::First,
        &Policy::Fixed(1),
        &mut dice,
        &mut turns,
    )
    .unwrap();

    assert_eq!(turns[0].player, Player::First);
    assert_eq!(turns[0].points, 12);
    assert_eq!(turns[0].score.as_array(), [12, 0]);
    assert_eq!(turns[1].player, Player::Second);
    // 12 per turn: seat 0 crosses 100 on its 9th turn, before seat 1 does.
    assert_eq!(winner, Player::First);
    assert_eq!(turns.len(), 17);
}

#[test]
fn ninety_nine_plus_any_bank_wins_on_the_spot() {
    for x in [0, 50, 99] {
        let mut dice = Dice::new(Constant(u64::MAX));
        let mut turns: Vec<TurnRecord> = Vec::new();
        let w = play_random_with(Score::new(99, x), Player::First, &Policy::Fixed(1), &mut dice, &mut turns)
            .unwrap();
        assert_eq!(w, Player::First);
        assert_eq!(turns.len(), 1);
    }
}

/* ──────────────────────────────────────────────────────────────────────────
3) Playouts — always terminate, winner over the line, loser under it
────────────────────────────────────────────────────────────────────────── */

struct Finish {
    seen: Rc<RefCell<Vec<(Player, Score)>>>,
}

impl Hook for Finish {
    fn on_finish(&mut self, winner: Player, score: &Score) {
        self.seen.borrow_mut().push((winner, *score));
    }
}

#[test]
fn playouts_terminate_for_every_policy() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let policies = [
        Policy::Fixed(1),
        Policy::Fixed(4),
        Policy::default(),
        Policy::Poisson { lambda: 3.0 },
    ];
    let mut dice = Dice::with_chunk(rng(7), 64);
    for policy in &policies {
        for i in 0..500u32 {
            let to_move = if i % 2 == 0 { Player::First } else { Player::Second };
            let mut hook = Finish { seen: Rc::clone(&seen) };
            play_random_with(Score::default(), to_move, policy, &mut dice, &mut hook).unwrap();
        }
    }

    let seen = seen.borrow();
    assert_eq!(seen.len(), 2_000);
    for (w, s) in seen.iter() {
        assert!(s[*w] >= WIN_SCORE);
        assert!(s[w.other()] < WIN_SCORE);
    }
}

#[test]
fn playout_leaves_callers_score_alone() {
    let score = Score::new(40, 60);
    let mut dice = Dice::new(rng(3));
    let _ = play_random(score, Player::Second, &Policy::default(), &mut dice).unwrap();
    assert_eq!(score.as_array(), [40, 60]);
}

/* ──────────────────────────────────────────────────────────────────────────
4) Assessment — determinism and sampling agreement
────────────────────────────────────────────────────────────────────────── */

#[test]
fn same_seed_same_estimate() {
    let plan = TrialPlan::with_trials(2_000);
    let policy = Policy::default();
    let score = Score::new(35, 50);
    let a = assess(3, score, Player::Second, &policy, &plan, &mut rng(11)).unwrap();
    let b = assess(3, score, Player::Second, &policy, &plan, &mut rng(11)).unwrap();
    let c = assess(3, score, Player::Second, &policy, &plan.sequential(), &mut rng(11)).unwrap();
    assert_eq!(a, b);
    assert_eq!(a, c);
}

#[test]
fn independent_streams_agree_within_a_few_standard_errors() {
    let plan = TrialPlan::with_trials(5_000);
    let policy = Policy::default();
    let score = Score::new(20, 30);
    let a = assess(2, score, Player::First, &policy, &plan, &mut rng(100)).unwrap();
    let b = assess(2, score, Player::First, &policy, &plan, &mut rng(200)).unwrap();
    let se = (a.std_err().powi(2) + b.std_err().powi(2)).sqrt();
    assert!((a.p() - b.p()).abs() < 5.0 * se, "{} vs {} (se {se})", a.p(), b.p());
}

#[test]
fn huge_roll_count_is_a_bad_idea() {
    // One clean pair wins from 96; 40 pairs essentially always contain a 1.
    let plan = TrialPlan::with_trials(2_000);
    let policy = Policy::default();
    let score = Score::new(96, 90);
    let safe = assess(1, score, Player::First, &policy, &plan, &mut rng(5)).unwrap();
    let reckless = assess(40, score, Player::First, &policy, &plan, &mut rng(6)).unwrap();
    assert!(safe.p() > reckless.p(), "{} vs {}", safe.p(), reckless.p());
}

/* ──────────────────────────────────────────────────────────────────────────
5) Greedy selection — synthetic curve and a real scan
────────────────────────────────────────────────────────────────────────── */

#[test]
fn concave_curve_commits_to_peak() {
    let curve = [0.3, 0.5, 0.6, 0.55, 0.5, 0.7];
    let calls = Rc::new(RefCell::new(Vec::new()));
    let sel = {
        let calls = Rc::clone(&calls);
        choose_rolls_with(
            move |k| {
                calls.borrow_mut().push(k);
                Ok(curve[(k - 1) as usize])
            },
            20,
        )
        .unwrap()
    };
    assert_eq!(sel.rolls, 3);
    assert_eq!(*calls.borrow(), vec![1, 2, 3, 4]);
}

#[test]
fn real_scan_is_monotone_and_stops_after_a_drop() {
    let plan = TrialPlan::with_trials(1_000);
    let sel = choose_rolls(Score::new(30, 45), Player::Second, &Policy::default(), &plan, 60, &mut rng(42))
        .unwrap();

    assert!(sel.rolls >= 1);
    let ks: Vec<u32> = sel.checked.iter().map(|(k, _)| *k).collect();
    let expect: Vec<u32> = (1..=ks.len() as u32).collect();
    assert_eq!(ks, expect);
    if !sel.capped {
        let (last_k, last_p) = *sel.checked.last().unwrap();
        assert_eq!(last_k, sel.rolls + 1);
        assert!(last_p < sel.estimate);
    }
    for w in sel.checked[..sel.rolls as usize].windows(2) {
        assert!(w[1].1 >= w[0].1);
    }
}
