//! Human turn over a line-based prompt.

use std::io::{BufRead, Write};

use rand_core::RngCore;
use tracing::debug;

use super::faces_line;
use crate::error::Result;
use crate::mechanics::{Dice, Player, Score, WIN_SCORE, turn_points};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    Roll,
    Bank,
}

impl Decision {
    /// `2` as the first non-blank character banks. Anything else, including
    /// an empty line, rolls.
    pub fn parse(line: &str) -> Self {
        match line.trim_start().chars().next() {
            Some('2') => Decision::Bank,
            _ => Decision::Roll,
        }
    }
}

/// Play one human turn for `me`. Returns `true` if the turn won the game.
///
/// Each roll adds one dice-pair and echoes every face rolled so far. A 1
/// anywhere busts the turn. Reaching the win score banks and wins at once.
/// End of input banks whatever is on the table.
pub fn human_turn<R, I, O>(
    score: &mut Score,
    me: Player,
    dice: &mut Dice<R>,
    input: &mut I,
    out: &mut O,
) -> Result<bool>
where
    R: RngCore,
    I: BufRead + ?Sized,
    O: Write + ?Sized,
{
    let mut rolled: Vec<u8> = Vec::new();
    let mut turn_total = 0u32;
    let mut line: Vec<u8> = Vec::new();

    loop {
        writeln!(out, "\nYou have {turn_total}/{}. PC has {}.", score[me], score[me.other()])?;
        writeln!(out, "Choose:\n\t1. Roll\n\t2. Break")?;
        out.flush()?;

        line.clear();
        // Raw bytes: input that is not UTF-8 still falls through to a roll.
        let decision = if input.read_until(b'\n', &mut line)? == 0 {
            Decision::Bank
        } else {
            Decision::parse(&String::from_utf8_lossy(&line))
        };

        match decision {
            Decision::Bank => {
                score.bank(me, turn_total);
                debug!(player = %me, banked = turn_total, "human banked");
                return Ok(score[me] >= WIN_SCORE);
            }
            Decision::Roll => {
                let pair = dice.roll_pairs(1);
                rolled.extend_from_slice(&pair);
                writeln!(out, "{}", faces_line(&rolled))?;
                if pair.contains(&1) {
                    writeln!(out, "Bust.")?;
                    debug!(player = %me, lost = turn_total, "human bust");
                    return Ok(false);
                }
                turn_total = turn_points(&rolled);
                if score[me] + turn_total >= WIN_SCORE {
                    score.bank(me, turn_total);
                    return Ok(true);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::testing::Constant;

    fn run(score: &mut Score, faces: u64, input: &str) -> (bool, String) {
        run_bytes(score, faces, input.as_bytes())
    }

    fn run_bytes(score: &mut Score, faces: u64, mut input: &[u8]) -> (bool, String) {
        let mut dice = Dice::new(Constant(faces));
        let mut out = Vec::new();
        let won = human_turn(score, Player::First, &mut dice, &mut input, &mut out).unwrap();
        (won, String::from_utf8(out).unwrap())
    }

    #[test]
    fn decision_parsing() {
        assert_eq!(Decision::parse("2"), Decision::Bank);
        assert_eq!(Decision::parse("  2 please"), Decision::Bank);
        assert_eq!(Decision::parse("1"), Decision::Roll);
        assert_eq!(Decision::parse(""), Decision::Roll);
        assert_eq!(Decision::parse("bank"), Decision::Roll);
    }

    #[test]
    fn rolls_then_banks() {
        let mut score = Score::new(10, 40);
        let (won, out) = run(&mut score, u64::MAX, "1\nx\n2\n");
        assert!(!won);
        assert_eq!(score.as_array(), [34, 40]);
        assert!(out.contains("You have 12/10. PC has 40."));
        assert!(out.contains("6 6 6 6\n"));
    }

    #[test]
    fn bust_loses_turn_total() {
        let mut score = Score::new(10, 40);
        let (won, out) = run(&mut score, 0, "1\n");
        assert!(!won);
        assert_eq!(score.as_array(), [10, 40]);
        assert!(out.contains("Bust."));
    }

    #[test]
    fn crossing_the_line_wins_immediately() {
        let mut score = Score::new(90, 0);
        let (won, _) = run(&mut score, u64::MAX, "1\n");
        assert!(won);
        assert_eq!(score[Player::First], 102);
    }

    #[test]
    fn non_utf8_line_rolls() {
        let mut score = Score::new(10, 40);
        let (won, out) = run_bytes(&mut score, u64::MAX, b"\xff\xfe\n2\n");
        assert!(!won);
        assert_eq!(score.as_array(), [22, 40]);
        assert!(out.contains("You have 12/10. PC has 40."));
    }

    #[test]
    fn end_of_input_banks() {
        let mut score = Score::new(5, 0);
        let (won, _) = run(&mut score, u64::MAX, "1\n");
        assert!(!won);
        assert_eq!(score[Player::First], 17);
    }
}
