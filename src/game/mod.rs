// src/game/mod.rs

//! Human-vs-computer driver.
//!
//! [`Match`] owns the authoritative score and whose turn it is. Each turn is
//! delegated to [`human::human_turn`] or [`computer::computer_turn`]; the
//! driver flips the seat afterwards and stops when a turn reports a win.
//! Simulations only ever see copies of the score.

pub mod computer;
pub mod human;

use std::io::{BufRead, Write};

use bevy_prng::WyRand;
use rand_core::{RngCore, SeedableRng};
use tracing::info;

use crate::config::Config;
use crate::error::Result;
use crate::mechanics::{Dice, Player, Score};

/// Faces drawn per refill for the real table; a game uses few.
const TABLE_CHUNK: usize = 64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Seat {
    Human,
    Computer,
}

impl Seat {
    /// Name printed when this seat wins.
    pub fn name(self) -> &'static str {
        match self {
            Seat::Human => "Human",
            Seat::Computer => "PC",
        }
    }
}

pub struct Match {
    cfg: Config,
    score: Score,
    to_move: Player,
    seats: [Seat; 2],
    dice: Dice<WyRand>,
    sim_rng: WyRand,
}

impl Match {
    /// Seat 0 opens. The human takes seat 0 unless `cfg.computer_first`.
    pub fn new(cfg: Config) -> Result<Self> {
        cfg.validate()?;
        let mut master = cfg.rng();
        let dice = Dice::with_chunk(WyRand::from_seed(master.next_u64().to_le_bytes()), TABLE_CHUNK);
        let sim_rng = WyRand::from_seed(master.next_u64().to_le_bytes());
        let seats = if cfg.computer_first {
            [Seat::Computer, Seat::Human]
        } else {
            [Seat::Human, Seat::Computer]
        };
        Ok(Self { cfg, score: Score::default(), to_move: Player::First, seats, dice, sim_rng })
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn to_move(&self) -> Player {
        self.to_move
    }

    pub fn seat(&self, p: Player) -> Seat {
        self.seats[p.index()]
    }

    /// Play the current turn. Returns the winning seat if the game is over.
    pub fn play_turn<I, O>(&mut self, input: &mut I, out: &mut O) -> Result<Option<Seat>>
    where
        I: BufRead + ?Sized,
        O: Write + ?Sized,
    {
        let me = self.to_move;
        let seat = self.seat(me);
        let won = match seat {
            Seat::Human => human::human_turn(&mut self.score, me, &mut self.dice, input, out)?,
            Seat::Computer => computer::computer_turn(
                &mut self.score,
                me,
                &self.cfg,
                &mut self.sim_rng,
                &mut self.dice,
                out,
            )?,
        };
        info!(seat = seat.name(), score = ?self.score.as_array(), won, "turn over");
        if won {
            return Ok(Some(seat));
        }
        self.to_move = me.other();
        Ok(None)
    }

    /// Play to the end and print the winner's name.
    pub fn run<I, O>(&mut self, input: &mut I, out: &mut O) -> Result<Seat>
    where
        I: BufRead + ?Sized,
        O: Write + ?Sized,
    {
        loop {
            if let Some(winner) = self.play_turn(input, out)? {
                writeln!(out, "{}", winner.name())?;
                out.flush()?;
                return Ok(winner);
            }
        }
    }
}

/// Faces separated by single spaces.
pub(crate) fn faces_line(faces: &[u8]) -> String {
    faces.iter().map(u8::to_string).collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
pub(crate) mod testing {
    use rand_core::RngCore;

    /// Generator stuck on one value: `u64::MAX` rolls sixes, `0` rolls ones.
    pub struct Constant(pub u64);

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
}
