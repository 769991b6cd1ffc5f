/// Score mechanics: the two-player score pair and the win threshold.

use std::fmt;
use std::ops::{Index, IndexMut};

/// Points needed to win. The first player to reach it ends the game.
pub const WIN_SCORE: u32 = 100;

/// Seat index, 0 or 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    First = 0,
    Second = 1,
}

impl Player {
    #[inline]
    pub fn other(self) -> Self {
        match self {
            Player::First => Player::Second,
            Player::Second => Player::First,
        }
    }

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())
    }
}

/// Banked points of both players. Copies are cheap; simulations work on copies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Score([u32; 2]);

impl Score {
    pub fn new(first: u32, second: u32) -> Self {
        Self([first, second])
    }

    /// Add a turn's gain to `player`. Scores never decrease.
    #[inline]
    pub fn bank(&mut self, player: Player, points: u32) {
        self.0[player.index()] = self.0[player.index()].saturating_add(points);
    }

    /// Winner if either side has reached [`WIN_SCORE`].
    ///
    /// Player 0 is checked first. Only one entry changes per turn, so both
    /// being over the line at once cannot come out of a real game.
    #[inline]
    pub fn winner(&self) -> Option<Player> {
        if self.0[0] >= WIN_SCORE {
            Some(Player::First)
        } else if self.0[1] >= WIN_SCORE {
            Some(Player::Second)
        } else {
            None
        }
    }

    pub fn as_array(&self) -> [u32; 2] {
        self.0
    }
}

impl Index<Player> for Score {
    type Output = u32;
    fn index(&self, p: Player) -> &u32 {
        &self.0[p.index()]
    }
}

impl IndexMut<Player> for Score {
    fn index_mut(&mut self, p: Player) -> &mut u32 {
        &mut self.0[p.index()]
    }
}
