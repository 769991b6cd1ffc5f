/// Dice mechanics: the bust rule and a lazily refilled supply of faces.
use rand_core::RngCore;
use tracing::trace;

use super::stoch;

/// Most dice-pairs a built-in policy may ask for in one turn.
pub const MAX_PAIRS: u32 = 1_000_000;

/// Faces drawn per refill of a [`Dice`] buffer.
pub const DEFAULT_CHUNK: usize = 10_000;

/// Points for one turn: 0 if any face is a 1, otherwise the sum of all faces.
/// An empty turn scores 0.
#[inline]
pub fn turn_points(faces: &[u8]) -> u32 {
    if faces.contains(&1) {
        0
    } else {
        let sum: u64 = faces.iter().map(|&f| u64::from(f)).sum();
        u32::try_from(sum).unwrap_or(u32::MAX)
    }
}

/// Uniform die faces drawn from `R` in chunks and handed out one at a time.
///
/// The buffer is refilled whenever it runs dry, so a playout can consume any
/// number of faces. Reusing one `Dice` across many trials keeps a single
/// stream going instead of reseeding per trial.
#[derive(Clone, Debug)]
pub struct Dice<R> {
    rng: R,
    buf: Vec<u8>,
    cursor: usize,
    chunk: usize,
}

impl<R: RngCore> Dice<R> {
    pub fn new(rng: R) -> Self {
        Self::with_chunk(rng, DEFAULT_CHUNK)
    }

    /// `chunk` is clamped to at least one face.
    pub fn with_chunk(rng: R, chunk: usize) -> Self {
        Self { rng, buf: Vec::new(), cursor: 0, chunk: chunk.max(1) }
    }

    #[inline]
    pub fn face(&mut self) -> u8 {
        if self.cursor == self.buf.len() {
            self.refill();
        }
        let f = self.buf[self.cursor];
        self.cursor += 1;
        f
    }

    /// Roll `pairs` dice-pairs into `out` (cleared first).
    pub fn roll_pairs_into(&mut self, pairs: u32, out: &mut Vec<u8>) {
        out.clear();
        for _ in 0..2 * u64::from(pairs) {
            out.push(self.face());
        }
    }

    pub fn roll_pairs(&mut self, pairs: u32) -> Vec<u8> {
        let mut out = Vec::with_capacity(2 * pairs.min(MAX_PAIRS) as usize);
        self.roll_pairs_into(pairs, &mut out);
        out
    }

    /// Roll `pairs` dice-pairs and score them with [`turn_points`] without
    /// keeping the faces.
    pub fn roll_turn(&mut self, pairs: u32) -> u32 {
        let mut bust = false;
        let mut sum = 0u64;
        for _ in 0..2 * u64::from(pairs) {
            let f = self.face();
            bust |= f == 1;
            sum += u64::from(f);
        }
        if bust { 0 } else { u32::try_from(sum).unwrap_or(u32::MAX) }
    }

    /// The underlying generator, for draws that are not die faces.
    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    fn refill(&mut self) {
        let rng = &mut self.rng;
        self.buf.clear();
        self.buf.extend((0..self.chunk).map(|_| stoch::die_face(rng)));
        self.cursor = 0;
        trace!(chunk = self.chunk, "refilled die faces");
    }
}
