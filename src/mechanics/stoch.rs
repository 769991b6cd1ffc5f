/// Stochastic mechanics: uniform draws, die faces and the count samplers
/// behind the stand-in roll policies.
/// Note: everything takes the generator explicitly; there is no global RNG.
use rand_core::RngCore;

/// Uniform in [0, 1) from the top 53 bits.
#[inline]
pub fn unit01<R: RngCore + ?Sized>(rng: &mut R) -> f64 {
    ((rng.next_u64() >> 11) as f64) / ((1u64 << 53) as f64)
}

/// One face of a fair six-sided die, 1..=6.
#[inline]
pub fn die_face<R: RngCore + ?Sized>(rng: &mut R) -> u8 {
    // unit01 < 1 so the product stays below 6.
    1 + (unit01(rng) * 6.0) as u8
}

/// Bernoulli(p).
#[inline]
pub fn bernoulli<R: RngCore + ?Sized>(rng: &mut R, p: f64) -> bool {
    unit01(rng) < p.clamp(0.0, 1.0)
}

/// Binomial(n, p) by summing Bernoulli trials; `n` is small here (20).
pub fn binomial<R: RngCore + ?Sized>(rng: &mut R, n: u32, p: f64) -> u32 {
    (0..n).filter(|_| bernoulli(&mut *rng, p)).count() as u32
}

/// Poisson(λ) via Knuth's product of uniforms. Fine for small λ.
pub fn poisson<R: RngCore + ?Sized>(rng: &mut R, lambda: f64) -> u32 {
    let limit = (-lambda.max(0.0)).exp();
    let mut k = 0u32;
    let mut prod = unit01(rng);
    while prod > limit {
        k += 1;
        prod *= unit01(rng);
    }
    k
}

/// Seeds for `count` child streams, drawn from the parent stream.
pub fn child_seeds<R: RngCore + ?Sized>(rng: &mut R, count: usize) -> Vec<u64> {
    (0..count).map(|_| rng.next_u64()).collect()
}
