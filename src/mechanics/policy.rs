/// Roll-count policies: how many dice-pairs a player commits to before the
/// outcome is known. Playouts use one of these as a stand-in for both
/// players' future turns.
use std::fmt;
use std::str::FromStr;

use rand_core::RngCore;

use super::dice::MAX_PAIRS;
use super::stoch;
use crate::error::{Error, Result};

pub trait RollPolicy {
    /// Dice-pairs to roll this turn. Anything below 1 is rejected by the
    /// simulator.
    fn pairs<R: RngCore + ?Sized>(&self, rng: &mut R) -> u32;
}

/// The built-in stand-ins.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Policy {
    /// Always the same number of pairs.
    Fixed(u32),
    /// `1 + Binomial(n, p)`.
    Binomial { n: u32, p: f64 },
    /// `1 + Poisson(lambda)`.
    Poisson { lambda: f64 },
}

impl Default for Policy {
    fn default() -> Self {
        Policy::Binomial { n: 20, p: 0.1 }
    }
}

impl Policy {
    pub fn validate(&self) -> Result<()> {
        match *self {
            Policy::Fixed(k) => {
                if k == 0 {
                    return Err(Error::InvalidPolicy { pairs: 0 });
                }
                if k > MAX_PAIRS {
                    return Err(Error::OutOfRange { field: "fixed pairs", value: k as f64 });
                }
            }
            Policy::Binomial { n, p } => {
                if n >= MAX_PAIRS {
                    return Err(Error::OutOfRange { field: "binomial n", value: n as f64 });
                }
                if !(0.0..=1.0).contains(&p) {
                    return Err(Error::OutOfRange { field: "binomial p", value: p });
                }
            }
            Policy::Poisson { lambda } => {
                if !lambda.is_finite() || lambda < 0.0 {
                    return Err(Error::OutOfRange { field: "poisson lambda", value: lambda });
                }
            }
        }
        Ok(())
    }
}

impl RollPolicy for Policy {
    #[inline]
    fn pairs<R: RngCore + ?Sized>(&self, rng: &mut R) -> u32 {
        match *self {
            Policy::Fixed(k) => k,
            Policy::Binomial { n, p } => 1 + stoch::binomial(rng, n, p),
            Policy::Poisson { lambda } => 1 + stoch::poisson(rng, lambda),
        }
    }
}

/// Parses `fixed:K`, `binomial[:N:P]` or `poisson[:LAMBDA]`.
impl FromStr for Policy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let unknown = || Error::UnknownPolicy { value: s.to_string() };
        let mut parts = s.trim().split(':');
        let policy = match parts.next().map(str::to_ascii_lowercase).as_deref() {
            Some("fixed") => {
                let k = parts.next().ok_or_else(unknown)?.parse().map_err(|_| unknown())?;
                Policy::Fixed(k)
            }
            Some("binomial") => match (parts.next(), parts.next()) {
                (None, _) => Policy::default(),
                (Some(n), Some(p)) => Policy::Binomial {
                    n: n.parse().map_err(|_| unknown())?,
                    p: p.parse().map_err(|_| unknown())?,
                },
                _ => return Err(unknown()),
            },
            Some("poisson") => match parts.next() {
                None => Policy::Poisson { lambda: 3.0 },
                Some(l) => Policy::Poisson { lambda: l.parse().map_err(|_| unknown())? },
            },
            _ => return Err(unknown()),
        };
        if parts.next().is_some() {
            return Err(unknown());
        }
        policy.validate()?;
        Ok(policy)
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Policy::Fixed(k) => write!(f, "fixed:{k}"),
            Policy::Binomial { n, p } => write!(f, "binomial:{n}:{p}"),
            Policy::Poisson { lambda } => write!(f, "poisson:{lambda}"),
        }
    }
}

/// Wraps a parameterless closure as a policy.
#[derive(Clone, Copy, Debug)]
pub struct FromFn<F>(pub F);

impl<F: Fn() -> u32> RollPolicy for FromFn<F> {
    #[inline]
    fn pairs<R: RngCore + ?Sized>(&self, _rng: &mut R) -> u32 {
        (self.0)()
    }
}
