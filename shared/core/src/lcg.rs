// Linear congruential generator with a full period over [0, m)
// https://en.wikipedia.org/wiki/Linear_congruential_generator
//
// Not meant to pass statistical tests. It walks a large index range in a
// non-sequential order without materializing a shuffled copy of it.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::hull_dobell::{satisfies_hull_dobell, search_parameters};
use crate::prime::prime_factors;

/// Every cycle starts from and ends on this value.
const SEED: u64 = 0;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FullPeriodLcgError {
    #[error("modulus must be positive, got {0}")]
    InvalidModulus(u64),

    #[error("multiplier {multiplier} and increment {increment} don't give a full period for modulus {modulus}")]
    InvalidParameters {
        modulus: u64,
        multiplier: u64,
        increment: u64,
    },
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LcgParams {
    pub modulus: u64,
    pub multiplier: u64,
    pub increment: u64,
}

#[derive(Clone, Debug)]
pub struct FullPeriodLcg {
    params: LcgParams,
    /// `None` until the first step.
    current: Option<u64>,
    position: u64,
}

impl FullPeriodLcg {
    /// Chooses parameters for a generator over `[0, modulus)` using `rng`.
    ///
    /// Moduli 1 and 2 get the trivial parameters `a = c = 1`. The same `rng`
    /// state always produces the same parameters, and so the same sequence.
    pub fn new<R: Rng + ?Sized>(modulus: u64, rng: &mut R) -> Result<Self, FullPeriodLcgError> {
        let (multiplier, increment) = match modulus {
            0 => return Err(FullPeriodLcgError::InvalidModulus(modulus)),
            1 | 2 => (1, 1),
            _ => {
                let factors = prime_factors(modulus)
                    .map_err(|_| FullPeriodLcgError::InvalidModulus(modulus))?;
                search_parameters(modulus, &factors, rng)
            }
        };
        let params = LcgParams {
            modulus,
            multiplier,
            increment,
        };
        debug!(modulus, multiplier, increment, "constructed full-period LCG");
        Ok(Self::from_valid_params(params))
    }

    /// Like [`Self::new`], drawing parameters from a `ChaCha8Rng` seeded with `seed`.
    pub fn from_seed(modulus: u64, seed: [u8; 32]) -> Result<Self, FullPeriodLcgError> {
        Self::new(modulus, &mut ChaCha8Rng::from_seed(seed))
    }

    /// Rebuilds a generator from previously chosen parameters.
    pub fn from_params(params: LcgParams) -> Result<Self, FullPeriodLcgError> {
        let LcgParams {
            modulus,
            multiplier,
            increment,
        } = params;
        if modulus == 0 {
            return Err(FullPeriodLcgError::InvalidModulus(modulus));
        }
        if !satisfies_hull_dobell(modulus, multiplier, increment) {
            return Err(FullPeriodLcgError::InvalidParameters {
                modulus,
                multiplier,
                increment,
            });
        }
        Ok(Self::from_valid_params(params))
    }

    fn from_valid_params(params: LcgParams) -> Self {
        FullPeriodLcg {
            params,
            current: None,
            position: 0,
        }
    }

    pub fn params(&self) -> LcgParams {
        self.params
    }

    pub fn modulus(&self) -> u64 {
        self.params.modulus
    }

    pub fn multiplier(&self) -> u64 {
        self.params.multiplier
    }

    pub fn increment(&self) -> u64 {
        self.params.increment
    }

    /// The last value returned by [`Self::next_value`], or `None` before the first step.
    pub fn current(&self) -> Option<u64> {
        self.current
    }

    /// Number of steps taken in the current cycle, `modulus()` once it's complete.
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Advances the generator and returns the new value, always in `[0, modulus)`.
    ///
    /// Stepping a completed generator starts an identical new cycle.
    pub fn next_value(&mut self) -> u64 {
        let LcgParams {
            modulus,
            multiplier,
            increment,
        } = self.params;
        if self.current.is_none() || self.is_cycle_complete() {
            self.position = 0;
        }
        let x = self.current.unwrap_or(SEED);
        let next = (multiplier as u128 * x as u128 + increment as u128) % modulus as u128;
        self.current = Some(next as u64);
        self.position += 1;
        next as u64
    }

    /// True once the generator has returned to its seed. Never true before the first step.
    pub fn is_cycle_complete(&self) -> bool {
        self.current == Some(SEED)
    }

    /// Iterates the rest of the current cycle, or a whole cycle if none is in progress.
    pub fn cycle(&mut self) -> Cycle<'_> {
        let remaining = if self.current.is_none() || self.is_cycle_complete() {
            self.modulus()
        } else {
            self.modulus() - self.position
        };
        Cycle {
            lcg: self,
            remaining,
        }
    }
}

pub struct Cycle<'a> {
    lcg: &'a mut FullPeriodLcg,
    remaining: u64,
}

impl Iterator for Cycle<'_> {
    type Item = u64;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(self.lcg.next_value())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for Cycle<'_> {}
