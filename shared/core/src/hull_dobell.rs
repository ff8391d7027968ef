// Parameter search for full-period LCGs.
// https://en.wikipedia.org/wiki/Linear_congruential_generator#c_%E2%89%A0_0
//
// With c != 0 the recurrence has period m for every seed iff
//  m and c are relatively prime,
//  a - 1 is divisible by all prime factors of m,
//  a - 1 is divisible by 4 if m is divisible by 4.

use rand::Rng;
use tracing::trace;

use crate::prime::{gcd, prime_factors};

/// How many boundary-looking candidates get redrawn before any valid one is accepted.
/// Shared between the increment and the multiplier search.
const SOFT_BIAS_TRIES: u32 = 10;

/// Increments within this distance of either end of the range are disfavoured.
const BOUNDARY_MARGIN: u64 = 5;

/// Budget for rejecting valid-but-dull candidates. Once spent, anything valid goes.
#[derive(Debug)]
pub(crate) struct SoftBias {
    tries_left: u32,
}

impl SoftBias {
    pub(crate) fn new(tries: u32) -> Self {
        SoftBias { tries_left: tries }
    }

    /// Returns true if the candidate should be redrawn, spending one try.
    pub(crate) fn redraw(&mut self, disfavoured: bool) -> bool {
        if disfavoured && self.tries_left > 0 {
            self.tries_left -= 1;
            true
        } else {
            false
        }
    }

    pub(crate) fn tries_left(&self) -> u32 {
        self.tries_left
    }
}

impl Default for SoftBias {
    fn default() -> Self {
        Self::new(SOFT_BIAS_TRIES)
    }
}

/// Every multiplier `a` with `a - 1` a multiple of this satisfies the divisibility conditions.
fn multiplier_stride(modulus: u64, factors: &[u64]) -> u64 {
    let radical: u64 = factors.iter().product();
    if modulus % 4 == 0 {
        radical * 2
    } else {
        radical
    }
}

fn choose_increment<R: Rng + ?Sized>(modulus: u64, rng: &mut R, bias: &mut SoftBias) -> u64 {
    let mut draws = 0u64;
    loop {
        draws += 1;
        let c = rng.gen_range(1..=modulus - 2);
        // sequences look more random with c away from the ends of the range
        if bias.redraw(c > modulus.saturating_sub(BOUNDARY_MARGIN) || c <= BOUNDARY_MARGIN) {
            continue;
        }
        if gcd(c, modulus) == 1 {
            trace!(modulus, increment = c, draws, "chose increment");
            return c;
        }
    }
}

fn choose_multiplier<R: Rng + ?Sized>(
    modulus: u64,
    stride: u64,
    rng: &mut R,
    bias: &mut SoftBias,
) -> u64 {
    // valid multipliers in [1, m - 1] are exactly 1 + k * stride for k in [0, (m - 2) / stride]
    let max_k = (modulus - 2) / stride;
    let mut draws = 0u64;
    loop {
        draws += 1;
        let a = 1 + stride * rng.gen_range(0..=max_k);
        if bias.redraw(a == 1) {
            continue;
        }
        trace!(modulus, multiplier = a, draws, "chose multiplier");
        return a;
    }
}

/// Picks `(multiplier, increment)` for a full-period LCG over `[0, modulus)`.
///
/// `modulus` must be greater than 2 and `factors` its distinct prime factors.
pub(crate) fn search_parameters<R: Rng + ?Sized>(
    modulus: u64,
    factors: &[u64],
    rng: &mut R,
) -> (u64, u64) {
    debug_assert!(modulus > 2);
    let stride = multiplier_stride(modulus, factors);

    let mut bias = SoftBias::default();
    let increment = choose_increment(modulus, rng, &mut bias);
    let multiplier = choose_multiplier(modulus, stride, rng, &mut bias);
    trace!(
        modulus,
        stride,
        tries_left = bias.tries_left(),
        "parameter search finished"
    );
    (multiplier, increment)
}

/// Whether `(multiplier, increment)` give period exactly `modulus`.
///
/// Moduli 1 and 2 only accept the unit parameters `a = c = 1`.
pub fn satisfies_hull_dobell(modulus: u64, multiplier: u64, increment: u64) -> bool {
    if modulus <= 2 {
        return modulus > 0 && multiplier == 1 && increment == 1;
    }
    if !(1..modulus).contains(&multiplier) || !(1..modulus).contains(&increment) {
        return false;
    }
    let Ok(factors) = prime_factors(modulus) else {
        return false;
    };
    (multiplier - 1) % multiplier_stride(modulus, &factors) == 0 && gcd(increment, modulus) == 1
}
