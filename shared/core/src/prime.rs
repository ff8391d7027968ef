// Miller-Rabin primality test
// https://en.wikipedia.org/wiki/Miller%E2%80%93Rabin_primality_test

use thiserror::Error;

/// Deterministic witness set, exact well past the range of u64.
const WITNESSES: [u64; 13] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NumberTheoryError {
    #[error("{0} has no prime factorization")]
    InvalidArgument(u64),
}

fn mul_mod(a: u64, b: u64, m: u64) -> u64 {
    ((a as u128 * b as u128) % m as u128) as u64
}

fn pow_mod(mut base: u64, mut exp: u64, m: u64) -> u64 {
    let mut result = 1 % m;
    base %= m;
    while exp > 0 {
        if exp & 1 == 1 {
            result = mul_mod(result, base, m);
        }
        base = mul_mod(base, base, m);
        exp >>= 1;
    }
    result
}

/// One Miller-Rabin round for odd `n`, where `n - 1 = 2^r * d`.
fn passes_witness(a: u64, d: u64, r: u32, n: u64) -> bool {
    let mut x = pow_mod(a, d, n);
    if x == 1 || x == n - 1 {
        return true;
    }
    for _ in 1..r {
        x = mul_mod(x, x, n);
        if x == n - 1 {
            return true;
        }
    }
    false
}

/// Exact primality for every u64. 0 and 1 are not prime.
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n == 2 || n == 3 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }

    let r = (n - 1).trailing_zeros();
    let d = (n - 1) >> r;

    WITNESSES
        .iter()
        .filter(|&&a| a <= n - 2)
        .all(|&a| passes_witness(a, d, r, n))
}

/// Distinct prime factors of `n` in increasing order.
///
/// `prime_factors(1)` is `[1]`: a sentinel for "no prime structure", not a real factor.
pub fn prime_factors(n: u64) -> Result<Vec<u64>, NumberTheoryError> {
    if n == 0 {
        return Err(NumberTheoryError::InvalidArgument(n));
    }
    if n == 1 {
        return Ok(vec![1]);
    }

    let mut factors = Vec::new();
    let mut rest = n;
    let mut candidate = 2;
    while rest > 1 {
        if is_prime(rest) {
            factors.push(rest);
            break;
        }
        // every prime below `candidate` is already divided out, so the next divisor is prime
        while rest % candidate != 0 {
            candidate += if candidate == 2 { 1 } else { 2 };
        }
        factors.push(candidate);
        while rest % candidate == 0 {
            rest /= candidate;
        }
    }
    Ok(factors)
}

pub fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trial_division_is_prime(n: u64) -> bool {
        n >= 2 && (2..).take_while(|i| i * i <= n).all(|i| n % i != 0)
    }

    #[test]
    fn test_is_prime_matches_trial_division() {
        for n in 2..10_000 {
            assert_eq!(is_prime(n), trial_division_is_prime(n), "is_prime({n})");
        }
    }

    #[test]
    fn test_is_prime_small_inputs() {
        assert!(!is_prime(0));
        assert!(!is_prime(1));
        assert!(is_prime(2));
        assert!(is_prime(3));
        assert!(!is_prime(4));
    }

    #[test]
    fn test_is_prime_carmichael_numbers() {
        for n in [561, 1105, 1729, 2465, 41041, 825265] {
            assert!(!is_prime(n), "{n} is a Carmichael number");
        }
    }

    #[test]
    fn test_is_prime_strong_pseudoprimes() {
        // strong pseudoprime to bases 2, 3, 5 and 7
        assert!(!is_prime(3_215_031_751));
        // strong pseudoprime to every prime base up to 23
        assert!(!is_prime(3_825_123_056_546_413_051));
    }

    #[test]
    fn test_is_prime_large() {
        assert!(is_prime((1 << 61) - 1));
        assert!(is_prime(1_000_000_007));
        assert!(is_prime(18_446_744_073_709_551_557));
        assert!(!is_prime(u64::MAX));
        assert!(!is_prime(1_000_000_007 * 998_244_353));
    }

    #[test]
    fn test_prime_factors() {
        let cases: [(u64, &[u64]); 10] = [
            (1, &[1]),
            (2, &[2]),
            (3, &[3]),
            (4, &[2]),
            (8, &[2]),
            (6, &[2, 3]),
            (15, &[3, 5]),
            (42, &[2, 3, 7]),
            (49, &[7]),
            (1_000_000, &[2, 5]),
        ];
        for (n, want) in cases {
            assert_eq!(prime_factors(n).unwrap(), want, "prime_factors({n})");
        }
    }

    #[test]
    fn test_prime_factors_large() {
        assert_eq!(
            prime_factors(600_851_475_143).unwrap(),
            vec![71, 839, 1471, 6857]
        );
        assert_eq!(prime_factors(1 << 63).unwrap(), vec![2]);
        assert_eq!(
            prime_factors((1 << 61) - 1).unwrap(),
            vec![(1 << 61) - 1]
        );
    }

    #[test]
    fn test_prime_factors_zero() {
        assert_eq!(prime_factors(0), Err(NumberTheoryError::InvalidArgument(0)));
    }

    #[test]
    fn test_gcd() {
        assert_eq!(gcd(12, 18), 6);
        assert_eq!(gcd(17, 5), 1);
        assert_eq!(gcd(0, 9), 9);
        assert_eq!(gcd(9, 0), 9);
    }
}
