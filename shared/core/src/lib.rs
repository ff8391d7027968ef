mod hull_dobell;
mod lcg;
mod permuted_indices;
mod prime;
mod traversal;

pub use hull_dobell::satisfies_hull_dobell;
pub use lcg::{Cycle, FullPeriodLcg, FullPeriodLcgError, LcgParams};
pub use permuted_indices::{permuted, permuted_indices, PermutedIndices};
pub use prime::{gcd, is_prime, prime_factors, NumberTheoryError};
pub use traversal::Traversal;
