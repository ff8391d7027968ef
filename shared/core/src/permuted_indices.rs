use std::ops::Range;

use crate::lcg::FullPeriodLcg;
use crate::traversal::Traversal;

// Visits [0, len) in O(1) memory, as opposed to shuffling a materialized Vec of indices.

enum Order {
    Sequential(Range<u64>),
    Seeded { lcg: FullPeriodLcg, remaining: u64 },
}

pub struct PermutedIndices {
    order: Order,
}

/// Every index in `[0, len)` exactly once, in an order fixed by `traversal`.
pub fn permuted_indices(len: u64, traversal: Traversal) -> PermutedIndices {
    let order = match traversal {
        Traversal::Seeded(seed) => match FullPeriodLcg::from_seed(len, seed) {
            Ok(lcg) => Order::Seeded {
                lcg,
                remaining: len,
            },
            // only a zero length is rejected, and there's nothing to visit then
            Err(_) => Order::Sequential(0..0),
        },
        Traversal::Sequential => Order::Sequential(0..len),
    };
    PermutedIndices { order }
}

impl Iterator for PermutedIndices {
    type Item = u64;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.order {
            Order::Sequential(range) => range.next(),
            Order::Seeded { lcg, remaining } => {
                if *remaining == 0 {
                    return None;
                }
                *remaining -= 1;
                Some(lcg.next_value())
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = match &self.order {
            Order::Sequential(range) => range.end - range.start,
            Order::Seeded { remaining, .. } => *remaining,
        };
        let n = remaining as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for PermutedIndices {}

/// Borrows `items` in the order given by `traversal`.
pub fn permuted<T>(items: &[T], traversal: Traversal) -> impl ExactSizeIterator<Item = &T> + '_ {
    permuted_indices(items.len() as u64, traversal).map(move |i| &items[i as usize])
}
