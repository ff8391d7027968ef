use serde::{Deserialize, Serialize};

/// Order in which [`crate::permuted_indices`] visits an index range.
#[derive(Serialize, Deserialize, Clone, Debug, Copy, PartialEq, Eq)]
pub enum Traversal {
    Sequential,
    Seeded([u8; 32]),
}
