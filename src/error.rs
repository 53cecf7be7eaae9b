use std::collections::TryReserveError;

use thiserror::Error;

/// Why [`OrderedTree::try_rebuild`][crate::OrderedTree::try_rebuild] left the tree untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RebuildError {
    /// The buffer holding the flattened elements could not be allocated.
    #[error("could not reserve space to flatten {size} elements: {source}")]
    Reserve {
        /// How many elements the tree holds.
        size: usize,
        /// The allocator's refusal.
        source: TryReserveError,
    },
}
