use thiserror::Error;

/// Alias for `core::result::Result<T, Error>`.
pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for Merkle tree operations.
#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// An input violated the builder's or verifier's argument contract.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// A leaf index beyond the tree's leaf count was passed to proof
    /// generation.
    #[error("leaf index {index} out of range (leaf count {leaf_count})")]
    LeafIndexOutOfRange {
        /// The requested leaf index.
        index: usize,
        /// Number of leaves in the tree.
        leaf_count: usize,
    },
    /// No leaf payload satisfied the predicate.
    #[error("no leaf matched the predicate")]
    NoLeafMatched,
    /// A proof's structure is internally inconsistent.
    #[error("invalid proof: {0}")]
    InvalidProof(String),
    /// The shared tree was destroyed before this operation ran.
    #[error("tree has been destroyed")]
    TreeDestroyed,
}
