//! N-ary Merkle trees with inclusion proofs.
//!
//! Builds a Merkle tree bottom-up over an ordered sequence of byte blocks
//! with a configurable branching factor, answers root-digest queries, and
//! produces inclusion proofs that verify against the root digest alone.
//!
//! Hashing is SHA-256 throughout:
//! - leaf = `sha256(payload)`
//! - interior = `sha256(child_0 || child_1 || ... || child_{m-1})`
//!
//! The trailing sibling group of a level may be short; it is hashed over
//! exactly its present children (no duplication to pad), and no tag
//! separates leaf from interior hashing.
//!
//! # Core types
//!
//! - [`MerkleTree`] — arena-backed tree (build, root hash, structural
//!   accessors, proof generation).
//! - [`InclusionProof`] — per-leaf proof (serialize, verify).
//! - [`SharedMerkleTree`] — many-readers / one-destroyer wrapper for use
//!   across threads.
//! - [`NodeId`] — opaque node handle for structural traversal.

#![warn(missing_docs)]

mod error;
mod hash;
mod node;
mod proof;
mod queue;
mod shared;
mod tree;
mod verify;

#[cfg(test)]
mod tests;

pub use error::{Error, Result};
pub use hash::{hash_block, hash_children, CryptoHash, HASH_LENGTH};
pub use node::NodeId;
pub use proof::{InclusionProof, ProofLevel};
pub use shared::SharedMerkleTree;
pub use tree::MerkleTree;
