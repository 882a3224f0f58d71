//! SHA-256 hashing for tree construction and proof verification.

use sha2::{Digest, Sha256};

/// The length of a [`CryptoHash`] in bytes.
pub const HASH_LENGTH: usize = 32;

/// A SHA-256 digest.
pub type CryptoHash = [u8; HASH_LENGTH];

/// Hash a leaf block: `sha256(payload)`.
pub fn hash_block(data: &[u8]) -> CryptoHash {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Hash an interior node over its children:
/// `sha256(child_0 || child_1 || ... || child_{m-1})`.
///
/// A short trailing sibling group is hashed over exactly the children
/// present; no child is duplicated to pad the group, and no tag separates
/// leaf from interior hashing.
pub fn hash_children(children: &[CryptoHash]) -> CryptoHash {
    let mut hasher = Sha256::new();
    for child in children {
        hasher.update(child);
    }
    hasher.finalize().into()
}
