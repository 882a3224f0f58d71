//! Proof verification.
//!
//! Pure function of the proof, the expected root, and the leaf bytes — no
//! tree required. The verifier rebuilds each parent's child-digest list by
//! inserting the running digest at the recorded position among the
//! recorded siblings, then rehashes, exactly mirroring construction.

use crate::{
    hash::{hash_block, hash_children, CryptoHash},
    proof::InclusionProof,
    Error, Result,
};

impl InclusionProof {
    /// Verify this proof against `expected_root` for the given leaf bytes.
    ///
    /// Returns `Ok(true)` when the reconstructed root equals
    /// `expected_root`, and `Ok(false)` for a well-formed proof whose
    /// reconstruction does not match — a tampered leaf, a different root,
    /// or leaf bytes from another position. A mismatch is a negative
    /// answer, not a failure.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] if the proof carries a branching factor
    /// below 2 or `leaf_bytes` is empty; [`Error::InvalidProof`] if a
    /// level's position or sibling count is inconsistent with the
    /// branching factor.
    pub fn verify(&self, expected_root: &CryptoHash, leaf_bytes: &[u8]) -> Result<bool> {
        if self.branching_factor < 2 {
            return Err(Error::InvalidArgument(format!(
                "branching factor must be at least 2, got {}",
                self.branching_factor
            )));
        }
        if leaf_bytes.is_empty() {
            return Err(Error::InvalidArgument(
                "leaf bytes must not be empty".to_string(),
            ));
        }
        self.validate_levels()?;

        let mut acc = hash_block(leaf_bytes);
        for level in &self.path {
            let position = level.position as usize;
            let mut children: Vec<CryptoHash> = Vec::with_capacity(level.siblings.len() + 1);
            children.extend_from_slice(&level.siblings[..position]);
            children.push(acc);
            children.extend_from_slice(&level.siblings[position..]);
            acc = hash_children(&children);
        }

        Ok(acc == *expected_root)
    }
}
