//! Inclusion proof generation and serialization.
//!
//! An [`InclusionProof`] records, for one leaf, the sibling digests and
//! the subject's position at every level from the leaf up to the root.
//! Together with the leaf bytes it is all a verifier needs to recompute
//! the root digest (see [`InclusionProof::verify`]).
//!
//! Fields are `pub(crate)` so external code cannot assemble proofs that
//! bypass generation; deserialization revalidates structure instead.

use bincode::{Decode, Encode};

use crate::{hash::CryptoHash, tree::MerkleTree, Error, Result};

/// One level of an inclusion proof.
///
/// Describes the parent of the subject's ancestor at this level: the
/// digests of the parent's other children in left-to-right order, and the
/// index the ancestor occupies among the parent's children.
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub struct ProofLevel {
    pub(crate) siblings: Vec<CryptoHash>,
    pub(crate) position: u32,
}

impl ProofLevel {
    /// Digests of the parent's children other than the subject's
    /// ancestor, preserving their relative order.
    pub fn siblings(&self) -> &[CryptoHash] {
        &self.siblings
    }

    /// Index of the subject's ancestor within the parent's children.
    pub fn position(&self) -> usize {
        self.position as usize
    }
}

/// An inclusion proof for a single leaf of a [`MerkleTree`].
///
/// Carries the originating tree's branching factor so verification is
/// self-contained. The path runs from the leaf level upward and has
/// exactly `tree.depth()` levels; a single-leaf tree yields an empty
/// path.
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub struct InclusionProof {
    pub(crate) leaf_index: u64,
    pub(crate) branching_factor: u32,
    pub(crate) path: Vec<ProofLevel>,
}

impl InclusionProof {
    /// Position of the subject leaf in the originating tree.
    pub fn leaf_index(&self) -> usize {
        self.leaf_index as usize
    }

    /// Branching factor of the originating tree.
    pub fn branching_factor(&self) -> usize {
        self.branching_factor as usize
    }

    /// Proof levels from the leaf level upward.
    pub fn path(&self) -> &[ProofLevel] {
        &self.path
    }

    /// Serialize this proof to bytes using bincode.
    pub fn encode_to_vec(&self) -> Result<Vec<u8>> {
        let config = bincode::config::standard()
            .with_big_endian()
            .with_no_limit();
        bincode::encode_to_vec(self, config)
            .map_err(|e| Error::InvalidProof(format!("encode error: {}", e)))
    }

    /// Deserialize a proof from bytes and validate its structure.
    ///
    /// The bincode size limit is capped at 100 MiB to bound allocation
    /// from untrusted input.
    pub fn decode_from_slice(bytes: &[u8]) -> Result<Self> {
        let config = bincode::config::standard()
            .with_big_endian()
            .with_limit::<{ 100 * 1024 * 1024 }>();
        let (proof, _): (Self, _) = bincode::decode_from_slice(bytes, config)
            .map_err(|e| Error::InvalidProof(format!("decode error: {}", e)))?;
        if proof.branching_factor < 2 {
            return Err(Error::InvalidProof(format!(
                "branching factor must be at least 2, got {}",
                proof.branching_factor
            )));
        }
        proof.validate_levels()?;
        Ok(proof)
    }

    /// Check every level against the carried branching factor: at most
    /// `k - 1` siblings, and a position that stays inside the parent's
    /// reconstructed child list.
    pub(crate) fn validate_levels(&self) -> Result<()> {
        let branching_factor = self.branching_factor as usize;
        for (level, entry) in self.path.iter().enumerate() {
            if entry.siblings.len() >= branching_factor {
                return Err(Error::InvalidProof(format!(
                    "level {} carries {} siblings (branching factor {})",
                    level,
                    entry.siblings.len(),
                    branching_factor
                )));
            }
            if entry.position as usize > entry.siblings.len() {
                return Err(Error::InvalidProof(format!(
                    "level {} position {} exceeds its sibling count {}",
                    level,
                    entry.position,
                    entry.siblings.len()
                )));
            }
        }
        Ok(())
    }
}

impl MerkleTree {
    /// Generate an inclusion proof for the leaf at `leaf_index`.
    ///
    /// Walks leaf to root, recording at each step the digests of the
    /// parent's other children and the position the current node occupies
    /// among them.
    ///
    /// # Errors
    ///
    /// [`Error::LeafIndexOutOfRange`] if `leaf_index >= leaf_count()`.
    pub fn prove(&self, leaf_index: usize) -> Result<InclusionProof> {
        let Some(&leaf) = self.leaves.get(leaf_index) else {
            return Err(Error::LeafIndexOutOfRange {
                index: leaf_index,
                leaf_count: self.leaf_count(),
            });
        };

        let mut path = Vec::with_capacity(self.depth);
        let mut current = leaf;
        while let Some(parent) = self.nodes[current.index()].parent {
            let position = self.nodes[current.index()].index_in_parent;
            let siblings = self.nodes[parent.index()]
                .children
                .iter()
                .enumerate()
                .filter(|(child_position, _)| *child_position != position)
                .map(|(_, child)| self.nodes[child.index()].hash)
                .collect();
            path.push(ProofLevel {
                siblings,
                position: position as u32,
            });
            current = parent;
        }
        debug_assert_eq!(path.len(), self.depth);

        Ok(InclusionProof {
            leaf_index: leaf_index as u64,
            branching_factor: self.branching_factor as u32,
            path,
        })
    }

    /// Generate an inclusion proof for the first leaf whose payload
    /// satisfies `predicate`, in ascending leaf-index order.
    ///
    /// The predicate must be pure; behavior is unspecified otherwise.
    ///
    /// # Errors
    ///
    /// [`Error::NoLeafMatched`] if no leaf satisfies the predicate.
    pub fn prove_first_matching<P>(&self, predicate: P) -> Result<InclusionProof>
    where
        P: Fn(&[u8]) -> bool,
    {
        for (index, &leaf) in self.leaves.iter().enumerate() {
            let payload = self.nodes[leaf.index()]
                .payload
                .as_deref()
                .expect("leaves always carry a payload");
            if predicate(payload) {
                return self.prove(index);
            }
        }
        Err(Error::NoLeafMatched)
    }
}
