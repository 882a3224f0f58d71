//! Reader/writer discipline for a tree shared across threads.
//!
//! A fully built tree is immutable, so a single lock around the whole
//! tree is enough: any number of readers run concurrently, and exclusive
//! mode is reserved for destruction. Readers block on an in-flight
//! destroy; destroy blocks until readers drain.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::{hash::CryptoHash, proof::InclusionProof, tree::MerkleTree, Error, Result};

/// A [`MerkleTree`] shared between threads under a reader/writer lock.
///
/// Clones share the same underlying tree. [`destroy`](Self::destroy)
/// consumes the tree for every clone; reads issued afterward return
/// [`Error::TreeDestroyed`].
#[derive(Debug, Clone)]
pub struct SharedMerkleTree {
    inner: Arc<RwLock<Option<MerkleTree>>>,
}

impl SharedMerkleTree {
    /// Publish a built tree for shared reading.
    ///
    /// The lock handoff makes the completed tree visible to every thread
    /// that subsequently acquires read mode.
    pub fn new(tree: MerkleTree) -> Self {
        SharedMerkleTree {
            inner: Arc::new(RwLock::new(Some(tree))),
        }
    }

    /// Run `f` against the tree under the shared lock.
    ///
    /// # Errors
    ///
    /// [`Error::TreeDestroyed`] if the tree has been destroyed.
    pub fn read<R>(&self, f: impl FnOnce(&MerkleTree) -> R) -> Result<R> {
        let guard = self.inner.read();
        match guard.as_ref() {
            Some(tree) => Ok(f(tree)),
            None => Err(Error::TreeDestroyed),
        }
    }

    /// Run `f` against the tree under the exclusive lock, blocking until
    /// readers drain.
    ///
    /// A published tree is immutable through its own API, so exclusive
    /// access is only needed by callers swapping the tree out wholesale or
    /// coordinating teardown.
    ///
    /// # Errors
    ///
    /// [`Error::TreeDestroyed`] if the tree has been destroyed.
    pub fn write<R>(&self, f: impl FnOnce(&mut MerkleTree) -> R) -> Result<R> {
        let mut guard = self.inner.write();
        match guard.as_mut() {
            Some(tree) => Ok(f(tree)),
            None => Err(Error::TreeDestroyed),
        }
    }

    /// Root digest of the shared tree.
    pub fn root_hash(&self) -> Result<CryptoHash> {
        self.read(MerkleTree::root_hash)
    }

    /// Generate an inclusion proof for the leaf at `leaf_index` under the
    /// shared lock.
    pub fn prove(&self, leaf_index: usize) -> Result<InclusionProof> {
        self.read(|tree| tree.prove(leaf_index))?
    }

    /// Generate an inclusion proof for the first leaf whose payload
    /// satisfies `predicate`, under the shared lock.
    pub fn prove_first_matching<P>(&self, predicate: P) -> Result<InclusionProof>
    where
        P: Fn(&[u8]) -> bool,
    {
        self.read(|tree| tree.prove_first_matching(predicate))?
    }

    /// Tear down the shared tree, blocking until readers drain.
    ///
    /// One-shot: the first call drops the tree and its payloads; later
    /// calls are no-ops.
    pub fn destroy(&self) {
        let mut guard = self.inner.write();
        guard.take();
    }

    /// Whether the tree has been destroyed.
    pub fn is_destroyed(&self) -> bool {
        self.inner.read().is_none()
    }
}
