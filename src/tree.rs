//! Tree construction and read-only accessors.
//!
//! Construction is bottom-up and level-synchronous: every leaf is hashed
//! and enqueued in input order, then each pass drains one full level from
//! the queue, groups up to `branching_factor` siblings under a freshly
//! hashed parent, and enqueues the parents, until a single node — the root
//! — remains.

use crate::{
    hash::{hash_block, hash_children, CryptoHash},
    node::{Node, NodeId},
    queue::BuildQueue,
    Error, Result,
};

/// An n-ary Merkle tree over an ordered sequence of byte blocks.
///
/// The tree owns a copy of every input block and is immutable once built.
/// Reads (`root_hash`, proof generation, structural accessors) never
/// mutate; dropping the tree releases all nodes and payloads. For sharing
/// across threads see [`SharedMerkleTree`](crate::SharedMerkleTree).
#[derive(Debug, Clone)]
pub struct MerkleTree {
    pub(crate) nodes: Vec<Node>,
    pub(crate) leaves: Vec<NodeId>,
    pub(crate) root: NodeId,
    pub(crate) branching_factor: usize,
    pub(crate) depth: usize,
}

impl MerkleTree {
    /// Build a tree committing to `blocks`, at most `branching_factor`
    /// children per interior node.
    ///
    /// Block bytes are copied into their leaves, so the caller's buffers
    /// need not outlive the tree. The same `(blocks, branching_factor)`
    /// input always produces the same tree, on every platform.
    ///
    /// The trailing sibling group of a level may hold fewer than
    /// `branching_factor` nodes; it is hashed over exactly the children
    /// present rather than padded.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] if `blocks` is empty, any block is
    /// empty, or `branching_factor < 2`. No partial tree is observable on
    /// failure.
    pub fn build<B: AsRef<[u8]>>(blocks: &[B], branching_factor: usize) -> Result<Self> {
        if branching_factor < 2 {
            return Err(Error::InvalidArgument(format!(
                "branching factor must be at least 2, got {}",
                branching_factor
            )));
        }
        if blocks.is_empty() {
            return Err(Error::InvalidArgument("no blocks provided".to_string()));
        }

        let mut nodes: Vec<Node> = Vec::with_capacity(2 * blocks.len());
        let mut leaves: Vec<NodeId> = Vec::with_capacity(blocks.len());
        let mut queue = BuildQueue::with_capacity(blocks.len());

        // Leaf pass: hash and copy every block in input order.
        for (index, block) in blocks.iter().enumerate() {
            let bytes = block.as_ref();
            if bytes.is_empty() {
                return Err(Error::InvalidArgument(format!("block {} is empty", index)));
            }
            let id = NodeId(nodes.len());
            nodes.push(Node::leaf(hash_block(bytes), bytes.to_vec()));
            leaves.push(id);
            queue.push(id);
        }
        debug_assert_eq!(queue.peek_back(), leaves.last().copied());

        // Level loop: parents pushed to the back are not reachable while
        // any node of the current level remains in front of them, so
        // draining exactly `level_len` handles per pass keeps levels
        // separate.
        let mut depth = 0;
        while queue.len() > 1 {
            let level_len = queue.len();
            let parents = level_len.div_ceil(branching_factor);
            let mut remaining = level_len;
            depth += 1;
            for _ in 0..parents {
                let group = queue.drain(branching_factor.min(remaining));
                remaining -= group.len();

                let parent = NodeId(nodes.len());
                let child_hashes: Vec<CryptoHash> =
                    group.iter().map(|id| nodes[id.index()].hash).collect();
                for (position, child) in group.iter().enumerate() {
                    let child_node = &mut nodes[child.index()];
                    child_node.parent = Some(parent);
                    child_node.index_in_parent = position;
                }
                nodes.push(Node::interior(hash_children(&child_hashes), group));
                queue.push(parent);
            }
        }

        let root = queue
            .pop()
            .expect("level collapse leaves exactly one node in the queue");

        Ok(MerkleTree {
            nodes,
            leaves,
            root,
            branching_factor,
            depth,
        })
    }

    /// Digest of the root node.
    pub fn root_hash(&self) -> CryptoHash {
        self.nodes[self.root.index()].hash
    }

    /// Handle of the root node.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Leaf handles in input order; the leaf at position `i` commits to
    /// input block `i`.
    pub fn leaves(&self) -> &[NodeId] {
        &self.leaves
    }

    /// Number of leaves.
    pub fn leaf_count(&self) -> usize {
        self.leaves.len()
    }

    /// Maximum number of children per interior node.
    pub fn branching_factor(&self) -> usize {
        self.branching_factor
    }

    /// Number of interior levels above the leaves; `0` iff the tree has a
    /// single leaf.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Digest of the node at `id`, or `None` for an unknown handle.
    pub fn hash_of(&self, id: NodeId) -> Option<CryptoHash> {
        self.nodes.get(id.index()).map(|node| node.hash)
    }

    /// Payload of the leaf at `id`; `None` for interior nodes and unknown
    /// handles.
    pub fn payload_of(&self, id: NodeId) -> Option<&[u8]> {
        self.nodes.get(id.index())?.payload.as_deref()
    }

    /// Parent of the node at `id`; `None` for the root and unknown
    /// handles.
    pub fn parent_of(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id.index())?.parent
    }

    /// Position of the node at `id` within its parent's children; `None`
    /// for the root and unknown handles.
    pub fn index_in_parent(&self, id: NodeId) -> Option<usize> {
        let node = self.nodes.get(id.index())?;
        node.parent.map(|_| node.index_in_parent)
    }

    /// Ordered child handles of the node at `id`; empty for leaves, `None`
    /// for unknown handles.
    pub fn children_of(&self, id: NodeId) -> Option<&[NodeId]> {
        self.nodes.get(id.index()).map(|node| node.children.as_slice())
    }

    /// Whether `id` names a leaf.
    pub fn is_leaf(&self, id: NodeId) -> Option<bool> {
        self.nodes.get(id.index()).map(Node::is_leaf)
    }
}
