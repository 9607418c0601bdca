//! Hash-consing arena for tree nodes.

use crate::{Handle, Node, NodeId};
use core::hash::Hash;
use hashbrown::HashMap;

/// An arena that interns tree nodes, guaranteeing that structurally identical
/// nodes share a single [`NodeId`].
///
/// Nodes are stored in an append-only pool, so ids stay valid for the
/// arena's whole lifetime. An arena may layer on top of a parent: lookups
/// probe the ancestor chain read-only and only insert locally on a chain-wide
/// miss, which keeps canonicity across the chain. This supports the
/// shared-base pattern where a long-lived arena holds nodes common to many
/// short-lived computations, each using its own child arena and discarding it
/// afterwards.
///
/// The parent is held by shared reference for the child's lifetime, so the
/// borrow checker rejects any attempt to intern into the parent while a child
/// exists.
#[derive(Debug)]
pub struct NodeArena<'p, T> {
    /// The arena this one layers on top of, if any.
    parent: Option<&'p NodeArena<'p, T>>,
    /// Number of ids owned by the ancestor chain; local ids start here.
    base: u32,
    /// Locally owned nodes, indexed by `id - base`.
    nodes: Vec<Node<T>>,
    /// Interning table mapping node content to its id.
    interned: HashMap<Node<T>, NodeId>,
}

impl<T> Default for NodeArena<'_, T> {
    fn default() -> Self {
        Self { parent: None, base: 0, nodes: Vec::new(), interned: HashMap::new() }
    }
}

impl<'p, T: Copy + Eq + Hash> NodeArena<'p, T> {
    /// Creates an empty arena with no parent.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty arena layered on top of `parent`.
    ///
    /// The child resolves and deduplicates against everything the parent
    /// chain already holds. The parent cannot be mutated until the child is
    /// dropped.
    pub fn with_parent(parent: &'p NodeArena<'p, T>) -> Self {
        Self {
            parent: Some(parent),
            base: parent.end(),
            nodes: Vec::new(),
            interned: HashMap::new(),
        }
    }

    /// First id past this arena's range.
    fn end(&self) -> u32 {
        self.base + self.nodes.len() as u32
    }

    /// Looks a node up in this arena and its ancestors without inserting.
    fn find(&self, node: &Node<T>) -> Option<NodeId> {
        self.interned
            .get(node)
            .copied()
            .or_else(|| self.parent.and_then(|parent| parent.find(node)))
    }

    /// Interns the node `(lhs, rhs)`, returning the id of the unique node
    /// with those children.
    ///
    /// Repeated calls with equal children return identical ids, across the
    /// whole ancestor chain. Both children must themselves be leaves or ids
    /// minted by this chain; the two subtrees must hold the same number of
    /// leaves.
    pub fn intern(&mut self, lhs: Handle<T>, rhs: Handle<T>) -> NodeId {
        let node = Node { lhs, rhs };
        if let Some(parent) = self.parent {
            if let Some(id) = parent.find(&node) {
                return id;
            }
        }
        if let Some(&id) = self.interned.get(&node) {
            return id;
        }

        let id = NodeId(self.end());
        assert!(id.0 < u32::MAX, "node arena capacity exceeded");
        self.nodes.push(node);
        self.interned.insert(node, id);
        id
    }

    /// Returns the node for `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not minted by this arena's chain.
    #[track_caller]
    pub fn get(&self, id: NodeId) -> Node<T> {
        if id.0 < self.base {
            return self
                .parent
                .expect("id below local range requires a parent arena")
                .get(id);
        }
        self.nodes[(id.0 - self.base) as usize]
    }

    /// Resolves a handle to its node, panicking on leaves and foreign ids.
    #[track_caller]
    pub fn node_of(&self, handle: Handle<T>) -> Node<T> {
        self.get(handle.as_node())
    }

    /// Number of nodes owned by this arena, excluding ancestors.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if this arena owns no nodes (ancestors may still).
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
