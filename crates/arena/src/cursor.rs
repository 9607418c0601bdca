//! Positional cursor over a single perfect tree.

use crate::{
    bits::{bit, bit_width},
    Handle, NodeArena,
};
use core::hash::Hash;
use smallvec::{smallvec, SmallVec};

/// A cursor over the leaves of one perfect tree of `2^depth` leaves,
/// addressable by leaf index.
///
/// The cursor keeps the whole root-to-leaf descent as a stack of handles,
/// one per level: `stack[depth]` is the root and `stack[0]` the current leaf.
/// Moving to another index only recomputes the levels below the highest bit
/// that differs between the old and new index, so sequential movement in
/// either direction costs O(1) amortized and a random jump costs
/// O(log distance).
#[derive(Debug, Clone)]
pub struct TreeCursor<T> {
    /// Tree depth: the tree holds `2^depth` leaves.
    depth: usize,
    /// Index of the leaf the cursor currently points at.
    index: usize,
    /// Descent stack; entry `k` covers `2^k` leaves.
    stack: SmallVec<[Handle<T>; 8]>,
}

impl<T: Copy + Eq + Hash> TreeCursor<T> {
    /// Positions a new cursor at `index` within the tree rooted at `root`,
    /// which must hold `2^depth` leaves interned in `arena`'s chain.
    pub fn new(arena: &NodeArena<'_, T>, depth: usize, root: Handle<T>, index: usize) -> Self {
        debug_assert!(index < bit(depth), "index {index} out of range for depth {depth}");
        let mut cursor = Self { depth, index, stack: smallvec![root; depth + 1] };
        cursor.resolve_from(arena, depth);
        cursor
    }

    /// Recomputes stack levels `width - 1` down to `0` from the level above,
    /// selecting each half by the corresponding bit of the current index.
    fn resolve_from(&mut self, arena: &NodeArena<'_, T>, width: usize) {
        for level in (0..width).rev() {
            let node = arena.node_of(self.stack[level + 1]);
            self.stack[level] = node.child(self.index & bit(level) != 0);
        }
    }

    /// The leaf handle at the current position.
    pub fn current(&self) -> Handle<T> {
        self.stack[0]
    }

    /// The current leaf index.
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Number of leaves in the tree under the cursor.
    pub const fn len(&self) -> usize {
        bit(self.depth)
    }

    /// Returns `false`: a perfect tree always holds at least one leaf.
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Moves the cursor to `index`, repairing only the descent levels at and
    /// below the highest differing index bit.
    pub fn move_to(&mut self, arena: &NodeArena<'_, T>, index: usize) {
        debug_assert!(index < self.len(), "index {index} out of range for depth {}", self.depth);
        let delta = self.index ^ index;
        if delta == 0 {
            return;
        }
        self.index = index;
        self.resolve_from(arena, bit_width(delta));
    }
}
