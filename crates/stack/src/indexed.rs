//! Pre-indexed sequences: every suffix/prefix split of an input, as sparse
//! lists of perfect trees.

use core::hash::Hash;
use smallvec::{smallvec, SmallVec};
use tracing::trace;
use treestack_arena::{bits::bit, Handle, NodeArena};

/// One split of an indexed sequence: the sequence's first `k` leaves and its
/// remaining leaves, each as a sparse per-bit list of perfect trees.
///
/// Slot `b` of a list is populated iff bit `b` of the covered length is set,
/// and then holds the tree of `2^b` leaves for that part of the sequence. In
/// `left` the populated slots concatenate smallest-first into the prefix; in
/// `right` they concatenate largest-first into the suffix, matching how the
/// tree stack stores its own trees.
#[derive(Debug, Clone)]
pub struct Split<T> {
    /// Trees covering the first `k` leaves; slots are the set bits of `k`.
    pub(crate) left: SmallVec<[Option<Handle<T>>; 4]>,
    /// Trees covering the last `len - k` leaves; slots are the set bits of
    /// `len - k`.
    pub(crate) right: SmallVec<[Option<Handle<T>>; 4]>,
}

/// A sequence of leaves pre-indexed for tree-stack operations.
///
/// Indexing records, for every partition point of the input, the perfect
/// trees covering the prefix and the suffix at that point. This takes
/// O(L log L) arena lookups and O(L²) handle slots, and afterwards lets the
/// stack locate the trees for any suffix length in O(1).
///
/// Subtrees are shared through the arena, so sequences indexed in the same
/// arena chain compare by handle: equal leaf runs yield equal handles.
#[derive(Debug, Clone)]
pub struct IndexedSeq<T> {
    /// `assocs[k]` splits the sequence after its first `k` leaves.
    assocs: Vec<Split<T>>,
}

impl<T> Default for Split<T> {
    fn default() -> Self {
        Self { left: SmallVec::new(), right: SmallVec::new() }
    }
}

impl<T> Default for IndexedSeq<T> {
    /// The empty sequence.
    fn default() -> Self {
        Self { assocs: vec![Split::default()] }
    }
}

impl<T: Copy + Eq + Hash> IndexedSeq<T> {
    /// Indexes `leaves`, interning every covering subtree into `arena`.
    pub fn from_leaves(arena: &mut NodeArena<'_, T>, leaves: &[T]) -> Self {
        let len = leaves.len();
        let mut assocs: Vec<Split<T>> = vec![Split::default(); len + 1];
        if len == 0 {
            return Self { assocs };
        }

        let nodes_before = arena.len();
        // `paired[i]` holds the tree of `2^b` leaves covering
        // `leaves[i..i + 2^b]`; each pass pairs neighbours into the next
        // level.
        let mut paired: Vec<Handle<T>> = leaves.iter().copied().map(Handle::Leaf).collect();
        let mut b = 0;
        loop {
            let bit_m = bit(b);
            for sz in bit_m..=len {
                if sz & bit_m != 0 {
                    let offset = sz & (bit_m - 1);
                    assocs[sz].left.push(Some(paired[offset]));
                    assocs[len - sz].right.push(Some(paired[paired.len() - 1 - offset]));
                } else {
                    assocs[sz].left.push(None);
                    assocs[len - sz].right.push(None);
                }
            }
            if bit(b + 1) > len {
                break;
            }
            let pairings = paired.len() - bit_m;
            for i in 0..pairings {
                paired[i] = Handle::Node(arena.intern(paired[i], paired[i + bit_m]));
            }
            paired.truncate(pairings);
            b += 1;
        }

        trace!(
            target: "treestack::indexed",
            len,
            new_nodes = arena.len() - nodes_before,
            "indexed sequence"
        );
        Self { assocs }
    }

    /// Indexes a one-leaf sequence. No arena is needed: a single leaf has no
    /// internal nodes.
    pub fn from_single(leaf: T) -> Self {
        let handle = Some(Handle::Leaf(leaf));
        Self {
            assocs: vec![
                Split { left: SmallVec::new(), right: smallvec![handle] },
                Split { left: smallvec![handle], right: SmallVec::new() },
            ],
        }
    }

    /// Number of leaves in the indexed sequence.
    pub fn len(&self) -> usize {
        self.assocs.len() - 1
    }

    /// Returns `true` if the sequence has no leaves.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The split whose `right` part covers exactly the last `on_right`
    /// leaves.
    pub(crate) fn association(&self, on_right: usize) -> &Split<T> {
        &self.assocs[self.len() - on_right]
    }
}
