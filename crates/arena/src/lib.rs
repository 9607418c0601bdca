//! Interned full-binary-tree arena.
//!
//! Trees here are *perfect*: data lives only at the leaves, and every node
//! covers exactly `2^k` leaves. All nodes are deduplicated through a
//! [`NodeArena`], so structural equality of two equal-sized trees reduces to
//! an O(1) comparison of their [`Handle`]s. Arenas can layer on a parent
//! arena that is probed read-only, which lets many short-lived computations
//! share one long-lived node base.
//!
//! The companion `treestack` crate builds its suffix-comparable stack out of
//! these trees.

#![cfg_attr(not(test), warn(unused_crate_dependencies))]

pub mod bits;

mod node;
pub use node::{Handle, Node, NodeId};

mod arena;
pub use arena::NodeArena;

mod cursor;
pub use cursor::TreeCursor;
