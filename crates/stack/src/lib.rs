//! A suffix-comparable stack over interned perfect binary trees.
//!
//! The stack represents its contents as one perfect tree per set bit of its
//! length, with all trees deduplicated through a
//! [`NodeArena`](treestack_arena::NodeArena). Appending, truncating, and
//! comparing a suffix then become arithmetic on bit positions — binary
//! addition with carries, subtraction by borrowing, and a partial equality
//! walk — each logarithmic in the stack depth. Sequences that will be pushed
//! or compared are indexed once up front ([`IndexedSeq`]), which records
//! every split of the sequence into perfect trees so any suffix length can
//! be located in constant time.
//!
//! The motivating workload is single-pass validation of stack-based
//! bytecode whose instructions inspect an arbitrary number of recent stack
//! entries: naive suffix checks make that quadratic, this structure makes it
//! near-linear.
//!
//! ```
//! use treestack::{IndexedSeq, NodeArena, TreeStack};
//!
//! let mut arena = NodeArena::new();
//! let seq = IndexedSeq::from_leaves(&mut arena, &[1u32, 2, 3]);
//!
//! let mut stack = TreeStack::new();
//! stack.append(&mut arena, &seq);
//! stack.append(&mut arena, &seq);
//!
//! assert_eq!(stack.len(), 6);
//! assert!(stack.has_suffix(&arena, &seq));
//! stack.pop(&arena, 4);
//! assert_eq!(stack.back(&arena), 2);
//! ```

#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod indexed;
pub use indexed::{IndexedSeq, Split};

mod stack;
pub use stack::{RevIter, TreeStack};

mod naive;
pub use naive::NaiveStack;

pub use treestack_arena::{bits, Handle, Node, NodeArena, NodeId, TreeCursor};
