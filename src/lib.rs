//! An ordered set backed by an unbalanced binary search tree.
//!
//! [`Tree`] keeps unique values ordered by a [`Comparator`] and exposes
//! insertion, lookup, removal and pre/in/post-order traversals.
//! [`TreeSet`] wraps one tree and adds the set algebra: union, intersection,
//! difference, symmetric difference and the subset, superset, overlap and
//! equality predicates.
//!
//! The tree never rebalances, so inserting sorted input builds a chain whose
//! depth equals its length. Every walk over the tree is iterative, so such
//! chains are slow but never overflow the stack.
//!
//! ```
//! use tree_set::TreeSet;
//!
//! let mut set: TreeSet<i32> = [4, 5, 6].into_iter().collect();
//! set.union_with([2, 3]);
//! assert_eq!(set.to_vec(), vec![2, 3, 4, 5, 6]);
//! assert!(set.is_proper_superset_of(&[2, 6]));
//! ```

pub mod binary_tree;
pub mod compare;
pub mod error;
mod lookup;
pub mod set;
pub mod traversal;
pub mod tree;

pub use binary_tree::Tree;
pub use compare::{Comparator, Natural};
pub use error::Error;
pub use set::{TreeSet, union};
pub use traversal::{Cursor, Order, Traversal};
pub use tree::TreeOps;
