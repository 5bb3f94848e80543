//! Self-balancing binary search tree that uses a color bit per node to keep its
//! height logarithmic in the number of elements during insertions and removals.
//!
//! The implementation follows the left-leaning discipline: red links only ever
//! point left, which collapses the rebalancing case analysis for both insertion
//! and removal into three local transforms applied on the recursive unwind.

mod map;
mod node;
mod set;
mod tree;

pub use self::map::{RedBlackMap, RedBlackMapIntoIter, RedBlackMapIter, RedBlackMapIterMut};
pub use self::set::{RedBlackSet, RedBlackSetIntoIter, RedBlackSetIter};
