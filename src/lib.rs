//! Ordered map and set collections backed by a left-leaning red-black tree.
//!
//! The tree keeps itself balanced with a color bit per node and two local surgery
//! primitives, rotation and recoloring, giving `O(log n)` lookups, insertions, and
//! removals with a worst-case height of `2 * log2(n + 1)` regardless of insertion
//! order.

mod entry;

pub mod red_black_tree;
pub mod search_tree;
