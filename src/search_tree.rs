//! The narrow contract shared by ordered search tree containers.

use std::error;
use std::fmt;

/// An enum representing the errors reported by ordered container operations.
///
/// A missing key is not an error; lookups and removals report it as `None`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// The container holds no elements, so it has no minimum or maximum.
    EmptyCollection,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptyCollection => write!(f, "Collection is empty."),
        }
    }
}

impl error::Error for Error {}

/// An ordered associative container over totally ordered keys.
///
/// The trait captures the operations every ordered search tree supports, whatever
/// balancing strategy it uses; a plain binary search tree, a B-tree, or the
/// red-black tree shipped by this crate would all implement the same contract
/// rather than share structure.
///
/// All error conditions are detected before any mutation begins; a failing call
/// never leaves the container in a partially rebalanced state.
///
/// # Examples
///
/// ```
/// use ordered_collections::red_black_tree::RedBlackMap;
/// use ordered_collections::search_tree::{Error, SearchTree};
///
/// let mut map: RedBlackMap<u32, u32> = RedBlackMap::new();
/// assert_eq!(map.find_min(), Err(Error::EmptyCollection));
///
/// map.insert(1, 10);
/// assert_eq!(map.find(&1), Some(&10));
/// assert_eq!(map.find_min(), Ok(&1));
/// ```
pub trait SearchTree<T, U>
where T: Ord
{
    /// Returns a reference to the value associated with `key`, or `None` if the key
    /// is not present.
    fn find(&self, key: &T) -> Option<&U>;

    /// Inserts a key-value pair, returning the previous entry if the key already
    /// existed.
    fn insert(&mut self, key: T, value: U) -> Option<(T, U)>;

    /// Removes `key` and returns the detached entry, or `None` if the key is not
    /// present.
    fn remove(&mut self, key: &T) -> Option<(T, U)>;

    /// Returns the minimum key, or `Error::EmptyCollection` if there are no
    /// elements.
    fn find_min(&self) -> Result<&T, Error>;

    /// Returns the maximum key, or `Error::EmptyCollection` if there are no
    /// elements.
    fn find_max(&self) -> Result<&T, Error>;

    /// Returns the number of elements in the container.
    fn size(&self) -> usize;

    /// Returns `true` if the container holds no elements.
    fn is_empty(&self) -> bool {
        self.size() == 0
    }
}
