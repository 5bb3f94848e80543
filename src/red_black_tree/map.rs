use crate::entry::Entry;
use crate::red_black_tree::node::Node;
use crate::red_black_tree::tree;
use crate::search_tree::{Error, SearchTree};
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::borrow::Borrow;
use std::fmt;
use std::marker::PhantomData;
use std::ops::{Index, IndexMut};

/// An ordered map implemented using a left-leaning red-black tree.
///
/// A red-black tree is a self-balancing binary search tree that tags every node
/// with a color bit. Rotations and recolorings on the way back up from every
/// insertion and removal keep all root-to-leaf paths within a factor of two of
/// each other, so the height of the tree never exceeds `2 * log2(n + 1)` no
/// matter the order keys arrive in.
///
/// # Examples
///
/// ```
/// use ordered_collections::red_black_tree::RedBlackMap;
///
/// let mut map = RedBlackMap::new();
/// map.insert(0, 1);
/// map.insert(3, 4);
///
/// assert_eq!(map[&0], 1);
/// assert_eq!(map.get(&1), None);
/// assert_eq!(map.len(), 2);
///
/// assert_eq!(map.min(), Some(&0));
/// assert_eq!(map.ceil(&2), Some(&3));
///
/// map[&0] = 2;
/// assert_eq!(map.remove(&0), Some((0, 2)));
/// assert_eq!(map.remove(&1), None);
/// ```
pub struct RedBlackMap<T, U> {
    tree: tree::Tree<T, U>,
    len: usize,
}

impl<T, U> RedBlackMap<T, U> {
    /// Constructs a new, empty `RedBlackMap<T, U>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::red_black_tree::RedBlackMap;
    ///
    /// let map: RedBlackMap<u32, u32> = RedBlackMap::new();
    /// ```
    pub fn new() -> Self {
        RedBlackMap { tree: None, len: 0 }
    }

    /// Inserts a key-value pair into the map. If the key already exists in the
    /// map, it will return and replace the old key-value pair. The root is forced
    /// black after the insertion finishes rebalancing.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// assert_eq!(map.insert(1, 1), None);
    /// assert_eq!(map.get(&1), Some(&1));
    /// assert_eq!(map.insert(1, 2), Some((1, 1)));
    /// assert_eq!(map.get(&1), Some(&2));
    /// ```
    pub fn insert(&mut self, key: T, value: U) -> Option<(T, U)>
    where
        T: Ord,
    {
        let RedBlackMap {
            ref mut tree,
            ref mut len,
        } = self;
        let new_node = Node::new(key, value);
        *len += 1;
        let ret = tree::insert(tree, new_node).map(|entry| {
            let Entry { key, value } = entry;
            *len -= 1;
            (key, value)
        });
        tree::blacken_root(tree);
        ret
    }

    /// Removes a key-value pair from the map. If the key exists in the map, it
    /// will return the associated key-value pair. Otherwise it will return `None`
    /// and the map is left untouched; the presence check runs before any
    /// recoloring begins.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.remove(&1), Some((1, 1)));
    /// assert_eq!(map.remove(&1), None);
    /// ```
    pub fn remove<V>(&mut self, key: &V) -> Option<(T, U)>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        if tree::get(&self.tree, key).is_none() {
            return None;
        }

        let RedBlackMap {
            ref mut tree,
            ref mut len,
        } = self;
        tree::prepare_removal(tree);
        let ret = tree::remove(tree, key).map(|entry| {
            let Entry { key, value } = entry;
            *len -= 1;
            (key, value)
        });
        tree::blacken_root(tree);
        ret
    }

    /// Checks if a key exists in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// assert!(!map.contains_key(&0));
    /// assert!(map.contains_key(&1));
    /// ```
    pub fn contains_key<V>(&self, key: &V) -> bool
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        self.get(key).is_some()
    }

    /// Returns an immutable reference to the value associated with a particular
    /// key. It will return `None` if the key does not exist in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.get(&0), None);
    /// assert_eq!(map.get(&1), Some(&1));
    /// ```
    pub fn get<V>(&self, key: &V) -> Option<&U>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        tree::get(&self.tree, key).map(|entry| &entry.value)
    }

    /// Returns a mutable reference to the value associated with a particular key.
    /// Returns `None` if such a key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// *map.get_mut(&1).unwrap() = 2;
    /// assert_eq!(map.get(&1), Some(&2));
    /// ```
    pub fn get_mut<V>(&mut self, key: &V) -> Option<&mut U>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        tree::get_mut(&mut self.tree, key).map(|entry| &mut entry.value)
    }

    /// Returns the number of elements in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::red_black_tree::RedBlackMap;
    ///
    /// let map: RedBlackMap<u32, u32> = RedBlackMap::new();
    /// assert!(map.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clears the map, removing all values.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// map.insert(2, 2);
    /// map.clear();
    /// assert_eq!(map.is_empty(), true);
    /// ```
    pub fn clear(&mut self) {
        self.tree = None;
        self.len = 0;
    }

    /// Returns a key in the map that is less than or equal to a particular key.
    /// Returns `None` if such a key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.floor(&0), None);
    /// assert_eq!(map.floor(&2), Some(&1));
    /// ```
    pub fn floor<V>(&self, key: &V) -> Option<&T>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        tree::floor(&self.tree, key).map(|entry| &entry.key)
    }

    /// Returns a key in the map that is greater than or equal to a particular key.
    /// Returns `None` if such a key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.ceil(&0), Some(&1));
    /// assert_eq!(map.ceil(&2), None);
    /// ```
    pub fn ceil<V>(&self, key: &V) -> Option<&T>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        tree::ceil(&self.tree, key).map(|entry| &entry.key)
    }

    /// Returns the minimum key of the map. Returns `None` if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// map.insert(3, 3);
    /// assert_eq!(map.min(), Some(&1));
    /// ```
    pub fn min(&self) -> Option<&T>
    where
        T: Ord,
    {
        tree::min(&self.tree).map(|entry| &entry.key)
    }

    /// Returns the maximum key of the map. Returns `None` if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// map.insert(3, 3);
    /// assert_eq!(map.max(), Some(&3));
    /// ```
    pub fn max(&self) -> Option<&T>
    where
        T: Ord,
    {
        tree::max(&self.tree).map(|entry| &entry.key)
    }

    /// Returns an iterator over the map. The iterator will yield key-value pairs
    /// using in-order traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// map.insert(2, 2);
    ///
    /// let mut iterator = map.iter();
    /// assert_eq!(iterator.next(), Some((&1, &1)));
    /// assert_eq!(iterator.next(), Some((&2, &2)));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> RedBlackMapIter<'_, T, U> {
        RedBlackMapIter {
            current: &self.tree,
            stack: Vec::new(),
        }
    }

    /// Returns a mutable iterator over the map. The iterator will yield key-value
    /// pairs using in-order traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// map.insert(2, 2);
    ///
    /// for (key, value) in &mut map {
    ///     *value += 1;
    /// }
    ///
    /// let mut iterator = map.iter_mut();
    /// assert_eq!(iterator.next(), Some((&1, &mut 2)));
    /// assert_eq!(iterator.next(), Some((&2, &mut 3)));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter_mut(&mut self) -> RedBlackMapIterMut<'_, T, U> {
        RedBlackMapIterMut {
            current: self.tree.as_mut().map(|node| &mut **node),
            stack: Vec::new(),
        }
    }
}

impl<T, U> IntoIterator for RedBlackMap<T, U> {
    type IntoIter = RedBlackMapIntoIter<T, U>;
    type Item = (T, U);

    fn into_iter(self) -> Self::IntoIter {
        Self::IntoIter {
            current: self.tree,
            stack: Vec::new(),
        }
    }
}

impl<'a, T, U> IntoIterator for &'a RedBlackMap<T, U>
where
    T: 'a,
    U: 'a,
{
    type IntoIter = RedBlackMapIter<'a, T, U>;
    type Item = (&'a T, &'a U);

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, U> IntoIterator for &'a mut RedBlackMap<T, U>
where
    T: 'a,
    U: 'a,
{
    type IntoIter = RedBlackMapIterMut<'a, T, U>;
    type Item = (&'a T, &'a mut U);

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// An owning iterator for `RedBlackMap<T, U>`.
///
/// This iterator traverses the elements of the map in-order and yields owned
/// entries.
pub struct RedBlackMapIntoIter<T, U> {
    current: tree::Tree<T, U>,
    stack: Vec<Node<T, U>>,
}

impl<T, U> Iterator for RedBlackMapIntoIter<T, U> {
    type Item = (T, U);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(mut node) = self.current.take() {
            self.current = node.left.take();
            self.stack.push(*node);
        }
        self.stack.pop().map(|node| {
            let Node {
                entry: Entry { key, value },
                right,
                ..
            } = node;
            self.current = right;
            (key, value)
        })
    }
}

/// An iterator for `RedBlackMap<T, U>`.
///
/// This iterator traverses the elements of the map in-order and yields immutable
/// references.
pub struct RedBlackMapIter<'a, T, U> {
    current: &'a tree::Tree<T, U>,
    stack: Vec<&'a Node<T, U>>,
}

impl<'a, T, U> Iterator for RedBlackMapIter<'a, T, U> {
    type Item = (&'a T, &'a U);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(ref node) = self.current {
            self.current = &node.left;
            self.stack.push(node);
        }
        self.stack.pop().map(|node| {
            self.current = &node.right;
            (&node.entry.key, &node.entry.value)
        })
    }
}

/// A mutable iterator for `RedBlackMap<T, U>`.
///
/// This iterator traverses the elements of the map in-order and yields mutable
/// references.
pub struct RedBlackMapIterMut<'a, T, U> {
    current: Option<&'a mut Node<T, U>>,
    stack: Vec<(&'a mut Entry<T, U>, Option<&'a mut Node<T, U>>)>,
}

impl<'a, T, U> Iterator for RedBlackMapIterMut<'a, T, U> {
    type Item = (&'a T, &'a mut U);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.current.take() {
            self.current = node.left.as_mut().map(|child| &mut **child);
            self.stack
                .push((&mut node.entry, node.right.as_mut().map(|child| &mut **child)));
        }
        self.stack.pop().map(|(entry, right)| {
            self.current = right;
            let Entry {
                ref key,
                ref mut value,
            } = *entry;
            (key, value)
        })
    }
}

impl<T, U> Default for RedBlackMap<T, U> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T, U, V> Index<&'a V> for RedBlackMap<T, U>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    type Output = U;

    fn index(&self, key: &V) -> &Self::Output {
        self.get(key).expect("Error: key does not exist.")
    }
}

impl<'a, T, U, V> IndexMut<&'a V> for RedBlackMap<T, U>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    fn index_mut(&mut self, key: &V) -> &mut Self::Output {
        self.get_mut(key).expect("Error: key does not exist.")
    }
}

impl<T, U> SearchTree<T, U> for RedBlackMap<T, U>
where
    T: Ord,
{
    fn find(&self, key: &T) -> Option<&U> {
        self.get(key)
    }

    fn insert(&mut self, key: T, value: U) -> Option<(T, U)> {
        RedBlackMap::insert(self, key, value)
    }

    fn remove(&mut self, key: &T) -> Option<(T, U)> {
        RedBlackMap::remove(self, key)
    }

    fn find_min(&self) -> Result<&T, Error> {
        self.min().ok_or(Error::EmptyCollection)
    }

    fn find_max(&self) -> Result<&T, Error> {
        self.max().ok_or(Error::EmptyCollection)
    }

    fn size(&self) -> usize {
        self.len()
    }
}

impl<T, U> fmt::Debug for RedBlackMap<T, U>
where
    T: fmt::Debug,
    U: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<T, U> PartialEq for RedBlackMap<T, U>
where
    T: PartialEq,
    U: PartialEq,
{
    fn eq(&self, other: &RedBlackMap<T, U>) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T, U> Serialize for RedBlackMap<T, U>
where
    T: Ord + Serialize,
    U: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_map(Some(self.len))?;
        for (key, value) in self.iter() {
            state.serialize_entry(key, value)?;
        }
        state.end()
    }
}

impl<'de, T, U> Deserialize<'de> for RedBlackMap<T, U>
where
    T: Ord + Deserialize<'de>,
    U: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct RedBlackMapVisitor<T, U> {
            marker: PhantomData<(T, U)>,
        }

        impl<'de, T, U> Visitor<'de> for RedBlackMapVisitor<T, U>
        where
            T: Ord + Deserialize<'de>,
            U: Deserialize<'de>,
        {
            type Value = RedBlackMap<T, U>;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a map")
            }

            fn visit_map<M>(self, mut access: M) -> Result<Self::Value, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut map = RedBlackMap::new();
                while let Some((key, value)) = access.next_entry()? {
                    map.insert(key, value);
                }
                Ok(map)
            }
        }

        deserializer.deserialize_map(RedBlackMapVisitor {
            marker: PhantomData,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::RedBlackMap;
    use crate::red_black_tree::tree::invariants;
    use serde_test::{assert_tokens, Token};

    fn assert_valid<T, U>(map: &RedBlackMap<T, U>)
    where
        T: Ord,
    {
        invariants::assert_valid(&map.tree);
        let n = map.len();
        let height = invariants::height(&map.tree);
        let bound = 2.0 * ((n + 1) as f64).log2();
        assert!(
            height as f64 <= bound,
            "height {} exceeds red-black bound {} for {} nodes",
            height,
            bound,
            n,
        );
    }

    #[test]
    fn test_len_empty() {
        let map: RedBlackMap<u32, u32> = RedBlackMap::new();
        assert_eq!(map.len(), 0);
    }

    #[test]
    fn test_is_empty() {
        let map: RedBlackMap<u32, u32> = RedBlackMap::new();
        assert!(map.is_empty());
    }

    #[test]
    fn test_min_max_empty() {
        let map: RedBlackMap<u32, u32> = RedBlackMap::new();
        assert_eq!(map.min(), None);
        assert_eq!(map.max(), None);
    }

    #[test]
    fn test_insert() {
        let mut map = RedBlackMap::new();
        assert_eq!(map.insert(1, 1), None);
        assert!(map.contains_key(&1));
        assert_eq!(map.get(&1), Some(&1));
        assert_valid(&map);
    }

    #[test]
    fn test_insert_replace() {
        let mut map = RedBlackMap::new();
        assert_eq!(map.insert(1, 1), None);
        assert_eq!(map.insert(1, 3), Some((1, 1)));
        assert_eq!(map.get(&1), Some(&3));
        assert_eq!(map.len(), 1);
        assert_valid(&map);
    }

    #[test]
    fn test_remove() {
        let mut map = RedBlackMap::new();
        map.insert(1, 1);
        assert_eq!(map.remove(&1), Some((1, 1)));
        assert!(!map.contains_key(&1));
        assert_valid(&map);
    }

    #[test]
    fn test_remove_missing() {
        let mut map = RedBlackMap::new();
        map.insert(1, 1);
        map.insert(2, 2);
        assert_eq!(map.remove(&3), None);
        assert_eq!(map.len(), 2);
        assert_valid(&map);
    }

    #[test]
    fn test_min_max() {
        let mut map = RedBlackMap::new();
        map.insert(1, 1);
        map.insert(3, 3);
        map.insert(5, 5);

        assert_eq!(map.min(), Some(&1));
        assert_eq!(map.max(), Some(&5));
    }

    #[test]
    fn test_get_mut() {
        let mut map = RedBlackMap::new();
        map.insert(1, 1);
        {
            let value = map.get_mut(&1);
            *value.unwrap() = 3;
        }
        assert_eq!(map.get(&1), Some(&3));
    }

    #[test]
    fn test_floor_ceil() {
        let mut map = RedBlackMap::new();
        map.insert(1, 1);
        map.insert(3, 3);
        map.insert(5, 5);

        assert_eq!(map.floor(&0), None);
        assert_eq!(map.floor(&2), Some(&1));
        assert_eq!(map.floor(&4), Some(&3));
        assert_eq!(map.floor(&6), Some(&5));

        assert_eq!(map.ceil(&0), Some(&1));
        assert_eq!(map.ceil(&2), Some(&3));
        assert_eq!(map.ceil(&4), Some(&5));
        assert_eq!(map.ceil(&6), None);
    }

    #[test]
    fn test_into_iter() {
        let mut map = RedBlackMap::new();
        map.insert(1, 2);
        map.insert(5, 6);
        map.insert(3, 4);

        assert_eq!(
            map.into_iter().collect::<Vec<(u32, u32)>>(),
            vec![(1, 2), (3, 4), (5, 6)],
        );
    }

    #[test]
    fn test_iter() {
        let mut map = RedBlackMap::new();
        map.insert(1, 2);
        map.insert(5, 6);
        map.insert(3, 4);

        assert_eq!(
            map.iter().collect::<Vec<(&u32, &u32)>>(),
            vec![(&1, &2), (&3, &4), (&5, &6)],
        );
    }

    #[test]
    fn test_iter_mut() {
        let mut map = RedBlackMap::new();
        map.insert(1, 2);
        map.insert(5, 6);
        map.insert(3, 4);

        for (_, value) in &mut map {
            *value += 1;
        }

        assert_eq!(
            map.iter().collect::<Vec<(&u32, &u32)>>(),
            vec![(&1, &3), (&3, &5), (&5, &7)],
        );
    }

    #[test]
    fn test_serde() {
        let mut map = RedBlackMap::new();
        map.insert(1u32, 2u32);
        map.insert(3, 4);

        assert_tokens(
            &map,
            &[
                Token::Map { len: Some(2) },
                Token::U32(1),
                Token::U32(2),
                Token::U32(3),
                Token::U32(4),
                Token::MapEnd,
            ],
        );
    }

    #[test]
    fn test_ascending_insert_stays_balanced() {
        let mut map = RedBlackMap::new();
        map.insert(10, ());
        map.insert(20, ());
        map.insert(30, ());

        assert_valid(&map);
        assert!(invariants::height(&map.tree) <= 2);
    }

    #[test]
    fn test_remove_inner_node() {
        let mut map = RedBlackMap::new();
        for key in [5, 3, 8, 1, 4, 7, 9].iter() {
            map.insert(*key, *key * 10);
            assert_valid(&map);
        }

        assert_eq!(map.remove(&3), Some((3, 30)));
        assert_valid(&map);
        assert_eq!(map.get(&3), None);
        assert_eq!(map.get(&5), Some(&50));
        assert_eq!(map.get(&8), Some(&80));
        assert_eq!(map.len(), 6);
    }

    #[test]
    fn test_remove_last_node() {
        let mut map = RedBlackMap::new();
        map.insert(42, 42);
        assert_eq!(map.remove(&42), Some((42, 42)));

        assert!(map.is_empty());
        assert_eq!(map.len(), 0);
        assert_eq!(map.min(), None);
        assert_eq!(map.max(), None);
        assert_valid(&map);
    }

    #[test]
    fn test_ascending_insert_then_ascending_remove() {
        let mut map = RedBlackMap::new();
        for key in 1..=1000 {
            map.insert(key, key);
            assert_valid(&map);
        }

        for key in 1..=1000 {
            assert_eq!(map.remove(&key), Some((key, key)));
            assert_valid(&map);
        }

        assert!(map.is_empty());
        assert_eq!(map.len(), 0);
    }
}
