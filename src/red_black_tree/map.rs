use crate::arena::Handle;
use crate::compare::{Compare, Natural};
use crate::entry::Entry;
use crate::red_black_tree::tree;
use crate::red_black_tree::{Result, DEFAULT_CHUNK_SIZE};
use log::debug;
use serde::de::{self, Deserialize, Deserializer, MapAccess, Visitor};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::borrow::Borrow;
use std::fmt;
use std::marker::PhantomData;
use std::ops::Index;
use std::result;
use std::vec;

/// An ordered map implemented using a red black tree.
///
/// A red black tree is a self-balancing binary search tree where every node is colored red or
/// black. The root is black, a red node never has a red child, and every path from the root to an
/// absent child passes through the same number of black nodes, which bounds the height of the tree
/// by `2 * log2(n + 1)`.
///
/// Keys are ordered by a comparator `C`. The default comparator, `Natural`, uses the keys' `Ord`
/// implementation, but any `Fn(&T, &T) -> Ordering` can be supplied with `with_comparator`. Set
/// operations such as `union` require both maps to use equivalent comparators.
///
/// Every operation that allocates returns a `Result` and reports allocation failure as
/// `Error::OutOfMemory`.
///
/// # Examples
///
/// ```
/// use red_black_collections::red_black_tree::RedBlackMap;
///
/// let mut map = RedBlackMap::new();
/// map.insert(0, 1).unwrap();
/// map.insert(3, 4).unwrap();
///
/// assert_eq!(map[&0], 1);
/// assert_eq!(map.get(&1), None);
/// assert_eq!(map.len(), 2);
///
/// assert_eq!(map.min(), Some(&0));
/// assert_eq!(map.insert(0, 2).unwrap(), Some(1));
/// assert_eq!(map[&0], 2);
/// ```
pub struct RedBlackMap<T, U, C = Natural> {
    arena: tree::Arena<T, U>,
    root: Option<Handle>,
    len: usize,
    comparator: C,
}

impl<T, U> RedBlackMap<T, U> {
    /// Constructs a new, empty `RedBlackMap<T, U>` ordered by `Ord`.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::RedBlackMap;
    ///
    /// let map: RedBlackMap<u32, u32> = RedBlackMap::new();
    /// ```
    pub fn new() -> Self {
        RedBlackMap::with_comparator(Natural)
    }
}

impl<T, U, C> RedBlackMap<T, U, C> {
    /// Constructs a new, empty `RedBlackMap<T, U, C>` ordered by `comparator`.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::with_comparator(|a: &u32, b: &u32| b.cmp(a));
    /// map.insert(1, "a").unwrap();
    /// map.insert(2, "b").unwrap();
    /// assert_eq!(map.min(), Some(&2));
    /// ```
    pub fn with_comparator(comparator: C) -> Self {
        RedBlackMap::with_chunk_size(comparator, DEFAULT_CHUNK_SIZE)
    }

    /// Constructs a new, empty `RedBlackMap<T, U, C>` ordered by `comparator` whose nodes are
    /// allocated `chunk_size` at a time.
    ///
    /// # Panics
    ///
    /// Panics if `chunk_size` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::compare::Natural;
    /// use red_black_collections::red_black_tree::RedBlackMap;
    ///
    /// let map: RedBlackMap<u32, u32> = RedBlackMap::with_chunk_size(Natural, 4096);
    /// ```
    pub fn with_chunk_size(comparator: C, chunk_size: usize) -> Self {
        RedBlackMap {
            arena: tree::Arena::new(chunk_size),
            root: None,
            len: 0,
            comparator,
        }
    }

    /// Returns a reference to the comparator of the map.
    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    /// Inserts a key-value pair into the map. If the key already exists in the map, the value is
    /// replaced and the old value is returned; the stored key is left unchanged. Returns an error
    /// if a node could not be allocated.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// assert_eq!(map.insert(1, 1).unwrap(), None);
    /// assert_eq!(map.get(&1), Some(&1));
    /// assert_eq!(map.insert(1, 2).unwrap(), Some(1));
    /// assert_eq!(map.get(&1), Some(&2));
    /// ```
    pub fn insert(&mut self, key: T, value: U) -> Result<Option<U>>
    where
        C: Compare<T>,
    {
        let RedBlackMap {
            ref mut arena,
            ref mut root,
            ref mut len,
            ref comparator,
        } = self;
        let ret = tree::insert(arena, root, comparator, key, value)?;
        if ret.is_none() {
            *len += 1;
        }
        Ok(ret)
    }

    /// Checks if a key exists in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1).unwrap();
    /// assert!(!map.contains_key(&0));
    /// assert!(map.contains_key(&1));
    /// ```
    pub fn contains_key<V>(&self, key: &V) -> bool
    where
        T: Borrow<V>,
        C: Compare<V>,
        V: ?Sized,
    {
        tree::get(&self.arena, self.root, &self.comparator, key).is_some()
    }

    /// Returns an immutable reference to the value associated with a particular key. It will
    /// return `None` if the key does not exist in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1).unwrap();
    /// assert_eq!(map.get(&0), None);
    /// assert_eq!(map.get(&1), Some(&1));
    /// ```
    pub fn get<V>(&self, key: &V) -> Option<&U>
    where
        T: Borrow<V>,
        C: Compare<V>,
        V: ?Sized,
    {
        tree::get(&self.arena, self.root, &self.comparator, key)
            .map(|handle| &self.arena[handle].entry.value)
    }

    /// Returns a mutable reference to the value associated with a particular key. Returns `None`
    /// if such a key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1).unwrap();
    /// *map.get_mut(&1).unwrap() = 2;
    /// assert_eq!(map.get(&1), Some(&2));
    /// ```
    pub fn get_mut<V>(&mut self, key: &V) -> Option<&mut U>
    where
        T: Borrow<V>,
        C: Compare<V>,
        V: ?Sized,
    {
        match tree::get(&self.arena, self.root, &self.comparator, key) {
            Some(handle) => Some(&mut self.arena[handle].entry.value),
            None => None,
        }
    }

    /// Returns the number of elements in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1).unwrap();
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
    /// use red_black_collections::red_black_tree::RedBlackMap;
    ///
    /// let map: RedBlackMap<u32, u32> = RedBlackMap::new();
    /// assert!(map.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Clears the map, removing all values. The comparator is kept.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1).unwrap();
    /// map.insert(2, 2).unwrap();
    /// map.clear();
    /// assert_eq!(map.is_empty(), true);
    /// ```
    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = None;
        self.len = 0;
    }

    /// Returns the minimum key of the map. Returns `None` if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1).unwrap();
    /// map.insert(3, 3).unwrap();
    /// assert_eq!(map.min(), Some(&1));
    /// ```
    pub fn min(&self) -> Option<&T> {
        tree::min(&self.arena, self.root).map(|handle| &self.arena[handle].entry.key)
    }

    /// Returns the maximum key of the map. Returns `None` if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1).unwrap();
    /// map.insert(3, 3).unwrap();
    /// assert_eq!(map.max(), Some(&3));
    /// ```
    pub fn max(&self) -> Option<&T> {
        tree::max(&self.arena, self.root).map(|handle| &self.arena[handle].entry.key)
    }

    /// Returns an iterator over the map. The iterator will yield key-value pairs using in-order
    /// traversal. It starts at the leftmost node and walks parent links to find successors, so it
    /// needs no auxiliary storage.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1).unwrap();
    /// map.insert(2, 2).unwrap();
    ///
    /// let mut iterator = map.iter();
    /// assert!(iterator.has_next());
    /// assert_eq!(iterator.next(), Some((&1, &1)));
    /// assert_eq!(iterator.next(), Some((&2, &2)));
    /// assert!(!iterator.has_next());
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> RedBlackMapIter<'_, T, U> {
        RedBlackMapIter {
            arena: &self.arena,
            current: tree::min(&self.arena, self.root),
            remaining: self.len,
        }
    }

    /// Returns an iterator over the keys of the map in order.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(2, "b").unwrap();
    /// map.insert(1, "a").unwrap();
    /// assert_eq!(map.keys().collect::<Vec<&u32>>(), vec![&1, &2]);
    /// ```
    pub fn keys(&self) -> RedBlackMapKeys<'_, T, U> {
        RedBlackMapKeys {
            map_iter: self.iter(),
        }
    }

    /// Returns an iterator over the values of the map, ordered by their keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(2, "b").unwrap();
    /// map.insert(1, "a").unwrap();
    /// assert_eq!(map.values().collect::<Vec<&&str>>(), vec![&"a", &"b"]);
    /// ```
    pub fn values(&self) -> RedBlackMapValues<'_, T, U> {
        RedBlackMapValues {
            map_iter: self.iter(),
        }
    }

    /// Verifies the structure of the tree: the root is black, no red node has a red child, every
    /// path has the same black height, parent links match child links, keys are strictly
    /// increasing in order, and the cached length matches the number of nodes. Returns the first
    /// violation found.
    ///
    /// The check visits every node and recurses to the height of the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// for key in 0..100 {
    ///     map.insert(key, ()).unwrap();
    /// }
    /// assert!(map.check_invariants().is_ok());
    /// ```
    pub fn check_invariants(&self) -> Result<()>
    where
        C: Compare<T>,
    {
        tree::verify(&self.arena, self.root, &self.comparator, self.len)
    }

    fn empty_like(&self) -> Self
    where
        C: Clone,
    {
        RedBlackMap::with_chunk_size(self.comparator.clone(), self.arena.chunk_size())
    }

    /// Returns a new map with the same comparator and the same key-value pairs. The new map does
    /// not share any nodes with `self`.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1).unwrap();
    ///
    /// let mut copy = map.copy().unwrap();
    /// copy.insert(2, 2).unwrap();
    /// assert_eq!(map.len(), 1);
    /// assert_eq!(copy.len(), 2);
    /// ```
    pub fn copy(&self) -> Result<Self>
    where
        T: Clone,
        U: Clone,
        C: Compare<T> + Clone,
    {
        let mut ret = self.empty_like();
        for (key, value) in self {
            ret.insert(key.clone(), value.clone())?;
        }
        Ok(ret)
    }

    /// Returns a new map containing every key in `self` or `other`. Values of keys present in both
    /// maps are taken from `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut a = RedBlackMap::new();
    /// a.insert(1, "a").unwrap();
    /// a.insert(2, "a").unwrap();
    ///
    /// let mut b = RedBlackMap::new();
    /// b.insert(2, "b").unwrap();
    /// b.insert(3, "b").unwrap();
    ///
    /// let union = a.union(&b).unwrap();
    /// assert_eq!(
    ///     union.iter().collect::<Vec<(&u32, &&str)>>(),
    ///     vec![(&1, &"a"), (&2, &"b"), (&3, &"b")],
    /// );
    /// ```
    pub fn union(&self, other: &Self) -> Result<Self>
    where
        T: Clone,
        U: Clone,
        C: Compare<T> + Clone,
    {
        let mut ret = self.copy()?;
        for (key, value) in other {
            ret.insert(key.clone(), value.clone())?;
        }
        debug!("union of {} and {} keys has {} keys", self.len, other.len, ret.len);
        Ok(ret)
    }

    /// Returns a new map containing the keys present in both `self` and `other`, with values taken
    /// from `self`.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut a = RedBlackMap::new();
    /// a.insert(1, "a").unwrap();
    /// a.insert(2, "a").unwrap();
    ///
    /// let mut b = RedBlackMap::new();
    /// b.insert(2, "b").unwrap();
    ///
    /// let intersection = a.intersection(&b).unwrap();
    /// assert_eq!(intersection.iter().collect::<Vec<(&u32, &&str)>>(), vec![(&2, &"a")]);
    /// ```
    pub fn intersection(&self, other: &Self) -> Result<Self>
    where
        T: Clone,
        U: Clone,
        C: Compare<T> + Clone,
    {
        let mut ret = self.empty_like();
        for (key, value) in self {
            if other.contains_key(key) {
                ret.insert(key.clone(), value.clone())?;
            }
        }
        debug!("intersection of {} and {} keys has {} keys", self.len, other.len, ret.len);
        Ok(ret)
    }

    /// Returns a new map containing the keys of `self` that are not in `other`, with values taken
    /// from `self`.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut a = RedBlackMap::new();
    /// a.insert(1, "a").unwrap();
    /// a.insert(2, "a").unwrap();
    ///
    /// let mut b = RedBlackMap::new();
    /// b.insert(2, "b").unwrap();
    ///
    /// let difference = a.difference(&b).unwrap();
    /// assert_eq!(difference.iter().collect::<Vec<(&u32, &&str)>>(), vec![(&1, &"a")]);
    /// ```
    pub fn difference(&self, other: &Self) -> Result<Self>
    where
        T: Clone,
        U: Clone,
        C: Compare<T> + Clone,
    {
        let mut ret = self.empty_like();
        for (key, value) in self {
            if !other.contains_key(key) {
                ret.insert(key.clone(), value.clone())?;
            }
        }
        debug!("difference of {} and {} keys has {} keys", self.len, other.len, ret.len);
        Ok(ret)
    }
}

impl<T, U, C> IntoIterator for RedBlackMap<T, U, C> {
    type IntoIter = RedBlackMapIntoIter<T, U>;
    type Item = (T, U);

    fn into_iter(self) -> Self::IntoIter {
        let mut order = Vec::with_capacity(self.len);
        let mut curr = tree::min(&self.arena, self.root);
        while let Some(handle) = curr {
            order.push(self.arena.position(&handle));
            curr = tree::successor(&self.arena, handle);
        }

        let entries = self
            .arena
            .into_vec()
            .into_iter()
            .map(|node| Some(node.entry))
            .collect();

        RedBlackMapIntoIter {
            entries,
            order: order.into_iter(),
        }
    }
}

impl<'a, T, U, C> IntoIterator for &'a RedBlackMap<T, U, C>
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

/// An owning iterator for `RedBlackMap<T, U, C>`.
///
/// This iterator traverses the elements of the map in-order and yields owned entries.
pub struct RedBlackMapIntoIter<T, U> {
    entries: Vec<Option<Entry<T, U>>>,
    order: vec::IntoIter<usize>,
}

impl<T, U> Iterator for RedBlackMapIntoIter<T, U> {
    type Item = (T, U);

    fn next(&mut self) -> Option<Self::Item> {
        let position = self.order.next()?;
        self.entries[position].take().map(Entry::into_pair)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.order.size_hint()
    }
}

impl<T, U> ExactSizeIterator for RedBlackMapIntoIter<T, U> {}

/// An iterator for `RedBlackMap<T, U, C>`.
///
/// This iterator traverses the elements of the map in-order and yields immutable references.
/// Borrowing the map for the iterator's lifetime rules out mutation during traversal.
pub struct RedBlackMapIter<'a, T, U> {
    arena: &'a tree::Arena<T, U>,
    current: Option<Handle>,
    remaining: usize,
}

impl<'a, T, U> RedBlackMapIter<'a, T, U> {
    /// Returns `true` if the iterator has not been exhausted.
    pub fn has_next(&self) -> bool {
        self.current.is_some()
    }
}

impl<'a, T, U> Iterator for RedBlackMapIter<'a, T, U>
where
    T: 'a,
    U: 'a,
{
    type Item = (&'a T, &'a U);

    fn next(&mut self) -> Option<Self::Item> {
        let arena = self.arena;
        let handle = self.current?;
        self.current = tree::successor(arena, handle);
        self.remaining -= 1;
        let entry = &arena[handle].entry;
        Some((&entry.key, &entry.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T, U> ExactSizeIterator for RedBlackMapIter<'a, T, U> where T: 'a, U: 'a {}

/// An iterator over the keys of a `RedBlackMap<T, U, C>`.
pub struct RedBlackMapKeys<'a, T, U> {
    map_iter: RedBlackMapIter<'a, T, U>,
}

impl<'a, T, U> RedBlackMapKeys<'a, T, U> {
    /// Returns `true` if the iterator has not been exhausted.
    pub fn has_next(&self) -> bool {
        self.map_iter.has_next()
    }
}

impl<'a, T, U> Iterator for RedBlackMapKeys<'a, T, U>
where
    T: 'a,
    U: 'a,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.map_iter.next().map(|pair| pair.0)
    }
}

/// An iterator over the values of a `RedBlackMap<T, U, C>`.
pub struct RedBlackMapValues<'a, T, U> {
    map_iter: RedBlackMapIter<'a, T, U>,
}

impl<'a, T, U> Iterator for RedBlackMapValues<'a, T, U>
where
    T: 'a,
    U: 'a,
{
    type Item = &'a U;

    fn next(&mut self) -> Option<Self::Item> {
        self.map_iter.next().map(|pair| pair.1)
    }
}

impl<T, U, C> Default for RedBlackMap<T, U, C>
where
    C: Default,
{
    fn default() -> Self {
        RedBlackMap::with_comparator(C::default())
    }
}

impl<T, U, C, V> Index<&V> for RedBlackMap<T, U, C>
where
    T: Borrow<V>,
    C: Compare<V>,
    V: ?Sized,
{
    type Output = U;

    fn index(&self, key: &V) -> &Self::Output {
        self.get(key).expect("Error: key does not exist.")
    }
}

impl<T, U, C> fmt::Debug for RedBlackMap<T, U, C>
where
    T: fmt::Debug,
    U: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<T, U, C> PartialEq for RedBlackMap<T, U, C>
where
    T: PartialEq,
    U: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T, U, C> Serialize for RedBlackMap<T, U, C>
where
    T: Serialize,
    U: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.len))?;
        for (key, value) in self {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

struct RedBlackMapVisitor<T, U, C> {
    marker: PhantomData<fn() -> RedBlackMap<T, U, C>>,
}

impl<'de, T, U, C> Visitor<'de> for RedBlackMapVisitor<T, U, C>
where
    T: Deserialize<'de>,
    U: Deserialize<'de>,
    C: Compare<T> + Default,
{
    type Value = RedBlackMap<T, U, C>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a map")
    }

    fn visit_map<M>(self, mut access: M) -> result::Result<Self::Value, M::Error>
    where
        M: MapAccess<'de>,
    {
        let mut map = RedBlackMap::default();
        while let Some((key, value)) = access.next_entry()? {
            map.insert(key, value)
                .map_err(<M::Error as de::Error>::custom)?;
        }
        Ok(map)
    }
}

impl<'de, T, U, C> Deserialize<'de> for RedBlackMap<T, U, C>
where
    T: Deserialize<'de>,
    U: Deserialize<'de>,
    C: Compare<T> + Default,
{
    fn deserialize<D>(deserializer: D) -> result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(RedBlackMapVisitor {
            marker: PhantomData,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::RedBlackMap;
    use crate::compare::CaseInsensitive;
    use serde_test::{assert_tokens, Token};

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
    fn test_empty() {
        let map: RedBlackMap<u32, u32> = RedBlackMap::new();
        assert_eq!(map.min(), None);
        assert_eq!(map.max(), None);
        assert!(!map.contains_key(&0));
        assert!(!map.iter().has_next());
        assert_eq!(map.iter().next(), None);
        assert!(map.check_invariants().is_ok());
    }

    #[test]
    fn test_insert() {
        let mut map = RedBlackMap::new();
        assert_eq!(map.insert(1, 1).unwrap(), None);
        assert!(map.contains_key(&1));
        assert_eq!(map.get(&1), Some(&1));
    }

    #[test]
    fn test_insert_replace() {
        let mut map = RedBlackMap::new();
        assert_eq!(map.insert(1, 1).unwrap(), None);
        assert_eq!(map.insert(1, 3).unwrap(), Some(1));
        assert_eq!(map.get(&1), Some(&3));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_insert_replace_keeps_key() {
        let mut map = RedBlackMap::with_comparator(CaseInsensitive);
        map.insert(String::from("Spam"), 1).unwrap();
        assert_eq!(map.insert(String::from("SPAM"), 2).unwrap(), Some(1));
        assert_eq!(
            map.into_iter().collect::<Vec<(String, u32)>>(),
            vec![(String::from("Spam"), 2)],
        );
    }

    #[test]
    fn test_get_borrowed() {
        let mut map = RedBlackMap::new();
        map.insert(String::from("a"), 1).unwrap();
        assert_eq!(map.get("a"), Some(&1));
        assert_eq!(map["a"], 1);
    }

    #[test]
    fn test_get_mut() {
        let mut map = RedBlackMap::new();
        map.insert(1, 1).unwrap();
        {
            let value = map.get_mut(&1);
            *value.unwrap() = 3;
        }
        assert_eq!(map.get(&1), Some(&3));
    }

    #[test]
    fn test_min_max() {
        let mut map = RedBlackMap::new();
        map.insert(1, 1).unwrap();
        map.insert(3, 3).unwrap();
        map.insert(5, 5).unwrap();

        assert_eq!(map.min(), Some(&1));
        assert_eq!(map.max(), Some(&5));
    }

    #[test]
    fn test_clear() {
        let mut map = RedBlackMap::new();
        map.insert(1, 1).unwrap();
        map.clear();
        assert!(map.is_empty());
        assert!(!map.contains_key(&1));
        map.insert(2, 2).unwrap();
        assert_eq!(map.iter().collect::<Vec<(&u32, &u32)>>(), vec![(&2, &2)]);
    }

    #[test]
    fn test_into_iter() {
        let mut map = RedBlackMap::new();
        map.insert(1, 2).unwrap();
        map.insert(5, 6).unwrap();
        map.insert(3, 4).unwrap();

        let iter = map.into_iter();
        assert_eq!(iter.len(), 3);
        assert_eq!(iter.collect::<Vec<(u32, u32)>>(), vec![(1, 2), (3, 4), (5, 6)]);
    }

    #[test]
    fn test_iter() {
        let mut map = RedBlackMap::new();
        map.insert(1, 2).unwrap();
        map.insert(5, 6).unwrap();
        map.insert(3, 4).unwrap();

        let mut iter = map.iter();
        assert_eq!(iter.len(), 3);
        assert_eq!(iter.next(), Some((&1, &2)));
        assert_eq!(iter.len(), 2);
        assert_eq!(
            iter.collect::<Vec<(&u32, &u32)>>(),
            vec![(&3, &4), (&5, &6)],
        );
        assert_eq!(map.values().collect::<Vec<&u32>>(), vec![&2, &4, &6]);
    }

    #[test]
    fn test_scenario_order() {
        let mut map = RedBlackMap::new();
        for key in &[5, 3, 8, 1, 4, 7, 9, 2, 6] {
            map.insert(*key, *key * 10).unwrap();
            map.check_invariants().unwrap();
        }
        assert_eq!(
            map.keys().cloned().collect::<Vec<u32>>(),
            vec![1, 2, 3, 4, 5, 6, 7, 8, 9],
        );
    }

    #[test]
    fn test_copy_is_independent() {
        let mut map = RedBlackMap::new();
        map.insert(1, 1).unwrap();
        map.insert(2, 2).unwrap();

        let mut copy = map.copy().unwrap();
        assert_eq!(copy, map);

        copy.insert(3, 3).unwrap();
        *copy.get_mut(&1).unwrap() = 10;
        drop(copy);

        assert_eq!(map.len(), 2);
        assert_eq!(map.get(&1), Some(&1));
        map.check_invariants().unwrap();
    }

    #[test]
    fn test_set_operations() {
        let mut a = RedBlackMap::new();
        let mut b = RedBlackMap::new();
        for key in 1..4 {
            a.insert(key, 'a').unwrap();
        }
        for key in 2..5 {
            b.insert(key, 'b').unwrap();
        }

        let union = a.union(&b).unwrap();
        assert_eq!(
            union.iter().collect::<Vec<(&u32, &char)>>(),
            vec![(&1, &'a'), (&2, &'b'), (&3, &'b'), (&4, &'b')],
        );

        let intersection = a.intersection(&b).unwrap();
        assert_eq!(
            intersection.iter().collect::<Vec<(&u32, &char)>>(),
            vec![(&2, &'a'), (&3, &'a')],
        );

        assert_eq!(a.difference(&b).unwrap().keys().collect::<Vec<&u32>>(), vec![&1]);
        assert_eq!(b.difference(&a).unwrap().keys().collect::<Vec<&u32>>(), vec![&4]);
    }

    #[test]
    fn test_debug() {
        let mut map = RedBlackMap::new();
        map.insert(2, "b").unwrap();
        map.insert(1, "a").unwrap();
        assert_eq!(format!("{:?}", map), r#"{1: "a", 2: "b"}"#);
    }

    #[test]
    fn test_ser_de_tokens() {
        let mut map: RedBlackMap<u32, u32> = RedBlackMap::new();
        map.insert(2, 20).unwrap();
        map.insert(1, 10).unwrap();

        assert_tokens(
            &map,
            &[
                Token::Map { len: Some(2) },
                Token::U32(1),
                Token::U32(10),
                Token::U32(2),
                Token::U32(20),
                Token::MapEnd,
            ],
        );
    }
}
