use crate::compare::{Compare, Natural};
use crate::red_black_tree::map::{RedBlackMap, RedBlackMapIntoIter, RedBlackMapKeys};
use crate::red_black_tree::Result;
use serde::de::{self, Deserialize, Deserializer, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeSeq, Serializer};
use std::borrow::Borrow;
use std::fmt;
use std::marker::PhantomData;
use std::result;

/// An ordered set implemented using a red black tree.
///
/// A red black tree is a self-balancing binary search tree that colors each node red or black and
/// keeps the number of black nodes on every root-to-leaf path equal, so its height stays
/// logarithmic in the number of keys.
///
/// # Examples
///
/// ```
/// use red_black_collections::red_black_tree::RedBlackSet;
///
/// let mut set = RedBlackSet::new();
/// set.insert(0).unwrap();
/// set.insert(3).unwrap();
///
/// assert_eq!(set.len(), 2);
///
/// assert_eq!(set.min(), Some(&0));
/// assert!(set.contains(&3));
/// assert!(!set.contains(&1));
/// ```
pub struct RedBlackSet<T, C = Natural> {
    map: RedBlackMap<T, (), C>,
}

impl<T> RedBlackSet<T> {
    /// Constructs a new, empty `RedBlackSet<T>` ordered by `Ord`.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::RedBlackSet;
    ///
    /// let set: RedBlackSet<u32> = RedBlackSet::new();
    /// ```
    pub fn new() -> Self {
        RedBlackSet {
            map: RedBlackMap::new(),
        }
    }
}

impl<T, C> RedBlackSet<T, C> {
    /// Constructs a new, empty `RedBlackSet<T, C>` ordered by `comparator`.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::compare::CaseInsensitive;
    /// use red_black_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::with_comparator(CaseInsensitive);
    /// set.insert(String::from("Hello")).unwrap();
    /// assert!(set.contains(&String::from("HELLO")));
    /// ```
    pub fn with_comparator(comparator: C) -> Self {
        RedBlackSet {
            map: RedBlackMap::with_comparator(comparator),
        }
    }

    /// Constructs a new, empty `RedBlackSet<T, C>` ordered by `comparator` whose nodes are
    /// allocated `chunk_size` at a time.
    pub fn with_chunk_size(comparator: C, chunk_size: usize) -> Self {
        RedBlackSet {
            map: RedBlackMap::with_chunk_size(comparator, chunk_size),
        }
    }

    /// Inserts a key into the set. Returns `true` if the key was not already in the set. Returns
    /// an error if a node could not be allocated.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// assert_eq!(set.insert(1).unwrap(), true);
    /// assert!(set.contains(&1));
    /// assert_eq!(set.insert(1).unwrap(), false);
    /// ```
    pub fn insert(&mut self, key: T) -> Result<bool>
    where
        C: Compare<T>,
    {
        self.map.insert(key, ()).map(|old| old.is_none())
    }

    /// Checks if a key exists in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1).unwrap();
    /// assert!(!set.contains(&0));
    /// assert!(set.contains(&1));
    /// ```
    pub fn contains<V>(&self, key: &V) -> bool
    where
        T: Borrow<V>,
        C: Compare<V>,
        V: ?Sized,
    {
        self.map.contains_key(key)
    }

    /// Returns the number of elements in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1).unwrap();
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::RedBlackSet;
    ///
    /// let set: RedBlackSet<u32> = RedBlackSet::new();
    /// assert!(set.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Clears the set, removing all values.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1).unwrap();
    /// set.insert(2).unwrap();
    /// set.clear();
    /// assert_eq!(set.is_empty(), true);
    /// ```
    pub fn clear(&mut self) {
        self.map.clear();
    }

    /// Returns the minimum key of the set. Returns `None` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1).unwrap();
    /// set.insert(3).unwrap();
    /// assert_eq!(set.min(), Some(&1));
    /// ```
    pub fn min(&self) -> Option<&T> {
        self.map.min()
    }

    /// Returns the maximum key of the set. Returns `None` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1).unwrap();
    /// set.insert(3).unwrap();
    /// assert_eq!(set.max(), Some(&3));
    /// ```
    pub fn max(&self) -> Option<&T> {
        self.map.max()
    }

    /// Returns an iterator over the set. The iterator will yield keys using in-order traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1).unwrap();
    /// set.insert(3).unwrap();
    ///
    /// let mut iterator = set.iter();
    /// assert_eq!(iterator.next(), Some(&1));
    /// assert_eq!(iterator.next(), Some(&3));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> RedBlackSetIter<'_, T> {
        RedBlackSetIter {
            map_iter: self.map.keys(),
        }
    }

    /// Verifies the red black invariants of the underlying tree. See
    /// `RedBlackMap::check_invariants`.
    pub fn check_invariants(&self) -> Result<()>
    where
        C: Compare<T>,
    {
        self.map.check_invariants()
    }

    /// Returns a new set with the same comparator and keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1).unwrap();
    /// let copy = set.copy().unwrap();
    /// assert_eq!(copy.iter().collect::<Vec<&u32>>(), vec![&1]);
    /// ```
    pub fn copy(&self) -> Result<Self>
    where
        T: Clone,
        C: Compare<T> + Clone,
    {
        self.map.copy().map(|map| RedBlackSet { map })
    }

    /// Returns a new set containing the keys in `self` or `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut a = RedBlackSet::new();
    /// a.insert(1).unwrap();
    /// let mut b = RedBlackSet::new();
    /// b.insert(2).unwrap();
    ///
    /// let union = a.union(&b).unwrap();
    /// assert_eq!(union.iter().collect::<Vec<&u32>>(), vec![&1, &2]);
    /// ```
    pub fn union(&self, other: &Self) -> Result<Self>
    where
        T: Clone,
        C: Compare<T> + Clone,
    {
        self.map.union(&other.map).map(|map| RedBlackSet { map })
    }

    /// Returns a new set containing the keys in both `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut a = RedBlackSet::new();
    /// a.insert(1).unwrap();
    /// a.insert(2).unwrap();
    /// let mut b = RedBlackSet::new();
    /// b.insert(2).unwrap();
    ///
    /// let intersection = a.intersection(&b).unwrap();
    /// assert_eq!(intersection.iter().collect::<Vec<&u32>>(), vec![&2]);
    /// ```
    pub fn intersection(&self, other: &Self) -> Result<Self>
    where
        T: Clone,
        C: Compare<T> + Clone,
    {
        self.map.intersection(&other.map).map(|map| RedBlackSet { map })
    }

    /// Returns a new set containing the keys in `self` that are not in `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut a = RedBlackSet::new();
    /// a.insert(1).unwrap();
    /// a.insert(2).unwrap();
    /// let mut b = RedBlackSet::new();
    /// b.insert(2).unwrap();
    ///
    /// let difference = a.difference(&b).unwrap();
    /// assert_eq!(difference.iter().collect::<Vec<&u32>>(), vec![&1]);
    /// ```
    pub fn difference(&self, other: &Self) -> Result<Self>
    where
        T: Clone,
        C: Compare<T> + Clone,
    {
        self.map.difference(&other.map).map(|map| RedBlackSet { map })
    }
}

impl<T, C> IntoIterator for RedBlackSet<T, C> {
    type IntoIter = RedBlackSetIntoIter<T>;
    type Item = T;

    fn into_iter(self) -> Self::IntoIter {
        Self::IntoIter {
            map_iter: self.map.into_iter(),
        }
    }
}

impl<'a, T, C> IntoIterator for &'a RedBlackSet<T, C>
where
    T: 'a,
{
    type IntoIter = RedBlackSetIter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An owning iterator for `RedBlackSet<T, C>`.
///
/// This iterator traverses the elements of the set in-order and yields owned keys.
pub struct RedBlackSetIntoIter<T> {
    map_iter: RedBlackMapIntoIter<T, ()>,
}

impl<T> Iterator for RedBlackSetIntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.map_iter.next().map(|pair| pair.0)
    }
}

/// An iterator for `RedBlackSet<T, C>`.
///
/// This iterator traverses the elements of the set in-order and yields immutable references.
pub struct RedBlackSetIter<'a, T> {
    map_iter: RedBlackMapKeys<'a, T, ()>,
}

impl<'a, T> RedBlackSetIter<'a, T> {
    /// Returns `true` if the iterator has not been exhausted.
    pub fn has_next(&self) -> bool {
        self.map_iter.has_next()
    }
}

impl<'a, T> Iterator for RedBlackSetIter<'a, T>
where
    T: 'a,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.map_iter.next()
    }
}

impl<T, C> Default for RedBlackSet<T, C>
where
    C: Default,
{
    fn default() -> Self {
        RedBlackSet::with_comparator(C::default())
    }
}

impl<T, C> fmt::Debug for RedBlackSet<T, C>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T, C> PartialEq for RedBlackSet<T, C>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.map == other.map
    }
}

impl<T, C> Serialize for RedBlackSet<T, C>
where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for key in self {
            seq.serialize_element(key)?;
        }
        seq.end()
    }
}

struct RedBlackSetVisitor<T, C> {
    marker: PhantomData<fn() -> RedBlackSet<T, C>>,
}

impl<'de, T, C> Visitor<'de> for RedBlackSetVisitor<T, C>
where
    T: Deserialize<'de>,
    C: Compare<T> + Default,
{
    type Value = RedBlackSet<T, C>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<S>(self, mut access: S) -> result::Result<Self::Value, S::Error>
    where
        S: SeqAccess<'de>,
    {
        let mut set = RedBlackSet::default();
        while let Some(key) = access.next_element()? {
            set.insert(key)
                .map_err(<S::Error as de::Error>::custom)?;
        }
        Ok(set)
    }
}

impl<'de, T, C> Deserialize<'de> for RedBlackSet<T, C>
where
    T: Deserialize<'de>,
    C: Compare<T> + Default,
{
    fn deserialize<D>(deserializer: D) -> result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(RedBlackSetVisitor {
            marker: PhantomData,
        })
    }
}
