use crate::SortedVectorMap;

pub struct SortedVectorSet<K: Ord> {
    map: SortedVectorMap<K, ()>,
}

impl<K: Ord> Default for SortedVectorSet<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord> SortedVectorSet<K> {
    /// Create a new SortedVectorSet
    ///
    /// # Examples
    /// ```rust
    /// use sorted_vector_map::SortedVectorSet;
    ///
    /// let mut set = SortedVectorSet::<i32>::new();
    /// ```
    pub fn new() -> Self {
        Self {
            map: SortedVectorMap::new(),
        }
    }

    /// Create a new SortedVectorSet with pre-allocated storage for at least
    /// `capacity` keys
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            map: SortedVectorMap::with_capacity(capacity),
        }
    }

    /// Returns key count in the set
    #[inline]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns true if the set contains no key
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Reserve storage for at least `additional` more keys
    #[inline]
    pub fn reserve(&mut self, additional: usize) {
        self.map.reserve(additional);
    }

    /// Insert a key into the set
    /// Returns true if the key was inserted, false if it already existed
    ///
    /// # Examples
    /// ```rust
    /// use sorted_vector_map::SortedVectorSet;
    ///
    /// let mut set = SortedVectorSet::<i32>::new();
    /// assert!(set.insert(1));
    /// assert!(!set.insert(1));
    /// ```
    pub fn insert(&mut self, key: K) -> bool {
        self.map.insert(key, ())
    }

    /// Returns true if the set contains the key
    ///
    /// # Examples
    /// ```rust
    /// use sorted_vector_map::SortedVectorSet;
    ///
    /// let mut set = SortedVectorSet::<i32>::new();
    /// set.insert(1);
    /// assert!(set.contains(&1));
    /// assert!(!set.contains(&2));
    /// ```
    pub fn contains(&self, key: &K) -> bool {
        self.map.contains_key(key)
    }

    /// Returns an iterator over the keys, ascending
    ///
    /// # Examples
    /// ```rust
    /// use sorted_vector_map::SortedVectorSet;
    ///
    /// let mut set = SortedVectorSet::<i32>::new();
    /// set.insert(2);
    /// set.insert(1);
    ///
    /// let keys = set.iter().copied().collect::<Vec<_>>();
    /// assert_eq!(keys, vec![1, 2]);
    /// ```
    pub fn iter(&self) -> impl Iterator<Item = &K> {
        self.map.keys()
    }
}

impl<K: Ord> FromIterator<K> for SortedVectorSet<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        Self {
            map: iter.into_iter().map(|k| (k, ())).collect(),
        }
    }
}
