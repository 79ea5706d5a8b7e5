use std::cmp::Ordering;

pub trait PairSearcher {
    type Key: Ord;

    /// search the key in the sorted pair slice, returns same result as binary
    /// search: `Ok(idx)` when present, `Err(idx)` with the lower bound
    /// position otherwise
    fn search<V>(pairs: &[(Self::Key, V)], key: &Self::Key) -> Result<usize, usize>;
}

pub struct BinarySearch<K>(std::marker::PhantomData<K>);

impl<K: Ord> PairSearcher for BinarySearch<K> {
    type Key = K;

    #[inline]
    fn search<V>(pairs: &[(K, V)], key: &K) -> Result<usize, usize> {
        pairs.binary_search_by(|(k, _)| k.cmp(key))
    }
}

pub struct LinearSearch<K>(std::marker::PhantomData<K>);

impl<K: Ord> PairSearcher for LinearSearch<K> {
    type Key = K;

    fn search<V>(pairs: &[(K, V)], key: &K) -> Result<usize, usize> {
        pairs
            .iter()
            .enumerate()
            .find_map(|(idx, (k, _))| match k.cmp(key) {
                Ordering::Less => None,
                Ordering::Equal => Some(Ok(idx)),
                Ordering::Greater => Some(Err(idx)),
            })
            .unwrap_or(Err(pairs.len()))
    }
}
