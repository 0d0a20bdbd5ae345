//! ChainHashMap: chained hash map over one shared node chain
//!
//! Buckets do not own per-bucket lists. Instead every entry lives on a
//! single circular doubly linked chain (the same node type the linked
//! list uses), and each bucket slot points at the first node of its
//! contiguous run in that chain. Rehashing rethreads the chain in place
//! and never reallocates an entry, which is the point of the layout.
//!
//! Iteration follows chain order — insertion adjacency within buckets —
//! and is explicitly unordered from the caller's point of view; a resize
//! reshuffles it.

use crate::error::Result;
use crate::list::node::{Node, NodeHeader};
use crate::memory::{HeapNodePool, NodePool};
use crate::{FlexVec, Pair};
use std::fmt;
use std::hash::{BuildHasher, Hash, Hasher};
use std::marker::PhantomData;
use std::ops::Index;
use std::ptr::NonNull;

/// Bucket count used when none is requested
pub const DEFAULT_BUCKETS: usize = 31;

/// Load factor threshold that triggers bucket growth
pub const DEFAULT_LOAD_FACTOR: f64 = 0.75;

const BUCKET_GROW_FACTOR: usize = 2;

/// One mapping held by a chain node.
pub struct MapEntry<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    pub(crate) hash: u64,
    pub(crate) bucket: usize,
}

/// Chained hash map with a shared node chain and bucket-start pointers.
///
/// Invariant: all nodes whose bucket index is `i` are contiguous in the
/// chain, and bucket slot `i` points at the first of them (or is empty).
/// Lookups scan only the matching bucket's run: O(1) average, O(n) under
/// a degenerate hash.
///
/// Before every insert the load factor is checked; crossing the
/// configured threshold (default 0.75; 0 disables growth) doubles the
/// bucket count.
///
/// # Examples
///
/// ```rust
/// use holdall::ChainHashMap;
///
/// let mut map = ChainHashMap::new();
/// map.insert("answer", 42)?;
/// assert_eq!(map.get(&"answer"), Some(&42));
/// assert!(map.contains_key(&"answer"));
/// # Ok::<(), holdall::HoldallError>(())
/// ```
pub struct ChainHashMap<K, V, S = ahash::RandomState, P = HeapNodePool>
where
    P: NodePool<MapEntry<K, V>>,
{
    buckets: FlexVec<Option<NonNull<NodeHeader>>>,
    sentinel: NonNull<NodeHeader>,
    len: usize,
    load_factor: f64,
    hasher: S,
    pool: P,
    _marker: PhantomData<Box<(K, V)>>,
}

impl<K: Hash + Eq, V> ChainHashMap<K, V, ahash::RandomState, HeapNodePool> {
    /// Create a map with [`DEFAULT_BUCKETS`] buckets.
    pub fn new() -> Self {
        Self::with_buckets(DEFAULT_BUCKETS)
    }

    /// Create a map with the given bucket count (clamped to at least 1).
    pub fn with_buckets(buckets: usize) -> Self {
        Self::with_parts(
            buckets,
            DEFAULT_LOAD_FACTOR,
            ahash::RandomState::default(),
            HeapNodePool,
        )
    }

    /// Create a map with the given bucket count and load factor
    /// threshold. A threshold of 0 disables automatic growth.
    pub fn with_load_factor(buckets: usize, load_factor: f64) -> Self {
        Self::with_parts(
            buckets,
            load_factor,
            ahash::RandomState::default(),
            HeapNodePool,
        )
    }
}

impl<K, V, S, P> ChainHashMap<K, V, S, P>
where
    K: Hash + Eq,
    S: BuildHasher,
    P: NodePool<MapEntry<K, V>>,
{
    /// Create a map from all of its parts: bucket count (clamped to at
    /// least 1), load factor threshold (0 disables growth, values must
    /// be finite and non-negative or the default is used), hash state,
    /// and node pool.
    pub fn with_parts(buckets: usize, load_factor: f64, hasher: S, pool: P) -> Self {
        let load_factor = if load_factor.is_finite() && load_factor >= 0.0 {
            load_factor
        } else {
            DEFAULT_LOAD_FACTOR
        };
        let buckets = buckets.max(1);
        let mut map = FlexVec::with_capacity(buckets).expect("allocation failed building map");
        map.resize(buckets, None).expect("allocation failed building map");
        let sentinel = NonNull::from(Box::leak(Box::new(NodeHeader::detached())));
        unsafe { NodeHeader::self_link(sentinel) };
        Self {
            buckets: map,
            sentinel,
            len: 0,
            load_factor,
            hasher,
            pool,
            _marker: PhantomData,
        }
    }

    /// Number of mappings
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when no mappings exist
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Current bucket count
    #[inline]
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Current load: mappings per bucket
    #[inline]
    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.buckets.len() as f64
    }

    fn hash_key(&self, key: &K) -> u64 {
        let mut state = self.hasher.build_hasher();
        key.hash(&mut state);
        state.finish()
    }

    #[inline]
    fn bucket_of(&self, hash: u64) -> usize {
        (hash % self.buckets.len() as u64) as usize
    }

    #[inline]
    unsafe fn entry(&self, header: NonNull<NodeHeader>) -> &MapEntry<K, V> {
        debug_assert!(header != self.sentinel);
        unsafe { &Node::<MapEntry<K, V>>::from_header(header).as_ref().element }
    }

    #[inline]
    unsafe fn entry_mut(&mut self, header: NonNull<NodeHeader>) -> &mut MapEntry<K, V> {
        debug_assert!(header != self.sentinel);
        unsafe { &mut Node::<MapEntry<K, V>>::from_header(header).as_mut().element }
    }

    /// Find the node holding `key`, scanning only its bucket's run.
    fn find_node(&self, key: &K, hash: u64, bucket: usize) -> Option<NonNull<NodeHeader>> {
        let mut node = self.buckets[bucket]?;
        while node != self.sentinel {
            let entry = unsafe { self.entry(node) };
            if entry.bucket != bucket {
                break;
            }
            if entry.hash == hash && entry.key == *key {
                return Some(node);
            }
            node = unsafe { node.as_ref().next };
        }
        None
    }

    /// First node of the next occupied bucket at or after `from`, or the
    /// sentinel when none is occupied. New runs are linked in front of
    /// this node, which keeps same-bucket nodes contiguous.
    fn next_occupied(&self, from: usize) -> NonNull<NodeHeader> {
        for i in from..self.buckets.len() {
            if let Some(node) = self.buckets[i] {
                return node;
            }
        }
        self.sentinel
    }

    /// Insert or update a mapping, returning the previous value when the
    /// key was already present.
    pub fn insert(&mut self, key: K, value: V) -> Result<Option<V>> {
        self.check_load_factor()?;

        let hash = self.hash_key(&key);
        let bucket = self.bucket_of(hash);

        if let Some(node) = self.find_node(&key, hash, bucket) {
            let entry = unsafe { self.entry_mut(node) };
            return Ok(Some(std::mem::replace(&mut entry.value, value)));
        }

        // Link the new node at its run's boundary: after the existing run
        // when the bucket is occupied, else before the next occupied
        // bucket's start (or the sentinel).
        let at = match self.buckets[bucket] {
            Some(mut node) => {
                while node != self.sentinel && unsafe { self.entry(node) }.bucket == bucket {
                    node = unsafe { node.as_ref().next };
                }
                node
            }
            None => self.next_occupied(bucket + 1),
        };

        let node = self.pool.allocate(MapEntry {
            key,
            value,
            hash,
            bucket,
        })?;
        let header = Node::header(node);
        unsafe { NodeHeader::link_before(header, at) };
        if self.buckets[bucket].is_none() {
            self.buckets[bucket] = Some(header);
        }
        self.len += 1;
        Ok(None)
    }

    /// Reference to the value mapped to `key`
    pub fn get(&self, key: &K) -> Option<&V> {
        let hash = self.hash_key(key);
        let bucket = self.bucket_of(hash);
        let node = self.find_node(key, hash, bucket)?;
        Some(unsafe { &self.entry(node).value })
    }

    /// Mutable reference to the value mapped to `key`
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let hash = self.hash_key(key);
        let bucket = self.bucket_of(hash);
        let node = self.find_node(key, hash, bucket)?;
        Some(unsafe { &mut self.entry_mut(node).value })
    }

    /// The stored key and value for `key`
    pub fn get_key_value(&self, key: &K) -> Option<(&K, &V)> {
        let hash = self.hash_key(key);
        let bucket = self.bucket_of(hash);
        let node = self.find_node(key, hash, bucket)?;
        let entry = unsafe { self.entry(node) };
        Some((&entry.key, &entry.value))
    }

    /// True when `key` is mapped
    pub fn contains_key(&self, key: &K) -> bool {
        let hash = self.hash_key(key);
        let bucket = self.bucket_of(hash);
        self.find_node(key, hash, bucket).is_some()
    }

    /// True when some mapping holds `value` (full chain walk)
    pub fn contains_value(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        self.iter().any(|(_, v)| v == value)
    }

    /// Remove the mapping for `key`, returning its value.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let hash = self.hash_key(key);
        let bucket = self.bucket_of(hash);
        let node = self.find_node(key, hash, bucket)?;
        let next = unsafe { node.as_ref().next };

        // The bucket slot must stop pointing at the removed node: the next
        // node takes over only if it belongs to the same bucket.
        if self.buckets[bucket] == Some(node) {
            if next != self.sentinel && unsafe { self.entry(next) }.bucket == bucket {
                self.buckets[bucket] = Some(next);
            } else {
                self.buckets[bucket] = None;
            }
        }

        unsafe {
            NodeHeader::unlink(node);
            self.len -= 1;
            Some(self.pool.take(Node::from_header(node)).value)
        }
    }

    /// Grow buckets when the load factor threshold is crossed.
    fn check_load_factor(&mut self) -> Result<()> {
        if self.load_factor > 0.0 && self.load_factor() > self.load_factor {
            self.resize(self.buckets.len() * BUCKET_GROW_FACTOR)?;
        }
        Ok(())
    }

    /// Rebuild the bucket array over `new_buckets` buckets, rethreading
    /// the shared chain in place. Entry payloads are not reallocated; the
    /// linkage step per node is the same one `insert` uses.
    pub fn resize(&mut self, new_buckets: usize) -> Result<()> {
        let new_buckets = new_buckets.max(1);
        log::debug!(
            "rehashing {} entries from {} to {} buckets",
            self.len,
            self.buckets.len(),
            new_buckets
        );

        let mut node = unsafe { self.sentinel.as_ref().next };
        self.buckets.clear();
        self.buckets.resize(new_buckets, None)?;
        unsafe { NodeHeader::self_link(self.sentinel) };

        while node != self.sentinel {
            let next = unsafe { node.as_ref().next };
            let bucket = {
                let entry = unsafe { self.entry_mut(node) };
                entry.bucket = (entry.hash % new_buckets as u64) as usize;
                entry.bucket
            };
            // Push-front within the bucket's run, so the slot always moves
            let at = match self.buckets[bucket] {
                Some(head) => head,
                None => self.next_occupied(bucket + 1),
            };
            unsafe { NodeHeader::link_before(node, at) };
            self.buckets[bucket] = Some(node);
            node = next;
        }
        Ok(())
    }

    /// Remove every mapping, keeping the bucket array size.
    pub fn clear(&mut self) {
        let mut node = unsafe { self.sentinel.as_ref().next };
        while node != self.sentinel {
            let next = unsafe { node.as_ref().next };
            unsafe { self.pool.dispose(Node::from_header(node)) };
            node = next;
        }
        unsafe { NodeHeader::self_link(self.sentinel) };
        for slot in self.buckets.iter_mut() {
            *slot = None;
        }
        self.len = 0;
    }

    /// Iterate mappings in chain order (unordered from the caller's view)
    pub fn iter(&self) -> MapIter<'_, K, V, S, P> {
        MapIter {
            node: unsafe { self.sentinel.as_ref().next },
            sentinel: self.sentinel,
            _map: self,
        }
    }

    /// Iterate the keys in chain order
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.iter().map(|(k, _)| k)
    }

    /// Iterate the values in chain order
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.iter().map(|(_, v)| v)
    }

    /// Collect the mappings into an array of pairs.
    pub fn to_pairs(&self) -> Result<FlexVec<Pair<K, V>>>
    where
        K: Clone,
        V: Clone,
    {
        let mut pairs = FlexVec::with_capacity(self.len.max(1))?;
        for (k, v) in self.iter() {
            pairs.push_back(Pair::new(k.clone(), v.clone()))?;
        }
        Ok(pairs)
    }
}

/// Chain-order iterator over a [`ChainHashMap`]
pub struct MapIter<'a, K, V, S, P>
where
    P: NodePool<MapEntry<K, V>>,
{
    node: NonNull<NodeHeader>,
    sentinel: NonNull<NodeHeader>,
    _map: &'a ChainHashMap<K, V, S, P>,
}

impl<'a, K, V, S, P> Iterator for MapIter<'a, K, V, S, P>
where
    P: NodePool<MapEntry<K, V>>,
{
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        if self.node == self.sentinel {
            return None;
        }
        let entry = unsafe { &Node::<MapEntry<K, V>>::from_header(self.node).as_ref().element };
        self.node = unsafe { self.node.as_ref().next };
        Some((&entry.key, &entry.value))
    }
}

impl<K: Hash + Eq, V> Default for ChainHashMap<K, V, ahash::RandomState, HeapNodePool> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, S, P> Drop for ChainHashMap<K, V, S, P>
where
    P: NodePool<MapEntry<K, V>>,
{
    fn drop(&mut self) {
        let mut node = unsafe { self.sentinel.as_ref().next };
        while node != self.sentinel {
            let next = unsafe { node.as_ref().next };
            unsafe { self.pool.dispose(Node::from_header(node)) };
            node = next;
        }
        unsafe { drop(Box::from_raw(self.sentinel.as_ptr())) };
    }
}

impl<K, V, S, P> Index<&K> for ChainHashMap<K, V, S, P>
where
    K: Hash + Eq,
    S: BuildHasher,
    P: NodePool<MapEntry<K, V>>,
{
    type Output = V;

    /// Panics when the key is not mapped; check with
    /// [`contains_key`](ChainHashMap::contains_key) or use
    /// [`get`](ChainHashMap::get) first.
    fn index(&self, key: &K) -> &Self::Output {
        self.get(key).expect("ChainHashMap: key not found")
    }
}

impl<K, V, S, P> fmt::Debug for ChainHashMap<K, V, S, P>
where
    K: Hash + Eq + fmt::Debug,
    V: fmt::Debug,
    S: BuildHasher,
    P: NodePool<MapEntry<K, V>>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V, S, S2, P, P2> PartialEq<ChainHashMap<K, V, S2, P2>> for ChainHashMap<K, V, S, P>
where
    K: Hash + Eq,
    V: PartialEq,
    S: BuildHasher,
    S2: BuildHasher,
    P: NodePool<MapEntry<K, V>>,
    P2: NodePool<MapEntry<K, V>>,
{
    fn eq(&self, other: &ChainHashMap<K, V, S2, P2>) -> bool {
        self.len == other.len
            && self
                .iter()
                .all(|(k, v)| other.get(k).map_or(false, |ov| ov == v))
    }
}

impl<K, V, S, P> Clone for ChainHashMap<K, V, S, P>
where
    K: Hash + Eq + Clone,
    V: Clone,
    S: BuildHasher + Clone,
    P: NodePool<MapEntry<K, V>> + Default,
{
    fn clone(&self) -> Self {
        let mut map = Self::with_parts(
            self.buckets.len(),
            self.load_factor,
            self.hasher.clone(),
            P::default(),
        );
        for (k, v) in self.iter() {
            map.insert(k.clone(), v.clone())
                .expect("allocation failed cloning ChainHashMap");
        }
        map
    }
}

// Safety: the map owns its nodes exclusively
unsafe impl<K: Send, V: Send, S: Send, P> Send for ChainHashMap<K, V, S, P> where
    P: NodePool<MapEntry<K, V>> + Send
{
}
unsafe impl<K: Sync, V: Sync, S: Sync, P> Sync for ChainHashMap<K, V, S, P> where
    P: NodePool<MapEntry<K, V>> + Sync
{
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::FixedNodePool;

    #[test]
    fn test_insert_get_round_trip() {
        let mut map = ChainHashMap::new();
        assert_eq!(map.insert("a", 1).unwrap(), None);
        assert_eq!(map.insert("b", 2).unwrap(), None);
        assert_eq!(map.get(&"a"), Some(&1));
        assert_eq!(map.get(&"b"), Some(&2));
        assert_eq!(map.get(&"c"), None);
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_insert_updates_in_place() {
        let mut map = ChainHashMap::new();
        map.insert("k", 1).unwrap();
        assert_eq!(map.insert("k", 2).unwrap(), Some(1));
        assert_eq!(map.len(), 1);
        assert_eq!(map.get(&"k"), Some(&2));
    }

    #[test]
    fn test_remove() {
        let mut map = ChainHashMap::new();
        for i in 0..20 {
            map.insert(i, i * 10).unwrap();
        }
        assert_eq!(map.remove(&7), Some(70));
        assert_eq!(map.remove(&7), None);
        assert!(!map.contains_key(&7));
        assert_eq!(map.len(), 19);
        for i in (0..20).filter(|&i| i != 7) {
            assert_eq!(map.get(&i), Some(&(i * 10)));
        }
    }

    #[test]
    fn test_load_factor_growth_boundary() {
        // 31 buckets at 0.75: 24 inserts stay put, the 25th doubles
        let mut map = ChainHashMap::with_buckets(31);
        for i in 0..24 {
            map.insert(i, ()).unwrap();
        }
        assert_eq!(map.bucket_count(), 31);
        map.insert(24, ()).unwrap();
        assert_eq!(map.bucket_count(), 62);
        for i in 0..25 {
            assert!(map.contains_key(&i));
        }
    }

    #[test]
    fn test_load_factor_zero_disables_growth() {
        let mut map = ChainHashMap::with_load_factor(3, 0.0);
        for i in 0..50 {
            map.insert(i, i).unwrap();
        }
        assert_eq!(map.bucket_count(), 3);
        assert_eq!(map.len(), 50);
        for i in 0..50 {
            assert_eq!(map.get(&i), Some(&i));
        }
    }

    #[test]
    fn test_load_factor_bounded_after_inserts() {
        let mut map = ChainHashMap::new();
        for i in 0..1000 {
            map.insert(i, i).unwrap();
            assert!(map.load_factor() <= DEFAULT_LOAD_FACTOR + 1.0 / map.bucket_count() as f64);
        }
    }

    #[test]
    fn test_manual_resize_preserves_mappings() {
        let mut map = ChainHashMap::with_load_factor(8, 0.0);
        for i in 0..100 {
            map.insert(i, i * 2).unwrap();
        }
        map.resize(64).unwrap();
        assert_eq!(map.bucket_count(), 64);
        assert_eq!(map.len(), 100);
        for i in 0..100 {
            assert_eq!(map.get(&i), Some(&(i * 2)));
        }
        map.resize(4).unwrap(); // shrinking rethreads too
        for i in 0..100 {
            assert_eq!(map.get(&i), Some(&(i * 2)));
        }
    }

    #[test]
    fn test_chain_runs_stay_contiguous() {
        // Exercise the run invariant through interleaved insert/remove:
        // walking the chain must never see a bucket index twice after
        // leaving its run.
        let mut map = ChainHashMap::with_load_factor(4, 0.0);
        for i in 0..64 {
            map.insert(i, i).unwrap();
        }
        for i in (0..64).step_by(3) {
            map.remove(&i);
        }
        for i in 64..96 {
            map.insert(i, i).unwrap();
        }

        let mut seen = std::collections::HashSet::new();
        let mut current: Option<usize> = None;
        let mut node = unsafe { map.sentinel.as_ref().next };
        while node != map.sentinel {
            let bucket = unsafe { map.entry(node) }.bucket;
            if current != Some(bucket) {
                assert!(seen.insert(bucket), "bucket {} split into two runs", bucket);
                current = Some(bucket);
            }
            node = unsafe { node.as_ref().next };
        }
    }

    #[test]
    fn test_iteration_covers_all_entries() {
        let mut map = ChainHashMap::new();
        for i in 0..50 {
            map.insert(i, i * 3).unwrap();
        }
        let mut seen: Vec<i32> = map.keys().copied().collect();
        seen.sort_unstable();
        assert_eq!(seen, (0..50).collect::<Vec<_>>());
        assert_eq!(map.values().count(), 50);
    }

    #[test]
    fn test_contains_value() {
        let mut map = ChainHashMap::new();
        map.insert("a", 10).unwrap();
        map.insert("b", 20).unwrap();
        assert!(map.contains_value(&20));
        assert!(!map.contains_value(&30));
    }

    #[test]
    fn test_clear() {
        let mut map = ChainHashMap::new();
        for i in 0..10 {
            map.insert(i, i).unwrap();
        }
        let buckets = map.bucket_count();
        map.clear();
        assert!(map.is_empty());
        assert_eq!(map.bucket_count(), buckets);
        assert_eq!(map.get(&3), None);
        map.insert(3, 3).unwrap();
        assert_eq!(map.get(&3), Some(&3));
    }

    #[test]
    fn test_index_finds_present_key() {
        let mut map = ChainHashMap::new();
        map.insert("present", 1).unwrap();
        assert_eq!(map[&"present"], 1);
    }

    #[test]
    #[should_panic]
    fn test_index_panics_on_missing_key() {
        let map: ChainHashMap<&str, i32> = ChainHashMap::new();
        let _ = map[&"absent"];
    }

    #[test]
    fn test_get_mut() {
        let mut map = ChainHashMap::new();
        map.insert("k", 1).unwrap();
        *map.get_mut(&"k").unwrap() += 10;
        assert_eq!(map.get(&"k"), Some(&11));
    }

    #[test]
    fn test_pooled_nodes() {
        let mut map: ChainHashMap<u32, u32, ahash::RandomState, FixedNodePool<MapEntry<u32, u32>, 8>> =
            ChainHashMap::with_parts(
                16,
                0.0,
                ahash::RandomState::default(),
                FixedNodePool::new(),
            );
        for i in 0..12 {
            map.insert(i, i).unwrap(); // four entries spill to heap
        }
        assert_eq!(map.len(), 12);
        for i in 0..12 {
            assert_eq!(map.remove(&i), Some(i));
        }
        assert!(map.is_empty());
    }

    #[test]
    fn test_to_pairs() {
        let mut map = ChainHashMap::new();
        map.insert(1, "one").unwrap();
        map.insert(2, "two").unwrap();
        let pairs = map.to_pairs().unwrap();
        assert_eq!(pairs.len(), 2);
        assert!(pairs.iter().any(|p| p.first == 1 && p.second == "one"));
    }

    #[test]
    fn test_equality_ignores_iteration_order() {
        let mut a = ChainHashMap::with_buckets(4);
        let mut b = ChainHashMap::with_buckets(64);
        for i in 0..30 {
            a.insert(i, i).unwrap();
        }
        for i in (0..30).rev() {
            b.insert(i, i).unwrap();
        }
        assert!(a == b);
        b.insert(99, 99).unwrap();
        assert!(a != b);
    }

    #[test]
    fn test_drop_releases_entries() {
        use std::rc::Rc;
        let tracker = Rc::new(());
        let mut map = ChainHashMap::new();
        for i in 0..8 {
            map.insert(i, Rc::clone(&tracker)).unwrap();
        }
        assert_eq!(Rc::strong_count(&tracker), 9);
        drop(map);
        assert_eq!(Rc::strong_count(&tracker), 1);
    }

    #[test]
    fn test_string_keys() {
        let mut map = ChainHashMap::new();
        map.insert(String::from("alpha"), 1).unwrap();
        map.insert(String::from("beta"), 2).unwrap();
        assert_eq!(map.get(&String::from("alpha")), Some(&1));
        assert_eq!(map.remove(&String::from("beta")), Some(2));
    }
}
