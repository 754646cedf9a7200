use alloc::vec;
use alloc::vec::Vec;
use core::fmt::Debug;
use core::iter::FusedIterator;

/// Smallest bucket array ever allocated. Bucket counts are always a power of
/// two at least this large.
const MIN_BUCKETS: usize = 16;

/// Smallest entry arena ever allocated.
const MIN_SLOTS: usize = 10;

/// Ratio of live entries to buckets above which the buckets are doubled.
pub const DEFAULT_LOAD_FACTOR: f64 = 1.0;

/// Arena index of the next slot in a chain, or `None` at the end of it.
type Link = Option<usize>;

#[inline(always)]
fn buckets_for(capacity: usize) -> usize {
    capacity.max(MIN_BUCKETS).next_power_of_two()
}

#[cold]
#[track_caller]
fn capacity_overflow() -> ! {
    panic!("capacity overflow")
}

/// 1.5x amortized arena growth, never below `min_capacity`.
#[inline(always)]
fn grown_arena_len(len: usize, min_capacity: usize) -> usize {
    (len + (len >> 1)).max(min_capacity).max(MIN_SLOTS)
}

/// One element of the entry arena.
///
/// The `next` link has a different meaning depending on the variant: for an
/// occupied slot it is the next entry of the same bucket chain, for a vacant
/// slot below the append cursor it is the next slot of the free list. Vacant
/// slots at or above the append cursor have never been used and their link is
/// meaningless.
#[derive(Clone)]
enum Slot<V> {
    Occupied { hash: u64, value: V, next: Link },
    Vacant { next: Link },
}

impl<V> Slot<V> {
    #[inline(always)]
    fn vacant() -> Self {
        Slot::Vacant { next: None }
    }

    #[inline(always)]
    fn next(&self) -> Link {
        match self {
            Slot::Occupied { next, .. } | Slot::Vacant { next } => *next,
        }
    }
}

/// Statistics describing the shape of a hash table.
///
/// Available with the `stats` feature.
#[cfg(any(test, feature = "stats"))]
#[derive(Debug, Clone)]
pub struct DebugStats {
    /// Number of live entries.
    pub live: usize,
    /// Number of slots in the entry arena.
    pub arena_len: usize,
    /// First never-used arena slot.
    pub append_cursor: usize,
    /// Number of freed slots waiting on the free list.
    pub free_count: usize,
    /// Number of buckets.
    pub bucket_count: usize,
    /// Number of buckets with no chain.
    pub empty_buckets: usize,
    /// Length of the longest bucket chain.
    pub longest_chain: usize,
    /// Live entries per bucket.
    pub load: f64,
    /// Live entries per arena slot.
    pub arena_utilization: f64,
    /// Bytes held by the bucket array and the arena.
    pub total_bytes: usize,
}

#[cfg(any(test, feature = "stats"))]
impl DebugStats {
    /// Pretty-print the debug statistics.
    #[cfg(feature = "std")]
    pub fn print(&self) {
        println!("=== Hash Table Debug Statistics ===");
        println!(
            "Population: {} live in {} buckets ({:.2} load)",
            self.live, self.bucket_count, self.load
        );
        println!(
            "Arena: {}/{} slots used, {} on the free list ({:.2}% utilization)",
            self.append_cursor,
            self.arena_len,
            self.free_count,
            self.arena_utilization * 100.0
        );
        println!(
            "Chains: longest {}, {} empty buckets",
            self.longest_chain, self.empty_buckets
        );
        println!("Total Allocated: {} bytes", self.total_bytes);
    }
}

/// A chained hash table backed by an entry arena with an intrusive free list.
///
/// `HashTable<V>` stores values of type `V`. Like a raw table, it does not know
/// how to hash or compare its values: every operation takes the hash and an
/// equality predicate from the caller.
///
/// Buckets hold the arena index of the first entry of their chain. Removed
/// entries are not compacted; their slot goes on a free list that is consumed
/// before the arena is extended, so arena indices stay stable for the
/// lifetime of an entry.
///
/// ## Example
///
/// ```rust
/// # use core::hash::Hash;
/// # use core::hash::Hasher;
/// #
/// # use chain_hash::hash_table::HashTable;
/// # use siphasher::sip::SipHasher;
/// #
/// # #[derive(Debug, PartialEq)]
/// # struct Person {
/// #     id: u64,
/// #     name: String,
/// # }
/// #
/// # fn hash_id(id: u64) -> u64 {
/// #     let mut hasher = SipHasher::new();
/// #     id.hash(&mut hasher);
/// #     hasher.finish()
/// # }
///
/// let mut table = HashTable::with_capacity(100);
/// let hash = hash_id(123);
///
/// match table.entry(hash, |p: &Person| p.id == 123) {
///     chain_hash::hash_table::Entry::Vacant(entry) => {
///         entry.insert(Person {
///             id: 123,
///             name: "Alice".to_string(),
///         });
///     }
///     chain_hash::hash_table::Entry::Occupied(_) => {
///         println!("Person already exists");
///     }
/// }
/// ```
#[derive(Clone)]
pub struct HashTable<V> {
    buckets: Vec<Link>,
    slots: Vec<Slot<V>>,

    append_cursor: usize,
    free_head: Link,
    free_count: usize,

    load_factor: f64,
}

impl<V> Debug for HashTable<V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        use alloc::format;
        use alloc::string::String;

        let chains = self
            .buckets
            .iter()
            .enumerate()
            .filter(|(_, head)| head.is_some())
            .map(|(bucket, head)| {
                let mut chain = format!("{bucket:03}:");
                let mut cursor = *head;
                while let Some(index) = cursor {
                    chain.push_str(&format!(" {index:02}"));
                    cursor = self.slots[index].next();
                }
                chain
            })
            .collect::<Vec<String>>();

        let mut free = Vec::with_capacity(self.free_count);
        let mut cursor = self.free_head;
        while let Some(index) = cursor {
            free.push(index);
            cursor = self.slots[index].next();
        }

        f.debug_struct("HashTable")
            .field("chains", &chains)
            .field("free", &free)
            .field("populated", &self.len())
            .field("append_cursor", &self.append_cursor)
            .field("capacity", &self.slots.len())
            .finish()
    }
}

impl<V> Default for HashTable<V> {
    fn default() -> Self {
        Self::with_capacity(0)
    }
}

impl<V> HashTable<V> {
    /// Creates a new hash table with the specified capacity and the default
    /// load factor.
    ///
    /// The bucket array is sized to the next power of two that is at least 16
    /// and at least `capacity`; the entry arena holds at least `capacity`
    /// slots (and never fewer than 10).
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_hash::hash_table::HashTable;
    /// #
    /// let table: HashTable<String> = HashTable::with_capacity(100);
    /// assert!(table.capacity() >= 100);
    /// assert_eq!(table.bucket_count(), 128);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_load_factor(capacity, DEFAULT_LOAD_FACTOR)
    }

    /// Creates a new hash table with the specified capacity and load factor.
    ///
    /// The load factor is the largest ratio of live entries to buckets the
    /// table tolerates before doubling its buckets.
    ///
    /// # Panics
    ///
    /// Panics if `load_factor` is not a finite number greater than zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_hash::hash_table::HashTable;
    /// #
    /// let table: HashTable<u64> = HashTable::with_capacity_and_load_factor(0, 0.75);
    /// assert_eq!(table.load_factor(), 0.75);
    /// ```
    pub fn with_capacity_and_load_factor(capacity: usize, load_factor: f64) -> Self {
        assert!(
            load_factor.is_finite() && load_factor > 0.0,
            "load factor must be a positive finite number"
        );

        let mut slots = Vec::new();
        slots.resize_with(capacity.max(MIN_SLOTS), Slot::vacant);

        Self {
            buckets: vec![None; buckets_for(capacity)],
            slots,
            append_cursor: 0,
            free_head: None,
            free_count: 0,
            load_factor,
        }
    }

    /// Returns an iterator over all values in the table.
    ///
    /// Values are yielded in arena order: the order of insertion until an
    /// entry is removed, after which freed slots are reused by later inserts.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use core::hash::Hash;
    /// # use core::hash::Hasher;
    /// #
    /// # use chain_hash::hash_table::HashTable;
    /// # use siphasher::sip::SipHasher;
    /// #
    /// # fn hash_str(s: &str) -> u64 {
    /// #     let mut hasher = SipHasher::new();
    /// #     s.hash(&mut hasher);
    /// #     hasher.finish()
    /// # }
    /// #
    /// let mut table = HashTable::with_capacity(10);
    /// table
    ///     .entry(hash_str("key1"), |s: &String| s == "key1")
    ///     .or_insert("key1".to_string());
    /// table
    ///     .entry(hash_str("key2"), |s: &String| s == "key2")
    ///     .or_insert("key2".to_string());
    ///
    /// let values: Vec<&String> = table.iter().collect();
    /// assert_eq!(values, ["key1", "key2"]);
    /// ```
    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            slots: self.slots[..self.append_cursor].iter(),
            remaining: self.len(),
        }
    }

    /// Returns an iterator yielding mutable references to all values in the
    /// table, in arena order.
    ///
    /// Changing a value through this iterator must not change its hash or
    /// its equality with other values.
    pub fn iter_mut(&mut self) -> IterMut<'_, V> {
        let remaining = self.len();
        IterMut {
            slots: self.slots[..self.append_cursor].iter_mut(),
            remaining,
        }
    }

    /// Returns an iterator that removes and yields all values from the table.
    ///
    /// The table is empty as soon as `drain()` returns, even if the iterator
    /// is dropped or forgotten before it is exhausted. The arena keeps its
    /// length.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use core::hash::Hash;
    /// # use core::hash::Hasher;
    /// #
    /// # use chain_hash::hash_table::HashTable;
    /// # use siphasher::sip::SipHasher;
    /// #
    /// # fn hash_str(s: &str) -> u64 {
    /// #     let mut hasher = SipHasher::new();
    /// #     s.hash(&mut hasher);
    /// #     hasher.finish()
    /// # }
    /// #
    /// let mut table = HashTable::with_capacity(10);
    /// table
    ///     .entry(hash_str("key1"), |s: &String| s == "key1")
    ///     .or_insert("key1".to_string());
    ///
    /// let values: Vec<String> = table.drain().collect();
    /// assert!(table.is_empty());
    /// assert_eq!(values.len(), 1);
    /// ```
    pub fn drain(&mut self) -> Drain<'_, V> {
        let remaining = self.len();
        let end = self.append_cursor;

        // Unlink everything now; the drain only moves values out of
        // `slots[..end]`.
        self.buckets.fill(None);
        self.append_cursor = 0;
        self.free_head = None;
        self.free_count = 0;

        Drain {
            table: self,
            slot_index: 0,
            end,
            remaining,
        }
    }

    /// Returns `true` if the table contains no elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_hash::hash_table::HashTable;
    /// #
    /// let table: HashTable<i32> = HashTable::with_capacity(10);
    /// assert!(table.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of elements in the table.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use core::hash::Hash;
    /// # use core::hash::Hasher;
    /// #
    /// # use chain_hash::hash_table::HashTable;
    /// # use siphasher::sip::SipHasher;
    /// #
    /// # fn hash_u64(n: u64) -> u64 {
    /// #     let mut hasher = SipHasher::new();
    /// #     n.hash(&mut hasher);
    /// #     hasher.finish()
    /// # }
    /// #
    /// let mut table = HashTable::with_capacity(10);
    /// assert_eq!(table.len(), 0);
    ///
    /// table.entry(hash_u64(1), |&n: &u64| n == 1).or_insert(1);
    /// assert_eq!(table.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.append_cursor - self.free_count
    }

    /// Returns the length of the entry arena: the number of entries the table
    /// can hold before the arena has to grow.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the number of buckets. Always a power of two.
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Returns the load factor the table was created with.
    pub fn load_factor(&self) -> f64 {
        self.load_factor
    }

    /// Removes all elements from the table.
    ///
    /// The bucket array and the arena keep their sizes. All values are
    /// dropped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use core::hash::Hash;
    /// # use core::hash::Hasher;
    /// #
    /// # use chain_hash::hash_table::HashTable;
    /// # use siphasher::sip::SipHasher;
    /// #
    /// # fn hash_u64(n: u64) -> u64 {
    /// #     let mut hasher = SipHasher::new();
    /// #     n.hash(&mut hasher);
    /// #     hasher.finish()
    /// # }
    /// #
    /// let mut table = HashTable::with_capacity(10);
    /// table.entry(hash_u64(1), |&n: &u64| n == 1).or_insert(1);
    /// table.entry(hash_u64(2), |&n: &u64| n == 2).or_insert(2);
    /// assert_eq!(table.len(), 2);
    ///
    /// table.clear();
    /// assert!(table.is_empty());
    /// ```
    pub fn clear(&mut self) {
        self.buckets.fill(None);
        for slot in &mut self.slots[..self.append_cursor] {
            *slot = Slot::vacant();
        }
        self.append_cursor = 0;
        self.free_head = None;
        self.free_count = 0;
    }

    /// Reserves room for at least `additional` more elements.
    ///
    /// Both the arena and the bucket array are sized up front, so the next
    /// `additional` insertions neither grow the arena nor rehash.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_hash::hash_table::HashTable;
    /// #
    /// let mut table: HashTable<i32> = HashTable::with_capacity(0);
    /// table.reserve(50);
    /// assert!(table.capacity() >= 50);
    /// assert_eq!(table.bucket_count(), 64);
    /// ```
    pub fn reserve(&mut self, additional: usize) {
        let required = self.len().saturating_add(additional);

        let mut bucket_count = self.buckets.len();
        while required as f64 / bucket_count as f64 > self.load_factor {
            bucket_count = match bucket_count.checked_mul(2) {
                Some(doubled) => doubled,
                None => capacity_overflow(),
            };
        }
        if bucket_count != self.buckets.len() {
            self.rehash(bucket_count);
        }

        if required > self.slots.len() {
            self.resize_arena(required);
        }
    }

    /// Keeps only the values for which `f` returns `true`.
    ///
    /// Removed slots go on the free list.
    pub fn retain(&mut self, mut f: impl FnMut(&mut V) -> bool) {
        for bucket in 0..self.buckets.len() {
            let mut prev = None;
            let mut cursor = self.buckets[bucket];
            while let Some(index) = cursor {
                let (keep, next) = match &mut self.slots[index] {
                    Slot::Occupied { value, next, .. } => (f(value), *next),
                    Slot::Vacant { .. } => unreachable!("vacant slot linked into a bucket chain"),
                };
                if keep {
                    prev = Some(index);
                } else {
                    self.detach(index, prev);
                }
                cursor = next;
            }
        }
    }

    /// Removes and returns a value from the table.
    ///
    /// The value is identified by its hash and an equality predicate. The
    /// freed slot is spliced out of its bucket chain and pushed on the free
    /// list. Returns `None` if no value matches.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use core::hash::Hash;
    /// # use core::hash::Hasher;
    /// #
    /// # use chain_hash::hash_table::HashTable;
    /// # use siphasher::sip::SipHasher;
    /// #
    /// # fn hash_u64(n: u64) -> u64 {
    /// #     let mut hasher = SipHasher::new();
    /// #     n.hash(&mut hasher);
    /// #     hasher.finish()
    /// # }
    /// #
    /// let mut table = HashTable::with_capacity(10);
    /// table.entry(hash_u64(42), |&n: &u64| n == 42).or_insert(42);
    ///
    /// let removed = table.remove(hash_u64(42), |&n| n == 42);
    /// assert_eq!(removed, Some(42));
    /// assert!(table.is_empty());
    ///
    /// let not_found = table.remove(hash_u64(99), |&n| n == 99);
    /// assert_eq!(not_found, None);
    /// ```
    pub fn remove(&mut self, hash: u64, eq: impl Fn(&V) -> bool) -> Option<V> {
        let (index, prev) = self.search(hash, eq)?;
        Some(self.detach(index, prev))
    }

    /// Gets an entry for the given hash and equality predicate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use core::hash::Hash;
    /// # use core::hash::Hasher;
    /// #
    /// # use chain_hash::hash_table::HashTable;
    /// # use siphasher::sip::SipHasher;
    /// #
    /// # fn hash_str(s: &str) -> u64 {
    /// #     let mut hasher = SipHasher::new();
    /// #     s.hash(&mut hasher);
    /// #     hasher.finish()
    /// # }
    /// #
    /// let mut table = HashTable::with_capacity(10);
    /// let hash = hash_str("hello");
    ///
    /// match table.entry(hash, |s: &String| s == "hello") {
    ///     chain_hash::hash_table::Entry::Vacant(entry) => {
    ///         entry.insert("hello".to_string());
    ///     }
    ///     chain_hash::hash_table::Entry::Occupied(mut entry) => {
    ///         *entry.get_mut() = "updated".to_string();
    ///     }
    /// }
    ///
    /// table
    ///     .entry(hash, |s: &String| s == "hello")
    ///     .or_insert("hello".to_string());
    /// assert_eq!(table.len(), 1);
    /// ```
    pub fn entry(&mut self, hash: u64, eq: impl Fn(&V) -> bool) -> Entry<'_, V> {
        match self.search(hash, eq) {
            Some((index, prev)) => Entry::Occupied(OccupiedEntry {
                table: self,
                index,
                prev,
            }),
            None => Entry::Vacant(VacantEntry { table: self, hash }),
        }
    }

    /// Finds a value by hash and equality predicate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use core::hash::Hash;
    /// # use core::hash::Hasher;
    /// #
    /// # use chain_hash::hash_table::HashTable;
    /// # use siphasher::sip::SipHasher;
    /// #
    /// # fn hash_u64(n: u64) -> u64 {
    /// #     let mut hasher = SipHasher::new();
    /// #     n.hash(&mut hasher);
    /// #     hasher.finish()
    /// # }
    /// #
    /// let mut table = HashTable::with_capacity(10);
    /// table.entry(hash_u64(7), |&n: &u64| n == 7).or_insert(7);
    ///
    /// assert_eq!(table.find(hash_u64(7), |&n| n == 7), Some(&7));
    /// assert_eq!(table.find(hash_u64(8), |&n| n == 8), None);
    /// ```
    pub fn find(&self, hash: u64, eq: impl Fn(&V) -> bool) -> Option<&V> {
        let (index, _) = self.search(hash, eq)?;
        match &self.slots[index] {
            Slot::Occupied { value, .. } => Some(value),
            Slot::Vacant { .. } => None,
        }
    }

    /// Finds a value by hash and equality predicate, returning a mutable
    /// reference.
    pub fn find_mut(&mut self, hash: u64, eq: impl Fn(&V) -> bool) -> Option<&mut V> {
        let (index, _) = self.search(hash, eq)?;
        match &mut self.slots[index] {
            Slot::Occupied { value, .. } => Some(value),
            Slot::Vacant { .. } => None,
        }
    }

    #[inline(always)]
    fn bucket_of(&self, hash: u64) -> usize {
        // Bucket counts are powers of two, so masking is `hash mod count`.
        (hash & (self.buckets.len() as u64 - 1)) as usize
    }

    /// Walks the chain for `hash`, returning the matching slot and the slot
    /// linking to it (`None` when the match is the bucket head).
    fn search(&self, hash: u64, eq: impl Fn(&V) -> bool) -> Option<(usize, Link)> {
        let mut prev = None;
        let mut cursor = self.buckets[self.bucket_of(hash)];
        while let Some(index) = cursor {
            match &self.slots[index] {
                Slot::Occupied {
                    hash: stored,
                    value,
                    next,
                } => {
                    if *stored == hash && eq(value) {
                        return Some((index, prev));
                    }
                    prev = Some(index);
                    cursor = *next;
                }
                Slot::Vacant { .. } => unreachable!("vacant slot linked into a bucket chain"),
            }
        }
        None
    }

    /// Splices the occupied slot at `index` out of its chain and pushes it on
    /// the free list. `prev` is the slot linking to it, if it is not the
    /// bucket head.
    fn detach(&mut self, index: usize, prev: Link) -> V {
        let freed = Slot::Vacant {
            next: self.free_head,
        };
        let Slot::Occupied { hash, value, next } = core::mem::replace(&mut self.slots[index], freed)
        else {
            unreachable!("detaching a vacant slot")
        };

        match prev {
            None => {
                let bucket = self.bucket_of(hash);
                self.buckets[bucket] = next;
            }
            Some(prev) => {
                if let Slot::Occupied { next: link, .. } = &mut self.slots[prev] {
                    *link = next;
                }
            }
        }

        self.free_head = Some(index);
        self.free_count += 1;
        value
    }

    /// Returns the index of a slot ready to be written: the head of the free
    /// list if there is one, otherwise the append cursor after growing.
    fn acquire_slot(&mut self) -> usize {
        if let Some(index) = self.free_head {
            self.free_head = self.slots[index].next();
            self.free_count -= 1;
            return index;
        }

        self.grow(self.len() + 1);
        let index = self.append_cursor;
        self.append_cursor += 1;
        index
    }

    /// Rehashes when `min_capacity` live entries would exceed the load factor
    /// and extends the arena when it cannot hold `min_capacity` entries. The
    /// two checks are independent.
    fn grow(&mut self, min_capacity: usize) {
        if min_capacity as f64 / self.buckets.len() as f64 > self.load_factor {
            self.rehash(self.buckets.len() * 2);
        }

        if min_capacity > self.slots.len() {
            let new_len = grown_arena_len(self.slots.len(), min_capacity);
            self.resize_arena(new_len);
        }
    }

    #[cold]
    fn resize_arena(&mut self, new_len: usize) {
        #[cfg(feature = "tracing")]
        tracing::trace!(
            from = self.slots.len(),
            to = new_len,
            live = self.len(),
            "growing entry arena"
        );

        // Existing slots keep their indices; chains reference them by index.
        self.slots.resize_with(new_len, Slot::vacant);
    }

    /// Re-threads every occupied slot into a fresh bucket array of
    /// `bucket_count` buckets. Slots do not move.
    #[cold]
    fn rehash(&mut self, bucket_count: usize) {
        debug_assert!(bucket_count.is_power_of_two());

        #[cfg(feature = "tracing")]
        tracing::trace!(
            from = self.buckets.len(),
            to = bucket_count,
            live = self.len(),
            "rehashing buckets"
        );

        let mask = bucket_count as u64 - 1;
        let mut buckets = vec![None; bucket_count];
        for (index, slot) in self.slots[..self.append_cursor].iter_mut().enumerate() {
            if let Slot::Occupied { hash, next, .. } = slot {
                let bucket = (*hash & mask) as usize;
                *next = buckets[bucket];
                buckets[bucket] = Some(index);
            }
        }
        self.buckets = buckets;
    }

    /// Computes a histogram of bucket chain lengths.
    ///
    /// Index `i` of the result holds the number of buckets whose chain has
    /// exactly `i` entries. The result has `longest_chain + 1` bins.
    ///
    /// Available with the `stats` feature.
    #[cfg(any(test, feature = "stats"))]
    pub fn chain_histogram(&self) -> Vec<usize> {
        let mut hist = vec![0usize; 1];
        for head in &self.buckets {
            let mut length = 0;
            let mut cursor = *head;
            while let Some(index) = cursor {
                length += 1;
                cursor = self.slots[index].next();
            }
            if hist.len() <= length {
                hist.resize(length + 1, 0);
            }
            hist[length] += 1;
        }
        hist
    }

    /// Returns statistics about bucket and arena utilization.
    ///
    /// Available with the `stats` feature.
    #[cfg(any(test, feature = "stats"))]
    pub fn debug_stats(&self) -> DebugStats {
        let hist = self.chain_histogram();
        let live = self.len();
        DebugStats {
            live,
            arena_len: self.slots.len(),
            append_cursor: self.append_cursor,
            free_count: self.free_count,
            bucket_count: self.buckets.len(),
            empty_buckets: hist[0],
            longest_chain: hist.len() - 1,
            load: live as f64 / self.buckets.len() as f64,
            arena_utilization: live as f64 / self.slots.len() as f64,
            total_bytes: self.buckets.len() * core::mem::size_of::<Link>()
                + self.slots.len() * core::mem::size_of::<Slot<V>>(),
        }
    }

    /// Pretty-prints the chain-length histogram horizontally using stdout.
    ///
    /// Available with the `stats` and `std` features.
    #[cfg(all(any(test, feature = "stats"), feature = "std"))]
    pub fn print_chain_histogram(&self) {
        let hist = self.chain_histogram();
        let max = *hist.iter().max().unwrap_or(&0);
        if max == 0 {
            println!("chain histogram: empty");
            return;
        }

        let max_bar = 60usize;
        let total_units = max_bar * 8;
        println!(
            "chain histogram ({} entries, {} buckets):",
            self.len(),
            self.buckets.len()
        );

        let make_bar = |count: usize| -> alloc::string::String {
            if count == 0 {
                return alloc::string::String::new();
            }
            let units = ((count as u128 * total_units as u128).div_ceil(max as u128)) as usize;
            let mut bar = "█".repeat(units / 8);
            let partial = ['▏', '▎', '▍', '▌', '▋', '▊', '▉'];
            if units % 8 > 0 {
                bar.push(partial[units % 8 - 1]);
            }
            bar
        };

        for (length, &count) in hist.iter().enumerate() {
            println!("{:>2} | {} ({})", length, make_bar(count), count);
        }
    }
}

/// A view into a single entry in the hash table, which may be vacant or
/// occupied.
///
/// This enum is constructed from the [`entry`] method on [`HashTable`].
///
/// [`entry`]: HashTable::entry
///
/// # Examples
///
/// ```rust
/// # use core::hash::Hash;
/// # use core::hash::Hasher;
/// #
/// # use chain_hash::hash_table::Entry;
/// # use chain_hash::hash_table::HashTable;
/// # use siphasher::sip::SipHasher;
/// #
/// # fn hash_str(s: &str) -> u64 {
/// #     let mut hasher = SipHasher::new();
/// #     s.hash(&mut hasher);
/// #     hasher.finish()
/// # }
///
/// let mut table = HashTable::with_capacity(10);
/// let hash = hash_str("key");
///
/// match table.entry(hash, |s: &String| s == "key") {
///     Entry::Vacant(entry) => {
///         entry.insert("value".to_string());
///     }
///     Entry::Occupied(entry) => {
///         println!("Key already exists with value: {}", entry.get());
///     }
/// }
/// ```
pub enum Entry<'a, V> {
    /// A vacant entry - no value matched
    Vacant(VacantEntry<'a, V>),
    /// An occupied entry - a value matched
    Occupied(OccupiedEntry<'a, V>),
}

impl<'a, V> Entry<'a, V> {
    /// Inserts `default` if the entry is vacant and returns a mutable
    /// reference to the value in the entry.
    pub fn or_insert(self, default: V) -> &'a mut V {
        match self {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(default),
        }
    }

    /// Inserts the result of `default` if the entry is vacant and returns a
    /// mutable reference to the value in the entry.
    pub fn or_insert_with(self, default: impl FnOnce() -> V) -> &'a mut V {
        match self {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(default()),
        }
    }

    /// Modifies an occupied entry in place. Returns `None` for a vacant
    /// entry.
    pub fn and_modify(self, f: impl FnOnce(&mut V)) -> Option<&'a mut V> {
        match self {
            Entry::Occupied(entry) => {
                let value = entry.into_mut();
                f(&mut *value);
                Some(value)
            }
            Entry::Vacant(_) => None,
        }
    }

    /// Inserts `V::default()` if the entry is vacant and returns a mutable
    /// reference to the value in the entry.
    pub fn or_default(self) -> &'a mut V
    where
        V: Default,
    {
        self.or_insert_with(Default::default)
    }
}

/// A view into a vacant entry in the hash table.
///
/// [`entry`]: HashTable::entry
pub struct VacantEntry<'a, V> {
    table: &'a mut HashTable<V>,
    hash: u64,
}

impl<'a, V> VacantEntry<'a, V> {
    /// Inserts a value into the vacant entry and returns a mutable reference
    /// to it.
    ///
    /// The slot comes from the free list when one is available; otherwise
    /// the arena is extended, which may grow the arena and rehash the
    /// buckets. The new entry is prepended to its bucket chain.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use core::hash::Hash;
    /// # use core::hash::Hasher;
    /// # use siphasher::sip::SipHasher;
    /// #
    /// # use chain_hash::hash_table::Entry;
    /// # use chain_hash::hash_table::HashTable;
    /// #
    /// # fn hash_str(s: &str) -> u64 {
    /// #     let mut hasher = SipHasher::new();
    /// #     s.hash(&mut hasher);
    /// #     hasher.finish()
    /// # }
    /// #
    /// let mut table = HashTable::with_capacity(10);
    /// let hash = hash_str("key");
    ///
    /// match table.entry(hash, |s: &String| s == "key") {
    ///     Entry::Vacant(entry) => {
    ///         let value_ref = entry.insert("value".to_string());
    ///         assert_eq!(value_ref, "value");
    ///     }
    ///     Entry::Occupied(_) => unreachable!("Entry should be vacant"),
    /// }
    /// ```
    pub fn insert(self, value: V) -> &'a mut V {
        let table = self.table;
        let index = table.acquire_slot();

        // Acquiring may have rehashed, so the bucket is computed afterwards.
        let bucket = table.bucket_of(self.hash);
        table.slots[index] = Slot::Occupied {
            hash: self.hash,
            value,
            next: table.buckets[bucket],
        };
        table.buckets[bucket] = Some(index);

        match &mut table.slots[index] {
            Slot::Occupied { value, .. } => value,
            Slot::Vacant { .. } => unreachable!("slot was just occupied"),
        }
    }
}

/// A view into an occupied entry in the hash table.
///
/// [`entry`]: HashTable::entry
pub struct OccupiedEntry<'a, V> {
    table: &'a mut HashTable<V>,
    index: usize,
    prev: Link,
}

impl<'a, V> OccupiedEntry<'a, V> {
    /// Gets a reference to the value in the entry.
    pub fn get(&self) -> &V {
        match &self.table.slots[self.index] {
            Slot::Occupied { value, .. } => value,
            Slot::Vacant { .. } => unreachable!("occupied entry points at a vacant slot"),
        }
    }

    /// Gets a mutable reference to the value in the entry.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use core::hash::Hash;
    /// # use core::hash::Hasher;
    /// # use siphasher::sip::SipHasher;
    /// #
    /// # use chain_hash::hash_table::Entry;
    /// # use chain_hash::hash_table::HashTable;
    /// #
    /// # fn hash_str(s: &str) -> u64 {
    /// #     let mut hasher = SipHasher::new();
    /// #     s.hash(&mut hasher);
    /// #     hasher.finish()
    /// # }
    /// #
    /// let mut table = HashTable::with_capacity(10);
    /// let hash = hash_str("key");
    /// table
    ///     .entry(hash, |s: &String| s == "key")
    ///     .or_insert("key".to_string());
    ///
    /// match table.entry(hash, |s: &String| s == "key") {
    ///     Entry::Occupied(mut entry) => {
    ///         *entry.get_mut() = "modified".to_string();
    ///     }
    ///     Entry::Vacant(_) => unreachable!(),
    /// }
    /// ```
    pub fn get_mut(&mut self) -> &mut V {
        match &mut self.table.slots[self.index] {
            Slot::Occupied { value, .. } => value,
            Slot::Vacant { .. } => unreachable!("occupied entry points at a vacant slot"),
        }
    }

    /// Converts the entry into a mutable reference to the value with the
    /// lifetime of the entry.
    pub fn into_mut(self) -> &'a mut V {
        match &mut self.table.slots[self.index] {
            Slot::Occupied { value, .. } => value,
            Slot::Vacant { .. } => unreachable!("occupied entry points at a vacant slot"),
        }
    }

    /// Removes the entry from the table and returns the value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use core::hash::Hash;
    /// # use core::hash::Hasher;
    /// # use siphasher::sip::SipHasher;
    /// #
    /// # use chain_hash::hash_table::Entry;
    /// # use chain_hash::hash_table::HashTable;
    /// #
    /// # fn hash_str(s: &str) -> u64 {
    /// #     let mut hasher = SipHasher::new();
    /// #     s.hash(&mut hasher);
    /// #     hasher.finish()
    /// # }
    /// #
    /// let mut table = HashTable::with_capacity(10);
    /// let hash = hash_str("key");
    /// table
    ///     .entry(hash, |s: &String| s == "key")
    ///     .or_insert("key".to_string());
    ///
    /// let removed_value = match table.entry(hash, |s: &String| s == "key") {
    ///     Entry::Occupied(entry) => entry.remove(),
    ///     Entry::Vacant(_) => unreachable!(),
    /// };
    /// assert_eq!(removed_value, "key");
    /// assert!(table.is_empty());
    /// ```
    pub fn remove(self) -> V {
        self.table.detach(self.index, self.prev)
    }
}

/// An iterator over the values in a [`HashTable`], in arena order.
///
/// This struct is created by the [`iter`] method on [`HashTable`]. It scans
/// every slot below the append cursor, so its cost is proportional to the
/// number of slots ever used rather than the number of live values.
///
/// [`iter`]: HashTable::iter
pub struct Iter<'a, V> {
    slots: core::slice::Iter<'a, Slot<V>>,
    remaining: usize,
}

impl<V> Clone for Iter<'_, V> {
    fn clone(&self) -> Self {
        Iter {
            slots: self.slots.clone(),
            remaining: self.remaining,
        }
    }
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        for slot in self.slots.by_ref() {
            if let Slot::Occupied { value, .. } = slot {
                self.remaining -= 1;
                return Some(value);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V> ExactSizeIterator for Iter<'_, V> {}
impl<V> FusedIterator for Iter<'_, V> {}

/// A mutable iterator over the values in a [`HashTable`], in arena order.
///
/// This struct is created by the [`iter_mut`] method on [`HashTable`].
///
/// [`iter_mut`]: HashTable::iter_mut
pub struct IterMut<'a, V> {
    slots: core::slice::IterMut<'a, Slot<V>>,
    remaining: usize,
}

impl<'a, V> Iterator for IterMut<'a, V> {
    type Item = &'a mut V;

    fn next(&mut self) -> Option<Self::Item> {
        for slot in self.slots.by_ref() {
            if let Slot::Occupied { value, .. } = slot {
                self.remaining -= 1;
                return Some(value);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V> ExactSizeIterator for IterMut<'_, V> {}
impl<V> FusedIterator for IterMut<'_, V> {}

/// A draining iterator over the values in a [`HashTable`].
///
/// This struct is created by the [`drain`] method on [`HashTable`]. It yields
/// owned values in arena order and leaves the table empty when dropped.
///
/// [`drain`]: HashTable::drain
pub struct Drain<'a, V> {
    table: &'a mut HashTable<V>,
    slot_index: usize,
    end: usize,
    remaining: usize,
}

impl<V> Drop for Drain<'_, V> {
    fn drop(&mut self) {
        for _ in &mut *self {}
    }
}

impl<V> Iterator for Drain<'_, V> {
    type Item = V;

    fn next(&mut self) -> Option<Self::Item> {
        while self.slot_index < self.end {
            let slot = core::mem::replace(
                &mut self.table.slots[self.slot_index],
                Slot::vacant(),
            );
            self.slot_index += 1;
            if let Slot::Occupied { value, .. } = slot {
                self.remaining -= 1;
                return Some(value);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V> ExactSizeIterator for Drain<'_, V> {}
impl<V> FusedIterator for Drain<'_, V> {}

/// An owning iterator over the values of a [`HashTable`], in arena order.
pub struct IntoIter<V> {
    slots: alloc::vec::IntoIter<Slot<V>>,
    remaining: usize,
}

impl<V> Iterator for IntoIter<V> {
    type Item = V;

    fn next(&mut self) -> Option<Self::Item> {
        for slot in self.slots.by_ref() {
            if let Slot::Occupied { value, .. } = slot {
                self.remaining -= 1;
                return Some(value);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V> ExactSizeIterator for IntoIter<V> {}
impl<V> FusedIterator for IntoIter<V> {}

impl<V> IntoIterator for HashTable<V> {
    type IntoIter = IntoIter<V>;
    type Item = V;

    fn into_iter(mut self) -> Self::IntoIter {
        let remaining = self.len();
        self.slots.truncate(self.append_cursor);
        IntoIter {
            slots: self.slots.into_iter(),
            remaining,
        }
    }
}

impl<'a, V> IntoIterator for &'a HashTable<V> {
    type IntoIter = Iter<'a, V>;
    type Item = &'a V;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
