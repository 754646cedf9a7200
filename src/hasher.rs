//! Key hashing for [`HashMap`](crate::HashMap) and [`HashSet`](crate::HashSet).
//!
//! The maps hash keys through [`KeyHasher`], which every
//! [`BuildHasher`] implements. A plain function can be injected with
//! [`HashFn`].

use core::hash::BuildHasher;
use core::hash::Hash;
use core::hash::Hasher;

/// Computes the 64-bit hash of a key.
pub trait KeyHasher<K: ?Sized> {
    /// Hashes `key`. Equal keys must produce equal hashes.
    fn hash_key(&self, key: &K) -> u64;
}

impl<K: Hash + ?Sized, S: BuildHasher> KeyHasher<K> for S {
    #[inline]
    fn hash_key(&self, key: &K) -> u64 {
        self.hash_one(key)
    }
}

/// Adapts a function `Fn(&K) -> u64` into a [`KeyHasher`].
///
/// # Examples
///
/// ```rust
/// use chain_hash::HashMap;
/// use chain_hash::hasher::HashFn;
///
/// let mut map: HashMap<u32, &str, _> = HashMap::with_hasher(HashFn(|k: &u32| *k as u64));
/// map.put(3, "three");
/// assert_eq!(map.get(&3), Some(&"three"));
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct HashFn<F>(pub F);

impl<K: ?Sized, F: Fn(&K) -> u64> KeyHasher<K> for HashFn<F> {
    #[inline]
    fn hash_key(&self, key: &K) -> u64 {
        (self.0)(key)
    }
}

cfg_if::cfg_if! {
    if #[cfg(feature = "foldhash")] {
        /// The default hasher: foldhash with a per-process random seed.
        pub type DefaultHashBuilder = foldhash::fast::RandomState;
    } else if #[cfg(feature = "std")] {
        /// The default hasher: the standard library's randomly seeded SipHash.
        pub type DefaultHashBuilder = std::collections::hash_map::RandomState;
    } else {
        /// The default hasher: a fixed-seed multiply-rotate hasher.
        pub type DefaultHashBuilder = FixedState;
    }
}

const MULTIPLIER: u64 = 0x9E37_79B9_7F4A_7C15;

/// A deterministic [`BuildHasher`] seeded with a fixed value.
///
/// Used as the default when neither `foldhash` nor `std` is enabled. It is
/// not resistant to hash flooding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedState {
    seed: u64,
}

impl FixedState {
    /// Creates a builder with the given seed.
    pub const fn with_seed(seed: u64) -> Self {
        Self { seed }
    }
}

impl Default for FixedState {
    fn default() -> Self {
        Self::with_seed(0x243F_6A88_85A3_08D3)
    }
}

impl BuildHasher for FixedState {
    type Hasher = FixedHasher;

    fn build_hasher(&self) -> Self::Hasher {
        FixedHasher { state: self.seed }
    }
}

/// The [`Hasher`] built by [`FixedState`].
#[derive(Clone, Debug)]
pub struct FixedHasher {
    state: u64,
}

impl FixedHasher {
    #[inline(always)]
    fn mix(&mut self, word: u64) {
        self.state = (self.state.rotate_left(5) ^ word).wrapping_mul(MULTIPLIER);
    }
}

impl Hasher for FixedHasher {
    fn write(&mut self, bytes: &[u8]) {
        let mut chunks = bytes.chunks_exact(8);
        for chunk in &mut chunks {
            let mut word = [0u8; 8];
            word.copy_from_slice(chunk);
            self.mix(u64::from_le_bytes(word));
        }

        let tail = chunks.remainder();
        if !tail.is_empty() {
            let mut word = [0u8; 8];
            word[..tail.len()].copy_from_slice(tail);
            self.mix(u64::from_le_bytes(word) ^ ((tail.len() as u64) << 56));
        }
    }

    fn write_u64(&mut self, i: u64) {
        self.mix(i);
    }

    fn write_usize(&mut self, i: usize) {
        self.mix(i as u64);
    }

    fn finish(&self) -> u64 {
        // Bucket selection masks the low bits, so the high bits are folded
        // down.
        let mut h = self.state;
        h ^= h >> 33;
        h = h.wrapping_mul(0xFF51_AFD7_ED55_8CCD);
        h ^= h >> 33;
        h = h.wrapping_mul(0xC4CE_B9FE_1A85_EC53);
        h ^ (h >> 33)
    }
}

#[cfg(test)]
mod tests {
    use alloc::collections::BTreeSet;

    use super::*;

    #[test]
    fn build_hasher_is_a_key_hasher() {
        let state = FixedState::default();
        assert_eq!(state.hash_key(&42u64), state.hash_key(&42u64));
        assert_eq!(state.hash_key("abc"), state.hash_key("abc"));
        assert_ne!(state.hash_key("abc"), state.hash_key("abd"));
    }

    #[test]
    fn hash_fn_forwards_to_the_closure() {
        let hasher = HashFn(|k: &str| k.len() as u64);
        assert_eq!(hasher.hash_key("four"), 4);
    }

    #[test]
    fn fixed_state_spreads_low_bits() {
        let state = FixedState::default();
        let buckets: BTreeSet<u64> = (0..64u64).map(|k| state.hash_key(&k) & 15).collect();
        assert_eq!(buckets.len(), 16);
    }

    #[test]
    fn seeds_change_hashes() {
        let a = FixedState::with_seed(1);
        let b = FixedState::with_seed(2);
        assert_ne!(a.hash_key(&7u32), b.hash_key(&7u32));
    }
}
