//! `MphMap`: the map facade composing oracle, bounds scan, and slot
//! array.
//!
//! Construction builds the oracle once, scans the true index range, then
//! allocates and clears the slot array. Every subsequent operation asks
//! the oracle for the key's index and touches the slot at that index.

use crate::bounds::IndexBounds;
use crate::error::ConstructionError;
use crate::membership::DebugMembership;
use crate::oracle::{first_duplicate, BbhashOracle, BuildOptions, PerfectHash};
use crate::slots::SlotArray;
use core::fmt::Debug;
use core::hash::Hash;
use log::debug;

/// Panic message for the unreachable mis-sizing case. The bounds scan
/// covers every key's index at construction, so a miss here means the
/// oracle returned an index it never returned during the scan.
const MIS_SIZED: &str = "slot array mis-sized: oracle index not covered by the bounds scan";

/// A map over a fixed key set, indexed by a perfect hash.
///
/// The key set is fixed at construction and the oracle over it is
/// immutable; adding or removing a key means rebuilding the whole map.
/// Values live in a dense slot array with `None` as the "unset" sentinel,
/// so `V` itself never needs a reserved value.
///
/// # Foreign keys
///
/// Every lookup-style operation requires that `key` was part of the
/// constructed set. For any other key the resolved index is unspecified
/// (inherited from the perfect-hash scheme): in release builds the
/// operation silently touches some arbitrary in-range slot or panics on
/// an out-of-range one, and in debug builds the membership guard panics
/// immediately. There is no membership query on the map itself; callers
/// own that knowledge.
pub struct MphMap<K, V, O = BbhashOracle<K>> {
    oracle: O,
    slots: SlotArray<V>,
    key_count: usize,
    membership: DebugMembership<K>,
}

impl<K, V> MphMap<K, V>
where
    K: Hash + Eq + Clone + Debug + Send + Sync,
{
    /// Build a map over `keys` with the default oracle and options.
    ///
    /// Fails with [`ConstructionError::EmptyKeySet`] on an empty slice
    /// and [`ConstructionError::DuplicateKey`] on repeated keys.
    pub fn new(keys: &[K]) -> Result<Self, ConstructionError> {
        Self::with_options(keys, &BuildOptions::default())
    }

    /// Build with explicit construction options (parallelism hint and
    /// load factor). The options only affect construction; the resulting
    /// index assignment is the same for every setting.
    pub fn with_options(keys: &[K], options: &BuildOptions) -> Result<Self, ConstructionError> {
        let oracle = BbhashOracle::build(keys, options)?;
        Self::compose(oracle, keys)
    }
}

impl<K, V, O> MphMap<K, V, O>
where
    K: Hash + Eq + Clone,
    O: PerfectHash<K>,
{
    /// Compose a map over a caller-built oracle.
    ///
    /// `keys` must be exactly the set the oracle was built over; the
    /// bounds scan and the debug membership guard are both derived from
    /// it. Duplicate and empty key slices are rejected here as well.
    pub fn from_oracle(oracle: O, keys: &[K]) -> Result<Self, ConstructionError> {
        if let Some(index) = first_duplicate(keys) {
            return Err(ConstructionError::DuplicateKey { index });
        }
        Self::compose(oracle, keys)
    }

    // Callers have already screened duplicates: the default path inside
    // `BbhashOracle::build` (before the BBHash builder runs), the custom
    // path in `from_oracle`.
    fn compose(oracle: O, keys: &[K]) -> Result<Self, ConstructionError> {
        let bounds =
            IndexBounds::scan(&oracle, keys).ok_or(ConstructionError::EmptyKeySet)?;
        debug!(
            "index bounds over {} keys: min={} max={}; allocating {} slots",
            keys.len(),
            bounds.min,
            bounds.max,
            bounds.slot_len()
        );
        Ok(Self {
            oracle,
            slots: SlotArray::new(bounds.slot_len()),
            key_count: keys.len(),
            membership: DebugMembership::new(keys),
        })
    }

    fn index_for(&self, key: &K) -> usize {
        self.membership.check(key);
        self.oracle.index(key)
    }

    /// The index the oracle assigns to `key`. Stable for the lifetime of
    /// the map; unaffected by `clear` and `erase`.
    pub fn index_of(&self, key: &K) -> usize {
        self.index_for(key)
    }

    /// Value stored for `key`, or `None` if the slot is unset.
    pub fn get(&self, key: &K) -> Option<&V> {
        let index = self.index_for(key);
        self.slots.slot(index).expect(MIS_SIZED).as_ref()
    }

    /// Mutable value stored for `key`, or `None` if the slot is unset.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let index = self.index_for(key);
        self.slots.slot_mut(index).expect(MIS_SIZED).as_mut()
    }

    /// Mutable handle to `key`'s slot. Callers may read, overwrite, or
    /// reset it; writing `None` is equivalent to [`erase`](Self::erase).
    pub fn slot_mut(&mut self, key: &K) -> &mut Option<V> {
        let index = self.index_for(key);
        self.slots.slot_mut(index).expect(MIS_SIZED)
    }

    /// Store `value` for `key`, returning the previous value if the slot
    /// was set.
    pub fn insert(&mut self, key: &K, value: V) -> Option<V> {
        let index = self.index_for(key);
        self.slots.set(index, value).expect(MIS_SIZED)
    }

    /// Reset `key`'s slot to the sentinel, returning what it held. The
    /// oracle mapping is untouched: the key still resolves to the same
    /// index, and an erased slot is indistinguishable from one never
    /// written.
    pub fn erase(&mut self, key: &K) -> Option<V> {
        let index = self.index_for(key);
        self.slots.take(index).expect(MIS_SIZED)
    }

    /// Reset every slot to the sentinel. Keys remain valid for lookup and
    /// resolve to the same indices as before.
    pub fn clear(&mut self) {
        self.slots.clear();
    }

    /// Number of slots currently set.
    ///
    /// Computed by a scan over the slot array: the raw handle from
    /// [`slot_mut`](Self::slot_mut) can flip a slot's occupancy without
    /// the facade observing it, so no incremental counter is kept.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// Whether no slot is currently set.
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Number of keys the map was built over.
    pub fn key_count(&self) -> usize {
        self.key_count
    }

    /// Length of the backing slot array. At least
    /// [`key_count`](Self::key_count); equal to it when the oracle is
    /// minimal.
    pub fn slot_len(&self) -> usize {
        self.slots.len()
    }

    /// Iterate over the values currently set, in slot order.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.slots.iter().filter_map(Option::as_ref)
    }

    /// Iterate mutably over the values currently set, in slot order.
    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut V> {
        self.slots.iter_mut().filter_map(Option::as_mut)
    }
}
