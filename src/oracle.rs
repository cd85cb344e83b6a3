//! Perfect-hash oracle seam and the default BBHash-backed implementation.
//!
//! The map composes over any [`PerfectHash`] implementation; the crate
//! ships [`BbhashOracle`], a thin adapter over the `boomphf` crate
//! (BBHash). The oracle's contract for keys outside the constructed set
//! is deliberately unspecified, matching the underlying scheme: a foreign
//! key resolves to an arbitrary index. Callers uphold the in-set
//! precondition; the map adds a debug-only membership guard on top.

use crate::error::ConstructionError;
use core::fmt::Debug;
use core::hash::Hash;
use hashbrown::HashSet;
use log::debug;

/// A function mapping each key of a fixed set to a unique index.
///
/// Implementations are immutable once built. The result for a key that
/// was not part of the constructed set is unspecified; implementations
/// are not required to detect or report it.
pub trait PerfectHash<K> {
    /// Index of `key` within the constructed set.
    fn index(&self, key: &K) -> usize;
}

/// Adapter turning any `Fn(&K) -> usize` into an oracle. Handy for tests
/// and for composing over an externally built hash via
/// [`MphMap::from_oracle`](crate::MphMap::from_oracle).
pub struct FnOracle<F>(pub F);

impl<K, F> PerfectHash<K> for FnOracle<F>
where
    F: Fn(&K) -> usize,
{
    #[inline]
    fn index(&self, key: &K) -> usize {
        (self.0)(key)
    }
}

/// Construction knobs for the default oracle.
#[derive(Clone, Copy, Debug)]
pub struct BuildOptions {
    /// Construction parallelism hint. `0` or `1` builds serially;
    /// anything larger selects the parallel builder. Lookup behavior and
    /// the resulting index assignment do not depend on this.
    pub parallelism: usize,
    /// BBHash gamma. `1.0` yields the smallest structure; larger values
    /// trade memory for faster construction and lookup.
    pub load_factor: f64,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            parallelism: 1,
            load_factor: 1.0,
        }
    }
}

/// Default oracle: a minimal perfect hash built with `boomphf`.
pub struct BbhashOracle<K> {
    mphf: boomphf::Mphf<K>,
}

impl<K> BbhashOracle<K>
where
    K: Hash + Eq + Clone + Debug + Send + Sync,
{
    /// Build the hash over `keys`.
    ///
    /// Screens for duplicates first: BBHash construction cannot converge
    /// on a multiset and would abort deep inside the builder otherwise.
    pub fn build(keys: &[K], options: &BuildOptions) -> Result<Self, ConstructionError> {
        if keys.is_empty() {
            return Err(ConstructionError::EmptyKeySet);
        }
        if let Some(index) = first_duplicate(keys) {
            return Err(ConstructionError::DuplicateKey { index });
        }
        debug!(
            "building mphf over {} keys (gamma={}, parallelism={})",
            keys.len(),
            options.load_factor,
            options.parallelism
        );
        let mphf = if options.parallelism > 1 {
            boomphf::Mphf::new_parallel(options.load_factor, keys, None)
        } else {
            boomphf::Mphf::new(options.load_factor, keys)
        };
        Ok(Self { mphf })
    }

    /// Membership-checked lookup: `None` when the key is detectably
    /// absent. Note that absence detection is one-sided; a foreign key
    /// may still collide with an occupied index and return `Some`.
    pub fn try_index(&self, key: &K) -> Option<usize> {
        self.mphf.try_hash(key).map(|h| h as usize)
    }
}

impl<K> PerfectHash<K> for BbhashOracle<K>
where
    K: Hash + Eq + Clone + Debug + Send + Sync,
{
    #[inline]
    fn index(&self, key: &K) -> usize {
        self.mphf.hash(key) as usize
    }
}

/// Position of the second occurrence of the first duplicated key, if any.
pub(crate) fn first_duplicate<K: Hash + Eq>(keys: &[K]) -> Option<usize> {
    let mut seen: HashSet<&K> = HashSet::with_capacity(keys.len());
    keys.iter().position(|k| !seen.insert(k))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Invariant: every key of the constructed set resolves to a unique
    /// index, and `try_index` agrees with `index` for in-set keys.
    #[test]
    fn indices_are_unique_and_consistent() {
        let keys: Vec<String> = (0..100).map(|i| format!("key-{i}")).collect();
        let oracle = BbhashOracle::build(&keys, &BuildOptions::default()).unwrap();

        let mut seen = HashSet::new();
        for k in &keys {
            let idx = oracle.index(k);
            assert!(seen.insert(idx), "index {idx} assigned twice");
            assert_eq!(oracle.try_index(k), Some(idx));
        }
    }

    /// Invariant: duplicate screening reports the position of the second
    /// occurrence and never reaches the BBHash builder.
    #[test]
    fn duplicate_keys_rejected() {
        let keys = ["a", "b", "a", "c"].map(String::from);
        match BbhashOracle::<String>::build(&keys, &BuildOptions::default()) {
            Err(ConstructionError::DuplicateKey { index: 2 }) => {}
            other => panic!("unexpected result: {:?}", other.err()),
        }
    }

    /// Invariant: an empty key slice is rejected before construction.
    #[test]
    fn empty_key_set_rejected() {
        let keys: [u64; 0] = [];
        match BbhashOracle::<u64>::build(&keys, &BuildOptions::default()) {
            Err(ConstructionError::EmptyKeySet) => {}
            other => panic!("unexpected result: {:?}", other.err()),
        }
    }

    /// Invariant: serial and parallel construction assign the same index
    /// to every key.
    #[test]
    fn parallelism_does_not_change_assignment() {
        let keys: Vec<u64> = (0..500).map(|i| i * 7 + 3).collect();
        let serial = BbhashOracle::build(&keys, &BuildOptions::default()).unwrap();
        let parallel = BbhashOracle::build(
            &keys,
            &BuildOptions {
                parallelism: 4,
                ..BuildOptions::default()
            },
        )
        .unwrap();
        for k in &keys {
            assert_eq!(serial.index(k), parallel.index(k));
        }
    }

    /// Invariant: `first_duplicate` returns `None` on unique slices.
    #[test]
    fn first_duplicate_none_on_unique() {
        let keys = ["x", "y", "z"];
        assert_eq!(first_duplicate(&keys), None);
    }
}
