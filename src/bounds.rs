//! Bounds scanner: discovers the index range the oracle actually uses.
//!
//! The oracle promises unique indices, not a dense `[0, N)` range. After
//! construction the scanner probes every key once and records the true
//! minimum and maximum, which fixes the slot array length.

use crate::oracle::PerfectHash;

/// Observed index range over the full key set, inclusive on both ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IndexBounds {
    /// Smallest index any key resolved to.
    pub min: usize,
    /// Largest index any key resolved to.
    pub max: usize,
}

impl IndexBounds {
    /// Probe the oracle with every key, in any order. One lookup per key,
    /// no allocation. Returns `None` for an empty key slice.
    pub fn scan<K, O: PerfectHash<K>>(oracle: &O, keys: &[K]) -> Option<Self> {
        let mut bounds: Option<Self> = None;
        for key in keys {
            let idx = oracle.index(key);
            bounds = Some(match bounds {
                None => Self { min: idx, max: idx },
                Some(b) => Self {
                    min: b.min.min(idx),
                    max: b.max.max(idx),
                },
            });
        }
        bounds
    }

    /// Slot count needed to cover every observed index. Indices are
    /// zero-based and `max` is inclusive, so this is `max + 1`; sizing by
    /// `max` alone would drop the last slot.
    pub fn slot_len(&self) -> usize {
        self.max + 1
    }
}
