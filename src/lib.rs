//! mph-map: a map over a static, known-in-advance key set, indexed by a
//! minimal perfect hash function.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: given all keys up front, build a perfect-hash index once, then
//!   store and retrieve values through it with O(1) access and no per-key
//!   hash storage.
//! - Layers:
//!   - oracle: the `PerfectHash<K>` seam plus `BbhashOracle`, a thin
//!     adapter over the `boomphf` crate (BBHash). Built once, immutable
//!     afterwards.
//!   - bounds: `IndexBounds` probes every key once after construction,
//!     because the oracle promises unique indices but not a dense
//!     `[0, N)` range; the observed maximum fixes the slot count
//!     (`max + 1`, covering the last index inclusively).
//!   - slots: `SlotArray<V>`, a fixed-length array of `Option<V>` with
//!     range-checked access; `None` is the "unset" sentinel.
//!   - `MphMap<K, V, O>`: public facade composing the three; every
//!     operation resolves the key through the oracle and touches the slot
//!     at that index.
//!
//! Constraints
//! - The key set never changes after construction; adding or removing a
//!   key means rebuilding the whole map.
//! - Lookups are only defined for keys of the constructed set. For any
//!   other key the oracle's result is unspecified; debug builds panic via
//!   a membership guard, release builds inherit the oracle's contract.
//! - Construction is a single blocking call; the parallelism hint only
//!   selects the parallel oracle builder.
//! - No internal synchronization: the built map supports shared reads
//!   through `&self`, and mutation follows the usual `&mut` discipline.
//! - Erase is value-level only: it resets the slot to the sentinel and
//!   leaves the oracle mapping untouched, so an erased key is
//!   indistinguishable from one never written.
//!
//! Failure boundaries
//! - Construction errors (empty key set, duplicate keys, oracle
//!   non-convergence) abort the build; no half-built map escapes.
//! - An oracle index outside the slot array is a sizing bug between the
//!   bounds scan and the oracle, treated as an invariant violation
//!   (panic), never as a recoverable error.
//!
//! Notes and non-goals
//! - The perfect-hash construction algorithm itself is out of scope; it
//!   is consumed through the `PerfectHash` seam (`FnOracle` wraps any
//!   `Fn(&K) -> usize`, which tests use for sparse index layouts).
//! - No membership query: the map does not store its keys in release
//!   builds, in keeping with the point of a perfect-hash index.
//! - No persistence, and no concurrent mutation safety beyond `&`/`&mut`.
//! - Construction progress is reported through the `log` facade; the
//!   library installs no logger.

mod bounds;
mod error;
pub mod membership;
mod mph_map;
pub mod oracle;
mod slots;
mod slots_proptest;

// Public surface
pub use error::{ConstructionError, IndexOutOfRange};
pub use membership::DebugMembership;
pub use mph_map::MphMap;
pub use oracle::{BbhashOracle, BuildOptions, FnOracle, PerfectHash};
