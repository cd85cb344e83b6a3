//! Error types for construction and slot access.

use thiserror::Error;

/// Failure to build the map. Fatal to the construction call: no half-built
/// instance is ever returned, and callers must not retry with the same
/// inputs expecting a different outcome.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConstructionError {
    /// The key slice was empty. A zero-key map is rejected at the
    /// boundary, so no operation can ever observe an empty structure.
    #[error("cannot build a perfect-hash map over an empty key set")]
    EmptyKeySet,

    /// Two equal keys were found; `index` is the position of the second
    /// occurrence in the input slice.
    #[error("duplicate key at position {index} in the key set")]
    DuplicateKey {
        /// Position of the second occurrence.
        index: usize,
    },

    /// The oracle failed to converge.
    ///
    /// Never produced by this crate: `from_oracle` takes an already
    /// built oracle, and the default BBHash oracle screens duplicates up
    /// front and aborts internally otherwise. The variant exists for
    /// downstream oracle constructors that build fallibly and want to
    /// report through the same taxonomy.
    #[error("perfect hash construction failed: {0}")]
    OracleBuild(String),
}

/// A computed index fell outside the slot array.
///
/// This signals a sizing bug (the bounds scan and the oracle disagree),
/// not a caller error. The map facade treats it as an invariant violation
/// and panics rather than surfacing it as a recoverable condition.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("index {index} out of range for slot array of length {len}")]
pub struct IndexOutOfRange {
    /// The offending index.
    pub index: usize,
    /// Length of the slot array at the time of access.
    pub len: usize,
}
