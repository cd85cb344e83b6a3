//! Debug-only membership guard.
//!
//! The oracle's result is unspecified for keys outside the constructed
//! set, so looking one up is a precondition violation rather than an
//! error. In debug builds this guard keeps a copy of the key set and
//! panics on a foreign-key lookup, turning silent corruption into a loud
//! failure during development. In release builds it stores nothing and
//! every check compiles to a no-op.

use core::hash::Hash;
#[cfg(not(debug_assertions))]
use core::marker::PhantomData;
#[cfg(debug_assertions)]
use hashbrown::HashSet;

/// Per-instance key-set tracker. Embed this in structs whose lookups are
/// only defined for a fixed key set and guard entry points with
/// `self.membership.check(key)`.
#[derive(Debug)]
pub struct DebugMembership<K> {
    #[cfg(debug_assertions)]
    keys: HashSet<K>,
    #[cfg(not(debug_assertions))]
    _marker: PhantomData<K>,
}

impl<K: Hash + Eq + Clone> DebugMembership<K> {
    /// Record the constructed key set (debug builds only).
    pub fn new(keys: &[K]) -> Self {
        #[cfg(debug_assertions)]
        {
            Self {
                keys: keys.iter().cloned().collect(),
            }
        }
        #[cfg(not(debug_assertions))]
        {
            let _ = keys;
            Self {
                _marker: PhantomData,
            }
        }
    }

    /// In debug builds, panics if `key` was not part of the constructed
    /// set.
    #[inline]
    pub fn check(&self, key: &K) {
        #[cfg(debug_assertions)]
        assert!(
            self.keys.contains(key),
            "lookup with a key outside the constructed set"
        );
        #[cfg(not(debug_assertions))]
        let _ = key;
    }
}

#[cfg(test)]
mod tests {
    use super::DebugMembership;

    #[test]
    fn in_set_key_passes() {
        let m = DebugMembership::new(&["a", "b"]);
        m.check(&"a");
        m.check(&"b");
    }

    #[cfg(debug_assertions)]
    #[test]
    fn foreign_key_panics_in_debug() {
        let m = DebugMembership::new(&["a", "b"]);
        let res = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            m.check(&"z");
        }));
        assert!(res.is_err(), "expected foreign key to panic in debug builds");
    }

    #[cfg(not(debug_assertions))]
    #[test]
    fn foreign_key_noop_in_release() {
        let m = DebugMembership::new(&["a", "b"]);
        m.check(&"z");
    }
}
