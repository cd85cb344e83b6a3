//! Dense value store: one slot per reachable index.
//!
//! A fixed-length boxed slice of `Option<V>`. `None` is the sentinel for
//! "no value present"; a slot erased with [`SlotArray::take`] is
//! indistinguishable from one never written. All access is range-checked:
//! an out-of-range index means the array was mis-sized relative to the
//! oracle, which the facade treats as an invariant violation.

use crate::error::IndexOutOfRange;

/// Fixed-length slot array sized by the bounds scan.
#[derive(Debug)]
pub(crate) struct SlotArray<V> {
    slots: Box<[Option<V>]>,
}

impl<V> SlotArray<V> {
    /// Allocate `len` slots, all unset.
    pub(crate) fn new(len: usize) -> Self {
        let mut slots = Vec::with_capacity(len);
        slots.resize_with(len, || None);
        Self {
            slots: slots.into_boxed_slice(),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.slots.len()
    }

    /// Reset every slot over the full allocated length.
    pub(crate) fn clear(&mut self) {
        for slot in self.slots.iter_mut() {
            *slot = None;
        }
    }

    fn check(&self, index: usize) -> Result<(), IndexOutOfRange> {
        if index < self.slots.len() {
            Ok(())
        } else {
            Err(IndexOutOfRange {
                index,
                len: self.slots.len(),
            })
        }
    }

    pub(crate) fn slot(&self, index: usize) -> Result<&Option<V>, IndexOutOfRange> {
        self.check(index)?;
        Ok(&self.slots[index])
    }

    pub(crate) fn slot_mut(&mut self, index: usize) -> Result<&mut Option<V>, IndexOutOfRange> {
        self.check(index)?;
        Ok(&mut self.slots[index])
    }

    /// Overwrite the slot, returning the previous value.
    pub(crate) fn set(&mut self, index: usize, value: V) -> Result<Option<V>, IndexOutOfRange> {
        Ok(self.slot_mut(index)?.replace(value))
    }

    /// Erase the slot back to the sentinel, returning what it held.
    pub(crate) fn take(&mut self, index: usize) -> Result<Option<V>, IndexOutOfRange> {
        Ok(self.slot_mut(index)?.take())
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &Option<V>> {
        self.slots.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut Option<V>> {
        self.slots.iter_mut()
    }
}
