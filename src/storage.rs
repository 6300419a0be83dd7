use alloc::vec::Vec;

use crate::error::{CollectionError, Result};
use crate::growth::grown_capacity;

/// Owned backing store of a `Collection`.
///
/// `slots` holds exactly the live elements. `capacity` is the number of slots
/// reserved for them; the allocation behind `slots` is always at least that
/// large, so pushes and inserts within `capacity` never reallocate.
pub(crate) struct Storage<T> {
    slots: Vec<T>,
    capacity: usize,
}

impl<T> Storage<T> {
    pub(crate) const fn new() -> Self {
        Self {
            slots: Vec::new(),
            capacity: 0,
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Result<Self> {
        let mut storage = Self::new();
        if capacity > 0 {
            storage.reallocate(capacity)?;
        }
        Ok(storage)
    }

    /// Adopts an existing vector without copying.
    ///
    /// Zero-sized elements report their length as capacity; their `Vec` claims
    /// `usize::MAX` slots.
    pub(crate) fn from_vec(slots: Vec<T>) -> Self {
        let capacity = if core::mem::size_of::<T>() == 0 {
            slots.len()
        } else {
            slots.capacity()
        };
        Self { slots, capacity }
    }

    pub(crate) fn len(&self) -> usize {
        self.slots.len()
    }

    pub(crate) fn capacity(&self) -> usize {
        self.capacity
    }

    pub(crate) fn as_slice(&self) -> &[T] {
        &self.slots
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.slots
    }

    pub(crate) fn push(&mut self, item: T) -> Result<()> {
        self.ensure_capacity(self.slots.len() + 1)?;
        self.slots.push(item);
        Ok(())
    }

    /// Inserts at `index`, which must be `<= len()`.
    pub(crate) fn insert(&mut self, index: usize, item: T) -> Result<()> {
        self.ensure_capacity(self.slots.len() + 1)?;
        self.slots.insert(index, item);
        Ok(())
    }

    /// Moves every element of `staged` to the end in one step.
    ///
    /// On failure `staged` keeps its elements and the store is untouched.
    pub(crate) fn append(&mut self, staged: &mut Vec<T>) -> Result<()> {
        let required = self
            .slots
            .len()
            .checked_add(staged.len())
            .ok_or(CollectionError::AllocationFailed {
                requested: usize::MAX,
            })?;
        self.ensure_capacity(required)?;
        self.slots.append(staged);
        Ok(())
    }

    /// Removes the element at `index`, which must be `< len()`.
    pub(crate) fn remove(&mut self, index: usize) -> T {
        self.slots.remove(index)
    }

    /// Makes room for `required` live elements, growing per the growth policy.
    ///
    /// # Errors
    ///
    /// Returns `CollectionError::AllocationFailed` if a larger store cannot be
    /// allocated. The current store is left untouched in that case.
    pub(crate) fn ensure_capacity(&mut self, required: usize) -> Result<()> {
        if required <= self.capacity {
            return Ok(());
        }
        self.reallocate(grown_capacity(self.capacity, required))
    }

    /// Replaces the store with a fresh allocation of `new_capacity` slots and
    /// moves the live elements over.
    fn reallocate(&mut self, new_capacity: usize) -> Result<()> {
        let mut fresh = Vec::new();
        if fresh.try_reserve_exact(new_capacity).is_err() {
            log::trace!(
                "growth from {} to {} slots refused by allocator",
                self.capacity,
                new_capacity
            );
            return Err(CollectionError::AllocationFailed {
                requested: new_capacity,
            });
        }

        fresh.append(&mut self.slots);
        log::trace!(
            "reallocated backing store: {} -> {} slots, {} live",
            self.capacity,
            new_capacity,
            fresh.len()
        );
        self.slots = fresh;
        self.capacity = new_capacity;
        Ok(())
    }

    pub(crate) fn clear(&mut self) {
        log::trace!("clearing {} elements, keeping {} slots", self.slots.len(), self.capacity);
        self.slots.clear();
    }
}

impl<T: Clone> Clone for Storage<T> {
    fn clone(&self) -> Self {
        let mut slots = Vec::with_capacity(self.capacity);
        slots.extend(self.slots.iter().cloned());
        Self {
            slots,
            capacity: self.capacity,
        }
    }
}
