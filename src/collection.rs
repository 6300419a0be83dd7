use alloc::vec::Vec;
use core::ops::{Index, IndexMut};

use crate::error::{CollectionError, Result};
use crate::storage::Storage;

/// A growable, index-checked sequence of `T`
///
/// Every index-taking method validates its arguments before touching the
/// backing store, so a failed call leaves the collection exactly as it was.
pub struct Collection<T> {
    pub(crate) storage: Storage<T>,
}

impl<T> Collection<T> {
    /// Creates an empty collection. No memory is allocated until the first add.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            storage: Storage::new(),
        }
    }

    /// Creates an empty collection with room for `capacity` elements.
    ///
    /// # Errors
    ///
    /// Returns `CollectionError::AllocationFailed` if the store cannot be allocated.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        Ok(Self {
            storage: Storage::with_capacity(capacity)?,
        })
    }

    /// Creates a collection holding `items` in the given order.
    ///
    /// # Errors
    ///
    /// Returns `CollectionError::AllocationFailed` if the store cannot be allocated.
    pub fn from_items<I: IntoIterator<Item = T>>(items: I) -> Result<Self> {
        let mut collection = Self::new();
        collection.add_range(items)?;
        Ok(collection)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.storage.len() == 0
    }

    /// Number of allocated slots. Never less than `len()`.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.storage.capacity()
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.len() {
            return Err(CollectionError::IndexOutOfRange {
                index,
                length: self.len(),
            });
        }
        Ok(())
    }

    /// Returns the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns `CollectionError::IndexOutOfRange` if `index >= len()`.
    pub fn get(&self, index: usize) -> Result<&T> {
        self.check_index(index)?;
        Ok(&self.storage.as_slice()[index])
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns `CollectionError::IndexOutOfRange` if `index >= len()`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        self.check_index(index)?;
        Ok(&mut self.storage.as_mut_slice()[index])
    }

    /// Replaces the element at `index` and returns the previous one.
    ///
    /// # Errors
    ///
    /// Returns `CollectionError::IndexOutOfRange` if `index >= len()`.
    pub fn set(&mut self, index: usize, value: T) -> Result<T> {
        let slot = self.get_mut(index)?;
        Ok(core::mem::replace(slot, value))
    }

    /// Appends `item` as the new last element.
    ///
    /// # Errors
    ///
    /// Returns `CollectionError::AllocationFailed` if growth is needed and fails.
    pub fn add(&mut self, item: T) -> Result<()> {
        self.storage.push(item)
    }

    /// Appends every item in order, as if by repeated `add`.
    ///
    /// # Errors
    ///
    /// Returns `CollectionError::AllocationFailed` if growth fails. The
    /// collection, including its capacity, is unchanged in that case.
    pub fn add_range<I: IntoIterator<Item = T>>(&mut self, items: I) -> Result<()> {
        let items = items.into_iter();

        // Items are gathered aside first so the store grows at most once.
        let (lower, _) = items.size_hint();
        let mut staged = Vec::new();
        staged
            .try_reserve(lower)
            .map_err(|_| CollectionError::AllocationFailed {
                requested: self.len().saturating_add(lower),
            })?;
        for item in items {
            if staged.len() == staged.capacity() && staged.try_reserve(1).is_err() {
                return Err(CollectionError::AllocationFailed {
                    requested: self.len().saturating_add(staged.len()).saturating_add(1),
                });
            }
            staged.push(item);
        }

        self.storage.append(&mut staged)
    }

    /// Inserts `item` at `index`, shifting later elements one position back.
    /// `index == len()` appends.
    ///
    /// # Errors
    ///
    /// Returns `CollectionError::IndexOutOfRange` if `index > len()`, or
    /// `CollectionError::AllocationFailed` if growth is needed and fails.
    pub fn insert_at(&mut self, index: usize, item: T) -> Result<()> {
        if index > self.len() {
            return Err(CollectionError::IndexOutOfRange {
                index,
                length: self.len(),
            });
        }
        self.storage.insert(index, item)
    }

    /// Swaps the elements at `first` and `second`.
    ///
    /// # Errors
    ///
    /// Returns `CollectionError::IndexOutOfRange` for the first index that is
    /// `>= len()`; nothing is swapped in that case.
    pub fn exchange(&mut self, first: usize, second: usize) -> Result<()> {
        self.check_index(first)?;
        self.check_index(second)?;
        self.storage.as_mut_slice().swap(first, second);
        Ok(())
    }

    /// Removes and returns the element at `index`, shifting later elements forward.
    ///
    /// # Errors
    ///
    /// Returns `CollectionError::IndexOutOfRange` if `index >= len()`.
    pub fn remove_at(&mut self, index: usize) -> Result<T> {
        self.check_index(index)?;
        Ok(self.storage.remove(index))
    }

    /// Removes all elements. The allocated capacity is kept.
    pub fn clear(&mut self) {
        self.storage.clear();
    }
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Collection<T> {
    fn clone(&self) -> Self {
        Self {
            storage: self.storage.clone(),
        }
    }
}

impl<T: PartialEq> PartialEq for Collection<T> {
    fn eq(&self, other: &Self) -> bool {
        self.storage.as_slice() == other.storage.as_slice()
    }
}

impl<T: Eq> Eq for Collection<T> {}

impl<T> From<Vec<T>> for Collection<T> {
    fn from(items: Vec<T>) -> Self {
        Self {
            storage: Storage::from_vec(items),
        }
    }
}

impl<T, const N: usize> From<[T; N]> for Collection<T> {
    fn from(items: [T; N]) -> Self {
        Self::from(Vec::from(items))
    }
}

impl<T> FromIterator<T> for Collection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<T>>())
    }
}

impl<T> Extend<T> for Collection<T> {
    /// # Panics
    ///
    /// Panics if the backing store cannot grow. Use `add_range` to handle that case.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        if let Err(err) = self.add_range(iter) {
            panic!("{}", err);
        }
    }
}

impl<T> Index<usize> for Collection<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if `index >= len()`.
    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Ok(item) => item,
            Err(err) => panic!("{}", err),
        }
    }
}

impl<T> IndexMut<usize> for Collection<T> {
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.get_mut(index) {
            Ok(item) => item,
            Err(err) => panic!("{}", err),
        }
    }
}
