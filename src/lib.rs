#![no_std]

//! `Collection`: a growable, index-checked sequence container.
//!
//! `Collection<T>` owns a contiguous backing store of `T`, tracks how many
//! elements are live, and grows the store by doubling when an append or insert
//! would overflow it. Every index-taking operation is validated before the
//! store is touched, so a failed call never leaves a partially mutated
//! collection behind.
//!
//! This crate is `no_std` and needs only `alloc`.
//!
//! # Operations
//!
//! - `add()`, `add_range()`: append one or many elements, amortized O(1) each
//! - `get()`, `get_mut()`, `set()`: checked access, O(1)
//! - `insert_at()`, `remove_at()`: positional insert/remove, O(n) shifting
//! - `exchange()`: swap two positions, O(1)
//! - `clear()`: drop all elements, keep the allocation
//! - `render()` / `Display`: canonical `[a, b, c]` form
//!
//! ```
//! use collection::{Collection, CollectionError};
//!
//! let mut names = Collection::from(["Peter", "Maria"]);
//! names.add_range(["Steve", "Kate"]).unwrap();
//! names.insert_at(0, "Jordan").unwrap();
//! assert_eq!(names.render(), "[Jordan, Peter, Maria, Steve, Kate]");
//!
//! names.exchange(0, 4).unwrap();
//! assert_eq!(names.remove_at(0).unwrap(), "Kate");
//! assert_eq!(names.to_string(), "[Peter, Maria, Steve, Jordan]");
//!
//! assert_eq!(
//!     names.get(10),
//!     Err(CollectionError::IndexOutOfRange { index: 10, length: 4 })
//! );
//! assert!(names.capacity() >= names.len());
//! ```
//!
//! # Capacity
//!
//! `capacity()` reports allocated slots and is never less than `len()`.
//! Growing from zero allocates `DEFAULT_CAPACITY` slots; afterwards capacity
//! doubles, or jumps straight to the required size for a large `add_range()`.
//! `clear()` keeps the current capacity.
//!
//! ```
//! # use collection::{Collection, DEFAULT_CAPACITY};
//! let mut nums = Collection::new();
//! assert_eq!(nums.capacity(), 0);
//!
//! nums.add(1).unwrap();
//! assert_eq!(nums.capacity(), DEFAULT_CAPACITY);
//!
//! for n in 2..=DEFAULT_CAPACITY + 1 {
//!     nums.add(n).unwrap();
//! }
//! assert_eq!(nums.capacity(), DEFAULT_CAPACITY * 2);
//!
//! nums.clear();
//! assert_eq!(nums.len(), 0);
//! assert_eq!(nums.render(), "[]");
//! ```
//!
//! Enable the optional `std` feature to forward `std` support to the error
//! and logging dependencies:
//! ```toml
//! [dependencies]
//! collection = { version = "0.1", features = ["std"] }
//! ```

extern crate alloc;

mod collection;
mod error;
mod growth;
mod render;
mod storage;

pub use collection::Collection;
pub use error::{CollectionError, Result};
pub use growth::DEFAULT_CAPACITY;

/// Creates a `Collection` holding the given elements.
///
/// ```
/// # use collection::{collection, Collection};
/// let nums = collection![10, 20, 30];
/// assert_eq!(nums.render(), "[10, 20, 30]");
///
/// let empty: Collection<i32> = collection![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! collection {
    () => {
        $crate::Collection::new()
    };
    ($($item:expr),+ $(,)?) => {
        $crate::Collection::from([$($item),+])
    };
}
