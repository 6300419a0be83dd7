use thiserror::Error;

/// Error types for `Collection` operations
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum CollectionError {
    /// Index lies outside the range accepted by the operation
    #[error("Index out of range: index {index} is outside collection of length {length}")]
    IndexOutOfRange {
        /// Index that was passed in
        index: usize,
        /// Length of the collection at the time of the call
        length: usize,
    },
    /// Backing store could not be grown
    #[error("Allocation failed: could not grow backing store to {requested} slots")]
    AllocationFailed {
        /// Capacity that was requested from the allocator
        requested: usize,
    },
}

pub type Result<T> = core::result::Result<T, CollectionError>;
