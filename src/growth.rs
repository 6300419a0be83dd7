/// Capacity used when a collection grows from zero slots.
pub const DEFAULT_CAPACITY: usize = 4;

/// Computes the capacity to grow to so that `required` slots fit.
///
/// Doubles the current capacity, starting from `DEFAULT_CAPACITY` when empty,
/// and falls back to `required` when doubling is not enough.
pub(crate) fn grown_capacity(current: usize, required: usize) -> usize {
    let doubled = if current == 0 {
        DEFAULT_CAPACITY
    } else {
        current.saturating_mul(2)
    };
    doubled.max(required)
}
