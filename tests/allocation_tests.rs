use collection::{Collection, CollectionError};
use std::alloc::{GlobalAlloc, Layout, System};
use std::ptr;

/// Refuses any single allocation larger than 1 MiB.
struct CappedAllocator;

const ALLOCATION_LIMIT: usize = 1 << 20;

unsafe impl GlobalAlloc for CappedAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if layout.size() > ALLOCATION_LIMIT {
            return ptr::null_mut();
        }
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        if new_size > ALLOCATION_LIMIT {
            return ptr::null_mut();
        }
        System.realloc(ptr, layout, new_size)
    }
}

#[global_allocator]
static ALLOCATOR: CappedAllocator = CappedAllocator;

#[test]
fn test_add_range_refused_midway_keeps_capacity() {
    let mut nums = Collection::from([1u64, 2, 3]);
    let capacity = nums.capacity();

    let err = nums
        .add_range((0..1_000_000u64).filter(|_| true))
        .unwrap_err();

    assert!(matches!(err, CollectionError::AllocationFailed { .. }));
    assert_eq!(nums.len(), 3);
    assert_eq!(nums.capacity(), capacity);
    assert_eq!(nums.render(), "[1, 2, 3]");
}

#[test]
fn test_add_range_refused_upfront_keeps_capacity() {
    let mut nums = Collection::from([1u64, 2, 3]);
    let capacity = nums.capacity();

    assert!(nums.add_range(0..1_000_000u64).is_err());

    assert_eq!(nums.capacity(), capacity);
    assert_eq!(nums.render(), "[1, 2, 3]");
}

#[test]
fn test_add_refused_keeps_state() {
    let limit = ALLOCATION_LIMIT / core::mem::size_of::<u64>();
    let mut nums = Collection::with_capacity(limit).unwrap();
    nums.add_range(0..limit as u64).unwrap();

    let err = nums.add(0).unwrap_err();

    assert!(matches!(err, CollectionError::AllocationFailed { .. }));
    assert_eq!(nums.len(), limit);
    assert_eq!(nums.capacity(), limit);
    assert!(nums.insert_at(0, 0).is_err());
    assert_eq!(*nums.get(0).unwrap(), 0);
    assert_eq!(*nums.get(limit - 1).unwrap(), limit as u64 - 1);
}

#[test]
fn test_allocations_within_limit_succeed() {
    let mut nums = Collection::new();
    nums.add_range((0..10_000u64).filter(|n| n % 2 == 0)).unwrap();
    assert_eq!(nums.len(), 5_000);
    assert!(nums.capacity() >= nums.len());
}
