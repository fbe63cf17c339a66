use core::{
    alloc::Layout,
    mem::{align_of, size_of},
    ptr::NonNull,
};

use crate::errors::CapacityError;

/// Source of raw memory for [`Block`](crate::Block)s.
pub trait Allocator {

    /// # Safety
    /// `size` must be non-zero and `align` a power of two.
    unsafe fn allocate_raw(&self, size: usize, align: usize) -> Option<NonNull<u8>>;

    /// # Safety
    /// `ptr` must come from [`Allocator::allocate_raw`] on `self` with the same `size` and `align`.
    unsafe fn free_raw(&self, ptr: NonNull<u8>, size: usize, align: usize);

    /// Uninitialized room for `count` values of `T`.
    ///
    /// Zero-sized requests never touch the allocator and yield a dangling pointer.
    fn allocate_uninit<T>(&self, count: usize) -> Result<NonNull<T>, CapacityError> {
        if count == 0 || size_of::<T>() == 0 {
            return Ok(NonNull::dangling())
        }
        let layout = Layout::array::<T>(count)
            .map_err(|_| CapacityError::CapacityOverflow { requested: count })?;
        unsafe { self.allocate_raw(layout.size(), layout.align()) }
            .map(|ptr| ptr.cast::<T>())
            .ok_or(CapacityError::AllocFailed { new_capacity: count })
    }

    /// # Safety
    /// `ptr` must come from [`Allocator::allocate_uninit`] on `self` with the same `count`,
    /// and every value in it must already be dropped or moved out.
    unsafe fn free_uninit<T>(&self, ptr: NonNull<T>, count: usize) {
        if count == 0 || size_of::<T>() == 0 {
            return
        }
        unsafe { self.free_raw(ptr.cast::<u8>(), size_of::<T>() * count, align_of::<T>()) }
    }
}
