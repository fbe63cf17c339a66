use std::alloc::{Layout, alloc, dealloc};

use core::ptr::NonNull;

use crate::Allocator;

pub struct GlobalAlloc;

pub static GLOBAL_ALLOC: GlobalAlloc = GlobalAlloc;

impl Allocator for GlobalAlloc {

    unsafe fn allocate_raw(&self, size: usize, align: usize) -> Option<NonNull<u8>> {
        let layout = Layout::from_size_align(size, align).ok()?;
        if layout.size() == 0 {
            return None
        }
        NonNull::new(unsafe { alloc(layout) })
    }

    unsafe fn free_raw(&self, ptr: NonNull<u8>, size: usize, align: usize) {
        let layout = Layout::from_size_align(size, align);
        debug_assert!(layout.is_ok(), "free_raw called with invalid layout (size {}, align {})", size, align);
        if let Ok(layout) = layout {
            unsafe { dealloc(ptr.as_ptr(), layout) }
        }
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn zero_sized_requests_do_not_allocate() {
        assert_eq!(GLOBAL_ALLOC.allocate_uninit::<u64>(0), Ok(NonNull::dangling()));
        assert_eq!(GLOBAL_ALLOC.allocate_uninit::<()>(128), Ok(NonNull::dangling()));
        assert!(unsafe { GLOBAL_ALLOC.allocate_raw(0, 8) }.is_none());
    }

    #[test]
    fn oversized_requests_report_overflow() {
        let err = GLOBAL_ALLOC.allocate_uninit::<u64>(usize::MAX).unwrap_err();
        assert_eq!(err, crate::CapacityError::CapacityOverflow { requested: usize::MAX });
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "free_raw called with invalid layout (size 8, align 3)")]
    fn free_with_invalid_layout_asserts() {
        unsafe { GLOBAL_ALLOC.free_raw(NonNull::dangling(), 8, 3) }
    }

    #[test]
    fn allocation_is_aligned_and_writable() {
        let ptr = GLOBAL_ALLOC.allocate_uninit::<u64>(4).unwrap();
        assert_eq!(ptr.as_ptr() as usize % align_of::<u64>(), 0);
        unsafe {
            for i in 0..4 {
                ptr.add(i).write(i as u64 * 3);
            }
            assert_eq!(ptr.add(3).read(), 9);
            GLOBAL_ALLOC.free_uninit(ptr, 4);
        }
    }
}
