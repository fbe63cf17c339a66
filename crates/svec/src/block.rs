use core::{
    marker::PhantomData,
    mem,
    ops::{Index, IndexMut},
    ptr::{self, NonNull},
    slice,
};

use crate::{
    Allocator,
    global_alloc::GLOBAL_ALLOC,
    Result,
};

/// A fixed number of slots on the heap, every one of them always holding a live `T`.
///
/// A block never grows or shrinks. Containers replace it wholesale by building a new
/// one and [`swap`](Block::swap)ping it in.
pub struct Block<T> {
    data: NonNull<T>,
    len: usize,
    _marker: PhantomData<T>,
}

unsafe impl<T: Send> Send for Block<T> {}
unsafe impl<T: Sync> Sync for Block<T> {}

/// Owns a partially written allocation while a block is being filled.
struct Fill<T> {
    data: NonNull<T>,
    allocated: usize,
    written: usize,
}

impl<T> Drop for Fill<T> {

    fn drop(&mut self) {
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.data.as_ptr(), self.written));
            GLOBAL_ALLOC.free_uninit(self.data, self.allocated);
        }
    }
}

impl<T> Block<T> {

    #[inline(always)]
    pub const fn empty() -> Self {
        Self {
            data: NonNull::dangling(),
            len: 0,
            _marker: PhantomData,
        }
    }

    /// Allocates `len` slots holding `T::default()`.
    #[inline(always)]
    pub fn new(len: usize) -> Result<Self>
        where
            T: Default
    {
        Self::with_fn(len, |_| T::default())
    }

    /// Allocates `len` slots, slot `i` holding `f(i)`.
    ///
    /// If `f` panics the slots written so far are dropped and the memory is released.
    pub fn with_fn<F>(len: usize, mut f: F) -> Result<Self>
        where
            F: FnMut(usize) -> T
    {
        let data = GLOBAL_ALLOC.allocate_uninit::<T>(len)?;
        let mut fill = Fill { data, allocated: len, written: 0 };
        while fill.written < len {
            unsafe { data.add(fill.written).write(f(fill.written)) };
            fill.written += 1;
        }
        mem::forget(fill);
        Ok(Self {
            data,
            len,
            _marker: PhantomData,
        })
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline(always)]
    pub fn as_ptr(&self) -> *const T {
        self.data.as_ptr()
    }

    #[inline(always)]
    pub fn as_slice(&self) -> &[T] {
        unsafe { slice::from_raw_parts(self.data.as_ptr(), self.len) }
    }

    #[inline(always)]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        unsafe { slice::from_raw_parts_mut(self.data.as_ptr(), self.len) }
    }

    /// Exchanges ownership of the two allocations. Never allocates.
    #[inline(always)]
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(&mut self.data, &mut other.data);
        mem::swap(&mut self.len, &mut other.len);
    }
}

impl<T> Drop for Block<T> {

    fn drop(&mut self) {
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.data.as_ptr(), self.len));
            GLOBAL_ALLOC.free_uninit(self.data, self.len);
        }
    }
}

impl<T> Default for Block<T> {

    fn default() -> Self {
        Self::empty()
    }
}

impl<T> Index<usize> for Block<T> {

    type Output = T;

    #[inline(always)]
    fn index(&self, index: usize) -> &Self::Output {
        if index >= self.len {
            panic!("index {} out of bounds for block of {} slots", index, self.len)
        }
        unsafe { self.data.add(index).as_ref() }
    }
}

impl<T> IndexMut<usize> for Block<T> {

    #[inline(always)]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        if index >= self.len {
            panic!("index {} out of bounds for block of {} slots", index, self.len)
        }
        unsafe { self.data.add(index).as_mut() }
    }
}
