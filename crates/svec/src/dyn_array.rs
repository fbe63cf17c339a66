mod traits;

use core::{
    marker::PhantomData,
    mem,
    slice,
};

use svec_log::{debug, trace};

use crate::{
    block::Block,
    capacity_policy::{CapacityPolicy, Doubling},
    errors::CapacityError,
    reserve_hint::ReserveHint,
    Result,
};

use CapacityError::{CapacityOverflow, IndexOutOfBounds};

/// A growable array stored in a single exclusively owned [`Block`].
///
/// Slots `0..len()` hold the elements. Slots `len()..capacity()` hold either
/// `T::default()` or whatever was left behind by `pop_back`, `erase`, `clear` or
/// a shrinking `resize`, and are never exposed through the slice API.
///
/// Every operation that needs more room builds a complete replacement block first
/// and swaps it in afterwards, so a failed allocation leaves the array untouched.
/// `P` decides the capacity to grow to when the block is full.
pub struct DynArray<T, P: CapacityPolicy = Doubling> {
    items: Block<T>,
    size: usize,
    _policy: PhantomData<P>,
}

impl<T, P: CapacityPolicy> DynArray<T, P> {

    #[inline(always)]
    pub const fn new() -> Self {
        Self {
            items: Block::empty(),
            size: 0,
            _policy: PhantomData,
        }
    }

    #[inline(always)]
    fn from_block(items: Block<T>, size: usize) -> Self {
        debug_assert!(size <= items.len());
        Self {
            items,
            size,
            _policy: PhantomData,
        }
    }

    /// `len` clones of `value`, with capacity `len`.
    pub fn with_len(len: usize, value: T) -> Result<Self>
        where
            T: Clone
    {
        let items = Block::with_fn(len, |_| value.clone())?;
        Ok(Self::from_block(items, len))
    }

    pub fn with_len_with<F>(len: usize, mut f: F) -> Result<Self>
        where
            F: FnMut() -> T
    {
        let items = Block::with_fn(len, |_| f())?;
        Ok(Self::from_block(items, len))
    }

    pub fn with_default_len(len: usize) -> Result<Self>
        where
            T: Default
    {
        Ok(Self::from_block(Block::new(len)?, len))
    }

    /// Clones `values` in order into an array of exactly `values.len()` slots.
    pub fn from_slice(values: &[T]) -> Result<Self>
        where
            T: Clone
    {
        let items = Block::with_fn(values.len(), |i| values[i].clone())?;
        Ok(Self::from_block(items, values.len()))
    }

    /// An empty array with `hint.capacity()` slots already allocated.
    pub fn with_reserve(hint: ReserveHint) -> Result<Self>
        where
            T: Default
    {
        Ok(Self::from_block(Block::new(hint.capacity())?, 0))
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.size
    }

    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.items.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    #[inline(always)]
    pub fn as_ptr(&self) -> *const T {
        self.items.as_ptr()
    }

    #[inline(always)]
    pub fn as_slice(&self) -> &[T] {
        &self.items.as_slice()[..self.size]
    }

    #[inline(always)]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.items.as_mut_slice()[..self.size]
    }

    #[inline(always)]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    #[inline(always)]
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Checked access, for indices that may not be trusted.
    pub fn at(&self, index: usize) -> Result<&T> {
        self.as_slice()
            .get(index)
            .ok_or(IndexOutOfBounds { index, len: self.size })
    }

    pub fn at_mut(&mut self, index: usize) -> Result<&mut T> {
        let len = self.size;
        self.as_mut_slice()
            .get_mut(index)
            .ok_or(IndexOutOfBounds { index, len })
    }

    /// Forgets the last element. Its slot keeps the value until it is overwritten.
    ///
    /// # Panics
    /// Panics if the array is empty.
    #[inline(always)]
    pub fn pop_back(&mut self) {
        if self.size == 0 {
            panic!("pop_back on an empty array")
        }
        self.size -= 1;
    }

    /// Removes the element at `pos` by shifting everything after it one slot left.
    ///
    /// Returns `pos`, which now holds the element that followed the removed one
    /// (or equals `len()` if the last element was removed). Capacity is unchanged and
    /// the removed value ends up in the first stale slot.
    ///
    /// `pos == len()` shifts nothing and drops the last element from the live range.
    ///
    /// # Panics
    /// Panics if the array is empty or `pos > len()`.
    pub fn erase(&mut self, pos: usize) -> usize {
        if self.size == 0 || pos > self.size {
            panic!("erase position {} was out of bounds with len {}", pos, self.size)
        }
        if pos < self.size {
            self.items.as_mut_slice()[pos..self.size].rotate_left(1);
        }
        self.size -= 1;
        pos
    }

    /// Forgets every element, keeping the block and its capacity.
    #[inline(always)]
    pub fn clear(&mut self) {
        self.size = 0;
    }

    /// Exchanges contents with `other` without touching any element.
    #[inline(always)]
    pub fn swap(&mut self, other: &mut Self) {
        self.items.swap(&mut other.items);
        mem::swap(&mut self.size, &mut other.size);
    }

    /// Moves the contents out, leaving `self` empty with no allocation.
    #[inline(always)]
    pub fn take(&mut self) -> Self {
        let mut taken = Self::new();
        self.swap(&mut taken);
        taken
    }

    #[inline(always)]
    fn grown_capacity(&self, required: usize) -> Result<usize> {
        P::grow(self.capacity(), required)
            .filter(|&capacity| capacity >= required)
            .ok_or(CapacityOverflow { requested: required })
    }
}

impl<T: Default, P: CapacityPolicy> DynArray<T, P> {

    /// Moves the elements into a fresh block of exactly `new_capacity` slots.
    fn relocate(&mut self, new_capacity: usize) -> Result<()> {
        debug_assert!(new_capacity >= self.size);
        let mut block = Block::new(new_capacity)?;
        block.as_mut_slice()[..self.size].swap_with_slice(self.as_mut_slice());
        debug!("relocated {} elements, capacity {} -> {}", self.size, self.capacity(), new_capacity);
        self.items.swap(&mut block);
        Ok(())
    }

    /// Grows the block to exactly `new_capacity` slots. Does nothing if the array
    /// already has that many.
    pub fn reserve(&mut self, new_capacity: usize) -> Result<()> {
        if new_capacity <= self.capacity() {
            return Ok(())
        }
        self.relocate(new_capacity)
    }

    /// Appends `value`, growing by the capacity policy when full.
    pub fn push_back(&mut self, value: T) -> Result<&mut T> {
        if self.size == self.capacity() {
            self.relocate(self.grown_capacity(self.size + 1)?)?;
        }
        let slot = &mut self.items[self.size];
        *slot = value;
        self.size += 1;
        Ok(slot)
    }

    /// Inserts `value` before the element at `pos`, `pos == len()` appending.
    ///
    /// Always rebuilds the whole block, at the grown capacity if the array is full
    /// and at the current one otherwise. Returns the index of the inserted value.
    ///
    /// # Panics
    /// Panics if `pos > len()`.
    pub fn insert(&mut self, pos: usize, value: T) -> Result<usize> {
        if pos > self.size {
            panic!("insert position {} was out of bounds with len {}", pos, self.size)
        }
        let new_capacity =
            if self.size == self.capacity() {
                self.grown_capacity(self.size + 1)?
            }
            else {
                self.capacity()
            };
        let mut block = Block::new(new_capacity)?;
        {
            let size = self.size;
            let fresh = block.as_mut_slice();
            let live = &mut self.items.as_mut_slice()[..size];
            fresh[..pos].swap_with_slice(&mut live[..pos]);
            fresh[pos] = value;
            fresh[pos + 1..=size].swap_with_slice(&mut live[pos..]);
        }
        trace!("inserted at {} of {}, capacity {} -> {}", pos, self.size + 1, self.capacity(), new_capacity);
        self.items.swap(&mut block);
        self.size += 1;
        Ok(pos)
    }

    /// Sets the length to `new_size`.
    ///
    /// Within the current capacity only the length changes: growing exposes the
    /// stale slot values as they are. Beyond it, the elements move to a block of
    /// exactly `new_size` slots and the new tail holds `T::default()`.
    pub fn resize(&mut self, new_size: usize) -> Result<()> {
        if new_size > self.capacity() {
            self.relocate(new_size)?;
        }
        self.size = new_size;
        Ok(())
    }
}
