/// A capacity request carried into [`DynArray::with_reserve`](crate::DynArray::with_reserve).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReserveHint {
    capacity: usize,
}

impl ReserveHint {

    #[inline(always)]
    pub const fn new(capacity: usize) -> Self {
        Self { capacity }
    }

    #[inline(always)]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }
}

/// Shorthand for [`ReserveHint::new`]: `DynArray::with_reserve(reserve(16))`.
#[inline(always)]
pub const fn reserve(capacity: usize) -> ReserveHint {
    ReserveHint::new(capacity)
}
