use core::{
    cmp::Ordering,
    fmt::{self, Debug, Formatter},
    hash::{Hash, Hasher},
    ops::{Deref, DerefMut, Index, IndexMut},
    slice::{self, SliceIndex},
};

use crate::{
    block::Block,
    capacity_policy::CapacityPolicy,
    reserve_hint::ReserveHint,
};

use super::DynArray;

impl<T, P: CapacityPolicy> Default for DynArray<T, P> {

    #[inline(always)]
    fn default() -> Self {
        Self::new()
    }
}

/// Deep copy with the same length and capacity. Stale slots are cloned along
/// with the live ones.
impl<T: Clone, P: CapacityPolicy> Clone for DynArray<T, P> {

    fn clone(&self) -> Self {
        let items = match Block::with_fn(self.capacity(), |i| self.items[i].clone()) {
            Ok(items) => items,
            Err(err) => panic!("{}", err),
        };
        Self::from_block(items, self.size)
    }

    /// Copies into a new array first, so `self` is untouched if cloning panics.
    fn clone_from(&mut self, source: &Self) {
        let mut copy = source.clone();
        self.swap(&mut copy);
    }
}

impl<T, P: CapacityPolicy, I: SliceIndex<[T]>> Index<I> for DynArray<T, P> {

    type Output = I::Output;

    #[inline(always)]
    fn index(&self, index: I) -> &Self::Output {
        &self.as_slice()[index]
    }
}

impl<T, P: CapacityPolicy, I: SliceIndex<[T]>> IndexMut<I> for DynArray<T, P> {

    #[inline(always)]
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        &mut self.as_mut_slice()[index]
    }
}

impl<T, P: CapacityPolicy> Deref for DynArray<T, P> {

    type Target = [T];

    #[inline(always)]
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl<T, P: CapacityPolicy> DerefMut for DynArray<T, P> {

    #[inline(always)]
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T, P: CapacityPolicy> AsRef<[T]> for DynArray<T, P> {

    #[inline(always)]
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, P: CapacityPolicy> AsMut<[T]> for DynArray<T, P> {

    #[inline(always)]
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<'a, T, P: CapacityPolicy> IntoIterator for &'a DynArray<T, P> {

    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, P: CapacityPolicy> IntoIterator for &'a mut DynArray<T, P> {

    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T: PartialEq, P: CapacityPolicy> PartialEq for DynArray<T, P> {

    #[inline(always)]
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq, P: CapacityPolicy> Eq for DynArray<T, P> {}

impl<T: PartialOrd, P: CapacityPolicy> PartialOrd for DynArray<T, P> {

    #[inline(always)]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}

impl<T: Ord, P: CapacityPolicy> Ord for DynArray<T, P> {

    #[inline(always)]
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl<T: Hash, P: CapacityPolicy> Hash for DynArray<T, P> {

    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

impl<T: Debug, P: CapacityPolicy> Debug for DynArray<T, P> {

    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Panics if an allocation fails.
impl<T: Default, P: CapacityPolicy> Extend<T> for DynArray<T, P> {

    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            if let Err(err) = self.push_back(value) {
                panic!("{}", err)
            }
        }
    }
}

impl<T: Default, P: CapacityPolicy> FromIterator<T> for DynArray<T, P> {

    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut array = Self::new();
        array.extend(iter);
        array
    }
}

impl<T, P: CapacityPolicy, const N: usize> From<[T; N]> for DynArray<T, P> {

    fn from(values: [T; N]) -> Self {
        let mut values = values.into_iter();
        let items = Block::with_fn(N, |_| match values.next() {
            Some(value) => value,
            None => unreachable!("array yields exactly {} values", N),
        });
        match items {
            Ok(items) => Self::from_block(items, N),
            Err(err) => panic!("{}", err),
        }
    }
}

impl<T: Clone, P: CapacityPolicy> From<&[T]> for DynArray<T, P> {

    fn from(values: &[T]) -> Self {
        match Self::from_slice(values) {
            Ok(array) => array,
            Err(err) => panic!("{}", err),
        }
    }
}

impl<T: Default, P: CapacityPolicy> From<ReserveHint> for DynArray<T, P> {

    fn from(hint: ReserveHint) -> Self {
        match Self::with_reserve(hint) {
            Ok(array) => array,
            Err(err) => panic!("{}", err),
        }
    }
}
