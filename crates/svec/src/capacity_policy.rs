/// Decides how far a container grows once it runs out of slots.
pub trait CapacityPolicy {

    /// Capacity to grow to when `current` slots cannot hold `required` elements,
    /// or `None` if `current` is already enough.
    fn grow(current: usize, required: usize) -> Option<usize>;
}

/// Doubles the capacity, or grows straight to `required` if that is larger.
///
/// An empty container therefore grows to 1, then 2, 4, 8, ...
pub struct Doubling {}

impl CapacityPolicy for Doubling {

    #[inline]
    fn grow(current: usize, required: usize) -> Option<usize> {
        if required <= current { None }
        else { Some(required.max(current.saturating_mul(2))) }
    }
}

/// Grows to exactly the number of slots required.
pub struct Exact {}

impl CapacityPolicy for Exact {

    #[inline]
    fn grow(current: usize, required: usize) -> Option<usize> {
        if required <= current { None }
        else { Some(required) }
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn doubling_sequence_from_empty() {
        let mut capacity = 0;
        let mut seen = Vec::new();
        for len in 0..9 {
            if let Some(new_capacity) = Doubling::grow(capacity, len + 1) {
                capacity = new_capacity;
                seen.push(capacity);
            }
        }
        assert_eq!(seen, [1, 2, 4, 8, 16]);
    }

    #[test]
    fn doubling_jumps_to_large_requirements() {
        assert_eq!(Doubling::grow(4, 20), Some(20));
        assert_eq!(Doubling::grow(4, 5), Some(8));
        assert_eq!(Doubling::grow(4, 4), None);
    }

    #[test]
    fn doubling_saturates_instead_of_overflowing() {
        assert_eq!(Doubling::grow(usize::MAX / 2 + 1, usize::MAX / 2 + 2), Some(usize::MAX));
    }

    #[test]
    fn exact_grows_to_requirement() {
        assert_eq!(Exact::grow(0, 1), Some(1));
        assert_eq!(Exact::grow(3, 4), Some(4));
        assert_eq!(Exact::grow(3, 2), None);
    }
}
