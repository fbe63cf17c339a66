//! Checks `DynArray` against a plain `Vec` model of its slots, stale ones included.

use proptest::prelude::*;

use svec::{DynArray, Exact, CapacityPolicy, Doubling};

#[derive(Clone, Debug)]
enum Op {
    Push(i32),
    Insert(usize, i32),
    Erase(usize),
    Pop,
    Clear,
    Resize(usize),
    Reserve(usize),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => any::<i32>().prop_map(Op::Push),
        2 => (any::<usize>(), any::<i32>()).prop_map(|(pos, value)| Op::Insert(pos, value)),
        2 => any::<usize>().prop_map(Op::Erase),
        1 => Just(Op::Pop),
        1 => Just(Op::Clear),
        1 => (0usize..40).prop_map(Op::Resize),
        1 => (0usize..40).prop_map(Op::Reserve),
    ]
}

/// Every slot of the block, plus the logical length.
struct Model {
    slots: Vec<i32>,
    size: usize,
}

impl Model {

    fn relocated(&self, capacity: usize) -> Vec<i32> {
        let mut slots = vec![0; capacity];
        slots[..self.size].copy_from_slice(&self.slots[..self.size]);
        slots
    }

    fn apply<P: CapacityPolicy>(&mut self, op: &Op) {
        let capacity = self.slots.len();
        match *op {
            Op::Push(value) => {
                if self.size == capacity {
                    self.slots = self.relocated(P::grow(capacity, self.size + 1).unwrap());
                }
                self.slots[self.size] = value;
                self.size += 1;
            },
            Op::Insert(pos, value) => {
                let pos = pos % (self.size + 1);
                let new_capacity =
                    if self.size == capacity { P::grow(capacity, self.size + 1).unwrap() }
                    else { capacity };
                let mut slots = vec![0; new_capacity];
                slots[..pos].copy_from_slice(&self.slots[..pos]);
                slots[pos] = value;
                slots[pos + 1..=self.size].copy_from_slice(&self.slots[pos..self.size]);
                self.slots = slots;
                self.size += 1;
            },
            Op::Erase(pos) => {
                if self.size > 0 {
                    let pos = pos % (self.size + 1);
                    if pos < self.size {
                        self.slots[pos..self.size].rotate_left(1);
                    }
                    self.size -= 1;
                }
            },
            Op::Pop => {
                if self.size > 0 {
                    self.size -= 1;
                }
            },
            Op::Clear => self.size = 0,
            Op::Resize(len) => {
                if len > capacity {
                    self.slots = self.relocated(len);
                }
                self.size = len;
            },
            Op::Reserve(new_capacity) => {
                if new_capacity > capacity {
                    self.slots = self.relocated(new_capacity);
                }
            },
        }
    }
}

fn apply<P: CapacityPolicy>(array: &mut DynArray<i32, P>, op: &Op) {
    match *op {
        Op::Push(value) => {
            array.push_back(value).unwrap();
        },
        Op::Insert(pos, value) => {
            let pos = pos % (array.len() + 1);
            assert_eq!(array.insert(pos, value).unwrap(), pos);
            assert_eq!(array[pos], value);
        },
        Op::Erase(pos) => {
            if !array.is_empty() {
                let pos = pos % (array.len() + 1);
                assert_eq!(array.erase(pos), pos);
            }
        },
        Op::Pop => {
            if !array.is_empty() {
                array.pop_back();
            }
        },
        Op::Clear => array.clear(),
        Op::Resize(len) => array.resize(len).unwrap(),
        Op::Reserve(capacity) => array.reserve(capacity).unwrap(),
    }
}

fn run<P: CapacityPolicy>(ops: &[Op]) -> Result<(), TestCaseError> {
    let mut array = DynArray::<i32, P>::new();
    let mut model = Model { slots: Vec::new(), size: 0 };
    for op in ops {
        apply(&mut array, op);
        model.apply::<P>(op);
        prop_assert_eq!(array.as_slice(), &model.slots[..model.size], "after {:?}", op);
        prop_assert_eq!(array.capacity(), model.slots.len(), "after {:?}", op);
        prop_assert!(array.len() <= array.capacity());
    }
    Ok(())
}

proptest! {

    #[test]
    fn doubling_matches_model(ops in prop::collection::vec(op(), 0..64)) {
        run::<Doubling>(&ops)?;
    }

    #[test]
    fn exact_matches_model(ops in prop::collection::vec(op(), 0..64)) {
        run::<Exact>(&ops)?;
    }

    #[test]
    fn push_back_appends_and_preserves_prefix(
        values in prop::collection::vec(any::<i32>(), 0..32),
        value in any::<i32>(),
    ) {
        let mut array: DynArray<i32> = values.iter().copied().collect();
        array.push_back(value).unwrap();
        prop_assert_eq!(array.len(), values.len() + 1);
        prop_assert!(array.capacity() >= array.len());
        prop_assert_eq!(array[values.len()], value);
        prop_assert_eq!(&array[..values.len()], &values[..]);
    }

    #[test]
    fn insert_at_end_matches_push_back(values in prop::collection::vec(any::<i32>(), 0..32), value in any::<i32>()) {
        let mut inserted: DynArray<i32> = values.iter().copied().collect();
        let mut pushed = inserted.clone();
        let end = inserted.len();
        inserted.insert(end, value).unwrap();
        pushed.push_back(value).unwrap();
        prop_assert_eq!(&inserted, &pushed);
        prop_assert_eq!(inserted.capacity(), pushed.capacity());
    }

    #[test]
    fn comparisons_agree_with_vec(
        a in prop::collection::vec(0u8..4, 0..6),
        b in prop::collection::vec(0u8..4, 0..6),
    ) {
        let x = DynArray::<u8>::from_slice(&a).unwrap();
        let y = DynArray::<u8>::from_slice(&b).unwrap();
        prop_assert_eq!(x == y, a == b);
        prop_assert_eq!(x != y, a != b);
        prop_assert_eq!(x < y, a < b);
        prop_assert_eq!(x <= y, a <= b);
        prop_assert_eq!(x > y, a > b);
        prop_assert_eq!(x >= y, a >= b);
        prop_assert_eq!(x == y, y == x);
        prop_assert_eq!(x.cmp(&y), a.cmp(&b));
    }

    #[test]
    fn clone_is_isolated(values in prop::collection::vec(any::<i64>(), 1..16), extra in any::<i64>()) {
        let original = DynArray::<i64>::from_slice(&values).unwrap();
        let mut copy = original.clone();
        copy[0] = copy[0].wrapping_add(1);
        copy.push_back(extra).unwrap();
        copy.erase(copy.len() - 1);
        prop_assert_eq!(original.as_slice(), &values[..]);
        prop_assert_ne!(&original, &copy);
    }

    #[test]
    fn checked_access_follows_length(values in prop::collection::vec(any::<i32>(), 1..16)) {
        let array = DynArray::<i32>::from_slice(&values).unwrap();
        let len = array.len();
        prop_assert_eq!(array.at(len - 1), Ok(&values[len - 1]));
        prop_assert!(array.at(len).is_err());
    }
}
