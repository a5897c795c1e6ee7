//! Property-based tests for the store's capacity and mutation invariants.

use proptest::prelude::*;
use seqstore::{Element, INLINE_CAPACITY, SequenceStore};

// =============================================================================
// Test helpers
// =============================================================================

/// A mutation applied to both the store and a `Vec` model.
#[derive(Clone, Debug)]
enum Op {
    Push(Element),
    Pop,
    Insert { pos_pct: f64, value: Element },
    InsertMany { pos_pct: f64, values: Vec<Element> },
    Remove { pos_pct: f64 },
    Erase { pos_pct: f64, len_pct: f64 },
    Resize(usize),
    Shrink,
    Clear,
}

fn arbitrary_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => any::<Element>().prop_map(Op::Push),
        2 => Just(Op::Pop),
        2 => (0.0..1.0f64, any::<Element>())
            .prop_map(|(pos_pct, value)| Op::Insert { pos_pct, value }),
        2 => (0.0..=1.0f64, prop::collection::vec(any::<Element>(), 1..16))
            .prop_map(|(pos_pct, values)| Op::InsertMany { pos_pct, values }),
        2 => (0.0..1.0f64).prop_map(|pos_pct| Op::Remove { pos_pct }),
        1 => (0.0..1.0f64, 0.0..=1.0f64)
            .prop_map(|(pos_pct, len_pct)| Op::Erase { pos_pct, len_pct }),
        1 => (1usize..48).prop_map(Op::Resize),
        1 => Just(Op::Shrink),
        1 => Just(Op::Clear),
    ]
}

fn position(pct: f64, len: usize) -> usize {
    ((pct * len as f64) as usize).min(len.saturating_sub(1))
}

fn apply(store: &mut SequenceStore, model: &mut Vec<Element>, op: &Op) {
    let len = model.len();
    match op {
        Op::Push(value) => {
            store.push(*value).unwrap();
            model.push(*value);
        }
        Op::Pop => match model.pop() {
            Some(value) => assert_eq!(store.pop(), Ok(value)),
            None => assert!(store.pop().is_err()),
        },
        Op::Insert { pos_pct, value } => {
            if len == 0 {
                assert!(store.insert(0, *value).is_err());
                return;
            }
            let index = position(*pos_pct, len);
            store.insert(index, *value).unwrap();
            model.insert(index, *value);
        }
        Op::InsertMany { pos_pct, values } => {
            let index = ((*pos_pct * len as f64) as usize).min(len);
            assert_eq!(store.insert_many(index, values), Ok(values.len()));
            for (offset, value) in values.iter().enumerate() {
                model.insert(index + offset, *value);
            }
        }
        Op::Remove { pos_pct } => {
            if len == 0 {
                assert!(store.remove(0).is_err());
                return;
            }
            let index = position(*pos_pct, len);
            assert_eq!(store.remove(index), Ok(model.remove(index)));
        }
        Op::Erase { pos_pct, len_pct } => {
            if len == 0 {
                return;
            }
            let index = position(*pos_pct, len);
            // the erased span has to stop before the last element
            let max_len = len - index - 1;
            if max_len == 0 {
                assert!(store.erase(index, 1).is_err());
                return;
            }
            let length = ((*len_pct * max_len as f64) as usize).clamp(1, max_len);
            assert_eq!(store.erase(index, length), Ok(length));
            let _ = model.drain(index..index + length);
        }
        Op::Resize(size) => {
            store.resize(*size).unwrap();
            model.truncate(*size);
        }
        Op::Shrink => {
            if len == 0 {
                assert!(store.shrink_to_fit().is_err());
            } else {
                store.shrink_to_fit().unwrap();
            }
        }
        Op::Clear => {
            store.clear();
            model.clear();
        }
    }
}

fn check_invariants(store: &SequenceStore) {
    assert!(store.capacity() >= INLINE_CAPACITY);
    assert!(store.len() <= store.capacity());
    if store.capacity() == INLINE_CAPACITY {
        assert!(store.is_inline());
    } else {
        assert!(!store.is_inline());
    }
}

fn store_of(items: &[Element]) -> SequenceStore {
    let mut store = SequenceStore::new();
    for &item in items {
        store.push(item).unwrap();
    }
    store
}

// =============================================================================
// Model equivalence and capacity invariants
// =============================================================================

proptest! {
    #[test]
    fn matches_vec_model(ops in prop::collection::vec(arbitrary_op(), 1..64)) {
        let mut store: SequenceStore = SequenceStore::new();
        let mut model = Vec::new();
        for op in &ops {
            apply(&mut store, &mut model, op);
            check_invariants(&store);
            prop_assert_eq!(store.as_slice(), model.as_slice());
        }
    }

    #[test]
    fn push_then_pop_round_trips(
        items in prop::collection::vec(any::<Element>(), 0..40),
        value in any::<Element>(),
    ) {
        let mut store = store_of(&items);
        let len = store.len();
        store.push(value).unwrap();
        prop_assert_eq!(store.pop(), Ok(value));
        prop_assert_eq!(store.len(), len);
        prop_assert_eq!(store.as_slice(), items.as_slice());
    }

    #[test]
    fn insert_then_remove_restores(
        items in prop::collection::vec(any::<Element>(), 1..40),
        pos_pct in 0.0..1.0f64,
        value in any::<Element>(),
    ) {
        let mut store = store_of(&items);
        let index = position(pos_pct, items.len());
        store.insert(index, value).unwrap();
        prop_assert_eq!(store[index], value);
        prop_assert_eq!(store.remove(index), Ok(value));
        prop_assert_eq!(store.as_slice(), items.as_slice());
    }

    #[test]
    fn clones_do_not_alias(
        items in prop::collection::vec(any::<Element>(), 1..40),
        value in any::<Element>(),
    ) {
        let mut source = store_of(&items);
        let mut copy = source.try_clone().unwrap();
        prop_assert_eq!(copy.capacity(), source.capacity());

        source.fill(value).unwrap();
        prop_assert_eq!(copy.as_slice(), items.as_slice());

        copy.push(value).unwrap();
        copy.set(0, value.wrapping_add(1)).unwrap();
        prop_assert!(source.iter().all(|&x| x == value));
        prop_assert_eq!(source.len(), items.len());
    }

    #[test]
    fn fill_range_is_idempotent(
        items in prop::collection::vec(any::<Element>(), 1..40),
        pos_pct in 0.0..1.0f64,
        len_pct in 0.0..=1.0f64,
        value in any::<Element>(),
    ) {
        let mut store = store_of(&items);
        let index = position(pos_pct, items.len());
        let max_len = items.len() - index;
        let length = ((len_pct * max_len as f64) as usize).clamp(1, max_len);

        store.fill_range(index, length, value).unwrap();
        let once = store.clone();
        store.fill_range(index, length, value).unwrap();
        prop_assert_eq!(&store, &once);
        prop_assert_eq!(store.capacity(), once.capacity());
    }

    #[test]
    fn resize_round_trip_keeps_prefix(
        items in prop::collection::vec(any::<Element>(), 0..60),
        size in 1usize..80,
    ) {
        let mut store = store_of(&items);
        let original_capacity = store.capacity();

        store.resize(size).unwrap();
        check_invariants(&store);
        store.resize(original_capacity).unwrap();
        check_invariants(&store);

        let kept = size.min(items.len());
        prop_assert_eq!(store.len(), kept);
        prop_assert_eq!(store.as_slice(), &items[..kept]);
    }

    #[test]
    fn raw_array_capacity_is_double(items in prop::collection::vec(any::<Element>(), 1..40)) {
        let store: SequenceStore = SequenceStore::from_raw_array(&items).unwrap();
        prop_assert_eq!(store.capacity(), items.len() * 2);
        prop_assert_eq!(store.is_inline(), items.len() * 2 <= INLINE_CAPACITY);
        prop_assert_eq!(store.to_vec(), items);
    }
}
