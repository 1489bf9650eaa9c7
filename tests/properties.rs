//! Property tests for ordering and red-black invariants.

use proptest::prelude::*;
use rbset::{RbTree, TreeConfig};

#[derive(Debug, Clone)]
enum Op {
    Insert(i16),
    Delete(i16),
}

fn op() -> impl Strategy<Value = Op> {
    // Narrow key range so deletes hit and duplicates appear.
    prop_oneof![
        3 => (-64i16..64).prop_map(Op::Insert),
        2 => (-64i16..64).prop_map(Op::Delete),
    ]
}

proptest! {
    #[test]
    fn traversal_is_non_decreasing(keys in prop::collection::vec(any::<i32>(), 0..256)) {
        let mut tree = RbTree::new();
        for key in &keys {
            tree.insert(*key);
        }

        let walked = tree.in_order();
        prop_assert_eq!(walked.len(), keys.len());
        prop_assert!(walked.windows(2).all(|pair| pair[0] <= pair[1]));

        let mut sorted = keys.clone();
        sorted.sort();
        prop_assert_eq!(walked, sorted);
    }

    #[test]
    fn invariants_hold_after_every_operation(ops in prop::collection::vec(op(), 0..400)) {
        let mut tree = RbTree::new();
        let mut model: Vec<i16> = Vec::new();

        for op in ops {
            match op {
                Op::Insert(key) => {
                    tree.insert(key);
                    model.push(key);
                }
                Op::Delete(key) => {
                    let expected = model.iter().position(|k| *k == key);
                    prop_assert_eq!(tree.delete(&key), expected.is_some());
                    if let Some(pos) = expected {
                        model.swap_remove(pos);
                    }
                }
            }

            let black_height = tree.validate();
            prop_assert!(black_height.is_ok(), "{:?}", black_height);
            prop_assert_eq!(black_height.unwrap(), tree.black_height());
            prop_assert_eq!(tree.len(), model.len());
        }

        model.sort();
        prop_assert_eq!(tree.in_order(), model);
    }

    #[test]
    fn search_finds_every_inserted_key(keys in prop::collection::vec(0u16..512, 1..128)) {
        let mut tree = RbTree::new();
        for key in &keys {
            let handle = tree.insert(*key);
            prop_assert_eq!(tree.key(handle), Some(key));
        }
        for key in &keys {
            let found = tree.search(key);
            prop_assert!(found.is_some());
            prop_assert_eq!(tree.key(found.unwrap()), Some(key));
        }
    }

    #[test]
    fn deleting_absent_key_changes_nothing(
        keys in prop::collection::vec(0i32..1000, 0..128),
        probe in 1000i32..2000,
    ) {
        let mut tree = RbTree::new();
        for key in &keys {
            tree.insert(*key);
        }
        let before = tree.in_order();
        let root_before = tree.root();
        let height_before = tree.height();

        prop_assert!(!tree.delete(&probe));

        prop_assert_eq!(tree.in_order(), before);
        prop_assert_eq!(tree.root(), root_before);
        prop_assert_eq!(tree.height(), height_before);
    }

    #[test]
    fn insert_then_delete_restores_traversal(
        keys in prop::collection::vec(any::<i32>(), 0..128),
        extra in any::<i32>(),
    ) {
        let mut tree = RbTree::with_config(&TreeConfig::for_test());
        for key in &keys {
            tree.insert(*key);
        }
        let before = tree.in_order();

        tree.insert(extra);
        prop_assert!(tree.delete(&extra));

        prop_assert_eq!(tree.in_order(), before);
    }

    #[test]
    fn height_stays_within_red_black_bound(keys in prop::collection::vec(any::<u32>(), 1..1024)) {
        let mut tree = RbTree::new();
        for key in &keys {
            tree.insert(*key);
        }
        let bound = 2.0 * ((keys.len() + 1) as f64).log2();
        prop_assert!(tree.height() as f64 <= bound);
    }

    #[test]
    fn neighbours_match_sorted_order(keys in prop::collection::btree_set(any::<i32>(), 1..128)) {
        let mut tree = RbTree::new();
        for key in &keys {
            tree.insert(*key);
        }
        let sorted: Vec<i32> = keys.into_iter().collect();

        for (i, key) in sorted.iter().enumerate() {
            let handle = tree.search(key).unwrap();
            let pred = tree.predecessor(handle).and_then(|h| tree.key(h)).copied();
            let succ = tree.successor(handle).and_then(|h| tree.key(h)).copied();
            prop_assert_eq!(pred, i.checked_sub(1).map(|j| sorted[j]));
            prop_assert_eq!(succ, sorted.get(i + 1).copied());
        }
    }
}
