use rand::Rng;
use red_black_collections::compare::Natural;
use red_black_collections::red_black_tree::{RedBlackMap, RedBlackSet};
use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;

const NUM_OF_OPERATIONS: usize = 10_000;

#[test]
fn int_test_red_black_map() {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
    let mut map = RedBlackMap::new();
    let mut expected = BTreeMap::new();

    for i in 0..NUM_OF_OPERATIONS {
        let key = rng.gen_range(0, 5_000);
        let val = rng.gen::<u32>();

        assert_eq!(map.insert(key, val).unwrap(), expected.insert(key, val));
        if i % 100 == 0 {
            map.check_invariants().unwrap();
        }
    }
    map.check_invariants().unwrap();

    assert_eq!(map.len(), expected.len());
    assert_eq!(map.min(), expected.keys().next());
    assert_eq!(map.max(), expected.keys().next_back());
    assert_eq!(
        map.iter().collect::<Vec<(&u32, &u32)>>(),
        expected.iter().collect::<Vec<(&u32, &u32)>>(),
    );

    for key in 0..5_000 {
        assert_eq!(map.contains_key(&key), expected.contains_key(&key));
        assert_eq!(map.get(&key), expected.get(&key));
    }

    assert_eq!(
        map.into_iter().collect::<Vec<(u32, u32)>>(),
        expected.into_iter().collect::<Vec<(u32, u32)>>(),
    );
}

#[test]
fn int_test_sorted_inserts_stay_balanced() {
    let mut ascending = RedBlackSet::new();
    let mut descending = RedBlackSet::new();
    for key in 0..NUM_OF_OPERATIONS {
        ascending.insert(key).unwrap();
        descending.insert(NUM_OF_OPERATIONS - key).unwrap();
    }
    ascending.check_invariants().unwrap();
    descending.check_invariants().unwrap();
    assert_eq!(ascending.len(), NUM_OF_OPERATIONS);
    assert!(ascending.iter().zip(0..).all(|(key, expected)| *key == expected));
}

#[test]
fn int_test_single_node_chunks() {
    let mut map = RedBlackMap::with_chunk_size(Natural, 1);
    for key in (0..2_000u32).rev() {
        map.insert(key, key + 1).unwrap();
    }
    map.check_invariants().unwrap();
    assert_eq!(
        map.into_iter().collect::<Vec<(u32, u32)>>(),
        (0..2_000).map(|key| (key, key + 1)).collect::<Vec<(u32, u32)>>(),
    );
}

#[test]
fn int_test_update_semantics() {
    let mut map = RedBlackMap::new();
    map.insert("k", 1).unwrap();
    assert_eq!(map.insert("k", 2).unwrap(), Some(1));
    assert_eq!(map.len(), 1);
    assert!(map.contains_key(&"k"));
    assert_eq!(map.get(&"k"), Some(&2));
    map.check_invariants().unwrap();
}

#[test]
fn int_test_scenario_in_order() {
    let mut set = RedBlackSet::new();
    for key in &[5, 3, 8, 1, 4, 7, 9, 2, 6] {
        set.insert(*key).unwrap();
    }
    set.check_invariants().unwrap();
    assert_eq!(
        set.iter().cloned().collect::<Vec<u32>>(),
        vec![1, 2, 3, 4, 5, 6, 7, 8, 9],
    );
}

#[test]
fn int_test_empty_set() {
    let set: RedBlackSet<u32> = RedBlackSet::new();
    assert_eq!(set.len(), 0);
    assert!(!set.contains(&0));
    assert_eq!(set.iter().next(), None);

    let map: RedBlackMap<u32, u32> = RedBlackMap::new();
    assert!(!map.iter().has_next());
}

#[test]
fn int_test_set_algebra() {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([2, 2, 2, 2]);
    let mut a = RedBlackSet::new();
    let mut b = RedBlackSet::new();
    let mut expected_a = BTreeSet::new();
    let mut expected_b = BTreeSet::new();

    for _ in 0..NUM_OF_OPERATIONS {
        let key = rng.gen_range(0, 2_000);
        if rng.gen::<bool>() {
            a.insert(key).unwrap();
            expected_a.insert(key);
        } else {
            b.insert(key).unwrap();
            expected_b.insert(key);
        }
    }

    let union = a.union(&b).unwrap();
    let intersection = a.intersection(&b).unwrap();
    let difference = a.difference(&b).unwrap();
    for set in &[&union, &intersection, &difference] {
        set.check_invariants().unwrap();
    }

    assert_eq!(
        union.iter().collect::<Vec<&u32>>(),
        expected_a.union(&expected_b).collect::<Vec<&u32>>(),
    );
    assert_eq!(
        intersection.iter().collect::<Vec<&u32>>(),
        expected_a.intersection(&expected_b).collect::<Vec<&u32>>(),
    );
    assert_eq!(
        difference.iter().collect::<Vec<&u32>>(),
        expected_a.difference(&expected_b).collect::<Vec<&u32>>(),
    );
    assert_eq!(union.len() + intersection.len(), a.len() + b.len());
}

#[test]
fn int_test_copy_shares_values() {
    let mut map = RedBlackMap::new();
    let value = Rc::new(String::from("shared"));
    map.insert(1, Rc::clone(&value)).unwrap();

    let copy = map.copy().unwrap();
    assert!(Rc::ptr_eq(&copy[&1], &value));
    assert_eq!(Rc::strong_count(&value), 3);

    drop(map);
    assert_eq!(Rc::strong_count(&value), 2);
    assert_eq!(copy.get(&1).map(|value| value.as_str()), Some("shared"));
}

#[test]
fn int_test_bincode_round_trip() {
    let mut map = RedBlackMap::new();
    for key in 0..100u32 {
        map.insert(key, key * 2).unwrap();
    }

    let bytes = bincode::serialize(&map).unwrap();
    let decoded: RedBlackMap<u32, u32> = bincode::deserialize(&bytes).unwrap();
    decoded.check_invariants().unwrap();
    assert_eq!(decoded, map);
}
