use ordered_collections::red_black_tree::{RedBlackMap, RedBlackSet};
use ordered_collections::search_tree::{Error, SearchTree};
use rand::thread_rng;
use rand::Rng;
use std::vec::Vec;

#[test]
fn int_test_red_black_map() {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
    let mut map = RedBlackMap::new();
    let mut expected = Vec::new();

    for _ in 0..10_000 {
        let key = rng.gen::<u32>();
        let val = rng.gen::<u32>();

        map.insert(key, val);
        expected.push((key, val));
    }

    expected.reverse();
    expected.sort_by(|l, r| l.0.cmp(&r.0));
    expected.dedup_by_key(|pair| pair.0);

    assert_eq!(map.len(), expected.len());

    assert_eq!(map.min(), Some(&expected[0].0));
    assert_eq!(map.max(), Some(&expected[expected.len() - 1].0));

    assert_eq!(
        map.iter().collect::<Vec<_>>(),
        expected
            .iter()
            .map(|pair| (&pair.0, &pair.1))
            .collect::<Vec<_>>(),
    );

    for pair in &expected {
        assert!(map.contains_key(&pair.0));
        assert_eq!(map.get(&pair.0), Some(&pair.1));
    }

    thread_rng().shuffle(&mut expected);

    for pair in expected {
        assert_eq!(map.remove(&pair.0), Some(pair));
    }

    assert!(map.is_empty());
    assert_eq!(map.len(), 0);
}

#[test]
fn int_test_red_black_set() {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([2, 2, 2, 2]);
    let mut set = RedBlackSet::new();
    let mut expected = Vec::new();

    for _ in 0..10_000 {
        let key = rng.gen::<u32>();

        set.insert(key);
        expected.push(key);
    }

    expected.sort();
    expected.dedup();

    assert_eq!(set.len(), expected.len());
    assert_eq!(
        set.iter().collect::<Vec<_>>(),
        expected.iter().collect::<Vec<_>>(),
    );

    for key in expected {
        assert_eq!(set.remove(&key), Some(key));
    }

    assert!(set.is_empty());
}

fn check_search_tree_contract<M>(mut tree: M)
where
    M: SearchTree<u32, u32>,
{
    assert_eq!(tree.size(), 0);
    assert!(tree.is_empty());
    assert_eq!(tree.find_min(), Err(Error::EmptyCollection));
    assert_eq!(tree.find_max(), Err(Error::EmptyCollection));

    assert_eq!(tree.insert(2, 20), None);
    assert_eq!(tree.insert(1, 10), None);
    assert_eq!(tree.insert(3, 30), None);
    assert_eq!(tree.insert(2, 25), Some((2, 20)));

    assert_eq!(tree.size(), 3);
    assert_eq!(tree.find(&2), Some(&25));
    assert_eq!(tree.find(&4), None);
    assert_eq!(tree.find_min(), Ok(&1));
    assert_eq!(tree.find_max(), Ok(&3));

    assert_eq!(tree.remove(&4), None);
    assert_eq!(tree.remove(&1), Some((1, 10)));
    assert_eq!(tree.find(&1), None);
    assert_eq!(tree.find_min(), Ok(&2));
    assert_eq!(tree.size(), 2);
}

#[test]
fn int_test_search_tree_contract() {
    check_search_tree_contract(RedBlackMap::new());
}

#[test]
fn int_test_remove_last_node_reports_empty() {
    let mut map = RedBlackMap::new();
    map.insert(42, 42);

    assert_eq!(map.remove(&42), Some((42, 42)));
    assert_eq!(map.len(), 0);
    assert_eq!(map.find_min(), Err(Error::EmptyCollection));
    assert_eq!(map.find_max(), Err(Error::EmptyCollection));
}

#[test]
fn int_test_ascending_insert_ascending_remove() {
    let mut map = RedBlackMap::new();
    for key in 1..=1000u32 {
        map.insert(key, key);
        assert_eq!(map.len(), key as usize);
    }

    assert_eq!(map.min(), Some(&1));
    assert_eq!(map.max(), Some(&1000));

    for key in 1..=1000u32 {
        assert_eq!(map.remove(&key), Some((key, key)));
        if let Some(min) = map.min() {
            assert_eq!(*min, key + 1);
        }
    }

    assert!(map.is_empty());
}
