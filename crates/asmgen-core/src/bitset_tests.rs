use crate::bitset::{STATE_CAPACITY, StateSet};

#[test]
fn set_and_get() {
    let mut set = StateSet::new();
    assert!(!set.get(3));

    set.set(3, true);
    set.set(64, true);
    set.set(STATE_CAPACITY - 1, true);
    assert!(set.get(3));
    assert!(set.get(64));
    assert!(set.get(STATE_CAPACITY - 1));
    assert!(!set.get(63));

    set.set(3, false);
    assert!(!set.get(3));
    assert_eq!(set.len(), 2);
}

#[test]
fn set_all() {
    let mut set = StateSet::new();
    set.set_all(true);
    assert_eq!(set.len(), STATE_CAPACITY);

    set.set_all(false);
    assert!(set.is_empty());
}

#[test]
fn union_and_intersection() {
    let a: StateSet = [1, 2, 130].into_iter().collect();
    let b: StateSet = [2, 3, 130].into_iter().collect();

    insta::assert_snapshot!(format!("{:?}", a.union(&b)), @"{1, 2, 3, 130}");
    insta::assert_snapshot!(format!("{:?}", a.intersection(&b)), @"{2, 130}");
}

#[test]
fn equality_is_bitwise() {
    let a: StateSet = [0, 5].into_iter().collect();
    let mut b = StateSet::singleton(5);
    assert_ne!(a, b);

    b.set(0, true);
    assert_eq!(a, b);
}

#[test]
fn iter_is_ascending() {
    let set: StateSet = [700, 0, 64, 63].into_iter().collect();
    assert_eq!(set.iter().collect::<Vec<_>>(), vec![0, 63, 64, 700]);
}

#[test]
#[should_panic(expected = "out of range")]
fn index_beyond_capacity_panics() {
    let mut set = StateSet::new();
    set.set(STATE_CAPACITY, true);
}
