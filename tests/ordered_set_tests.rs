//! Unit tests for OrderedSet.
//!
//! These tests cover the public API and the behaviour on both sides of the
//! inline threshold.

#![cfg(feature = "sets")]

use collecta::sets::OrderedSet;
use rstest::rstest;

#[rstest]
fn test_new_creates_empty_set() {
    let set: OrderedSet<i32> = OrderedSet::new();
    assert!(set.is_empty());
    assert_eq!(set.len(), 0);
    assert_eq!(set.first(), None);
}

#[rstest]
fn test_insert_duplicate_keeps_position() {
    let mut set = OrderedSet::new();
    set.insert("b");
    set.insert("a");
    set.insert("c");
    assert!(!set.insert("b"));
    assert_eq!(set.as_slice(), &["b", "a", "c"]);
}

#[rstest]
#[case(3)]
#[case(8)]
#[case(9)]
#[case(100)]
fn test_insertion_order_survives_any_size(#[case] size: i32) {
    let mut set = OrderedSet::new();
    for value in (0..size).rev() {
        assert!(set.insert(value));
    }
    for value in 0..size {
        assert!(!set.insert(value));
    }

    let expected: Vec<i32> = (0..size).rev().collect();
    assert_eq!(set.len(), expected.len());
    assert_eq!(set.iter().copied().collect::<Vec<_>>(), expected);
}

#[rstest]
#[case(5)]
#[case(40)]
fn test_remove_keeps_relative_order(#[case] size: i32) {
    let mut set: OrderedSet<i32> = (0..size).collect();
    assert!(set.remove(&2));
    assert!(!set.remove(&2));
    assert!(!set.contains(&2));

    let expected: Vec<i32> = (0..size).filter(|value| *value != 2).collect();
    assert_eq!(set.as_slice(), expected.as_slice());
    assert_eq!(set.index_of(&3), Some(2));
}

#[rstest]
fn test_remove_until_empty_then_reuse() {
    let mut set: OrderedSet<i32> = (0..12).collect();
    for value in 0..12 {
        assert!(set.remove(&value));
    }
    assert!(set.is_empty());

    set.insert(7);
    assert_eq!(set.as_slice(), &[7]);
}

#[rstest]
fn test_reinsert_after_remove_moves_to_end() {
    let mut set = OrderedSet::from(["a", "b", "c"]);
    set.remove("a");
    set.insert("a");
    assert_eq!(set.as_slice(), &["b", "c", "a"]);
}

#[rstest]
fn test_borrowed_lookup_with_string_elements() {
    let set: OrderedSet<String> = ["alpha", "beta"].iter().map(|name| (*name).to_string()).collect();
    assert!(set.contains("alpha"));
    assert_eq!(set.index_of("beta"), Some(1));
    assert!(!set.contains("gamma"));
}

#[rstest]
fn test_get_index_first_last() {
    let set: OrderedSet<char> = "hello".chars().collect();
    assert_eq!(set.as_slice(), &['h', 'e', 'l', 'o']);
    assert_eq!(set.get_index(2), Some(&'l'));
    assert_eq!(set.get_index(4), None);
    assert_eq!(set.first(), Some(&'h'));
    assert_eq!(set.last(), Some(&'o'));
}

#[rstest]
fn test_retain_small() {
    let mut set = OrderedSet::from([1, 2, 3, 4]);
    set.retain(|value| value % 2 == 0);
    assert_eq!(set.as_slice(), &[2, 4]);
}

#[rstest]
fn test_retain_large_down_to_small() {
    let mut set: OrderedSet<i32> = (0..30).collect();
    set.retain(|value| *value < 3);
    assert_eq!(set.as_slice(), &[0, 1, 2]);
    assert!(set.insert(30));
    assert!(!set.insert(1));
}

#[rstest]
fn test_clear() {
    let mut set: OrderedSet<i32> = (0..50).collect();
    set.clear();
    assert!(set.is_empty());
    assert!(!set.contains(&10));
}

#[rstest]
fn test_extend_skips_duplicates() {
    let mut set = OrderedSet::from([1, 2]);
    set.extend([2, 3, 1, 4]);
    assert_eq!(set.as_slice(), &[1, 2, 3, 4]);
}

#[rstest]
fn test_into_iter_and_into_vec() {
    let set = OrderedSet::from([3, 1, 2]);
    assert_eq!(set.clone().into_iter().collect::<Vec<_>>(), vec![3, 1, 2]);
    assert_eq!(set.clone().into_iter().rev().collect::<Vec<_>>(), vec![2, 1, 3]);
    assert_eq!(set.into_vec(), vec![3, 1, 2]);
}

#[rstest]
fn test_borrowed_into_iter() {
    let set = OrderedSet::from([5, 6]);
    let mut total = 0;
    for value in &set {
        total += value;
    }
    assert_eq!(total, 11);
    assert_eq!(set.iter().len(), 2);
}

#[rstest]
fn test_equality_is_order_insensitive() {
    let first = OrderedSet::from([1, 2, 3]);
    let second = OrderedSet::from([3, 1, 2]);
    let third = OrderedSet::from([1, 2]);
    assert_eq!(first, second);
    assert_ne!(first, third);
}

#[rstest]
fn test_equality_across_states() {
    let small: OrderedSet<i32> = (0..8).collect();
    let mut large: OrderedSet<i32> = (0..9).collect();
    large.remove(&8);
    assert_eq!(small, large);
}

#[rstest]
fn test_clone_is_independent() {
    let original: OrderedSet<i32> = (0..20).collect();
    let mut copy = original.clone();
    copy.remove(&0);
    copy.insert(100);
    assert_eq!(original.len(), 20);
    assert!(original.contains(&0));
    assert!(!original.contains(&100));
}

#[rstest]
fn test_display_and_debug() {
    let set = OrderedSet::from(["x", "y"]);
    assert_eq!(format!("{set}"), "{x, y}");
    assert_eq!(format!("{set:?}"), "{\"x\", \"y\"}");

    let empty: OrderedSet<i32> = OrderedSet::default();
    assert_eq!(format!("{empty}"), "{}");
}

#[rstest]
fn test_from_vec_collapses_duplicates() {
    let set = OrderedSet::from(vec![9, 9, 8, 9, 7]);
    assert_eq!(set.as_slice(), &[9, 8, 7]);
}
