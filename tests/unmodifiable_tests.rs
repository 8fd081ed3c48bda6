//! Tests for the read-only containers and the checked mutation interface.

#![cfg(all(feature = "lists", feature = "sets"))]

use collecta::lists::{UnmodifiableList, unmodifiable_list_of};
use collecta::sets::{OrderedSet, UnmodifiableSet, unmodifiable_set_of};
use collecta::{CollectionError, ErrorKind, ListMutation, SetMutation};
use rstest::rstest;

fn read_only_list() -> UnmodifiableList<&'static str> {
    unmodifiable_list_of(Some([Some("one"), Some("two")])).unwrap()
}

fn read_only_set() -> UnmodifiableSet<&'static str> {
    unmodifiable_set_of(Some([Some("one"), Some("two")])).unwrap()
}

// =============================================================================
// Every list mutation is refused
// =============================================================================

#[rstest]
#[case::push(|list: &mut UnmodifiableList<&'static str>| list.try_push("x"))]
#[case::insert(|list: &mut UnmodifiableList<&'static str>| list.try_insert(0, "x"))]
#[case::set(|list: &mut UnmodifiableList<&'static str>| list.try_set(0, "x").map(|_| ()))]
#[case::remove_at(|list: &mut UnmodifiableList<&'static str>| list.try_remove_at(0).map(|_| ()))]
#[case::clear(|list: &mut UnmodifiableList<&'static str>| list.try_clear())]
#[case::extend(|list: &mut UnmodifiableList<&'static str>| list.try_extend(["x", "y"]))]
fn test_unmodifiable_list_refuses_mutation(
    #[case] mutation: fn(&mut UnmodifiableList<&'static str>) -> Result<(), CollectionError>,
) {
    let mut list = read_only_list();
    let error = mutation(&mut list).unwrap_err();

    assert_eq!(error.kind(), ErrorKind::UnsupportedOperation);
    assert_eq!(list.as_slice(), &["one", "two"]);
}

#[rstest]
fn test_unmodifiable_list_error_names_container_and_operation() {
    let mut list = read_only_list();
    let error = list.try_push("three").unwrap_err();
    assert_eq!(
        error,
        CollectionError::UnsupportedOperation {
            container: "UnmodifiableList",
            operation: "try_push",
        }
    );
    assert_eq!(
        error.to_string(),
        "UnmodifiableList::try_push: the container is read-only"
    );
}

// =============================================================================
// Every set mutation is refused
// =============================================================================

#[rstest]
#[case::insert(|set: &mut UnmodifiableSet<&'static str>| set.try_insert("x").map(|_| ()))]
#[case::insert_existing(|set: &mut UnmodifiableSet<&'static str>| set.try_insert("one").map(|_| ()))]
#[case::remove(|set: &mut UnmodifiableSet<&'static str>| set.try_remove(&"one").map(|_| ()))]
#[case::clear(|set: &mut UnmodifiableSet<&'static str>| set.try_clear())]
#[case::extend(|set: &mut UnmodifiableSet<&'static str>| set.try_extend(["x"]))]
fn test_unmodifiable_set_refuses_mutation(
    #[case] mutation: fn(&mut UnmodifiableSet<&'static str>) -> Result<(), CollectionError>,
) {
    let mut set = read_only_set();
    let error = mutation(&mut set).unwrap_err();

    assert_eq!(error.kind(), ErrorKind::UnsupportedOperation);
    assert_eq!(set.as_slice(), &["one", "two"]);
}

// =============================================================================
// Mutable containers through the same interface
// =============================================================================

fn push_all<L: ListMutation<i32>>(list: &mut L, values: &[i32]) -> Result<(), CollectionError> {
    for value in values {
        list.try_push(*value)?;
    }
    Ok(())
}

fn insert_all<S: SetMutation<i32>>(set: &mut S, values: &[i32]) -> Result<usize, CollectionError> {
    let mut inserted = 0;
    for value in values {
        if set.try_insert(*value)? {
            inserted += 1;
        }
    }
    Ok(inserted)
}

#[rstest]
fn test_generic_list_code_runs_on_both_shapes() {
    let mut mutable = vec![0];
    assert!(push_all(&mut mutable, &[1, 2]).is_ok());
    assert_eq!(mutable, vec![0, 1, 2]);

    let mut read_only = UnmodifiableList::from(vec![0]);
    assert!(push_all(&mut read_only, &[1, 2]).is_err());
    assert_eq!(read_only.as_slice(), &[0]);
}

#[rstest]
fn test_generic_set_code_runs_on_both_shapes() {
    let mut mutable = OrderedSet::from([1]);
    assert_eq!(insert_all(&mut mutable, &[1, 2, 3, 2]), Ok(2));
    assert_eq!(mutable.as_slice(), &[1, 2, 3]);

    let mut read_only = UnmodifiableSet::from([1]);
    assert_eq!(
        insert_all(&mut read_only, &[2]).unwrap_err().kind(),
        ErrorKind::UnsupportedOperation
    );
}

#[rstest]
fn test_ordered_set_checked_mutation() {
    let mut set = OrderedSet::from([1, 2, 3]);
    assert_eq!(set.try_remove(&2), Ok(true));
    assert_eq!(set.try_remove(&2), Ok(false));
    set.try_extend([4, 1]).unwrap();
    assert_eq!(set.as_slice(), &[1, 3, 4]);
    set.try_clear().unwrap();
    assert!(set.is_empty());
}

// =============================================================================
// Read-only views
// =============================================================================

#[rstest]
fn test_unmodifiable_list_slice_access() {
    let list = collecta::unmodifiable_list_of![10, 20, 30];
    assert_eq!(list[1], 20);
    assert_eq!(list.get(3), None);
    assert_eq!(list.iter().sum::<i32>(), 60);
    assert_eq!(list.first(), Some(&10));
    assert_eq!(list.last(), Some(&30));
}

#[rstest]
fn test_unmodifiable_list_to_vec_is_detached() {
    let list = collecta::unmodifiable_list_of!["a", "b"];
    let mut copy = list.to_vec();
    copy.push("c");
    copy[0] = "z";
    assert_eq!(list.as_slice(), &["a", "b"]);
}

#[rstest]
fn test_unmodifiable_list_display_and_debug() {
    let list = collecta::unmodifiable_list_of![1, 2, 3];
    assert_eq!(format!("{list}"), "[1, 2, 3]");
    assert_eq!(format!("{list:?}"), "[1, 2, 3]");

    let empty: UnmodifiableList<i32> = collecta::unmodifiable_list_of![];
    assert_eq!(format!("{empty}"), "[]");
}

#[rstest]
fn test_unmodifiable_list_equality() {
    let first = collecta::unmodifiable_list_of![1, 2];
    let second: UnmodifiableList<i32> = vec![1, 2].into();
    assert_eq!(first, second);
    assert_eq!(first, vec![1, 2]);
    assert_ne!(first, collecta::unmodifiable_list_of![2, 1]);
}

#[rstest]
fn test_unmodifiable_set_queries() {
    let set = collecta::unmodifiable_set_of!["b", "a", "b", "c"];
    assert_eq!(set.len(), 3);
    assert_eq!(set.index_of("c"), Some(2));
    assert_eq!(set.get_index(1), Some(&"a"));
    assert_eq!(set.first(), Some(&"b"));
    assert_eq!(set.last(), Some(&"c"));
    assert_eq!(set.iter().count(), 3);
}

#[rstest]
fn test_unmodifiable_set_to_ordered_set_is_detached() {
    let set = collecta::unmodifiable_set_of![1, 2];
    let mut copy = set.to_ordered_set();
    copy.insert(3);
    copy.remove(&1);
    assert_eq!(set.as_slice(), &[1, 2]);
    assert_eq!(copy.as_slice(), &[2, 3]);
}

#[rstest]
fn test_unmodifiable_set_equality_ignores_order() {
    let first = collecta::unmodifiable_set_of![1, 2, 3];
    let second = collecta::unmodifiable_set_of![3, 2, 1];
    assert_eq!(first, second);
    assert_eq!(first, first.clone());
}

#[rstest]
fn test_unmodifiable_set_display() {
    let set = collecta::unmodifiable_set_of!["x", "y"];
    assert_eq!(format!("{set}"), "{x, y}");
}

#[rstest]
fn test_macros_match_factories() {
    let from_macro = collecta::ordered_set_of![3, 1, 3];
    let from_factory = collecta::sets::ordered_set_of(Some([Some(3), Some(1), Some(3)])).unwrap();
    assert_eq!(from_macro.as_slice(), from_factory.as_slice());
}
