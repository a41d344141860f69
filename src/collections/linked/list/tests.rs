#![cfg(test)]

use std::iter;

use super::*;
use crate::util::alloc::CountedDrop;

#[test]
fn test_insertion_order() {
    let mut list = LinkedList::new();
    assert!(list.is_empty());
    assert_eq!(list.front(), None);
    assert_eq!(list.back(), None);

    list.insert_start('a');
    list.insert_start('b');
    assert!(list.to_string().starts_with("b -> a"));

    list.insert_end('c');
    assert_eq!(list.to_string(), "b -> a -> c");
    assert_eq!(list.front(), Some(&'b'));
    assert_eq!(list.back(), Some(&'c'));
    assert_eq!(list.len(), 3);
    list.verify_links();
}

#[test]
fn test_driver_script() {
    let mut list = LinkedList::new();

    list.insert_end(500);
    for i in 0..10 {
        list.insert_start(i * 2);
    }
    list.insert_end(800);
    assert_eq!(list.remove(&18), Some(18));
    list.insert_start(99);

    assert_eq!(
        list.to_string(),
        "99 -> 16 -> 14 -> 12 -> 10 -> 8 -> 6 -> 4 -> 2 -> 0 -> 500 -> 800",
    );
    assert_eq!(list.len(), 12);
    list.verify_links();
}

#[test]
fn test_remove_head_and_tail() {
    let mut list: LinkedList<_> = (1..=4).collect();

    assert_eq!(list.remove(&1), Some(1));
    assert_eq!(list.front(), Some(&2), "Removing the head should advance it.");
    list.verify_links();

    assert_eq!(list.remove(&4), Some(4));
    assert_eq!(list.back(), Some(&3), "Removing the tail should move it back.");
    list.verify_links();

    list.insert_end(5);
    assert_eq!(list.to_string(), "2 -> 3 -> 5", "The new tail should link to later insertions.");
    list.verify_links();

    assert_eq!(list.remove(&3), Some(3));
    assert_eq!(list.to_string(), "2 -> 5");
    list.verify_links();
}

#[test]
fn test_remove_first_match_only() {
    let mut list: LinkedList<_> = [7, 1, 7, 2, 7].into_iter().collect();

    assert_eq!(list.remove(&7), Some(7));
    assert_eq!(list.to_string(), "1 -> 7 -> 2 -> 7");
    assert_eq!(list.len(), 4);
    list.verify_links();
}

#[test]
fn test_remove_only_element() {
    let mut list = LinkedList::new();
    list.insert_end(42);

    assert_eq!(list.remove(&42), Some(42));
    assert!(list.is_empty());
    assert_eq!(list.len(), 0);
    assert_eq!(list.to_string(), "");

    list.insert_end(43);
    assert_eq!(list.front(), Some(&43), "Insertion should re-establish the head.");
    assert_eq!(list.back(), Some(&43), "Insertion should re-establish the tail.");
    list.insert_end(44);
    assert_eq!(list.to_string(), "43 -> 44");
    list.verify_links();
}

#[test]
fn test_remove_missing() {
    let mut list: LinkedList<_> = (0..5).collect();
    let before = list.to_string();

    assert_eq!(list.remove(&10), None);
    assert_eq!(list.to_string(), before, "Removing a missing value should be a no-op.");
    assert_eq!(list.len(), 5);

    let mut empty: LinkedList<u8> = LinkedList::new();
    assert_eq!(empty.remove(&0), None);
    assert!(empty.is_empty());
}

#[test]
fn test_contains() {
    let list: LinkedList<_> = ["a", "b", "c"].into_iter().collect();

    assert!(list.contains(&"a"));
    assert!(list.contains(&"c"));
    assert!(!list.contains(&"d"));
    assert!(!LinkedList::<&str>::new().contains(&"a"));
}

#[test]
fn test_drop() {
    let counter = CountedDrop::new(0);
    let mut list = LinkedList::new();
    for _ in 0..5 {
        list.insert_start(counter.clone());
        list.insert_end(counter.clone());
    }

    drop(list);
    assert_eq!(counter.drops(), 10, "Every node should be released exactly once.");

    let list: LinkedList<_> = iter::repeat_with(|| counter.clone()).take(3).collect();
    drop(list);
    assert_eq!(counter.drops(), 13);
}

#[test]
fn test_equality_and_formatting() {
    let list: LinkedList<_> = (0..3).collect();
    let mut other = LinkedList::new();
    other.insert_start(2);
    other.insert_start(1);
    other.insert_start(0);

    assert_eq!(list, other, "Different construction methods should produce equal results.");
    other.insert_end(3);
    assert_ne!(list, other);

    assert_eq!(
        format!("{list:?}"),
        "LinkedList { contents: [0, 1, 2], len: 3 }",
    );
}
