#![cfg(test)]

use std::iter;

use super::*;
use crate::util::alloc::CountedDrop;
use crate::util::panic::assert_panics;

#[test]
fn test_growth() {
    let mut list = ArrayList::new();
    assert_eq!(list.cap(), ArrayList::<usize>::DEFAULT_CAP);
    assert!(list.is_empty());

    for i in 0..8 {
        list.add(i);
    }
    list.add(8);

    assert_eq!(list.len(), 9);
    assert_eq!(list.cap(), 16, "Capacity should grow by a fixed increment of 8.");
    assert_eq!(&*list.to_array(), &[0, 1, 2, 3, 4, 5, 6, 7, 8]);

    for i in 9..16 {
        list.add(i);
    }
    assert_eq!(list.cap(), 24, "Filling the buffer should grow it again.");
    assert!(list.len() < list.cap(), "The buffer should always keep a free slot.");
}

#[test]
fn test_insert() {
    let mut list: ArrayList<_> = (0..5).collect();

    list.insert(0, 10).unwrap();
    list.insert(3, 20).unwrap();
    assert_eq!(&*list, &[10, 0, 1, 20, 2, 3, 4]);

    let mut added = list.clone();
    list.insert(list.len(), 30).unwrap();
    added.add(30);
    assert_eq!(list, added, "Inserting at len should be equivalent to adding.");

    list.insert(4, 40).unwrap();
    assert_eq!(list.len(), 9);
    assert_eq!(list.cap(), 16, "Insertion should grow the buffer when it fills.");
    assert_eq!(&*list, &[10, 0, 1, 20, 40, 2, 3, 4, 30]);
}

#[test]
fn test_insert_out_of_bounds() {
    let mut list: ArrayList<_> = (0..3).collect();

    assert_eq!(list.insert(4, 100), Err(IndexOutOfBounds { index: 4, len: 3 }));
    assert_eq!(&*list, &[0, 1, 2], "A failed insertion should leave the list unchanged.");
    assert_eq!(list.cap(), 8);
}

#[test]
fn test_remove() {
    let mut list: ArrayList<_> = (0..6).collect();

    assert_eq!(list.remove(0), Ok(0));
    assert_eq!(list.remove(2), Ok(3));
    assert_eq!(list.remove(list.len() - 1), Ok(5));
    assert_eq!(&*list, &[1, 2, 4]);

    assert_eq!(list.remove(3), Err(IndexOutOfBounds { index: 3, len: 3 }));
    assert_eq!(&*list, &[1, 2, 4], "A failed removal should leave the list unchanged.");

    let counter = CountedDrop::new(0);
    let mut list: ArrayList<_> = iter::repeat_with(|| counter.clone()).take(4).collect();
    let removed = list.remove(1).unwrap();
    assert_eq!(counter.drops(), 0, "Removal should move the value out without dropping it.");
    drop(removed);
    drop(list);
    assert_eq!(counter.drops(), 4, "Every element should be dropped exactly once.");
}

#[test]
fn test_count_tracks_adds_and_removes() {
    let mut list = ArrayList::new();
    let mut expected = 0_usize;

    for i in 0..40 {
        list.add(i);
        expected += 1;
        if i % 3 == 0 {
            list.remove(0).unwrap();
            expected -= 1;
        }
        assert_eq!(list.len(), expected);
        assert_eq!(list.to_array().len(), list.len());
    }
}

#[test]
fn test_access() {
    let mut list: ArrayList<_> = (0..4).collect();

    assert_eq!(list.get(2), Ok(&2));
    *list.get_mut(2).unwrap() = 12;
    list[3] = 13;
    assert_eq!(list[2], 12);
    assert_eq!(list[3], 13);

    assert_eq!(list.get(4), Err(IndexOutOfBounds { index: 4, len: 4 }));
    assert!(list.get_mut(4).is_err());
    assert_eq!(
        list.get(4).unwrap_err().to_string(),
        "index 4 out of bounds for collection with 4 elements",
    );

    assert_panics!({
        let list: ArrayList<u8> = ArrayList::new();
        list[0]
    });
}

#[test]
fn test_clear() {
    let counter = CountedDrop::new(0);
    let mut list: ArrayList<_> = iter::repeat_with(|| counter.clone()).take(20).collect();
    assert_eq!(list.cap(), 24);

    list.clear();
    assert_eq!(counter.drops(), 20, "Clearing should drop every element.");
    assert!(list.is_empty());
    assert_eq!(list.cap(), ArrayList::<CountedDrop>::DEFAULT_CAP);

    list.add(counter.clone());
    assert_eq!(list.len(), 1);
}

#[test]
fn test_trim() {
    let mut list: ArrayList<_> = (0..10).collect();
    assert_eq!(list.cap(), 16);

    list.trim();
    assert_eq!(list.cap(), 11, "Trimming should leave exactly one free slot.");
    assert_eq!(&*list, &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);

    list.add(10);
    assert_eq!(list.cap(), 19, "Adding into the free slot should grow from the trimmed size.");
    assert_eq!(&*list, &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);

    let mut empty: ArrayList<u8> = ArrayList::new();
    empty.trim();
    assert_eq!(empty.cap(), 1);
    empty.add(1);
    assert_eq!(&*empty, &[1]);
}

#[test]
fn test_realloc_rejects_small_sizes() {
    let mut list: ArrayList<_> = (0..5).collect();

    assert_eq!(list.realloc(4), Err(InvalidSize { requested: 4, len: 5 }));
    assert_eq!(list.cap(), 8, "A rejected reallocation should keep the old buffer.");
    assert_eq!(&*list, &[0, 1, 2, 3, 4]);
}

#[test]
fn test_drop() {
    let counter = CountedDrop::new(0);
    let mut list: ArrayList<_> = iter::repeat_with(|| counter.clone()).take(10).collect();
    list.trim();
    list.insert(3, counter.clone()).unwrap();

    drop(list);
    assert_eq!(counter.drops(), 11, "11 elements should have been dropped.");
}

#[test]
fn test_clone_and_equality() {
    let list: ArrayList<_> = (0..12).collect();
    let cloned = list.clone();

    assert_eq!(list, cloned);
    assert_eq!(cloned.cap(), list.cap(), "Cloning should preserve capacity.");
    assert_ne!(list, (0..11).collect::<ArrayList<_>>());
}

#[test]
fn test_formatting() {
    let mut list = ArrayList::new();
    assert_eq!(list.to_string(), "[ ]");

    list.add(1);
    list.add(2);
    list.add(3);
    assert_eq!(list.to_string(), "[ 1 2 3 ]");
    assert_eq!(
        format!("{list:?}"),
        "ArrayList { contents: [1, 2, 3], len: 3, cap: 8 }",
    );
}
