use std::fmt::{self, Debug, Display, Formatter};
use std::marker::PhantomData;

use super::super::iter::Iter;
use super::super::node::{NodePtr, SingleNode};
use super::super::state::{ChainState, Empty, Ends, Full};
#[doc(inline)]
pub use crate::util::error::CapacityOverflow;
use crate::util::fmt::DebugEntries;
use crate::util::result::ResultExtension;

/// A singly linked list which tracks both of its ends, allowing insertion at either one in
/// constant time.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the LinkedList.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `front/back` | `O(1)` |
/// | `insert_start/end` | `O(1)` |
/// | `remove` | `O(n)` |
/// | `contains` | `O(n)` |
///
/// Each node only links forward, so removing a value has to scan from the head to find the node
/// before it.
pub struct LinkedList<T> {
    pub(crate) state: ChainState<SingleNode<T>>,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T> LinkedList<T> {
    /// Creates a new LinkedList with no elements.
    pub const fn new() -> LinkedList<T> {
        LinkedList {
            state: Empty,
            _phantom: PhantomData,
        }
    }

    /// Returns the length of the LinkedList.
    pub const fn len(&self) -> usize {
        self.state.len()
    }

    /// Returns true if the LinkedList contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// Returns a reference to the first element in the list, if it exists.
    pub fn front(&self) -> Option<&T> {
        match &self.state {
            Empty => None,
            Full(Ends { head, .. }) => Some(&head.node().value),
        }
    }

    /// Returns a reference to the last element in the list, if it exists.
    pub fn back(&self) -> Option<&T> {
        match &self.state {
            Empty => None,
            Full(Ends { tail, .. }) => Some(&tail.node().value),
        }
    }

    /// Adds the provided element to the start of the LinkedList, making it the new head.
    ///
    /// # Panics
    /// Panics if the length of the list would overflow [`usize`].
    ///
    /// # Examples
    /// ```
    /// # use data_structures::collections::linked::LinkedList;
    /// let mut list = LinkedList::new();
    /// list.insert_start(1);
    /// list.insert_start(2);
    /// assert_eq!(list.to_string(), "2 -> 1");
    /// ```
    pub fn insert_start(&mut self, value: T) {
        match &mut self.state {
            Empty => self.state = ChainState::single(SingleNode { value, next: None }),
            Full(ends) => {
                ends.len = ends.len.checked_add(1).ok_or(CapacityOverflow).throw();
                ends.head = NodePtr::from_node(SingleNode {
                    value,
                    next: Some(ends.head),
                });
            },
        }
    }

    /// Adds the provided element to the end of the LinkedList, making it the new tail.
    ///
    /// # Panics
    /// Panics if the length of the list would overflow [`usize`].
    ///
    /// # Examples
    /// ```
    /// # use data_structures::collections::linked::LinkedList;
    /// let mut list = LinkedList::new();
    /// list.insert_end(1);
    /// list.insert_end(2);
    /// assert_eq!(list.to_string(), "1 -> 2");
    /// ```
    pub fn insert_end(&mut self, value: T) {
        match &mut self.state {
            Empty => self.state = ChainState::single(SingleNode { value, next: None }),
            Full(ends) => {
                ends.len = ends.len.checked_add(1).ok_or(CapacityOverflow).throw();

                let node = NodePtr::from_node(SingleNode { value, next: None });
                ends.tail.node_mut().next = Some(node);
                ends.tail = node;
            },
        }
    }

    pub(crate) fn iter(&self) -> Iter<'_, SingleNode<T>> {
        match &self.state {
            Empty => Iter::new(None, 0),
            Full(Ends { len, head, .. }) => Iter::new(Some(*head), len.get()),
        }
    }

    /// Walks the chain, asserting that every node is reachable from the head exactly once and that
    /// the walk ends at the tail.
    #[cfg(test)]
    pub(crate) fn verify_links(&self) {
        match &self.state {
            Empty => {},
            Full(Ends { len, head, tail }) => {
                let mut curr = *head;
                let mut count = 1;
                while let Some(next) = curr.node().next {
                    curr = next;
                    count += 1;
                }
                assert!(curr == *tail, "The last reachable node should be the tail.");
                assert_eq!(count, len.get(), "Every node should be counted by len.");
            },
        }
    }
}

impl<T: PartialEq> LinkedList<T> {
    /// Removes the first element equal to `item`, scanning from the head, and returns it. If no
    /// element matches, the list is left unchanged and [`None`] is returned.
    ///
    /// # Examples
    /// ```
    /// # use data_structures::collections::linked::LinkedList;
    /// let mut list: LinkedList<_> = [1, 2, 3, 2].into_iter().collect();
    /// assert_eq!(list.remove(&2), Some(2));
    /// assert_eq!(list.to_string(), "1 -> 3 -> 2");
    /// assert_eq!(list.remove(&5), None);
    /// ```
    pub fn remove(&mut self, item: &T) -> Option<T> {
        let Full(ends) = &mut self.state else {
            return None;
        };

        let mut prev = None;
        let mut curr = Some(ends.head);
        while let Some(ptr) = curr {
            if ptr.node().value == *item {
                break;
            }
            prev = curr;
            curr = ptr.node().next;
        }

        let found = curr?;
        let next = found.node().next;

        match ends.len.checked_sub(1) {
            Some(new_len) => {
                ends.len = new_len;

                match prev {
                    // SAFETY: found is the head of a list with more than one element, so it is
                    // followed by another node.
                    None => ends.head = unsafe { next.unwrap_unchecked() },
                    Some(prev) => prev.node_mut().next = next,
                }

                if found == ends.tail {
                    // SAFETY: found is the tail of a list with more than one element, so it is
                    // preceded by another node.
                    ends.tail = unsafe { prev.unwrap_unchecked() };
                }
            },
            // The only node was both head and tail.
            None => self.state = Empty,
        }

        // SAFETY: found has been unlinked from the chain and from both ends.
        Some(unsafe { found.take_node() }.value)
    }

    /// Returns true if any element in the list is equal to `item`.
    pub fn contains(&self, item: &T) -> bool {
        self.iter().any(|value| value == item)
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        for item in iter {
            list.insert_end(item);
        }
        list
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        if let Full(Ends { head, .. }) = self.state {
            let mut curr = Some(head);
            while let Some(ptr) = curr {
                curr = ptr.node().next;
                // SAFETY: Each node is visited once and the list is never used again.
                drop(unsafe { ptr.take_node() });
            }
        }
    }
}

// SAFETY: The list uniquely owns every node it points to, so it can be sent across threads when T
// can.
unsafe impl<T: Send> Send for LinkedList<T> {}
// SAFETY: Shared access to the list only hands out shared references to values.
unsafe impl<T: Sync> Sync for LinkedList<T> {}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T: Debug> Debug for LinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkedList")
            .field("contents", &DebugEntries(self.iter()))
            .field("len", &self.len())
            .finish()
    }
}

impl<T: Display> Display for LinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (index, value) in self.iter().enumerate() {
            if index > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{value}")?;
        }
        Ok(())
    }
}
