use std::fmt::{self, Debug, Formatter};
use std::marker::PhantomData;

use super::super::iter::Iter;
use super::super::node::{DoubleNode, NodePtr};
use super::super::state::{ChainState, Empty, Ends, Full};
#[doc(inline)]
pub use crate::util::error::{CapacityOverflow, EmptyContainer};
use crate::util::fmt::DebugEntries;
use crate::util::result::ResultExtension;

/// A first in, first out collection built from a chain of doubly linked nodes.
///
/// The head of the chain is the most recently enqueued value and the tail is the oldest, which is
/// the next to be dequeued. `next` links run from the head towards the tail and `prev` links run
/// back again.
///
/// # Time Complexity
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `enqueue` | `O(1)` |
/// | `dequeue` | `O(1)` |
/// | `peek` | `O(1)` |
pub struct Queue<T> {
    pub(crate) state: ChainState<DoubleNode<T>>,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T> Queue<T> {
    /// Creates a new, empty Queue.
    pub const fn new() -> Queue<T> {
        Queue {
            state: Empty,
            _phantom: PhantomData,
        }
    }

    /// Returns the number of elements in the Queue.
    pub const fn len(&self) -> usize {
        self.state.len()
    }

    /// Returns true if the Queue contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// Adds the provided value to the back of the Queue, making it the new head of the chain.
    ///
    /// # Panics
    /// Panics if the length of the Queue would overflow [`usize`].
    pub fn enqueue(&mut self, value: T) {
        match &mut self.state {
            Empty => {
                self.state = ChainState::single(DoubleNode {
                    value,
                    next: None,
                    prev: None,
                });
            },
            Full(ends) => {
                ends.len = ends.len.checked_add(1).ok_or(CapacityOverflow).throw();

                let node = NodePtr::from_node(DoubleNode {
                    value,
                    next: Some(ends.head),
                    prev: None,
                });
                ends.head.node_mut().prev = Some(node);
                ends.head = node;
            },
        }
    }

    /// Removes and returns the oldest value in the Queue, found at the tail of the chain.
    ///
    /// # Errors
    /// Returns [`EmptyContainer`] if the Queue has no elements.
    ///
    /// # Examples
    /// ```
    /// # use data_structures::collections::linked::Queue;
    /// let mut queue = Queue::new();
    /// queue.enqueue(1);
    /// queue.enqueue(2);
    /// assert_eq!(queue.dequeue(), Ok(1));
    /// assert_eq!(queue.dequeue(), Ok(2));
    /// assert!(queue.dequeue().is_err());
    /// ```
    pub fn dequeue(&mut self) -> Result<T, EmptyContainer> {
        let Full(ends) = &mut self.state else {
            return Err(EmptyContainer);
        };

        // SAFETY: The tail is replaced below, and its predecessor's next link is cleared, so
        // nothing refers to the node afterwards.
        let node = unsafe { ends.tail.take_node() };

        match ends.len.checked_sub(1) {
            Some(new_len) => {
                // SAFETY: The Queue held more than one element, so the tail has a predecessor.
                let new_tail = unsafe { node.prev.unwrap_unchecked() };
                new_tail.node_mut().next = None;
                ends.tail = new_tail;
                ends.len = new_len;
            },
            // The only node was both head and tail.
            None => self.state = Empty,
        }

        Ok(node.value)
    }

    /// Returns a reference to the oldest value in the Queue, the next one to be dequeued.
    pub fn peek(&self) -> Option<&T> {
        match &self.state {
            Empty => None,
            Full(Ends { tail, .. }) => Some(&tail.node().value),
        }
    }

    /// Iterates from the oldest value to the newest.
    pub(crate) fn iter(&self) -> Iter<'_, DoubleNode<T>> {
        match &self.state {
            Empty => Iter::new(None, 0),
            Full(Ends { len, tail, .. }) => Iter::new(Some(*tail), len.get()),
        }
    }

    /// Walks the chain from head to tail, asserting that every `next` link is mirrored by a `prev`
    /// link and that the chain's ends are unlinked outwards.
    #[cfg(test)]
    pub(crate) fn verify_links(&self) {
        match &self.state {
            Empty => {},
            Full(Ends { len, head, tail }) => {
                assert!(head.node().prev.is_none(), "The head shouldn't have a predecessor.");
                let mut curr = *head;
                let mut count = 1;
                while let Some(next) = curr.node().next {
                    assert!(next.node().prev == Some(curr), "Links should be mirrored.");
                    curr = next;
                    count += 1;
                }
                assert!(curr == *tail, "The last reachable node should be the tail.");
                assert_eq!(count, len.get(), "Every node should be counted by len.");
            },
        }
    }

    #[cfg(test)]
    pub(crate) fn ends_match(&self) -> bool {
        match &self.state {
            Empty => false,
            Full(Ends { head, tail, .. }) => head == tail,
        }
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Queue<T> {
    fn drop(&mut self) {
        if let Full(Ends { head, .. }) = self.state {
            let mut curr = Some(head);
            while let Some(ptr) = curr {
                curr = ptr.node().next;
                // SAFETY: Each node is visited once and the Queue is never used again.
                drop(unsafe { ptr.take_node() });
            }
        }
    }
}

// SAFETY: The Queue uniquely owns every node it points to, so it can be sent across threads when T
// can.
unsafe impl<T: Send> Send for Queue<T> {}
// SAFETY: Shared access to the Queue only hands out shared references to values.
unsafe impl<T: Sync> Sync for Queue<T> {}

impl<T: Debug> Debug for Queue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Queue")
            .field("contents", &DebugEntries(self.iter()))
            .field("len", &self.len())
            .finish()
    }
}
