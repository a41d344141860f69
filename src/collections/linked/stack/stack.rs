use std::fmt::{self, Debug, Formatter};
use std::marker::PhantomData;

use super::super::iter::Iter;
use super::super::node::{Link, NodePtr, SingleNode};
#[doc(inline)]
pub use crate::util::error::EmptyContainer;
use crate::util::fmt::DebugEntries;

/// A last in, first out collection built from a chain of singly linked nodes.
///
/// Only the top of the Stack is tracked. Each node links to the node pushed before it, so the
/// chain runs in reverse insertion order.
///
/// # Time Complexity
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `push` | `O(1)` |
/// | `pop` | `O(1)` |
/// | `peek` | `O(1)` |
pub struct Stack<T> {
    pub(crate) top: Link<SingleNode<T>>,
    pub(crate) len: usize,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T> Stack<T> {
    /// Creates a new, empty Stack.
    pub const fn new() -> Stack<T> {
        Stack {
            top: None,
            len: 0,
            _phantom: PhantomData,
        }
    }

    /// Returns the number of elements on the Stack.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the Stack contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.top.is_none()
    }

    /// Pushes the provided value onto the top of the Stack.
    pub fn push(&mut self, value: T) {
        self.top = Some(NodePtr::from_node(SingleNode {
            value,
            next: self.top,
        }));
        self.len += 1;
    }

    /// Removes and returns the value on top of the Stack.
    ///
    /// # Errors
    /// Returns [`EmptyContainer`] if the Stack has no elements.
    ///
    /// # Examples
    /// ```
    /// # use data_structures::collections::linked::Stack;
    /// let mut stack = Stack::new();
    /// stack.push(1);
    /// stack.push(2);
    /// assert_eq!(stack.pop(), Ok(2));
    /// assert_eq!(stack.pop(), Ok(1));
    /// assert!(stack.pop().is_err());
    /// ```
    pub fn pop(&mut self) -> Result<T, EmptyContainer> {
        let top = self.top.ok_or(EmptyContainer)?;

        // SAFETY: top is replaced by its successor below, so nothing refers to it afterwards.
        let node = unsafe { top.take_node() };
        self.top = node.next;
        self.len -= 1;

        Ok(node.value)
    }

    /// Returns a reference to the value on top of the Stack, if there is one.
    pub fn peek(&self) -> Option<&T> {
        self.top.map(|top| &top.node().value)
    }

    pub(crate) fn iter(&self) -> Iter<'_, SingleNode<T>> {
        Iter::new(self.top, self.len)
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Stack<T> {
    fn drop(&mut self) {
        while self.pop().is_ok() {}
    }
}

// SAFETY: The Stack uniquely owns every node it points to, so it can be sent across threads when T
// can.
unsafe impl<T: Send> Send for Stack<T> {}
// SAFETY: Shared access to the Stack only hands out shared references to values.
unsafe impl<T: Sync> Sync for Stack<T> {}

impl<T: Debug> Debug for Stack<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stack")
            .field("contents", &DebugEntries(self.iter()))
            .field("len", &self.len)
            .finish()
    }
}
