use std::ptr::NonNull;

pub(crate) type Link<N> = Option<NodePtr<N>>;

// NOTE: Nodes are allocated through Box<N>, so that taking a node back out of the heap moves its
// value rather than requiring a bitwise read.

/// A non-owning pointer to a heap allocated node. Ownership of every node belongs to the collection
/// holding the chain, which is responsible for calling [`take_node`](NodePtr::take_node) exactly
/// once per node.
pub(crate) struct NodePtr<N>(NonNull<N>);

impl<N> NodePtr<N> {
    pub fn from_node(node: N) -> NodePtr<N> {
        NodePtr(NonNull::from(Box::leak(Box::new(node))))
    }

    pub fn node<'a>(self) -> &'a N {
        // SAFETY: A NodePtr always points to a live node owned by the collection it is reachable
        // from, and is never used after take_node.
        unsafe { self.0.as_ref() }
    }

    pub fn node_mut<'a>(self) -> &'a mut N {
        // SAFETY: As with node, the pointer is live. Collections only hold one of these references
        // at a time for any given node.
        unsafe { &mut *self.0.as_ptr() }
    }

    /// Moves the node off of the heap, deallocating it.
    ///
    /// # Safety
    /// The pointer must not be used again after this call, including through any copies of it
    /// still held by neighbouring nodes or the collection itself.
    pub unsafe fn take_node(self) -> N {
        // SAFETY: The pointer was created by Box::leak in from_node and, per the caller's
        // guarantee, hasn't been reclaimed yet.
        unsafe { *Box::from_raw(self.0.as_ptr()) }
    }
}

impl<N> Clone for NodePtr<N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<N> Copy for NodePtr<N> {}

impl<N> PartialEq for NodePtr<N> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<N> Eq for NodePtr<N> {}

/// A node with a single forward link, used by [`LinkedList`](super::LinkedList) and
/// [`Stack`](super::Stack).
pub(crate) struct SingleNode<T> {
    pub value: T,
    pub next: Link<SingleNode<T>>,
}

/// A node with links in both directions, used by [`Queue`](super::Queue).
pub(crate) struct DoubleNode<T> {
    pub value: T,
    pub next: Link<DoubleNode<T>>,
    pub prev: Link<DoubleNode<T>>,
}

/// A node that can be walked by [`Iter`](super::iter::Iter).
pub(crate) trait Linked: Sized {
    type Value;

    fn value(&self) -> &Self::Value;

    /// The node visited after this one when walking the chain in order.
    fn following(&self) -> Link<Self>;
}

impl<T> Linked for SingleNode<T> {
    type Value = T;

    fn value(&self) -> &T {
        &self.value
    }

    fn following(&self) -> Link<Self> {
        self.next
    }
}

impl<T> Linked for DoubleNode<T> {
    type Value = T;

    fn value(&self) -> &T {
        &self.value
    }

    // Queues are walked from their oldest element, the tail, towards the newest.
    fn following(&self) -> Link<Self> {
        self.prev
    }
}
