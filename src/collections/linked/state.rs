use derive_more::IsVariant;

use super::length::{Length, ONE};
use super::node::NodePtr;

/// The state of a chain with both a head and a tail. Keeping the two ends inside [`Full`] means
/// that the head is present exactly when the tail is.
#[derive(IsVariant)]
pub(crate) enum ChainState<N> {
    Empty,
    Full(Ends<N>),
}

pub(crate) use ChainState::{Empty, Full};

pub(crate) struct Ends<N> {
    pub len: Length,
    pub head: NodePtr<N>,
    pub tail: NodePtr<N>,
}

impl<N> ChainState<N> {
    /// Creates a chain containing only the provided node, which is both the head and the tail.
    pub fn single(node: N) -> ChainState<N> {
        let ptr = NodePtr::from_node(node);
        Full(Ends {
            len: ONE,
            head: ptr,
            tail: ptr,
        })
    }

    pub const fn len(&self) -> usize {
        match self {
            Empty => 0,
            Full(Ends { len, .. }) => len.get(),
        }
    }
}
