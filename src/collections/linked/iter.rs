use std::iter::FusedIterator;
use std::marker::PhantomData;

use super::node::{Link, Linked};

/// A borrowed iterator over the values of a node chain, in the order given by
/// [`Linked::following`].
pub(crate) struct Iter<'a, N: Linked> {
    pub(crate) curr: Link<N>,
    pub(crate) len: usize,
    pub(crate) _phantom: PhantomData<&'a N>,
}

impl<'a, N: Linked> Iter<'a, N> {
    pub const fn new(start: Link<N>, len: usize) -> Iter<'a, N> {
        Iter {
            curr: start,
            len,
            _phantom: PhantomData,
        }
    }
}

impl<'a, N: Linked + 'a> Iterator for Iter<'a, N> {
    type Item = &'a N::Value;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.curr?.node();
        self.curr = node.following();
        self.len -= 1;
        Some(node.value())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, N: Linked + 'a> ExactSizeIterator for Iter<'a, N> {}

impl<'a, N: Linked + 'a> FusedIterator for Iter<'a, N> {}

impl<N: Linked> Clone for Iter<'_, N> {
    fn clone(&self) -> Self {
        Iter::new(self.curr, self.len)
    }
}
