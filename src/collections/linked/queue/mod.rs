//! A module containing [`Queue`], a linked first in, first out collection.

mod queue;

pub use queue::*;
