//! A module containing [`ArrayList`], a contiguous collection that grows by a fixed increment.
//!
//! Borrowed iteration is provided through [`Deref<Target = [T]>`](std::ops::Deref), which only ever
//! exposes the initialized elements.

mod array_list;
mod tests;

pub use array_list::*;
