//! Textbook collection types, written from scratch.
//!
//! # Purpose
//! Each type here manages its own memory: [`ArrayList`](contiguous::ArrayList) reallocates its
//! buffer by hand and the linked types allocate, link and release their own nodes.
//!
//! # Method
//! Every fallible operation returns a [`Result`] with one of the error types from [`error`].
//! [`CollectionError`](error::CollectionError) unifies them for callers who don't care which
//! container failed.

#[cfg(feature = "array-list")]
pub mod contiguous;
#[cfg(any(feature = "linked-list", feature = "stack", feature = "queue"))]
pub mod linked;

pub mod error {
    //! Errors produced by the collections in this crate.

    pub use crate::util::error::*;
}
