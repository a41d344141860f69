//! A small set of generic containers written from scratch: a growable array list, a singly linked
//! list, a stack and a queue.
//!
//! # Purpose
//! This crate exists to demonstrate manual memory management and pointer bookkeeping, with no
//! expectation for it to be used in production. None of the collections are built on [`Vec`] or
//! the standard collections.
//!
//! # Error Handling
//! Errors are strongly typed. Each collection returns the specific error for an operation, such as
//! [`IndexOutOfBounds`](collections::error::IndexOutOfBounds) or
//! [`EmptyContainer`](collections::error::EmptyContainer), via a [`Result`], and never mutates
//! itself before failing. All of them convert into
//! [`CollectionError`](collections::error::CollectionError). The only panicking surface is the
//! [`Index`](std::ops::Index) operator, which panics with the message of the underlying error.
//!
//! # Features
//! Each collection can be enabled on its own (`array-list`, `linked-list`, `stack`, `queue`), or in
//! groups through `contiguous`, `linked` and `collections-all` (the default).
//!
//! # Dependencies
//! This crate depends on `derive_more` for its error types, because the derives remove the need for
//! some very repetitive programming.

#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod collections;

pub(crate) mod util;
