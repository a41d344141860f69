//! Contiguous collection types. Namely [`ArrayList`], a buffer that grows by a fixed increment.
#![warn(missing_docs)]

#[cfg(feature = "array-list")]
pub mod array_list;

#[cfg(feature = "array-list")]
#[doc(inline)]
pub use array_list::ArrayList;
