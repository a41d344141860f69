//! Linked collection types: [`LinkedList`], [`Stack`] and [`Queue`].
//!
//! All three are chains of individually allocated nodes. The nodes are owned by the collection
//! and released one at a time as they are removed, or by walking the whole chain when the
//! collection is dropped.

#[cfg(feature = "linked-list")]
pub mod list;
#[cfg(feature = "queue")]
pub mod queue;
#[cfg(feature = "stack")]
pub mod stack;

pub(crate) mod iter;
pub(crate) mod node;
#[cfg(any(feature = "linked-list", feature = "queue"))]
pub(crate) mod length;
#[cfg(any(feature = "linked-list", feature = "queue"))]
pub(crate) mod state;

#[cfg(feature = "linked-list")]
#[doc(inline)]
pub use list::LinkedList;
#[cfg(feature = "queue")]
#[doc(inline)]
pub use queue::Queue;
#[cfg(feature = "stack")]
#[doc(inline)]
pub use stack::Stack;
