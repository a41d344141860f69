//! A module containing [`LinkedList`], a singly linked list with access to both ends.

mod linked_list;
mod tests;

pub use linked_list::*;
