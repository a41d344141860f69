//! A module containing [`Stack`], a linked last in, first out collection.

mod stack;

pub use stack::*;
