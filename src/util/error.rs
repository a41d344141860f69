use derive_more::{Display, Error, From, IsVariant, TryInto};

/// An index was outside of the valid range for the operation that received it.
///
/// For reads, writes and removals the valid range is `0..len`, for insertion it is `0..=len`.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("index {index} out of bounds for collection with {len} elements")]
pub struct IndexOutOfBounds {
    pub index: usize,
    pub len: usize,
}

/// A value was requested from a container holding no elements.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("container is empty")]
pub struct EmptyContainer;

/// A buffer was requested that can't hold the elements already stored.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("requested size ({requested}) cannot be less than the current length ({len})")]
pub struct InvalidSize {
    pub requested: usize,
    pub len: usize,
}

/// Growing a buffer would overflow [`usize`].
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("capacity overflow")]
pub struct CapacityOverflow;

/// Any error produced by a collection in this crate.
#[derive(Debug, Display, Error, From, TryInto, IsVariant, Clone, Copy, PartialEq, Eq)]
pub enum CollectionError {
    IndexOutOfBounds(IndexOutOfBounds),
    EmptyContainer(EmptyContainer),
    InvalidSize(InvalidSize),
    CapacityOverflow(CapacityOverflow),
}
