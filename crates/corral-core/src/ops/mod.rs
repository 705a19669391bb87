//! Operation objects.
//!
//! Short-lived builders created by a structure's factory method. Each one
//! borrows the structure that created it, so it cannot outlive the call
//! chain, and ends in a terminal call that returns a fresh structure or,
//! for the in-place variants, the mutated one.

mod chunk;
mod count_by;
mod select;
mod set_operation;
mod sort;

pub use chunk::Chunk;
pub use count_by::CountBy;
pub use select::{Select, Skip};
pub use set_operation::SetOperation;
pub use sort::{Direction, Sort, SortInPlace};
