//! Array-backed container types
//!
//! - [`FlexVec<T, A>`](FlexVec) — contiguous, capacity-tracked dynamic
//!   array over a swappable allocation strategy
//! - [`RingDeque<T, A>`](RingDeque) — circular buffer layered on the
//!   array's storage, with a pluggable [`OverflowPolicy`]

pub mod flex_vec;
pub mod ring_deque;

pub use flex_vec::{FlexVec, DEFAULT_CAPACITY, DEFAULT_GROWTH_FACTOR};
pub use ring_deque::{OverflowPolicy, RingDeque, RingIter, DEFAULT_RING_CAPACITY};
