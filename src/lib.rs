//! # Holdall: allocator-aware containers and byte strings
//!
//! This crate provides a small family of containers whose storage
//! decisions are delegated to strategy objects chosen at construction,
//! plus a NUL-terminated byte string and a layer of range-checked
//! algorithms over all of them.
//!
//! ## Key pieces
//!
//! - **[`FlexVec`]** — contiguous dynamic array over an
//!   [`ArrayAllocator`] strategy; pair it with [`SlabAllocator`] to keep
//!   small arrays off the per-growth heap path
//! - **[`RingDeque`]** — circular buffer with a pluggable
//!   [`OverflowPolicy`] deciding what a push onto a full buffer does
//! - **[`ByteString`]** — NUL-terminated ASCII string with trim, split,
//!   tokenize, search, and numeric parsing
//! - **[`LinkedList`]** — sentinel-based circular doubly linked list over
//!   a [`NodePool`] strategy, with splice-by-relinking and a stable node
//!   merge sort
//! - **[`ChainHashMap`]** — chained hash map whose buckets point into one
//!   shared node chain, rehashing in place without moving payloads
//! - **[`Pair`]** — the 2-tuple building block for map entries and
//!   multi-value returns
//!
//! None of the containers synchronize access; concurrent use requires
//! external locking. Failure surfaces as [`Result`] values (or `Option`
//! for partial accessors); the indexing operators panic on contract
//! violations.
//!
//! ## Quick start
//!
//! ```rust
//! use holdall::{bformat, ByteString, ChainHashMap, FlexVec, LinkedList, OverflowPolicy, RingDeque};
//!
//! // Dynamic array with capacity tracking
//! let mut vec = FlexVec::new();
//! vec.push_back(42)?;
//! assert_eq!(vec[0], 42);
//!
//! // Ring buffer that evicts the oldest entry when full
//! let mut recent = RingDeque::with_policy(3, OverflowPolicy::DropFront)?;
//! for i in 1..=5 {
//!     recent.push_back(i)?;
//! }
//! assert_eq!(recent.len(), 3);
//!
//! // Byte string parsing
//! let mut line = ByteString::from("x=1,y=2");
//! let first = line.tokenize(b",");
//! assert_eq!(first.as_bytes(), b"x=1");
//!
//! // Chained hash map
//! let mut map = ChainHashMap::new();
//! map.insert("width", 640)?;
//! assert_eq!(map.get(&"width"), Some(&640));
//!
//! // Linked list with erase-while-iterating cursors
//! let mut list = LinkedList::new();
//! list.push_back(bformat!("item {}", 1))?;
//! assert_eq!(list.len(), 1);
//! # Ok::<(), holdall::HoldallError>(())
//! ```

#![warn(missing_docs)]
#![deny(unsafe_op_in_unsafe_fn)]

pub mod algorithms;
pub mod containers;
pub mod error;
pub mod hash_map;
pub mod list;
pub mod memory;
pub mod pair;
pub mod string;

pub use containers::{
    FlexVec, OverflowPolicy, RingDeque, DEFAULT_CAPACITY, DEFAULT_GROWTH_FACTOR,
    DEFAULT_RING_CAPACITY,
};
pub use error::{HoldallError, Result};
pub use hash_map::{ChainHashMap, DEFAULT_BUCKETS, DEFAULT_LOAD_FACTOR};
pub use list::{Cursor, CursorMut, LinkedList};
pub use memory::{
    ArrayAllocator, FixedNodePool, HeapAllocator, HeapNodePool, NodePool, PoolId, SlabAllocator,
};
pub use pair::Pair;
pub use string::{ByteString, DEFAULT_STRING_CAPACITY};
