//! Allocation strategies
//!
//! Containers in this crate never call the global allocator directly;
//! they go through a strategy object chosen at construction.
//!
//! - [`ArrayAllocator`] supplies contiguous storage for
//!   [`FlexVec`](crate::FlexVec) (and everything built on it), with
//!   [`HeapAllocator`] and the small-buffer [`SlabAllocator`].
//! - [`NodePool`] supplies chain nodes for
//!   [`LinkedList`](crate::LinkedList) and
//!   [`ChainHashMap`](crate::ChainHashMap), with [`HeapNodePool`] and the
//!   bounded [`FixedNodePool`]. Pools carry a [`PoolId`] so that node
//!   interchange between containers can be validated at runtime.

pub mod array_alloc;
pub mod node_pool;

pub use array_alloc::{ArrayAllocator, HeapAllocator, SlabAllocator};
pub use node_pool::{FixedNodePool, HeapNodePool, NodePool, PoolId};
