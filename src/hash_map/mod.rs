//! Chained hash map over a shared node chain

pub mod chain_map;

pub use chain_map::{ChainHashMap, MapEntry, MapIter, DEFAULT_BUCKETS, DEFAULT_LOAD_FACTOR};
