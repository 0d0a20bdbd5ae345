//! NUL-terminated byte string and its text algorithms

pub mod byte_string;
mod text;

pub use byte_string::{ByteString, DEFAULT_STRING_CAPACITY};
