//! Error handling for the holdall library
//!
//! Container operations report contract violations through a single error
//! enum. Panics are reserved for the indexing operators; everything else
//! that can fail returns [`Result`].

use thiserror::Error;

/// Main error type for the holdall library
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HoldallError {
    /// Index outside the valid extent of a container
    #[error("Out of bounds: index {index}, size {size}")]
    OutOfBounds {
        /// The invalid index
        index: usize,
        /// The valid size/length
        size: usize,
    },

    /// Half-open range argument with start past end
    #[error("Invalid range: start {start} > end {end}")]
    InvalidRange {
        /// Start of the rejected range
        start: usize,
        /// End of the rejected range
        end: usize,
    },

    /// Removal or front/back access on an empty container
    #[error("Underflow: {operation} on empty container")]
    Underflow {
        /// The operation that underflowed
        operation: &'static str,
    },

    /// Push onto a full ring buffer under a policy that forbids growth
    #[error("Overflow: buffer full at capacity {capacity}")]
    Overflow {
        /// Capacity of the full buffer
        capacity: usize,
    },

    /// Allocator returned no storage for a nonzero request
    #[error("Allocation failed: requested {size} bytes")]
    AllocationFailure {
        /// Number of bytes requested
        size: usize,
    },

    /// Lookup for a key that is not mapped
    #[error("Key not found")]
    KeyNotFound,

    /// Structural operation across containers with incompatible allocators
    #[error("Allocator mismatch: {message}")]
    AllocatorMismatch {
        /// Description of the incompatibility
        message: &'static str,
    },
}

impl HoldallError {
    /// Create an out of bounds error
    #[inline]
    pub fn out_of_bounds(index: usize, size: usize) -> Self {
        Self::OutOfBounds { index, size }
    }

    /// Create an invalid range error
    #[inline]
    pub fn invalid_range(start: usize, end: usize) -> Self {
        Self::InvalidRange { start, end }
    }

    /// Create an underflow error
    #[inline]
    pub fn underflow(operation: &'static str) -> Self {
        Self::Underflow { operation }
    }

    /// Create an overflow error
    #[inline]
    pub fn overflow(capacity: usize) -> Self {
        Self::Overflow { capacity }
    }

    /// Create an allocation failure error
    #[inline]
    pub fn allocation_failure(size: usize) -> Self {
        Self::AllocationFailure { size }
    }

    /// Create an allocator mismatch error
    #[inline]
    pub fn allocator_mismatch(message: &'static str) -> Self {
        Self::AllocatorMismatch { message }
    }

    /// Get the error category for logging/metrics
    pub fn category(&self) -> &'static str {
        match self {
            Self::OutOfBounds { .. } => "bounds",
            Self::InvalidRange { .. } => "range",
            Self::Underflow { .. } => "underflow",
            Self::Overflow { .. } => "overflow",
            Self::AllocationFailure { .. } => "memory",
            Self::KeyNotFound => "lookup",
            Self::AllocatorMismatch { .. } => "allocator",
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, HoldallError>;

/// Assert that an index is within bounds
#[inline]
pub fn check_bounds(index: usize, size: usize) -> Result<()> {
    if index >= size {
        Err(HoldallError::out_of_bounds(index, size))
    } else {
        Ok(())
    }
}

/// Assert that a half-open range is within bounds.
///
/// `end == size` is permitted so ranges can address one past the last
/// element.
#[inline]
pub fn check_range(start: usize, end: usize, size: usize) -> Result<()> {
    if start > end {
        return Err(HoldallError::invalid_range(start, end));
    }
    if end > size {
        return Err(HoldallError::out_of_bounds(end, size));
    }
    Ok(())
}
