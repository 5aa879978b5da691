//! Error types for fallible staging operations.
//!
//! The vector core itself never returns errors — its failure modes are
//! compile errors or documented undefined behavior, by contract. The
//! fallible surface is the cold path around it: aligned heap allocation
//! for staging buffers validates its inputs and reports failures here
//! instead of panicking.

use std::fmt;

/// Errors produced by the aligned allocation utilities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LanewiseError {
    /// The requested size/alignment pair does not form a valid layout.
    Layout {
        /// Requested number of entries.
        len: usize,
        /// Requested alignment in bytes.
        align: usize,
        /// What was wrong with the pair.
        reason: String,
    },
    /// The allocator refused the request.
    Allocation {
        /// Requested number of entries.
        len: usize,
        /// Requested alignment in bytes.
        align: usize,
    },
    /// An input failed validation before any allocation was attempted.
    Validation {
        /// What failed.
        reason: String,
    },
}

impl fmt::Display for LanewiseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LanewiseError::Layout { len, align, reason } => {
                write!(f, "invalid layout for {len} entries at {align}-byte alignment: {reason}")
            }
            LanewiseError::Allocation { len, align } => {
                write!(f, "allocation of {len} entries at {align}-byte alignment failed")
            }
            LanewiseError::Validation { reason } => {
                write!(f, "validation failed: {reason}")
            }
        }
    }
}

impl std::error::Error for LanewiseError {}

/// Result alias for fallible staging operations.
pub type Result<T> = std::result::Result<T, LanewiseError>;

/// Creates a [`LanewiseError::Layout`].
pub fn layout_error(len: usize, align: usize, reason: impl Into<String>) -> LanewiseError {
    LanewiseError::Layout {
        len,
        align,
        reason: reason.into(),
    }
}

/// Creates a [`LanewiseError::Allocation`].
pub fn allocation_error(len: usize, align: usize) -> LanewiseError {
    LanewiseError::Allocation { len, align }
}

/// Creates a [`LanewiseError::Validation`].
pub fn validation_error(reason: impl Into<String>) -> LanewiseError {
    LanewiseError::Validation {
        reason: reason.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_carries_the_request() {
        let error = layout_error(100, 31, "alignment must be a power of two");
        let text = format!("{error}");
        assert!(text.contains("100 entries"));
        assert!(text.contains("31-byte"));
        assert!(text.contains("power of two"));
    }

    #[test]
    fn allocation_display() {
        let text = format!("{}", allocation_error(1 << 20, 32));
        assert!(text.contains("failed"));
        assert!(text.contains("32-byte"));
    }

    #[test]
    fn errors_compare_by_value() {
        assert_eq!(allocation_error(8, 32), allocation_error(8, 32));
        assert_ne!(allocation_error(8, 32), allocation_error(16, 32));
        assert_ne!(
            validation_error("a").clone(),
            validation_error("b"),
        );
    }

    #[test]
    fn implements_the_error_trait() {
        let error = validation_error("zero-length request");
        let dynamic: &dyn std::error::Error = &error;
        assert!(dynamic.source().is_none());
    }
}
