//! Error types for superres-core operations.
//!
//! Every precondition of the image container is checked at the boundary and
//! reported as an [`Error`]. Nothing is clamped or repaired: a failed check
//! leaves the image exactly as it was before the call.
//!
//! # Categories
//!
//! - [`Range`](Error::Range) - pixel values outside the accepted interval
//! - [`SizeMismatch`](Error::SizeMismatch) - channel shape differs from the image
//! - [`InvalidArgument`](Error::InvalidArgument) - malformed parameters
//! - [`InvalidState`](Error::InvalidState) - operation needs a populated image
//! - [`Index`](Error::Index) - channel or pixel index out of range
//!
//! # Usage
//!
//! ```rust
//! use superres_core::{Error, ErrorKind, PixelImage};
//!
//! let image = PixelImage::new();
//! let err = image.channel(0).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::Index);
//! ```

use crate::channel::ImageSize;
use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by [`PixelImage`](crate::PixelImage) and friends.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A pixel value lies outside the accepted interval.
    ///
    /// Raw input must be within `[0, 255]`; stored channel values must be
    /// within `[0, 1]`. NaN is always out of range.
    #[error("pixel value {value} outside valid range [{min}, {max}]")]
    Range {
        /// Offending value
        value: f64,
        /// Lower bound of the interval
        min: f64,
        /// Upper bound of the interval
        max: f64,
    },

    /// A channel's shape differs from the established image size.
    #[error("channel size mismatch: {expected} expected, {got} given")]
    SizeMismatch {
        /// Size of the image
        expected: ImageSize,
        /// Size of the rejected channel
        got: ImageSize,
    },

    /// A parameter is malformed (non-positive size, bad scale, even kernel...).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The image is not in a state that supports the operation.
    #[error("invalid state: {0}")]
    InvalidState(String),

    /// A channel or pixel index is out of range.
    #[error("{what} index {index} out of bounds (count {count})")]
    Index {
        /// What was indexed ("channel", "pixel", ...)
        what: &'static str,
        /// Requested index
        index: usize,
        /// Number of valid entries
        count: usize,
    },
}

/// Discriminant of [`Error`], for callers that branch on the failure class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`Error::Range`].
    Range,
    /// See [`Error::SizeMismatch`].
    SizeMismatch,
    /// See [`Error::InvalidArgument`].
    InvalidArgument,
    /// See [`Error::InvalidState`].
    InvalidState,
    /// See [`Error::Index`].
    Index,
}

impl Error {
    /// Creates an [`Error::Range`] error.
    #[inline]
    pub fn range(value: f64, min: f64, max: f64) -> Self {
        Self::Range { value, min, max }
    }

    /// Creates an [`Error::SizeMismatch`] error.
    #[inline]
    pub fn size_mismatch(expected: ImageSize, got: ImageSize) -> Self {
        Self::SizeMismatch { expected, got }
    }

    /// Creates an [`Error::InvalidArgument`] error.
    #[inline]
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Creates an [`Error::InvalidState`] error.
    #[inline]
    pub fn invalid_state(msg: impl Into<String>) -> Self {
        Self::InvalidState(msg.into())
    }

    /// Creates an [`Error::Index`] error.
    #[inline]
    pub fn index(what: &'static str, index: usize, count: usize) -> Self {
        Self::Index { what, index, count }
    }

    /// Returns the failure class of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Range { .. } => ErrorKind::Range,
            Self::SizeMismatch { .. } => ErrorKind::SizeMismatch,
            Self::InvalidArgument(_) => ErrorKind::InvalidArgument,
            Self::InvalidState(_) => ErrorKind::InvalidState,
            Self::Index { .. } => ErrorKind::Index,
        }
    }
}
