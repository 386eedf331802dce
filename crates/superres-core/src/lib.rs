//! # superres-core
//!
//! Core types for super-resolution image formation models.
//!
//! This crate provides the image container that every degradation operator
//! and reconstruction algorithm works on:
//!
//! - [`PixelImage`] - Multi-channel image, each channel a normalized `f64` plane
//! - [`Channel`] - A single row-major channel plane
//! - [`RawImage`], [`Sample`] - Raw interleaved input handed over by a loader
//! - [`Interpolation`] - Resampling modes used by the degradation operators
//! - [`VisualizationImage`] - 8-bit display composite
//! - [`ImageDataReport`] - Value statistics for diagnostics
//!
//! ## Value range
//!
//! Every channel value lives in `[0, 1]`. Raw input is accepted in `[0, 255]`
//! and normalized on construction:
//!
//! ```rust
//! use superres_core::{PixelImage, RawImage};
//!
//! let raw = RawImage::new(2, 1, 1, vec![0u8, 255]).unwrap();
//! let image = PixelImage::from_raw(&raw).unwrap();
//! assert_eq!(image.pixel_value(0, 1).unwrap(), 1.0);
//! ```
//!
//! ## Crate Structure
//!
//! ```text
//! superres-core (this crate)
//!    ^
//!    |
//!    +-- superres-ops (blur, downsampling, operator matrices, image model)
//!    +-- superres-bench
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod channel;
pub mod error;
pub mod image;
pub mod report;
pub mod resize;
pub mod sample;
pub mod visualize;

pub use channel::{Channel, ImageSize};
pub use error::{Error, ErrorKind, Result};
pub use image::PixelImage;
pub use report::ImageDataReport;
pub use resize::Interpolation;
pub use sample::{RawImage, Sample};
pub use visualize::VisualizationImage;

/// Prelude module for convenient imports.
///
/// ```
/// use superres_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::channel::{Channel, ImageSize};
    pub use crate::error::{Error, ErrorKind, Result};
    pub use crate::image::PixelImage;
    pub use crate::resize::Interpolation;
    pub use crate::sample::{RawImage, Sample};
    pub use crate::visualize::VisualizationImage;
}
