//! Raw interleaved input as produced by image loaders.
//!
//! Loaders (out of scope for this crate) hand over pixel data as a
//! [`RawImage`]: interleaved samples in row-major order,
//!
//! ```text
//! [c0 c1 .. cN c0 c1 .. cN ...]  <- row 0
//! ```
//!
//! The sample type is generic through [`Sample`]. Unlike a display pixel
//! format, `Sample::to_f64` returns the *raw* value (`200u8` becomes `200.0`)
//! so that [`PixelImage`](crate::PixelImage) can run its range check and
//! normalization on the values the loader actually produced.

use crate::{Error, ImageSize, Result};

/// Numeric sample type accepted from loaders.
pub trait Sample: Copy + Send + Sync + 'static {
    /// Returns the raw sample value, without normalization.
    fn to_f64(self) -> f64;
}

impl Sample for u8 {
    #[inline]
    fn to_f64(self) -> f64 {
        f64::from(self)
    }
}

impl Sample for u16 {
    #[inline]
    fn to_f64(self) -> f64 {
        f64::from(self)
    }
}

impl Sample for f32 {
    #[inline]
    fn to_f64(self) -> f64 {
        f64::from(self)
    }
}

impl Sample for f64 {
    #[inline]
    fn to_f64(self) -> f64 {
        self
    }
}

/// Interleaved multi-channel raw image.
#[derive(Debug, Clone, PartialEq)]
pub struct RawImage<T: Sample> {
    size: ImageSize,
    channels: usize,
    data: Vec<T>,
}

impl<T: Sample> RawImage<T> {
    /// Creates a raw image from interleaved samples.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `data.len()` is not
    /// `width * height * channels`, or that product overflows.
    ///
    /// # Example
    ///
    /// ```rust
    /// use superres_core::RawImage;
    ///
    /// let rgb = RawImage::new(2, 2, 3, vec![0u8; 12]).unwrap();
    /// assert_eq!(rgb.channels(), 3);
    /// assert!(RawImage::new(2, 2, 3, vec![0u8; 11]).is_err());
    /// ```
    pub fn new(width: usize, height: usize, channels: usize, data: Vec<T>) -> Result<Self> {
        let expected = width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(channels))
            .ok_or_else(|| {
                Error::invalid_argument(format!(
                    "raw image {width}x{height}x{channels} is too large"
                ))
            })?;
        if data.len() != expected {
            return Err(Error::invalid_argument(format!(
                "raw image {width}x{height}x{channels} expects {expected} samples, got {}",
                data.len()
            )));
        }
        Ok(Self {
            size: ImageSize::new(width, height),
            channels,
            data,
        })
    }

    /// Creates a single-channel raw image.
    pub fn single_channel(width: usize, height: usize, data: Vec<T>) -> Result<Self> {
        Self::new(width, height, 1, data)
    }

    /// Returns the spatial size.
    #[inline]
    pub fn size(&self) -> ImageSize {
        self.size
    }

    /// Returns the number of interleaved channels.
    #[inline]
    pub fn channels(&self) -> usize {
        self.channels
    }

    /// Returns `true` if the image holds no samples.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns `(min, max)` of the raw values, or `None` when empty.
    ///
    /// A NaN sample is returned as the minimum so range checks reject it.
    pub(crate) fn min_max(&self) -> Option<(f64, f64)> {
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for v in self.data.iter().map(|s| s.to_f64()) {
            if v.is_nan() {
                return Some((f64::NAN, f64::NAN));
            }
            lo = lo.min(v);
            hi = hi.max(v);
        }
        (!self.data.is_empty()).then_some((lo, hi))
    }

    /// De-interleaves channel `c` into a row-major `f64` plane, divided by `divisor`.
    pub(crate) fn extract_plane(&self, c: usize, divisor: f64) -> Vec<f64> {
        self.data
            .iter()
            .skip(c)
            .step_by(self.channels)
            .map(|s| s.to_f64() / divisor)
            .collect()
    }
}
