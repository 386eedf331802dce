//! Single-channel pixel planes.
//!
//! A [`Channel`] stores one plane of an image as `f64` samples in
//! **row-major** order:
//!
//! ```text
//! index = row * width + col
//!
//! [v(0,0) v(0,1) ... v(0,w-1)]   <- row 0
//! [v(1,0) v(1,1) ... v(1,w-1)]   <- row 1
//! ...
//! ```
//!
//! This layout is shared by [`PixelImage::pixel_index_to_coordinates`],
//! the flattened vectors multiplied by operator matrices, and the mutable
//! buffers handed to reconstruction code.
//!
//! [`PixelImage::pixel_index_to_coordinates`]: crate::PixelImage::pixel_index_to_coordinates

use std::fmt;

/// Spatial size of an image in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ImageSize {
    /// Width (number of columns)
    pub width: usize,
    /// Height (number of rows)
    pub height: usize,
}

impl ImageSize {
    /// Creates a new size.
    #[inline]
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Returns `width * height`.
    #[inline]
    pub const fn area(&self) -> usize {
        self.width * self.height
    }

    /// Returns `true` if either dimension is zero.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl fmt::Display for ImageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// One image plane of `f64` samples, row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct Channel {
    size: ImageSize,
    data: Vec<f64>,
}

impl Channel {
    /// Wraps existing row-major data.
    ///
    /// Returns `None` when `data.len()` is not `size.area()`.
    pub fn from_vec(size: ImageSize, data: Vec<f64>) -> Option<Self> {
        (data.len() == size.area()).then_some(Self { size, data })
    }

    /// Returns the plane size.
    #[inline]
    pub fn size(&self) -> ImageSize {
        self.size
    }

    /// Returns the plane width.
    #[inline]
    pub fn width(&self) -> usize {
        self.size.width
    }

    /// Returns the plane height.
    #[inline]
    pub fn height(&self) -> usize {
        self.size.height
    }

    /// Returns the sample at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are outside the plane.
    #[inline]
    pub fn at(&self, row: usize, col: usize) -> f64 {
        assert!(
            row < self.size.height && col < self.size.width,
            "pixel ({row}, {col}) outside {} plane",
            self.size
        );
        self.data[row * self.size.width + col]
    }

    /// Returns the sample at `(row, col)`, or `None` if out of bounds.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        (row < self.size.height && col < self.size.width).then(|| self.at(row, col))
    }

    /// Returns one row as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `row >= height`.
    #[inline]
    pub fn row(&self, row: usize) -> &[f64] {
        let start = row * self.size.width;
        &self.data[start..start + self.size.width]
    }

    /// Returns the row-major samples.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Returns the row-major samples mutably.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Returns `(min, max)` over all samples, or `None` for an empty plane.
    ///
    /// If any sample is NaN both bounds are NaN.
    pub fn min_max(&self) -> Option<(f64, f64)> {
        let mut iter = self.data.iter().copied();
        let first = iter.next()?;
        let mut bounds = (first, first);
        for v in std::iter::once(first).chain(iter) {
            if v.is_nan() {
                return Some((f64::NAN, f64::NAN));
            }
            bounds = (bounds.0.min(v), bounds.1.max(v));
        }
        Some(bounds)
    }
}
