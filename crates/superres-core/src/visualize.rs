//! Display-ready 8-bit composites.
//!
//! [`PixelImage::visualization_image`] turns any number of channels into
//! something a viewer can show:
//!
//! | channels | result |
//! |---|---|
//! | 0 | empty image, warning logged |
//! | 1-2 | channel 0 as grayscale |
//! | 3+ | false-color composite of channels `0`, `n / 2`, `n - 1` |
//!
//! The false-color mapping is a heuristic for inspecting hyperspectral data,
//! not a color-accurate transform.

use crate::{Channel, ImageSize, PixelImage};
use tracing::warn;

/// Interleaved 8-bit image with 0, 1 or 3 channels.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisualizationImage {
    size: ImageSize,
    channels: usize,
    data: Vec<u8>,
}

impl VisualizationImage {
    /// Returns the image size.
    #[inline]
    pub fn size(&self) -> ImageSize {
        self.size
    }

    /// Returns the number of interleaved channels (0, 1 or 3).
    #[inline]
    pub fn channels(&self) -> usize {
        self.channels
    }

    /// Returns the interleaved bytes.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Returns `true` when there is nothing to display.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the pixel at `(row, col)` as a channel slice.
    pub fn pixel(&self, row: usize, col: usize) -> Option<&[u8]> {
        if row >= self.size.height || col >= self.size.width {
            return None;
        }
        let start = (row * self.size.width + col) * self.channels;
        Some(&self.data[start..start + self.channels])
    }
}

/// Maps a normalized value to a byte, saturating outside `[0, 1]`.
#[inline]
fn to_byte(v: f64) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Interleaves `planes` into bytes.
fn merge(size: ImageSize, planes: &[&Channel]) -> VisualizationImage {
    let mut data = Vec::with_capacity(size.area() * planes.len());
    for i in 0..size.area() {
        data.extend(planes.iter().map(|p| to_byte(p.as_slice()[i])));
    }
    VisualizationImage {
        size,
        channels: planes.len(),
        data,
    }
}

impl PixelImage {
    /// Builds an 8-bit visualization of this image.
    ///
    /// An empty image yields an empty result and a warning; this is not an
    /// error, "nothing to display" is a legitimate state for tooling.
    ///
    /// # Example
    ///
    /// ```rust
    /// use superres_core::{PixelImage, RawImage};
    ///
    /// let raw = RawImage::new(1, 1, 5, vec![0u8, 10, 20, 30, 40]).unwrap();
    /// let vis = PixelImage::from_raw(&raw).unwrap().visualization_image();
    /// assert_eq!(vis.channels(), 3);
    /// assert_eq!(vis.data(), &[0, 20, 40]);
    /// ```
    pub fn visualization_image(&self) -> VisualizationImage {
        let channels = self.channels();
        match channels.len() {
            0 => {
                warn!("image is empty, returning empty visualization image");
                VisualizationImage::default()
            }
            1 | 2 => merge(self.size(), &[&channels[0]]),
            n => merge(
                self.size(),
                &[&channels[0], &channels[n / 2], &channels[n - 1]],
            ),
        }
    }
}
