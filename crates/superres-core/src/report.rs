//! Value statistics for a [`PixelImage`].
//!
//! Reconstruction algorithms write channel buffers directly and can push
//! values outside `[0, 1]`. The report summarizes what is actually stored so
//! drivers can log it between iterations.

use crate::{ImageSize, PixelImage};
use std::fmt;
use tracing::info;

/// Summary of an image's dimensions and stored values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageDataReport {
    /// Image size.
    pub size: ImageSize,
    /// Number of channels.
    pub num_channels: usize,
    /// Pixels per channel.
    pub num_pixels: usize,
    /// Smallest value over all channels (`None` when empty).
    pub min_value: Option<f64>,
    /// Largest value over all channels (`None` when empty).
    pub max_value: Option<f64>,
    /// Number of values below 0.
    pub num_negative: usize,
    /// Number of values above 1.
    pub num_above_one: usize,
    /// Number of NaN values. They are excluded from the value range.
    pub num_nan: usize,
}

impl ImageDataReport {
    /// Scans every channel of `image`.
    pub fn from_image(image: &PixelImage) -> Self {
        let mut min_value: Option<f64> = None;
        let mut max_value: Option<f64> = None;
        let mut num_negative = 0;
        let mut num_above_one = 0;
        let mut num_nan = 0;

        for &v in image.channels().iter().flat_map(|c| c.as_slice()) {
            if v.is_nan() {
                num_nan += 1;
                continue;
            }
            min_value = Some(min_value.map_or(v, |m| m.min(v)));
            max_value = Some(max_value.map_or(v, |m| m.max(v)));
            if v < 0.0 {
                num_negative += 1;
            } else if v > 1.0 {
                num_above_one += 1;
            }
        }

        Self {
            size: image.size(),
            num_channels: image.num_channels(),
            num_pixels: image.num_pixels(),
            min_value,
            max_value,
            num_negative,
            num_above_one,
            num_nan,
        }
    }

    /// Returns `true` if every value lies in `[0, 1]`.
    #[inline]
    pub fn is_in_range(&self) -> bool {
        self.num_negative == 0 && self.num_above_one == 0 && self.num_nan == 0
    }

    /// Emits the report through `tracing` at info level.
    pub fn log(&self) {
        info!(
            size = %self.size,
            channels = self.num_channels,
            min = ?self.min_value,
            max = ?self.max_value,
            negative = self.num_negative,
            above_one = self.num_above_one,
            nan = self.num_nan,
            "image data report"
        );
    }
}

impl fmt::Display for ImageDataReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Image size: {}", self.size)?;
        writeln!(f, "Number of channels: {}", self.num_channels)?;
        writeln!(f, "Pixels per channel: {}", self.num_pixels)?;
        match (self.min_value, self.max_value) {
            (Some(min), Some(max)) => writeln!(f, "Value range: [{min}, {max}]")?,
            _ => writeln!(f, "Value range: n/a")?,
        }
        writeln!(f, "Negative values: {}", self.num_negative)?;
        writeln!(f, "Values above 1: {}", self.num_above_one)?;
        write!(f, "NaN values: {}", self.num_nan)
    }
}
