//! The multi-channel image container.
//!
//! [`PixelImage`] holds an ordered list of [`Channel`] planes sharing one
//! [`ImageSize`]. Channels are independent of each other; channel 0 is the
//! "first" channel used for monochrome visualization.
//!
//! # Invariants
//!
//! - every channel has exactly the image size
//! - every stored value lies in `[0, 1]` after construction
//! - an image with no channels has size `(0, 0)`
//!
//! Reconstruction code may break the value invariant on purpose through
//! [`PixelImage::channel_buffer_mut`]; [`PixelImage::report`] counts such
//! out-of-range values.
//!
//! # Usage
//!
//! ```rust
//! use superres_core::{ImageSize, Interpolation, PixelImage, RawImage};
//!
//! let raw = RawImage::new(4, 4, 1, (0..16u8).collect()).unwrap();
//! let mut image = PixelImage::from_raw(&raw).unwrap();
//!
//! image.resize(ImageSize::new(2, 2), Interpolation::Nearest).unwrap();
//! assert_eq!(image.size(), ImageSize::new(2, 2));
//! ```

use crate::resize::resample_plane;
use crate::{Channel, Error, ImageDataReport, ImageSize, Interpolation, RawImage, Result, Sample};
use tracing::debug;

/// Largest raw value accepted from a loader.
const RAW_MAX: f64 = 255.0;

/// Multi-channel image with normalized `f64` planes.
///
/// `Clone` performs a deep copy of every channel.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PixelImage {
    size: ImageSize,
    channels: Vec<Channel>,
}

/// Rejects raw data outside `[0, 255]` and returns its maximum.
fn check_raw_range(min: f64, max: f64) -> Result<f64> {
    if min.is_nan() || min < 0.0 {
        return Err(Error::range(min, 0.0, RAW_MAX));
    }
    if max > RAW_MAX {
        return Err(Error::range(max, 0.0, RAW_MAX));
    }
    Ok(max)
}

/// Divisor applied to raw input: 255 for 8-bit data, 1 otherwise.
#[inline]
fn normalization_divisor(normalize: bool) -> f64 {
    if normalize { RAW_MAX } else { 1.0 }
}

impl PixelImage {
    /// Creates an empty image: no channels, size `(0, 0)`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an image from a raw multi-channel source.
    ///
    /// Every raw value must be within `[0, 255]`. If the maximum value is
    /// greater than `1.0` the data is treated as 8-bit and divided by 255,
    /// otherwise it is taken as already normalized.
    ///
    /// An 8-bit image whose brightest pixel is exactly `1` is therefore
    /// indistinguishable from normalized data and is kept as-is; use
    /// [`from_raw_with_normalization`](Self::from_raw_with_normalization)
    /// when the range is known.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidArgument`] if the raw image has no samples
    /// - [`Error::Range`] if any value is negative, NaN or above 255
    ///
    /// # Example
    ///
    /// ```rust
    /// use superres_core::{PixelImage, RawImage};
    ///
    /// let raw = RawImage::new(2, 1, 1, vec![51.0f32, 255.0]).unwrap();
    /// let image = PixelImage::from_raw(&raw).unwrap();
    /// assert!((image.pixel_value(0, 0).unwrap() - 0.2).abs() < 1e-12);
    /// ```
    pub fn from_raw<T: Sample>(raw: &RawImage<T>) -> Result<Self> {
        let (min, max) = raw
            .min_max()
            .ok_or_else(|| Error::invalid_argument("raw image has no samples"))?;
        let max = check_raw_range(min, max)?;
        Self::split_raw(raw, max > 1.0)
    }

    /// Creates an image from a raw source with caller-controlled normalization.
    ///
    /// With `normalize == true` values are divided by 255. The resulting
    /// channel values must lie in `[0, 1]`; nothing is clamped.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidArgument`] if the raw image has no samples
    /// - [`Error::Range`] if a converted value falls outside `[0, 1]`
    pub fn from_raw_with_normalization<T: Sample>(
        raw: &RawImage<T>,
        normalize: bool,
    ) -> Result<Self> {
        let image = Self::split_raw(raw, normalize)?;
        for channel in &image.channels {
            if let Some((min, max)) = channel.min_max() {
                if min.is_nan() || min < 0.0 {
                    return Err(Error::range(min, 0.0, 1.0));
                }
                if max > 1.0 {
                    return Err(Error::range(max, 0.0, 1.0));
                }
            }
        }
        Ok(image)
    }

    /// De-interleaves `raw` into normalized channel planes.
    fn split_raw<T: Sample>(raw: &RawImage<T>, normalize: bool) -> Result<Self> {
        if raw.is_empty() || raw.channels() == 0 {
            return Err(Error::invalid_argument("raw image has no samples"));
        }
        let size = raw.size();
        let divisor = normalization_divisor(normalize);
        let channels = (0..raw.channels())
            .map(|c| {
                Channel::from_vec(size, raw.extract_plane(c, divisor))
                    .ok_or_else(|| Error::invalid_argument("raw plane does not match image size"))
            })
            .collect::<Result<Vec<_>>>()?;

        debug!(%size, channels = channels.len(), normalize, "image created from raw data");
        Ok(Self { size, channels })
    }

    /// Appends one channel.
    ///
    /// The first channel added to an empty image establishes its size; later
    /// channels must match it. Values must be within `[0, 255]` and are
    /// normalized by the same rule as [`from_raw`](Self::from_raw).
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidArgument`] if `raw` is empty or has more than one channel
    /// - [`Error::Range`] if any value is outside `[0, 255]`
    /// - [`Error::SizeMismatch`] if the size differs from the image size
    ///
    /// # Example
    ///
    /// ```rust
    /// use superres_core::{PixelImage, RawImage};
    ///
    /// let mut image = PixelImage::new();
    /// image.add_channel(&RawImage::single_channel(2, 2, vec![0u8; 4]).unwrap()).unwrap();
    /// assert!(image.add_channel(&RawImage::single_channel(3, 2, vec![0u8; 6]).unwrap()).is_err());
    /// assert_eq!(image.num_channels(), 1);
    /// ```
    pub fn add_channel<T: Sample>(&mut self, raw: &RawImage<T>) -> Result<()> {
        if raw.channels() != 1 {
            return Err(Error::invalid_argument(format!(
                "add_channel expects a single-channel image, got {} channels",
                raw.channels()
            )));
        }
        let (min, max) = raw
            .min_max()
            .ok_or_else(|| Error::invalid_argument("channel image has no samples"))?;
        let max = check_raw_range(min, max)?;

        if !self.channels.is_empty() && raw.size() != self.size {
            return Err(Error::size_mismatch(self.size, raw.size()));
        }

        let divisor = normalization_divisor(max > 1.0);
        let channel = Channel::from_vec(raw.size(), raw.extract_plane(0, divisor))
            .ok_or_else(|| Error::invalid_argument("raw plane does not match image size"))?;

        if self.channels.is_empty() {
            self.size = raw.size();
        }
        self.channels.push(channel);
        Ok(())
    }

    /// Resizes every channel to `new_size`.
    ///
    /// All channels are resampled first and only then swapped in together
    /// with the new size, so the image is never left half-resized.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidState`] if the image has no channels
    /// - [`Error::InvalidArgument`] if `new_size` has a zero dimension or is
    ///   too large to allocate
    pub fn resize(&mut self, new_size: ImageSize, interpolation: Interpolation) -> Result<()> {
        if self.channels.is_empty() {
            return Err(Error::invalid_state("cannot resize an empty image"));
        }
        if new_size.is_empty() {
            return Err(Error::invalid_argument(format!(
                "images must have a positive width and height, got {new_size}"
            )));
        }
        let fits = new_size
            .width
            .checked_mul(new_size.height)
            .and_then(|n| n.checked_mul(std::mem::size_of::<f64>()))
            .is_some_and(|bytes| bytes <= isize::MAX as usize);
        if !fits {
            return Err(Error::invalid_argument(format!(
                "image size {new_size} is too large"
            )));
        }

        debug!(from = %self.size, to = %new_size, ?interpolation, "resize");
        let resized: Vec<Channel> = self
            .channels
            .iter()
            .map(|ch| {
                let data = resample_plane(ch.as_slice(), self.size, new_size, interpolation);
                Channel::from_vec(new_size, data)
                    .ok_or_else(|| Error::invalid_state("resampled plane has wrong length"))
            })
            .collect::<Result<_>>()?;

        self.channels = resized;
        self.size = new_size;
        Ok(())
    }

    /// Resizes by a uniform scale factor.
    ///
    /// The new size is `round(size * scale_factor)` per dimension.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidArgument`] if `scale_factor` is not positive and
    ///   finite, or the image is empty
    /// - any error of [`resize`](Self::resize), e.g. when the rounded size is zero
    pub fn resize_by(&mut self, scale_factor: f64, interpolation: Interpolation) -> Result<()> {
        if !(scale_factor > 0.0) || !scale_factor.is_finite() {
            return Err(Error::invalid_argument(format!(
                "scale factor must be finite and larger than 0, got {scale_factor}"
            )));
        }
        if self.channels.is_empty() {
            return Err(Error::invalid_argument("cannot scale an empty image"));
        }
        let new_size = ImageSize::new(
            (self.size.width as f64 * scale_factor).round() as usize,
            (self.size.height as f64 * scale_factor).round() as usize,
        );
        self.resize(new_size, interpolation)
    }

    /// Returns the image size, `(0, 0)` when empty.
    #[inline]
    pub fn size(&self) -> ImageSize {
        self.size
    }

    /// Returns the number of channels.
    #[inline]
    pub fn num_channels(&self) -> usize {
        self.channels.len()
    }

    /// Returns `true` if the image has no channels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }

    /// Returns `width * height` (0 for an empty image).
    #[inline]
    pub fn num_pixels(&self) -> usize {
        self.size.area()
    }

    /// Returns all channels in order.
    #[inline]
    pub fn channels(&self) -> &[Channel] {
        &self.channels
    }

    /// Returns channel `index`.
    ///
    /// # Errors
    ///
    /// [`Error::Index`] if `index >= num_channels()`.
    pub fn channel(&self, index: usize) -> Result<&Channel> {
        self.channels
            .get(index)
            .ok_or_else(|| Error::index("channel", index, self.channels.len()))
    }

    /// Returns the value of pixel `pixel_index` (row-major) in channel `channel_index`.
    ///
    /// # Errors
    ///
    /// [`Error::Index`] if either index is out of range.
    pub fn pixel_value(&self, channel_index: usize, pixel_index: usize) -> Result<f64> {
        let channel = self.channel(channel_index)?;
        let (row, col) = self.pixel_index_to_coordinates(pixel_index)?;
        Ok(channel.at(row, col))
    }

    /// Returns direct mutable access to a channel's row-major samples.
    ///
    /// Intended for in-place updates by reconstruction algorithms. The slice
    /// is bounds checked but values are not: the caller is responsible for
    /// keeping them in `[0, 1]` if later code relies on it.
    ///
    /// # Errors
    ///
    /// [`Error::Index`] if `channel_index >= num_channels()`.
    pub fn channel_buffer_mut(&mut self, channel_index: usize) -> Result<&mut [f64]> {
        let count = self.channels.len();
        self.channels
            .get_mut(channel_index)
            .map(Channel::as_mut_slice)
            .ok_or_else(|| Error::index("channel", channel_index, count))
    }

    /// Converts a row-major pixel index to `(row, col)`.
    ///
    /// # Errors
    ///
    /// [`Error::Index`] if `index >= num_pixels()`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use superres_core::{PixelImage, RawImage};
    ///
    /// let image = PixelImage::from_raw(&RawImage::new(4, 3, 1, vec![0u8; 12]).unwrap()).unwrap();
    /// assert_eq!(image.pixel_index_to_coordinates(6).unwrap(), (1, 2));
    /// ```
    pub fn pixel_index_to_coordinates(&self, index: usize) -> Result<(usize, usize)> {
        let count = self.num_pixels();
        if index >= count {
            return Err(Error::index("pixel", index, count));
        }
        Ok((index / self.size.width, index % self.size.width))
    }

    /// Converts `(row, col)` back to a row-major pixel index.
    ///
    /// # Errors
    ///
    /// [`Error::Index`] if the coordinates are outside the image.
    pub fn coordinates_to_pixel_index(&self, row: usize, col: usize) -> Result<usize> {
        if row >= self.size.height {
            return Err(Error::index("row", row, self.size.height));
        }
        if col >= self.size.width {
            return Err(Error::index("column", col, self.size.width));
        }
        Ok(row * self.size.width + col)
    }

    /// Collects value statistics over all channels.
    pub fn report(&self) -> ImageDataReport {
        ImageDataReport::from_image(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use approx::assert_relative_eq;

    fn ramp_image(width: usize, height: usize) -> PixelImage {
        let data: Vec<f64> = (0..width * height).map(|i| i as f64).collect();
        PixelImage::from_raw_with_normalization(
            &RawImage::single_channel(width, height, data.iter().map(|v| v / 255.0).collect())
                .unwrap(),
            false,
        )
        .unwrap()
    }

    #[test]
    fn test_new_is_empty() {
        let image = PixelImage::new();
        assert!(image.is_empty());
        assert_eq!(image.size(), ImageSize::new(0, 0));
        assert_eq!(image.num_pixels(), 0);
    }

    #[test]
    fn test_from_raw_normalizes_8bit() {
        let raw = RawImage::new(2, 1, 2, vec![0u8, 255, 51, 102]).unwrap();
        let image = PixelImage::from_raw(&raw).unwrap();
        assert_eq!(image.num_channels(), 2);
        assert_eq!(image.channel(0).unwrap().as_slice(), &[0.0, 51.0 / 255.0]);
        assert_eq!(image.channel(1).unwrap().as_slice(), &[1.0, 102.0 / 255.0]);
    }

    #[test]
    fn test_from_raw_keeps_normalized() {
        let raw = RawImage::new(2, 1, 1, vec![0.25f64, 1.0]).unwrap();
        let image = PixelImage::from_raw(&raw).unwrap();
        assert_eq!(image.channel(0).unwrap().as_slice(), &[0.25, 1.0]);
    }

    #[test]
    fn test_from_raw_values_in_unit_range() {
        for max in [1u16, 2, 17, 128, 255] {
            let data: Vec<u16> = (0..=max).collect();
            let raw = RawImage::single_channel(data.len(), 1, data).unwrap();
            let image = PixelImage::from_raw(&raw).unwrap();
            let (lo, hi) = image.channel(0).unwrap().min_max().unwrap();
            assert!(lo >= 0.0 && hi <= 1.0, "max={max}: [{lo}, {hi}]");
        }
    }

    #[test]
    fn test_from_raw_range_errors() {
        let neg = RawImage::single_channel(2, 1, vec![-1.0f32, 0.5]).unwrap();
        assert_eq!(PixelImage::from_raw(&neg).unwrap_err().kind(), ErrorKind::Range);

        let big = RawImage::single_channel(2, 1, vec![10u16, 256]).unwrap();
        assert_eq!(PixelImage::from_raw(&big).unwrap_err().kind(), ErrorKind::Range);

        let nan = RawImage::single_channel(2, 1, vec![f64::NAN, 0.5]).unwrap();
        assert_eq!(PixelImage::from_raw(&nan).unwrap_err().kind(), ErrorKind::Range);
    }

    #[test]
    fn test_from_raw_empty() {
        let raw: RawImage<u8> = RawImage::new(0, 0, 3, Vec::new()).unwrap();
        assert_eq!(
            PixelImage::from_raw(&raw).unwrap_err().kind(),
            ErrorKind::InvalidArgument
        );
    }

    #[test]
    fn test_explicit_normalization() {
        let raw = RawImage::single_channel(2, 1, vec![0.0f32, 1.0]).unwrap();
        let image = PixelImage::from_raw_with_normalization(&raw, true).unwrap();
        assert_relative_eq!(image.pixel_value(0, 1).unwrap(), 1.0 / 255.0);

        let raw8 = RawImage::single_channel(2, 1, vec![0u8, 200]).unwrap();
        let err = PixelImage::from_raw_with_normalization(&raw8, false).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Range);
    }

    #[test]
    fn test_explicit_normalization_rejects_nan() {
        for data in [vec![0.5f64, f64::NAN], vec![f64::NAN, 0.5]] {
            let raw = RawImage::single_channel(2, 1, data).unwrap();
            for normalize in [false, true] {
                let err = PixelImage::from_raw_with_normalization(&raw, normalize).unwrap_err();
                assert_eq!(err.kind(), ErrorKind::Range);
            }
        }
    }

    #[test]
    fn test_add_channel_first_sets_size() {
        let mut image = PixelImage::new();
        let raw = RawImage::single_channel(3, 2, vec![255u8; 6]).unwrap();
        image.add_channel(&raw).unwrap();
        assert_eq!(image.size(), ImageSize::new(3, 2));
        assert_eq!(image.pixel_value(0, 5).unwrap(), 1.0);
    }

    #[test]
    fn test_add_channel_size_mismatch() {
        let mut image = PixelImage::new();
        image
            .add_channel(&RawImage::single_channel(4, 4, vec![0u8; 16]).unwrap())
            .unwrap();

        for (w, h) in [(4, 3), (3, 4), (2, 8), (5, 5)] {
            let raw = RawImage::single_channel(w, h, vec![0u8; w * h]).unwrap();
            let err = image.add_channel(&raw).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::SizeMismatch);
            assert_eq!(image.num_channels(), 1);
        }

        let raw = RawImage::single_channel(4, 4, vec![0.5f32; 16]).unwrap();
        image.add_channel(&raw).unwrap();
        assert_eq!(image.num_channels(), 2);
    }

    #[test]
    fn test_add_channel_rejects_multichannel() {
        let mut image = PixelImage::new();
        let raw = RawImage::new(2, 2, 3, vec![0u8; 12]).unwrap();
        assert_eq!(
            image.add_channel(&raw).unwrap_err().kind(),
            ErrorKind::InvalidArgument
        );
        assert!(image.is_empty());
    }

    #[test]
    fn test_add_channel_range() {
        let mut image = PixelImage::new();
        let raw = RawImage::single_channel(2, 1, vec![0.0f32, 300.0]).unwrap();
        assert_eq!(image.add_channel(&raw).unwrap_err().kind(), ErrorKind::Range);
        assert_eq!(image.size(), ImageSize::default());
    }

    #[test]
    fn test_add_channel_normalizes_independently() {
        let mut image = PixelImage::new();
        image
            .add_channel(&RawImage::single_channel(2, 1, vec![0u8, 255]).unwrap())
            .unwrap();
        image
            .add_channel(&RawImage::single_channel(2, 1, vec![0.0f32, 0.5]).unwrap())
            .unwrap();
        assert_eq!(image.pixel_value(0, 1).unwrap(), 1.0);
        assert_eq!(image.pixel_value(1, 1).unwrap(), 0.5);
    }

    #[test]
    fn test_resize_errors() {
        let mut empty = PixelImage::new();
        assert_eq!(
            empty
                .resize(ImageSize::new(2, 2), Interpolation::Nearest)
                .unwrap_err()
                .kind(),
            ErrorKind::InvalidState
        );

        let mut image = ramp_image(4, 4);
        for size in [ImageSize::new(0, 2), ImageSize::new(2, 0)] {
            assert_eq!(
                image.resize(size, Interpolation::Nearest).unwrap_err().kind(),
                ErrorKind::InvalidArgument
            );
        }
        assert_eq!(image.size(), ImageSize::new(4, 4));
    }

    #[test]
    fn test_resize_by_errors() {
        let mut image = ramp_image(4, 4);
        for factor in [0.0, -0.5, f64::NAN, f64::INFINITY, 1e300] {
            assert_eq!(
                image.resize_by(factor, Interpolation::Nearest).unwrap_err().kind(),
                ErrorKind::InvalidArgument
            );
        }
        assert_eq!(
            PixelImage::new()
                .resize_by(2.0, Interpolation::Nearest)
                .unwrap_err()
                .kind(),
            ErrorKind::InvalidArgument
        );
        // Rounds to a zero-width image.
        assert_eq!(
            image.resize_by(0.1, Interpolation::Nearest).unwrap_err().kind(),
            ErrorKind::InvalidArgument
        );        assert_eq!(image.size(), ImageSize::new(4, 4));
    }

    #[test]
    fn test_resize_too_large() {
        let mut image = ramp_image(2, 2);
        for size in [ImageSize::new(usize::MAX, 2), ImageSize::new(usize::MAX / 8, 2)] {
            assert_eq!(
                image.resize(size, Interpolation::Nearest).unwrap_err().kind(),
                ErrorKind::InvalidArgument
            );
        }
        assert_eq!(image, ramp_image(2, 2));
    }

    #[test]
    fn test_resize_all_channels() {
        let mut image = PixelImage::new();
        for _ in 0..3 {
            image
                .add_channel(&RawImage::single_channel(6, 4, vec![100u8; 24]).unwrap())
                .unwrap();
        }
        image.resize_by(0.5, Interpolation::Nearest).unwrap();
        assert_eq!(image.size(), ImageSize::new(3, 2));
        for ch in image.channels() {
            assert_eq!(ch.size(), ImageSize::new(3, 2));
        }
    }

    #[test]
    fn test_resize_by_rounds() {
        let mut image = ramp_image(5, 3);
        image.resize_by(0.5, Interpolation::Nearest).unwrap();
        assert_eq!(image.size(), ImageSize::new(3, 2));
    }

    #[test]
    fn test_down_then_additive_up() {
        let mut image = ramp_image(6, 6);
        let original = image.clone();
        image.resize_by(1.0 / 3.0, Interpolation::Nearest).unwrap();
        image.resize_by(3.0, Interpolation::Additive).unwrap();
        assert_eq!(image.size(), ImageSize::new(6, 6));

        let up = image.channel(0).unwrap();
        let src = original.channel(0).unwrap();
        for row in 0..6 {
            for col in 0..6 {
                if row % 3 == 0 && col % 3 == 0 {
                    assert_eq!(up.at(row, col), src.at(row, col));
                } else {
                    assert_eq!(up.at(row, col), 0.0);
                }
            }
        }
    }

    #[test]
    fn test_channel_index_error() {
        let image = ramp_image(2, 2);
        assert!(image.channel(0).is_ok());
        assert_eq!(image.channel(1).unwrap_err().kind(), ErrorKind::Index);
        assert_eq!(image.pixel_value(1, 0).unwrap_err().kind(), ErrorKind::Index);
        assert_eq!(image.pixel_value(0, 4).unwrap_err().kind(), ErrorKind::Index);
    }

    #[test]
    fn test_pixel_value_row_major() {
        let image = ramp_image(4, 3);
        for i in 0..12 {
            assert_relative_eq!(image.pixel_value(0, i).unwrap(), i as f64 / 255.0);
        }
    }

    #[test]
    fn test_pixel_index_bijection() {
        let image = ramp_image(5, 3);
        let mut seen = std::collections::HashSet::new();
        for i in 0..image.num_pixels() {
            let (row, col) = image.pixel_index_to_coordinates(i).unwrap();
            assert!(row < 3 && col < 5);
            assert!(seen.insert((row, col)));
            assert_eq!(image.coordinates_to_pixel_index(row, col).unwrap(), i);
        }
        assert_eq!(seen.len(), 15);
        assert!(image.pixel_index_to_coordinates(15).is_err());
        assert!(image.coordinates_to_pixel_index(3, 0).is_err());
        assert!(image.coordinates_to_pixel_index(0, 5).is_err());
    }

    #[test]
    fn test_channel_buffer_mut() {
        let mut image = ramp_image(2, 2);
        image.channel_buffer_mut(0).unwrap()[3] = 0.75;
        assert_eq!(image.pixel_value(0, 3).unwrap(), 0.75);
        assert_eq!(image.channel_buffer_mut(1).unwrap_err().kind(), ErrorKind::Index);
    }

    #[test]
    fn test_clone_is_deep() {
        let mut image = ramp_image(2, 2);
        let copy = image.clone();
        image.channel_buffer_mut(0).unwrap()[0] = 1.0;
        assert_eq!(copy.pixel_value(0, 0).unwrap(), 0.0);
    }
}
