//! Integer decimation by the sensor.
//!
//! The sensor samples the high-resolution scene every `scale` pixels in both
//! directions without any pre-filtering; the optical blur is a separate
//! operator earlier in the model. The transpose places each low-resolution
//! value back at its sampling position and fills the rest with zeros.
//!
//! ```text
//! forward (scale 2)          transpose
//!  0  1  2  3
//!  4  5  6  7    ->  0  2    ->   0 0 2 0
//!  8  9 10 11        8 10         0 0 0 0
//! 12 13 14 15                     8 0 10 0
//!                                 0 0 0 0
//! ```

use crate::operator::DegradationOperator;
use crate::sparse::SparseMatrix;
use crate::{OpsError, OpsResult};
use superres_core::{ImageSize, Interpolation, PixelImage};
use tracing::debug;

/// Decimation by an integer factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DownsamplingOperator {
    scale: usize,
}

impl DownsamplingOperator {
    /// Creates a decimation operator.
    ///
    /// # Errors
    ///
    /// [`OpsError::InvalidParameter`] if `scale` is zero.
    pub fn new(scale: usize) -> OpsResult<Self> {
        if scale < 1 {
            return Err(OpsError::InvalidParameter(format!(
                "downsampling scale must be at least 1, got {scale}"
            )));
        }
        Ok(Self { scale })
    }

    /// Returns the decimation factor.
    #[inline]
    pub fn scale(&self) -> usize {
        self.scale
    }
}

impl DegradationOperator for DownsamplingOperator {
    fn name(&self) -> &'static str {
        "downsampling"
    }

    /// Point-samples to `1 / scale` of the size (aliasing intended).
    ///
    /// The output size is `round(size / scale)` per dimension. When the
    /// input is not a multiple of `scale` the kept pixels do not form a
    /// regular grid: a width of 5 at scale 2 keeps columns 0, 1 and 3.
    fn apply_to_image(&self, image: &mut PixelImage, index: usize) -> OpsResult<()> {
        debug!(scale = self.scale, index, size = %image.size(), "downsampling forward");
        image.resize_by(1.0 / self.scale as f64, Interpolation::Nearest)?;
        Ok(())
    }

    /// Zero-padded upsampling to `scale` times the size.
    ///
    /// This undoes the forward size change only for multiples of `scale`;
    /// a 3-wide image at scale 2 comes back 6 wide, not 5.
    fn apply_transpose_to_image(&self, image: &mut PixelImage, index: usize) -> OpsResult<()> {
        debug!(scale = self.scale, index, size = %image.size(), "downsampling transpose");
        image.resize_by(self.scale as f64, Interpolation::Additive)?;
        Ok(())
    }

    /// Selection matrix with one `1` per low-resolution pixel.
    ///
    /// Row `r` corresponds to the `r`-th high-resolution pixel `(row, col)`
    /// in scan order with `row % scale == 0 && col % scale == 0`, and has its
    /// single entry at column `row * width + col`.
    ///
    /// # Errors
    ///
    /// [`OpsError::InvalidParameter`] if the width or height is not a
    /// multiple of `scale`.
    fn operator_matrix(&self, image_size: ImageSize, _index: usize) -> OpsResult<SparseMatrix> {
        let s = self.scale;
        let ImageSize { width, height } = image_size;
        if width % s != 0 || height % s != 0 {
            return Err(OpsError::InvalidParameter(format!(
                "image size {image_size} is not a multiple of scale {s}"
            )));
        }

        let num_high_res = image_size.area();
        let num_low_res = num_high_res / (s * s);
        let triplets: Vec<_> = (0..height)
            .step_by(s)
            .flat_map(|row| (0..width).step_by(s).map(move |col| row * width + col))
            .enumerate()
            .map(|(r, col)| (r, col, 1.0))
            .collect();

        SparseMatrix::from_triplets(num_low_res, num_high_res, triplets)
    }

    /// Matches the rounding of the forward pass.
    fn output_size(&self, input: ImageSize) -> ImageSize {
        let factor = 1.0 / self.scale as f64;
        ImageSize::new(
            (input.width as f64 * factor).round() as usize,
            (input.height as f64 * factor).round() as usize,
        )
    }
}
