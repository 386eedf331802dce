//! Gaussian point-spread-function blur.
//!
//! Models the optical blur of the imaging system as a normalized isotropic
//! Gaussian of `radius x radius` taps, applied with zero padding (see
//! [`crate::filter`]). Under zero padding the adjoint is convolution with the
//! flipped kernel; the Gaussian is symmetric, so forward and transpose
//! coincide and the operator matrix is symmetric.
//!
//! # Example
//!
//! ```rust
//! use superres_core::{PixelImage, RawImage};
//! use superres_ops::{BlurOperator, DegradationOperator};
//!
//! let blur = BlurOperator::new(3, 1.0).unwrap();
//! let mut image = PixelImage::from_raw(&RawImage::new(4, 4, 1, vec![128u8; 16]).unwrap()).unwrap();
//! blur.apply_to_image(&mut image, 0).unwrap();
//!
//! assert!(BlurOperator::new(2, 1.0).is_err());
//! assert!(BlurOperator::new(3, 0.0).is_err());
//! ```

use crate::filter::{convolve_separable, Kernel};
use crate::operator::DegradationOperator;
use crate::sparse::SparseMatrix;
use crate::{OpsError, OpsResult};
use superres_core::{ImageSize, PixelImage};
use tracing::debug;

/// Gaussian blur operator.
#[derive(Debug, Clone, PartialEq)]
pub struct BlurOperator {
    radius: usize,
    sigma: f64,
    kernel: Kernel,
}

impl BlurOperator {
    /// Creates a blur with a `radius x radius` Gaussian kernel.
    ///
    /// # Errors
    ///
    /// [`OpsError::InvalidParameter`] if `radius` is zero or even, or
    /// `sigma` is not positive.
    pub fn new(radius: usize, sigma: f64) -> OpsResult<Self> {
        if radius < 1 || radius % 2 == 0 {
            return Err(OpsError::InvalidParameter(format!(
                "blur radius must be a positive odd number, got {radius}"
            )));
        }
        if !(sigma > 0.0) {
            return Err(OpsError::InvalidParameter(format!(
                "blur sigma must be positive, got {sigma}"
            )));
        }
        let kernel = Kernel::gaussian(radius, sigma)?;
        Ok(Self {
            radius,
            sigma,
            kernel,
        })
    }

    /// Returns the kernel width/height in pixels.
    #[inline]
    pub fn radius(&self) -> usize {
        self.radius
    }

    /// Returns the Gaussian standard deviation.
    #[inline]
    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    /// Returns the 1D kernel whose outer product forms the PSF.
    #[inline]
    pub fn kernel(&self) -> &Kernel {
        &self.kernel
    }

    /// Convolves every channel of `image` with `kernel` in both directions.
    fn convolve_image(&self, image: &mut PixelImage, kernel: &Kernel) -> OpsResult<()> {
        let size = image.size();
        for c in 0..image.num_channels() {
            let buffer = image.channel_buffer_mut(c)?;
            let blurred = convolve_separable(buffer, size.width, size.height, kernel, kernel);
            buffer.copy_from_slice(&blurred);
        }
        Ok(())
    }
}

impl DegradationOperator for BlurOperator {
    fn name(&self) -> &'static str {
        "blur"
    }

    fn apply_to_image(&self, image: &mut PixelImage, index: usize) -> OpsResult<()> {
        debug!(radius = self.radius, sigma = self.sigma, index, size = %image.size(), "blur forward");
        self.convolve_image(image, &self.kernel)
    }

    fn apply_transpose_to_image(&self, image: &mut PixelImage, index: usize) -> OpsResult<()> {
        debug!(radius = self.radius, sigma = self.sigma, index, size = %image.size(), "blur transpose");
        if self.kernel.is_symmetric() {
            self.convolve_image(image, &self.kernel)
        } else {
            self.convolve_image(image, &self.kernel.flipped())
        }
    }

    fn operator_matrix(&self, image_size: ImageSize, _index: usize) -> OpsResult<SparseMatrix> {
        let ImageSize { width, height } = image_size;
        let n = image_size.area();
        let r = self.kernel.radius() as isize;
        let taps = &self.kernel.data;

        let mut triplets = Vec::with_capacity(n * taps.len() * taps.len());
        for y in 0..height {
            for x in 0..width {
                let p = y * width + x;
                for (j, &wy) in taps.iter().enumerate() {
                    let sy = y as isize + j as isize - r;
                    if sy < 0 || sy as usize >= height {
                        continue;
                    }
                    for (i, &wx) in taps.iter().enumerate() {
                        let sx = x as isize + i as isize - r;
                        if sx < 0 || sx as usize >= width {
                            continue;
                        }
                        triplets.push((p, sy as usize * width + sx as usize, wy * wx));
                    }
                }
            }
        }
        SparseMatrix::from_triplets(n, n, triplets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use superres_core::{ErrorKind, RawImage};

    fn impulse(size: usize) -> PixelImage {
        let mut data = vec![0.0f64; size * size];
        data[(size / 2) * size + size / 2] = 1.0;
        PixelImage::from_raw(&RawImage::single_channel(size, size, data).unwrap()).unwrap()
    }

    #[test]
    fn test_construction_errors() {
        for (radius, sigma) in [(2, 1.0), (0, 1.0), (3, 0.0), (3, -2.0), (5, f64::NAN)] {
            let err = BlurOperator::new(radius, sigma).unwrap_err();
            assert_eq!(err.kind(), Some(ErrorKind::InvalidArgument), "{radius} {sigma}");
        }
        let blur = BlurOperator::new(3, 1.0).unwrap();
        assert_eq!(blur.radius(), 3);
        assert_eq!(blur.sigma(), 1.0);
    }

    #[test]
    fn test_impulse_response_is_psf() {
        let blur = BlurOperator::new(3, 1.0).unwrap();
        let mut image = impulse(5);
        blur.apply_to_image(&mut image, 0).unwrap();

        let k = &blur.kernel().data;
        let ch = image.channel(0).unwrap();
        for dy in 0..3 {
            for dx in 0..3 {
                assert_relative_eq!(ch.at(1 + dy, 1 + dx), k[dy] * k[dx], epsilon = 1e-12);
            }
        }
        assert_eq!(ch.at(0, 0), 0.0);
        let total: f64 = ch.as_slice().iter().sum();
        assert_relative_eq!(total, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_transpose_equals_forward() {
        let blur = BlurOperator::new(5, 1.3).unwrap();
        let data: Vec<f64> = (0..48).map(|i| ((i * 7) % 13) as f64 / 13.0).collect();
        let base = PixelImage::from_raw(&RawImage::single_channel(8, 6, data).unwrap()).unwrap();

        let mut fwd = base.clone();
        blur.apply_to_image(&mut fwd, 0).unwrap();
        let mut adj = base.clone();
        blur.apply_transpose_to_image(&mut adj, 0).unwrap();

        for (a, b) in fwd.channel(0).unwrap().as_slice().iter().zip(adj.channel(0).unwrap().as_slice()) {
            assert_relative_eq!(a, b, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_matrix_symmetric() {
        let blur = BlurOperator::new(3, 0.8).unwrap();
        let m = blur.operator_matrix(ImageSize::new(4, 3), 0).unwrap();
        assert_eq!(m.rows(), 12);
        assert_eq!(m.cols(), 12);
        for (r, c, v) in m.triplets() {
            assert_relative_eq!(m.get(c, r), v, epsilon = 1e-15);
        }
        // Interior pixel sees the full 3x3 window, a corner only 2x2.
        assert_eq!(m.row(5).count(), 9);
        assert_eq!(m.row(0).count(), 4);
    }

    #[test]
    fn test_all_channels_blurred() {
        let blur = BlurOperator::new(3, 1.0).unwrap();
        let mut image = PixelImage::new();
        for _ in 0..3 {
            let mut data = vec![0.0f64; 9];
            data[4] = 1.0;
            image
                .add_channel(&RawImage::single_channel(3, 3, data).unwrap())
                .unwrap();
        }
        blur.apply_to_image(&mut image, 7).unwrap();
        for ch in image.channels() {
            assert!(ch.at(0, 0) > 0.0);
            assert!(ch.at(1, 1) < 1.0);
        }
    }
}
