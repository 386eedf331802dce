//! Gaussian kernels and zero-padded convolution.
//!
//! The point-spread function of the optics is modelled as an isotropic
//! Gaussian. Because the 2D kernel is the outer product of a 1D kernel with
//! itself, convolution runs as a horizontal pass followed by a vertical pass.
//!
//! # Boundary handling
//!
//! Samples outside the image are treated as zero. With zero padding the
//! convolution is a plain linear map whose adjoint is the convolution with
//! the flipped kernel, so a symmetric kernel gives a self-adjoint blur.
//! Replicate or reflect borders fold weights back into edge pixels and break
//! that symmetry.
//!
//! # Example
//!
//! ```rust
//! use superres_ops::filter::{convolve_separable, Kernel};
//!
//! let src = vec![0.0, 0.0, 1.0, 0.0, 0.0];
//! let kernel = Kernel::gaussian(3, 1.0).unwrap();
//! let out = convolve_separable(&src, 5, 1, &kernel, &Kernel::identity());
//! assert!(out[2] > out[1] && out[1] > out[0]);
//! ```

use crate::{OpsError, OpsResult};
use tracing::trace;

/// Normalized 1D convolution kernel of odd length.
#[derive(Debug, Clone, PartialEq)]
pub struct Kernel {
    /// Kernel weights, center at `data.len() / 2`.
    pub data: Vec<f64>,
}

impl Kernel {
    /// Creates a kernel from weights.
    ///
    /// # Errors
    ///
    /// [`OpsError::InvalidParameter`] if the length is even or zero.
    pub fn new(data: Vec<f64>) -> OpsResult<Self> {
        if data.len() % 2 == 0 {
            return Err(OpsError::InvalidParameter(format!(
                "kernel size must be odd, got {}",
                data.len()
            )));
        }
        Ok(Self { data })
    }

    /// The single-tap kernel `[1.0]`.
    pub fn identity() -> Self {
        Self { data: vec![1.0] }
    }

    /// Creates a normalized Gaussian kernel.
    ///
    /// # Arguments
    ///
    /// * `size` - Number of taps (odd, at least 1)
    /// * `sigma` - Standard deviation in pixels (positive)
    ///
    /// # Errors
    ///
    /// [`OpsError::InvalidParameter`] for an even or zero `size` or a
    /// non-positive `sigma`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use superres_ops::filter::Kernel;
    ///
    /// let k = Kernel::gaussian(5, 1.5).unwrap();
    /// assert_eq!(k.size(), 5);
    /// assert!((k.data.iter().sum::<f64>() - 1.0).abs() < 1e-12);
    /// ```
    pub fn gaussian(size: usize, sigma: f64) -> OpsResult<Self> {
        if size == 0 || size % 2 == 0 {
            return Err(OpsError::InvalidParameter(format!(
                "kernel size must be a positive odd number, got {size}"
            )));
        }
        if !(sigma > 0.0) {
            return Err(OpsError::InvalidParameter(format!(
                "sigma must be positive, got {sigma}"
            )));
        }

        let half = (size / 2) as i64;
        let sigma2 = 2.0 * sigma * sigma;
        let mut data: Vec<f64> = (-half..=half)
            .map(|x| (-((x * x) as f64) / sigma2).exp())
            .collect();

        let sum: f64 = data.iter().sum();
        for w in &mut data {
            *w /= sum;
        }
        Ok(Self { data })
    }

    /// Returns the number of taps.
    #[inline]
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Returns the half-width.
    #[inline]
    pub fn radius(&self) -> usize {
        self.data.len() / 2
    }

    /// Returns the kernel mirrored around its center.
    pub fn flipped(&self) -> Self {
        Self {
            data: self.data.iter().rev().copied().collect(),
        }
    }

    /// Returns `true` if the kernel equals its mirror image.
    pub fn is_symmetric(&self) -> bool {
        self.data.iter().eq(self.data.iter().rev())
    }
}

/// Convolves a row-major plane with `horizontal` along rows, then `vertical`
/// along columns, treating samples outside the plane as zero.
///
/// Output pixel `(y, x)` is
/// `sum_{i,j} vertical[j] * horizontal[i] * src[y + j - rv][x + i - rh]`.
pub fn convolve_separable(
    src: &[f64],
    width: usize,
    height: usize,
    horizontal: &Kernel,
    vertical: &Kernel,
) -> Vec<f64> {
    trace!(width, height, kh = horizontal.size(), kv = vertical.size(), "convolve_separable");
    debug_assert_eq!(src.len(), width * height);

    let temp = convolve_rows(src, width, height, horizontal);
    convolve_cols(&temp, width, height, vertical)
}

/// Horizontal pass.
fn convolve_rows(src: &[f64], width: usize, height: usize, kernel: &Kernel) -> Vec<f64> {
    let r = kernel.radius() as isize;
    let mut dst = vec![0.0; width * height];

    for y in 0..height {
        let row = &src[y * width..(y + 1) * width];
        let out = &mut dst[y * width..(y + 1) * width];
        for (x, o) in out.iter_mut().enumerate() {
            let mut sum = 0.0;
            for (k, &w) in kernel.data.iter().enumerate() {
                let sx = x as isize + k as isize - r;
                if sx >= 0 && (sx as usize) < width {
                    sum += w * row[sx as usize];
                }
            }
            *o = sum;
        }
    }
    dst
}

/// Vertical pass.
fn convolve_cols(src: &[f64], width: usize, height: usize, kernel: &Kernel) -> Vec<f64> {
    let r = kernel.radius() as isize;
    let mut dst = vec![0.0; width * height];

    for y in 0..height {
        let out = &mut dst[y * width..(y + 1) * width];
        for (k, &w) in kernel.data.iter().enumerate() {
            let sy = y as isize + k as isize - r;
            if sy < 0 || sy as usize >= height {
                continue;
            }
            let row = &src[sy as usize * width..(sy as usize + 1) * width];
            for (o, &v) in out.iter_mut().zip(row) {
                *o += w * v;
            }
        }
    }
    dst
}
