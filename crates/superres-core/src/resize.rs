//! Plane resampling used by the degradation operators.
//!
//! # Modes
//!
//! - [`Interpolation::Nearest`] - point sampling, no anti-alias pre-filter
//! - [`Interpolation::Additive`] - zero-padded placement, the adjoint of `Nearest`
//!
//! Both modes share one integer index mapping. Resampling an `W`-wide plane
//! to width `w`, nearest reads source column `floor(x * W / w)` for every
//! destination column `x`. Additive walks the *source* instead and adds
//! each value into destination column `floor(x * w / W)`. When `Additive`
//! maps `w -> W` it therefore scatters along exactly the index map that
//! `Nearest` gathers along for `W -> w`, which makes the two modes
//! transposes of each other for any pair of sizes:
//!
//! ```text
//! nearest  4 -> 2:  [a b c d]  ->  [a c]
//! additive 2 -> 4:  [a c]      ->  [a 0 c 0]
//! ```
//!
//! # Example
//!
//! ```rust
//! use superres_core::{resize::resample_plane, ImageSize, Interpolation};
//!
//! let src: Vec<f64> = (0..16).map(f64::from).collect();
//! let down = resample_plane(&src, ImageSize::new(4, 4), ImageSize::new(2, 2), Interpolation::Nearest);
//! assert_eq!(down, vec![0.0, 2.0, 8.0, 10.0]);
//! ```

use crate::ImageSize;

/// Resampling mode for [`PixelImage::resize`](crate::PixelImage::resize).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Interpolation {
    /// Nearest-neighbor point sampling (decimation with aliasing).
    #[default]
    Nearest,
    /// Zero-padded placement; colliding source pixels are summed.
    Additive,
}

/// Maps a destination coordinate to the nearest-neighbor source coordinate.
#[inline]
fn nearest_source(dst: usize, src_len: usize, dst_len: usize) -> usize {
    (dst * src_len / dst_len).min(src_len - 1)
}

/// Resamples one row-major plane from `src_size` to `dst_size`.
///
/// Both sizes must be non-empty and `src.len()` must equal
/// `src_size.area()`; [`PixelImage`](crate::PixelImage) checks this before
/// calling.
pub fn resample_plane(
    src: &[f64],
    src_size: ImageSize,
    dst_size: ImageSize,
    interpolation: Interpolation,
) -> Vec<f64> {
    debug_assert_eq!(src.len(), src_size.area());
    debug_assert!(!src_size.is_empty() && !dst_size.is_empty());

    match interpolation {
        Interpolation::Nearest => resample_nearest(src, src_size, dst_size),
        Interpolation::Additive => resample_additive(src, src_size, dst_size),
    }
}

/// Nearest-neighbor gather.
fn resample_nearest(src: &[f64], src_size: ImageSize, dst_size: ImageSize) -> Vec<f64> {
    let cols: Vec<usize> = (0..dst_size.width)
        .map(|x| nearest_source(x, src_size.width, dst_size.width))
        .collect();

    let mut dst = Vec::with_capacity(dst_size.area());
    for y in 0..dst_size.height {
        let sy = nearest_source(y, src_size.height, dst_size.height);
        let row = &src[sy * src_size.width..(sy + 1) * src_size.width];
        dst.extend(cols.iter().map(|&sx| row[sx]));
    }
    dst
}

/// Zero-padded scatter, transpose of [`resample_nearest`] in the other direction.
fn resample_additive(src: &[f64], src_size: ImageSize, dst_size: ImageSize) -> Vec<f64> {
    let mut dst = vec![0.0; dst_size.area()];
    for sy in 0..src_size.height {
        let y = sy * dst_size.height / src_size.height;
        for sx in 0..src_size.width {
            let x = sx * dst_size.width / src_size.width;
            dst[y * dst_size.width + x] += src[sy * src_size.width + sx];
        }
    }
    dst
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn ramp(n: usize) -> Vec<f64> {
        (0..n).map(|i| i as f64).collect()
    }

    fn dot(a: &[f64], b: &[f64]) -> f64 {
        a.iter().zip(b).map(|(x, y)| x * y).sum()
    }

    #[test]
    fn test_nearest_decimation() {
        let dst = resample_plane(
            &ramp(16),
            ImageSize::new(4, 4),
            ImageSize::new(2, 2),
            Interpolation::Nearest,
        );
        assert_eq!(dst, vec![0.0, 2.0, 8.0, 10.0]);
    }

    #[test]
    fn test_additive_zero_padding() {
        let dst = resample_plane(
            &[0.0, 2.0, 8.0, 10.0],
            ImageSize::new(2, 2),
            ImageSize::new(4, 4),
            Interpolation::Additive,
        );
        #[rustfmt::skip]
        let expected = vec![
            0.0, 0.0, 2.0, 0.0,
            0.0, 0.0, 0.0, 0.0,
            8.0, 0.0, 10.0, 0.0,
            0.0, 0.0, 0.0, 0.0,
        ];
        assert_eq!(dst, expected);
    }

    #[test]
    fn test_nearest_upscale_replicates() {
        let dst = resample_plane(
            &[1.0, 2.0],
            ImageSize::new(2, 1),
            ImageSize::new(4, 1),
            Interpolation::Nearest,
        );
        assert_eq!(dst, vec![1.0, 1.0, 2.0, 2.0]);
    }

    #[test]
    fn test_additive_downscale_sums_collisions() {
        let dst = resample_plane(
            &[1.0, 2.0, 3.0, 4.0],
            ImageSize::new(4, 1),
            ImageSize::new(2, 1),
            Interpolation::Additive,
        );
        assert_eq!(dst, vec![3.0, 7.0]);
    }

    #[test]
    fn test_additive_is_adjoint_of_nearest() {
        // <N x, y> == <x, A y> for non-integer ratios as well.
        let pairs = [
            (ImageSize::new(6, 4), ImageSize::new(3, 2)),
            (ImageSize::new(7, 5), ImageSize::new(3, 2)),
            (ImageSize::new(3, 2), ImageSize::new(7, 5)),
            (ImageSize::new(5, 5), ImageSize::new(5, 5)),
        ];
        for (big, small) in pairs {
            let x: Vec<f64> = (0..big.area()).map(|i| ((i * 37) % 11) as f64 * 0.1).collect();
            let y: Vec<f64> = (0..small.area()).map(|i| ((i * 13) % 7) as f64 * 0.2).collect();

            let nx = resample_plane(&x, big, small, Interpolation::Nearest);
            let ay = resample_plane(&y, small, big, Interpolation::Additive);

            assert_relative_eq!(dot(&nx, &y), dot(&x, &ay), epsilon = 1e-12);
        }
    }
}
