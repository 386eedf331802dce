//! Shared fixtures for the superres benchmarks.
//!
//! Run with: `cargo bench -p superres-bench`

use superres_core::{PixelImage, RawImage};

/// Builds a single-channel `size x size` test image with a deterministic pattern.
pub fn test_image(size: usize) -> PixelImage {
    let data: Vec<u8> = (0..size * size).map(|i| ((i * 31) % 256) as u8).collect();
    match RawImage::new(size, size, 1, data).and_then(|raw| PixelImage::from_raw(&raw)) {
        Ok(image) => image,
        Err(e) => panic!("invalid benchmark fixture: {e}"),
    }
}
