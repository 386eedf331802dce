//! The full image formation model: an ordered chain of operators.
//!
//! For operators `A_1 .. A_k` (applied in that order) the model is
//! `A = A_k ... A_1` and its transpose is `Aᵀ = A_1ᵀ ... A_kᵀ`, so the
//! transpose walks the chain backwards.
//!
//! # Example
//!
//! ```rust
//! use superres_core::{ImageSize, PixelImage, RawImage};
//! use superres_ops::{BlurOperator, DownsamplingOperator, ImageModel};
//!
//! let mut model = ImageModel::new();
//! model.add_operator(BlurOperator::new(3, 1.0).unwrap());
//! model.add_operator(DownsamplingOperator::new(2).unwrap());
//!
//! let mut image = PixelImage::from_raw(&RawImage::new(8, 8, 1, vec![100u8; 64]).unwrap()).unwrap();
//! model.apply_to_image(&mut image, 0).unwrap();
//! assert_eq!(image.size(), ImageSize::new(4, 4));
//!
//! model.apply_transpose_to_image(&mut image, 0).unwrap();
//! assert_eq!(image.size(), ImageSize::new(8, 8));
//! ```

use crate::operator::DegradationOperator;
use crate::sparse::SparseMatrix;
use crate::OpsResult;
use superres_core::{ImageSize, PixelImage};
use tracing::debug;

/// Ordered chain of degradation operators.
#[derive(Debug, Default)]
pub struct ImageModel {
    operators: Vec<Box<dyn DegradationOperator>>,
}

impl ImageModel {
    /// Creates an empty model (the identity).
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an operator to the end of the chain.
    pub fn add_operator(&mut self, operator: impl DegradationOperator + 'static) {
        self.operators.push(Box::new(operator));
    }

    /// Returns the number of operators.
    #[inline]
    pub fn len(&self) -> usize {
        self.operators.len()
    }

    /// Returns `true` if the model has no operators.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.operators.is_empty()
    }

    /// Returns the operators in application order.
    pub fn operators(&self) -> impl Iterator<Item = &dyn DegradationOperator> {
        self.operators.iter().map(|op| op.as_ref())
    }

    /// Simulates the observation of frame `index` from a high-resolution image.
    pub fn apply_to_image(&self, image: &mut PixelImage, index: usize) -> OpsResult<()> {
        for op in &self.operators {
            op.apply_to_image(image, index)?;
        }
        Ok(())
    }

    /// Backpropagates a low-resolution image of frame `index` through the model.
    pub fn apply_transpose_to_image(&self, image: &mut PixelImage, index: usize) -> OpsResult<()> {
        for op in self.operators.iter().rev() {
            op.apply_transpose_to_image(image, index)?;
        }
        Ok(())
    }

    /// Returns the size of an image of size `input` after the whole model.
    pub fn output_size(&self, input: ImageSize) -> ImageSize {
        self.operators
            .iter()
            .fold(input, |size, op| op.output_size(size))
    }

    /// Returns the composed matrix `A_k ... A_1` for a channel of `image_size`.
    ///
    /// An empty model yields the identity.
    pub fn operator_matrix(&self, image_size: ImageSize, index: usize) -> OpsResult<SparseMatrix> {
        let mut size = image_size;
        let mut matrix = SparseMatrix::identity(image_size.area());
        for op in &self.operators {
            let stage = op.operator_matrix(size, index)?;
            debug!(op = op.name(), %size, nnz = stage.nnz(), "operator matrix stage");
            matrix = stage.matmul(&matrix)?;
            size = op.output_size(size);
        }
        Ok(matrix)
    }

    /// Applies the forward model to a sequence of frames; frame `i` uses index `i`.
    ///
    /// With the `parallel` feature the frames are processed on the rayon
    /// pool. Returns the first error encountered.
    pub fn apply_to_frames(&self, frames: &mut [PixelImage]) -> OpsResult<()> {
        debug!(frames = frames.len(), operators = self.len(), "apply model to frames");

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            frames
                .par_iter_mut()
                .enumerate()
                .try_for_each(|(i, frame)| self.apply_to_image(frame, i))
        }

        #[cfg(not(feature = "parallel"))]
        {
            frames
                .iter_mut()
                .enumerate()
                .try_for_each(|(i, frame)| self.apply_to_image(frame, i))
        }
    }
}
