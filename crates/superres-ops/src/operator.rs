//! The degradation operator abstraction.
//!
//! A degradation operator is one linear stage of the image formation model
//! (optical blur, sensor decimation, ...). Reconstruction code needs three
//! views of the same linear map `A`:
//!
//! - `A x` - [`apply_to_image`](DegradationOperator::apply_to_image), to simulate an observation
//! - `Aᵀ y` - [`apply_transpose_to_image`](DegradationOperator::apply_transpose_to_image), to backpropagate a residual
//! - `A` itself - [`operator_matrix`](DegradationOperator::operator_matrix), for matrix-based solvers
//!
//! All three act channel by channel on row-major planes and must agree: the
//! matrix applied to a flattened channel reproduces `apply_to_image`, and its
//! transpose reproduces `apply_transpose_to_image`.
//!
//! The `index` argument names the frame of a multi-frame sequence the
//! operator is applied for. Operators whose parameters vary per frame
//! (e.g. motion) dispatch on it; blur and downsampling ignore it.

use crate::sparse::SparseMatrix;
use crate::OpsResult;
use std::fmt;
use superres_core::{ImageSize, PixelImage};

/// One linear stage of the image formation model.
///
/// Implementations are immutable after construction and may be shared
/// across threads.
pub trait DegradationOperator: fmt::Debug + Send + Sync {
    /// Short operator name for logs.
    fn name(&self) -> &'static str;

    /// Applies the operator in place.
    fn apply_to_image(&self, image: &mut PixelImage, index: usize) -> OpsResult<()>;

    /// Applies the transpose (adjoint) of the operator in place.
    fn apply_transpose_to_image(&self, image: &mut PixelImage, index: usize) -> OpsResult<()>;

    /// Returns the explicit matrix of the operator for one channel of size
    /// `image_size`, acting on the row-major flattened channel.
    fn operator_matrix(&self, image_size: ImageSize, index: usize) -> OpsResult<SparseMatrix>;

    /// Returns the size of an image of size `input` after the operator.
    fn output_size(&self, input: ImageSize) -> ImageSize {
        input
    }
}
