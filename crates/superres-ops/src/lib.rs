//! # superres-ops
//!
//! Linear degradation operators of the super-resolution image formation model.
//!
//! A low-resolution observation is modelled as `y = A x`, where `x` is the
//! high-resolution scene and `A` a chain of linear stages. Reconstruction
//! algorithms need both `A` and its transpose `Aᵀ`, either matrix-free or as
//! an explicit sparse matrix.
//!
//! # Modules
//!
//! - [`operator`] - The [`DegradationOperator`] trait
//! - [`blur`] - Gaussian optical blur
//! - [`downsample`] - Integer sensor decimation
//! - [`model`] - Operator chains
//! - [`config`] - YAML model descriptions
//! - [`filter`] - Gaussian kernels and zero-padded convolution
//! - [`sparse`] - Compressed sparse row matrices
//!
//! # Example
//!
//! ```rust
//! use superres_core::{ImageSize, PixelImage, RawImage};
//! use superres_ops::{BlurOperator, DegradationOperator, DownsamplingOperator};
//!
//! let mut image = PixelImage::from_raw(&RawImage::new(4, 4, 1, vec![200u8; 16]).unwrap()).unwrap();
//!
//! let blur = BlurOperator::new(3, 1.0).unwrap();
//! let down = DownsamplingOperator::new(2).unwrap();
//! blur.apply_to_image(&mut image, 0).unwrap();
//! down.apply_to_image(&mut image, 0).unwrap();
//! assert_eq!(image.size(), ImageSize::new(2, 2));
//!
//! // The same map as a matrix acting on a flattened channel.
//! let m = down.operator_matrix(ImageSize::new(4, 4), 0).unwrap();
//! assert_eq!((m.rows(), m.cols()), (4, 16));
//! ```
//!
//! # Features
//!
//! - `parallel` (default) - process frames of a sequence on the rayon pool
//!   in [`ImageModel::apply_to_frames`]

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;

pub mod blur;
pub mod config;
pub mod downsample;
pub mod filter;
pub mod model;
pub mod operator;
pub mod sparse;

pub use blur::BlurOperator;
pub use config::{BlurConfig, DownsamplingConfig, ModelConfig};
pub use downsample::DownsamplingOperator;
pub use error::{OpsError, OpsResult};
pub use model::ImageModel;
pub use operator::DegradationOperator;
pub use sparse::SparseMatrix;
