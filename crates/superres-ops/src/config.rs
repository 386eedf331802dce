//! YAML description of an image formation model.
//!
//! ```yaml
//! blur:
//!   radius: 5
//!   sigma: 1.2
//! downsampling:
//!   scale: 2
//! ```
//!
//! Both sections are optional. [`ModelConfig::build`] always places the blur
//! before the downsampling, since the optics act on the scene before the
//! sensor samples it.
//!
//! # Example
//!
//! ```rust
//! use superres_core::ImageSize;
//! use superres_ops::ModelConfig;
//!
//! let config = ModelConfig::from_yaml_str("downsampling:\n  scale: 4\n").unwrap();
//! let model = config.build().unwrap();
//! assert_eq!(model.output_size(ImageSize::new(64, 32)), ImageSize::new(16, 8));
//! ```

use crate::blur::BlurOperator;
use crate::downsample::DownsamplingOperator;
use crate::model::ImageModel;
use crate::{OpsError, OpsResult};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Gaussian blur parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BlurConfig {
    /// Kernel width/height in pixels (odd).
    pub radius: usize,
    /// Gaussian standard deviation.
    pub sigma: f64,
}

/// Decimation parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownsamplingConfig {
    /// Integer decimation factor.
    pub scale: usize,
}

/// Declarative image formation model.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModelConfig {
    /// Optical blur, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blur: Option<BlurConfig>,
    /// Sensor decimation, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub downsampling: Option<DownsamplingConfig>,
}

impl ModelConfig {
    /// Loads a model description from a YAML file.
    ///
    /// # Errors
    ///
    /// [`OpsError::ConfigNotFound`] if `path` does not exist, otherwise I/O
    /// or YAML errors.
    pub fn from_file(path: impl AsRef<Path>) -> OpsResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(OpsError::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(path)?;
        debug!(path = %path.display(), "loading model config");
        Self::from_yaml_str(&content)
    }

    /// Parses a model description from a YAML string.
    pub fn from_yaml_str(yaml: &str) -> OpsResult<Self> {
        // An empty document means "no operators".
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Serializes the description back to YAML.
    pub fn to_yaml_string(&self) -> OpsResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Builds the operator chain.
    ///
    /// # Errors
    ///
    /// [`OpsError::InvalidParameter`] if a section holds invalid values.
    pub fn build(&self) -> OpsResult<ImageModel> {
        let mut model = ImageModel::new();
        if let Some(blur) = self.blur {
            model.add_operator(BlurOperator::new(blur.radius, blur.sigma)?);
        }
        if let Some(down) = self.downsampling {
            model.add_operator(DownsamplingOperator::new(down.scale)?);
        }
        debug!(operators = model.len(), "built image model");
        Ok(model)
    }
}
