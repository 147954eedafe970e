use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::filtering::ParameterRange;

/// Upper bound of the parameter slider in the reference directory.
pub const MAX_PARAMETERS: u64 = 200_000_000_000;

/// Slider step of the reference directory.
pub const PARAMETER_STEP: u64 = 1_000_000_000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Invalid parameter bounds: max {max}, step {step}")]
    InvalidBounds { max: u64, step: u64 },
}

/// Limits of the parameter range input. The lower bound is always zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterBounds {
    pub max: u64,
    pub step: u64,
}

impl Default for ParameterBounds {
    fn default() -> Self {
        Self {
            max: MAX_PARAMETERS,
            step: PARAMETER_STEP,
        }
    }
}

impl ParameterBounds {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.step == 0 || self.step > self.max {
            return Err(ConfigError::InvalidBounds {
                max: self.max,
                step: self.step,
            });
        }
        Ok(())
    }

    /// `[0, max]`, the range that admits every in-bounds entry.
    pub fn full_range(&self) -> ParameterRange {
        ParameterRange::new(0, self.max)
    }

    /// `[0, max]` widened to reach `largest`, so that the starting range never
    /// hides an entry heavier than the slider maximum.
    pub fn covering(&self, largest: u64) -> ParameterRange {
        ParameterRange::new(0, self.max.max(largest))
    }

    /// Pull both ends of `range` into `[0, max]` and reorder them if inverted.
    ///
    /// For input widgets only. The filter engine never clamps.
    pub fn clamp(&self, range: ParameterRange) -> ParameterRange {
        let a = range.min.min(self.max);
        let b = range.max.min(self.max);
        ParameterRange::new(a.min(b), a.max(b))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryConfig {
    pub version: String,
    pub bounds: ParameterBounds,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self::v0()
    }
}

impl DirectoryConfig {
    pub fn v0() -> Self {
        Self {
            version: "1".into(),
            bounds: ParameterBounds::default(),
        }
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let f = fs::File::open(path)?;
        let config: DirectoryConfig = serde_json::from_reader(f)?;
        config.bounds.validate()?;
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let f = fs::File::create(path)?;
        serde_json::to_writer_pretty(&f, self)?;
        f.sync_all()?;
        Ok(())
    }
}
