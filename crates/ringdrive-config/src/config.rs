//! Engine configuration file format and operations.

use ringdrive_effects::EffectParameters;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ConfigError;
use crate::validation::{ValidationReport, validate_parameters, validate_processing};

/// Default processing block size in frames.
pub const DEFAULT_BLOCK_SIZE: usize = 512;

/// Offline rendering settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProcessingConfig {
    /// Frames per processing block.
    pub block_size: usize,

    /// Output bit depth. `None` keeps the input file's depth.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bit_depth: Option<u16>,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            block_size: DEFAULT_BLOCK_SIZE,
            bit_depth: None,
        }
    }
}

/// A complete engine configuration: parameters plus processing settings.
///
/// Every field is optional in the file and falls back to the engine default.
/// Unknown keys and unknown mode names are rejected at parse time.
///
/// # TOML Format
///
/// ```toml
/// [params]
/// mod_frequency_hz = 100.0
/// overdrive_gain = 8.0
/// pulser_frequency_hz = 2.0
/// modulation_mode = "ring"   # "ring" | "am"
/// clip_mode = "soft"         # "soft" | "hard"
///
/// [processing]
/// block_size = 512
/// bit_depth = 24
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Effect parameters applied before processing.
    pub params: EffectParameters,

    /// Offline rendering settings.
    pub processing: ProcessingConfig,
}

impl EngineConfig {
    /// Configuration with the given parameters and default processing.
    pub fn with_params(params: EffectParameters) -> Self {
        Self {
            params,
            ..Self::default()
        }
    }

    /// Load a configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
        toml::from_str(&content).map_err(|e| ConfigError::parse_file(path, e))
    }

    /// Parse a configuration from TOML text.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Render the configuration as TOML text.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Save the configuration to a TOML file, creating parent directories.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::create_dir(parent, e))?;
        }

        let content = self.to_toml()?;
        std::fs::write(path, content).map_err(|e| ConfigError::write_file(path, e))
    }

    /// Check parameters and processing settings.
    ///
    /// Out-of-range parameters land in `warnings` (the engine clamps them);
    /// unusable processing settings land in `errors`.
    pub fn validate(&self) -> ValidationReport {
        ValidationReport {
            warnings: validate_parameters(&self.params),
            errors: validate_processing(&self.processing),
        }
    }
}
