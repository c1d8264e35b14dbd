//! Configuration files for the ringdrive effects chain.
//!
//! An [`EngineConfig`] holds the five engine parameters plus offline
//! processing settings and is stored as TOML. Values the engine would clamp
//! are reported as validation warnings; settings the renderer cannot honor
//! are errors.
//!
//! # Example
//!
//! ```rust
//! use ringdrive_config::EngineConfig;
//! use ringdrive_effects::ClipMode;
//!
//! let config = EngineConfig::from_toml(
//!     r#"
//!     [params]
//!     overdrive_gain = 8.0
//!     clip_mode = "soft"
//!
//!     [processing]
//!     block_size = 256
//!     "#,
//! )
//! .unwrap();
//!
//! assert_eq!(config.params.clip_mode, ClipMode::Soft);
//! assert!(config.validate().is_ok());
//! ```

mod config;
mod error;

/// Parameter and processing-setting validation.
pub mod validation;

pub use config::{DEFAULT_BLOCK_SIZE, EngineConfig, ProcessingConfig};
pub use error::ConfigError;
pub use validation::{
    MAX_BLOCK_SIZE, VALID_BIT_DEPTHS, ValidationError, ValidationReport, ValidationResult,
    validate_param, validate_parameters, validate_processing,
};
