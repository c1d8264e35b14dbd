//! Parameter and processing-setting validation.
//!
//! Two severities exist. Parameter values outside their range are
//! *warnings*: the engine clamps them, so the file still works, but the user
//! probably mistyped something. Processing settings the renderer cannot
//! honor (a zero block size, an unwritable bit depth) are *errors*.
//!
//! # Example
//!
//! ```rust
//! use ringdrive_config::validation::{ValidationError, validate_param};
//!
//! assert_eq!(validate_param("overdrive", 8.0), Ok(8.0));
//! assert!(matches!(
//!     validate_param("mod_freq", 9000.0),
//!     Err(ValidationError::OutOfRange { .. })
//! ));
//! ```

use ringdrive_effects::EffectParameters;
use ringdrive_effects::params::DESCRIPTORS;
use thiserror::Error;

use crate::ProcessingConfig;

/// Largest accepted processing block, in frames.
pub const MAX_BLOCK_SIZE: usize = 65536;

/// Bit depths the renderer can write.
pub const VALID_BIT_DEPTHS: [u16; 3] = [16, 24, 32];

/// Validation error types.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    /// Unknown parameter name.
    #[error("unknown parameter '{0}'")]
    UnknownParameter(String),

    /// Parameter value out of range.
    #[error("parameter '{param}' value {value} out of range [{min}, {max}]")]
    OutOfRange {
        /// Stable string id of the parameter.
        param: &'static str,
        /// The value that was out of range.
        value: f64,
        /// Minimum allowed value.
        min: f64,
        /// Maximum allowed value.
        max: f64,
    },

    /// Block size outside `1..=MAX_BLOCK_SIZE`.
    #[error("block size {0} out of range [1, {MAX_BLOCK_SIZE}]")]
    InvalidBlockSize(usize),

    /// Bit depth other than 16, 24 or 32.
    #[error("bit depth {0} not supported (expected 16, 24 or 32)")]
    InvalidBitDepth(u16),

    /// Multiple validation errors.
    #[error("multiple validation errors: {}", .0.iter().map(|e| e.to_string()).collect::<Vec<_>>().join("; "))]
    Multiple(Vec<ValidationError>),
}

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Outcome of validating a whole configuration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationReport {
    /// Problems the engine will correct by clamping.
    pub warnings: Vec<ValidationError>,
    /// Problems that prevent processing.
    pub errors: Vec<ValidationError>,
}

impl ValidationReport {
    /// True when there are no errors (warnings allowed).
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// Collapse errors into a single `Err`; warnings are dropped.
    pub fn into_result(self) -> ValidationResult<()> {
        let mut errors = self.errors;
        match errors.len() {
            0 => Ok(()),
            1 => Err(errors.remove(0)),
            _ => Err(ValidationError::Multiple(errors)),
        }
    }
}

/// Check a value for the parameter with string id `param`.
///
/// Selectors are checked against their id range. Returns the value unchanged
/// when it is in range. NaN is always out of range.
pub fn validate_param(param: &str, value: f64) -> ValidationResult<f64> {
    let desc = DESCRIPTORS
        .iter()
        .find(|d| d.string_id.eq_ignore_ascii_case(param))
        .ok_or_else(|| ValidationError::UnknownParameter(param.to_string()))?;

    if value >= desc.min && value <= desc.max {
        Ok(value)
    } else {
        Err(ValidationError::OutOfRange {
            param: desc.string_id,
            value,
            min: desc.min,
            max: desc.max,
        })
    }
}

/// Out-of-range continuous parameters, one warning each.
pub fn validate_parameters(params: &EffectParameters) -> Vec<ValidationError> {
    DESCRIPTORS
        .iter()
        .enumerate()
        .filter_map(|(index, desc)| validate_param(desc.string_id, params.get_index(index)).err())
        .collect()
}

/// Processing settings the renderer cannot honor.
pub fn validate_processing(processing: &ProcessingConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    if processing.block_size == 0 || processing.block_size > MAX_BLOCK_SIZE {
        errors.push(ValidationError::InvalidBlockSize(processing.block_size));
    }
    if let Some(bits) = processing.bit_depth
        && !VALID_BIT_DEPTHS.contains(&bits)
    {
        errors.push(ValidationError::InvalidBitDepth(bits));
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_range_values_pass() {
        assert_eq!(validate_param("mod_freq", 0.0), Ok(0.0));
        assert_eq!(validate_param("mod_freq", 5000.0), Ok(5000.0));
        assert_eq!(validate_param("PULSER_FREQ", 10.0), Ok(10.0));
        assert_eq!(validate_param("clip_mode", 1.0), Ok(1.0));
    }

    #[test]
    fn out_of_range_reports_bounds() {
        let err = validate_param("overdrive", 0.5).unwrap_err();
        assert_eq!(
            err,
            ValidationError::OutOfRange {
                param: "overdrive",
                value: 0.5,
                min: 1.0,
                max: 50.0,
            }
        );
        assert!(err.to_string().contains("[1, 50]"));
    }

    #[test]
    fn nan_is_out_of_range() {
        assert!(validate_param("pulser_freq", f64::NAN).is_err());
    }

    #[test]
    fn unknown_parameter() {
        assert_eq!(
            validate_param("tone", 1.0),
            Err(ValidationError::UnknownParameter("tone".to_string()))
        );
    }

    #[test]
    fn defaults_produce_no_warnings() {
        assert!(validate_parameters(&EffectParameters::default()).is_empty());
    }

    #[test]
    fn every_bad_field_warned() {
        let params = EffectParameters {
            mod_frequency_hz: -1.0,
            overdrive_gain: 51.0,
            pulser_frequency_hz: 20.0,
            ..EffectParameters::default()
        };
        assert_eq!(validate_parameters(&params).len(), 3);
    }

    #[test]
    fn processing_limits() {
        let ok = ProcessingConfig {
            block_size: MAX_BLOCK_SIZE,
            bit_depth: Some(24),
        };
        assert!(validate_processing(&ok).is_empty());

        let bad = ProcessingConfig {
            block_size: 0,
            bit_depth: Some(8),
        };
        assert_eq!(
            validate_processing(&bad),
            vec![
                ValidationError::InvalidBlockSize(0),
                ValidationError::InvalidBitDepth(8)
            ]
        );
    }

    #[test]
    fn report_into_result() {
        assert!(ValidationReport::default().into_result().is_ok());

        let single = ValidationReport {
            warnings: vec![],
            errors: vec![ValidationError::InvalidBitDepth(8)],
        };
        assert_eq!(single.into_result(), Err(ValidationError::InvalidBitDepth(8)));

        let multiple = ValidationReport {
            warnings: vec![],
            errors: vec![
                ValidationError::InvalidBlockSize(0),
                ValidationError::InvalidBitDepth(8),
            ],
        };
        let err = multiple.into_result().unwrap_err();
        assert!(matches!(err, ValidationError::Multiple(ref v) if v.len() == 2));
        assert!(err.to_string().contains("; "));
    }
}
