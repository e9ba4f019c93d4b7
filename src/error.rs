//! Error types for sandbox construction and config loading.
//!
//! Nothing in the per-frame step can fail; these are raised once, at setup.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{field} must be positive (got {value})")]
    NonPositive { field: &'static str, value: f32 },

    #[error("{field} must not be negative (got {value})")]
    Negative { field: &'static str, value: f32 },

    #[error("{field} must be within [{min}, {max}] (got {value})")]
    OutOfRange {
        field: &'static str,
        value: f32,
        min: f32,
        max: f32,
    },

    #[error("{field} must be finite")]
    NotFinite { field: &'static str },

    #[error("world bounds {width}x{height} cannot hold a body of diameter {diameter}")]
    BoundsTooSmall {
        width: f32,
        height: f32,
        diameter: f32,
    },

    #[error("Invalid scene: {0}")]
    InvalidScene(String),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Reject NaN and infinities
pub(crate) fn finite(field: &'static str, value: f32) -> Result<f32> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ConfigError::NotFinite { field })
    }
}

/// Require `value > 0`
pub(crate) fn positive(field: &'static str, value: f32) -> Result<f32> {
    if finite(field, value)? > 0.0 {
        Ok(value)
    } else {
        Err(ConfigError::NonPositive { field, value })
    }
}

/// Require `value >= 0`
pub(crate) fn non_negative(field: &'static str, value: f32) -> Result<f32> {
    if finite(field, value)? >= 0.0 {
        Ok(value)
    } else {
        Err(ConfigError::Negative { field, value })
    }
}

/// Require `min <= value <= max`
pub(crate) fn in_range(field: &'static str, value: f32, min: f32, max: f32) -> Result<f32> {
    if (min..=max).contains(&finite(field, value)?) {
        Ok(value)
    } else {
        Err(ConfigError::OutOfRange {
            field,
            value,
            min,
            max,
        })
    }
}
