//! Configuration errors raised when a slider is constructed.

use thiserror::Error;

/// Rejected slider configuration.
///
/// Every variant is detected up front, before any mapping math runs, so the
/// event handlers themselves are infallible.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("slider range is empty: min ({min}) must be less than max ({max})")]
    InvalidRange { min: f64, max: f64 },
    #[error("slider step must be positive, got {0}")]
    InvalidStep(f64),
    #[error("`{field}` must be a finite number, got {value}")]
    NonFinite { field: &'static str, value: f64 },
    #[error("at most 20 decimals can be displayed, got {0}")]
    TooManyDecimals(usize),
    #[error("`{field}` must be a positive finite scale, got {value}")]
    InvalidScale { field: &'static str, value: f64 },
}
