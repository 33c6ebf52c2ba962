//! Error types for the rating and scoring engine
//!
//! Data-quality anomalies in box scores are corrected and logged rather than
//! raised, so the variants here cover structural input problems and caller
//! mistakes (bad configuration, inverted ranges).

/// Result type alias for convenience
pub type Result<T> = anyhow::Result<T>;

/// Custom error types for specific scoring scenarios
#[derive(Debug, thiserror::Error)]
pub enum ScoringError {
    #[error("Invalid range: min {min} is greater than max {max}")]
    InvalidRange { min: f64, max: f64 },

    #[error("Malformed box score row: {reason}")]
    MalformedRow { reason: String },

    #[error("Invalid division tier: {value}")]
    InvalidDivision { value: u8 },

    #[error("Configuration error: {message}")]
    ConfigurationError { message: String },

    #[error("Game processing failed: {reason}")]
    ProcessingFailed { reason: String },
}
