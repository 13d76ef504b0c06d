//! Error types for request resolution and configuration.
//!
//! The calculator itself is total over its input domain and never fails;
//! these errors come from the layer that turns user input into calculator
//! arguments, and from loading the server configuration.

/// Result type for fallible operations in this crate.
pub type CalcResult<T> = Result<T, CalcError>;

/// Error type for input resolution and configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalcError {
    /// No age bracket was supplied with the request.
    #[error("Please select your age range before calculating.")]
    MissingAgeBracket,

    /// The supplied age bracket id or label matches no table row.
    #[error("Unknown age bracket: '{0}'")]
    UnknownAgeBracket(String),

    /// Hour outside the 12-hour clock range 1..=12.
    #[error("Hour must be between 1 and 12, got {0}")]
    InvalidHour(u32),

    /// Minute outside 0..=59.
    #[error("Minute must be between 0 and 59, got {0}")]
    InvalidMinute(u32),

    /// Meridiem flag was neither AM nor PM.
    #[error("Unknown meridiem: '{0}' (expected AM or PM)")]
    InvalidMeridiem(String),

    /// Mode string was neither wake_at nor sleep_at.
    #[error("Unknown mode: '{0}' (expected wake_at or sleep_at)")]
    InvalidMode(String),

    /// Configuration file could not be read or parsed.
    #[error("Configuration error: {0}")]
    Config(String),
}
