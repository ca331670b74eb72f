//! Error Types
//!
//! Errors only occur at the edges (form input, config, select values).
//! The list operations themselves are total.

use std::fmt;

/// Rejected add-form input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftError {
    EmptyDescription,
    InvalidQuantity(String),
    QuantityOutOfRange { quantity: u32, max: u32 },
}

impl fmt::Display for DraftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DraftError::EmptyDescription => write!(f, "Description must not be empty"),
            DraftError::InvalidQuantity(value) => write!(f, "Quantity {:?} is not a number", value),
            DraftError::QuantityOutOfRange { quantity, max } => {
                write!(f, "Quantity {} is outside 1..={}", quantity, max)
            }
        }
    }
}

impl std::error::Error for DraftError {}

/// Invalid inline configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    Parse(String),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse(msg) => write!(f, "Config parse error: {}", msg),
            ConfigError::Invalid(msg) => write!(f, "Invalid config: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e.to_string())
    }
}

/// Unknown value coming from the sort `<select>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSortByError(pub String);

impl fmt::Display for ParseSortByError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown sort key: {}", self.0)
    }
}

impl std::error::Error for ParseSortByError {}
