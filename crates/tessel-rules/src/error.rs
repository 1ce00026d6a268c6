//! Error types for rule construction.

use std::fmt;

/// Errors arising from invalid rule parameters.
#[derive(Clone, Debug, PartialEq)]
pub enum RuleError {
    /// The heat self-weight `cp` is negative or not finite.
    InvalidSelfWeight {
        /// The rejected value.
        value: f64,
    },
    /// A terrain growth limit of zero steps was requested.
    ZeroGrowthLimit,
}

impl fmt::Display for RuleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSelfWeight { value } => {
                write!(f, "self-weight must be finite and >= 0, got {value}")
            }
            Self::ZeroGrowthLimit => write!(f, "growth limit must be at least 1 step"),
        }
    }
}

impl std::error::Error for RuleError {}
