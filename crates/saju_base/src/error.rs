//! Error types for chart derivation.

use std::error::Error;
use std::fmt::{Display, Formatter};

use saju_time::TimeError;

/// Errors from validating chart inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum BaseError {
    /// Invalid date or hour.
    Time(TimeError),
    /// Gender token that maps to neither accepted value.
    InvalidGender(String),
}

impl Display for BaseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Time(e) => write!(f, "{e}"),
            Self::InvalidGender(token) => write!(f, "invalid gender: {token:?}"),
        }
    }
}

impl Error for BaseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Time(e) => Some(e),
            Self::InvalidGender(_) => None,
        }
    }
}

impl From<TimeError> for BaseError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}
