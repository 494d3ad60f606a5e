//! Error type for the convenience layer.

use std::error::Error;
use std::fmt::{Display, Formatter};

use saju_base::BaseError;
use saju_time::TimeError;

/// Errors from assembling a reading.
#[derive(Debug)]
#[non_exhaustive]
pub enum SajuError {
    /// Date, hour or gender failed validation.
    Base(BaseError),
    /// Name is empty or whitespace.
    EmptyName,
    /// Lunar input without a converter able to handle it.
    LunarUnsupported,
    /// The lunar converter rejected the date.
    LunarConversion(Box<dyn Error + Send + Sync>),
}

impl Display for SajuError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Base(e) => write!(f, "{e}"),
            Self::EmptyName => write!(f, "name must not be empty"),
            Self::LunarUnsupported => write!(f, "lunar calendar input is not supported"),
            Self::LunarConversion(e) => write!(f, "lunar conversion failed: {e}"),
        }
    }
}

impl Error for SajuError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Base(e) => Some(e),
            Self::LunarConversion(e) => Some(e.as_ref()),
            Self::EmptyName | Self::LunarUnsupported => None,
        }
    }
}

impl From<BaseError> for SajuError {
    fn from(e: BaseError) -> Self {
        Self::Base(e)
    }
}

impl From<TimeError> for SajuError {
    fn from(e: TimeError) -> Self {
        Self::Base(BaseError::Time(e))
    }
}
