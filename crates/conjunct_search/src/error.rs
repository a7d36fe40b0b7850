//! Error type for the conjunction search.

use std::error::Error;
use std::fmt::{Display, Formatter};

use conjunct_core::EphemerisError;

/// Errors from a closest-approach search.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum SearchError {
    /// Search configuration or interval is invalid.
    InvalidConfig(&'static str),
    /// A position oracle failed; the search cannot continue without it.
    Ephemeris(EphemerisError),
    /// The caller raised the cancel flag.
    Cancelled,
}

impl Display for SearchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
            Self::Ephemeris(e) => write!(f, "ephemeris error: {e}"),
            Self::Cancelled => f.write_str("search cancelled"),
        }
    }
}

impl Error for SearchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Ephemeris(e) => Some(e),
            _ => None,
        }
    }
}

impl From<EphemerisError> for SearchError {
    fn from(e: EphemerisError) -> Self {
        Self::Ephemeris(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_ephemeris_error() {
        let e: SearchError = EphemerisError::EpochOutOfRange { jd: 3.0 }.into();
        assert_eq!(e.to_string(), "ephemeris error: epoch out of range: JD 3");
        assert!(e.source().is_some());
    }

    #[test]
    fn cancelled_has_no_source() {
        assert!(SearchError::Cancelled.source().is_none());
        assert_eq!(SearchError::Cancelled.to_string(), "search cancelled");
    }
}
