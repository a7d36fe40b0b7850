//! Error type for position oracles.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Failures reported by a body's position solver or the Earth ephemeris.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum EphemerisError {
    /// The solver could not produce a position for this body at this epoch.
    PositionUnavailable { body: String, jd: f64 },
    /// The epoch lies outside the range the solver covers.
    EpochOutOfRange { jd: f64 },
    /// Malformed input (non-finite epoch, bad table, invalid site, ...).
    InvalidInput(&'static str),
}

impl Display for EphemerisError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PositionUnavailable { body, jd } => {
                write!(f, "no position for {body} at JD {jd}")
            }
            Self::EpochOutOfRange { jd } => write!(f, "epoch out of range: JD {jd}"),
            Self::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
        }
    }
}

impl Error for EphemerisError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        let e = EphemerisError::PositionUnavailable {
            body: "Mars".into(),
            jd: 2_460_000.5,
        };
        assert_eq!(e.to_string(), "no position for Mars at JD 2460000.5");
        assert_eq!(
            EphemerisError::EpochOutOfRange { jd: 1.5 }.to_string(),
            "epoch out of range: JD 1.5"
        );
        assert_eq!(
            EphemerisError::InvalidInput("bad").to_string(),
            "invalid input: bad"
        );
    }
}
