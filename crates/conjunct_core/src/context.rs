//! Observer + Earth ephemeris bundle and the per-instant frame built from it.

use conjunct_frames::Angle;

use crate::earth::{EarthEphemeris, EarthReference};
use crate::epoch::EpochNumbers;
use crate::error::EphemerisError;
use crate::observer::ObserverLocation;

/// Everything a position solver needs besides the body itself.
///
/// Both members are borrowed: the caller owns the site and the ephemeris
/// for the lifetime of a search.
#[derive(Clone, Copy)]
pub struct ObservingContext<'a> {
    observer: &'a ObserverLocation,
    earth: &'a dyn EarthEphemeris,
}

impl std::fmt::Debug for ObservingContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObservingContext")
            .field("observer", self.observer)
            .finish_non_exhaustive()
    }
}

impl<'a> ObservingContext<'a> {
    pub fn new(observer: &'a ObserverLocation, earth: &'a dyn EarthEphemeris) -> Self {
        Self { observer, earth }
    }

    pub fn observer(&self) -> &ObserverLocation {
        self.observer
    }

    /// Resolve Earth and the local sidereal time for `jd`.
    pub fn frame_at(&self, jd: f64) -> Result<ObservingFrame, EphemerisError> {
        if !jd.is_finite() {
            return Err(EphemerisError::InvalidInput("epoch must be finite"));
        }
        let num = EpochNumbers::new(jd);
        let earth = self.earth.earth_position(&num)?;
        Ok(ObservingFrame {
            num,
            earth,
            latitude: self.observer.latitude(),
            lst: self.observer.lst_at(jd),
        })
    }
}

/// Inputs shared by every position solver at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObservingFrame {
    pub num: EpochNumbers,
    pub earth: EarthReference,
    pub latitude: Angle,
    pub lst: Angle,
}
