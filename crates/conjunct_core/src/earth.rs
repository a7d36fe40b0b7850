//! Earth's heliocentric position, the reference frame for planetary solvers.

use conjunct_frames::Angle;

use crate::epoch::EpochNumbers;
use crate::error::EphemerisError;

/// Earth's heliocentric ecliptic position at one epoch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EarthReference {
    /// Heliocentric ecliptic longitude.
    pub lon: Angle,
    /// Heliocentric ecliptic latitude.
    pub lat: Angle,
    /// Sun-Earth distance in AU.
    pub radius_au: f64,
}

impl EarthReference {
    /// Heliocentric ecliptic rectangular coordinates in AU.
    pub fn heliocentric_xyz(&self) -> [f64; 3] {
        let (sin_l, cos_l) = self.lon.radians().sin_cos();
        let (sin_b, cos_b) = self.lat.radians().sin_cos();
        [
            self.radius_au * cos_b * cos_l,
            self.radius_au * cos_b * sin_l,
            self.radius_au * sin_b,
        ]
    }
}

/// Source of Earth's position; resolved once per evaluated instant.
pub trait EarthEphemeris {
    fn earth_position(&self, num: &EpochNumbers) -> Result<EarthReference, EphemerisError>;
}

impl<F> EarthEphemeris for F
where
    F: Fn(&EpochNumbers) -> Result<EarthReference, EphemerisError>,
{
    fn earth_position(&self, num: &EpochNumbers) -> Result<EarthReference, EphemerisError> {
        self(num)
    }
}
