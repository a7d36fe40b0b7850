//! Geographic observer site.

use conjunct_frames::Angle;
use conjunct_time::gmst_rad;

use crate::error::EphemerisError;

/// Observer latitude/longitude (east positive).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverLocation {
    latitude: Angle,
    longitude: Angle,
}

impl ObserverLocation {
    /// Site from latitude and east longitude in degrees.
    pub fn new(latitude_deg: f64, longitude_deg: f64) -> Result<Self, EphemerisError> {
        if !latitude_deg.is_finite() || !(-90.0..=90.0).contains(&latitude_deg) {
            return Err(EphemerisError::InvalidInput(
                "latitude must be within [-90, 90] degrees",
            ));
        }
        if !longitude_deg.is_finite() {
            return Err(EphemerisError::InvalidInput("longitude must be finite"));
        }
        Ok(Self {
            latitude: Angle::from_degrees(latitude_deg),
            longitude: Angle::from_degrees(longitude_deg).reduce_signed(),
        })
    }

    /// The Greenwich meridian on the equator, used when no site is given.
    pub const fn greenwich() -> Self {
        Self {
            latitude: Angle::ZERO,
            longitude: Angle::ZERO,
        }
    }

    pub fn latitude(&self) -> Angle {
        self.latitude
    }

    pub fn longitude(&self) -> Angle {
        self.longitude
    }

    /// Local sidereal time from Greenwich sidereal time.
    pub fn gst_to_lst(&self, gst: Angle) -> Angle {
        (gst + self.longitude).reduce()
    }

    /// Local mean sidereal time at a Julian Date (taken as UT1).
    pub fn lst_at(&self, jd: f64) -> Angle {
        self.gst_to_lst(Angle::from_radians(gmst_rad(jd)))
    }
}

impl Default for ObserverLocation {
    fn default() -> Self {
        Self::greenwich()
    }
}
