//! Per-epoch numbers shared by every position solver at one instant.

use conjunct_frames::Angle;
use conjunct_time::julian_centuries;

/// Quantities that depend only on the epoch, computed once per evaluation
/// and handed to every solver for that instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EpochNumbers {
    jd: f64,
    centuries: f64,
    obliquity: Angle,
}

impl EpochNumbers {
    pub fn new(jd: f64) -> Self {
        let t = julian_centuries(jd);
        Self {
            jd,
            centuries: t,
            obliquity: mean_obliquity(t),
        }
    }

    pub fn jd(&self) -> f64 {
        self.jd
    }

    /// Julian centuries since J2000.0.
    pub fn julian_centuries(&self) -> f64 {
        self.centuries
    }

    /// Mean obliquity of the ecliptic of date.
    pub fn obliquity(&self) -> Angle {
        self.obliquity
    }
}

/// IAU 1980 mean obliquity (Meeus eq. 22.2).
fn mean_obliquity(t: f64) -> Angle {
    let arcsec = 84_381.448 - t * (46.8150 + t * (0.00059 - t * 0.001813));
    Angle::from_degrees(arcsec / 3600.0)
}
