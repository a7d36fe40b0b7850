//! Catalogue objects whose position changes only through precession.

use conjunct_frames::{EquatorialCoords, precess_from_j2000};

use crate::body::{BodyKind, SkyObject};
use crate::epoch::EpochNumbers;
use crate::error::EphemerisError;

/// A star or deep-sky object with a J2000.0 catalogue position.
///
/// `update_coords` returns the mean position of date. Proper motion,
/// nutation and aberration are not applied.
#[derive(Debug, Clone, PartialEq)]
pub struct FixedObject {
    name: String,
    kind: BodyKind,
    j2000: EquatorialCoords,
}

impl FixedObject {
    pub fn star(name: impl Into<String>, j2000: EquatorialCoords) -> Self {
        Self {
            name: name.into(),
            kind: BodyKind::FixedStar,
            j2000,
        }
    }

    pub fn deep_sky(name: impl Into<String>, j2000: EquatorialCoords) -> Self {
        Self {
            name: name.into(),
            kind: BodyKind::DeepSky,
            j2000,
        }
    }

    pub fn j2000(&self) -> EquatorialCoords {
        self.j2000
    }
}

impl SkyObject for FixedObject {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> BodyKind {
        self.kind
    }

    fn update_coords(&self, num: &EpochNumbers) -> Result<EquatorialCoords, EphemerisError> {
        Ok(precess_from_j2000(&self.j2000, num.julian_centuries()))
    }
}
