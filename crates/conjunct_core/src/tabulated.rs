//! Solar-system body backed by a precomputed RA/Dec table.
//!
//! Lets callers plug an ephemeris computed elsewhere into the search. The
//! table is taken as apparent positions for the observer it was computed
//! for, so the site, sidereal time and Earth reference are not used.

use conjunct_frames::{Angle, EquatorialCoords};

use crate::body::{Body, BodyKind, SkyObject, SolarSystemBody};
use crate::earth::EarthReference;
use crate::epoch::EpochNumbers;
use crate::error::EphemerisError;

/// Positions linearly interpolated between table rows.
///
/// Epochs outside the first and last row are
/// [`EphemerisError::EpochOutOfRange`]. For a closest-approach search over
/// `[jd_start, jd_end]` the table has to start at least the validation
/// lookback (five days by default) before `jd_start` and run a little past
/// `jd_end`.
#[derive(Debug, Clone, PartialEq)]
pub struct TabulatedBody {
    name: String,
    kind: BodyKind,
    body: Option<Body>,
    samples: Vec<(f64, EquatorialCoords)>,
}

impl TabulatedBody {
    /// Build from `(jd, position)` samples in strictly increasing time order.
    pub fn new(
        name: impl Into<String>,
        kind: BodyKind,
        samples: Vec<(f64, EquatorialCoords)>,
    ) -> Result<Self, EphemerisError> {
        if !kind.is_solar_system() {
            return Err(EphemerisError::InvalidInput(
                "tabulated bodies must be solar-system objects",
            ));
        }
        if samples.len() < 2 {
            return Err(EphemerisError::InvalidInput(
                "table needs at least two samples",
            ));
        }
        if samples.iter().any(|(jd, _)| !jd.is_finite()) {
            return Err(EphemerisError::InvalidInput("sample epochs must be finite"));
        }
        if samples.windows(2).any(|w| w[1].0 <= w[0].0) {
            return Err(EphemerisError::InvalidInput(
                "sample epochs must be strictly increasing",
            ));
        }
        Ok(Self {
            name: name.into(),
            kind,
            body: None,
            samples,
        })
    }

    /// Table for one of the major bodies; name and kind come from `body`.
    pub fn for_body(
        body: Body,
        samples: Vec<(f64, EquatorialCoords)>,
    ) -> Result<Self, EphemerisError> {
        let mut table = Self::new(body.name(), body.kind(), samples)?;
        table.body = Some(body);
        Ok(table)
    }

    /// Covered time span `(first_jd, last_jd)`.
    pub fn span(&self) -> (f64, f64) {
        (self.samples[0].0, self.samples[self.samples.len() - 1].0)
    }

    /// Linear interpolation, RA unwrapped across 0h.
    fn interpolate(&self, jd: f64) -> Result<EquatorialCoords, EphemerisError> {
        let (first, last) = self.span();
        if !(first..=last).contains(&jd) {
            return Err(EphemerisError::EpochOutOfRange { jd });
        }

        let idx = self.samples.partition_point(|(t, _)| *t <= jd);
        if idx >= self.samples.len() {
            return Ok(self.samples[self.samples.len() - 1].1);
        }
        let (t0, p0) = self.samples[idx - 1];
        let (t1, p1) = self.samples[idx];
        let f = (jd - t0) / (t1 - t0);

        let dra = (p1.ra - p0.ra).reduce_signed();
        let ra = p0.ra + Angle::from_radians(dra.radians() * f);
        let dec = p0.dec + Angle::from_radians((p1.dec - p0.dec).radians() * f);
        Ok(EquatorialCoords::new(ra, dec))
    }
}

impl SkyObject for TabulatedBody {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> BodyKind {
        self.kind
    }

    fn body(&self) -> Option<Body> {
        self.body
    }

    fn as_solar_system(&self) -> Option<&dyn SolarSystemBody> {
        Some(self)
    }
}

impl SolarSystemBody for TabulatedBody {
    fn find_position(
        &self,
        num: &EpochNumbers,
        _latitude: Angle,
        _lst: Angle,
        _earth: &EarthReference,
    ) -> Result<EquatorialCoords, EphemerisError> {
        self.interpolate(num.jd())
    }
}
