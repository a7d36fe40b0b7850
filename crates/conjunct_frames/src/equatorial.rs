//! Equatorial coordinates (right ascension, declination).

use crate::angle::Angle;

/// An apparent or catalogue position on the celestial sphere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EquatorialCoords {
    /// Right ascension, [0h, 24h).
    pub ra: Angle,
    /// Declination, [-90°, +90°].
    pub dec: Angle,
}

impl EquatorialCoords {
    /// Build from angles; RA is reduced to [0h, 24h).
    pub fn new(ra: Angle, dec: Angle) -> Self {
        Self { ra: ra.reduce(), dec }
    }

    pub fn from_degrees(ra_deg: f64, dec_deg: f64) -> Self {
        Self::new(Angle::from_degrees(ra_deg), Angle::from_degrees(dec_deg))
    }

    pub fn from_hours_degrees(ra_hours: f64, dec_deg: f64) -> Self {
        Self::new(Angle::from_hours(ra_hours), Angle::from_degrees(dec_deg))
    }

    /// Convert ecliptic longitude/latitude to equatorial coordinates for the
    /// given obliquity of the ecliptic.
    pub fn from_ecliptic(lon: Angle, lat: Angle, obliquity: Angle) -> Self {
        let (sin_l, cos_l) = lon.radians().sin_cos();
        let (sin_b, cos_b) = lat.radians().sin_cos();
        let (sin_e, cos_e) = obliquity.radians().sin_cos();

        let x = cos_b * cos_l;
        let y = cos_b * sin_l * cos_e - sin_b * sin_e;
        let z = cos_b * sin_l * sin_e + sin_b * cos_e;
        Self::from_vector(&[x, y, z])
    }

    /// Great-circle angle between two positions.
    ///
    /// Vincenty form: well conditioned for both tiny and near-antipodal
    /// separations, unlike the plain cosine formula.
    pub fn angular_distance(&self, other: &Self) -> Angle {
        let (sin_d1, cos_d1) = self.dec.radians().sin_cos();
        let (sin_d2, cos_d2) = other.dec.radians().sin_cos();
        let (sin_dra, cos_dra) = (other.ra.radians() - self.ra.radians()).sin_cos();

        let x = cos_d2 * sin_dra;
        let y = cos_d1 * sin_d2 - sin_d1 * cos_d2 * cos_dra;
        let num = (x * x + y * y).sqrt();
        let den = sin_d1 * sin_d2 + cos_d1 * cos_d2 * cos_dra;

        Angle::from_radians(num.atan2(den))
    }

    /// The antisolar counterpart: RA + 12h, Dec negated.
    ///
    /// Returns a new value; the receiver is left untouched.
    pub fn antisolar(&self) -> Self {
        Self::new(self.ra + Angle::HALF_TURN, -self.dec)
    }

    /// Unit vector in the equatorial frame (x toward 0h, z toward the pole).
    pub fn to_unit_vector(&self) -> [f64; 3] {
        let (sin_ra, cos_ra) = self.ra.radians().sin_cos();
        let (sin_dec, cos_dec) = self.dec.radians().sin_cos();
        [cos_dec * cos_ra, cos_dec * sin_ra, sin_dec]
    }

    /// Direction of an arbitrary (non-zero) vector. A zero vector maps to (0h, 0°).
    pub fn from_vector(v: &[f64; 3]) -> Self {
        let [x, y, z] = *v;
        let rxy = (x * x + y * y).sqrt();
        if rxy == 0.0 && z == 0.0 {
            return Self::new(Angle::ZERO, Angle::ZERO);
        }
        Self::new(Angle::from_radians(y.atan2(x)), Angle::from_radians(z.atan2(rxy)))
    }
}
