//! IAU 1976 precession of equatorial coordinates from J2000.0.
//!
//! Rotates a J2000 catalogue position to the mean equator and equinox of
//! date using the Lieske (1977) angles ζ, z, θ.
//!
//! Source: Lieske et al. 1977, _Astronomy & Astrophysics_ 58, 1-16;
//! formulae as in Meeus, _Astronomical Algorithms_, ch. 21.

use crate::angle::Angle;
use crate::equatorial::EquatorialCoords;

/// Precession angles (ζ, z, θ) in arcseconds for `t` Julian centuries after J2000.0.
pub fn precession_angles_arcsec(t: f64) -> (f64, f64, f64) {
    let t2 = t * t;
    let t3 = t2 * t;
    let zeta = 2306.2181 * t + 0.30188 * t2 + 0.017998 * t3;
    let z = 2306.2181 * t + 1.09468 * t2 + 0.018203 * t3;
    let theta = 2004.3109 * t - 0.42665 * t2 - 0.041833 * t3;
    (zeta, z, theta)
}

/// Precess a J2000.0 mean position to the mean equinox `t` centuries later.
pub fn precess_from_j2000(j2000: &EquatorialCoords, t: f64) -> EquatorialCoords {
    if t == 0.0 {
        return *j2000;
    }

    let (zeta, z, theta) = precession_angles_arcsec(t);
    let zeta = Angle::from_degrees(zeta / 3600.0).radians();
    let z = Angle::from_degrees(z / 3600.0).radians();
    let (sin_th, cos_th) = Angle::from_degrees(theta / 3600.0).radians().sin_cos();

    let (sin_d0, cos_d0) = j2000.dec.radians().sin_cos();
    let (sin_a, cos_a) = (j2000.ra.radians() + zeta).sin_cos();

    let a = cos_d0 * sin_a;
    let b = cos_th * cos_d0 * cos_a - sin_th * sin_d0;
    let c = sin_th * cos_d0 * cos_a + cos_th * sin_d0;

    // asin(c) loses precision near the poles; atan2 against the
    // equatorial component does not.
    let ra = a.atan2(b) + z;
    let dec = c.atan2((a * a + b * b).sqrt());

    EquatorialCoords::new(Angle::from_radians(ra), Angle::from_radians(dec))
}
