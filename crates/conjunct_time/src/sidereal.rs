//! Sidereal time for local apparent positions.
//!
//! Solar-system position solvers need the observer's local sidereal time to
//! turn geocentric RA/Dec into topocentric coordinates. The search evaluates
//! it once per sample from the sample's Julian Date, treating that date as
//! UT1 (the sub-second UT1/UTC offset is far below the search tolerance).
//!
//! Sources:
//! - ERA: IERS Conventions 2010, Eq. 5.15.
//! - GMST polynomial: Capitaine et al. 2003, Table 2.

use std::f64::consts::{PI, TAU};

use crate::julian::{J2000_JD, julian_centuries};

const ARCSEC_TO_RAD: f64 = PI / (180.0 * 3600.0);

/// Earth Rotation Angle in radians [0, 2π) at a UT1 Julian Date.
///
/// θ = 2π × (0.7790572732640 + 1.00273781191135448 × (JD − 2451545.0))
pub fn earth_rotation_angle_rad(jd_ut1: f64) -> f64 {
    let du = jd_ut1 - J2000_JD;
    (TAU * (0.779_057_273_264_0 + 1.002_737_811_911_354_6 * du)).rem_euclid(TAU)
}

/// Greenwich Mean Sidereal Time in radians [0, 2π) at a UT1 Julian Date.
///
/// GMST = ERA + 0.014506″ + 4612.156534″·T + 1.3915817″·T² − 0.00000044″·T³
///        − 0.000029956″·T⁴ − 0.0000000368″·T⁵
pub fn gmst_rad(jd_ut1: f64) -> f64 {
    let t = julian_centuries(jd_ut1);
    let poly_arcsec = 0.014506
        + t * (4612.156534
            + t * (1.3915817 + t * (-0.00000044 + t * (-0.000029956 - t * 0.0000000368))));
    (earth_rotation_angle_rad(jd_ut1) + poly_arcsec * ARCSEC_TO_RAD).rem_euclid(TAU)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn era_at_j2000() {
        let deg = earth_rotation_angle_rad(J2000_JD).to_degrees();
        assert!((deg - 280.46).abs() < 0.1, "ERA = {deg}");
    }

    #[test]
    fn gmst_at_j2000_midnight() {
        // 2000-Jan-01 0h UT1: GMST ≈ 6h 39m 51s ≈ 99.97°
        let deg = gmst_rad(2_451_544.5).to_degrees();
        assert!((deg - 99.97).abs() < 0.1, "GMST = {deg}");
    }

    #[test]
    fn gmst_gains_about_a_degree_per_day() {
        let d = (gmst_rad(2_460_001.0) - gmst_rad(2_460_000.0)).rem_euclid(TAU);
        assert!((d.to_degrees() - 0.9856).abs() < 0.01, "daily gain = {}", d.to_degrees());
    }

    #[test]
    fn outputs_stay_in_range() {
        for &jd in &[2_440_000.5, 2_451_544.5, 2_451_545.0, 2_460_000.5, 2_500_000.25] {
            assert!((0.0..TAU).contains(&earth_rotation_angle_rad(jd)));
            assert!((0.0..TAU).contains(&gmst_rad(jd)));
        }
    }
}
