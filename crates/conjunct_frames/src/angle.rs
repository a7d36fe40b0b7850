//! Angle value type.

use std::f64::consts::{PI, TAU};
use std::fmt::{Display, Formatter};
use std::ops::{Add, Neg, Sub};

/// A plane angle, stored in radians.
///
/// Comparison is signed: `Angle::from_degrees(-1.0) < Angle::ZERO`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Angle {
    rad: f64,
}

impl Angle {
    pub const ZERO: Self = Self { rad: 0.0 };
    pub const HALF_TURN: Self = Self { rad: PI };

    pub const fn from_radians(rad: f64) -> Self {
        Self { rad }
    }

    pub fn from_degrees(deg: f64) -> Self {
        Self {
            rad: deg.to_radians(),
        }
    }

    /// Angle from hours of right ascension (1h = 15°).
    pub fn from_hours(hours: f64) -> Self {
        Self::from_degrees(hours * 15.0)
    }

    pub const fn radians(self) -> f64 {
        self.rad
    }

    pub fn degrees(self) -> f64 {
        self.rad.to_degrees()
    }

    pub fn hours(self) -> f64 {
        self.degrees() / 15.0
    }

    pub fn arcseconds(self) -> f64 {
        self.degrees() * 3600.0
    }

    pub fn abs(self) -> Self {
        Self {
            rad: self.rad.abs(),
        }
    }

    /// Reduce to [0°, 360°).
    pub fn reduce(self) -> Self {
        let rad = self.rad.rem_euclid(TAU);
        // rem_euclid can round up to exactly TAU for tiny negative inputs
        Self {
            rad: if rad >= TAU { 0.0 } else { rad },
        }
    }

    /// Reduce to (-180°, +180°].
    pub fn reduce_signed(self) -> Self {
        let r = self.reduce().rad;
        Self {
            rad: if r > PI { r - TAU } else { r },
        }
    }

    /// Split into (negative, degrees, arcminutes, arcseconds).
    fn sexagesimal(value: f64) -> (bool, u32, u32, f64) {
        let negative = value < 0.0;
        let total_sec = (value.abs() * 3600.0 * 10.0).round() / 10.0;
        let whole = (total_sec / 3600.0).floor();
        let rest = total_sec - whole * 3600.0;
        let min = (rest / 60.0).floor();
        let sec = rest - min * 60.0;
        (negative, whole as u32, min as u32, sec)
    }
}

impl Add for Angle {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            rad: self.rad + rhs.rad,
        }
    }
}

impl Sub for Angle {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self {
            rad: self.rad - rhs.rad,
        }
    }
}

impl Neg for Angle {
    type Output = Self;

    fn neg(self) -> Self {
        Self { rad: -self.rad }
    }
}

/// Sexagesimal degrees, `±DD° MM′ SS.S″`.
impl Display for Angle {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let (negative, d, m, s) = Self::sexagesimal(self.degrees());
        let sign = if negative { '-' } else { '+' };
        write!(f, "{sign}{d:02}° {m:02}′ {s:04.1}″")
    }
}
