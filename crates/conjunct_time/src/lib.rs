//! Time helpers for the conjunction search.
//!
//! This crate provides:
//! - calendar date to Julian Date conversion (Gregorian after 1582-Oct-15, Julian before)
//! - Julian-century offsets from J2000.0
//! - Earth rotation angle and Greenwich mean sidereal time
//!
//! Instants are plain `f64` Julian Dates throughout the workspace. At the
//! present epoch an `f64` JD resolves ~40 µs, well below the one-minute
//! tolerance used by the refinement loop.

pub mod julian;
pub mod sidereal;

pub use julian::{DAYS_PER_JULIAN_CENTURY, J2000_JD, calendar_to_jd, julian_centuries};
pub use sidereal::{earth_rotation_angle_rad, gmst_rad};
