//! Calendar date to Julian Date conversion.
//!
//! Standard astronomical algorithm (Meeus, _Astronomical Algorithms_, ch. 7).
//! Dates on or after 1582-Oct-15 use the Gregorian calendar, earlier dates
//! the proleptic Julian calendar.

/// Julian Date of the J2000.0 epoch (2000-Jan-01 12:00 TT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Days in a Julian century.
pub const DAYS_PER_JULIAN_CENTURY: f64 = 36_525.0;

/// First Julian Date of the Gregorian calendar (1582-Oct-15 00:00).
const GREGORIAN_START_JD: f64 = 2_299_160.5;

/// Convert a calendar date to a Julian Date.
///
/// `day` may carry a fractional part for the time of day
/// (e.g. `1.5` is the 1st at 12:00).
pub fn calendar_to_jd(year: i32, month: u32, day: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year as f64 - 1.0, month as f64 + 12.0)
    } else {
        (year as f64, month as f64)
    };

    let julian = (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + day - 1524.5;
    if julian < GREGORIAN_START_JD {
        return julian;
    }

    let a = (y / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    julian + b
}

/// Julian centuries elapsed since J2000.0.
pub fn julian_centuries(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_JULIAN_CENTURY
}
