//! Angle and coordinate helpers for apparent sky positions.
//!
//! Provides the [`Angle`] value type, equatorial coordinates with angular
//! distance and the antisolar transform, and IAU 1976 precession of
//! equatorial coordinates away from J2000.0.

pub mod angle;
pub mod equatorial;
pub mod precession;

pub use angle::Angle;
pub use equatorial::EquatorialCoords;
pub use precession::{precess_from_j2000, precession_angles_arcsec};
