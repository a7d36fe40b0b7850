//! Position-oracle contracts for moving sky objects.
//!
//! The conjunction search never computes ephemerides itself. It asks bodies
//! for their apparent RA/Dec through the traits defined here:
//!
//! - [`SkyObject::update_coords`] for generic objects (stars, deep-sky objects)
//! - [`SolarSystemBody::find_position`] for planets, comets and asteroids, which
//!   additionally need the observer latitude, local sidereal time and Earth's
//!   own heliocentric position ([`EarthReference`])
//!
//! [`ObservingContext`] bundles the observer site with an [`EarthEphemeris`]
//! and prepares the per-instant [`ObservingFrame`] that position solvers consume.
//!
//! Two ready-made bodies are included: [`FixedObject`] (a catalogue position
//! precessed to date) and [`TabulatedBody`] (an interpolated RA/Dec table).

pub mod body;
pub mod context;
pub mod earth;
pub mod epoch;
pub mod error;
pub mod fixed;
pub mod observer;
pub mod tabulated;

pub use body::{Body, BodyKind, SkyObject, SolarSystemBody};
pub use context::{ObservingContext, ObservingFrame};
pub use earth::{EarthEphemeris, EarthReference};
pub use epoch::EpochNumbers;
pub use error::EphemerisError;
pub use fixed::FixedObject;
pub use observer::ObserverLocation;
pub use tabulated::TabulatedBody;

pub use conjunct_frames::{Angle, EquatorialCoords};
