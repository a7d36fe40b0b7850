//! Body identity and the position capabilities every searchable object exposes.

use conjunct_frames::{Angle, EquatorialCoords};

use crate::earth::EarthReference;
use crate::epoch::EpochNumbers;
use crate::error::EphemerisError;

/// Major solar-system bodies with a stable identity.
///
/// Identity is independent of display names, which may be localized.
/// Asteroids and comets have no entry here; they are identified by
/// [`BodyKind`] alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Body {
    Sun,
    Mercury,
    Venus,
    Earth,
    Moon,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
}

impl Body {
    pub const ALL: [Body; 11] = [
        Self::Sun,
        Self::Mercury,
        Self::Venus,
        Self::Earth,
        Self::Moon,
        Self::Mars,
        Self::Jupiter,
        Self::Saturn,
        Self::Uranus,
        Self::Neptune,
        Self::Pluto,
    ];

    /// English name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Mercury => "Mercury",
            Self::Venus => "Venus",
            Self::Earth => "Earth",
            Self::Moon => "Moon",
            Self::Mars => "Mars",
            Self::Jupiter => "Jupiter",
            Self::Saturn => "Saturn",
            Self::Uranus => "Uranus",
            Self::Neptune => "Neptune",
            Self::Pluto => "Pluto",
        }
    }

    /// Coarse classification of this body.
    pub const fn kind(self) -> BodyKind {
        match self {
            Self::Sun => BodyKind::Sun,
            Self::Moon => BodyKind::Moon,
            _ => BodyKind::Planet,
        }
    }
}

/// What sort of object a [`SkyObject`] is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BodyKind {
    FixedStar,
    DeepSky,
    Sun,
    Moon,
    Planet,
    Asteroid,
    Comet,
}

impl BodyKind {
    pub const fn is_solar_system(self) -> bool {
        !matches!(self, Self::FixedStar | Self::DeepSky)
    }
}

/// Any object that can report an apparent position.
///
/// Generic objects implement [`update_coords`](Self::update_coords).
/// Solar-system bodies implement [`SolarSystemBody`] and return themselves
/// from [`as_solar_system`](Self::as_solar_system); callers use that
/// capability instead of inspecting [`kind`](Self::kind).
pub trait SkyObject {
    fn name(&self) -> &str;

    fn kind(&self) -> BodyKind;

    /// Stable identity for major bodies, `None` for everything else.
    fn body(&self) -> Option<Body> {
        None
    }

    /// Apparent position at the epoch, for objects whose position depends
    /// on time alone.
    fn update_coords(&self, num: &EpochNumbers) -> Result<EquatorialCoords, EphemerisError> {
        let _ = num;
        Err(EphemerisError::InvalidInput(
            "object has no time-only position; use find_position",
        ))
    }

    /// The solar-system position capability, if this object has one.
    fn as_solar_system(&self) -> Option<&dyn SolarSystemBody> {
        None
    }
}

/// A body whose apparent position needs the observer and Earth's position.
pub trait SolarSystemBody: SkyObject {
    /// Apparent (topocentric) RA/Dec at the epoch.
    ///
    /// `latitude` is the observer's geographic latitude, `lst` the local
    /// sidereal time, and `earth` Earth's heliocentric position at the
    /// same epoch.
    fn find_position(
        &self,
        num: &EpochNumbers,
        latitude: Angle,
        lst: Angle,
        earth: &EarthReference,
    ) -> Result<EquatorialCoords, EphemerisError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Star;

    impl SkyObject for Star {
        fn name(&self) -> &str {
            "Regulus"
        }

        fn kind(&self) -> BodyKind {
            BodyKind::FixedStar
        }
    }

    #[test]
    fn names_are_unique() {
        let mut names: Vec<_> = Body::ALL.iter().map(|b| b.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), Body::ALL.len());
    }

    #[test]
    fn kinds_of_major_bodies() {
        assert_eq!(Body::Sun.kind(), BodyKind::Sun);
        assert_eq!(Body::Moon.kind(), BodyKind::Moon);
        assert_eq!(Body::Mars.kind(), BodyKind::Planet);
        assert_eq!(Body::Pluto.kind(), BodyKind::Planet);
    }

    #[test]
    fn solar_system_classification() {
        assert!(BodyKind::Comet.is_solar_system());
        assert!(BodyKind::Asteroid.is_solar_system());
        assert!(BodyKind::Moon.is_solar_system());
        assert!(!BodyKind::FixedStar.is_solar_system());
        assert!(!BodyKind::DeepSky.is_solar_system());
    }

    #[test]
    fn default_capabilities() {
        let star = Star;
        assert!(star.body().is_none());
        assert!(star.as_solar_system().is_none());
        let num = EpochNumbers::new(2_451_545.0);
        assert!(matches!(
            star.update_coords(&num),
            Err(EphemerisError::InvalidInput(_))
        ));
    }
}
