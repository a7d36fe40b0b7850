//! Position-oracle contract exercised with a toy heliocentric model:
//! Earth and one planet on circular, coplanar orbits.

use std::f64::consts::TAU;

use conjunct_core::{
    Angle, Body, BodyKind, EarthEphemeris, EarthReference, EphemerisError, EpochNumbers,
    EquatorialCoords, ObserverLocation, ObservingContext, SkyObject, SolarSystemBody,
};

const J2000: f64 = 2_451_545.0;

fn circular_earth(num: &EpochNumbers) -> Result<EarthReference, EphemerisError> {
    let lon = 100.0 + 360.0 * (num.jd() - J2000) / 365.25;
    Ok(EarthReference {
        lon: Angle::from_degrees(lon).reduce(),
        lat: Angle::ZERO,
        radius_au: 1.0,
    })
}

/// Geocentric equatorial position of a heliocentric ecliptic point.
fn geocentric(helio: [f64; 3], num: &EpochNumbers, earth: &EarthReference) -> EquatorialCoords {
    let [ex, ey, ez] = earth.heliocentric_xyz();
    let (x, y, z) = (helio[0] - ex, helio[1] - ey, helio[2] - ez);
    let lon = Angle::from_radians(y.atan2(x));
    let lat = Angle::from_radians(z.atan2(x.hypot(y)));
    EquatorialCoords::from_ecliptic(lon, lat, num.obliquity())
}

struct Sun;

impl SkyObject for Sun {
    fn name(&self) -> &str {
        "Sun"
    }

    fn kind(&self) -> BodyKind {
        BodyKind::Sun
    }

    fn body(&self) -> Option<Body> {
        Some(Body::Sun)
    }

    fn as_solar_system(&self) -> Option<&dyn SolarSystemBody> {
        Some(self)
    }
}

impl SolarSystemBody for Sun {
    fn find_position(
        &self,
        num: &EpochNumbers,
        _latitude: Angle,
        _lst: Angle,
        earth: &EarthReference,
    ) -> Result<EquatorialCoords, EphemerisError> {
        Ok(geocentric([0.0; 3], num, earth))
    }
}

struct CircularPlanet {
    radius_au: f64,
    period_days: f64,
    lon_j2000_deg: f64,
}

impl SkyObject for CircularPlanet {
    fn name(&self) -> &str {
        "Mars"
    }

    fn kind(&self) -> BodyKind {
        BodyKind::Planet
    }

    fn body(&self) -> Option<Body> {
        Some(Body::Mars)
    }

    fn as_solar_system(&self) -> Option<&dyn SolarSystemBody> {
        Some(self)
    }
}

impl SolarSystemBody for CircularPlanet {
    fn find_position(
        &self,
        num: &EpochNumbers,
        _latitude: Angle,
        _lst: Angle,
        earth: &EarthReference,
    ) -> Result<EquatorialCoords, EphemerisError> {
        let l = self.lon_j2000_deg.to_radians() + TAU * (num.jd() - J2000) / self.period_days;
        let helio = [self.radius_au * l.cos(), self.radius_au * l.sin(), 0.0];
        Ok(geocentric(helio, num, earth))
    }
}

fn position(body: &dyn SkyObject, ctx: &ObservingContext<'_>, jd: f64) -> EquatorialCoords {
    let frame = ctx.frame_at(jd).unwrap();
    body.as_solar_system()
        .unwrap()
        .find_position(&frame.num, frame.latitude, frame.lst, &frame.earth)
        .unwrap()
}

#[test]
fn sun_is_opposite_earth() {
    let site = ObserverLocation::new(-33.9, 18.4).unwrap();
    let ctx = ObservingContext::new(&site, &circular_earth);
    let jd = J2000 + 123.4;
    let sun = position(&Sun, &ctx, jd);

    let earth = circular_earth.earth_position(&EpochNumbers::new(jd)).unwrap();
    let expected = EquatorialCoords::from_ecliptic(
        earth.lon + Angle::HALF_TURN,
        Angle::ZERO,
        EpochNumbers::new(jd).obliquity(),
    );
    assert!(sun.angular_distance(&expected).degrees() < 1e-9);
}

#[test]
fn planet_in_line_with_earth_is_at_opposition() {
    let site = ObserverLocation::greenwich();
    let ctx = ObservingContext::new(&site, &circular_earth);
    // Earth is at heliocentric longitude 100° at J2000; put the planet there too.
    let mars = CircularPlanet {
        radius_au: 1.524,
        period_days: 687.0,
        lon_j2000_deg: 100.0,
    };

    let p = position(&mars, &ctx, J2000);
    let s = position(&Sun, &ctx, J2000);
    assert!((p.angular_distance(&s).degrees() - 180.0).abs() < 1e-9);
    assert!(p.angular_distance(&s.antisolar()).degrees() < 1e-9);
}

#[test]
fn planet_moves_away_from_opposition() {
    let site = ObserverLocation::greenwich();
    let ctx = ObservingContext::new(&site, &circular_earth);
    let mars = CircularPlanet {
        radius_au: 1.524,
        period_days: 687.0,
        lon_j2000_deg: 100.0,
    };

    let elongation = |jd: f64| {
        let p = position(&mars, &ctx, jd);
        let s = position(&Sun, &ctx, jd);
        p.angular_distance(&s).degrees()
    };
    assert!(elongation(J2000 + 20.0) < 179.0);
    assert!(elongation(J2000 - 20.0) < 179.0);
}

#[test]
fn generic_path_is_not_available_for_planets() {
    let mars = CircularPlanet {
        radius_au: 1.524,
        period_days: 687.0,
        lon_j2000_deg: 0.0,
    };
    assert!(matches!(
        mars.update_coords(&EpochNumbers::new(J2000)),
        Err(EphemerisError::InvalidInput(_))
    ));
    assert_eq!(mars.kind(), Body::Mars.kind());
}
