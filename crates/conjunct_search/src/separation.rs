//! Angular separation between a sky object and a solar-system body.

use conjunct_core::{
    EquatorialCoords, ObservingContext, ObservingFrame, SkyObject, SolarSystemBody,
};
use conjunct_frames::Angle;

use crate::error::SearchError;

/// Apparent position of any object in an already resolved frame.
///
/// Solar-system bodies go through `find_position`; everything else
/// through `update_coords`.
pub fn apparent_position(
    frame: &ObservingFrame,
    body: &dyn SkyObject,
) -> Result<EquatorialCoords, SearchError> {
    let pos = match body.as_solar_system() {
        Some(ss) => ss.find_position(&frame.num, frame.latitude, frame.lst, &frame.earth)?,
        None => body.update_coords(&frame.num)?,
    };
    Ok(pos)
}

/// Separation between `body_a` and `body_b` at `jd`.
///
/// With `opposition` set, `body_b` is replaced by its antisolar point.
/// Neither body is modified.
pub fn separation_at(
    ctx: &ObservingContext<'_>,
    jd: f64,
    body_a: &dyn SkyObject,
    body_b: &dyn SolarSystemBody,
    opposition: bool,
) -> Result<Angle, SearchError> {
    let frame = ctx.frame_at(jd)?;
    let pos_a = apparent_position(&frame, body_a)?;
    let pos_b = body_b.find_position(&frame.num, frame.latitude, frame.lst, &frame.earth)?;
    let pos_b = if opposition { pos_b.antisolar() } else { pos_b };
    Ok(pos_a.angular_distance(&pos_b))
}
