//! Closest-approach search between a sky object and a solar-system body.
//!
//! The separation is sampled on a coarse grid of a quarter of the interval,
//! tightened by per-body caps for fast movers and stretched while the
//! separation changes quickly. Each time the separation stops falling the
//! bracket is handed to a refiner that walks toward the minimum, reversing
//! and halving its step at every overshoot until the step is below the
//! tolerance (one minute by default).
//!
//! Opposition searches measure against the antisolar point of the tracked
//! body; the bodies themselves are never touched.

use conjunct_core::{ObservingContext, SkyObject, SolarSystemBody};
use conjunct_frames::Angle;

use crate::conjunction_types::{ApproachMap, ConjunctionConfig, ConjunctionEvent};
use crate::control::SearchControl;
use crate::error::SearchError;
use crate::search_util::{Trend, next_coarse_step, progress_percent};
use crate::separation::separation_at;

/// Find every closest approach of `body_a` and `body_b` in
/// `[jd_start, jd_end]` closer than `config.max_separation`.
///
/// Each candidate is checked against the separation
/// `config.validation_lookback_days` earlier, and the refiner may step past
/// either end of the interval. Both bodies must therefore answer for epochs
/// from `jd_start - validation_lookback_days` up to a little after `jd_end`;
/// an oracle that cannot (a [`TabulatedBody`](conjunct_core::TabulatedBody)
/// starting at `jd_start`, say) fails the search with
/// [`SearchError::Ephemeris`].
pub fn find_closest_approach(
    ctx: &ObservingContext<'_>,
    body_a: &dyn SkyObject,
    body_b: &dyn SolarSystemBody,
    jd_start: f64,
    jd_end: f64,
    config: &ConjunctionConfig,
) -> Result<ApproachMap, SearchError> {
    find_closest_approach_with(
        ctx,
        body_a,
        body_b,
        jd_start,
        jd_end,
        config,
        &mut SearchControl::new(),
    )
}

/// [`find_closest_approach`] with progress reporting and cancellation.
///
/// Progress is reported before every coarse sample. The cancel flag is
/// checked once per coarse step; a raised flag ends the search with
/// [`SearchError::Cancelled`] and discards partial results.
pub fn find_closest_approach_with(
    ctx: &ObservingContext<'_>,
    body_a: &dyn SkyObject,
    body_b: &dyn SolarSystemBody,
    jd_start: f64,
    jd_end: f64,
    config: &ConjunctionConfig,
    control: &mut SearchControl<'_>,
) -> Result<ApproachMap, SearchError> {
    config.validate().map_err(SearchError::InvalidConfig)?;
    if !jd_start.is_finite() || !jd_end.is_finite() {
        return Err(SearchError::InvalidConfig("search bounds must be finite"));
    }
    if jd_end <= jd_start {
        return Err(SearchError::InvalidConfig("jd_end must be after jd_start"));
    }

    let sep_at = |jd: f64| separation_at(ctx, jd, body_a, body_b, config.opposition);

    let max_step = config.step_caps.limit_for(body_a.body(), body_b.body());
    let quarter = (jd_end - jd_start) / 4.0;
    let step0 = max_step.map_or(quarter, |cap| quarter.min(cap));

    log::debug!(
        "closest approach {} / {}{}: JD {jd_start}..{jd_end}, base step {step0} d",
        body_a.name(),
        body_b.name(),
        if config.opposition { " (opposition)" } else { "" },
    );

    let mut approaches = ApproachMap::new();

    control.report(0);
    let mut t_prev = jd_start;
    let mut d_prev = sep_at(jd_start)?;
    // No trend until the second sample.
    let mut prev_trend = Trend::Flat;
    let mut step = step0;
    // Spacing between the two samples before `jd`.
    let mut prev_spacing = 0.0;

    loop {
        if control.is_cancelled() {
            log::debug!("closest-approach search cancelled at JD {t_prev}");
            return Err(SearchError::Cancelled);
        }

        let jd = (t_prev + step).min(jd_end);
        if jd <= t_prev {
            // step below the float resolution at this epoch
            break;
        }
        control.report(progress_percent(jd, jd_start, jd_end));

        let dist = sep_at(jd)?;
        let trend = Trend::between(d_prev, dist);
        log::trace!("coarse JD {jd}: {:.6}° {trend:?}", dist.degrees());

        if prev_trend == Trend::Falling && trend != Trend::Falling {
            let (t_last, t_turn) = if jd - t_prev > step0 {
                relocate_bracket(&sep_at, t_prev, d_prev, jd, step0)?
            } else {
                (t_prev, jd)
            };
            // The minimum lies after the sample before `t_last`; a clamped
            // final step or an early turn leaves `t_turn - t_last` short of that.
            let bracket_step = if t_last == t_prev {
                (t_turn - t_last).max(prev_spacing)
            } else {
                t_turn - t_last
            };

            if let Some(event) = refine_with(&sep_at, t_turn, bracket_step, config)? {
                if event.jd < jd_start || event.jd > jd_end {
                    log::debug!("approach at JD {} outside search interval", event.jd);
                } else if event.separation < config.max_separation {
                    log::debug!("approach at JD {}: {}", event.jd, event.separation);
                    approaches.insert(event);
                } else {
                    log::trace!(
                        "approach at JD {} too wide: {:.4}°",
                        event.jd,
                        event.separation.degrees()
                    );
                }
            }
        }

        if jd >= jd_end {
            break;
        }

        step = next_coarse_step(step0, max_step, d_prev, dist, config.speedup_threshold);
        prev_spacing = jd - t_prev;
        t_prev = jd;
        d_prev = dist;
        prev_trend = trend;
    }

    control.report(100);
    Ok(approaches)
}

/// Refine a single bracketed minimum.
///
/// `jd` is the first sample at which the separation stopped falling and
/// `step` the coarse spacing behind it; the minimum is looked for within
/// about `2 * step` before `jd`. Returns `None` if the candidate fails the
/// lookback check or the refiner does not settle.
pub fn refine_minimum(
    ctx: &ObservingContext<'_>,
    body_a: &dyn SkyObject,
    body_b: &dyn SolarSystemBody,
    jd: f64,
    step: f64,
    config: &ConjunctionConfig,
) -> Result<Option<ConjunctionEvent>, SearchError> {
    config.validate().map_err(SearchError::InvalidConfig)?;
    if !jd.is_finite() || !step.is_finite() || step <= 0.0 {
        return Err(SearchError::InvalidConfig("refinement step must be positive"));
    }
    let sep_at = |t: f64| separation_at(ctx, t, body_a, body_b, config.opposition);
    refine_with(&sep_at, jd, step, config)
}

/// After a stretched coarse step the minimum may lie anywhere in a wide
/// bracket. Walk it again at the base step from the last falling sample.
///
/// Returns `(t_last, t_turn)`: the last sample that was still falling and
/// the first one after it where the fall stops.
fn relocate_bracket<F>(
    sep_at: &F,
    t_last_falling: f64,
    d_last_falling: Angle,
    t_until: f64,
    step0: f64,
) -> Result<(f64, f64), SearchError>
where
    F: Fn(f64) -> Result<Angle, SearchError>,
{
    let mut t_last = t_last_falling;
    let mut d_last = d_last_falling;
    loop {
        let t = t_last + step0;
        if t >= t_until {
            break;
        }
        let d = sep_at(t)?;
        if Trend::between(d_last, d) != Trend::Falling {
            return Ok((t_last, t));
        }
        t_last = t;
        d_last = d;
    }
    Ok((t_last, t_until))
}

/// Step back from `jd` toward the minimum; on every overshoot reverse and
/// halve. Once the step is below tolerance the lowest sample is the
/// second-to-last one, `2 * step` behind the current position.
fn refine_with<F>(
    sep_at: &F,
    jd: f64,
    step: f64,
    config: &ConjunctionConfig,
) -> Result<Option<ConjunctionEvent>, SearchError>
where
    F: Fn(f64) -> Result<Angle, SearchError>,
{
    let mut t = jd;
    let mut step = -step / 2.0;
    let mut d_prev = sep_at(t)?;

    for _ in 0..config.max_refine_iterations {
        if step.abs() < config.tolerance_days {
            let t_min = t + 2.0 * step;
            let d_min = sep_at(t_min)?;
            let d_before = sep_at(t_min - config.validation_lookback_days)?;
            if d_min < d_before {
                return Ok(Some(ConjunctionEvent {
                    jd: t_min,
                    separation: d_min,
                }));
            }
            log::debug!(
                "rejected candidate at JD {t_min}: {:.4}° not below {:.4}° at lookback",
                d_min.degrees(),
                d_before.degrees()
            );
            return Ok(None);
        }

        t += step;
        let d = sep_at(t)?;
        if Trend::between(d_prev, d) != Trend::Falling {
            step = -step / 2.0;
        }
        d_prev = d;
    }

    log::debug!("refinement near JD {jd} did not settle");
    Ok(None)
}
