//! Shared helpers for the coarse scan and refinement.

use conjunct_frames::Angle;

/// Direction the separation is moving between two samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Trend {
    Falling,
    Flat,
    Rising,
}

impl Trend {
    pub(crate) fn between(prev: Angle, curr: Angle) -> Self {
        let d = curr.radians() - prev.radians();
        if d < 0.0 {
            Self::Falling
        } else if d > 0.0 {
            Self::Rising
        } else {
            Self::Flat
        }
    }
}

/// Next coarse step: grows with the relative change in separation once
/// that change exceeds `threshold`, and never exceeds `max_step`.
pub(crate) fn next_coarse_step(
    step0: f64,
    max_step: Option<f64>,
    d_prev: Angle,
    d_curr: Angle,
    threshold: f64,
) -> f64 {
    let dist = d_curr.radians();
    let mut step = step0;
    if dist > 0.0 {
        let factor = (dist - d_prev.radians()).abs() / dist;
        if factor > threshold {
            step = step0 * factor / threshold;
        }
    }
    match max_step {
        Some(cap) => step.min(cap),
        None => step,
    }
}

/// Completed share of `[jd_start, jd_end]` at `jd`, as 0..=100.
pub(crate) fn progress_percent(jd: f64, jd_start: f64, jd_end: f64) -> u8 {
    let frac = (jd - jd_start) / (jd_end - jd_start);
    (100.0 * frac).floor().clamp(0.0, 100.0) as u8
}
