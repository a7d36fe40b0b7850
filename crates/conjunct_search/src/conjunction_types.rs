//! Types for closest-approach search.

use std::collections::BTreeMap;

use conjunct_core::Body;
use conjunct_frames::Angle;

/// Refinement stops once the step is below one minute of time.
pub const ONE_MINUTE_DAYS: f64 = 1.0 / 1440.0;

/// Per-body upper bound on the coarse scan step, in days.
///
/// Fast movers need a finer coarse scan or a close approach can fall
/// between two samples. When both bodies have a cap the smaller one wins.
#[derive(Debug, Clone, PartialEq)]
pub struct StepCaps {
    caps: BTreeMap<Body, f64>,
}

impl StepCaps {
    /// No caps: the coarse step is a quarter of the interval.
    pub fn none() -> Self {
        Self {
            caps: BTreeMap::new(),
        }
    }

    /// Set (or replace) the cap for `body`.
    pub fn with_cap(mut self, body: Body, max_step_days: f64) -> Self {
        self.caps.insert(body, max_step_days);
        self
    }

    pub fn cap_for(&self, body: Body) -> Option<f64> {
        self.caps.get(&body).copied()
    }

    /// Tightest cap applying to either body.
    pub fn limit_for(&self, a: Option<Body>, b: Option<Body>) -> Option<f64> {
        [a, b]
            .into_iter()
            .flatten()
            .filter_map(|body| self.cap_for(body))
            .reduce(f64::min)
    }

    fn validate(&self) -> Result<(), &'static str> {
        if self.caps.values().any(|d| !d.is_finite() || *d <= 0.0) {
            return Err("step caps must be positive");
        }
        Ok(())
    }
}

impl Default for StepCaps {
    /// Mars 10 d, Venus and Mercury 5 d, Moon 6 h.
    fn default() -> Self {
        Self::none()
            .with_cap(Body::Mars, 10.0)
            .with_cap(Body::Venus, 5.0)
            .with_cap(Body::Mercury, 5.0)
            .with_cap(Body::Moon, 0.25)
    }
}

/// Configuration for closest-approach search.
#[derive(Debug, Clone, PartialEq)]
pub struct ConjunctionConfig {
    /// Events with a separation at or above this are dropped.
    pub max_separation: Angle,
    /// Measure against the antisolar point of the tracked body.
    pub opposition: bool,
    /// Coarse step caps by body.
    pub step_caps: StepCaps,
    /// Refinement stops once the step is shorter than this (default one minute).
    pub tolerance_days: f64,
    /// A candidate is kept only if it is closer than the separation this
    /// many days earlier (default 5).
    pub validation_lookback_days: f64,
    /// Relative change `|Δsep| / sep` above which the coarse step grows
    /// (default 10).
    pub speedup_threshold: f64,
    /// Safety limit on refinement steps (default 200).
    pub max_refine_iterations: u32,
}

impl ConjunctionConfig {
    /// Conjunction search keeping events closer than `max_separation_deg`.
    pub fn conjunction(max_separation_deg: f64) -> Self {
        Self {
            max_separation: Angle::from_degrees(max_separation_deg),
            opposition: false,
            step_caps: StepCaps::default(),
            tolerance_days: ONE_MINUTE_DAYS,
            validation_lookback_days: 5.0,
            speedup_threshold: 10.0,
            max_refine_iterations: 200,
        }
    }

    /// Opposition search: separation from the tracked body's antisolar point.
    pub fn opposition(max_separation_deg: f64) -> Self {
        Self {
            opposition: true,
            ..Self::conjunction(max_separation_deg)
        }
    }

    pub fn with_step_caps(mut self, step_caps: StepCaps) -> Self {
        self.step_caps = step_caps;
        self
    }

    pub(crate) fn validate(&self) -> Result<(), &'static str> {
        let max_sep = self.max_separation.radians();
        if !max_sep.is_finite() || max_sep <= 0.0 {
            return Err("max_separation must be positive");
        }
        if !self.tolerance_days.is_finite() || self.tolerance_days <= 0.0 {
            return Err("tolerance_days must be positive");
        }
        if !self.validation_lookback_days.is_finite() || self.validation_lookback_days <= 0.0 {
            return Err("validation_lookback_days must be positive");
        }
        if !self.speedup_threshold.is_finite() || self.speedup_threshold <= 0.0 {
            return Err("speedup_threshold must be positive");
        }
        if self.max_refine_iterations == 0 {
            return Err("max_refine_iterations must be > 0");
        }
        self.step_caps.validate()
    }
}

/// A validated closest approach.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConjunctionEvent {
    /// Time of minimum separation (Julian Date).
    pub jd: f64,
    /// Separation at that time.
    pub separation: Angle,
}

/// Closest approaches keyed by time, in chronological order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApproachMap {
    events: Vec<ConjunctionEvent>,
}

impl ApproachMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert keeping time order. Returns `false` (and keeps the existing
    /// entry) if an event at exactly this time is already present.
    pub fn insert(&mut self, event: ConjunctionEvent) -> bool {
        match self
            .events
            .binary_search_by(|e| e.jd.total_cmp(&event.jd))
        {
            Ok(_) => false,
            Err(idx) => {
                self.events.insert(idx, event);
                true
            }
        }
    }

    /// Separation recorded at exactly `jd`.
    pub fn get(&self, jd: f64) -> Option<Angle> {
        self.events
            .binary_search_by(|e| e.jd.total_cmp(&jd))
            .ok()
            .map(|idx| self.events[idx].separation)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn first(&self) -> Option<&ConjunctionEvent> {
        self.events.first()
    }

    pub fn last(&self) -> Option<&ConjunctionEvent> {
        self.events.last()
    }

    /// The event with the smallest separation.
    pub fn closest(&self) -> Option<&ConjunctionEvent> {
        self.events
            .iter()
            .min_by(|a, b| a.separation.radians().total_cmp(&b.separation.radians()))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ConjunctionEvent> {
        self.events.iter()
    }

    pub fn as_slice(&self) -> &[ConjunctionEvent] {
        &self.events
    }
}

impl<'a> IntoIterator for &'a ApproachMap {
    type Item = &'a ConjunctionEvent;
    type IntoIter = std::slice::Iter<'a, ConjunctionEvent>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}

impl IntoIterator for ApproachMap {
    type Item = ConjunctionEvent;
    type IntoIter = std::vec::IntoIter<ConjunctionEvent>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(jd: f64, deg: f64) -> ConjunctionEvent {
        ConjunctionEvent {
            jd,
            separation: Angle::from_degrees(deg),
        }
    }

    #[test]
    fn default_caps() {
        let caps = StepCaps::default();
        assert_eq!(caps.cap_for(Body::Mars), Some(10.0));
        assert_eq!(caps.cap_for(Body::Venus), Some(5.0));
        assert_eq!(caps.cap_for(Body::Mercury), Some(5.0));
        assert_eq!(caps.cap_for(Body::Moon), Some(0.25));
        assert_eq!(caps.cap_for(Body::Jupiter), None);
    }

    #[test]
    fn tightest_cap_wins() {
        let caps = StepCaps::default();
        assert_eq!(caps.limit_for(Some(Body::Mars), Some(Body::Moon)), Some(0.25));
        assert_eq!(caps.limit_for(Some(Body::Venus), None), Some(5.0));
        assert_eq!(caps.limit_for(None, Some(Body::Mars)), Some(10.0));
        assert_eq!(caps.limit_for(Some(Body::Saturn), None), None);
        assert_eq!(caps.limit_for(None, None), None);
    }

    #[test]
    fn caps_can_be_overridden() {
        let caps = StepCaps::default().with_cap(Body::Moon, 0.1);
        assert_eq!(caps.cap_for(Body::Moon), Some(0.1));
        assert_eq!(StepCaps::none().limit_for(Some(Body::Moon), None), None);
    }

    #[test]
    fn conjunction_defaults() {
        let c = ConjunctionConfig::conjunction(2.0);
        assert!((c.max_separation.degrees() - 2.0).abs() < 1e-12);
        assert!(!c.opposition);
        assert!((c.tolerance_days * 1440.0 - 1.0).abs() < 1e-12);
        assert!((c.validation_lookback_days - 5.0).abs() < 1e-12);
        assert!((c.speedup_threshold - 10.0).abs() < 1e-12);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn opposition_defaults() {
        let c = ConjunctionConfig::opposition(1.0);
        assert!(c.opposition);
        assert_eq!(c.step_caps, StepCaps::default());
        assert!(c.validate().is_ok());
    }

    #[test]
    fn rejects_non_positive_max_separation() {
        assert!(ConjunctionConfig::conjunction(0.0).validate().is_err());
        assert!(ConjunctionConfig::conjunction(-1.0).validate().is_err());
        assert!(ConjunctionConfig::conjunction(f64::NAN).validate().is_err());
    }

    #[test]
    fn rejects_bad_tuning() {
        let mut c = ConjunctionConfig::conjunction(1.0);
        c.tolerance_days = 0.0;
        assert!(c.validate().is_err());

        let mut c = ConjunctionConfig::conjunction(1.0);
        c.validation_lookback_days = -5.0;
        assert!(c.validate().is_err());

        let mut c = ConjunctionConfig::conjunction(1.0);
        c.max_refine_iterations = 0;
        assert!(c.validate().is_err());

        let c = ConjunctionConfig::conjunction(1.0)
            .with_step_caps(StepCaps::none().with_cap(Body::Moon, 0.0));
        assert!(c.validate().is_err());
    }

    #[test]
    fn map_keeps_time_order() {
        let mut map = ApproachMap::new();
        assert!(map.insert(event(30.0, 1.0)));
        assert!(map.insert(event(10.0, 2.0)));
        assert!(map.insert(event(20.0, 0.5)));
        let times: Vec<f64> = map.iter().map(|e| e.jd).collect();
        assert_eq!(times, vec![10.0, 20.0, 30.0]);
        assert_eq!(map.first().map(|e| e.jd), Some(10.0));
        assert_eq!(map.last().map(|e| e.jd), Some(30.0));
    }

    #[test]
    fn map_rejects_duplicate_time() {
        let mut map = ApproachMap::new();
        assert!(map.insert(event(10.0, 2.0)));
        assert!(!map.insert(event(10.0, 1.0)));
        assert_eq!(map.len(), 1);
        assert!((map.get(10.0).unwrap().degrees() - 2.0).abs() < 1e-12);
        assert!(map.get(11.0).is_none());
    }

    #[test]
    fn map_closest() {
        let mut map = ApproachMap::new();
        assert!(map.closest().is_none());
        map.insert(event(1.0, 3.0));
        map.insert(event(2.0, 0.2));
        map.insert(event(3.0, 1.0));
        assert_eq!(map.closest().map(|e| e.jd), Some(2.0));
    }
}
