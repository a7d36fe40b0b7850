//! Closest-approach search between a sky object and a solar-system body.
//!
//! This crate provides:
//! - Conjunction search: every local minimum of angular separation in an
//!   interval, closer than a configurable limit
//! - Opposition search: the same against the tracked body's antisolar point
//! - Per-body coarse step caps for fast movers (Moon, inner planets)
//! - Progress reporting and cooperative cancellation for long searches

pub mod conjunction;
pub mod conjunction_types;
pub mod control;
pub mod error;
pub(crate) mod search_util;
pub mod separation;

pub use conjunction::{find_closest_approach, find_closest_approach_with, refine_minimum};
pub use conjunction_types::{
    ApproachMap, ConjunctionConfig, ConjunctionEvent, ONE_MINUTE_DAYS, StepCaps,
};
pub use control::{LogProgress, ProgressSink, SearchControl};
pub use error::SearchError;
pub use separation::{apparent_position, separation_at};
