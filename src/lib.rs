//! Stridelog - a gamified terminal running log
//!
//! Log your runs, watch the totals and pace stats update,
//! and earn XP, levels, and achievement badges along the way.

pub mod achievements;
pub mod progression;
pub mod run;
pub mod stats;
pub mod tracker;
pub mod ui;

// Re-export commonly used types
pub use run::{Run, RunLog};
pub use tracker::{Tracker, TrackerState};
