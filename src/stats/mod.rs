//! Derived statistics
//!
//! Aggregations over the run log and their display formatting.

mod derive;
mod format;

pub use derive::{average_pace, total_distance, total_duration};
pub use format::{format_duration, format_pace};
