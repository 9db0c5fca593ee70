//! Tracker module - Core session logic and state management

pub mod form;
mod state;

pub use form::{FormField, RunForm};
pub use state::{Tab, Tracker, TrackerState};
