//! Progression systems

mod state;
mod xp;

pub use state::Progression;
pub use xp::{calculate_xp, level_for_xp, runner_title, xp_into_level, XP_PER_LEVEL};
