//! Achievement catalog
//!
//! Four fixed rules evaluated live against the run log and progression
//! state. Evaluation is a pure projection: no caching, no stored unlock
//! history, identical output for identical inputs.

use crate::progression::Progression;
use crate::run::Run;
use crate::stats::total_distance;

/// Distance target for the cumulative-distance badge, in km
const DISTANCE_TARGET: f64 = 10.0;
/// Pace threshold for the speed badge, in min/km (strictly below)
const SPEED_PACE: f64 = 5.0;
/// Streak target for the consistency badge
const STREAK_TARGET: u32 = 7;

/// Partial-completion display for a locked achievement
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Progress {
    /// Capped progress toward the target
    pub current: f64,
    /// Value at which the achievement unlocks
    pub target: f64,
}

impl Progress {
    /// Completion fraction in 0.0..=1.0
    pub fn fraction(&self) -> f64 {
        (self.current / self.target).clamp(0.0, 1.0)
    }
}

/// One evaluated achievement
#[derive(Debug, Clone, PartialEq)]
pub struct Achievement {
    pub id: u8,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub unlocked: bool,
    /// Present only for achievements with a measurable target
    pub progress: Option<Progress>,
}

/// Evaluate the full catalog against the current session
pub fn evaluate(runs: &[Run], progression: &Progression) -> Vec<Achievement> {
    let distance = total_distance(runs);
    let streak = progression.streak;

    vec![
        Achievement {
            id: 1,
            title: "First Steps",
            description: "Complete your first run",
            icon: "🏃",
            unlocked: !runs.is_empty(),
            progress: None,
        },
        Achievement {
            id: 2,
            title: "Road to Ten",
            description: "Run 10 km in total",
            icon: "🎯",
            unlocked: distance >= DISTANCE_TARGET,
            progress: Some(Progress {
                current: distance.min(DISTANCE_TARGET),
                target: DISTANCE_TARGET,
            }),
        },
        Achievement {
            id: 3,
            title: "Speed Demon",
            description: "Hold a pace below 5:00/km",
            icon: "⚡",
            unlocked: runs.iter().any(|run| run.pace < SPEED_PACE),
            progress: None,
        },
        Achievement {
            id: 4,
            title: "Consistency",
            description: "Run 7 days in a row",
            icon: "🔥",
            unlocked: streak >= STREAK_TARGET,
            progress: Some(Progress {
                current: f64::from(streak.min(STREAK_TARGET)),
                target: f64::from(STREAK_TARGET),
            }),
        },
    ]
}
