//! Session state machine
//!
//! Owns the run log, progression, and pending form, and manages
//! transitions between the dashboard and the log-run dialog.

use crate::achievements::{evaluate, Achievement};
use crate::progression::{calculate_xp, Progression};
use crate::run::{Run, RunLog};
use crate::tracker::form::RunForm;

/// The main session struct holding all tracker data
pub struct Tracker {
    /// Current UI flow state
    state: TrackerState,
    /// All runs logged this session
    log: RunLog,
    /// Level, XP, and streak
    progression: Progression,
    /// Pending log-run input
    form: RunForm,
    /// Selected dashboard tab
    tab: Tab,
}

/// All possible tracker states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackerState {
    /// Stats, level, and the run/achievement tabs
    Dashboard,
    /// The log-run dialog is open
    LogRun,
    /// Exit the app
    Quit,
}

/// Dashboard tab selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Runs,
    Achievements,
}

impl Tab {
    /// Flip to the other tab
    pub fn toggle(self) -> Self {
        match self {
            Tab::Runs => Tab::Achievements,
            Tab::Achievements => Tab::Runs,
        }
    }
}

impl Tracker {
    /// Create a fresh session
    pub fn new() -> Self {
        Self {
            state: TrackerState::Dashboard,
            log: RunLog::new(),
            progression: Progression::new(),
            form: RunForm::new(),
            tab: Tab::Runs,
        }
    }

    /// Get the current state
    pub fn state(&self) -> TrackerState {
        self.state
    }

    /// Set a new state
    pub fn set_state(&mut self, state: TrackerState) {
        log::debug!("State transition: {:?} -> {:?}", self.state, state);
        self.state = state;
    }

    /// All runs, most recent first
    pub fn runs(&self) -> &[Run] {
        self.log.all()
    }

    /// Current progression counters
    pub fn progression(&self) -> &Progression {
        &self.progression
    }

    /// The pending log-run form
    pub fn form(&self) -> &RunForm {
        &self.form
    }

    /// Mutable access to the form for field editing
    pub fn form_mut(&mut self) -> &mut RunForm {
        &mut self.form
    }

    /// Selected dashboard tab
    pub fn tab(&self) -> Tab {
        self.tab
    }

    /// Switch to the other dashboard tab
    pub fn toggle_tab(&mut self) {
        self.tab = self.tab.toggle();
    }

    /// Open the log-run dialog
    pub fn open_log_run(&mut self) {
        self.set_state(TrackerState::LogRun);
    }

    /// Close the dialog without logging, discarding the form
    pub fn cancel_log_run(&mut self) {
        self.form.clear();
        self.set_state(TrackerState::Dashboard);
    }

    /// Request to quit the app
    pub fn quit(&mut self) {
        self.set_state(TrackerState::Quit);
    }

    /// Evaluate the achievement catalog against the current session
    pub fn achievements(&self) -> Vec<Achievement> {
        evaluate(self.log.all(), &self.progression)
    }

    /// Log the pending form as a run
    ///
    /// Invalid input is a silent no-op: the dialog stays open and no
    /// state changes. On success the run is prepended, XP/level/streak
    /// update, the form resets, and the dialog closes.
    pub fn add_run(&mut self) {
        let parsed = match self.form.parse() {
            Ok(parsed) => parsed,
            Err(e) => {
                log::debug!("Ignoring log-run submit: {}", e);
                return;
            }
        };

        let id = self.log.next_id();
        let run = Run::new(id, parsed.distance_km, parsed.duration_min, parsed.date);
        let earned = calculate_xp(run.distance_km, run.pace);
        let leveled_up = self.progression.record_run(earned);

        log::info!(
            "Logged run #{}: {:.1} km in {:.0} min (+{} XP)",
            run.id,
            run.distance_km,
            run.duration_min,
            earned
        );
        if leveled_up {
            log::info!("Level up! Now level {}", self.progression.level);
        }

        self.log.append(run);
        self.form.clear();
        self.set_state(TrackerState::Dashboard);
    }
}

impl Default for Tracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill_form(tracker: &mut Tracker, distance: &str, duration: &str) {
        tracker.form_mut().distance = distance.to_string();
        tracker.form_mut().duration = duration.to_string();
        tracker.form_mut().date = "2026-08-07".to_string();
    }

    #[test]
    fn test_add_run_happy_path() {
        let mut tracker = Tracker::new();
        tracker.open_log_run();
        fill_form(&mut tracker, "10", "50");
        tracker.add_run();

        assert_eq!(tracker.runs().len(), 1);
        assert_eq!(tracker.runs()[0].pace, 5.0);
        assert_eq!(tracker.runs()[0].calories, 650);
        assert_eq!(tracker.progression().xp, 110); // 100 base + 10 bonus
        assert_eq!(tracker.progression().level, 2);
        assert_eq!(tracker.progression().streak, 1);
        assert_eq!(tracker.state(), TrackerState::Dashboard); // dialog closed
        assert_eq!(tracker.form().distance, ""); // form reset
    }

    #[test]
    fn test_add_run_missing_duration_is_noop() {
        let mut tracker = Tracker::new();
        tracker.open_log_run();
        fill_form(&mut tracker, "10", "");
        tracker.add_run();

        assert!(tracker.runs().is_empty());
        assert_eq!(tracker.progression().xp, 0);
        assert_eq!(tracker.progression().level, 1);
        assert_eq!(tracker.progression().streak, 0);
        assert_eq!(tracker.state(), TrackerState::LogRun); // dialog stays open
    }

    #[test]
    fn test_add_run_rejects_zero_distance() {
        let mut tracker = Tracker::new();
        tracker.open_log_run();
        fill_form(&mut tracker, "0", "30");
        tracker.add_run();

        assert!(tracker.runs().is_empty()); // no infinite pace can be created
    }

    #[test]
    fn test_runs_ordered_newest_first() {
        let mut tracker = Tracker::new();
        fill_form(&mut tracker, "3", "18");
        tracker.add_run();
        fill_form(&mut tracker, "7", "35");
        tracker.add_run();

        assert_eq!(tracker.runs()[0].distance_km, 7.0);
        assert_eq!(tracker.runs()[1].distance_km, 3.0);
    }

    #[test]
    fn test_cancel_discards_form() {
        let mut tracker = Tracker::new();
        tracker.open_log_run();
        fill_form(&mut tracker, "10", "50");
        tracker.cancel_log_run();

        assert_eq!(tracker.state(), TrackerState::Dashboard);
        assert_eq!(tracker.form().distance, "");
        assert!(tracker.runs().is_empty());
    }

    #[test]
    fn test_achievements_follow_session() {
        let mut tracker = Tracker::new();
        assert!(!tracker.achievements()[0].unlocked);

        fill_form(&mut tracker, "4", "22");
        tracker.add_run();
        let all = tracker.achievements();
        assert!(all[0].unlocked); // first run logged
        assert!(!all[1].unlocked); // 4 km < 10 km
    }
}
