//! Aggregate statistics
//!
//! Pure reductions over the full run list, recomputed on every query.

use crate::run::Run;

/// Total distance across all runs, in kilometers
pub fn total_distance(runs: &[Run]) -> f64 {
    runs.iter().map(|run| run.distance_km).sum()
}

/// Total duration across all runs, in minutes
pub fn total_duration(runs: &[Run]) -> f64 {
    runs.iter().map(|run| run.duration_min).sum()
}

/// Unweighted mean of the stored per-run paces, in minutes per km
///
/// Returns 0.0 for an empty list; callers must treat 0 as "no pace yet"
/// and render a placeholder instead of formatting it as a real pace.
pub fn average_pace(runs: &[Run]) -> f64 {
    if runs.is_empty() {
        return 0.0;
    }
    let total: f64 = runs.iter().map(|run| run.pace).sum();
    total / runs.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn run(id: u64, distance: f64, duration: f64) -> Run {
        Run::new(
            id,
            distance,
            duration,
            NaiveDate::from_ymd_opt(2026, 8, 7).unwrap(),
        )
    }

    #[test]
    fn test_empty_totals() {
        assert_eq!(total_distance(&[]), 0.0);
        assert_eq!(total_duration(&[]), 0.0);
        assert_eq!(average_pace(&[]), 0.0);
    }

    #[test]
    fn test_totals() {
        let runs = [run(1, 5.0, 25.0), run(2, 10.0, 60.0)];
        assert_eq!(total_distance(&runs), 15.0);
        assert_eq!(total_duration(&runs), 85.0);
    }

    #[test]
    fn test_average_pace_is_mean_of_paces() {
        // Paces are 5.0 and 6.0; the mean of paces (5.5) is not the same
        // as total duration / total distance (85/15 = 5.67).
        let runs = [run(1, 5.0, 25.0), run(2, 10.0, 60.0)];
        assert_eq!(average_pace(&runs), 5.5);
    }
}
