//! Run records
//!
//! A single logged workout and the fields derived from it at creation.

use chrono::NaiveDate;

/// Flat calorie estimate per kilometer
const CALORIES_PER_KM: f64 = 65.0;

/// One completed workout
///
/// `pace` and `calories` are computed from distance and duration once,
/// when the record is created, and never recomputed afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Run {
    /// Unique id, assigned by the log at creation
    pub id: u64,
    /// Distance in kilometers
    pub distance_km: f64,
    /// Duration in minutes
    pub duration_min: f64,
    /// Calendar date of the workout (no time of day)
    pub date: NaiveDate,
    /// Pace in minutes per kilometer, fixed at creation
    pub pace: f64,
    /// Calorie estimate, fixed at creation
    pub calories: u32,
}

impl Run {
    /// Create a run, deriving pace and calories from the inputs
    pub fn new(id: u64, distance_km: f64, duration_min: f64, date: NaiveDate) -> Self {
        Self {
            id,
            distance_km,
            duration_min,
            date,
            pace: duration_min / distance_km,
            calories: (distance_km * CALORIES_PER_KM).floor() as u32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_derived_fields() {
        let run = Run::new(1, 10.0, 50.0, date(2026, 8, 7));
        assert_eq!(run.pace, 5.0); // 50 min / 10 km
        assert_eq!(run.calories, 650); // 10 * 65
    }

    #[test]
    fn test_calories_floor() {
        let run = Run::new(1, 5.3, 30.0, date(2026, 8, 7));
        assert_eq!(run.calories, 344); // floor(5.3 * 65) = floor(344.5)
    }
}
