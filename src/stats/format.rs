//! Display formatting for paces and durations

/// Format a pace in min/km as `M:SS/km`
///
/// A zero pace formats as `0:00/km`; the "no runs yet" placeholder is the
/// caller's responsibility.
pub fn format_pace(pace: f64) -> String {
    let minutes = pace.floor();
    let seconds = ((pace - minutes) * 60.0).floor();
    format!("{}:{:02}/km", minutes as u32, seconds as u32)
}

/// Format a duration in minutes as `Hh Mm`, or just `Mm` under an hour
pub fn format_duration(duration_min: f64) -> String {
    let hours = (duration_min / 60.0).floor() as u32;
    let minutes = (duration_min % 60.0).floor() as u32;
    if hours > 0 {
        format!("{}h {}m", hours, minutes)
    } else {
        format!("{}m", minutes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_pace() {
        assert_eq!(format_pace(5.0), "5:00/km");
        assert_eq!(format_pace(5.5), "5:30/km");
        assert_eq!(format_pace(4.25), "4:15/km");
    }

    #[test]
    fn test_format_pace_zero() {
        assert_eq!(format_pace(0.0), "0:00/km"); // never negative or NaN
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(125.0), "2h 5m");
        assert_eq!(format_duration(45.0), "45m");
        assert_eq!(format_duration(60.0), "1h 0m");
    }

    #[test]
    fn test_format_duration_fractional() {
        assert_eq!(format_duration(45.9), "45m"); // whole minutes only
    }
}
