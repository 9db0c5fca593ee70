//! Progress meter widget
//!
//! Text bars for XP and achievement progress.

/// Build a fixed-width fill bar for a 0.0..=1.0 fraction
pub fn meter(fraction: f64, width: u16) -> String {
    let width = width as usize;
    let clamped = fraction.clamp(0.0, 1.0);
    let filled = (clamped * width as f64).round() as usize;
    let mut bar = String::with_capacity(width * 3);
    for _ in 0..filled {
        bar.push('█');
    }
    for _ in filled..width {
        bar.push('░');
    }
    bar
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meter_bounds() {
        assert_eq!(meter(0.0, 10), "░░░░░░░░░░");
        assert_eq!(meter(1.0, 10), "██████████");
    }

    #[test]
    fn test_meter_partial() {
        assert_eq!(meter(0.5, 10), "█████░░░░░");
    }

    #[test]
    fn test_meter_clamps_overflow() {
        assert_eq!(meter(2.5, 4), "████"); // never wider than requested
    }
}
