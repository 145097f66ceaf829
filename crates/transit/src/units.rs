//! Human-readable display units for distances and durations.

/// Format metres for display. Kilometres above 1000 m.
pub fn format_distance(metres: f64) -> String {
    if metres >= 1000.0 {
        format!("{:.1} km", metres / 1000.0)
    } else {
        format!("{:.2} metres", metres)
    }
}

/// Format seconds as minutes. `None` below one minute.
pub fn format_duration(seconds: f64) -> Option<String> {
    if seconds < 60.0 {
        return None;
    }
    let minutes = (seconds / 60.0 * 10.0).round() / 10.0;
    if minutes < 2.0 {
        Some(format!("{} minute", minutes))
    } else {
        Some(format!("{} minutes", minutes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distances() {
        assert_eq!(format_distance(240.0), "240.00 metres");
        assert_eq!(format_distance(1000.0), "1.0 km");
        assert_eq!(format_distance(2350.0), "2.4 km");
    }

    #[test]
    fn durations() {
        assert_eq!(format_duration(45.0), None);
        assert_eq!(format_duration(90.0), Some("1.5 minute".to_string()));
        assert_eq!(format_duration(600.0), Some("10 minutes".to_string()));
    }
}
