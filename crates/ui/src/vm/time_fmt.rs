use chrono::{DateTime, Utc};

#[must_use]
pub fn format_datetime(value: DateTime<Utc>) -> String {
    value.format("%Y-%m-%d %H:%M").to_string()
}

/// Countdown display, `mm:ss`. Minutes are not capped at 59.
#[must_use]
pub fn format_countdown(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

#[must_use]
pub fn format_duration(seconds: u32) -> String {
    match (seconds / 60, seconds % 60) {
        (0, secs) => format!("{secs} sec"),
        (mins, 0) => format!("{mins} min"),
        (mins, secs) => format!("{mins} min {secs} sec"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn countdown_pads_minutes_and_seconds() {
        assert_eq!(format_countdown(0), "00:00");
        assert_eq!(format_countdown(65), "01:05");
        assert_eq!(format_countdown(600), "10:00");
        assert_eq!(format_countdown(6_000), "100:00");
    }

    #[test]
    fn duration_labels() {
        assert_eq!(format_duration(45), "45 sec");
        assert_eq!(format_duration(600), "10 min");
        assert_eq!(format_duration(90), "1 min 30 sec");
    }
}
