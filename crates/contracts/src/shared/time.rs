//! Clock-time helpers for the capture form.
//!
//! Form times are opaque `HH:MM` strings, not timezone-aware instants; they
//! only ever need to be compared within a single day.

/// Parse `H:MM` / `HH:MM` into minutes since midnight.
///
/// Any other shape (including the empty string) yields `None` rather than
/// an error: an unparsable field simply makes validation inconclusive.
pub fn parse_time(text: &str) -> Option<u32> {
    let (hours, minutes) = text.trim().split_once(':')?;
    if hours.is_empty() || hours.len() > 2 || minutes.len() != 2 {
        return None;
    }
    if !hours.bytes().all(|b| b.is_ascii_digit()) || !minutes.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let h: u32 = hours.parse().ok()?;
    let m: u32 = minutes.parse().ok()?;
    if h > 23 || m > 59 {
        return None;
    }
    Some(h * 60 + m)
}

/// Format minutes since midnight as zero-padded `HH:MM`.
pub fn format_time(minutes: u32) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// Today's local date as `YYYY-MM-DD`, the form's default capture date.
pub fn today_local_date() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_every_valid_minute_of_day() {
        for minutes in 0..(24 * 60) {
            assert_eq!(parse_time(&format_time(minutes)), Some(minutes));
        }
    }

    #[test]
    fn accepts_single_digit_hour() {
        assert_eq!(parse_time("7:05"), Some(7 * 60 + 5));
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(parse_time(" 08:30 "), Some(8 * 60 + 30));
    }

    #[test]
    fn rejects_out_of_range_components() {
        assert_eq!(parse_time("24:00"), None);
        assert_eq!(parse_time("12:60"), None);
    }

    #[test]
    fn rejects_malformed_text() {
        assert_eq!(parse_time(""), None);
        assert_eq!(parse_time("0800"), None);
        assert_eq!(parse_time("8:5"), None);
        assert_eq!(parse_time("ab:cd"), None);
        assert_eq!(parse_time("123:00"), None);
        assert_eq!(parse_time("-1:30"), None);
    }

    #[test]
    fn formats_zero_padded() {
        assert_eq!(format_time(0), "00:00");
        assert_eq!(format_time(9 * 60 + 5), "09:05");
        assert_eq!(format_time(23 * 60 + 59), "23:59");
    }

    #[test]
    fn today_is_iso_shaped() {
        let today = today_local_date();
        assert_eq!(today.len(), 10);
        assert_eq!(&today[4..5], "-");
        assert_eq!(&today[7..8], "-");
    }
}
