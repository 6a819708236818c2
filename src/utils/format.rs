//! Formatting utilities for dates and other display values.

const SECONDS_PER_DAY: u64 = 86_400;

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Civil (year, month 1-12, day 1-31) date for days since the Unix epoch.
fn civil_from_days(days: i64) -> (i64, u32, u32) {
    // Era-based conversion over the proleptic Gregorian calendar
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z.rem_euclid(146_097);
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = (doy - (153 * mp + 2) / 5 + 1) as u32;
    let month = if mp < 10 { mp + 3 } else { mp - 9 } as u32;
    let year = yoe + era * 400 + i64::from(month <= 2);
    (year, month, day)
}

/// Days since the Unix epoch for a civil date.
fn days_from_civil(year: i64, month: u32, day: u32) -> i64 {
    let year = if month <= 2 { year - 1 } else { year };
    let era = year.div_euclid(400);
    let yoe = year.rem_euclid(400);
    let month = i64::from(month);
    let mp = if month > 2 { month - 3 } else { month + 9 };
    let doy = (153 * mp + 2) / 5 + i64::from(day) - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}

/// Format Unix timestamp for terminal display (e.g., "Jan  5 12:34").
pub fn format_date_short(timestamp: Option<u64>) -> String {
    match timestamp {
        None => "            ".to_string(),
        Some(ts) => {
            let (_, month, day) = civil_from_days((ts / SECONDS_PER_DAY) as i64);
            let hour = (ts % SECONDS_PER_DAY) / 3600;
            let min = (ts % 3600) / 60;
            format!(
                "{} {:2} {:02}:{:02}",
                MONTHS[(month - 1) as usize],
                day,
                hour,
                min
            )
        }
    }
}

/// Format Unix timestamp as ISO date (YYYY-MM-DD).
pub fn format_date_iso(timestamp: u64) -> String {
    let (year, month, day) = civil_from_days((timestamp / SECONDS_PER_DAY) as i64);
    format!("{:04}-{:02}-{:02}", year, month, day)
}

/// Parse an ISO 8601 UTC timestamp as sent by the GitHub API
/// (`2024-05-01T12:30:00Z`) into Unix seconds.
pub fn parse_iso_timestamp(value: &str) -> Option<u64> {
    let (date, time) = value.trim_end_matches('Z').split_once('T')?;

    let mut date_parts = date.splitn(3, '-');
    let year: i64 = date_parts.next()?.parse().ok()?;
    let month: u32 = date_parts.next()?.parse().ok()?;
    let day: u32 = date_parts.next()?.parse().ok()?;
    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return None;
    }

    let time = time.split(['.', '+']).next()?;
    let mut time_parts = time.splitn(3, ':');
    let hour: u64 = time_parts.next()?.parse().ok()?;
    let min: u64 = time_parts.next()?.parse().ok()?;
    let sec: u64 = time_parts.next().unwrap_or("0").parse().ok()?;

    let days = u64::try_from(days_from_civil(year, month, day)).ok()?;
    Some(days * SECONDS_PER_DAY + hour * 3600 + min * 60 + sec)
}

/// Format elapsed time in seconds for boot messages (e.g., "[   0.123]").
pub fn format_elapsed(ms: f64) -> String {
    format!("[{:8.3}]", ms / crate::config::MS_PER_SECOND)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date_iso() {
        // Unix epoch
        assert_eq!(format_date_iso(0), "1970-01-01");
        // 2024-01-01 00:00:00 UTC = 1704067200
        assert_eq!(format_date_iso(1704067200), "2024-01-01");
        // Leap day
        assert_eq!(format_date_iso(1709164800), "2024-02-29");
    }

    #[test]
    fn test_format_date_short() {
        assert_eq!(format_date_short(None), "            ");
        assert_eq!(format_date_short(Some(0)), "Jan  1 00:00");
        // 2024-03-15 09:05:00 UTC
        assert_eq!(format_date_short(Some(1710493500)), "Mar 15 09:05");
    }

    #[test]
    fn test_parse_iso_timestamp() {
        assert_eq!(parse_iso_timestamp("1970-01-01T00:00:00Z"), Some(0));
        assert_eq!(parse_iso_timestamp("2024-01-01T00:00:00Z"), Some(1704067200));
        assert_eq!(parse_iso_timestamp("2024-03-15T09:05:00Z"), Some(1710493500));
        assert_eq!(parse_iso_timestamp("not a date"), None);
        assert_eq!(parse_iso_timestamp("2024-13-01T00:00:00Z"), None);
    }

    #[test]
    fn test_format_elapsed() {
        assert_eq!(format_elapsed(123.0), "[   0.123]");
        assert_eq!(format_elapsed(1234.0), "[   1.234]");
    }
}
