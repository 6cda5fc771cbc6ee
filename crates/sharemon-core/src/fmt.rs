//! Pure display formatting helpers. No styling, no I/O.

/// Counts above this ceiling are treated as unbounded/untrustworthy for
/// display and render as a capped marker instead.
pub const COUNT_DISPLAY_CEILING: u64 = 99_999_999;

/// Renders a counter for display. An absent count normalizes to 0;
/// counts above [`COUNT_DISPLAY_CEILING`] render as `">99999999"`.
pub fn sanitize_count(count: Option<u64>) -> String {
    let count = count.unwrap_or(0);
    if count > COUNT_DISPLAY_CEILING {
        return format!(">{}", COUNT_DISPLAY_CEILING);
    }
    count.to_string()
}

/// Formats an uptime in milliseconds as a humanized duration.
///
/// `"45s"`, `"3m 5s"`, `"2h 11m"`, `"1d 2h"`
pub fn format_uptime(ms: u64) -> String {
    let secs = ms / 1000;
    if secs < 60 {
        format!("{}s", secs)
    } else if secs < 3600 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else if secs < 86400 {
        format!("{}h {}m", secs / 3600, (secs % 3600) / 60)
    } else {
        format!("{}d {}h", secs / 86400, (secs % 86400) / 3600)
    }
}

/// Formats a wire number without float noise: whole values render
/// without a fractional part, others with one decimal.
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{:.1}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_count_passes_small_counts() {
        assert_eq!(sanitize_count(Some(0)), "0");
        assert_eq!(sanitize_count(Some(150)), "150");
        assert_eq!(sanitize_count(Some(99_999_999)), "99999999");
    }

    #[test]
    fn test_sanitize_count_caps_large_counts() {
        assert_eq!(sanitize_count(Some(100_000_000)), ">99999999");
        assert_eq!(sanitize_count(Some(150_000_000)), ">99999999");
        assert_eq!(sanitize_count(Some(u64::MAX)), ">99999999");
    }

    #[test]
    fn test_sanitize_count_absent_is_zero() {
        assert_eq!(sanitize_count(None), "0");
    }

    #[test]
    fn test_format_uptime() {
        assert_eq!(format_uptime(0), "0s");
        assert_eq!(format_uptime(999), "0s");
        assert_eq!(format_uptime(45_000), "45s");
        assert_eq!(format_uptime(185_000), "3m 5s");
        assert_eq!(format_uptime(7_890_000), "2h 11m");
        assert_eq!(format_uptime(93_600_000), "1d 2h");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(12.0), "12");
        assert_eq!(format_number(12.5), "12.5");
        assert_eq!(format_number(-3.0), "-3");
        assert_eq!(format_number(50.0), "50");
    }
}
