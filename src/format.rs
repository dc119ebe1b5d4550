//! Presentation formatting helpers for display layers
//!
//! Deliberately outside the projection core: engine outputs are plain
//! numbers and these helpers only serve console tables and reports.

/// Compact currency rendering: `$1.2M`, `$450K`, `$736`
pub fn compact_currency(value: f64) -> String {
    if value >= 1_000_000.0 {
        let millions = format!("{:.1}", value / 1_000_000.0);
        let trimmed = millions.strip_suffix(".0").unwrap_or(&millions);
        format!("${}M", trimmed)
    } else if value >= 1_000.0 {
        format!("${:.0}K", value / 1_000.0)
    } else {
        format!("${:.0}", value)
    }
}

/// Render a decimal fraction as a percentage string, e.g. `0.052` -> `5.2%`
pub fn percentage(fraction: f64, decimals: usize) -> String {
    format!("{:.*}%", decimals, fraction * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compact_currency() {
        assert_eq!(compact_currency(1_250_000.0), "$1.2M");
        assert_eq!(compact_currency(2_000_000.0), "$2M");
        assert_eq!(compact_currency(450_000.0), "$450K");
        assert_eq!(compact_currency(1_000.0), "$1K");
        assert_eq!(compact_currency(736.4), "$736");
        assert_eq!(compact_currency(0.0), "$0");
    }

    #[test]
    fn test_percentage() {
        assert_eq!(percentage(0.052, 1), "5.2%");
        assert_eq!(percentage(0.0465, 2), "4.65%");
        assert_eq!(percentage(1.0, 0), "100%");
    }
}
