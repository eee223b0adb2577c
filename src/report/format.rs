//! Display formatting helpers shared by the report CLI and the TUI.
//!
//! We keep formatting code in one place so:
//! - the aggregation code stays clean and testable
//! - output changes are localized (important for future snapshot tests)

/// `2500.0` -> `"2.5K"`, `-1500.0` -> `"-1.5K"`.
pub fn fmt_thousands(value: f64) -> String {
    format!("{:.1}K", value / 1000.0)
}

/// `2500.0` -> `"$2.5K"`. Negative values keep the sign after the `$`.
pub fn fmt_currency_thousands(value: f64) -> String {
    format!("${:.1}K", value / 1000.0)
}

/// `0.16` -> `"16%"`. Rounds half away from zero, like the charts' axis labels.
pub fn fmt_percent(fraction: f64) -> String {
    format!("{}%", (fraction * 100.0).round() as i64)
}

/// Plain currency with cents, used for per-order averages.
pub fn fmt_currency(value: f64) -> String {
    format!("${value:.2}")
}

pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out = String::new();
    for (i, ch) in s.chars().enumerate() {
        if i + 1 >= max {
            break;
        }
        out.push(ch);
    }
    out.push('.');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands_formatting() {
        assert_eq!(fmt_thousands(2500.0), "2.5K");
        assert_eq!(fmt_thousands(-1500.0), "-1.5K");
        assert_eq!(fmt_thousands(0.0), "0.0K");
        assert_eq!(fmt_thousands(15000.0), "15.0K");
    }

    #[test]
    fn currency_thousands_formatting() {
        assert_eq!(fmt_currency_thousands(15000.0), "$15.0K");
        assert_eq!(fmt_currency_thousands(-1500.0), "$-1.5K");
    }

    #[test]
    fn percent_formatting() {
        assert_eq!(fmt_percent(0.16), "16%");
        assert_eq!(fmt_percent(0.1234), "12%");
        assert_eq!(fmt_percent(0.125), "13%");
        assert_eq!(fmt_percent(-0.05), "-5%");
        assert_eq!(fmt_percent(1.0), "100%");
    }

    #[test]
    fn currency_keeps_cents() {
        assert_eq!(fmt_currency(28.466), "$28.47");
        assert_eq!(fmt_currency(-13.2), "$-13.20");
    }

    #[test]
    fn truncate_marks_cut_labels() {
        assert_eq!(truncate("Standard Class", 20), "Standard Class");
        assert_eq!(truncate("Standard Class", 9), "Standard.");
    }
}
