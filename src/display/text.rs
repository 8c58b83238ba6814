//! Small text helpers shared by the ledger views

use std::fmt::Write;

use chrono::NaiveDate;

/// Fallback used when the configured date pattern cannot be rendered
pub const ISO_DATE: &str = "%Y-%m-%d";

const FILLED: char = '█';
const EMPTY: char = '░';

/// Render a share of a whole as a fixed-width bar.
///
/// `ratio` is clamped to `0.0..=1.0`; NaN renders as an empty bar.
pub fn progress_bar(ratio: f64, width: usize) -> String {
    let ratio = if ratio.is_nan() { 0.0 } else { ratio.clamp(0.0, 1.0) };
    let filled = ((ratio * width as f64).round() as usize).min(width);

    let mut bar = String::with_capacity(width * FILLED.len_utf8());
    bar.extend(std::iter::repeat(FILLED).take(filled));
    bar.extend(std::iter::repeat(EMPTY).take(width - filled));
    bar
}

/// Whole percentages for large shares, one decimal below 10%, two for slivers
pub fn percent(value: f64) -> String {
    let decimals = match value {
        v if v > 0.0 && v < 0.1 => 2,
        v if v < 10.0 => 1,
        _ => 0,
    };
    format!("{:.*}%", decimals, value)
}

/// Horizontal rule of `width` box-drawing characters
pub fn rule(width: usize) -> String {
    "─".repeat(width)
}

/// Shorten `text` to at most `max` characters, ending in "..." when cut
pub fn clip(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let keep = max.saturating_sub(3);
    let mut out: String = text.chars().take(keep).collect();
    out.extend(std::iter::repeat('.').take(max - keep));
    out
}

/// Format `date` with a strftime pattern, falling back to ISO dates when the
/// pattern contains a specifier chrono cannot render.
pub fn format_date(date: NaiveDate, pattern: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", date.format(pattern)).is_err() {
        out.clear();
        let _ = write!(out, "{}", date.format(ISO_DATE));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_bar() {
        let half = progress_bar(0.5, 10);
        assert_eq!(half.chars().filter(|c| *c == FILLED).count(), 5);
        assert_eq!(half.chars().count(), 10);

        assert_eq!(progress_bar(0.0, 4), "░░░░");
        assert_eq!(progress_bar(3.0, 4), "████");
        assert_eq!(progress_bar(f64::NAN, 2), "░░");
    }

    #[test]
    fn test_percent() {
        assert_eq!(percent(0.05), "0.05%");
        assert_eq!(percent(5.5), "5.5%");
        assert_eq!(percent(0.0), "0.0%");
        assert_eq!(percent(75.0), "75%");
    }

    #[test]
    fn test_clip() {
        assert_eq!(clip("Hello World", 5), "He...");
        assert_eq!(clip("Hi", 5), "Hi");
        assert_eq!(clip("Test", 4), "Test");
        assert_eq!(clip("Hello", 2), "..");
        assert_eq!(clip("चाय और नाश्ता", 6), "चाय...");
    }

    #[test]
    fn test_format_date_falls_back_on_bad_pattern() {
        let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        assert_eq!(format_date(date, "%d/%m/%Y"), "01/05/2024");
        assert_eq!(format_date(date, "%Q"), "2024-05-01");
        assert_eq!(format_date(date, "%"), "2024-05-01");
    }
}
