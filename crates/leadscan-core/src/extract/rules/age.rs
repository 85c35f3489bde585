//! Lead age derivation.
//!
//! Two independent sources: a relative phrase in the listing ("Posted 2 days
//! ago") and a capture date embedded in the screenshot file name
//! (`Screenshot_20250909-180611.jpg`). The phrase wins when both exist.

use std::path::Path;

use chrono::NaiveDate;
use tracing::debug;

use crate::models::lead::AgeBasis;

use super::patterns::{
    AGE_DAYS, AGE_HOURS, AGE_MINUTES, AGE_MONTHS, AGE_TODAY, AGE_WEEKS, AGE_YESTERDAY, FILE_DATE,
};

const DAYS_PER_MONTH: u32 = 30;
const DAYS_PER_WEEK: u32 = 7;
const HOURS_PER_DAY: u32 = 24;

/// Age in days from a relative posting phrase.
pub fn parse_relative_age(text: &str) -> Option<u32> {
    if AGE_TODAY.is_match(text) {
        return Some(0);
    }
    if AGE_YESTERDAY.is_match(text) {
        return Some(1);
    }
    if let Some(n) = AGE_MONTHS.captures(text).and_then(|c| parse_count(&c[1])) {
        return Some(n.saturating_mul(DAYS_PER_MONTH));
    }
    if let Some(n) = AGE_WEEKS.captures(text).and_then(|c| parse_count(&c[1])) {
        return Some(n.saturating_mul(DAYS_PER_WEEK));
    }
    if let Some(n) = AGE_DAYS.captures(text).and_then(|c| parse_count(&c[1])) {
        return Some(n);
    }
    if let Some(n) = AGE_HOURS.captures(text).and_then(|c| parse_count(&c[1])) {
        return Some(if n < HOURS_PER_DAY { 0 } else { n / HOURS_PER_DAY });
    }
    if AGE_MINUTES.is_match(text) {
        return Some(0);
    }
    None
}

fn parse_count(s: &str) -> Option<u32> {
    match s.to_lowercase().as_str() {
        "a" | "an" => Some(1),
        digits => digits.parse().ok(),
    }
}

/// Capture date from a `YYYYMMDD-` / `YYYYMMDD_` file name.
pub fn parse_date_from_file_name(file_name: &str) -> Option<NaiveDate> {
    let base = Path::new(file_name)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(file_name);

    let caps = FILE_DATE.captures(base)?;
    let s = &caps[1];
    let year: i32 = s[0..4].parse().ok()?;
    let month: u32 = s[4..6].parse().ok()?;
    let day: u32 = s[6..8].parse().ok()?;

    NaiveDate::from_ymd_opt(year, month, day)
}

/// Days between the file name's capture date and `today`.
pub fn age_from_file_name(file_name: &str, today: NaiveDate) -> Option<u32> {
    let shot_date = parse_date_from_file_name(file_name)?;
    let days = (today - shot_date).num_days();

    if days < 0 {
        debug!("Ignoring future capture date {} in {}", shot_date, file_name);
        return None;
    }

    u32::try_from(days).ok()
}

/// Lead age and the derivation that produced it.
pub fn derive_lead_age(
    text: &str,
    file_name: Option<&str>,
    today: NaiveDate,
) -> Option<(u32, AgeBasis)> {
    if let Some(days) = parse_relative_age(text) {
        return Some((days, AgeBasis::PostedText));
    }

    file_name
        .and_then(|name| age_from_file_name(name, today))
        .map(|days| (days, AgeBasis::FileDate))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_relative_phrases() {
        assert_eq!(parse_relative_age("Posted today"), Some(0));
        assert_eq!(parse_relative_age("Yesterday"), Some(1));
        assert_eq!(parse_relative_age("3 days ago"), Some(3));
        assert_eq!(parse_relative_age("2 weeks ago"), Some(14));
        assert_eq!(parse_relative_age("1 month ago"), Some(30));
        assert_eq!(parse_relative_age("1 day ago"), Some(1));
        assert_eq!(parse_relative_age("Listed 6 months ago"), Some(180));
    }

    #[test]
    fn test_hours() {
        assert_eq!(parse_relative_age("5 hours ago"), Some(0));
        assert_eq!(parse_relative_age("23 hrs ago"), Some(0));
        assert_eq!(parse_relative_age("49 hours ago"), Some(2));
        assert_eq!(parse_relative_age("an hour ago"), Some(0));
    }

    #[test]
    fn test_articles_and_minutes() {
        assert_eq!(parse_relative_age("a week ago"), Some(7));
        assert_eq!(parse_relative_age("a month ago"), Some(30));
        assert_eq!(parse_relative_age("10 mins ago"), Some(0));
        assert_eq!(parse_relative_age("Just now"), Some(0));
    }

    #[test]
    fn test_no_phrase() {
        assert_eq!(parse_relative_age("2 BHK, 900 sq ft"), None);
        assert_eq!(parse_relative_age("Available from 5 days"), None);
    }

    #[test]
    fn test_file_name_date() {
        assert_eq!(
            parse_date_from_file_name("Screenshot_20250909-180611.jpg"),
            Some(date(2025, 9, 9))
        );
        assert_eq!(
            parse_date_from_file_name("/tmp/shots/IMG_20250102_101010.png"),
            Some(date(2025, 1, 2))
        );
        assert_eq!(parse_date_from_file_name("Screenshot_20251340-1.jpg"), None);
        assert_eq!(parse_date_from_file_name("20250909.jpg"), None);
    }

    #[test]
    fn test_age_from_file_name() {
        let today = date(2025, 9, 19);
        assert_eq!(age_from_file_name("Screenshot_20250909-180611.jpg", today), Some(10));
        assert_eq!(age_from_file_name("Screenshot_20250919-000000.jpg", today), Some(0));
        assert_eq!(age_from_file_name("Screenshot_20251001-000000.jpg", today), None);
    }

    #[test]
    fn test_text_phrase_preferred_over_file_date() {
        let today = date(2025, 9, 19);
        let file = Some("Screenshot_20250909-180611.jpg");

        assert_eq!(
            derive_lead_age("Posted 2 days ago", file, today),
            Some((2, AgeBasis::PostedText))
        );
        assert_eq!(
            derive_lead_age("no age here", file, today),
            Some((10, AgeBasis::FileDate))
        );
        assert_eq!(derive_lead_age("no age here", Some("lead.png"), today), None);
        assert_eq!(derive_lead_age("no age here", None, today), None);
    }
}
