//! Common regex patterns for listing screenshot extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Indian mobile number, optional +91 / 91 country prefix
    pub static ref PHONE: Regex = Regex::new(
        r"\b(?:\+?91[\-\s]?)?[6-9][0-9]{9}\b"
    ).unwrap();

    // Flat size ("2 BHK", "3bhk")
    pub static ref FLAT_TYPE: Regex = Regex::new(
        r"(?i)([0-9]+)\s*BHK"
    ).unwrap();

    // Budget with a currency marker (₹ 15,000 / Rs. 15000 / INR 1,50,000.00)
    pub static ref BUDGET_CURRENCY: Regex = Regex::new(
        r"(?i)(?:₹|\b(?:Rs|INR)\.?)\s?\d[\d,]*(?:\.\d+)?"
    ).unwrap();

    // Bare comma-grouped number (15,000 / 1,50,000)
    pub static ref BUDGET_BARE: Regex = Regex::new(
        r"\b\d{1,3}(?:,\d{2,3})+(?:\.\d+)?\b"
    ).unwrap();

    // Field label in front of a location line
    pub static ref LOCATION_LABEL: Regex = Regex::new(
        r"(?i)^(?:location|address|area|locality)\s*[:\-]\s*"
    ).unwrap();

    // "... in Baner, Pune"
    pub static ref IN_PHRASE: Regex = Regex::new(
        r"\bin\s+([A-Z][^\n]*)"
    ).unwrap();

    pub static ref MULTI_SPACE: Regex = Regex::new(
        r"\s{2,}"
    ).unwrap();

    pub static ref NON_NAME_CHARS: Regex = Regex::new(
        r"[^A-Za-z ]+"
    ).unwrap();

    pub static ref NON_DIGITS: Regex = Regex::new(
        r"[^0-9]"
    ).unwrap();

    // Relative posting age
    pub static ref AGE_TODAY: Regex = Regex::new(
        r"(?i)\btoday\b"
    ).unwrap();

    pub static ref AGE_YESTERDAY: Regex = Regex::new(
        r"(?i)\byesterday\b"
    ).unwrap();

    pub static ref AGE_MONTHS: Regex = Regex::new(
        r"(?i)\b([0-9]+|an?)\s*months?\s+ago\b"
    ).unwrap();

    pub static ref AGE_WEEKS: Regex = Regex::new(
        r"(?i)\b([0-9]+|an?)\s*weeks?\s+ago\b"
    ).unwrap();

    pub static ref AGE_DAYS: Regex = Regex::new(
        r"(?i)\b([0-9]+|an?)\s*days?\s+ago\b"
    ).unwrap();

    pub static ref AGE_HOURS: Regex = Regex::new(
        r"(?i)\b([0-9]+|an?)\s*(?:hours?|hrs?)\s+ago\b"
    ).unwrap();

    pub static ref AGE_MINUTES: Regex = Regex::new(
        r"(?i)\b(?:[0-9]+|an?)\s*(?:minutes?|mins?)\s+ago\b|\bjust\s+now\b"
    ).unwrap();

    // Screenshot_20250909-180611.jpg
    pub static ref FILE_DATE: Regex = Regex::new(
        r"([0-9]{8})[-_]"
    ).unwrap();
}
