//! Indian mobile number extraction.
//!
//! The normalized number is the trailing 10 digits of the match, so
//! `+91-9876543210`, `91 9876543210` and `9876543210` all collapse to the
//! same dedup key.

use super::patterns::{NON_DIGITS, PHONE};
use super::{ExtractionMatch, FieldExtractor};

/// Contact number extractor.
pub struct PhoneExtractor;

impl PhoneExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PhoneExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for PhoneExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        PHONE
            .find_iter(text)
            .map(|m| {
                ExtractionMatch::new(normalize_phone(m.as_str()), m.as_str())
                    .with_position(m.start(), m.end())
            })
            .filter(|m| is_valid_contact(&m.value))
            .collect()
    }
}

/// Keep only the trailing 10 digits of a phone match.
pub fn normalize_phone(raw: &str) -> String {
    let digits = NON_DIGITS.replace_all(raw, "");
    let start = digits.len().saturating_sub(10);
    digits[start..].to_string()
}

/// Exactly 10 ASCII digits, first digit 6-9.
pub fn is_valid_contact(number: &str) -> bool {
    number.len() == 10
        && number.bytes().all(|b| b.is_ascii_digit())
        && matches!(number.as_bytes()[0], b'6'..=b'9')
}

/// First contact number in the text.
pub fn extract_contact_number(text: &str) -> Option<String> {
    PhoneExtractor::new().extract(text).map(|m| m.value)
}
