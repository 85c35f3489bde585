//! Flat size ("BHK") extraction.

use super::patterns::FLAT_TYPE;
use super::{ExtractionMatch, FieldExtractor};

/// Flat type extractor producing values like `2BHK`.
pub struct FlatTypeExtractor;

impl FlatTypeExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FlatTypeExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for FlatTypeExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        FLAT_TYPE
            .captures_iter(text)
            .filter_map(|caps| {
                let full_match = caps.get(0)?;
                let value = format!("{}BHK", &caps[1]);
                Some(
                    ExtractionMatch::new(value, full_match.as_str())
                        .with_position(full_match.start(), full_match.end()),
                )
            })
            .collect()
    }
}

/// First flat type in the text.
pub fn extract_flat_type(text: &str) -> Option<String> {
    FlatTypeExtractor::new().extract(text).map(|m| m.value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalizes_spacing_and_case() {
        assert_eq!(extract_flat_type("2 BHK Flat for Rent"), Some("2BHK".to_string()));
        assert_eq!(extract_flat_type("spacious 3bhk"), Some("3BHK".to_string()));
        assert_eq!(extract_flat_type("1  Bhk"), Some("1BHK".to_string()));
    }

    #[test]
    fn test_first_match_wins() {
        assert_eq!(
            extract_flat_type("2 BHK and 3 BHK available"),
            Some("2BHK".to_string())
        );
    }

    #[test]
    fn test_missing() {
        assert_eq!(extract_flat_type("Studio apartment"), None);
        assert_eq!(extract_flat_type("BHK"), None);
    }

    #[test]
    fn test_shape() {
        let re = regex::Regex::new(r"^\d+BHK$").unwrap();
        for text in ["10 bhk", "4BHK", "Flat: 2 Bhk"] {
            let value = extract_flat_type(text).unwrap();
            assert!(re.is_match(&value), "{value}");
        }
    }
}
