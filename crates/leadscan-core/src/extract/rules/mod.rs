//! Rule-based field extractors for listing screenshots.

pub mod age;
pub mod budget;
pub mod flat;
pub mod location;
pub mod name;
pub mod patterns;
pub mod phone;
pub mod source;

pub use age::{age_from_file_name, derive_lead_age, parse_date_from_file_name, parse_relative_age};
pub use budget::{parse_budget_amount, BudgetExtractor, BudgetStrategy};
pub use flat::{extract_flat_type, FlatTypeExtractor};
pub use location::{LocationExtractor, LocationStrategy};
pub use name::{NameGuesser, NameStrategy};
pub use phone::{extract_contact_number, is_valid_contact, normalize_phone, PhoneExtractor};
pub use source::{detect_source, title_case};

/// Trait for field extractors.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the field from text.
    fn extract(&self, text: &str) -> Option<Self::Output>;

    /// Extract all occurrences of the field.
    fn extract_all(&self, text: &str) -> Vec<Self::Output>;
}

/// A normalized value together with the text it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractionMatch<T> {
    /// Extracted value.
    pub value: T,
    /// Position in source text.
    pub position: Option<(usize, usize)>,
    /// Source text that was matched.
    pub source: String,
}

impl<T> ExtractionMatch<T> {
    pub fn new(value: T, source: impl Into<String>) -> Self {
        Self {
            value,
            position: None,
            source: source.into(),
        }
    }

    pub fn with_position(mut self, start: usize, end: usize) -> Self {
        self.position = Some((start, end));
        self
    }
}

/// Split OCR text into trimmed, non-empty lines.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.lines()
        .map(|l| l.trim())
        .filter(|l| !l.is_empty())
        .collect()
}
