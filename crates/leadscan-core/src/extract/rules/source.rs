//! Listing platform detection.

use crate::models::config::SourceRule;
use crate::models::lead::UNKNOWN_SOURCE;

/// Detect the listing platform from the text and the file name.
///
/// The first rule with a keyword present in either wins; its label is
/// reported in title case.
pub fn detect_source(text: &str, file_name: Option<&str>, rules: &[SourceRule]) -> String {
    let haystack = format!("{} {}", text, file_name.unwrap_or("")).to_lowercase();

    rules
        .iter()
        .find(|rule| {
            rule.keywords
                .iter()
                .any(|k| !k.is_empty() && haystack.contains(&k.to_lowercase()))
        })
        .map(|rule| title_case(&rule.label))
        .unwrap_or_else(|| UNKNOWN_SOURCE.to_string())
}

/// Capitalize the first character of every whitespace-separated word.
pub fn title_case(label: &str) -> String {
    label
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(|c| c.to_lowercase()))
                    .collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
