//! Contact name guessing.
//!
//! Listing screenshots rarely label the poster's name, so the guess relies on
//! layout: the name usually sits a few lines above the phone number, or near
//! the top of the card.

use regex::Regex;
use tracing::warn;

use crate::models::config::ExtractionConfig;

use super::patterns::{NON_DIGITS, NON_NAME_CHARS};

const MIN_NAME_LEN: usize = 2;
const MAX_NAME_LEN: usize = 30;

/// Name strategies, tried in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameStrategy {
    /// Scan upward from the line holding the contact number.
    PhoneProximity,
    /// First letters-only form of suitable length among the leading lines.
    LeadingCleanLine,
    /// First line made only of letters and spaces.
    AlphabeticLine,
}

/// Name guesser driven by the stop-token table.
pub struct NameGuesser {
    stop_tokens: Option<Regex>,
    window: usize,
    fallback_lines: usize,
    strategies: Vec<NameStrategy>,
}

impl NameGuesser {
    pub fn new(config: &ExtractionConfig) -> Self {
        Self {
            stop_tokens: stop_token_pattern(&config.name_stop_tokens),
            window: config.name_window,
            fallback_lines: config.name_fallback_lines,
            strategies: vec![
                NameStrategy::PhoneProximity,
                NameStrategy::LeadingCleanLine,
                NameStrategy::AlphabeticLine,
            ],
        }
    }

    /// Restrict or reorder the strategy chain.
    pub fn with_strategies(mut self, strategies: Vec<NameStrategy>) -> Self {
        self.strategies = strategies;
        self
    }

    /// Guess a name from trimmed lines; `phone` is the normalized contact number.
    pub fn guess(&self, lines: &[&str], phone: Option<&str>) -> Option<String> {
        self.strategies
            .iter()
            .find_map(|s| self.apply(*s, lines, phone))
    }

    fn apply(&self, strategy: NameStrategy, lines: &[&str], phone: Option<&str>) -> Option<String> {
        match strategy {
            NameStrategy::PhoneProximity => self.near_phone(lines, phone?),
            NameStrategy::LeadingCleanLine => lines
                .iter()
                .take(self.fallback_lines)
                .map(|l| letters_only(l))
                .find(|w| has_name_length(w)),
            NameStrategy::AlphabeticLine => lines
                .iter()
                .find(|l| l.chars().all(|c| c.is_ascii_alphabetic() || c == ' '))
                .map(|l| l.to_string())
                .filter(|w| has_name_length(w)),
        }
    }

    fn near_phone(&self, lines: &[&str], phone: &str) -> Option<String> {
        let idx = lines
            .iter()
            .position(|l| NON_DIGITS.replace_all(l, "").contains(phone))?;

        lines[idx.saturating_sub(self.window)..idx]
            .iter()
            .rev()
            .map(|l| letters_only(l))
            .find(|w| has_name_length(w) && !self.has_stop_token(w))
    }

    fn has_stop_token(&self, candidate: &str) -> bool {
        self.stop_tokens
            .as_ref()
            .is_some_and(|re| re.is_match(candidate))
    }
}

/// Tokens match at the start of a word, so "Call now" is rejected but "McCall" is not.
fn stop_token_pattern(tokens: &[String]) -> Option<Regex> {
    let tokens: Vec<String> = tokens
        .iter()
        .map(|t| t.trim())
        .filter(|t| !t.is_empty())
        .map(regex::escape)
        .collect();
    if tokens.is_empty() {
        return None;
    }

    match Regex::new(&format!(r"(?i)\b(?:{})", tokens.join("|"))) {
        Ok(re) => Some(re),
        Err(e) => {
            warn!("Ignoring name stop tokens: {}", e);
            None
        }
    }
}

fn letters_only(line: &str) -> String {
    NON_NAME_CHARS.replace_all(line, "").trim().to_string()
}

fn has_name_length(candidate: &str) -> bool {
    (MIN_NAME_LEN..=MAX_NAME_LEN).contains(&candidate.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guesser() -> NameGuesser {
        NameGuesser::new(&ExtractionConfig::default())
    }

    #[test]
    fn test_name_above_phone_skips_boilerplate() {
        let lines = vec![
            "Ramesh Kumar",
            "Owner",
            "2 BHK Flat for Rent",
            "Location: Wagholi, Pune",
            "Budget: ₹15,000",
            "Call 9876543210",
        ];
        assert_eq!(
            guesser().guess(&lines, Some("9876543210")),
            Some("Ramesh Kumar".to_string())
        );
    }

    #[test]
    fn test_stop_tokens_match_word_starts() {
        let lines = vec!["Kevin McCall", "Call now", "9876543210"];
        assert_eq!(
            guesser().guess(&lines, Some("9876543210")),
            Some("Kevin McCall".to_string())
        );

        let lines = vec!["Owners Association", "9876543210"];
        let g = guesser().with_strategies(vec![NameStrategy::PhoneProximity]);
        assert_eq!(g.guess(&lines, Some("9876543210")), None);
    }

    #[test]
    fn test_phone_with_separators_is_located() {
        let lines = vec!["Listing", "Sunita Patil", "+91 98765-43210"];
        assert_eq!(
            guesser().guess(&lines, Some("9876543210")),
            Some("Sunita Patil".to_string())
        );
    }

    #[test]
    fn test_window_limit() {
        let lines = vec![
            "Anil Deshmukh",
            "chat now",
            "view number",
            "whatsapp",
            "dealer",
            "Owner",
            "9876543210",
        ];
        // Only the five lines above the phone are scanned; falls back to the top line
        let g = guesser().with_strategies(vec![NameStrategy::PhoneProximity]);
        assert_eq!(g.guess(&lines, Some("9876543210")), None);
        assert_eq!(
            guesser().guess(&lines, Some("9876543210")),
            Some("Anil Deshmukh".to_string())
        );
    }

    #[test]
    fn test_fallback_without_phone() {
        let lines = vec!["12345", "Priya S.", "Flat details"];
        assert_eq!(guesser().guess(&lines, None), Some("Priya S".to_string()));
    }

    #[test]
    fn test_alphabetic_line_strategy() {
        let lines = vec!["#1", "Call 9876543210", "Meera Joshi"];
        let g = guesser().with_strategies(vec![NameStrategy::AlphabeticLine]);
        assert_eq!(g.guess(&lines, None), Some("Meera Joshi".to_string()));
    }

    #[test]
    fn test_rejects_too_long_candidates() {
        let long = "A very long line of marketing copy that is not a name";
        let lines = vec![long, "9876543210"];
        assert_eq!(guesser().guess(&lines, Some("9876543210")), None);
    }
}
