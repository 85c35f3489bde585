//! Location extraction from city names and locality keywords.

use regex::Regex;
use tracing::warn;

use crate::models::config::ExtractionConfig;

use super::patterns::{IN_PHRASE, LOCATION_LABEL, MULTI_SPACE};

/// Location strategies, tried in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationStrategy {
    /// Lines that mention a known city or a locality keyword.
    KeywordLines,
    /// Text following the word "in" ("Flat in Baner, Pune").
    InPhrase,
}

/// Location extractor built from the city and keyword tables.
pub struct LocationExtractor {
    cities: Vec<String>,
    keywords: Option<Regex>,
    max_fragments: usize,
    strategies: Vec<LocationStrategy>,
}

impl LocationExtractor {
    pub fn new(config: &ExtractionConfig) -> Self {
        Self {
            cities: config.cities.iter().map(|c| c.to_lowercase()).collect(),
            keywords: keyword_pattern(&config.location_keywords),
            max_fragments: config.max_location_fragments,
            strategies: vec![LocationStrategy::KeywordLines, LocationStrategy::InPhrase],
        }
    }

    /// Restrict or reorder the strategy chain.
    pub fn with_strategies(mut self, strategies: Vec<LocationStrategy>) -> Self {
        self.strategies = strategies;
        self
    }

    /// Extract the location from trimmed lines.
    pub fn extract(&self, lines: &[&str]) -> Option<String> {
        self.strategies
            .iter()
            .find_map(|s| match s {
                LocationStrategy::KeywordLines => self.keyword_lines(lines),
                LocationStrategy::InPhrase => in_phrase(lines),
            })
    }

    fn is_location_line(&self, line: &str) -> bool {
        let lower = line.to_lowercase();
        self.cities.iter().any(|c| lower.contains(c.as_str()))
            || self.keywords.as_ref().is_some_and(|re| re.is_match(line))
    }

    fn keyword_lines(&self, lines: &[&str]) -> Option<String> {
        let mut picks: Vec<String> = Vec::new();

        for line in lines.iter().filter(|l| self.is_location_line(l)) {
            let collapsed = MULTI_SPACE.replace_all(line, " ");
            let cleaned = LOCATION_LABEL.replace(collapsed.trim(), "").trim().to_string();
            if !cleaned.is_empty() && !picks.contains(&cleaned) {
                picks.push(cleaned);
            }
        }

        if picks.is_empty() {
            return None;
        }

        picks.truncate(self.max_fragments.max(1));
        Some(picks.join(", "))
    }
}

fn keyword_pattern(keywords: &[String]) -> Option<Regex> {
    if keywords.is_empty() {
        return None;
    }

    let alternation = keywords
        .iter()
        .map(|k| regex::escape(k))
        .collect::<Vec<_>>()
        .join("|");

    match Regex::new(&format!(r"(?i)(?:{})\b", alternation)) {
        Ok(re) => Some(re),
        Err(e) => {
            warn!("Ignoring location keywords: {}", e);
            None
        }
    }
}

fn in_phrase(lines: &[&str]) -> Option<String> {
    lines.iter().find_map(|line| {
        let caps = IN_PHRASE.captures(line)?;
        let place = caps[1]
            .trim()
            .trim_end_matches(|c: char| c == '.' || c == ',' || c == '!')
            .trim();
        (!place.is_empty()).then(|| MULTI_SPACE.replace_all(place, " ").into_owned())
    })
}
