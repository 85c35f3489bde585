//! Heuristic lead parser combining the field rules.

use std::time::Instant;

use chrono::{Local, NaiveDate};
use tracing::{debug, info};

use crate::models::config::{ExtractionConfig, SourceRule};
use crate::models::lead::Lead;
use crate::ocr::OcrResult;

use super::rules::{
    derive_lead_age, detect_source, parse_budget_amount, split_lines,
    BudgetExtractor, FieldExtractor, FlatTypeExtractor, LocationExtractor, NameGuesser,
    PhoneExtractor,
};
use super::LeadExtractor;

/// Result of lead extraction.
#[derive(Debug, Clone)]
pub struct ExtractionResult {
    /// Extracted lead.
    pub lead: Lead,
    /// Raw OCR text.
    pub raw_text: String,
    /// Fields that could not be found.
    pub warnings: Vec<String>,
    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

/// Trait for lead parsing.
pub trait LeadParser {
    /// Parse a lead from OCR text; `file_name` feeds source and age detection.
    fn parse(&self, text: &str, file_name: Option<&str>) -> ExtractionResult;
}

/// Rule-based lead parser.
pub struct HeuristicLeadParser {
    phone: PhoneExtractor,
    flat: FlatTypeExtractor,
    budget: BudgetExtractor,
    name: NameGuesser,
    location: LocationExtractor,
    sources: Vec<SourceRule>,
    source_override: Option<String>,
    today: Option<NaiveDate>,
}

impl HeuristicLeadParser {
    /// Create a parser with the default lookup tables.
    pub fn new() -> Self {
        Self::from_config(&ExtractionConfig::default())
    }

    /// Create a parser from configured lookup tables.
    pub fn from_config(config: &ExtractionConfig) -> Self {
        Self {
            phone: PhoneExtractor::new(),
            flat: FlatTypeExtractor::new(),
            budget: BudgetExtractor::new().with_bare_numbers(config.allow_bare_budget),
            name: NameGuesser::new(config),
            location: LocationExtractor::new(config),
            sources: config.sources.clone(),
            source_override: None,
            today: None,
        }
    }

    /// Report this label as the source of every lead, skipping detection.
    pub fn with_source_override(mut self, label: Option<String>) -> Self {
        self.source_override = label
            .map(|l| l.trim().to_string())
            .filter(|l| !l.is_empty());
        self
    }

    /// Fix the reference date for file-name based ages.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }
}

impl Default for HeuristicLeadParser {
    fn default() -> Self {
        Self::new()
    }
}

impl LeadParser for HeuristicLeadParser {
    fn parse(&self, text: &str, file_name: Option<&str>) -> ExtractionResult {
        let start = Instant::now();
        let mut warnings = Vec::new();
        let lines = split_lines(text);

        debug!("Parsing lead from {} characters, {} lines", text.len(), lines.len());

        let contact_number = self.phone.extract(text).map(|m| m.value);
        if contact_number.is_none() {
            warnings.push("Could not extract contact number".to_string());
        }

        let flat_type = self.flat.extract(text).map(|m| m.value);
        if flat_type.is_none() {
            warnings.push("Could not extract flat type".to_string());
        }

        let budget = self.budget.extract(text).map(|m| m.value);
        if budget.is_none() {
            warnings.push("Could not extract budget".to_string());
        }
        let budget_amount = budget.as_deref().and_then(parse_budget_amount);

        let name = self.name.guess(&lines, contact_number.as_deref());
        if name.is_none() {
            warnings.push("Could not extract name".to_string());
        }

        let location = self.location.extract(&lines);
        if location.is_none() {
            warnings.push("Could not extract location".to_string());
        }

        let source = match &self.source_override {
            Some(label) => label.clone(),
            None => detect_source(text, file_name, &self.sources),
        };

        let age = derive_lead_age(text, file_name, self.today());
        if age.is_none() {
            warnings.push("Could not derive lead age".to_string());
        }

        let lead = Lead {
            name,
            location,
            flat_type,
            budget,
            budget_amount,
            contact_number,
            source,
            lead_age_days: age.map(|(days, _)| days),
            age_basis: age.map(|(_, basis)| basis),
            file: file_name.map(|f| f.to_string()),
        };

        info!(
            "Extracted lead {} from {}",
            lead.contact_number.as_deref().unwrap_or("<no contact>"),
            file_name.unwrap_or("<text>")
        );

        ExtractionResult {
            lead,
            raw_text: text.to_string(),
            warnings,
            processing_time_ms: start.elapsed().as_millis() as u64,
        }
    }
}

impl LeadExtractor for HeuristicLeadParser {
    fn extract(&self, ocr_result: &OcrResult, file_name: Option<&str>) -> Lead {
        self.parse(&ocr_result.text, file_name).lead
    }

    fn extract_from_text(&self, text: &str, file_name: Option<&str>) -> Lead {
        self.parse(text, file_name).lead
    }
}
