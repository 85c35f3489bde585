//! Configuration structures for the lead extraction pipeline.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::models::lead::Column;

/// Main configuration for the leadscan pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LeadscanConfig {
    /// OCR configuration.
    pub ocr: OcrConfig,

    /// Field extraction tables and limits.
    pub extraction: ExtractionConfig,

    /// Spreadsheet export configuration.
    pub export: ExportConfig,

    /// Batch discovery configuration.
    pub batch: BatchConfig,
}

/// OCR engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OcrConfig {
    /// Directory containing model files.
    pub model_dir: PathBuf,

    /// Text detection model file name.
    pub detection_model: String,

    /// Text recognition model file name.
    pub recognition_model: String,

    /// Character dictionary file name.
    pub dictionary: String,

    /// Keep `[UNK]` tokens emitted by the recognizer instead of blanking them.
    pub keep_unk: bool,
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            model_dir: PathBuf::from("models"),
            detection_model: "det.onnx".to_string(),
            recognition_model: "latin_rec.onnx".to_string(),
            dictionary: "latin_dict.txt".to_string(),
            keep_unk: false,
        }
    }
}

impl OcrConfig {
    /// Get full path to a model file.
    pub fn model_path(&self, model_name: &str) -> PathBuf {
        self.model_dir.join(model_name)
    }
}

/// One row of the source table: a label and the keywords that identify it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceRule {
    /// Platform label, reported in title case.
    pub label: String,
    /// Lowercase keywords searched in the text and file name.
    pub keywords: Vec<String>,
}

impl SourceRule {
    pub fn new(label: &str, keywords: &[&str]) -> Self {
        Self {
            label: label.to_string(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }
}

/// Lookup tables and limits used by the field heuristics.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Known city and locality names (matched case-insensitively).
    pub cities: Vec<String>,

    /// Location suffix keywords such as "Nagar" or "Society".
    pub location_keywords: Vec<String>,

    /// Maximum number of location fragments joined into the Location field.
    pub max_location_fragments: usize,

    /// Tokens that disqualify a line from being a name.
    pub name_stop_tokens: Vec<String>,

    /// How many lines above the phone line are scanned for a name.
    pub name_window: usize,

    /// How many leading lines the fallback name strategy looks at.
    pub name_fallback_lines: usize,

    /// Ordered platform table; first match wins.
    pub sources: Vec<SourceRule>,

    /// Accept bare comma-grouped numbers as a budget when no currency marker exists.
    pub allow_bare_budget: bool,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            cities: to_strings(&[
                "Pune", "Mumbai", "Thane", "Navi Mumbai", "Nagpur", "Nashik", "Aurangabad",
                "Noida", "Delhi", "Gurgaon", "Talegaon", "Wagholi", "Parel", "Andheri",
                "Kalyan", "Vasai", "Vihar", "Peth", "Dabhade",
            ]),
            location_keywords: to_strings(&[
                "Society", "Galaxy", "Apartment", "Residency", "Complex", "Nagar", "Vihar",
                "Peth", "Colony", "CHS", "Heights", "Greens", "City", "Garden", "Enclave",
                "Phase", "Road",
            ]),
            max_location_fragments: 2,
            name_stop_tokens: to_strings(&[
                "chat", "whatsapp", "view number", "owner", "dealer", "properties",
                "property", "budget", "location", "posted", "bhk", "call", "contact",
                "price", "for rent", "for sale",
            ]),
            name_window: 5,
            name_fallback_lines: 6,
            sources: vec![
                SourceRule::new("olx", &["olx"]),
                SourceRule::new("99acres", &["99acres", "99 acres"]),
                SourceRule::new("magicbricks", &["magicbricks", "magic bricks"]),
                SourceRule::new("housing", &["housing.com"]),
                SourceRule::new("nobroker", &["nobroker", "no broker"]),
                SourceRule::new("facebook marketplace", &["facebook marketplace", "marketplace"]),
                SourceRule::new("facebook", &["facebook", "fb.com"]),
            ],
            allow_bare_budget: false,
        }
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Spreadsheet export configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Columns to write, in order.
    pub columns: Vec<Column>,

    /// Worksheet name for XLSX output.
    pub sheet_name: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            columns: Column::ALL.to_vec(),
            sheet_name: "Leads".to_string(),
        }
    }
}

/// Input discovery configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    /// Glob pattern matched inside the input directory.
    pub pattern: String,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            pattern: "*".to_string(),
        }
    }
}

impl LeadscanConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })?;
        std::fs::write(path, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let json = r#"{ "extraction": { "allow_bare_budget": true, "name_window": 3 } }"#;
        let config: LeadscanConfig = serde_json::from_str(json).unwrap();

        assert!(config.extraction.allow_bare_budget);
        assert_eq!(config.extraction.name_window, 3);
        assert_eq!(config.extraction.max_location_fragments, 2);
        assert!(config.extraction.cities.iter().any(|c| c == "Wagholi"));
        assert_eq!(config.export.columns.len(), 7);
        assert_eq!(config.batch.pattern, "*");
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = LeadscanConfig::default();
        config.export.columns = vec![Column::ContactNumber, Column::Name];
        config.save(&path).unwrap();

        let loaded = LeadscanConfig::from_file(&path).unwrap();
        assert_eq!(loaded.export.columns, vec![Column::ContactNumber, Column::Name]);
    }
}
