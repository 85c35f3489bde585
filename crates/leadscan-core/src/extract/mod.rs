//! Lead field extraction module.

mod parser;
pub mod rules;

pub use parser::{ExtractionResult, HeuristicLeadParser, LeadParser};

use crate::models::lead::Lead;
use crate::ocr::OcrResult;

/// Trait for lead extractors working on OCR output.
pub trait LeadExtractor {
    /// Extract a lead from an OCR result.
    fn extract(&self, ocr_result: &OcrResult, file_name: Option<&str>) -> Lead;

    /// Extract a lead from plain text.
    fn extract_from_text(&self, text: &str, file_name: Option<&str>) -> Lead;
}
