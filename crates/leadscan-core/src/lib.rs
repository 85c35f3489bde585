//! Core library for real-estate lead extraction from listing screenshots.
//!
//! This crate provides:
//! - Image loading and an OCR seam backed by PaddleOCR models
//! - Heuristic field extraction (contact, flat type, budget, name, location, source, age)
//! - Contact-number deduplication
//! - XLSX / CSV / JSON export

pub mod batch;
pub mod dedup;
pub mod error;
pub mod export;
pub mod extract;
pub mod models;
pub mod ocr;

pub use batch::{discover_files, BatchReport, LeadBatch};
pub use dedup::dedup_by_contact;
pub use error::{ExportError, LeadscanError, OcrError, Result};
pub use export::{export_leads, ExportFormat};
pub use extract::{ExtractionResult, HeuristicLeadParser, LeadExtractor, LeadParser};
pub use models::config::LeadscanConfig;
pub use models::lead::{AgeBasis, Column, Lead};
pub use ocr::{create_engine, load_image, OcrResult, TextBox, TextRecognizer};

#[cfg(feature = "native")]
pub use ocr::PureOcrEngine;
