//! Error types for the leadscan-core library.

use thiserror::Error;

/// Main error type for the leadscan library.
#[derive(Error, Debug)]
pub enum LeadscanError {
    /// OCR processing error.
    #[error("OCR error: {0}")]
    Ocr(#[from] OcrError),

    /// Spreadsheet export error.
    #[error("export error: {0}")]
    Export(#[from] ExportError),

    /// Image decoding error.
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to OCR processing.
#[derive(Error, Debug)]
pub enum OcrError {
    /// Failed to load OCR models.
    #[error("failed to load model: {0}")]
    ModelLoad(String),

    /// Text recognition failed.
    #[error("text recognition failed: {0}")]
    Recognition(String),

    /// No OCR backend was compiled in.
    #[error("OCR backend unavailable: {0}")]
    Unavailable(String),
}

/// Errors related to writing the output table.
#[derive(Error, Debug)]
pub enum ExportError {
    /// Failed to create or write the output file.
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),

    /// CSV serialization failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// XLSX serialization failed.
    #[error("XLSX error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The finished file could not be moved into place.
    #[error("failed to replace {path}: {reason}")]
    Persist { path: String, reason: String },
}

/// Result type for the leadscan library.
pub type Result<T> = std::result::Result<T, LeadscanError>;
