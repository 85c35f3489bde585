//! Directory batch runner: discovery, text acquisition, extraction, dedup.

use std::path::{Path, PathBuf};

use glob::glob;
use tracing::{debug, info, warn};

use crate::dedup::dedup_by_contact;
use crate::error::{LeadscanError, Result};
use crate::extract::{HeuristicLeadParser, LeadParser};
use crate::models::config::OcrConfig;
use crate::models::lead::Lead;
use crate::ocr::{create_engine, load_image, TextRecognizer};

/// Extension of saved OCR transcripts, parsed without running OCR.
pub const TRANSCRIPT_EXTENSION: &str = "txt";

/// Outcome of a batch run.
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    /// Deduplicated leads in input order.
    pub leads: Vec<Lead>,
    /// Files visited.
    pub files_scanned: usize,
    /// Files that could not be decoded or recognized.
    pub unreadable: usize,
    /// Leads dropped for lack of a contact number.
    pub without_contact: usize,
    /// Leads dropped as repeated contact numbers.
    pub duplicates: usize,
}

/// List regular files matching `pattern` inside `dir`, sorted by path.
pub fn discover_files(dir: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    let full = dir.join(pattern);
    let full = full
        .to_str()
        .ok_or_else(|| LeadscanError::Config(format!("non UTF-8 path: {}", full.display())))?;

    let mut files: Vec<PathBuf> = glob(full)
        .map_err(|e| LeadscanError::Config(format!("invalid pattern {}: {}", pattern, e)))?
        .filter_map(|r| r.ok())
        .filter(|p| p.is_file())
        .collect();

    files.sort();
    debug!("Discovered {} files in {}", files.len(), dir.display());
    Ok(files)
}

/// Sequential lead extraction over a list of files.
pub struct LeadBatch<'a> {
    parser: &'a HeuristicLeadParser,
    ocr_config: OcrConfig,
    recognizer: Option<Box<dyn TextRecognizer>>,
}

impl<'a> LeadBatch<'a> {
    pub fn new(parser: &'a HeuristicLeadParser, ocr_config: OcrConfig) -> Self {
        Self {
            parser,
            ocr_config,
            recognizer: None,
        }
    }

    /// Use this recognizer instead of creating the built-in engine.
    pub fn with_recognizer(mut self, recognizer: Box<dyn TextRecognizer>) -> Self {
        self.recognizer = Some(recognizer);
        self
    }

    /// Discover files in `dir` and process them.
    pub fn run_dir(&mut self, dir: &Path, pattern: &str) -> Result<BatchReport> {
        let files = discover_files(dir, pattern)?;
        self.run(&files)
    }

    /// Process files in sorted path order and deduplicate the leads.
    pub fn run(&mut self, files: &[PathBuf]) -> Result<BatchReport> {
        self.run_with_progress(files, |_, _| {})
    }

    /// Like [`run`](Self::run), calling `on_file` after each file.
    pub fn run_with_progress<F>(&mut self, files: &[PathBuf], mut on_file: F) -> Result<BatchReport>
    where
        F: FnMut(&Path, &Lead),
    {
        let mut sorted = files.to_vec();
        sorted.sort();

        let mut report = BatchReport {
            files_scanned: sorted.len(),
            ..BatchReport::default()
        };
        let mut extracted = Vec::with_capacity(sorted.len());

        for path in &sorted {
            let text = match self.read_text(path) {
                Ok(text) => text,
                Err(LeadscanError::Ocr(e)) if self.recognizer.is_none() => {
                    return Err(LeadscanError::Ocr(e));
                }
                Err(e) => {
                    warn!("Failed to read {}: {}", path.display(), e);
                    report.unreadable += 1;
                    String::new()
                }
            };

            let file_name = path.file_name().and_then(|n| n.to_str());
            let result = self.parser.parse(&text, file_name);
            if !result.lead.is_actionable() {
                report.without_contact += 1;
            }

            on_file(path, &result.lead);
            extracted.push(result.lead);
        }

        let with_contact = extracted.len() - report.without_contact;
        report.leads = dedup_by_contact(extracted);
        report.duplicates = with_contact - report.leads.len();

        info!(
            "Batch complete: {} files, {} leads, {} duplicates, {} without contact",
            report.files_scanned,
            report.leads.len(),
            report.duplicates,
            report.without_contact
        );

        Ok(report)
    }

    /// Text of one file: transcripts are read directly, images go through OCR.
    pub fn read_text(&mut self, path: &Path) -> Result<String> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        if extension == TRANSCRIPT_EXTENSION {
            debug!("Reading transcript {}", path.display());
            return Ok(std::fs::read_to_string(path)?);
        }

        let image = load_image(path)?;
        let recognizer = self.recognizer()?;
        Ok(recognizer.recognize(&image)?.text)
    }

    fn recognizer(&mut self) -> Result<&dyn TextRecognizer> {
        if self.recognizer.is_none() {
            self.recognizer = Some(create_engine(&self.ocr_config)?);
        }
        match self.recognizer.as_deref() {
            Some(r) => Ok(r),
            None => Err(LeadscanError::Config("OCR engine not initialized".to_string())),
        }
    }
}
