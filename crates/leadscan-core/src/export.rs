//! Spreadsheet export.
//!
//! The whole table is rendered in memory and then moved over the target in
//! one rename, so a failed run never leaves a truncated file behind.

use std::io::Write;
use std::path::Path;

use rust_xlsxwriter::{Format, Workbook};
use tempfile::NamedTempFile;
use tracing::info;

use crate::error::ExportError;
use crate::models::config::ExportConfig;
use crate::models::lead::{Column, Lead};

/// Output file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Xlsx,
    Csv,
    Json,
}

impl ExportFormat {
    /// Pick the format from the file extension; anything unknown is XLSX.
    pub fn from_path(path: &Path) -> Self {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match extension.as_str() {
            "csv" => ExportFormat::Csv,
            "json" => ExportFormat::Json,
            _ => ExportFormat::Xlsx,
        }
    }
}

/// Render leads into file contents.
pub fn render(
    format: ExportFormat,
    leads: &[Lead],
    config: &ExportConfig,
) -> Result<Vec<u8>, ExportError> {
    match format {
        ExportFormat::Xlsx => render_xlsx(leads, &config.columns, &config.sheet_name),
        ExportFormat::Csv => render_csv(leads, &config.columns),
        ExportFormat::Json => Ok(serde_json::to_vec_pretty(leads)?),
    }
}

/// Write leads to `path`, replacing any existing file atomically.
pub fn export_leads(
    path: &Path,
    leads: &[Lead],
    config: &ExportConfig,
) -> Result<ExportFormat, ExportError> {
    let format = ExportFormat::from_path(path);
    let bytes = render(format, leads, config)?;

    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(parent)?;
    tmp.write_all(&bytes)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| ExportError::Persist {
        path: path.display().to_string(),
        reason: e.error.to_string(),
    })?;

    info!(
        "Wrote {} leads to {} as {:?}",
        leads.len(),
        path.display(),
        format
    );

    Ok(format)
}

fn render_csv(leads: &[Lead], columns: &[Column]) -> Result<Vec<u8>, ExportError> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(columns.iter().map(|c| c.header()))?;
    for lead in leads {
        wtr.write_record(columns.iter().map(|c| lead.cell(*c)))?;
    }

    wtr.into_inner().map_err(|e| ExportError::Io(e.into_error()))
}

fn render_xlsx(
    leads: &[Lead],
    columns: &[Column],
    sheet_name: &str,
) -> Result<Vec<u8>, ExportError> {
    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sheet_name)?;

    for (col, column) in columns.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, column.header(), &header_format)?;
    }

    for (i, lead) in leads.iter().enumerate() {
        let row = (i + 1) as u32;
        for (col, column) in columns.iter().enumerate() {
            let col = col as u16;
            match (column, lead.lead_age_days) {
                (Column::LeadAgeDays, Some(days)) => {
                    worksheet.write_number(row, col, f64::from(days))?;
                }
                _ => {
                    let value = lead.cell(*column);
                    if !value.is_empty() {
                        worksheet.write_string(row, col, &value)?;
                    }
                }
            }
        }
    }

    Ok(workbook.save_to_buffer()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::lead::AgeBasis;
    use pretty_assertions::assert_eq;

    fn sample() -> Vec<Lead> {
        vec![
            Lead {
                name: Some("Ramesh Kumar".to_string()),
                location: Some("Wagholi, Pune".to_string()),
                flat_type: Some("2BHK".to_string()),
                budget: Some("₹15,000".to_string()),
                contact_number: Some("9876543210".to_string()),
                lead_age_days: Some(2),
                age_basis: Some(AgeBasis::PostedText),
                ..Lead::default()
            },
            Lead {
                contact_number: Some("9123456789".to_string()),
                source: "Olx".to_string(),
                ..Lead::default()
            },
        ]
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(ExportFormat::from_path(Path::new("leads.csv")), ExportFormat::Csv);
        assert_eq!(ExportFormat::from_path(Path::new("leads.JSON")), ExportFormat::Json);
        assert_eq!(ExportFormat::from_path(Path::new("leads.xlsx")), ExportFormat::Xlsx);
        assert_eq!(ExportFormat::from_path(Path::new("leads")), ExportFormat::Xlsx);
    }

    #[test]
    fn test_csv_rows_in_column_order() {
        let bytes = render(ExportFormat::Csv, &sample(), &ExportConfig::default()).unwrap();
        let text = String::from_utf8(bytes).unwrap();

        assert_eq!(
            text,
            "Name,Location,Flat Type,Budget,Contact Number,Source,Lead Age (days)\n\
             Ramesh Kumar,\"Wagholi, Pune\",2BHK,\"₹15,000\",9876543210,Unknown,2\n\
             ,,,,9123456789,Olx,\n"
        );
    }

    #[test]
    fn test_csv_column_subset() {
        let config = ExportConfig {
            columns: vec![Column::ContactNumber, Column::Name],
            ..ExportConfig::default()
        };
        let bytes = render(ExportFormat::Csv, &sample(), &config).unwrap();
        let text = String::from_utf8(bytes).unwrap();

        assert_eq!(
            text,
            "Contact Number,Name\n9876543210,Ramesh Kumar\n9123456789,\n"
        );
    }

    #[test]
    fn test_xlsx_is_a_zip_container() {
        let bytes = render(ExportFormat::Xlsx, &sample(), &ExportConfig::default()).unwrap();
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn test_json_keeps_extra_attributes() {
        let bytes = render(ExportFormat::Json, &sample(), &ExportConfig::default()).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(value[0]["age_basis"], "posted_text");
        assert_eq!(value[1]["contact_number"], "9123456789");
        assert!(value[1]["name"].is_null());
    }

    #[test]
    fn test_export_replaces_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("leads.csv");
        std::fs::write(&path, "stale").unwrap();

        let format = export_leads(&path, &sample(), &ExportConfig::default()).unwrap();

        assert_eq!(format, ExportFormat::Csv);
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("Name,Location"));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_unwritable_target_fails_cleanly() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("leads.xlsx");

        let result = export_leads(&path, &sample(), &ExportConfig::default());

        assert!(matches!(result, Err(ExportError::Io(_))));
        assert!(!path.exists());
    }
}
