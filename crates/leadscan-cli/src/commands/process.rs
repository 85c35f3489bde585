//! Process command - extract the lead from a single file.

use std::fs;
use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Args;
use console::style;
use tracing::info;

use leadscan_core::batch::LeadBatch;
use leadscan_core::export::{render, ExportFormat};
use leadscan_core::extract::{HeuristicLeadParser, LeadParser};
use leadscan_core::models::config::ExportConfig;
use leadscan_core::models::lead::Lead;

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input file (image or .txt transcript)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Source label to report instead of detecting it
    #[arg(short, long)]
    source: Option<String>,

    /// Model directory
    #[arg(short, long)]
    model_dir: Option<PathBuf>,

    /// Print the recognized text before the lead
    #[arg(long)]
    show_text: bool,

    /// Reference date for file-name based lead ages (YYYY-MM-DD)
    #[arg(long)]
    today: Option<NaiveDate>,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

pub async fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let mut config = super::load_config(config_path)?;
    if let Some(model_dir) = args.model_dir.clone() {
        config.ocr.model_dir = model_dir;
    }

    if !args.input.is_file() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("Processing file: {}", args.input.display());

    let mut parser = HeuristicLeadParser::from_config(&config.extraction)
        .with_source_override(args.source.clone());
    if let Some(today) = args.today {
        parser = parser.with_today(today);
    }

    let mut batch = LeadBatch::new(&parser, config.ocr.clone());
    let text = batch.read_text(&args.input)?;

    if args.show_text {
        eprintln!("{}", style("Recognized text:").dim());
        eprintln!("{}", text);
        eprintln!();
    }

    let file_name = args.input.file_name().and_then(|n| n.to_str());
    let result = parser.parse(&text, file_name);

    if !result.lead.is_actionable() {
        eprintln!(
            "{} No contact number found; this lead would be dropped from a scan",
            style("⚠").yellow()
        );
    }
    for warning in &result.warnings {
        info!("{}", warning);
    }

    let output = format_lead(&result.lead, args.format, &config.export)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        print!("{}", output);
    }

    Ok(())
}

fn format_lead(lead: &Lead, format: OutputFormat, export: &ExportConfig) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(lead)?)),
        OutputFormat::Csv => {
            let bytes = render(ExportFormat::Csv, std::slice::from_ref(lead), export)?;
            Ok(String::from_utf8(bytes)?)
        }
        OutputFormat::Text => Ok(format_lead_text(lead, export)),
    }
}

fn format_lead_text(lead: &Lead, export: &ExportConfig) -> String {
    let mut output = String::new();

    for column in &export.columns {
        let value = lead.cell(*column);
        let value = if value.is_empty() { "-".to_string() } else { value };
        output.push_str(&format!("{:<16} {}\n", format!("{}:", column.header()), value));
    }

    if let Some(basis) = lead.age_basis {
        output.push_str(&format!("{:<16} {:?}\n", "Age basis:", basis));
    }

    output
}
