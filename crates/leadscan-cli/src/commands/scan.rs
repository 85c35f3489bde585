//! Scan command - turn a folder of screenshots into a lead spreadsheet.

use std::path::PathBuf;
use std::time::Instant;

use chrono::NaiveDate;
use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

use leadscan_core::batch::{discover_files, LeadBatch};
use leadscan_core::export::export_leads;
use leadscan_core::extract::HeuristicLeadParser;
use leadscan_core::models::lead::Column;

/// Arguments for the scan command.
#[derive(Args)]
pub struct ScanArgs {
    /// Directory containing screenshots (and optional .txt transcripts)
    #[arg(required = true)]
    img_dir: PathBuf,

    /// Output spreadsheet (.xlsx, .csv or .json)
    #[arg(short, long)]
    output: PathBuf,

    /// Source label reported for every lead instead of detecting it
    #[arg(short, long)]
    source: Option<String>,

    /// Glob pattern for files inside the directory
    #[arg(short, long)]
    pattern: Option<String>,

    /// Model directory
    #[arg(short, long)]
    model_dir: Option<PathBuf>,

    /// Columns to write, comma separated (e.g. "name,contact,age")
    #[arg(long, value_delimiter = ',')]
    columns: Vec<String>,

    /// Reference date for file-name based lead ages (YYYY-MM-DD)
    #[arg(long)]
    today: Option<NaiveDate>,
}

pub async fn run(args: ScanArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let mut config = super::load_config(config_path)?;

    if let Some(model_dir) = args.model_dir {
        config.ocr.model_dir = model_dir;
    }
    if let Some(pattern) = args.pattern {
        config.batch.pattern = pattern;
    }
    if !args.columns.is_empty() {
        config.export.columns = parse_columns(&args.columns)?;
    }

    if !args.img_dir.is_dir() {
        anyhow::bail!("Input directory not found: {}", args.img_dir.display());
    }

    let files = discover_files(&args.img_dir, &config.batch.pattern)?;
    if files.is_empty() {
        anyhow::bail!(
            "No matching files found for pattern: {}",
            args.img_dir.join(&config.batch.pattern).display()
        );
    }

    println!(
        "{} Found {} files to process",
        style("ℹ").blue(),
        files.len()
    );

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")?
            .progress_chars("=>-"),
    );

    let mut parser = HeuristicLeadParser::from_config(&config.extraction)
        .with_source_override(args.source);
    if let Some(today) = args.today {
        parser = parser.with_today(today);
    }

    let mut batch = LeadBatch::new(&parser, config.ocr.clone());
    let report = batch.run_with_progress(&files, |path, lead| {
        debug!(
            "{} -> {}",
            path.display(),
            lead.contact_number.as_deref().unwrap_or("no contact")
        );
        pb.inc(1);
    })?;

    pb.finish_and_clear();

    export_leads(&args.output, &report.leads, &config.export)?;

    println!(
        "{} Leads saved: {}",
        style("✓").green(),
        args.output.display()
    );
    println!(
        "   {} leads, {} duplicates, {} without contact, {} unreadable ({:?})",
        style(report.leads.len()).green(),
        style(report.duplicates).yellow(),
        style(report.without_contact).yellow(),
        style(report.unreadable).red(),
        start.elapsed()
    );

    Ok(())
}

fn parse_columns(names: &[String]) -> anyhow::Result<Vec<Column>> {
    names
        .iter()
        .map(|name| {
            Column::from_str(name.trim())
                .ok_or_else(|| anyhow::anyhow!("Unknown column: {}", name))
        })
        .collect()
}
