//! Batch command - extract data from every PDF matching a glob pattern.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, warn};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Glob pattern of input PDFs, e.g. "invoices/*.pdf"
    #[arg(required = true)]
    pattern: String,

    /// Directory for the per-file JSON results
    #[arg(short, long, default_value = "out")]
    output_dir: PathBuf,

    /// Keep going after individual failures
    #[arg(long)]
    keep_going: bool,
}

pub fn run(args: BatchArgs) -> anyhow::Result<()> {
    let files: Vec<PathBuf> = glob::glob(&args.pattern)?
        .filter_map(|entry| entry.ok())
        .filter(|path| path.is_file())
        .collect();

    if files.is_empty() {
        anyhow::bail!("No files match pattern: {}", args.pattern);
    }

    info!("Processing {} file(s)", files.len());
    fs::create_dir_all(&args.output_dir)?;

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("##-"),
    );

    let mut failures = 0usize;
    for file in &files {
        pb.set_message(
            file.file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default(),
        );

        match process_one(file, &args.output_dir) {
            Ok(()) => {}
            Err(e) if args.keep_going => {
                warn!("Failed to process {}: {}", file.display(), e);
                failures += 1;
            }
            Err(e) => {
                pb.abandon();
                return Err(e.context(format!("while processing {}", file.display())));
            }
        }

        pb.inc(1);
    }

    pb.finish_with_message("Done");

    if failures > 0 {
        eprintln!(
            "{} {} file(s) failed, {} succeeded",
            style("!").yellow(),
            failures,
            files.len() - failures
        );
    }

    Ok(())
}

fn process_one(input: &Path, output_dir: &Path) -> anyhow::Result<()> {
    let data = fs::read(input)?;
    let record = schet_core::parse_invoice_pdf(&data)?;

    let stem = input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "invoice".to_string());
    let target = output_dir.join(format!("{stem}.json"));

    fs::write(&target, serde_json::to_string_pretty(&record)?)?;
    Ok(())
}
