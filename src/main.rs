//! SortSleuth — sorts a messy folder by file type.
//!
//! Thin binary entry point. All logic lives in the `sortsleuth-core` crate.

use anyhow::Context;
use clap::Parser;
use sortsleuth_core::organizer::progress::SortProgress;
use sortsleuth_core::organizer::{start_sort, validate_root, SortOptions};
use sortsleuth_core::scanner::ScanSummary;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sortsleuth", version)]
#[command(
    about = "Sort a folder into Images, Documents, Videos, Audios, Archives and Unknown",
    long_about = "Recursively classifies files by extension, transliterates Cyrillic file \
                  names to ASCII, moves files into category folders under ROOT, unpacks \
                  archives into Archives/<name>, then removes folders left empty."
)]
struct Cli {
    /// Folder to sort in place
    root: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialise structured logging. Stdout is reserved for the report.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    validate_root(&cli.root).with_context(|| format!("cannot sort {}", cli.root.display()))?;
    tracing::info!("SortSleuth starting in {}", cli.root.display());

    let handle = start_sort(cli.root.clone(), SortOptions::default());
    for event in handle.progress_rx.iter() {
        match event {
            SortProgress::Scanned {
                files,
                folders,
                issues,
            } => tracing::info!("Found {files} files in {folders} folders ({issues} unreadable)"),
            SortProgress::CategoryStarted { category, files } => {
                tracing::info!("Moving {files} file(s) into {}", category.folder_name())
            }
            SortProgress::Extracted(done) => tracing::info!(
                "Unpacked {} into {}",
                done.archive.display(),
                done.destination.display()
            ),
            SortProgress::Moved(_)
            | SortProgress::Skipped(_)
            | SortProgress::Pruned(_)
            | SortProgress::Complete { .. } => {}
        }
    }

    let report = handle
        .join()
        .with_context(|| format!("cannot sort {}", cli.root.display()))?;

    print!("{}", ScanSummary::new(&report.scan, &cli.root));
    println!();
    print!("{report}");

    Ok(())
}
