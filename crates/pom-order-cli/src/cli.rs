//! Argument parsing and the per-file processing loop.

use crate::error::{CliError, Result};
use clap::Parser;
use pom_order_core::PomOrderer;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Parser)]
#[command(
    name = "pom-order",
    version,
    about = "Canonicalize the element order of Maven pom.xml files"
)]
pub struct Cli {
    /// pom.xml files to reorder in place.
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Report files that would change without rewriting anything.
    #[arg(long)]
    pub check: bool,

    /// Print the reordered document to stdout instead of rewriting the
    /// file. Accepts a single file.
    #[arg(long, conflicts_with = "check")]
    pub stdout: bool,

    /// Process files even if they are not named pom.xml.
    #[arg(long)]
    pub force: bool,
}

/// Outcome of a run, used by `main` to pick the exit code.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// Files read.
    pub scanned: usize,
    /// Files that were (or, under --check, would be) reordered.
    pub changed: usize,
}

fn is_pom_file(path: &Path) -> bool {
    path.file_name().is_some_and(|name| name == "pom.xml")
}

/// Processes every file named on the command line.
///
/// # Errors
///
/// Stops at the first I/O failure or refused file; files already
/// processed stay processed (each rewrite is independent).
pub fn run(cli: &Cli) -> Result<Summary> {
    if cli.stdout && cli.files.len() > 1 {
        return Err(CliError::StdoutSingleFile);
    }

    let orderer = PomOrderer::new();
    let mut summary = Summary::default();

    for path in &cli.files {
        if !cli.force && !is_pom_file(path) {
            return Err(CliError::NotAPomFile { path: path.clone() });
        }

        let text = fs::read_to_string(path).map_err(|source| CliError::Io {
            path: path.clone(),
            source,
        })?;
        let reordered = orderer.order(&text);
        let changed = reordered != text;

        summary.scanned += 1;
        if changed {
            summary.changed += 1;
        }

        if cli.stdout {
            print!("{reordered}");
        } else if cli.check {
            if changed {
                println!("{}: would reorder", path.display());
            }
        } else if changed {
            fs::write(path, &reordered).map_err(|source| CliError::Io {
                path: path.clone(),
                source,
            })?;
            tracing::info!("reordered {}", path.display());
        } else {
            tracing::debug!("{} already canonical", path.display());
        }
    }

    Ok(summary)
}
