//! Errors for the command-line host.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("failed to read or write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not named pom.xml (pass --force to process it anyway)", .path.display())]
    NotAPomFile { path: PathBuf },

    #[error("--stdout accepts exactly one file")]
    StdoutSingleFile,
}

pub type Result<T> = std::result::Result<T, CliError>;
