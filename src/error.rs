use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IconError {
    #[error("Input directory not found: {}", .0.display())]
    MissingInput(PathBuf),

    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot resolve the current directory: {0}")]
    CurrentDir(#[source] std::io::Error),

    #[error("Directory walk error: {0}")]
    Walk(#[from] ignore::Error),

    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),
}
