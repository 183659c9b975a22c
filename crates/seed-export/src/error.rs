//! Error types for export operations.

use seed_graph::GraphError;
use thiserror::Error;

/// Errors that can occur while projecting or writing export files.
#[derive(Error, Debug)]
pub enum ExportError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Graph lookup failed, meaning the graph was corrupted between
    /// generation and projection.
    #[error(transparent)]
    Graph(#[from] GraphError),
}
