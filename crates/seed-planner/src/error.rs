//! Error types for planner operations.

use seed_graph::GraphError;
use thiserror::Error;

/// Errors that can occur while executing a generation plan.
///
/// The planner never retries: it raises immediately and the caller
/// discards the partial graph.
#[derive(Error, Debug)]
pub enum PlanError {
    /// The plan cannot be satisfied with the given inputs (zero
    /// companies or contacts for a deal request, out-of-range ratios,
    /// no eligible customers). Raised before partial work where
    /// feasible.
    #[error("precondition failed: {0}")]
    Precondition(String),

    /// A graph operation failed, which indicates a planner bug or a
    /// corrupted intermediate file rather than bad input.
    #[error(transparent)]
    Graph(#[from] GraphError),
}
