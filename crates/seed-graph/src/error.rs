//! Error types for graph operations.

use thiserror::Error;
use uuid::Uuid;

/// Errors that can occur when registering entities or querying the graph.
///
/// Both variants are fatal to a generation run: a duplicate insertion or
/// a reference to an unregistered entity means the caller (planner or
/// intermediate file) is broken, and the partial graph is discarded
/// rather than repaired.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum GraphError {
    /// An entity or deal with this id is already registered.
    #[error("duplicate id: {0} is already registered")]
    DuplicateId(Uuid),

    /// The id was never registered with the graph.
    #[error("unknown reference: {0} was never registered")]
    UnknownReference(Uuid),
}
