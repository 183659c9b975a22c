//! In-memory association graph for one generation run.
//!
//! The graph holds every generated company, contact, and deal, plus the
//! relationships between them:
//!
//! - Company ↔ Contact is many-to-many, stored as two mirrored adjacency
//!   sets that are always kept symmetric.
//! - Company → Deal and Contact → Deal are one-to-many views derived
//!   from each deal's owning ids when the deal is registered.
//!
//! Entities are stored in insertion-order arenas and addressed
//! internally by dense `u32` indices; callers only ever see the opaque
//! `Uuid` ids. Adjacency sets are ordered by dense index, so all
//! iteration over the graph follows registration order and a fixed
//! random seed reproduces identical traversals.
//!
//! The graph only grows: nothing is mutated or deleted between entity
//! creation and projection, and a failed mutation leaves the graph
//! exactly as it was.

mod error;
mod graph;

pub use error::GraphError;
pub use graph::AssociationGraph;
