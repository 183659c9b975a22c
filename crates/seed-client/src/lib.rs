//! Remote CRM API client.
//!
//! Thin async adapter over the CRM's batch-create endpoints. Requests
//! carry a JSON array of entities; responses carry the same array
//! annotated with server-assigned ids, which callers persist before
//! the next generation phase. The client never retries and never
//! swallows transport failures; the workflow layer decides whether to
//! abort.

mod client;
mod error;

pub use client::CrmClient;
pub use error::ApiError;
