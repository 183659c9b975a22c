//! Generation planner for crm-seed.
//!
//! The planner decides how many entities and associations to create and
//! in what pattern, given target counts and target ratios, then drives
//! the factories and the association graph to realize that plan. All
//! randomness flows through one seeded `StdRng`, so a fixed seed (plus
//! a fixed reference instant for date windows) reproduces a run
//! byte-for-byte.
//!
//! Two planner families live here:
//!
//! - [`Planner`] builds the company/contact/deal association graph
//!   (counts, 1:1 and N:M cohorts, minimum deal counts).
//! - [`customers`] generates the customer-side records posted to the
//!   remote CRM (shaped customers, per-customer contact cohorts, and
//!   opportunities over server-assigned customer ids).

pub mod customers;
mod error;
mod plan;
mod planner;

pub use customers::CustomerPlan;
pub use error::PlanError;
pub use plan::GenerationPlan;
pub use planner::Planner;
