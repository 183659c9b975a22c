//! Entity models and JSON persistence for crm-seed.
//!
//! This crate defines the record types produced by a generation run
//! (companies, contacts, deals, and the customer-side records posted to
//! the remote CRM) together with the `DealStage` pipeline enum and JSON
//! file helpers used to round-trip entity lists between phases.
//!
//! All entities are immutable once created: a generation run only adds
//! records, it never mutates or deletes them. The one exception is the
//! server-assigned identifier on customer-side records, which the remote
//! CRM fills in on create and which is merged back from the batch-create
//! response before the next phase reads the persisted file.

pub mod entities;
pub mod files;
pub mod stage;

pub use entities::{Company, Contact, Customer, CustomerContact, CustomerShape, Deal, Opportunity};
pub use files::{load_json, save_json, FileError};
pub use stage::DealStage;
