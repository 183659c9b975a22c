//! Row projection and CSV export.
//!
//! Projection flattens a populated [`seed_graph::AssociationGraph`]
//! into denormalized rows, in company-then-contact (respectively deal)
//! insertion order; it is a pure read-side transform with no business
//! logic. The CSV writer serializes those rows in the downstream CRM's
//! import format: a header row of human-readable labels with bracketed
//! target-field tags, `dd/MM/yyyy` dates, culture-invariant decimal
//! amounts, and RFC 4180 quoting (provided by the `csv` crate).

mod error;
mod kinds;
mod rows;
mod writer;

pub use error::ExportError;
pub use kinds::ExportKind;
pub use rows::{
    company_contact_pairs, company_deal_pairs, contact_deal_pairs, full_rows, CompanyContactRow,
    CompanyDealRow, ContactDealRow, FullRow,
};
pub use writer::export_csv;
