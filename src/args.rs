//! CLI argument definitions.

use clap::Args;
use seed_export::ExportKind;
use std::path::PathBuf;

pub fn parse_export_kind(s: &str) -> Result<ExportKind, String> {
    s.parse()
}

/// Arguments for `generate graph`.
#[derive(Args, Clone, Debug)]
pub struct GraphArgs {
    /// Number of companies to generate
    #[arg(long, default_value_t = 650)]
    pub companies: usize,

    /// Number of contacts to generate
    #[arg(long, default_value_t = 2500)]
    pub contacts: usize,

    /// Fraction of contacts paired 1:1 with a company (domain-derived email)
    #[arg(long, default_value_t = 0.6)]
    pub one_company_fraction: f64,

    /// Fraction of contacts associated with multiple companies
    #[arg(long, default_value_t = 0.25)]
    pub multi_company_fraction: f64,

    /// Minimum total number of deals
    #[arg(long, default_value_t = 10_000)]
    pub min_deals: usize,

    /// Fraction of companies/contacts holding more than one deal
    #[arg(long, default_value_t = 0.3)]
    pub multi_deal_fraction: f64,

    /// Fraction of companies visited by the first deal pass
    #[arg(long, default_value_t = 1.0)]
    pub company_deal_fraction: f64,

    /// CSV export kinds to write (comma-separated)
    #[arg(long, value_delimiter = ',', default_value = "full", value_parser = parse_export_kind)]
    pub kinds: Vec<ExportKind>,

    #[command(flatten)]
    pub common: CommonGenerateArgs,
}

/// Arguments for `generate customers`.
#[derive(Args, Clone, Debug)]
pub struct CustomersArgs {
    /// Number of company-only customers
    #[arg(long, default_value_t = 40)]
    pub company_customers: usize,

    /// Number of person-only customers
    #[arg(long, default_value_t = 40)]
    pub person_customers: usize,

    /// Number of customers with both company and person fields
    #[arg(long, default_value_t = 20)]
    pub company_person_customers: usize,

    #[command(flatten)]
    pub common: CommonGenerateArgs,
}

/// Arguments for `generate contacts`.
#[derive(Args, Clone, Debug)]
pub struct ContactsArgs {
    /// Customers JSON file with server-assigned ids (from `post customers`)
    #[arg(long, value_name = "PATH")]
    pub customers_file: PathBuf,

    #[command(flatten)]
    pub common: CommonGenerateArgs,
}

/// Arguments for `generate opportunities`.
#[derive(Args, Clone, Debug)]
pub struct OpportunitiesArgs {
    /// Customers JSON file with server-assigned ids (from `post customers`)
    #[arg(long, value_name = "PATH")]
    pub customers_file: PathBuf,

    /// Number of opportunities to generate
    #[arg(long, default_value_t = 100)]
    pub count: usize,

    #[command(flatten)]
    pub common: CommonGenerateArgs,
}

/// Flags shared by every generate command.
#[derive(Args, Clone, Debug)]
pub struct CommonGenerateArgs {
    /// Output directory for generated files
    #[arg(long, short = 'o', default_value = "output")]
    pub output_dir: PathBuf,

    /// Random seed for deterministic generation
    #[arg(long, default_value_t = 42)]
    pub seed: u64,
}

/// Arguments for the `post` and `delete` commands.
#[derive(Args, Clone, Debug)]
pub struct RemoteArgs {
    /// JSON file holding the entity batch
    #[arg(long, value_name = "PATH")]
    pub file: PathBuf,

    /// Base URL of the remote CRM API
    #[arg(long, env = "CRM_SEED_ENDPOINT")]
    pub endpoint: String,
}
