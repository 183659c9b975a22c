//! Generate / post / delete workflow phases.
//!
//! Each phase reads and writes JSON files so a run can be inspected
//! (and resumed) between steps: generation writes `*.json`, posting
//! writes an id-annotated `*_updated.json` next to the input, and the
//! contact/opportunity phases read the annotated file.

use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::Utc;
use rand::rngs::StdRng;
use rand::SeedableRng;
use seed_client::CrmClient;
use seed_core::{load_json, save_json, Customer, CustomerContact, Opportunity};
use seed_export::export_csv;
use seed_faker::CustomerFactory;
use seed_planner::customers as customer_planner;
use seed_planner::{CustomerPlan, GenerationPlan, Planner};
use tracing::info;

use crate::args::{ContactsArgs, CustomersArgs, GraphArgs, OpportunitiesArgs, RemoteArgs};

/// Run the graph planner and write the requested CSV kinds plus JSON
/// snapshots of every entity list.
pub fn generate_graph(args: &GraphArgs) -> anyhow::Result<()> {
    let plan = GenerationPlan {
        company_count: args.companies,
        contact_count: args.contacts,
        one_company_fraction: args.one_company_fraction,
        multi_company_fraction: args.multi_company_fraction,
        min_deal_count: args.min_deals,
        multi_deal_fraction: args.multi_deal_fraction,
        company_deal_fraction: args.company_deal_fraction,
    };

    let mut planner = Planner::new(plan, args.common.seed);
    let graph = planner.generate().context("graph generation failed")?;

    let out = &args.common.output_dir;
    save_json(&graph.all_companies(), out, "companies.json")?;
    save_json(&graph.all_contacts(), out, "contacts.json")?;
    save_json(&graph.all_deals(), out, "deals.json")?;

    for kind in &args.kinds {
        let path = out.join(kind.file_name());
        export_csv(&graph, *kind, &path)
            .with_context(|| format!("failed to export {}", path.display()))?;
    }

    info!(output_dir = %out.display(), "graph generation complete");
    Ok(())
}

/// Generate shaped customers and persist them for posting.
pub fn generate_customers(args: &CustomersArgs) -> anyhow::Result<PathBuf> {
    let plan = CustomerPlan {
        company_count: args.company_customers,
        person_count: args.person_customers,
        company_person_count: args.company_person_customers,
    };
    let mut rng = StdRng::seed_from_u64(args.common.seed);
    let mut factory = CustomerFactory::new();

    let customers = customer_planner::generate_customers(&plan, &mut factory, &mut rng);
    let path = save_json(&customers, &args.common.output_dir, "customers.json")?;
    info!(path = %path.display(), "customers written");
    Ok(path)
}

/// Generate contact people for already-posted customers.
pub fn generate_contacts(args: &ContactsArgs) -> anyhow::Result<PathBuf> {
    let customers: Vec<Customer> = load_json(&args.customers_file)
        .with_context(|| format!("failed to read {}", args.customers_file.display()))?;

    let mut rng = StdRng::seed_from_u64(args.common.seed);
    let mut factory = CustomerFactory::new();
    let contacts = customer_planner::generate_customer_contacts(&customers, &mut factory, &mut rng)?;

    let path = save_json(&contacts, &args.common.output_dir, "customer_contacts.json")?;
    info!(path = %path.display(), "customer contacts written");
    Ok(path)
}

/// Generate opportunities over already-posted customer ids.
pub fn generate_opportunities(args: &OpportunitiesArgs) -> anyhow::Result<PathBuf> {
    let customers: Vec<Customer> = load_json(&args.customers_file)
        .with_context(|| format!("failed to read {}", args.customers_file.display()))?;

    let mut rng = StdRng::seed_from_u64(args.common.seed);
    let mut factory = CustomerFactory::new();
    let opportunities = customer_planner::generate_opportunities(
        args.count,
        &customers,
        &mut factory,
        &mut rng,
        Utc::now(),
    )?;

    let path = save_json(&opportunities, &args.common.output_dir, "opportunities.json")?;
    info!(path = %path.display(), "opportunities written");
    Ok(path)
}

/// Post a customer batch and write the id-annotated list next to the
/// input file.
pub async fn post_customers(args: &RemoteArgs) -> anyhow::Result<PathBuf> {
    let customers: Vec<Customer> = load_json(&args.file)?;
    let client = CrmClient::new(&args.endpoint);

    let created = client.batch_create_customers(&customers).await?;
    let path = save_updated(&created, &args.file, "customers_updated.json")?;
    info!(path = %path.display(), "id-annotated customers written");
    Ok(path)
}

/// Post a customer-contact batch and persist the annotated list.
pub async fn post_contacts(args: &RemoteArgs) -> anyhow::Result<PathBuf> {
    let contacts: Vec<CustomerContact> = load_json(&args.file)?;
    let client = CrmClient::new(&args.endpoint);

    let created = client.batch_create_customer_contacts(&contacts).await?;
    let path = save_updated(&created, &args.file, "customer_contacts_updated.json")?;
    info!(path = %path.display(), "id-annotated contacts written");
    Ok(path)
}

/// Post an opportunity batch.
pub async fn post_opportunities(args: &RemoteArgs) -> anyhow::Result<()> {
    let opportunities: Vec<Opportunity> = load_json(&args.file)?;
    let client = CrmClient::new(&args.endpoint);

    client.batch_create_opportunities(&opportunities).await?;
    Ok(())
}

/// Delete every customer in the file that has a server-assigned id.
pub async fn delete_customers(args: &RemoteArgs) -> anyhow::Result<()> {
    let customers: Vec<Customer> = load_json(&args.file)?;
    let client = CrmClient::new(&args.endpoint);

    let mut deleted = 0usize;
    for customer in customers.iter().filter(|c| c.has_server_id()) {
        let id = customer.customer_id.as_deref().unwrap_or_default();
        client.delete_customer(id).await?;
        deleted += 1;
    }
    info!(deleted, "customers deleted");
    Ok(())
}

/// Delete every contact in the file that has a server-assigned id.
pub async fn delete_contacts(args: &RemoteArgs) -> anyhow::Result<()> {
    let contacts: Vec<CustomerContact> = load_json(&args.file)?;
    let client = CrmClient::new(&args.endpoint);

    let mut deleted = 0usize;
    for contact in &contacts {
        let Some(id) = contact.contact_id.as_deref().filter(|id| !id.is_empty()) else {
            continue;
        };
        client.delete_customer_contact(id).await?;
        deleted += 1;
    }
    info!(deleted, "customer contacts deleted");
    Ok(())
}

fn save_updated<T: serde::Serialize>(
    value: &T,
    input: &Path,
    file_name: &str,
) -> anyhow::Result<PathBuf> {
    let dir = input.parent().unwrap_or_else(|| Path::new("."));
    Ok(save_json(value, dir, file_name)?)
}
