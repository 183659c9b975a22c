//! Pure graph-to-row projections.
//!
//! Every function walks the graph in insertion order (companies, then
//! each company's contacts or deals; deals for the full rows) and only
//! ever emits entities that are registered in the graph, so no row can
//! reference a pair absent from the adjacency sets.

use seed_core::{Company, Contact, Deal};
use seed_graph::{AssociationGraph, GraphError};

/// One associated (company, contact) pair.
#[derive(Debug, Clone, Copy)]
pub struct CompanyContactRow<'a> {
    pub company: &'a Company,
    pub contact: &'a Contact,
}

/// One (company, deal) ownership pair.
#[derive(Debug, Clone, Copy)]
pub struct CompanyDealRow<'a> {
    pub company: &'a Company,
    pub deal: &'a Deal,
}

/// One (contact, deal) ownership pair.
#[derive(Debug, Clone, Copy)]
pub struct ContactDealRow<'a> {
    pub contact: &'a Contact,
    pub deal: &'a Deal,
}

/// One fully denormalized company+contact+deal triple.
#[derive(Debug, Clone, Copy)]
pub struct FullRow<'a> {
    pub company: &'a Company,
    pub contact: &'a Contact,
    pub deal: &'a Deal,
}

/// All associated pairs, companies in insertion order, contacts in
/// registration order within each company.
pub fn company_contact_pairs(
    graph: &AssociationGraph,
) -> Result<Vec<CompanyContactRow<'_>>, GraphError> {
    let mut rows = Vec::new();
    for company in graph.all_companies() {
        for contact in graph.contacts_of(company.id)? {
            rows.push(CompanyContactRow { company, contact });
        }
    }
    Ok(rows)
}

/// All (company, deal) pairs, companies in insertion order.
pub fn company_deal_pairs(graph: &AssociationGraph) -> Result<Vec<CompanyDealRow<'_>>, GraphError> {
    let mut rows = Vec::new();
    for company in graph.all_companies() {
        for deal in graph.deals_of_company(company.id)? {
            rows.push(CompanyDealRow { company, deal });
        }
    }
    Ok(rows)
}

/// All (contact, deal) pairs, contacts in insertion order.
pub fn contact_deal_pairs(graph: &AssociationGraph) -> Result<Vec<ContactDealRow<'_>>, GraphError> {
    let mut rows = Vec::new();
    for contact in graph.all_contacts() {
        for deal in graph.deals_of_contact(contact.id)? {
            rows.push(ContactDealRow { contact, deal });
        }
    }
    Ok(rows)
}

/// One triple per deal, in deal insertion order.
pub fn full_rows(graph: &AssociationGraph) -> Result<Vec<FullRow<'_>>, GraphError> {
    let mut rows = Vec::new();
    for deal in graph.all_deals() {
        rows.push(FullRow {
            company: graph.company(deal.company_id)?,
            contact: graph.contact(deal.contact_id)?,
            deal,
        });
    }
    Ok(rows)
}
