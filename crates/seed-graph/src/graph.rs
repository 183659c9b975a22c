//! The association graph.

use std::collections::{BTreeSet, HashMap};

use seed_core::{Company, Contact, Deal};
use uuid::Uuid;

use crate::error::GraphError;

/// Tracks companies, contacts, deals, and the associations between them.
///
/// Entities live in insertion-order arenas; `HashMap<Uuid, u32>` maps
/// opaque ids to dense arena indices once per call, and all internal
/// bookkeeping works on the dense indices. Company↔contact adjacency is
/// a pair of mirrored `BTreeSet<u32>` per entity; deal ownership is a
/// pair of one-to-many index lists derived at `add_deal` time.
#[derive(Debug, Default)]
pub struct AssociationGraph {
    companies: Vec<Company>,
    contacts: Vec<Contact>,
    deals: Vec<Deal>,

    company_ids: HashMap<Uuid, u32>,
    contact_ids: HashMap<Uuid, u32>,
    deal_ids: HashMap<Uuid, u32>,

    // Mirrored many-to-many adjacency, indexed by arena position.
    company_contacts: Vec<BTreeSet<u32>>,
    contact_companies: Vec<BTreeSet<u32>>,

    // One-to-many deal views, in deal insertion order per owner.
    company_deals: Vec<Vec<u32>>,
    contact_deals: Vec<Vec<u32>>,
}

impl AssociationGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a company, seeding its (empty) adjacency and deal sets.
    pub fn add_company(&mut self, company: Company) -> Result<(), GraphError> {
        if self.company_ids.contains_key(&company.id) {
            return Err(GraphError::DuplicateId(company.id));
        }

        let index = self.companies.len() as u32;
        self.company_ids.insert(company.id, index);
        self.companies.push(company);
        self.company_contacts.push(BTreeSet::new());
        self.company_deals.push(Vec::new());
        Ok(())
    }

    /// Register a contact, seeding its (empty) adjacency and deal sets.
    pub fn add_contact(&mut self, contact: Contact) -> Result<(), GraphError> {
        if self.contact_ids.contains_key(&contact.id) {
            return Err(GraphError::DuplicateId(contact.id));
        }

        let index = self.contacts.len() as u32;
        self.contact_ids.insert(contact.id, index);
        self.contacts.push(contact);
        self.contact_companies.push(BTreeSet::new());
        self.contact_deals.push(Vec::new());
        Ok(())
    }

    /// Register a deal and index it under its owning company and contact.
    ///
    /// Both owners must already be registered; nothing is indexed when
    /// validation fails.
    pub fn add_deal(&mut self, deal: Deal) -> Result<(), GraphError> {
        // Validate everything before touching any index.
        let company_index = self.company_index(deal.company_id)?;
        let contact_index = self.contact_index(deal.contact_id)?;
        if self.deal_ids.contains_key(&deal.id) {
            return Err(GraphError::DuplicateId(deal.id));
        }

        let index = self.deals.len() as u32;
        self.deal_ids.insert(deal.id, index);
        self.deals.push(deal);
        self.company_deals[company_index as usize].push(index);
        self.contact_deals[contact_index as usize].push(index);
        Ok(())
    }

    /// Associate a contact with a company.
    ///
    /// Idempotent: associating an existing pair is a no-op, not an error.
    pub fn associate(&mut self, contact_id: Uuid, company_id: Uuid) -> Result<(), GraphError> {
        let contact_index = self.contact_index(contact_id)?;
        let company_index = self.company_index(company_id)?;

        self.company_contacts[company_index as usize].insert(contact_index);
        self.contact_companies[contact_index as usize].insert(company_index);
        Ok(())
    }

    /// Whether the contact and company are currently associated.
    pub fn is_associated(&self, contact_id: Uuid, company_id: Uuid) -> Result<bool, GraphError> {
        let contact_index = self.contact_index(contact_id)?;
        let company_index = self.company_index(company_id)?;
        Ok(self.contact_companies[contact_index as usize].contains(&company_index))
    }

    /// Look up a registered company.
    pub fn company(&self, id: Uuid) -> Result<&Company, GraphError> {
        Ok(&self.companies[self.company_index(id)? as usize])
    }

    /// Look up a registered contact.
    pub fn contact(&self, id: Uuid) -> Result<&Contact, GraphError> {
        Ok(&self.contacts[self.contact_index(id)? as usize])
    }

    /// Contacts associated with a company, in contact registration order.
    pub fn contacts_of(&self, company_id: Uuid) -> Result<Vec<&Contact>, GraphError> {
        let company_index = self.company_index(company_id)?;
        Ok(self.company_contacts[company_index as usize]
            .iter()
            .map(|&i| &self.contacts[i as usize])
            .collect())
    }

    /// Companies associated with a contact, in company registration order.
    pub fn companies_of(&self, contact_id: Uuid) -> Result<Vec<&Company>, GraphError> {
        let contact_index = self.contact_index(contact_id)?;
        Ok(self.contact_companies[contact_index as usize]
            .iter()
            .map(|&i| &self.companies[i as usize])
            .collect())
    }

    /// Deals owned by a company, in deal registration order.
    pub fn deals_of_company(&self, company_id: Uuid) -> Result<Vec<&Deal>, GraphError> {
        let company_index = self.company_index(company_id)?;
        Ok(self.company_deals[company_index as usize]
            .iter()
            .map(|&i| &self.deals[i as usize])
            .collect())
    }

    /// Deals owned by a contact, in deal registration order.
    pub fn deals_of_contact(&self, contact_id: Uuid) -> Result<Vec<&Deal>, GraphError> {
        let contact_index = self.contact_index(contact_id)?;
        Ok(self.contact_deals[contact_index as usize]
            .iter()
            .map(|&i| &self.deals[i as usize])
            .collect())
    }

    /// Number of contacts associated with a company.
    pub fn contact_count_of_company(&self, company_id: Uuid) -> Result<usize, GraphError> {
        Ok(self.company_contacts[self.company_index(company_id)? as usize].len())
    }

    /// Number of companies associated with a contact.
    pub fn company_count_of_contact(&self, contact_id: Uuid) -> Result<usize, GraphError> {
        Ok(self.contact_companies[self.contact_index(contact_id)? as usize].len())
    }

    /// Number of deals owned by a company.
    pub fn deal_count_of_company(&self, company_id: Uuid) -> Result<usize, GraphError> {
        Ok(self.company_deals[self.company_index(company_id)? as usize].len())
    }

    /// Number of deals owned by a contact.
    pub fn deal_count_of_contact(&self, contact_id: Uuid) -> Result<usize, GraphError> {
        Ok(self.contact_deals[self.contact_index(contact_id)? as usize].len())
    }

    /// All companies, in insertion order.
    pub fn all_companies(&self) -> &[Company] {
        &self.companies
    }

    /// All contacts, in insertion order.
    pub fn all_contacts(&self) -> &[Contact] {
        &self.contacts
    }

    /// All deals, in insertion order.
    pub fn all_deals(&self) -> &[Deal] {
        &self.deals
    }

    fn company_index(&self, id: Uuid) -> Result<u32, GraphError> {
        self.company_ids
            .get(&id)
            .copied()
            .ok_or(GraphError::UnknownReference(id))
    }

    fn contact_index(&self, id: Uuid) -> Result<u32, GraphError> {
        self.contact_ids
            .get(&id)
            .copied()
            .ok_or(GraphError::UnknownReference(id))
    }
}
