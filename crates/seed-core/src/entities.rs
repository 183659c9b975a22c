//! Record types for one generation run.
//!
//! `Company`, `Contact`, and `Deal` are the graph-side entities; a deal
//! owns exactly one company id and one contact id, fixed at creation.
//! `Customer`, `CustomerContact`, and `Opportunity` are the customer-side
//! records posted to the remote CRM in batches.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::stage::DealStage;

/// A company record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub id: Uuid,
    pub domain: String,
    pub name: String,
    pub street: String,
    pub city: String,
    pub region: String,
    pub postal_code: String,
    pub phone: String,
}

/// A contact record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub id: Uuid,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub street: String,
    pub city: String,
    pub region: String,
    pub postal_code: String,
    pub phone: String,
}

/// A deal record.
///
/// `company_id` and `contact_id` are set at creation and immutable; the
/// graph derives its company-deal and contact-deal indices from them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deal {
    pub id: Uuid,
    pub name: String,
    pub stage: DealStage,
    pub pipeline: String,
    pub description: String,
    pub amount: Decimal,
    pub close_date: DateTime<Utc>,
    pub company_id: Uuid,
    pub contact_id: Uuid,
}

/// Which field groups a `Customer` carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomerShape {
    /// Company fields only (company name + website).
    Company,
    /// Person fields only (name, email, phone).
    Person,
    /// Both field groups populated.
    CompanyPerson,
}

/// A customer record for the remote CRM.
///
/// Customers come in three shapes (company-only, person-only, and
/// company+person), modeled as one record with optional field groups
/// rather than an inheritance hierarchy. `customer_id` is assigned by
/// the remote system on create and merged back from the batch-create
/// response; locally generated customers leave it empty.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Customer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_phone: Option<String>,
}

impl Customer {
    /// Classify which field groups are populated.
    ///
    /// Returns `None` when neither group is fully populated, which
    /// indicates a malformed record (e.g. a hand-edited intermediate
    /// file) rather than any shape this crate generates.
    pub fn shape(&self) -> Option<CustomerShape> {
        let company = self.company_name.is_some() && self.website_url.is_some();
        let person = self.first_name.is_some()
            && self.last_name.is_some()
            && self.primary_email.is_some()
            && self.primary_phone.is_some();

        match (company, person) {
            (true, true) => Some(CustomerShape::CompanyPerson),
            (true, false) => Some(CustomerShape::Company),
            (false, true) => Some(CustomerShape::Person),
            (false, false) => None,
        }
    }

    /// Whether the remote system has assigned an id to this customer.
    pub fn has_server_id(&self) -> bool {
        self.customer_id.as_deref().is_some_and(|id| !id.is_empty())
    }
}

/// A contact person attached to one remote customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerContact {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_id: Option<String>,
    pub customer_id: String,
    pub first_name: String,
    pub last_name: String,
    pub primary_email: String,
    pub primary_phone: String,
}

/// A sales opportunity attached to one remote customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Opportunity {
    pub name: String,
    pub customer_id: String,
    pub date: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person_fields(customer: &mut Customer) {
        customer.first_name = Some("Ada".into());
        customer.last_name = Some("Chen".into());
        customer.primary_email = Some("ada.chen@example.com".into());
        customer.primary_phone = Some("555-010-2030".into());
    }

    #[test]
    fn test_customer_shapes() {
        let mut company = Customer {
            company_name: Some("Acme Logistics".into()),
            website_url: Some("https://acme-logistics.example".into()),
            ..Default::default()
        };
        assert_eq!(company.shape(), Some(CustomerShape::Company));

        person_fields(&mut company);
        assert_eq!(company.shape(), Some(CustomerShape::CompanyPerson));

        let mut person = Customer::default();
        person_fields(&mut person);
        assert_eq!(person.shape(), Some(CustomerShape::Person));

        assert_eq!(Customer::default().shape(), None);
    }

    #[test]
    fn test_has_server_id() {
        let mut customer = Customer::default();
        assert!(!customer.has_server_id());

        customer.customer_id = Some(String::new());
        assert!(!customer.has_server_id());

        customer.customer_id = Some("CUST-1042".into());
        assert!(customer.has_server_id());
    }

    #[test]
    fn test_deal_json_round_trip() {
        let deal = Deal {
            id: Uuid::parse_str("550e8400-e29b-41d4-a716-446655440000").unwrap(),
            name: "Refined Steel Table - Outdoors #7".into(),
            stage: DealStage::ContractSent,
            pipeline: "default".into(),
            description: "Quarterly renewal.".into(),
            amount: Decimal::new(4975025, 2),
            close_date: DateTime::from_timestamp(1_726_000_000, 0).unwrap(),
            company_id: Uuid::parse_str("550e8400-e29b-41d4-a716-446655440001").unwrap(),
            contact_id: Uuid::parse_str("550e8400-e29b-41d4-a716-446655440002").unwrap(),
        };

        let json = serde_json::to_string(&deal).unwrap();
        let back: Deal = serde_json::from_str(&json).unwrap();

        // Decimal precision and date value must survive the round trip.
        assert_eq!(back, deal);
        assert_eq!(back.amount.to_string(), "49750.25");
    }

    #[test]
    fn test_customer_skips_empty_fields() {
        let customer = Customer {
            company_name: Some("Acme Logistics".into()),
            website_url: Some("https://acme-logistics.example".into()),
            ..Default::default()
        };

        let json = serde_json::to_string(&customer).unwrap();
        assert!(!json.contains("customer_id"));
        assert!(!json.contains("first_name"));
    }
}
