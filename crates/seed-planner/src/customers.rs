//! Customer-side planners for the remote CRM pipeline.
//!
//! These run after the remote system has assigned customer ids: contact
//! and opportunity generation only considers customers whose
//! `customer_id` came back from a batch-create response.

use chrono::{DateTime, Utc};
use rand::Rng;
use seed_core::{Customer, CustomerContact, CustomerShape, Opportunity};
use seed_faker::CustomerFactory;
use tracing::{debug, info};

use crate::error::PlanError;

/// Target counts per customer shape.
#[derive(Debug, Clone)]
pub struct CustomerPlan {
    /// Company-only customers.
    pub company_count: usize,
    /// Person-only customers.
    pub person_count: usize,
    /// Customers with both field groups.
    pub company_person_count: usize,
}

impl Default for CustomerPlan {
    fn default() -> Self {
        Self {
            company_count: 40,
            person_count: 40,
            company_person_count: 20,
        }
    }
}

/// Generate customers in the three shapes, company-only first, then
/// person-only, then combined.
pub fn generate_customers<R: Rng>(
    plan: &CustomerPlan,
    factory: &mut CustomerFactory,
    rng: &mut R,
) -> Vec<Customer> {
    let total = plan.company_count + plan.person_count + plan.company_person_count;
    let mut customers = Vec::with_capacity(total);

    for _ in 0..plan.company_count {
        customers.push(factory.create_company(rng));
    }
    for _ in 0..plan.person_count {
        customers.push(factory.create_person(rng));
    }
    for _ in 0..plan.company_person_count {
        customers.push(factory.create_company_person(rng));
    }

    info!(
        total = customers.len(),
        companies = plan.company_count,
        persons = plan.person_count,
        company_persons = plan.company_person_count,
        "generated customers"
    );
    customers
}

/// Generate contact people for posted customers.
///
/// Per eligible customer: 5% get no contact, 10% get 2-4 contacts, and
/// the remaining 85% get exactly one. Only company-shaped customers
/// (company-only or company+person) with a server-assigned id are
/// eligible; person-only customers are their own contact person and
/// never receive extra ones. If nothing is eligible the request fails
/// rather than producing an empty file.
pub fn generate_customer_contacts<R: Rng>(
    customers: &[Customer],
    factory: &mut CustomerFactory,
    rng: &mut R,
) -> Result<Vec<CustomerContact>, PlanError> {
    let eligible: Vec<&Customer> = customers
        .iter()
        .filter(|c| c.has_server_id())
        .filter(|c| {
            matches!(
                c.shape(),
                Some(CustomerShape::Company | CustomerShape::CompanyPerson)
            )
        })
        .collect();
    if eligible.is_empty() {
        return Err(PlanError::Precondition(
            "no company-shaped customers with a server-assigned id; post customers first".into(),
        ));
    }

    let mut contacts = Vec::new();
    for customer in &eligible {
        let customer_id = customer.customer_id.as_deref().unwrap_or_default();
        let roll = rng.random_range(0..100);

        if roll < 5 {
            debug!(customer_id, "customer gets no contacts");
            continue;
        }

        let count = if roll < 15 { rng.random_range(2..=4) } else { 1 };
        for _ in 0..count {
            contacts.push(factory.create_customer_contact(rng, customer_id));
        }
    }

    info!(
        contacts = contacts.len(),
        eligible_customers = eligible.len(),
        "generated customer contacts"
    );
    Ok(contacts)
}

/// Generate `count` opportunities, each owned by a random posted
/// customer and stamped with the reference instant.
pub fn generate_opportunities<R: Rng>(
    count: usize,
    customers: &[Customer],
    factory: &mut CustomerFactory,
    rng: &mut R,
    reference: DateTime<Utc>,
) -> Result<Vec<Opportunity>, PlanError> {
    let customer_ids: Vec<&str> = customers
        .iter()
        .filter(|c| c.has_server_id())
        .map(|c| c.customer_id.as_deref().unwrap_or_default())
        .collect();
    if customer_ids.is_empty() {
        return Err(PlanError::Precondition(
            "no customers with a server-assigned id; post customers first".into(),
        ));
    }

    let opportunities: Vec<Opportunity> = (0..count)
        .map(|_| Opportunity {
            name: factory.opportunity_name(rng),
            customer_id: customer_ids[rng.random_range(0..customer_ids.len())].to_string(),
            date: reference,
        })
        .collect();

    info!(opportunities = opportunities.len(), "generated opportunities");
    Ok(opportunities)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashMap;

    fn posted_customers(count: usize) -> Vec<Customer> {
        (0..count)
            .map(|i| Customer {
                customer_id: Some(format!("CUST-{i:04}")),
                company_name: Some(format!("Company {i}")),
                website_url: Some(format!("https://company{i}.example")),
                ..Default::default()
            })
            .collect()
    }

    #[test]
    fn test_customer_plan_counts() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut factory = CustomerFactory::new();
        let plan = CustomerPlan {
            company_count: 5,
            person_count: 3,
            company_person_count: 2,
        };

        let customers = generate_customers(&plan, &mut factory, &mut rng);
        assert_eq!(customers.len(), 10);
        assert!(customers.iter().all(|c| c.shape().is_some()));
        assert!(customers.iter().all(|c| !c.has_server_id()));
    }

    #[test]
    fn test_contacts_follow_cohort_split() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut factory = CustomerFactory::new();
        let customers = posted_customers(500);

        let contacts = generate_customer_contacts(&customers, &mut factory, &mut rng).unwrap();

        let mut per_customer: HashMap<&str, usize> = HashMap::new();
        for contact in &contacts {
            *per_customer.entry(contact.customer_id.as_str()).or_default() += 1;
        }

        for count in per_customer.values() {
            assert!((1..=4).contains(count));
        }

        // Roughly 5% of customers should be absent entirely; allow a
        // generous band since the split is randomized.
        let without = customers.len() - per_customer.len();
        assert!(without > 0 && without < customers.len() / 5);
    }

    #[test]
    fn test_person_only_customers_get_no_contacts() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut factory = CustomerFactory::new();

        let mut customers = posted_customers(10);
        let person_ids: Vec<String> = (0..50).map(|i| format!("PERS-{i:04}")).collect();
        for id in &person_ids {
            customers.push(Customer {
                customer_id: Some(id.clone()),
                first_name: Some("Ada".into()),
                last_name: Some("Chen".into()),
                primary_email: Some(format!("{}@example.com", id.to_lowercase())),
                primary_phone: Some("555-010-2030".into()),
                ..Default::default()
            });
        }

        let contacts = generate_customer_contacts(&customers, &mut factory, &mut rng).unwrap();

        // Person-only customers are their own contact person; only the
        // company-shaped ones receive generated contacts.
        assert!(!contacts.is_empty());
        for contact in &contacts {
            assert!(!person_ids.contains(&contact.customer_id));
        }
    }

    #[test]
    fn test_only_person_customers_fails_eligibility() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut factory = CustomerFactory::new();

        let posted_person = vec![Customer {
            customer_id: Some("PERS-0001".into()),
            first_name: Some("Ada".into()),
            last_name: Some("Chen".into()),
            primary_email: Some("ada.chen@example.com".into()),
            primary_phone: Some("555-010-2030".into()),
            ..Default::default()
        }];
        let result = generate_customer_contacts(&posted_person, &mut factory, &mut rng);
        assert!(matches!(result, Err(PlanError::Precondition(_))));
    }

    #[test]
    fn test_contacts_require_posted_customers() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut factory = CustomerFactory::new();

        let unposted = vec![Customer {
            company_name: Some("Acme Logistics".into()),
            website_url: Some("https://acme.example".into()),
            ..Default::default()
        }];
        let result = generate_customer_contacts(&unposted, &mut factory, &mut rng);
        assert!(matches!(result, Err(PlanError::Precondition(_))));
    }

    #[test]
    fn test_opportunities_reference_posted_ids() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut factory = CustomerFactory::new();
        let customers = posted_customers(8);
        let reference = DateTime::from_timestamp(1_726_000_000, 0).unwrap();

        let opportunities =
            generate_opportunities(30, &customers, &mut factory, &mut rng, reference).unwrap();

        assert_eq!(opportunities.len(), 30);
        for opportunity in &opportunities {
            assert!(customers
                .iter()
                .any(|c| c.customer_id.as_deref() == Some(opportunity.customer_id.as_str())));
            assert_eq!(opportunity.date, reference);
        }
    }
}
