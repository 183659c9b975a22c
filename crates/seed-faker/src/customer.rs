//! Customer-side factories for the remote CRM pipeline.

use std::collections::HashSet;

use rand::Rng;
use seed_core::{Customer, CustomerContact};

use crate::pools;
use crate::values;

/// Produces `Customer` records in the three supported shapes, plus the
/// contact people attached to posted customers.
///
/// Company names, websites, emails, and phone numbers are unique across
/// everything this factory produces, shapes included.
#[derive(Debug, Default)]
pub struct CustomerFactory {
    used_company_names: HashSet<String>,
    used_websites: HashSet<String>,
    used_emails: HashSet<String>,
    used_phones: HashSet<String>,
}

impl CustomerFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// A company-only customer (company name + website).
    pub fn create_company<R: Rng>(&mut self, rng: &mut R) -> Customer {
        let name = self.unique_company_name(rng);
        let website = self.unique_website(rng, &name);
        Customer {
            company_name: Some(name),
            website_url: Some(website),
            ..Default::default()
        }
    }

    /// A person-only customer (name, email, phone).
    pub fn create_person<R: Rng>(&mut self, rng: &mut R) -> Customer {
        let (first, last, email, phone) = self.person_fields(rng);
        Customer {
            first_name: Some(first),
            last_name: Some(last),
            primary_email: Some(email),
            primary_phone: Some(phone),
            ..Default::default()
        }
    }

    /// A customer with both field groups populated.
    pub fn create_company_person<R: Rng>(&mut self, rng: &mut R) -> Customer {
        let name = self.unique_company_name(rng);
        let website = self.unique_website(rng, &name);
        let (first, last, email, phone) = self.person_fields(rng);
        Customer {
            company_name: Some(name),
            website_url: Some(website),
            first_name: Some(first),
            last_name: Some(last),
            primary_email: Some(email),
            primary_phone: Some(phone),
            ..Default::default()
        }
    }

    /// A contact person attached to the given posted customer.
    pub fn create_customer_contact<R: Rng>(
        &mut self,
        rng: &mut R,
        customer_id: &str,
    ) -> CustomerContact {
        let (first, last, email, phone) = self.person_fields(rng);
        CustomerContact {
            contact_id: None,
            customer_id: customer_id.to_string(),
            first_name: first,
            last_name: last,
            primary_email: email,
            primary_phone: phone,
        }
    }

    /// An opportunity name like `Sleek Granite Keyboard`.
    pub fn opportunity_name<R: Rng>(&mut self, rng: &mut R) -> String {
        format!(
            "{} {} {}",
            values::pick(rng, pools::PRODUCT_ADJECTIVES),
            values::pick(rng, pools::PRODUCT_MATERIALS),
            values::pick(rng, pools::PRODUCT_NOUNS)
        )
    }

    fn person_fields<R: Rng>(&mut self, rng: &mut R) -> (String, String, String, String) {
        let first = values::pick(rng, pools::FIRST_NAMES).to_string();
        let last = values::pick(rng, pools::LAST_NAMES).to_string();
        let email = loop {
            let candidate = format!(
                "{}.{}{}@{}",
                first.to_lowercase(),
                last.to_lowercase(),
                values::digits(rng, 2),
                values::pick(rng, pools::FREE_MAIL_HOSTS)
            );
            if self.used_emails.insert(candidate.clone()) {
                break candidate;
            }
        };
        let phone = loop {
            let candidate = values::phone_number(rng);
            if self.used_phones.insert(candidate.clone()) {
                break candidate;
            }
        };
        (first, last, email, phone)
    }

    fn unique_company_name<R: Rng>(&mut self, rng: &mut R) -> String {
        loop {
            let name = format!(
                "{} {} {}",
                values::pick(rng, pools::COMPANY_STEMS),
                values::pick(rng, pools::COMPANY_KINDS),
                values::pick(rng, pools::COMPANY_SUFFIXES)
            );
            if self.used_company_names.insert(name.clone()) {
                return name;
            }
        }
    }

    fn unique_website<R: Rng>(&mut self, rng: &mut R, name: &str) -> String {
        let label = name
            .split_whitespace()
            .next()
            .unwrap_or("company")
            .to_lowercase();
        loop {
            let website = format!(
                "https://{}{}.{}",
                label,
                values::digits(rng, 3),
                values::pick(rng, pools::TLDS)
            );
            if self.used_websites.insert(website.clone()) {
                return website;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use seed_core::CustomerShape;
    use std::collections::HashSet;

    #[test]
    fn test_shapes_classify() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut factory = CustomerFactory::new();

        assert_eq!(
            factory.create_company(&mut rng).shape(),
            Some(CustomerShape::Company)
        );
        assert_eq!(
            factory.create_person(&mut rng).shape(),
            Some(CustomerShape::Person)
        );
        assert_eq!(
            factory.create_company_person(&mut rng).shape(),
            Some(CustomerShape::CompanyPerson)
        );
    }

    #[test]
    fn test_uniqueness_spans_shapes() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut factory = CustomerFactory::new();

        let mut emails = HashSet::new();
        let mut names = HashSet::new();
        for _ in 0..200 {
            let person = factory.create_person(&mut rng);
            assert!(emails.insert(person.primary_email.unwrap()));

            let both = factory.create_company_person(&mut rng);
            assert!(emails.insert(both.primary_email.unwrap()));
            assert!(names.insert(both.company_name.unwrap()));

            let company = factory.create_company(&mut rng);
            assert!(names.insert(company.company_name.unwrap()));
        }
    }
}
