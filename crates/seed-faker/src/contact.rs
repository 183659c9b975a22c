//! Contact factory.

use std::collections::HashSet;

use rand::Rng;
use seed_core::Contact;

use crate::pools;
use crate::values;

/// Produces contacts with unique email addresses and phone numbers.
#[derive(Debug, Default)]
pub struct ContactFactory {
    used_emails: HashSet<String>,
    used_phones: HashSet<String>,
}

impl ContactFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// A contact with an independent random email host.
    pub fn create<R: Rng>(&mut self, rng: &mut R) -> Contact {
        self.build(rng, None)
    }

    /// A contact whose email is derived from the given company domain.
    ///
    /// Used for the 1:1-affinity cohort: the address makes the implicit
    /// pairing visible before the explicit association is added.
    pub fn create_with_domain<R: Rng>(&mut self, rng: &mut R, domain: &str) -> Contact {
        self.build(rng, Some(domain))
    }

    fn build<R: Rng>(&mut self, rng: &mut R, domain: Option<&str>) -> Contact {
        let first_name = values::pick(rng, pools::FIRST_NAMES).to_string();
        let last_name = values::pick(rng, pools::LAST_NAMES).to_string();
        let email = self.unique_email(rng, &first_name, &last_name, domain);
        let phone = self.unique_phone(rng);

        Contact {
            id: values::random_uuid(rng),
            email,
            first_name,
            last_name,
            street: values::street_address(rng),
            city: values::city(rng),
            region: values::region(rng),
            postal_code: values::postal_code(rng),
            phone,
        }
    }

    fn unique_email<R: Rng>(
        &mut self,
        rng: &mut R,
        first: &str,
        last: &str,
        domain: Option<&str>,
    ) -> String {
        loop {
            let host = match domain {
                Some(d) => d.to_string(),
                None => values::pick(rng, pools::FREE_MAIL_HOSTS).to_string(),
            };
            let email = format!(
                "{}.{}{}@{}",
                first.to_lowercase(),
                last.to_lowercase(),
                values::digits(rng, 2),
                host
            );
            if self.used_emails.insert(email.clone()) {
                return email;
            }
        }
    }

    fn unique_phone<R: Rng>(&mut self, rng: &mut R) -> String {
        loop {
            let phone = values::phone_number(rng);
            if self.used_phones.insert(phone.clone()) {
                return phone;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_emails_and_phones_unique() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut factory = ContactFactory::new();

        let contacts: Vec<_> = (0..500).map(|_| factory.create(&mut rng)).collect();

        let emails: HashSet<_> = contacts.iter().map(|c| c.email.as_str()).collect();
        let phones: HashSet<_> = contacts.iter().map(|c| c.phone.as_str()).collect();
        assert_eq!(emails.len(), contacts.len());
        assert_eq!(phones.len(), contacts.len());
    }

    #[test]
    fn test_domain_affine_email() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut factory = ContactFactory::new();

        let contact = factory.create_with_domain(&mut rng, "acme123.example");
        assert!(contact.email.ends_with("@acme123.example"));
    }
}
