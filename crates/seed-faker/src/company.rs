//! Company factory.

use std::collections::HashSet;

use rand::Rng;
use seed_core::Company;

use crate::pools;
use crate::values;

/// Produces companies with unique display names and unique domains.
///
/// Uniqueness is enforced with a regenerate-until-fresh loop over the
/// used-value sets, scoped to this factory instance (one generation run).
#[derive(Debug, Default)]
pub struct CompanyFactory {
    used_names: HashSet<String>,
    used_domains: HashSet<String>,
}

impl CompanyFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create<R: Rng>(&mut self, rng: &mut R) -> Company {
        let name = self.unique_name(rng);
        let domain = self.unique_domain(rng, &name);

        Company {
            id: values::random_uuid(rng),
            domain,
            name,
            street: values::street_address(rng),
            city: values::city(rng),
            region: values::region(rng),
            postal_code: values::postal_code(rng),
            phone: values::phone_number(rng),
        }
    }

    fn unique_name<R: Rng>(&mut self, rng: &mut R) -> String {
        loop {
            let name = format!(
                "{} {} {}",
                values::pick(rng, pools::COMPANY_STEMS),
                values::pick(rng, pools::COMPANY_KINDS),
                values::pick(rng, pools::COMPANY_SUFFIXES)
            );
            if self.used_names.insert(name.clone()) {
                return name;
            }
        }
    }

    fn unique_domain<R: Rng>(&mut self, rng: &mut R, name: &str) -> String {
        // Base label from the first word of the company name, suffixed
        // with random digits on collision so the space never exhausts.
        let label = name
            .split_whitespace()
            .next()
            .unwrap_or("company")
            .to_lowercase();
        loop {
            let domain = format!(
                "{}{}.{}",
                label,
                values::digits(rng, 3),
                values::pick(rng, pools::TLDS)
            );
            if self.used_domains.insert(domain.clone()) {
                return domain;
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
    fn test_names_and_domains_unique() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut factory = CompanyFactory::new();

        let companies: Vec<_> = (0..500).map(|_| factory.create(&mut rng)).collect();

        let names: HashSet<_> = companies.iter().map(|c| c.name.as_str()).collect();
        let domains: HashSet<_> = companies.iter().map(|c| c.domain.as_str()).collect();
        assert_eq!(names.len(), companies.len());
        assert_eq!(domains.len(), companies.len());
    }

    #[test]
    fn test_deterministic_under_fixed_seed() {
        let mut a = CompanyFactory::new();
        let mut b = CompanyFactory::new();
        let mut rng_a = StdRng::seed_from_u64(7);
        let mut rng_b = StdRng::seed_from_u64(7);

        for _ in 0..20 {
            assert_eq!(a.create(&mut rng_a), b.create(&mut rng_b));
        }
    }
}
