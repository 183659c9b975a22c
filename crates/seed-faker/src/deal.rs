//! Deal field synthesis.

use chrono::{DateTime, Utc};
use rand::Rng;
use rust_decimal::Decimal;
use seed_core::{Deal, DealStage};
use uuid::Uuid;

use crate::pools;
use crate::values;

/// Close dates fall in [-30 days, +90 days] around the reference instant.
const CLOSE_DATE_MIN_OFFSET_SECS: i64 = -30 * 86_400;
const CLOSE_DATE_MAX_OFFSET_SECS: i64 = 90 * 86_400;

/// Amounts span 1,000.00 to 500,000.00 with two decimal places.
const AMOUNT_MIN_CENTS: i64 = 100_000;
const AMOUNT_MAX_CENTS: i64 = 50_000_000;

/// Build one deal owned by the given company and contact.
///
/// `index` feeds the human-readable deal name; `reference` anchors the
/// close-date window so runs with a fixed seed and reference instant
/// are fully reproducible.
pub fn build_deal<R: Rng>(
    rng: &mut R,
    index: usize,
    company_id: Uuid,
    contact_id: Uuid,
    reference: DateTime<Utc>,
) -> Deal {
    let name = format!(
        "{} {} {} - {} #{}",
        values::pick(rng, pools::PRODUCT_ADJECTIVES),
        values::pick(rng, pools::PRODUCT_MATERIALS),
        values::pick(rng, pools::PRODUCT_NOUNS),
        values::pick(rng, pools::DEPARTMENTS),
        index + 1
    );
    let description = format!("{} {}.", values::sentence(rng), values::buzz_phrase(rng));
    let stage = DealStage::ALL[rng.random_range(0..DealStage::ALL.len())];
    let amount = Decimal::new(rng.random_range(AMOUNT_MIN_CENTS..=AMOUNT_MAX_CENTS), 2);

    let offset = rng.random_range(CLOSE_DATE_MIN_OFFSET_SECS..=CLOSE_DATE_MAX_OFFSET_SECS);
    let close_date = DateTime::from_timestamp(reference.timestamp() + offset, 0)
        .unwrap_or(reference);

    Deal {
        id: values::random_uuid(rng),
        name,
        stage,
        pipeline: "default".to_string(),
        description,
        amount,
        close_date,
        company_id,
        contact_id,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_deal_fields_in_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        let reference = DateTime::from_timestamp(1_726_000_000, 0).unwrap();
        let company_id = Uuid::new_v4();
        let contact_id = Uuid::new_v4();

        for i in 0..100 {
            let deal = build_deal(&mut rng, i, company_id, contact_id, reference);

            assert_eq!(deal.company_id, company_id);
            assert_eq!(deal.contact_id, contact_id);
            assert!(deal.amount >= Decimal::new(AMOUNT_MIN_CENTS, 2));
            assert!(deal.amount <= Decimal::new(AMOUNT_MAX_CENTS, 2));
            assert_eq!(deal.amount.scale(), 2);

            let offset = deal.close_date.timestamp() - reference.timestamp();
            assert!((CLOSE_DATE_MIN_OFFSET_SECS..=CLOSE_DATE_MAX_OFFSET_SECS).contains(&offset));
            assert!(deal.name.contains(&format!("#{}", i + 1)));
        }
    }

    #[test]
    fn test_deterministic_under_fixed_seed() {
        let reference = DateTime::from_timestamp(1_726_000_000, 0).unwrap();
        let company_id = Uuid::new_v4();
        let contact_id = Uuid::new_v4();

        let mut rng_a = StdRng::seed_from_u64(7);
        let mut rng_b = StdRng::seed_from_u64(7);
        let a = build_deal(&mut rng_a, 0, company_id, contact_id, reference);
        let b = build_deal(&mut rng_b, 0, company_id, contact_id, reference);
        assert_eq!(a, b);
    }
}
