//! Shared RNG-driven value helpers.

use rand::Rng;
use uuid::Uuid;

use crate::pools;

/// Pick one entry from a pool.
pub fn pick<'a, R: Rng>(rng: &mut R, pool: &[&'a str]) -> &'a str {
    pool[rng.random_range(0..pool.len())]
}

/// A string of exactly `count` random decimal digits.
pub fn digits<R: Rng>(rng: &mut R, count: usize) -> String {
    (0..count)
        .map(|_| char::from(b'0' + rng.random_range(0..10u8)))
        .collect()
}

/// A version-4 UUID built from RNG bytes.
///
/// Using the shared RNG instead of OS randomness keeps entity ids
/// reproducible under a fixed seed.
pub fn random_uuid<R: Rng>(rng: &mut R) -> Uuid {
    uuid::Builder::from_random_bytes(rng.random()).into_uuid()
}

/// A `###-###-####` phone number.
pub fn phone_number<R: Rng>(rng: &mut R) -> String {
    format!(
        "{}-{}-{}",
        digits(rng, 3),
        digits(rng, 3),
        digits(rng, 4)
    )
}

/// A street address like `412 Cedar Avenue`.
pub fn street_address<R: Rng>(rng: &mut R) -> String {
    format!(
        "{} {} {}",
        rng.random_range(1..=9999),
        pick(rng, pools::STREET_NAMES),
        pick(rng, pools::STREET_SUFFIXES)
    )
}

pub fn city<R: Rng>(rng: &mut R) -> String {
    pick(rng, pools::CITIES).to_string()
}

pub fn region<R: Rng>(rng: &mut R) -> String {
    pick(rng, pools::REGIONS).to_string()
}

pub fn postal_code<R: Rng>(rng: &mut R) -> String {
    digits(rng, 5)
}

/// A short lorem sentence.
pub fn sentence<R: Rng>(rng: &mut R) -> String {
    let len = rng.random_range(5..=9);
    let mut out = String::new();
    for i in 0..len {
        let word = pick(rng, pools::LOREM_WORDS);
        if i == 0 {
            // Pool words are ASCII, so byte slicing is safe.
            out.push_str(&word[..1].to_ascii_uppercase());
            out.push_str(&word[1..]);
        } else {
            out.push(' ');
            out.push_str(word);
        }
    }
    out.push('.');
    out
}

/// A buzzword phrase like `streamline partner networks`.
pub fn buzz_phrase<R: Rng>(rng: &mut R) -> String {
    format!(
        "{} {}",
        pick(rng, pools::BUZZ_VERBS),
        pick(rng, pools::BUZZ_NOUNS)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_digits_length_and_content() {
        let mut rng = StdRng::seed_from_u64(42);
        let d = digits(&mut rng, 6);
        assert_eq!(d.len(), 6);
        assert!(d.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_phone_format() {
        let mut rng = StdRng::seed_from_u64(42);
        let phone = phone_number(&mut rng);
        assert_eq!(phone.len(), 12);
        assert_eq!(phone.matches('-').count(), 2);
    }

    #[test]
    fn test_random_uuid_deterministic() {
        let mut rng1 = StdRng::seed_from_u64(7);
        let mut rng2 = StdRng::seed_from_u64(7);
        assert_eq!(random_uuid(&mut rng1), random_uuid(&mut rng2));

        let another = random_uuid(&mut rng1);
        assert_eq!(another.get_version_num(), 4);
    }
}
