//! Seeded fake-entity factories.
//!
//! Factories synthesize plausible field values (names, addresses,
//! emails, phone numbers, monetary amounts, dates) from fixed word
//! pools, drawing every random choice from a caller-supplied `Rng`.
//! With a seeded RNG an entire run is reproducible, including entity
//! ids: UUIDs are built from RNG bytes rather than OS randomness.
//!
//! Designated fields (email, phone, company name, domain/website) are
//! unique within a factory's lifetime, enforced by regenerate-on-
//! collision rejection sampling. The retry loop is unbounded, matching
//! the uniqueness contract; the pools are combined with random numeric
//! suffixes so the value space is orders of magnitude larger than any
//! plausible target count and collisions stay rare.

mod company;
mod contact;
mod customer;
mod deal;
mod pools;
mod values;

pub use company::CompanyFactory;
pub use contact::ContactFactory;
pub use customer::CustomerFactory;
pub use deal::build_deal;
pub use values::random_uuid;
