//! Graph generation planner.

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use seed_faker::{build_deal, CompanyFactory, ContactFactory};
use seed_graph::AssociationGraph;
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::PlanError;
use crate::plan::GenerationPlan;

/// Executes a [`GenerationPlan`] against fresh factories and a fresh
/// association graph.
///
/// The planner owns a seeded RNG; every random decision (field values,
/// cohort membership, pair picks, entity ids) draws from it, so two
/// planners with the same plan, seed, and reference instant produce
/// identical graphs.
pub struct Planner {
    plan: GenerationPlan,
    rng: StdRng,
    reference_time: DateTime<Utc>,
}

impl Planner {
    /// Create a planner for the given plan and seed.
    ///
    /// The close-date window anchors to the wall clock at construction;
    /// use [`with_reference_time`](Self::with_reference_time) to pin it.
    pub fn new(plan: GenerationPlan, seed: u64) -> Self {
        Self {
            plan,
            rng: StdRng::seed_from_u64(seed),
            reference_time: Utc::now(),
        }
    }

    /// Pin the instant deal close-date windows are computed around.
    pub fn with_reference_time(mut self, reference_time: DateTime<Utc>) -> Self {
        self.reference_time = reference_time;
        self
    }

    /// Run the plan and return the populated graph.
    ///
    /// Fails fast with [`PlanError::Precondition`] before any entity is
    /// created when the plan cannot be satisfied.
    pub fn generate(&mut self) -> Result<AssociationGraph, PlanError> {
        self.plan.validate()?;

        let mut graph = AssociationGraph::new();
        let mut companies = CompanyFactory::new();
        let mut contacts = ContactFactory::new();

        info!(
            companies = self.plan.company_count,
            contacts = self.plan.contact_count,
            min_deals = self.plan.min_deal_count,
            "generating association graph"
        );

        // Step 1: companies.
        for _ in 0..self.plan.company_count {
            graph.add_company(companies.create(&mut self.rng))?;
        }
        let company_ids: Vec<Uuid> = graph.all_companies().iter().map(|c| c.id).collect();

        // Step 2: contacts. The first `paired_count` contacts get an
        // email derived from their paired company's domain; the i-th
        // contact pairs with the (i mod company_count)-th company.
        let paired_count = self.plan.paired_contact_count();
        let mut pairs: Vec<(Uuid, Uuid)> = Vec::with_capacity(paired_count);
        for i in 0..self.plan.contact_count {
            let contact = if i < paired_count && !company_ids.is_empty() {
                let company = &graph.all_companies()[i % company_ids.len()];
                let (company_id, domain) = (company.id, company.domain.clone());
                let contact = contacts.create_with_domain(&mut self.rng, &domain);
                pairs.push((contact.id, company_id));
                contact
            } else {
                contacts.create(&mut self.rng)
            };
            graph.add_contact(contact)?;
        }

        // Step 3: associations. Paired contacts first, then the
        // many-to-many cohort gains 1-3 extra random companies
        // (duplicates are no-op associates).
        for (contact_id, company_id) in &pairs {
            graph.associate(*contact_id, *company_id)?;
        }
        let contact_ids: Vec<Uuid> = graph.all_contacts().iter().map(|c| c.id).collect();
        if !company_ids.is_empty() {
            for contact_id in &contact_ids {
                if self.rng.random_bool(self.plan.multi_company_fraction) {
                    let extra = self.rng.random_range(1..=3);
                    for _ in 0..extra {
                        let company_id = company_ids[self.rng.random_range(0..company_ids.len())];
                        graph.associate(*contact_id, company_id)?;
                    }
                }
            }
        }

        // Step 4: deals, three passes.
        if !company_ids.is_empty() && !contact_ids.is_empty() {
            self.generate_deals(&mut graph, &company_ids, &contact_ids)?;
        }

        self.log_statistics(&graph)?;
        Ok(graph)
    }

    fn generate_deals(
        &mut self,
        graph: &mut AssociationGraph,
        company_ids: &[Uuid],
        contact_ids: &[Uuid],
    ) -> Result<(), PlanError> {
        let mut deal_index = 0usize;

        // Pass (a): walk companies; each selected company gets one deal
        // with one of its contacts (associating a random contact first
        // if it had none), or 2-3 deals in the multiple-deals cohort.
        for company_id in company_ids {
            if !self.rng.random_bool(self.plan.company_deal_fraction) {
                continue;
            }

            let associated: Vec<Uuid> = graph
                .contacts_of(*company_id)?
                .iter()
                .map(|c| c.id)
                .collect();
            let contact_id = if associated.is_empty() {
                let contact_id = contact_ids[self.rng.random_range(0..contact_ids.len())];
                graph.associate(contact_id, *company_id)?;
                contact_id
            } else {
                associated[self.rng.random_range(0..associated.len())]
            };

            let deals = if self.rng.random_bool(self.plan.multi_deal_fraction) {
                self.rng.random_range(2..=3)
            } else {
                1
            };
            for _ in 0..deals {
                self.create_deal(graph, &mut deal_index, *company_id, contact_id)?;
            }
        }
        debug!(deals = graph.all_deals().len(), "company deal pass done");

        // Pass (b): symmetric pass over contacts still without a deal.
        for contact_id in contact_ids {
            if graph.deal_count_of_contact(*contact_id)? > 0 {
                continue;
            }

            let associated: Vec<Uuid> = graph
                .companies_of(*contact_id)?
                .iter()
                .map(|c| c.id)
                .collect();
            let company_id = if associated.is_empty() {
                let company_id = company_ids[self.rng.random_range(0..company_ids.len())];
                graph.associate(*contact_id, company_id)?;
                company_id
            } else {
                associated[self.rng.random_range(0..associated.len())]
            };

            let deals = if self.rng.random_bool(self.plan.multi_deal_fraction) {
                self.rng.random_range(2..=3)
            } else {
                1
            };
            for _ in 0..deals {
                self.create_deal(graph, &mut deal_index, company_id, *contact_id)?;
            }
        }
        debug!(deals = graph.all_deals().len(), "contact deal pass done");

        // Pass (c): top up with uniformly random pairs until the
        // minimum is reached.
        while graph.all_deals().len() < self.plan.min_deal_count {
            let company_id = company_ids[self.rng.random_range(0..company_ids.len())];
            let contact_id = contact_ids[self.rng.random_range(0..contact_ids.len())];
            self.create_deal(graph, &mut deal_index, company_id, contact_id)?;
        }
        debug!(deals = graph.all_deals().len(), "top-up pass done");

        Ok(())
    }

    /// Create one deal, auto-creating the company-contact association
    /// when missing so the ownership invariant always holds.
    fn create_deal(
        &mut self,
        graph: &mut AssociationGraph,
        deal_index: &mut usize,
        company_id: Uuid,
        contact_id: Uuid,
    ) -> Result<(), PlanError> {
        graph.associate(contact_id, company_id)?;
        let deal = build_deal(
            &mut self.rng,
            *deal_index,
            company_id,
            contact_id,
            self.reference_time,
        );
        graph.add_deal(deal)?;
        *deal_index += 1;
        Ok(())
    }

    fn log_statistics(&self, graph: &AssociationGraph) -> Result<(), PlanError> {
        let companies = graph.all_companies();
        let contacts = graph.all_contacts();
        let deals = graph.all_deals();

        info!(
            companies = companies.len(),
            contacts = contacts.len(),
            deals = deals.len(),
            "generation complete"
        );

        if companies.is_empty() || contacts.is_empty() {
            return Ok(());
        }

        let mut multi_company = 0usize;
        let mut contact_deals = 0usize;
        for contact in contacts {
            if graph.company_count_of_contact(contact.id)? > 1 {
                multi_company += 1;
            }
            contact_deals += graph.deal_count_of_contact(contact.id)?;
        }

        let mut company_contacts = 0usize;
        let mut company_deals = 0usize;
        for company in companies {
            company_contacts += graph.contact_count_of_company(company.id)?;
            company_deals += graph.deal_count_of_company(company.id)?;
        }

        info!(
            multi_company_contacts = multi_company,
            multi_company_pct =
                format!("{:.1}", multi_company as f64 / contacts.len() as f64 * 100.0),
            avg_contacts_per_company =
                format!("{:.2}", company_contacts as f64 / companies.len() as f64),
            avg_deals_per_company =
                format!("{:.2}", company_deals as f64 / companies.len() as f64),
            avg_deals_per_contact =
                format!("{:.2}", contact_deals as f64 / contacts.len() as f64),
            "distribution statistics"
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_plan() -> GenerationPlan {
        GenerationPlan {
            company_count: 3,
            contact_count: 4,
            one_company_fraction: 0.5,
            multi_company_fraction: 0.5,
            min_deal_count: 20,
            multi_deal_fraction: 0.3,
            company_deal_fraction: 1.0,
        }
    }

    fn reference() -> DateTime<Utc> {
        DateTime::from_timestamp(1_726_000_000, 0).unwrap()
    }

    #[test]
    fn test_min_deal_count_reached() {
        let mut planner = Planner::new(small_plan(), 42).with_reference_time(reference());
        let graph = planner.generate().unwrap();

        assert_eq!(graph.all_companies().len(), 3);
        assert_eq!(graph.all_contacts().len(), 4);
        assert!(graph.all_deals().len() >= 20);
    }

    #[test]
    fn test_every_deal_pair_is_associated() {
        let mut planner = Planner::new(small_plan(), 42).with_reference_time(reference());
        let graph = planner.generate().unwrap();

        for deal in graph.all_deals() {
            assert!(graph.is_associated(deal.contact_id, deal.company_id).unwrap());
        }
    }

    #[test]
    fn test_adjacency_stays_symmetric() {
        let mut planner = Planner::new(
            GenerationPlan {
                company_count: 10,
                contact_count: 25,
                min_deal_count: 60,
                ..small_plan()
            },
            1337,
        )
        .with_reference_time(reference());
        let graph = planner.generate().unwrap();

        for company in graph.all_companies() {
            for contact in graph.contacts_of(company.id).unwrap() {
                let back: Vec<Uuid> = graph
                    .companies_of(contact.id)
                    .unwrap()
                    .iter()
                    .map(|c| c.id)
                    .collect();
                assert!(back.contains(&company.id));
            }
        }
    }

    #[test]
    fn test_paired_contacts_use_company_domains() {
        let plan = GenerationPlan {
            company_count: 3,
            contact_count: 8,
            one_company_fraction: 1.0,
            multi_company_fraction: 0.0,
            min_deal_count: 0,
            ..small_plan()
        };
        let mut planner = Planner::new(plan, 42).with_reference_time(reference());
        let graph = planner.generate().unwrap();

        let companies = graph.all_companies();
        for (i, contact) in graph.all_contacts().iter().enumerate() {
            let paired = &companies[i % companies.len()];
            assert!(contact.email.ends_with(&paired.domain));
            assert!(graph.is_associated(contact.id, paired.id).unwrap());
        }
    }

    #[test]
    fn test_precondition_fails_before_any_work() {
        let plan = GenerationPlan {
            company_count: 0,
            contact_count: 4,
            min_deal_count: 20,
            ..small_plan()
        };
        let mut planner = Planner::new(plan, 42);
        assert!(matches!(
            planner.generate(),
            Err(PlanError::Precondition(_))
        ));
    }

    #[test]
    fn test_same_seed_reproduces_graph() {
        let run = || {
            let mut planner =
                Planner::new(small_plan(), 99).with_reference_time(reference());
            planner.generate().unwrap()
        };
        let (a, b) = (run(), run());

        assert_eq!(a.all_companies(), b.all_companies());
        assert_eq!(a.all_contacts(), b.all_contacts());
        assert_eq!(a.all_deals(), b.all_deals());
    }

    #[test]
    fn test_different_seeds_differ() {
        let run = |seed| {
            let mut planner =
                Planner::new(small_plan(), seed).with_reference_time(reference());
            planner.generate().unwrap()
        };
        assert_ne!(run(1).all_companies(), run(2).all_companies());
    }
}
