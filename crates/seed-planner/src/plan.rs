//! Plan parameters.

use crate::error::PlanError;

/// Target counts and ratios for one graph generation run.
///
/// All ratios are fractions in `[0.0, 1.0]`; nothing is hardcoded in
/// the planner itself.
#[derive(Debug, Clone)]
pub struct GenerationPlan {
    /// Number of companies to create.
    pub company_count: usize,
    /// Number of contacts to create.
    pub contact_count: usize,
    /// Fraction of contacts paired 1:1 with a company, with an email
    /// derived from that company's domain.
    pub one_company_fraction: f64,
    /// Fraction of contacts in the many-to-many cohort, which gains
    /// 1-3 additional random company associations.
    pub multi_company_fraction: f64,
    /// Minimum total number of deals; the top-up pass runs until this
    /// is reached.
    pub min_deal_count: usize,
    /// Fraction of companies (and contacts) in the multiple-deals
    /// cohort, which receives 2-3 deals instead of 1.
    pub multi_deal_fraction: f64,
    /// Fraction of companies visited by the first deal pass.
    pub company_deal_fraction: f64,
}

impl Default for GenerationPlan {
    fn default() -> Self {
        Self {
            company_count: 650,
            contact_count: 2500,
            one_company_fraction: 0.6,
            multi_company_fraction: 0.25,
            min_deal_count: 10_000,
            multi_deal_fraction: 0.3,
            company_deal_fraction: 1.0,
        }
    }
}

impl GenerationPlan {
    /// Check that the plan is satisfiable before any work starts.
    pub fn validate(&self) -> Result<(), PlanError> {
        for (name, value) in [
            ("one_company_fraction", self.one_company_fraction),
            ("multi_company_fraction", self.multi_company_fraction),
            ("multi_deal_fraction", self.multi_deal_fraction),
            ("company_deal_fraction", self.company_deal_fraction),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(PlanError::Precondition(format!(
                    "{name} must be within [0.0, 1.0], got {value}"
                )));
            }
        }

        if self.min_deal_count > 0 && (self.company_count == 0 || self.contact_count == 0) {
            return Err(PlanError::Precondition(format!(
                "cannot generate {} deals from {} companies and {} contacts",
                self.min_deal_count, self.company_count, self.contact_count
            )));
        }

        Ok(())
    }

    /// How many contacts fall in the 1:1 cohort.
    pub(crate) fn paired_contact_count(&self) -> usize {
        fraction_of(self.contact_count, self.one_company_fraction)
    }
}

pub(crate) fn fraction_of(count: usize, fraction: f64) -> usize {
    ((count as f64 * fraction).round() as usize).min(count)
}
