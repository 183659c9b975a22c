//! Deal pipeline stage enum.

use serde::{Deserialize, Serialize};

/// Pipeline stage of a deal.
///
/// The serialized tokens are the exact values expected by the downstream
/// CRM import and must not be renamed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DealStage {
    #[serde(rename = "appointmentscheduled")]
    AppointmentScheduled,
    #[serde(rename = "qualifiedtobuy")]
    QualifiedToBuy,
    #[serde(rename = "presentationscheduled")]
    PresentationScheduled,
    #[serde(rename = "decisionmakerboughtin")]
    DecisionMakerBoughtIn,
    #[serde(rename = "contractsent")]
    ContractSent,
    #[serde(rename = "closedwon")]
    ClosedWon,
    #[serde(rename = "closedlost")]
    ClosedLost,
}

impl DealStage {
    /// Every stage, in pipeline order. Used for uniform random picks.
    pub const ALL: [DealStage; 7] = [
        DealStage::AppointmentScheduled,
        DealStage::QualifiedToBuy,
        DealStage::PresentationScheduled,
        DealStage::DecisionMakerBoughtIn,
        DealStage::ContractSent,
        DealStage::ClosedWon,
        DealStage::ClosedLost,
    ];

    /// The wire token for this stage.
    pub fn as_str(&self) -> &'static str {
        match self {
            DealStage::AppointmentScheduled => "appointmentscheduled",
            DealStage::QualifiedToBuy => "qualifiedtobuy",
            DealStage::PresentationScheduled => "presentationscheduled",
            DealStage::DecisionMakerBoughtIn => "decisionmakerboughtin",
            DealStage::ContractSent => "contractsent",
            DealStage::ClosedWon => "closedwon",
            DealStage::ClosedLost => "closedlost",
        }
    }
}

impl std::fmt::Display for DealStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_tokens() {
        for stage in DealStage::ALL {
            let json = serde_json::to_string(&stage).unwrap();
            assert_eq!(json, format!("\"{}\"", stage.as_str()));

            let back: DealStage = serde_json::from_str(&json).unwrap();
            assert_eq!(back, stage);
        }
    }

    #[test]
    fn test_stage_count() {
        assert_eq!(DealStage::ALL.len(), 7);
    }
}
