use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::config::{EligibilityConfig, SlabRule};

/// Why a request was turned down, phrased for the applicant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RejectionReason {
    ExistingInstallmentLoad {
        current_load: Decimal,
        ceiling: Decimal,
    },
    ProjectedInstallmentLoad {
        projected_load: Decimal,
        ceiling: Decimal,
    },
    InterestRateBelowSlab {
        credit_score: u8,
        minimum_rate: Decimal,
        corrected_rate: Decimal,
    },
    CreditScoreTooLow {
        credit_score: u8,
    },
}

impl RejectionReason {
    pub fn summary(&self) -> String {
        match self {
            RejectionReason::ExistingInstallmentLoad {
                current_load,
                ceiling,
            } => format!(
                "existing monthly installments {current_load} already exceed the ceiling of {ceiling}"
            ),
            RejectionReason::ProjectedInstallmentLoad {
                projected_load,
                ceiling,
            } => format!(
                "monthly installments including this loan ({projected_load}) would exceed the ceiling of {ceiling}"
            ),
            RejectionReason::InterestRateBelowSlab {
                credit_score,
                minimum_rate,
                corrected_rate,
            } => format!(
                "credit score {credit_score} requires an interest rate above {minimum_rate}%; retry at {corrected_rate}%"
            ),
            RejectionReason::CreditScoreTooLow { credit_score } => {
                format!("credit score {credit_score} is too low for any loan")
            }
        }
    }

    /// Rate the applicant may retry at, when the rejection came with one.
    pub fn corrected_rate(&self) -> Option<Decimal> {
        match self {
            RejectionReason::InterestRateBelowSlab { corrected_rate, .. } => Some(*corrected_rate),
            _ => None,
        }
    }
}

/// Outcome of placing a credit score and requested rate into the slab table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SlabOutcome {
    Approved,
    Rejected(RejectionReason),
}

pub(crate) fn apply_rate_slabs(
    config: &EligibilityConfig,
    credit_score: u8,
    requested_rate: Decimal,
) -> SlabOutcome {
    let slab = config
        .rate_slabs
        .iter()
        .find(|slab| credit_score > slab.above_score);

    match slab.map(|slab| &slab.rule) {
        Some(SlabRule::Unconditional) => SlabOutcome::Approved,
        Some(SlabRule::MinimumRate {
            above,
            corrected_rate,
        }) => {
            if requested_rate > *above {
                SlabOutcome::Approved
            } else {
                SlabOutcome::Rejected(RejectionReason::InterestRateBelowSlab {
                    credit_score,
                    minimum_rate: *above,
                    corrected_rate: *corrected_rate,
                })
            }
        }
        None => SlabOutcome::Rejected(RejectionReason::CreditScoreTooLow { credit_score }),
    }
}
