mod config;
mod policy;

pub use config::{EligibilityConfig, RateSlab, SlabRule};
pub use policy::RejectionReason;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::domain::{Customer, LoanRecord, LoanRequest};
use super::emi::monthly_installment;
use super::scoring::CreditScoreEngine;
use policy::{apply_rate_slabs, SlabOutcome};

/// Combines affordability checks with the credit score to approve or reject a request.
#[derive(Debug, Clone, Default)]
pub struct EligibilityEngine {
    config: EligibilityConfig,
    scorer: CreditScoreEngine,
}

impl EligibilityEngine {
    pub fn new(config: EligibilityConfig, scorer: CreditScoreEngine) -> Self {
        Self { config, scorer }
    }

    pub fn config(&self) -> &EligibilityConfig {
        &self.config
    }

    /// Decide `request` for `customer` given every loan they hold, as of `as_of`.
    ///
    /// Affordability rejections report a zero installment and skip scoring. Credit-based
    /// rejections still report the installment for the requested terms.
    pub fn decide(
        &self,
        customer: &Customer,
        loans: &[LoanRecord],
        request: &LoanRequest,
        as_of: NaiveDate,
    ) -> EligibilityVerdict {
        let ceiling = customer.monthly_income * self.config.max_installment_to_income;
        let current_load: Decimal = loans
            .iter()
            .filter(|loan| loan.is_open())
            .map(|loan| loan.monthly_installment)
            .sum();

        if current_load > ceiling {
            return EligibilityVerdict::rejected_unaffordable(
                request,
                RejectionReason::ExistingInstallmentLoad {
                    current_load,
                    ceiling,
                },
            );
        }

        let installment = monthly_installment(
            request.amount,
            request.annual_interest_rate,
            request.tenure_months,
        );
        let projected_load = current_load + installment;
        if projected_load > ceiling {
            return EligibilityVerdict::rejected_unaffordable(
                request,
                RejectionReason::ProjectedInstallmentLoad {
                    projected_load,
                    ceiling,
                },
            );
        }

        let credit_score = self.scorer.score(customer, loans, as_of).value;
        let slab = apply_rate_slabs(&self.config, credit_score, request.annual_interest_rate);
        let verdict = match slab {
            SlabOutcome::Approved => EligibilityVerdict {
                approved: true,
                requested_interest_rate: request.annual_interest_rate,
                corrected_interest_rate: request.annual_interest_rate,
                monthly_installment: installment,
                credit_score: Some(credit_score),
                rejection: None,
            },
            SlabOutcome::Rejected(reason) => EligibilityVerdict {
                approved: false,
                requested_interest_rate: request.annual_interest_rate,
                corrected_interest_rate: reason
                    .corrected_rate()
                    .unwrap_or(request.annual_interest_rate),
                monthly_installment: installment,
                credit_score: Some(credit_score),
                rejection: Some(reason),
            },
        };

        debug!(
            customer_id = customer.customer_id.0,
            credit_score,
            approved = verdict.approved,
            corrected_rate = %verdict.corrected_interest_rate,
            "eligibility decided"
        );

        verdict
    }
}

/// Approval flag, effective rate and installment, plus the trail that produced them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibilityVerdict {
    pub approved: bool,
    pub requested_interest_rate: Decimal,
    pub corrected_interest_rate: Decimal,
    pub monthly_installment: Decimal,
    /// Absent when affordability rejected the request before scoring.
    pub credit_score: Option<u8>,
    pub rejection: Option<RejectionReason>,
}

impl EligibilityVerdict {
    fn rejected_unaffordable(request: &LoanRequest, reason: RejectionReason) -> Self {
        Self {
            approved: false,
            requested_interest_rate: request.annual_interest_rate,
            corrected_interest_rate: request.annual_interest_rate,
            monthly_installment: Decimal::ZERO,
            credit_score: None,
            rejection: Some(reason),
        }
    }

    /// `(approved, effective annual rate, monthly installment)`.
    pub fn as_tuple(&self) -> (bool, Decimal, Decimal) {
        (
            self.approved,
            self.corrected_interest_rate,
            self.monthly_installment,
        )
    }

    pub fn summary(&self) -> String {
        match &self.rejection {
            None => "loan approved".to_string(),
            Some(reason) => format!("loan not approved: {}", reason.summary()),
        }
    }
}

/// Decide `request` with the default slabs, scoring tiers and 50% affordability ceiling.
pub fn decide(
    customer: &Customer,
    loans: &[LoanRecord],
    request: &LoanRequest,
    as_of: NaiveDate,
) -> EligibilityVerdict {
    EligibilityEngine::default().decide(customer, loans, request, as_of)
}
