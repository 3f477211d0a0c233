mod config;
mod rules;
mod tiers;

pub use config::ScoringConfig;
pub use tiers::{Tier, TierTable};

use chrono::NaiveDate;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::domain::{Customer, LoanRecord};

const MAX_SCORE: Decimal = dec!(100);

/// Stateless scorer turning a customer's loan history into a 0-100 credit score.
#[derive(Debug, Clone, Default)]
pub struct CreditScoreEngine {
    config: ScoringConfig,
}

impl CreditScoreEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Score `customer` from every loan they hold, open and closed, as of `as_of`.
    pub fn score(
        &self,
        customer: &Customer,
        loans: &[LoanRecord],
        as_of: NaiveDate,
    ) -> CreditScore {
        let signals = rules::collect_signals(loans, as_of);

        if rules::exceeds_approved_limit(customer, &signals) {
            debug!(
                customer_id = customer.customer_id.0,
                open_principal = %signals.open_principal,
                approved_limit = %customer.approved_limit,
                "open exposure exceeds approved limit"
            );
            return CreditScore {
                value: 0,
                components: vec![ScoreComponent {
                    factor: ScoreFactor::ExposureCutoff,
                    points: Decimal::ZERO,
                    notes: format!(
                        "open principal {} exceeds approved limit {}",
                        signals.open_principal, customer.approved_limit
                    ),
                }],
            };
        }

        let (components, total) = rules::score_history(&signals, &self.config);
        let value = total
            .clamp(Decimal::ZERO, MAX_SCORE)
            .round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven)
            .to_u8()
            .unwrap_or(0);

        debug!(customer_id = customer.customer_id.0, score = value, "credit score computed");

        CreditScore { value, components }
    }
}

/// Score `customer` with the default weights and tiers.
pub fn compute_credit_score(customer: &Customer, loans: &[LoanRecord], as_of: NaiveDate) -> u8 {
    CreditScoreEngine::default()
        .score(customer, loans, as_of)
        .value
}

/// What a single factor contributed, kept for audits and rejection notices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub factor: ScoreFactor,
    pub points: Decimal,
    pub notes: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ScoreFactor {
    ExposureCutoff,
    RepaymentHistory,
    LoanCount,
    CurrentYearActivity,
    ApprovedVolume,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditScore {
    pub value: u8,
    pub components: Vec<ScoreComponent>,
}
