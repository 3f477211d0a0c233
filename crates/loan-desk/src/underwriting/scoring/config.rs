use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::tiers::{Tier, TierTable};

/// Weights and tier tables feeding the 0-100 credit score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Points for a history where every closed loan was paid on schedule.
    pub repayment_weight: Decimal,
    /// Repayment points for customers without any closed loan yet.
    pub new_customer_repayment_points: Decimal,
    /// Keyed by the number of loans ever taken.
    pub loan_count: TierTable<u32>,
    /// Keyed by the number of loans started in the current calendar year.
    pub current_year_activity: TierTable<u32>,
    /// Keyed by the summed principal of every loan.
    pub approved_volume: TierTable<Decimal>,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            repayment_weight: dec!(40),
            new_customer_repayment_points: dec!(20),
            loan_count: TierTable::new(
                vec![
                    Tier { up_to: 0, points: 10 },
                    Tier { up_to: 3, points: 20 },
                    Tier { up_to: 5, points: 15 },
                ],
                10,
            ),
            current_year_activity: TierTable::new(
                vec![
                    Tier { up_to: 0, points: 10 },
                    Tier { up_to: 1, points: 20 },
                ],
                15,
            ),
            approved_volume: TierTable::new(
                vec![
                    Tier {
                        up_to: Decimal::ZERO,
                        points: 10,
                    },
                    Tier {
                        up_to: dec!(1000000),
                        points: 15,
                    },
                    Tier {
                        up_to: dec!(5000000),
                        points: 20,
                    },
                ],
                18,
            ),
        }
    }
}
