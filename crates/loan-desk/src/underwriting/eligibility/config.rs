use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Affordability ceiling and interest-rate slabs applied after scoring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibilityConfig {
    /// Share of monthly income that open plus requested installments may not exceed.
    pub max_installment_to_income: Decimal,
    /// Slabs ordered by `above_score`, highest first.
    pub rate_slabs: Vec<RateSlab>,
}

impl EligibilityConfig {
    pub fn new(max_installment_to_income: Decimal, mut rate_slabs: Vec<RateSlab>) -> Self {
        rate_slabs.sort_by(|left, right| right.above_score.cmp(&left.above_score));
        Self {
            max_installment_to_income,
            rate_slabs,
        }
    }

    pub fn with_max_installment_to_income(mut self, ratio: Decimal) -> Self {
        self.max_installment_to_income = ratio;
        self
    }
}

impl Default for EligibilityConfig {
    fn default() -> Self {
        Self::new(
            dec!(0.5),
            vec![
                RateSlab {
                    above_score: 50,
                    rule: SlabRule::Unconditional,
                },
                RateSlab {
                    above_score: 30,
                    rule: SlabRule::MinimumRate {
                        above: dec!(12),
                        corrected_rate: dec!(16),
                    },
                },
                RateSlab {
                    above_score: 10,
                    rule: SlabRule::MinimumRate {
                        above: dec!(16),
                        corrected_rate: dec!(20),
                    },
                },
            ],
        )
    }
}

/// Rule for scores strictly greater than `above_score` (and not covered by a higher slab).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateSlab {
    pub above_score: u8,
    pub rule: SlabRule,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlabRule {
    /// Approve at whatever rate was requested.
    Unconditional,
    /// Approve only when the requested rate is strictly above `above`; otherwise quote
    /// `corrected_rate`, the floor of the next slab.
    MinimumRate {
        above: Decimal,
        corrected_rate: Decimal,
    },
}
