use super::common::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::underwriting::scoring::{
    compute_credit_score, CreditScoreEngine, ScoreFactor, ScoringConfig, Tier, TierTable,
};

#[test]
fn new_customer_scores_neutral_defaults() {
    let score = CreditScoreEngine::default().score(&customer(), &[], today());

    assert_eq!(score.value, 50);
    let points: Vec<Decimal> = score.components.iter().map(|c| c.points).collect();
    assert_eq!(points, vec![dec!(20), dec!(10), dec!(10), dec!(10)]);
}

#[test]
fn open_principal_above_limit_zeroes_score() {
    let mut loans: Vec<_> = (1..=3)
        .map(|id| closed_loan(id, dec!(200000), 12, 12, date(2022, 1, 10)))
        .collect();
    loans.push(open_loan(4, dec!(1800000.01), dec!(5000), date(2025, 2, 1)));

    let score = CreditScoreEngine::default().score(&customer(), &loans, today());

    assert_eq!(score.value, 0);
    assert_eq!(score.components.len(), 1);
    assert_eq!(score.components[0].factor, ScoreFactor::ExposureCutoff);
}

#[test]
fn open_principal_at_limit_is_still_scored() {
    let loans = vec![open_loan(1, dec!(1800000), dec!(5000), date(2024, 2, 1))];

    // 20 (no closed loans) + 20 (one loan) + 10 (none this year) + 20 (volume in (1M, 5M])
    assert_eq!(compute_credit_score(&customer(), &loans, today()), 70);
}

#[test]
fn mixed_history_combines_all_factors() {
    let loans = vec![
        closed_loan(1, dec!(200000), 12, 12, date(2022, 3, 1)),
        closed_loan(2, dec!(300000), 24, 24, date(2023, 5, 1)),
        closed_loan(3, dec!(100000), 12, 7, date(2023, 8, 1)),
        open_loan(4, dec!(400000), dec!(9000), date(2025, 1, 20)),
    ];

    let score = CreditScoreEngine::default().score(&customer(), &loans, today());

    // 2/3 * 40 + 15 (four loans) + 20 (one this year) + 15 (exactly 1M) = 76.67
    assert_eq!(score.value, 77);
    let repayment = score
        .components
        .iter()
        .find(|c| c.factor == ScoreFactor::RepaymentHistory)
        .expect("repayment component");
    assert!(repayment.notes.contains("2 of 3"));
}

#[test]
fn many_loans_and_large_volume_are_not_rewarded_further() {
    let loans: Vec<_> = (1..=6)
        .map(|id| closed_loan(id, dec!(1000000), 12, 12, date(2021, 1, 5)))
        .collect();

    // 40 + 10 (more than five loans) + 10 + 18 (above 5M)
    assert_eq!(compute_credit_score(&customer(), &loans, today()), 78);
}

#[test]
fn volume_bounds_are_inclusive() {
    let score_for = |principal| {
        let loans = vec![closed_loan(1, principal, 12, 12, date(2020, 1, 1))];
        compute_credit_score(&customer(), &loans, today())
    };

    // 40 repayment + 20 single loan + 10 quiet year, plus the volume tier
    assert_eq!(score_for(dec!(1000000)), 85);
    assert_eq!(score_for(dec!(1000000.01)), 90);
    assert_eq!(score_for(dec!(5000000)), 90);
    assert_eq!(score_for(dec!(5000000.01)), 88);
}

#[test]
fn several_loans_this_year_score_below_exactly_one() {
    let one = vec![open_loan(1, dec!(100000), dec!(3000), date(2025, 3, 1))];
    let two = vec![
        open_loan(1, dec!(100000), dec!(3000), date(2025, 3, 1)),
        open_loan(2, dec!(100000), dec!(3000), date(2025, 4, 1)),
    ];

    assert_eq!(compute_credit_score(&customer(), &one, today()), 75);
    assert_eq!(compute_credit_score(&customer(), &two, today()), 70);
}

#[test]
fn overpaid_history_counts_as_fully_paid() {
    let loans = vec![closed_loan(1, dec!(50000), 12, 19, date(2020, 1, 1))];

    // 40 + 20 + 10 + 15
    assert_eq!(compute_credit_score(&customer(), &loans, today()), 85);
}

#[test]
fn fractional_totals_round_half_to_even() {
    let loans: Vec<_> = (1..=16)
        .map(|id| {
            let paid = if id <= 3 { 12 } else { 4 };
            closed_loan(id, dec!(10000), 12, paid, date(2019, 6, 1))
        })
        .collect();

    // 3/16 * 40 = 7.5, plus 10 + 10 + 15 = 42.5
    assert_eq!(compute_credit_score(&customer(), &loans, today()), 42);
}

#[test]
fn custom_weights_are_clamped_to_one_hundred() {
    let config = ScoringConfig {
        repayment_weight: dec!(400),
        approved_volume: TierTable::new(vec![Tier { up_to: dec!(1), points: 0 }], 60),
        ..ScoringConfig::default()
    };
    let loans = vec![closed_loan(1, dec!(50000), 12, 12, date(2020, 1, 1))];

    let engine = CreditScoreEngine::new(config.clone());
    assert_eq!(engine.config(), &config);

    let score = engine.score(&customer(), &loans, today());

    assert_eq!(score.value, 100);
}

#[test]
fn current_year_follows_the_supplied_date() {
    let loans = vec![open_loan(1, dec!(100000), dec!(3000), date(2024, 11, 1))];

    assert_eq!(compute_credit_score(&customer(), &loans, today()), 65);
    assert_eq!(compute_credit_score(&customer(), &loans, date(2024, 12, 31)), 75);
}
