use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use tracing::warn;

use super::super::domain::{Customer, LoanRecord};
use super::config::ScoringConfig;
use super::{ScoreComponent, ScoreFactor};

pub(crate) struct HistorySignals {
    pub open_principal: Decimal,
    pub closed_loans: u32,
    pub closed_paid_on_time: u32,
    pub loan_count: u32,
    pub current_year_loans: u32,
    pub total_principal: Decimal,
}

pub(crate) fn collect_signals(loans: &[LoanRecord], as_of: NaiveDate) -> HistorySignals {
    let mut signals = HistorySignals {
        open_principal: Decimal::ZERO,
        closed_loans: 0,
        closed_paid_on_time: 0,
        loan_count: 0,
        current_year_loans: 0,
        total_principal: Decimal::ZERO,
    };

    for loan in loans {
        if loan.installments_paid_on_time > loan.tenure_months {
            warn!(
                loan_id = loan.loan_id.0,
                paid = loan.installments_paid_on_time,
                tenure = loan.tenure_months,
                "loan reports more on-time installments than its tenure; treating as fully paid"
            );
        }

        signals.loan_count += 1;
        signals.total_principal += loan.principal;

        if loan.start_date.year() == as_of.year() {
            signals.current_year_loans += 1;
        }

        if loan.is_open() {
            signals.open_principal += loan.principal;
        } else {
            signals.closed_loans += 1;
            if loan.is_paid_on_time() {
                signals.closed_paid_on_time += 1;
            }
        }
    }

    signals
}

/// Open principal above the approved limit zeroes the score outright.
pub(crate) fn exceeds_approved_limit(customer: &Customer, signals: &HistorySignals) -> bool {
    signals.open_principal > customer.approved_limit
}

pub(crate) fn score_history(
    signals: &HistorySignals,
    config: &ScoringConfig,
) -> (Vec<ScoreComponent>, Decimal) {
    let mut components = Vec::with_capacity(4);
    let mut total = Decimal::ZERO;

    let (repayment, notes) = if signals.closed_loans > 0 {
        let ratio =
            Decimal::from(signals.closed_paid_on_time) / Decimal::from(signals.closed_loans);
        (
            ratio * config.repayment_weight,
            format!(
                "{} of {} closed loan(s) paid on schedule",
                signals.closed_paid_on_time, signals.closed_loans
            ),
        )
    } else {
        (
            config.new_customer_repayment_points,
            "no closed loans yet".to_string(),
        )
    };
    components.push(ScoreComponent {
        factor: ScoreFactor::RepaymentHistory,
        points: repayment,
        notes,
    });
    total += repayment;

    let count_points = config.loan_count.points_for(&signals.loan_count);
    components.push(ScoreComponent {
        factor: ScoreFactor::LoanCount,
        points: Decimal::from(count_points),
        notes: format!("{} loan(s) on record", signals.loan_count),
    });
    total += Decimal::from(count_points);

    let activity_points = config
        .current_year_activity
        .points_for(&signals.current_year_loans);
    components.push(ScoreComponent {
        factor: ScoreFactor::CurrentYearActivity,
        points: Decimal::from(activity_points),
        notes: format!("{} loan(s) started this year", signals.current_year_loans),
    });
    total += Decimal::from(activity_points);

    let volume_points = config.approved_volume.points_for(&signals.total_principal);
    components.push(ScoreComponent {
        factor: ScoreFactor::ApprovedVolume,
        points: Decimal::from(volume_points),
        notes: format!("{} approved across all loans", signals.total_principal),
    });
    total += Decimal::from(volume_points);

    (components, total)
}
