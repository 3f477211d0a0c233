//! Equated monthly installment arithmetic for amortizing loans.

use rust_decimal::{Decimal, MathematicalOps, RoundingStrategy};
use rust_decimal_macros::dec;

const MONTHS_PER_YEAR: Decimal = dec!(12);
const PERCENT: Decimal = dec!(100);
const CURRENCY_DECIMAL_PLACES: u32 = 2;

/// Round a currency amount to cents, half away from zero.
pub fn round_currency(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(
        CURRENCY_DECIMAL_PLACES,
        RoundingStrategy::MidpointAwayFromZero,
    )
}

/// Fixed monthly repayment for `principal` at `annual_rate_percent` over `tenure_months`.
///
/// Degenerate terms (zero tenure, non-positive rate) yield zero rather than an error.
pub fn monthly_installment(
    principal: Decimal,
    annual_rate_percent: Decimal,
    tenure_months: u32,
) -> Decimal {
    if tenure_months == 0 || annual_rate_percent <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    let monthly_rate = annual_rate_percent / PERCENT / MONTHS_PER_YEAR;
    let months = Decimal::from(tenure_months);

    if monthly_rate.is_zero() {
        return round_currency(principal / months);
    }

    let growth = match (Decimal::ONE + monthly_rate).checked_powi(i64::from(tenure_months)) {
        Some(growth) => growth,
        // (1+r)^n / ((1+r)^n - 1) tends to 1 once the growth factor leaves the decimal range.
        None => return round_currency(principal * monthly_rate),
    };

    let accrued = growth - Decimal::ONE;
    if accrued.is_zero() {
        return round_currency(principal / months);
    }

    round_currency(principal * monthly_rate * (growth / accrued))
}
