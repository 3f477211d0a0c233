use std::fmt;

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Identifier wrapper for registered customers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CustomerId(pub u64);

/// Identifier wrapper for originated or imported loans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LoanId(pub u64);

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for LoanId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

const APPROVED_LIMIT_SALARY_MULTIPLE: Decimal = dec!(36);
const APPROVED_LIMIT_STEP: Decimal = dec!(100000);

/// Financial snapshot of a borrower as handed to the underwriting core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub customer_id: CustomerId,
    pub first_name: String,
    pub last_name: String,
    pub monthly_income: Decimal,
    pub approved_limit: Decimal,
    /// Informational only; scoring works from open loan principal instead.
    pub current_debt: Decimal,
}

impl Customer {
    pub fn name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Credit ceiling for a new customer: 36 months of income, rounded to the nearest lakh.
/// Exact half-lakh results round to the even lakh.
pub fn approved_limit_for(monthly_income: Decimal) -> Decimal {
    let raw = monthly_income * APPROVED_LIMIT_SALARY_MULTIPLE;
    (raw / APPROVED_LIMIT_STEP).round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven)
        * APPROVED_LIMIT_STEP
}

/// Historical or freshly originated loan belonging to a customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanRecord {
    pub loan_id: LoanId,
    pub customer_id: CustomerId,
    pub principal: Decimal,
    pub tenure_months: u32,
    pub annual_interest_rate: Decimal,
    pub monthly_installment: Decimal,
    pub installments_paid_on_time: u32,
    pub start_date: NaiveDate,
    /// `None` while the loan is still being repaid.
    pub end_date: Option<NaiveDate>,
}

impl LoanRecord {
    pub fn is_open(&self) -> bool {
        self.end_date.is_none()
    }

    pub fn is_closed(&self) -> bool {
        self.end_date.is_some()
    }

    /// Every scheduled installment was paid on time. Records reporting more payments than
    /// tenure are accepted as fully paid.
    pub fn is_paid_on_time(&self) -> bool {
        self.installments_paid_on_time >= self.tenure_months
    }

    pub fn repayments_left(&self) -> u32 {
        if self.is_closed() {
            return 0;
        }
        self.tenure_months
            .saturating_sub(self.installments_paid_on_time)
    }

    pub fn status(&self) -> LoanStatus {
        match self.end_date {
            None => LoanStatus::Active,
            Some(_) if self.is_paid_on_time() => LoanStatus::Completed,
            Some(_) => LoanStatus::Defaulted,
        }
    }

    pub fn statement(&self) -> LoanStatement {
        LoanStatement {
            loan_id: self.loan_id,
            customer_id: self.customer_id,
            principal: self.principal,
            annual_interest_rate: self.annual_interest_rate,
            monthly_installment: self.monthly_installment,
            tenure_months: self.tenure_months,
            repayments_left: self.repayments_left(),
            start_date: self.start_date,
            end_date: self.end_date,
            status: self.status(),
        }
    }
}

/// Lifecycle state derived from the end date and repayment record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoanStatus {
    Active,
    Completed,
    Defaulted,
}

impl LoanStatus {
    pub const fn label(self) -> &'static str {
        match self {
            LoanStatus::Active => "active",
            LoanStatus::Completed => "completed",
            LoanStatus::Defaulted => "defaulted",
        }
    }
}

/// Terms a customer asks for when applying.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanRequest {
    pub amount: Decimal,
    pub annual_interest_rate: Decimal,
    pub tenure_months: u32,
}

/// Loan fields handed to the storage collaborator on approval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewLoan {
    pub customer_id: CustomerId,
    pub principal: Decimal,
    pub tenure_months: u32,
    pub annual_interest_rate: Decimal,
    pub monthly_installment: Decimal,
    pub start_date: NaiveDate,
}

/// Read-side view of a loan for callers listing or inspecting loans.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanStatement {
    pub loan_id: LoanId,
    pub customer_id: CustomerId,
    pub principal: Decimal,
    pub annual_interest_rate: Decimal,
    pub monthly_installment: Decimal,
    pub tenure_months: u32,
    pub repayments_left: u32,
    pub start_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    pub status: LoanStatus,
}
