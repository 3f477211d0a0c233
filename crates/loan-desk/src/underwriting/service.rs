use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::clock::Clock;
use super::domain::{CustomerId, LoanId, LoanRecord, LoanRequest, LoanStatement, NewLoan};
use super::eligibility::{EligibilityEngine, EligibilityVerdict};
use super::repository::{LoanBook, RepositoryError};

pub const APPROVAL_MESSAGE: &str = "Loan approved successfully";

/// Service composing the loan book, the clock, and the eligibility engine.
pub struct LoanOriginationService<B, C> {
    book: Arc<B>,
    clock: Arc<C>,
    engine: Arc<EligibilityEngine>,
}

impl<B, C> LoanOriginationService<B, C>
where
    B: LoanBook + 'static,
    C: Clock + 'static,
{
    pub fn new(book: Arc<B>, clock: Arc<C>, engine: EligibilityEngine) -> Self {
        Self {
            book,
            clock,
            engine: Arc::new(engine),
        }
    }

    /// Run the eligibility decision for a stored customer without creating anything.
    pub fn check_eligibility(
        &self,
        customer_id: CustomerId,
        request: &LoanRequest,
    ) -> Result<EligibilityVerdict, OriginationError> {
        self.decide_as_of(customer_id, request, self.clock.today())
    }

    fn decide_as_of(
        &self,
        customer_id: CustomerId,
        request: &LoanRequest,
        today: NaiveDate,
    ) -> Result<EligibilityVerdict, OriginationError> {
        let customer = self
            .book
            .customer(customer_id)?
            .ok_or(OriginationError::CustomerNotFound(customer_id))?;
        let loans = self.book.loans_for_customer(customer_id)?;

        Ok(self.engine.decide(&customer, &loans, request, today))
    }

    /// Decide `request` and, on approval, book the loan starting today.
    ///
    /// A rejection is not an error: the outcome carries no loan and the rejection message.
    /// The clock is read once, so the decision and the start date share the same day.
    pub fn originate(
        &self,
        customer_id: CustomerId,
        request: LoanRequest,
    ) -> Result<OriginationOutcome, OriginationError> {
        let today = self.clock.today();
        let verdict = self.decide_as_of(customer_id, &request, today)?;

        if !verdict.approved {
            info!(
                customer_id = customer_id.0,
                amount = %request.amount,
                "loan request rejected"
            );
            return Ok(OriginationOutcome {
                customer_id,
                loan: None,
                message: verdict.summary(),
                verdict,
            });
        }

        let loan = self.book.create_loan(NewLoan {
            customer_id,
            principal: request.amount,
            tenure_months: request.tenure_months,
            annual_interest_rate: verdict.corrected_interest_rate,
            monthly_installment: verdict.monthly_installment,
            start_date: today,
        })?;

        info!(
            customer_id = customer_id.0,
            loan_id = loan.loan_id.0,
            amount = %loan.principal,
            monthly_installment = %loan.monthly_installment,
            "loan originated"
        );

        Ok(OriginationOutcome {
            customer_id,
            loan: Some(loan),
            message: APPROVAL_MESSAGE.to_string(),
            verdict,
        })
    }

    pub fn loan_details(&self, loan_id: LoanId) -> Result<LoanStatement, OriginationError> {
        self.book
            .loan(loan_id)?
            .map(|loan| loan.statement())
            .ok_or(OriginationError::LoanNotFound(loan_id))
    }

    pub fn customer_loans(
        &self,
        customer_id: CustomerId,
    ) -> Result<Vec<LoanStatement>, OriginationError> {
        if self.book.customer(customer_id)?.is_none() {
            return Err(OriginationError::CustomerNotFound(customer_id));
        }
        Ok(self
            .book
            .loans_for_customer(customer_id)?
            .iter()
            .map(LoanRecord::statement)
            .collect())
    }
}

/// Result of an origination attempt: the booked loan, or `None` with the rejection message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OriginationOutcome {
    pub customer_id: CustomerId,
    pub loan: Option<LoanRecord>,
    pub message: String,
    pub verdict: EligibilityVerdict,
}

impl OriginationOutcome {
    pub fn is_approved(&self) -> bool {
        self.loan.is_some()
    }
}

/// Error raised by the origination service.
#[derive(Debug, thiserror::Error)]
pub enum OriginationError {
    #[error("customer {0} not found")]
    CustomerNotFound(CustomerId),
    #[error("loan {0} not found")]
    LoanNotFound(LoanId),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
