use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::underwriting::clock::{Clock, FixedClock};
use crate::underwriting::domain::{Customer, CustomerId, LoanId, LoanRecord, LoanRequest, NewLoan};
use crate::underwriting::eligibility::EligibilityEngine;
use crate::underwriting::repository::{LoanBook, RepositoryError};
use crate::underwriting::service::LoanOriginationService;

pub(super) fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 15).expect("valid date")
}

pub(super) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

pub(super) fn customer() -> Customer {
    Customer {
        customer_id: CustomerId(1),
        first_name: "Asha".to_string(),
        last_name: "Menon".to_string(),
        monthly_income: dec!(50000),
        approved_limit: dec!(1800000),
        current_debt: Decimal::ZERO,
    }
}

pub(super) fn open_loan(
    id: u64,
    principal: Decimal,
    installment: Decimal,
    start: NaiveDate,
) -> LoanRecord {
    LoanRecord {
        loan_id: LoanId(id),
        customer_id: CustomerId(1),
        principal,
        tenure_months: 36,
        annual_interest_rate: dec!(11),
        monthly_installment: installment,
        installments_paid_on_time: 10,
        start_date: start,
        end_date: None,
    }
}

pub(super) fn closed_loan(
    id: u64,
    principal: Decimal,
    tenure_months: u32,
    paid: u32,
    start: NaiveDate,
) -> LoanRecord {
    LoanRecord {
        loan_id: LoanId(id),
        customer_id: CustomerId(1),
        principal,
        tenure_months,
        annual_interest_rate: dec!(9.5),
        monthly_installment: dec!(1000),
        installments_paid_on_time: paid,
        start_date: start,
        end_date: Some(date(start.year() + 2, 1, 31)),
    }
}

pub(super) fn request(amount: Decimal, rate: Decimal, tenure_months: u32) -> LoanRequest {
    LoanRequest {
        amount,
        annual_interest_rate: rate,
        tenure_months,
    }
}

#[derive(Default)]
struct BookState {
    customers: BTreeMap<CustomerId, Customer>,
    loans: Vec<LoanRecord>,
    next_loan_id: u64,
}

#[derive(Default, Clone)]
pub(super) struct MemoryLoanBook {
    state: Arc<Mutex<BookState>>,
}

impl MemoryLoanBook {
    pub(super) fn with_customer(customer: Customer, loans: Vec<LoanRecord>) -> Self {
        let book = Self::default();
        {
            let mut state = book.state.lock().expect("book mutex poisoned");
            state.next_loan_id = loans.iter().map(|loan| loan.loan_id.0).max().unwrap_or(0);
            state.customers.insert(customer.customer_id, customer);
            state.loans = loans;
        }
        book
    }

    pub(super) fn loan_count(&self) -> usize {
        self.state.lock().expect("book mutex poisoned").loans.len()
    }
}

impl LoanBook for MemoryLoanBook {
    fn customer(&self, id: CustomerId) -> Result<Option<Customer>, RepositoryError> {
        let state = self.state.lock().expect("book mutex poisoned");
        Ok(state.customers.get(&id).cloned())
    }

    fn loans_for_customer(&self, id: CustomerId) -> Result<Vec<LoanRecord>, RepositoryError> {
        let state = self.state.lock().expect("book mutex poisoned");
        Ok(state
            .loans
            .iter()
            .filter(|loan| loan.customer_id == id)
            .cloned()
            .collect())
    }

    fn loan(&self, id: LoanId) -> Result<Option<LoanRecord>, RepositoryError> {
        let state = self.state.lock().expect("book mutex poisoned");
        Ok(state.loans.iter().find(|loan| loan.loan_id == id).cloned())
    }

    fn create_loan(&self, loan: NewLoan) -> Result<LoanRecord, RepositoryError> {
        let mut state = self.state.lock().expect("book mutex poisoned");
        if !state.customers.contains_key(&loan.customer_id) {
            return Err(RepositoryError::NotFound);
        }
        state.next_loan_id += 1;
        let record = LoanRecord {
            loan_id: LoanId(state.next_loan_id),
            customer_id: loan.customer_id,
            principal: loan.principal,
            tenure_months: loan.tenure_months,
            annual_interest_rate: loan.annual_interest_rate,
            monthly_installment: loan.monthly_installment,
            installments_paid_on_time: 0,
            start_date: loan.start_date,
            end_date: None,
        };
        state.loans.push(record.clone());
        Ok(record)
    }
}

/// Clock that moves to the next listed date on every read and then stays on the last one.
pub(super) struct SteppingClock {
    dates: Vec<NaiveDate>,
    reads: AtomicUsize,
}

impl SteppingClock {
    pub(super) fn new(dates: Vec<NaiveDate>) -> Self {
        assert!(!dates.is_empty(), "stepping clock needs at least one date");
        Self {
            dates,
            reads: AtomicUsize::new(0),
        }
    }

    pub(super) fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

impl Clock for SteppingClock {
    fn today(&self) -> NaiveDate {
        let read = self.reads.fetch_add(1, Ordering::SeqCst);
        self.dates[read.min(self.dates.len() - 1)]
    }
}

pub(super) struct UnavailableLoanBook;

impl LoanBook for UnavailableLoanBook {
    fn customer(&self, _id: CustomerId) -> Result<Option<Customer>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn loans_for_customer(&self, _id: CustomerId) -> Result<Vec<LoanRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn loan(&self, _id: LoanId) -> Result<Option<LoanRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn create_loan(&self, _loan: NewLoan) -> Result<LoanRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) fn build_service(
    loans: Vec<LoanRecord>,
) -> (
    LoanOriginationService<MemoryLoanBook, FixedClock>,
    Arc<MemoryLoanBook>,
) {
    let book = Arc::new(MemoryLoanBook::with_customer(customer(), loans));
    let service = LoanOriginationService::new(
        book.clone(),
        Arc::new(FixedClock(today())),
        EligibilityEngine::default(),
    );
    (service, book)
}
