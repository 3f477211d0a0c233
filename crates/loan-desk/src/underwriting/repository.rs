use super::domain::{Customer, CustomerId, LoanId, LoanRecord, NewLoan};

/// Storage abstraction so origination can be exercised without a database.
///
/// `loans_for_customer` must return open and closed loans alike and should come from a
/// consistent read; concurrent writes for the same customer are the store's concern.
pub trait LoanBook: Send + Sync {
    fn customer(&self, id: CustomerId) -> Result<Option<Customer>, RepositoryError>;
    fn loans_for_customer(&self, id: CustomerId) -> Result<Vec<LoanRecord>, RepositoryError>;
    fn loan(&self, id: LoanId) -> Result<Option<LoanRecord>, RepositoryError>;
    fn create_loan(&self, loan: NewLoan) -> Result<LoanRecord, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
