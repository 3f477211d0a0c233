//! Credit scoring, eligibility and loan origination.
//!
//! The engines are pure functions of a customer snapshot, their loan history and a date.
//! Only [`service::LoanOriginationService`] talks to storage, through [`LoanBook`].

pub mod clock;
pub mod domain;
pub mod eligibility;
pub mod emi;
pub mod repository;
pub mod scoring;
pub mod service;

#[cfg(test)]
mod tests;

pub use clock::{Clock, FixedClock, SystemClock};
pub use domain::{
    approved_limit_for, Customer, CustomerId, LoanId, LoanRecord, LoanRequest, LoanStatement,
    LoanStatus, NewLoan,
};
pub use eligibility::{
    decide, EligibilityConfig, EligibilityEngine, EligibilityVerdict, RateSlab, RejectionReason,
    SlabRule,
};
pub use emi::{monthly_installment, round_currency};
pub use repository::{LoanBook, RepositoryError};
pub use scoring::{
    compute_credit_score, CreditScore, CreditScoreEngine, ScoreComponent, ScoreFactor,
    ScoringConfig, Tier, TierTable,
};
pub use service::{LoanOriginationService, OriginationError, OriginationOutcome, APPROVAL_MESSAGE};
