//! Loan-request submission intake.
//!
//! A submission runs as one sequential pipeline: the loan-type reference is
//! validated against the catalog, the applicant identity is resolved against
//! the directory (reuse by document, or register after the email-uniqueness
//! check), and the assembled request is persisted in the pending-review
//! status. There is no cross-collaborator transaction: a registration that
//! precedes a failed persistence is not rolled back.

pub mod directory;
pub mod domain;
pub mod repository;
pub mod resolver;
pub mod router;
pub mod service;
pub mod validation;

#[cfg(test)]
mod tests;

pub use directory::{ApplicantDirectory, DirectoryError};
pub use domain::{
    Applicant, ApplicantId, ApplicantProfile, Document, LoanRequest, LoanRequestDraft,
    LoanRequestId, LoanTypeId, NewLoanRequest, RoleId, StatusId,
};
pub use repository::{CatalogError, LoanRequestRepository, LoanTypeCatalog, RepositoryError};
pub use resolver::{ApplicantResolver, ResolutionError};
pub use router::{
    submission_router, ApplicantPayload, ApplicantView, SubmissionView, SubmitLoanRequest,
};
pub use service::{LoanSubmissionService, Submission, SubmissionError};
pub use validation::{LoanTypeValidator, ValidationError};
