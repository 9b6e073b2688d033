use std::sync::Arc;

use tracing::info;

use super::directory::ApplicantDirectory;
use super::domain::{
    Applicant, ApplicantProfile, LoanRequest, LoanRequestDraft, NewLoanRequest, StatusId,
};
use super::repository::{LoanRequestRepository, LoanTypeCatalog, RepositoryError};
use super::resolver::{ApplicantResolver, ResolutionError};
use super::validation::{LoanTypeValidator, ValidationError};

/// Orchestrates one loan-request submission: loan-type validation, applicant
/// resolution, then persistence with the pending-review status.
///
/// Collaborators are shared, externally synchronized stores; the service
/// holds no mutable state and takes no locks of its own. Two submissions
/// racing on the same document or email can both observe not-found and both
/// attempt registration; the directory is the arbiter of record for that
/// race.
pub struct LoanSubmissionService<C, D, R> {
    validator: LoanTypeValidator<C>,
    resolver: ApplicantResolver<D>,
    repository: Arc<R>,
}

/// A persisted loan request together with the applicant it was filed under.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub loan_request: LoanRequest,
    pub applicant: Applicant,
}

impl<C, D, R> LoanSubmissionService<C, D, R>
where
    C: LoanTypeCatalog + 'static,
    D: ApplicantDirectory + 'static,
    R: LoanRequestRepository + 'static,
{
    pub fn new(catalog: Arc<C>, directory: Arc<D>, repository: Arc<R>) -> Self {
        Self {
            validator: LoanTypeValidator::new(catalog),
            resolver: ApplicantResolver::new(directory),
            repository,
        }
    }

    /// Submit a loan request, resolving the applicant identity first.
    ///
    /// The persisted request denormalizes the resolved applicant's email —
    /// not the submitted one — and always carries the pending-review status.
    ///
    /// There is no compensation if persistence fails after a new applicant
    /// was registered: the registration stands and the caller sees the store
    /// failure. That inconsistency window is an accepted limitation of the
    /// two-store design.
    pub fn submit(
        &self,
        candidate: ApplicantProfile,
        draft: LoanRequestDraft,
    ) -> Result<Submission, SubmissionError> {
        let loan_type_id = self.validator.validate(draft.loan_type_id)?;
        let applicant = self.resolver.resolve(candidate)?;

        let request = NewLoanRequest {
            amount: draft.amount,
            term_months: draft.term_months,
            email: applicant.profile.email.clone(),
            loan_type_id,
            status: StatusId::PENDING_REVIEW,
        };

        let stored = self.repository.save(request)?;
        info!(
            loan_request_id = stored.id.0,
            applicant_id = applicant.id.0,
            "loan request persisted"
        );

        Ok(Submission {
            loan_request: stored,
            applicant,
        })
    }

    /// Persist a loan request for a known contact email, skipping applicant
    /// resolution. The pending-review status is assigned regardless of
    /// caller input.
    pub fn register(
        &self,
        email: String,
        draft: LoanRequestDraft,
    ) -> Result<LoanRequest, SubmissionError> {
        let loan_type_id = self.validator.validate(draft.loan_type_id)?;

        let request = NewLoanRequest {
            amount: draft.amount,
            term_months: draft.term_months,
            email,
            loan_type_id,
            status: StatusId::PENDING_REVIEW,
        };

        let stored = self.repository.save(request)?;
        info!(loan_request_id = stored.id.0, "loan request persisted");
        Ok(stored)
    }
}

/// Error raised by the submission service.
#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Resolution(#[from] ResolutionError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
