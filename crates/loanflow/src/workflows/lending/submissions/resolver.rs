use std::sync::Arc;

use tracing::{debug, info};

use super::directory::{ApplicantDirectory, DirectoryError};
use super::domain::{Applicant, ApplicantProfile};

/// Resolves the applicant a submission should be filed under.
///
/// The document pair is the identity key: a directory hit by document is
/// reused as-is, without re-registration or email re-validation. Only when
/// the document is unknown does the email-uniqueness rule apply, and only
/// then may a registration happen.
pub struct ApplicantResolver<D> {
    directory: Arc<D>,
}

impl<D> ApplicantResolver<D>
where
    D: ApplicantDirectory,
{
    pub fn new(directory: Arc<D>) -> Self {
        Self { directory }
    }

    /// Return the existing applicant for the candidate's document, or
    /// register the candidate after checking its email is not already owned
    /// by a different document.
    ///
    /// Performs at most one registration per call and never updates an
    /// existing applicant. Directory failures other than the tagged
    /// not-found outcome propagate unchanged.
    pub fn resolve(&self, candidate: ApplicantProfile) -> Result<Applicant, ResolutionError> {
        if let Some(existing) = self.directory.find_by_document(&candidate.document)? {
            debug!(
                applicant_id = existing.id.0,
                "reusing applicant matched by document"
            );
            return Ok(existing);
        }

        if let Some(owner) = self.directory.find_by_email(&candidate.email)? {
            if owner.profile.document != candidate.document {
                return Err(ResolutionError::EmailInUse {
                    email: candidate.email,
                });
            }
            // Same document behind both lookups: the two independent reads
            // disagreed, so the email counts as available.
            debug!(
                applicant_id = owner.id.0,
                "email owner shares the candidate document, proceeding to registration"
            );
        }

        let registered = self.directory.register(candidate)?;
        info!(applicant_id = registered.id.0, "registered new applicant");
        Ok(registered)
    }
}

/// Failures raised while resolving the applicant identity.
#[derive(Debug, thiserror::Error)]
pub enum ResolutionError {
    #[error("email {email} is already registered under a different document")]
    EmailInUse { email: String },
    #[error(transparent)]
    Directory(#[from] DirectoryError),
}
