use super::domain::{Applicant, ApplicantProfile, Document};

/// Applicant directory abstraction so identity resolution can be exercised
/// in isolation.
///
/// `Ok(None)` from the lookups is the tagged not-found outcome that drives
/// the registration branch; any `Err` is an upstream failure and must not be
/// treated as not-found.
pub trait ApplicantDirectory: Send + Sync {
    /// Look up an applicant by its natural document key.
    fn find_by_document(&self, document: &Document)
        -> Result<Option<Applicant>, DirectoryError>;

    /// Look up the applicant owning a contact email, if any.
    fn find_by_email(&self, email: &str) -> Result<Option<Applicant>, DirectoryError>;

    /// Register a new applicant; the directory assigns the identifier.
    fn register(&self, profile: ApplicantProfile) -> Result<Applicant, DirectoryError>;
}

/// Failures surfaced by the applicant directory.
#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    #[error("applicant directory rejected the registration: {0}")]
    Rejected(String),
    #[error("applicant directory unavailable: {0}")]
    Unavailable(String),
}
