use super::domain::{LoanRequest, LoanTypeId, NewLoanRequest};

/// Loan-type catalog lookup collaborator.
pub trait LoanTypeCatalog: Send + Sync {
    /// Report whether the catalog knows the identifier.
    fn exists(&self, id: LoanTypeId) -> Result<bool, CatalogError>;
}

/// Failures surfaced by the loan-type catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("loan type catalog unavailable: {0}")]
    Unavailable(String),
}

/// Storage abstraction for persisted loan requests.
pub trait LoanRequestRepository: Send + Sync {
    /// Persist a fully assembled request; the store assigns the identifier.
    fn save(&self, request: NewLoanRequest) -> Result<LoanRequest, RepositoryError>;
}

/// Failures surfaced by the loan-request store.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("loan request store unavailable: {0}")]
    Unavailable(String),
}
