use std::sync::Arc;

use super::domain::LoanTypeId;
use super::repository::{CatalogError, LoanTypeCatalog};

/// Fail-fast existence check for the referenced loan type.
///
/// Runs before applicant resolution so an invalid product reference never
/// triggers an external registration or a write.
pub struct LoanTypeValidator<C> {
    catalog: Arc<C>,
}

impl<C> LoanTypeValidator<C>
where
    C: LoanTypeCatalog,
{
    pub fn new(catalog: Arc<C>) -> Self {
        Self { catalog }
    }

    /// Resolve the draft's loan-type reference or fail.
    ///
    /// A missing identifier is treated as non-existent without querying the
    /// catalog. Catalog transport failures propagate unchanged.
    pub fn validate(&self, id: Option<LoanTypeId>) -> Result<LoanTypeId, ValidationError> {
        let Some(id) = id else {
            return Err(ValidationError::MissingLoanType);
        };

        if self.catalog.exists(id)? {
            Ok(id)
        } else {
            Err(ValidationError::UnknownLoanType(id))
        }
    }
}

/// Validation failures for the loan-type reference.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("loan request is missing a loan type")]
    MissingLoanType,
    #[error("loan type {0} does not exist")]
    UnknownLoanType(LoanTypeId),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
