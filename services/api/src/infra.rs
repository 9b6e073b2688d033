use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

use loanflow::workflows::lending::submissions::{
    Applicant, ApplicantDirectory, ApplicantId, ApplicantProfile, CatalogError, DirectoryError,
    Document, LoanRequest, LoanRequestId, LoanRequestRepository, LoanTypeCatalog, LoanTypeId,
    NewLoanRequest, RepositoryError,
};
use metrics_exporter_prometheus::PrometheusHandle;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Catalog adapter seeded from configuration.
pub(crate) struct InMemoryLoanTypeCatalog {
    ids: HashSet<LoanTypeId>,
}

impl InMemoryLoanTypeCatalog {
    pub(crate) fn with_ids<I: IntoIterator<Item = i64>>(ids: I) -> Self {
        Self {
            ids: ids.into_iter().map(LoanTypeId).collect(),
        }
    }
}

impl LoanTypeCatalog for InMemoryLoanTypeCatalog {
    fn exists(&self, id: LoanTypeId) -> Result<bool, CatalogError> {
        Ok(self.ids.contains(&id))
    }
}

/// Directory adapter assigning identifiers from a process-local sequence.
#[derive(Default)]
pub(crate) struct InMemoryApplicantDirectory {
    applicants: Mutex<Vec<Applicant>>,
    sequence: AtomicI64,
}

impl ApplicantDirectory for InMemoryApplicantDirectory {
    fn find_by_document(
        &self,
        document: &Document,
    ) -> Result<Option<Applicant>, DirectoryError> {
        let guard = self.applicants.lock().expect("directory mutex poisoned");
        Ok(guard
            .iter()
            .find(|applicant| applicant.profile.document == *document)
            .cloned())
    }

    fn find_by_email(&self, email: &str) -> Result<Option<Applicant>, DirectoryError> {
        let guard = self.applicants.lock().expect("directory mutex poisoned");
        Ok(guard
            .iter()
            .find(|applicant| applicant.profile.email == email)
            .cloned())
    }

    fn register(&self, profile: ApplicantProfile) -> Result<Applicant, DirectoryError> {
        let id = ApplicantId(self.sequence.fetch_add(1, Ordering::Relaxed) + 1);
        let applicant = Applicant { id, profile };
        self.applicants
            .lock()
            .expect("directory mutex poisoned")
            .push(applicant.clone());
        Ok(applicant)
    }
}

/// Loan-request store adapter assigning identifiers from a process-local
/// sequence.
#[derive(Default)]
pub(crate) struct InMemoryLoanRequestStore {
    requests: Mutex<Vec<LoanRequest>>,
    sequence: AtomicI64,
}

impl InMemoryLoanRequestStore {
    pub(crate) fn requests(&self) -> Vec<LoanRequest> {
        self.requests.lock().expect("store mutex poisoned").clone()
    }
}

impl LoanRequestRepository for InMemoryLoanRequestStore {
    fn save(&self, request: NewLoanRequest) -> Result<LoanRequest, RepositoryError> {
        let id = LoanRequestId(self.sequence.fetch_add(1, Ordering::Relaxed) + 1);
        let stored = LoanRequest {
            id,
            amount: request.amount,
            term_months: request.term_months,
            email: request.email,
            loan_type_id: request.loan_type_id,
            status: request.status,
        };
        self.requests
            .lock()
            .expect("store mutex poisoned")
            .push(stored.clone());
        Ok(stored)
    }
}
