use std::collections::HashSet;
use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::workflows::lending::submissions::directory::{ApplicantDirectory, DirectoryError};
use crate::workflows::lending::submissions::domain::{
    Applicant, ApplicantId, ApplicantProfile, Document, LoanRequest, LoanRequestDraft,
    LoanRequestId, LoanTypeId, NewLoanRequest, RoleId,
};
use crate::workflows::lending::submissions::repository::{
    CatalogError, LoanRequestRepository, LoanTypeCatalog, RepositoryError,
};
use crate::workflows::lending::submissions::LoanSubmissionService;

pub(super) fn profile() -> ApplicantProfile {
    ApplicantProfile {
        first_names: "Juan Carlos".to_string(),
        last_names: "García López".to_string(),
        document: Document::new("CC", "12345678"),
        birth_date: NaiveDate::from_ymd_opt(1990, 5, 15).expect("valid date"),
        address: "Calle 123 #45-67".to_string(),
        phone: "3001234567".to_string(),
        email: "juan@example.com".to_string(),
        base_salary: Decimal::from(3_000_000i64),
        role_id: RoleId(2),
    }
}

pub(super) fn profile_with(document: Document, email: &str) -> ApplicantProfile {
    let mut profile = profile();
    profile.document = document;
    profile.email = email.to_string();
    profile
}

pub(super) fn applicant(id: i64, profile: ApplicantProfile) -> Applicant {
    Applicant {
        id: ApplicantId(id),
        profile,
    }
}

pub(super) fn draft() -> LoanRequestDraft {
    LoanRequestDraft {
        amount: Decimal::from(1_000_000i64),
        term_months: 12,
        loan_type_id: Some(LoanTypeId(1)),
    }
}

pub(super) fn build_service() -> (
    LoanSubmissionService<MemoryCatalog, MemoryDirectory, MemoryStore>,
    Arc<MemoryCatalog>,
    Arc<MemoryDirectory>,
    Arc<MemoryStore>,
) {
    let catalog = Arc::new(MemoryCatalog::with_ids([1]));
    let directory = Arc::new(MemoryDirectory::default());
    let store = Arc::new(MemoryStore::default());
    let service = LoanSubmissionService::new(catalog.clone(), directory.clone(), store.clone());
    (service, catalog, directory, store)
}

pub(super) struct MemoryCatalog {
    ids: HashSet<LoanTypeId>,
    queries: AtomicUsize,
}

impl MemoryCatalog {
    pub(super) fn with_ids<I: IntoIterator<Item = i64>>(ids: I) -> Self {
        Self {
            ids: ids.into_iter().map(LoanTypeId).collect(),
            queries: AtomicUsize::new(0),
        }
    }

    pub(super) fn queries(&self) -> usize {
        self.queries.load(Ordering::Relaxed)
    }
}

impl LoanTypeCatalog for MemoryCatalog {
    fn exists(&self, id: LoanTypeId) -> Result<bool, CatalogError> {
        self.queries.fetch_add(1, Ordering::Relaxed);
        Ok(self.ids.contains(&id))
    }
}

#[derive(Default)]
pub(super) struct MemoryDirectory {
    applicants: Mutex<Vec<Applicant>>,
    registrations: Mutex<Vec<Applicant>>,
    document_lookups: AtomicUsize,
    email_lookups: AtomicUsize,
    sequence: AtomicI64,
}

impl MemoryDirectory {
    pub(super) fn seed(&self, applicant: Applicant) {
        self.applicants
            .lock()
            .expect("directory mutex poisoned")
            .push(applicant);
    }

    pub(super) fn registrations(&self) -> Vec<Applicant> {
        self.registrations
            .lock()
            .expect("directory mutex poisoned")
            .clone()
    }

    pub(super) fn document_lookups(&self) -> usize {
        self.document_lookups.load(Ordering::Relaxed)
    }

    pub(super) fn email_lookups(&self) -> usize {
        self.email_lookups.load(Ordering::Relaxed)
    }
}

impl ApplicantDirectory for MemoryDirectory {
    fn find_by_document(
        &self,
        document: &Document,
    ) -> Result<Option<Applicant>, DirectoryError> {
        self.document_lookups.fetch_add(1, Ordering::Relaxed);
        let guard = self.applicants.lock().expect("directory mutex poisoned");
        Ok(guard
            .iter()
            .find(|applicant| applicant.profile.document == *document)
            .cloned())
    }

    fn find_by_email(&self, email: &str) -> Result<Option<Applicant>, DirectoryError> {
        self.email_lookups.fetch_add(1, Ordering::Relaxed);
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
        self.registrations
            .lock()
            .expect("directory mutex poisoned")
            .push(applicant.clone());
        Ok(applicant)
    }
}

/// Directory double whose document index never hits, while email lookups and
/// registration work. Reproduces the two lookups momentarily disagreeing.
#[derive(Default)]
pub(super) struct DocumentBlindDirectory {
    inner: MemoryDirectory,
}

impl DocumentBlindDirectory {
    pub(super) fn seed(&self, applicant: Applicant) {
        self.inner.seed(applicant);
    }

    pub(super) fn registrations(&self) -> Vec<Applicant> {
        self.inner.registrations()
    }
}

impl ApplicantDirectory for DocumentBlindDirectory {
    fn find_by_document(
        &self,
        _document: &Document,
    ) -> Result<Option<Applicant>, DirectoryError> {
        Ok(None)
    }

    fn find_by_email(&self, email: &str) -> Result<Option<Applicant>, DirectoryError> {
        self.inner.find_by_email(email)
    }

    fn register(&self, profile: ApplicantProfile) -> Result<Applicant, DirectoryError> {
        self.inner.register(profile)
    }
}

pub(super) struct UnavailableDirectory;

impl ApplicantDirectory for UnavailableDirectory {
    fn find_by_document(
        &self,
        _document: &Document,
    ) -> Result<Option<Applicant>, DirectoryError> {
        Err(DirectoryError::Unavailable("directory offline".to_string()))
    }

    fn find_by_email(&self, _email: &str) -> Result<Option<Applicant>, DirectoryError> {
        Err(DirectoryError::Unavailable("directory offline".to_string()))
    }

    fn register(&self, _profile: ApplicantProfile) -> Result<Applicant, DirectoryError> {
        Err(DirectoryError::Unavailable("directory offline".to_string()))
    }
}

pub(super) struct UnavailableCatalog;

impl LoanTypeCatalog for UnavailableCatalog {
    fn exists(&self, _id: LoanTypeId) -> Result<bool, CatalogError> {
        Err(CatalogError::Unavailable("catalog offline".to_string()))
    }
}

#[derive(Default)]
pub(super) struct MemoryStore {
    saved: Mutex<Vec<LoanRequest>>,
    sequence: AtomicI64,
}

impl MemoryStore {
    pub(super) fn saved(&self) -> Vec<LoanRequest> {
        self.saved.lock().expect("store mutex poisoned").clone()
    }
}

impl LoanRequestRepository for MemoryStore {
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
        self.saved
            .lock()
            .expect("store mutex poisoned")
            .push(stored.clone());
        Ok(stored)
    }
}

pub(super) struct UnavailableStore;

impl LoanRequestRepository for UnavailableStore {
    fn save(&self, _request: NewLoanRequest) -> Result<LoanRequest, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}
