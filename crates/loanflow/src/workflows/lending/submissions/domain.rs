use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Identifier assigned to an applicant by the applicant directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ApplicantId(pub i64);

/// Identifier assigned to a loan request by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LoanRequestId(pub i64);

/// Reference into the loan-type catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LoanTypeId(pub i64);

impl fmt::Display for LoanTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Reference into the status catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StatusId(pub i64);

impl StatusId {
    /// Reserved initial status every newly persisted loan request receives.
    pub const PENDING_REVIEW: StatusId = StatusId(1);

    pub const fn label(self) -> &'static str {
        match self.0 {
            1 => "pending_review",
            _ => "unknown",
        }
    }
}

/// Role reference carried with the applicant payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoleId(pub i64);

/// Natural identity key for an applicant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub document_type: String,
    pub number: String,
}

impl Document {
    pub fn new(document_type: impl Into<String>, number: impl Into<String>) -> Self {
        Self {
            document_type: document_type.into(),
            number: number.into(),
        }
    }
}

/// Applicant data as submitted, before the directory has assigned an
/// identifier. Never mutated after registration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicantProfile {
    pub first_names: String,
    pub last_names: String,
    pub document: Document,
    pub birth_date: NaiveDate,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub base_salary: Decimal,
    pub role_id: RoleId,
}

/// A directory-registered applicant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Applicant {
    pub id: ApplicantId,
    pub profile: ApplicantProfile,
}

/// Caller-supplied portion of a loan request. Carries no status field: the
/// initial status is never caller-controlled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanRequestDraft {
    pub amount: Decimal,
    pub term_months: u32,
    pub loan_type_id: Option<LoanTypeId>,
}

/// Fully assembled loan request, ready for persistence. The email is a
/// denormalized snapshot of the applicant's contact address, not an
/// identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewLoanRequest {
    pub amount: Decimal,
    pub term_months: u32,
    pub email: String,
    pub loan_type_id: LoanTypeId,
    pub status: StatusId,
}

/// Persisted loan request as returned by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanRequest {
    pub id: LoanRequestId,
    pub amount: Decimal,
    pub term_months: u32,
    pub email: String,
    pub loan_type_id: LoanTypeId,
    pub status: StatusId,
}
