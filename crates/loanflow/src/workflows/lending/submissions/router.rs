use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::error;

use super::directory::ApplicantDirectory;
use super::domain::{
    Applicant, ApplicantProfile, Document, LoanRequestDraft, LoanTypeId, RoleId,
};
use super::repository::{LoanRequestRepository, LoanTypeCatalog};
use super::resolver::ResolutionError;
use super::service::{LoanSubmissionService, Submission, SubmissionError};
use super::validation::ValidationError;

/// Router builder exposing the HTTP endpoint for loan-request submission.
pub fn submission_router<C, D, R>(service: Arc<LoanSubmissionService<C, D, R>>) -> Router
where
    C: LoanTypeCatalog + 'static,
    D: ApplicantDirectory + 'static,
    R: LoanRequestRepository + 'static,
{
    Router::new()
        .route("/api/v1/loan-requests", post(submit_handler::<C, D, R>))
        .with_state(service)
}

/// Inbound payload for a submission: loan terms plus the applicant data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitLoanRequest {
    pub amount: Decimal,
    pub term_months: u32,
    pub loan_type_id: Option<i64>,
    /// Ignored when present; the initial status is never caller-controlled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_id: Option<i64>,
    pub applicant: ApplicantPayload,
}

/// Applicant portion of the submission payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicantPayload {
    pub first_names: String,
    pub last_names: String,
    pub document_type: String,
    pub document_number: String,
    pub email: String,
    pub birth_date: NaiveDate,
    pub address: String,
    pub phone: String,
    pub base_salary: Decimal,
    pub role_id: i64,
}

impl From<ApplicantPayload> for ApplicantProfile {
    fn from(payload: ApplicantPayload) -> Self {
        ApplicantProfile {
            first_names: payload.first_names,
            last_names: payload.last_names,
            document: Document::new(payload.document_type, payload.document_number),
            birth_date: payload.birth_date,
            address: payload.address,
            phone: payload.phone,
            email: payload.email,
            base_salary: payload.base_salary,
            role_id: RoleId(payload.role_id),
        }
    }
}

/// Outbound view of a stored submission.
#[derive(Debug, Serialize)]
pub struct SubmissionView {
    pub loan_request_id: i64,
    pub amount: Decimal,
    pub term_months: u32,
    pub email: String,
    pub loan_type_id: i64,
    pub status_id: i64,
    pub status: &'static str,
    pub applicant: ApplicantView,
}

/// Applicant portion of the submission view.
#[derive(Debug, Serialize)]
pub struct ApplicantView {
    pub applicant_id: i64,
    pub first_names: String,
    pub last_names: String,
    pub birth_date: NaiveDate,
    pub address: String,
    pub phone: String,
    pub base_salary: Decimal,
}

impl From<Applicant> for ApplicantView {
    fn from(applicant: Applicant) -> Self {
        ApplicantView {
            applicant_id: applicant.id.0,
            first_names: applicant.profile.first_names,
            last_names: applicant.profile.last_names,
            birth_date: applicant.profile.birth_date,
            address: applicant.profile.address,
            phone: applicant.profile.phone,
            base_salary: applicant.profile.base_salary,
        }
    }
}

impl From<Submission> for SubmissionView {
    fn from(submission: Submission) -> Self {
        let Submission {
            loan_request,
            applicant,
        } = submission;
        SubmissionView {
            loan_request_id: loan_request.id.0,
            amount: loan_request.amount,
            term_months: loan_request.term_months,
            email: loan_request.email,
            loan_type_id: loan_request.loan_type_id.0,
            status_id: loan_request.status.0,
            status: loan_request.status.label(),
            applicant: ApplicantView::from(applicant),
        }
    }
}

pub(crate) async fn submit_handler<C, D, R>(
    State(service): State<Arc<LoanSubmissionService<C, D, R>>>,
    axum::Json(request): axum::Json<SubmitLoanRequest>,
) -> Response
where
    C: LoanTypeCatalog + 'static,
    D: ApplicantDirectory + 'static,
    R: LoanRequestRepository + 'static,
{
    let SubmitLoanRequest {
        amount,
        term_months,
        loan_type_id,
        status_id: _,
        applicant,
    } = request;

    let draft = LoanRequestDraft {
        amount,
        term_months,
        loan_type_id: loan_type_id.map(LoanTypeId),
    };

    match service.submit(applicant.into(), draft) {
        Ok(submission) => {
            let view = SubmissionView::from(submission);
            (StatusCode::CREATED, axum::Json(view)).into_response()
        }
        Err(SubmissionError::Validation(ValidationError::Catalog(error))) => {
            upstream_failure(&error)
        }
        Err(SubmissionError::Validation(error)) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response()
        }
        Err(SubmissionError::Resolution(ResolutionError::Directory(error))) => {
            upstream_failure(&error)
        }
        Err(SubmissionError::Resolution(error)) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::CONFLICT, axum::Json(payload)).into_response()
        }
        Err(SubmissionError::Repository(error)) => upstream_failure(&error),
    }
}

// Upstream detail goes to the log, never to the caller.
fn upstream_failure(error: &dyn std::error::Error) -> Response {
    error!(error = %error, "loan request submission failed");
    let payload = json!({
        "error": "internal server error",
    });
    (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
}
