use crate::infra::{
    InMemoryApplicantDirectory, InMemoryLoanRequestStore, InMemoryLoanTypeCatalog,
};
use chrono::NaiveDate;
use clap::Args;
use rust_decimal::Decimal;
use std::sync::Arc;
use loanflow::error::AppError;
use loanflow::workflows::lending::submissions::{
    ApplicantProfile, Document, LoanRequestDraft, LoanSubmissionService, LoanTypeId,
    ResolutionError, RoleId, SubmissionError,
};

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Loan type seeded into the catalog and referenced by the demo drafts
    #[arg(long, default_value_t = 1)]
    pub(crate) loan_type_id: i64,
    /// Amount for the demo loan requests
    #[arg(long, default_value = "1000000")]
    pub(crate) amount: Decimal,
    /// Term in months for the demo loan requests
    #[arg(long, default_value_t = 12)]
    pub(crate) term_months: u32,
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        loan_type_id,
        amount,
        term_months,
    } = args;

    let catalog = Arc::new(InMemoryLoanTypeCatalog::with_ids([loan_type_id]));
    let directory = Arc::new(InMemoryApplicantDirectory::default());
    let store = Arc::new(InMemoryLoanRequestStore::default());
    let service = LoanSubmissionService::new(catalog, directory, store.clone());

    let draft = LoanRequestDraft {
        amount,
        term_months,
        loan_type_id: Some(LoanTypeId(loan_type_id)),
    };

    println!("== Loan-request submission demo ==");

    println!("\n-- First submission: unseen document, unseen email --");
    let first = service.submit(
        demo_applicant("CC", "12345678", "juan@example.com"),
        draft.clone(),
    )?;
    println!(
        "registered applicant {} and persisted loan request {} (status {})",
        first.applicant.id.0,
        first.loan_request.id.0,
        first.loan_request.status.label(),
    );

    println!("\n-- Repeat submission: same document, different email --");
    let repeat = service.submit(
        demo_applicant("CC", "12345678", "other@example.com"),
        draft.clone(),
    )?;
    println!(
        "reused applicant {} (no second registration); loan request {} carries email {}",
        repeat.applicant.id.0, repeat.loan_request.id.0, repeat.loan_request.email,
    );

    println!("\n-- Conflicting submission: new document, already-owned email --");
    match service.submit(demo_applicant("CC", "11111111", "juan@example.com"), draft.clone()) {
        Err(SubmissionError::Resolution(error @ ResolutionError::EmailInUse { .. })) => {
            println!("rejected as expected: {error}");
        }
        Ok(_) => println!("unexpectedly accepted the conflicting submission"),
        Err(other) => return Err(other.into()),
    }

    println!("\n-- Direct registration: known contact email, no resolution --");
    let direct = service.register("direct@example.com".to_string(), draft)?;
    println!(
        "persisted loan request {} for direct@example.com (status {})",
        direct.id.0,
        direct.status.label(),
    );

    println!(
        "\n{} loan requests persisted in total",
        store.requests().len()
    );

    Ok(())
}

fn demo_applicant(document_type: &str, number: &str, email: &str) -> ApplicantProfile {
    ApplicantProfile {
        first_names: "Juan Carlos".to_string(),
        last_names: "García López".to_string(),
        document: Document::new(document_type, number),
        birth_date: NaiveDate::from_ymd_opt(1990, 5, 15).expect("valid date"),
        address: "Calle 123 #45-67".to_string(),
        phone: "3001234567".to_string(),
        email: email.to_string(),
        base_salary: Decimal::from(3_000_000i64),
        role_id: RoleId(2),
    }
}
