use std::sync::Arc;

use super::common::*;
use crate::workflows::lending::submissions::directory::DirectoryError;
use crate::workflows::lending::submissions::domain::{ApplicantId, Document};
use crate::workflows::lending::submissions::resolver::{ApplicantResolver, ResolutionError};

#[test]
fn document_hit_is_reused_without_email_check_or_registration() {
    let directory = Arc::new(MemoryDirectory::default());
    directory.seed(applicant(7, profile()));
    let resolver = ApplicantResolver::new(directory.clone());

    let resolved = resolver
        .resolve(profile_with(
            Document::new("CC", "12345678"),
            "different@example.com",
        ))
        .expect("existing applicant resolves");

    assert_eq!(resolved.id, ApplicantId(7));
    assert_eq!(resolved.profile.email, "juan@example.com");
    assert!(directory.registrations().is_empty());
    assert_eq!(directory.email_lookups(), 0);
}

#[test]
fn unseen_document_and_email_registers_candidate() {
    let directory = Arc::new(MemoryDirectory::default());
    let resolver = ApplicantResolver::new(directory.clone());

    let resolved = resolver.resolve(profile()).expect("registration succeeds");

    assert_eq!(resolved.id, ApplicantId(1));
    assert_eq!(directory.registrations().len(), 1);
    assert_eq!(directory.document_lookups(), 1);
    assert_eq!(directory.email_lookups(), 1);
}

#[test]
fn email_owned_by_different_document_is_a_conflict() {
    let directory = Arc::new(MemoryDirectory::default());
    directory.seed(applicant(
        3,
        profile_with(Document::new("CC", "99999999"), "x@y.com"),
    ));
    let resolver = ApplicantResolver::new(directory.clone());

    match resolver.resolve(profile_with(Document::new("CC", "11111111"), "x@y.com")) {
        Err(ResolutionError::EmailInUse { email }) => assert_eq!(email, "x@y.com"),
        other => panic!("expected email conflict, got {other:?}"),
    }
    assert!(directory.registrations().is_empty());
}

#[test]
fn email_hit_with_same_document_still_registers() {
    // Document lookup misses while the email lookup hits the same identity:
    // the email counts as available and registration proceeds.
    let directory = Arc::new(DocumentBlindDirectory::default());
    directory.seed(applicant(5, profile()));
    let resolver = ApplicantResolver::new(directory.clone());

    let resolved = resolver.resolve(profile()).expect("registration succeeds");

    assert_eq!(directory.registrations().len(), 1);
    assert_eq!(resolved.profile.email, "juan@example.com");
}

#[test]
fn directory_failure_is_not_treated_as_not_found() {
    let resolver = ApplicantResolver::new(Arc::new(UnavailableDirectory));

    match resolver.resolve(profile()) {
        Err(ResolutionError::Directory(DirectoryError::Unavailable(_))) => {}
        other => panic!("expected directory failure to propagate, got {other:?}"),
    }
}
