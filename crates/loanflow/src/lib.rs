//! Loan origination workflows for the lending platform.
//!
//! The heart of the crate is [`workflows::lending::submissions`]: the
//! submission service validates the referenced loan type, resolves the
//! applicant identity against the applicant directory (reusing an existing
//! applicant or registering a new one), and persists the loan request in its
//! initial pending-review status.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
