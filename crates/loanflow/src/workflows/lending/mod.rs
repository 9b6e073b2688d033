//! Lending workflows: loan-request submission intake.

pub mod submissions;
