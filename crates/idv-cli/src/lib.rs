//! # idv-cli — Onboarding Flows Against the Identity Service
//!
//! Provides the `idv` command-line interface. Each subcommand drives a
//! linear sequence of identity-service calls for one throwaway
//! customer record:
//!
//! - `idv onboard` — full onboarding: selfie detection, passive
//!   liveness, document classification with crops, age extraction, and
//!   a face-mask eligibility check.
//! - `idv document-ocr` — reduced flow: classify a single document
//!   page with country/type advice and dump the resulting record.
//!
//! ## Abort Semantics
//!
//! Transport and non-2xx failures surface as errors and end the run.
//! Semantic error codes and quality warnings embedded in successful
//! responses are data: the flow logs them and returns
//! [`RunOutcome::Aborted`] without issuing any dependent call.

pub mod document_ocr;
pub mod images;
pub mod onboarding;

pub use document_ocr::{run_document_ocr, DocumentOcrArgs};
pub use onboarding::{decide_eligibility, run_onboarding, OnboardArgs, RunOutcome};
