//! # idv-client — Typed HTTP Client for the Identity-Verification Service
//!
//! Async client for the remote identity service used by the onboarding
//! flows: customer lifecycle, selfie and liveness submission, document
//! classification and crops, face detection, and face-mask scoring.
//!
//! ## Architecture
//!
//! [`IdvClient`] wraps a single `reqwest::Client` carrying the bearer
//! token and per-request timeout. Endpoint groups are exposed through
//! facades: [`IdvClient::onboarding`] for the customer onboarding API
//! and [`IdvClient::faces`] for standalone face operations.
//!
//! ## Error Handling
//!
//! Every call returns `Result<T, IdvApiError>`. Transport failures,
//! non-2xx statuses (with response body excerpt), and deserialization
//! failures are distinct variants. Semantic error codes embedded in
//! otherwise-successful responses are NOT errors at this layer — they
//! are data, surfaced through the typed response structs for the
//! caller to branch on.

pub mod client;
pub mod config;
pub mod error;
pub mod faces;
pub mod onboarding;
pub mod types;

pub use client::IdvClient;
pub use config::{ConfigError, IdvApiConfig};
pub use error::IdvApiError;
pub use faces::FaceOperationsClient;
pub use onboarding::OnboardingClient;
