//! Wire models for the identity service API.
//!
//! Field names follow the service's camelCase JSON. Image payloads are
//! carried base64-encoded inside JSON bodies; the `base64_bytes` and
//! `base64_bytes_opt` serde modules handle the encoding transparently
//! so callers work with raw `Vec<u8>`.
//!
//! Semantic error codes and quality warnings are typed enums with an
//! `Unknown` catch-all, so a code this client does not know about still
//! deserializes and still aborts the flow instead of failing decode.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Serde adapter: `Vec<u8>` as a base64 string.
pub(crate) mod base64_bytes {
    use base64::{engine::general_purpose::STANDARD, Engine as _};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&STANDARD.encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        STANDARD.decode(encoded).map_err(serde::de::Error::custom)
    }
}

/// Serde adapter: `Option<Vec<u8>>` as an optional base64 string.
pub(crate) mod base64_bytes_opt {
    use base64::{engine::general_purpose::STANDARD, Engine as _};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        bytes: &Option<Vec<u8>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match bytes {
            Some(b) => serializer.serialize_some(&STANDARD.encode(b)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Vec<u8>>, D::Error> {
        let encoded: Option<String> = Option::deserialize(deserializer)?;
        encoded
            .map(|s| STANDARD.decode(s).map_err(serde::de::Error::custom))
            .transpose()
    }
}

/// An image submitted to the service, either inline or by URL.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    /// Raw image bytes, base64-encoded on the wire.
    #[serde(
        with = "base64_bytes_opt",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub data: Option<Vec<u8>>,
    /// Remote image URL the service fetches itself.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Image {
    /// Inline image from raw bytes.
    pub fn from_bytes(data: impl Into<Vec<u8>>) -> Self {
        Self {
            data: Some(data.into()),
            url: None,
        }
    }

    /// Image by remote URL.
    pub fn from_url(url: impl Into<String>) -> Self {
        Self {
            data: None,
            url: Some(url.into()),
        }
    }
}

// ── Customer lifecycle ──────────────────────────────────────────────────

/// Response to customer creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCustomerResponse {
    /// Server-assigned customer identifier.
    pub id: String,
}

// ── Selfie ──────────────────────────────────────────────────────────────

/// Request body for selfie submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSelfieRequest {
    pub image: Image,
}

/// Semantic error codes for selfie submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SelfieErrorCode {
    NoFaceDetected,
    MultipleFacesDetected,
    InvalidImage,
    /// Any code this client does not recognize; carries the wire value.
    Unknown(String),
}

impl From<String> for SelfieErrorCode {
    fn from(value: String) -> Self {
        match value.as_str() {
            "NO_FACE_DETECTED" => Self::NoFaceDetected,
            "MULTIPLE_FACES_DETECTED" => Self::MultipleFacesDetected,
            "INVALID_IMAGE" => Self::InvalidImage,
            _ => Self::Unknown(value),
        }
    }
}

impl From<SelfieErrorCode> for String {
    fn from(value: SelfieErrorCode) -> Self {
        value.to_string()
    }
}

impl fmt::Display for SelfieErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoFaceDetected => write!(f, "NO_FACE_DETECTED"),
            Self::MultipleFacesDetected => write!(f, "MULTIPLE_FACES_DETECTED"),
            Self::InvalidImage => write!(f, "INVALID_IMAGE"),
            Self::Unknown(code) => f.write_str(code),
        }
    }
}

/// Response to selfie submission.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CreateSelfieResponse {
    /// Set when the selfie could not be used; payload fields are then meaningless.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_code: Option<SelfieErrorCode>,
}

// ── Liveness ────────────────────────────────────────────────────────────

/// Challenge assertion accompanying a liveness selfie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LivenessAssertion {
    /// No active challenge; the selfie is evaluated passively.
    None,
    Smile,
    EyeGaze,
}

/// Request body for a liveness selfie.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLivenessSelfieRequest {
    pub image: Image,
    pub assertion: LivenessAssertion,
}

/// Semantic error codes for liveness selfie submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LivenessSelfieErrorCode {
    NoFaceDetected,
    MultipleFacesDetected,
    InvalidData,
    Unknown(String),
}

impl From<String> for LivenessSelfieErrorCode {
    fn from(value: String) -> Self {
        match value.as_str() {
            "NO_FACE_DETECTED" => Self::NoFaceDetected,
            "MULTIPLE_FACES_DETECTED" => Self::MultipleFacesDetected,
            "INVALID_DATA" => Self::InvalidData,
            _ => Self::Unknown(value),
        }
    }
}

impl From<LivenessSelfieErrorCode> for String {
    fn from(value: LivenessSelfieErrorCode) -> Self {
        value.to_string()
    }
}

impl fmt::Display for LivenessSelfieErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoFaceDetected => write!(f, "NO_FACE_DETECTED"),
            Self::MultipleFacesDetected => write!(f, "MULTIPLE_FACES_DETECTED"),
            Self::InvalidData => write!(f, "INVALID_DATA"),
            Self::Unknown(code) => f.write_str(code),
        }
    }
}

/// Quality warnings for a liveness selfie. Any warning disqualifies the
/// selfie from accurate passive liveness evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LivenessSelfieWarning {
    LowQuality,
    FaceTooClose,
    FaceTooFar,
    EyesClosed,
    Unknown(String),
}

impl From<String> for LivenessSelfieWarning {
    fn from(value: String) -> Self {
        match value.as_str() {
            "LOW_QUALITY" => Self::LowQuality,
            "FACE_TOO_CLOSE" => Self::FaceTooClose,
            "FACE_TOO_FAR" => Self::FaceTooFar,
            "EYES_CLOSED" => Self::EyesClosed,
            _ => Self::Unknown(value),
        }
    }
}

impl From<LivenessSelfieWarning> for String {
    fn from(value: LivenessSelfieWarning) -> Self {
        value.to_string()
    }
}

impl fmt::Display for LivenessSelfieWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LowQuality => write!(f, "LOW_QUALITY"),
            Self::FaceTooClose => write!(f, "FACE_TOO_CLOSE"),
            Self::FaceTooFar => write!(f, "FACE_TOO_FAR"),
            Self::EyesClosed => write!(f, "EYES_CLOSED"),
            Self::Unknown(code) => f.write_str(code),
        }
    }
}

/// Response to a liveness selfie submission.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CreateLivenessSelfieResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_code: Option<LivenessSelfieErrorCode>,
    /// Quality warnings; `None` or empty means the selfie is usable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warnings: Option<Vec<LivenessSelfieWarning>>,
}

/// Liveness evaluation modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LivenessType {
    PassiveLiveness,
    SmileLiveness,
}

/// Request body for liveness evaluation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluateLivenessRequest {
    #[serde(rename = "type")]
    pub liveness_type: LivenessType,
}

/// Semantic error codes for liveness evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EvaluateLivenessErrorCode {
    NotEnoughData,
    InvalidData,
    Unknown(String),
}

impl From<String> for EvaluateLivenessErrorCode {
    fn from(value: String) -> Self {
        match value.as_str() {
            "NOT_ENOUGH_DATA" => Self::NotEnoughData,
            "INVALID_DATA" => Self::InvalidData,
            _ => Self::Unknown(value),
        }
    }
}

impl From<EvaluateLivenessErrorCode> for String {
    fn from(value: EvaluateLivenessErrorCode) -> Self {
        value.to_string()
    }
}

impl fmt::Display for EvaluateLivenessErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotEnoughData => write!(f, "NOT_ENOUGH_DATA"),
            Self::InvalidData => write!(f, "INVALID_DATA"),
            Self::Unknown(code) => f.write_str(code),
        }
    }
}

/// Response to liveness evaluation.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct EvaluateLivenessResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_code: Option<EvaluateLivenessErrorCode>,
    /// Liveness score in `[0, 1]`; absent when `error_code` is set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

// ── Document ────────────────────────────────────────────────────────────

/// Classification hint narrowing expected document countries/types.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct DocumentClassificationAdvice {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub countries: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub types: Vec<String>,
}

/// Document advice wrapper.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct DocumentAdvice {
    pub classification: DocumentClassificationAdvice,
}

/// Request body for declaring the expected document.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CreateDocumentRequest {
    pub advice: DocumentAdvice,
}

impl CreateDocumentRequest {
    /// Advice narrowing classification to the given countries and types.
    pub fn with_advice(
        countries: impl IntoIterator<Item = impl Into<String>>,
        types: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            advice: DocumentAdvice {
                classification: DocumentClassificationAdvice {
                    countries: countries.into_iter().map(Into::into).collect(),
                    types: types.into_iter().map(Into::into).collect(),
                },
            },
        }
    }
}

/// Request body for submitting a document page image.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDocumentPageRequest {
    pub image: Image,
}

/// Classified document type as returned by the service.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct DocumentType {
    /// Type slug, e.g. `identity-card`.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub doc_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edition: Option<String>,
}

/// Semantic error codes for document page submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DocumentPageErrorCode {
    DocumentNotRecognized,
    PageDoesntMatchDocument,
    NoCardCornersDetected,
    Unknown(String),
}

impl From<String> for DocumentPageErrorCode {
    fn from(value: String) -> Self {
        match value.as_str() {
            "DOCUMENT_NOT_RECOGNIZED" => Self::DocumentNotRecognized,
            "PAGE_DOESNT_MATCH_DOCUMENT" => Self::PageDoesntMatchDocument,
            "NO_CARD_CORNERS_DETECTED" => Self::NoCardCornersDetected,
            _ => Self::Unknown(value),
        }
    }
}

impl From<DocumentPageErrorCode> for String {
    fn from(value: DocumentPageErrorCode) -> Self {
        value.to_string()
    }
}

impl fmt::Display for DocumentPageErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DocumentNotRecognized => write!(f, "DOCUMENT_NOT_RECOGNIZED"),
            Self::PageDoesntMatchDocument => write!(f, "PAGE_DOESNT_MATCH_DOCUMENT"),
            Self::NoCardCornersDetected => write!(f, "NO_CARD_CORNERS_DETECTED"),
            Self::Unknown(code) => f.write_str(code),
        }
    }
}

/// Response to document page submission.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CreateDocumentPageResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_code: Option<DocumentPageErrorCode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_type: Option<DocumentType>,
    /// Which side of the document the page was classified as, e.g. `front`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_type: Option<String>,
}

/// Document page side, used for crop retrieval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSide {
    Front,
    Back,
}

impl PageSide {
    /// Path segment the service expects.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Front => "front",
            Self::Back => "back",
        }
    }
}

impl fmt::Display for PageSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Customer record ─────────────────────────────────────────────────────

/// Links published on a customer's document.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct DocumentLinks {
    /// Present only when the service found a face on the document.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub portrait: Option<String>,
}

/// Document section of a customer record.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDocument {
    #[serde(default)]
    pub links: DocumentLinks,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_type: Option<DocumentType>,
}

/// Age fields extracted from the document.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CustomerAge {
    /// Age as printed in the document's visual zone.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visual_zone: Option<String>,
    /// Age as read from the machine-readable zone, when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mrz: Option<String>,
}

/// Full customer record mirrored from the service.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document: Option<CustomerDocument>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<CustomerAge>,
}

/// Envelope around a customer record fetch.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GetCustomerResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer: Option<Customer>,
}

/// A cropped sub-image extracted by the service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageCrop {
    /// Raw image bytes, base64-encoded on the wire.
    #[serde(with = "base64_bytes")]
    pub data: Vec<u8>,
}

// ── Face operations ─────────────────────────────────────────────────────

/// Request body for standalone face detection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFaceRequest {
    pub image: Image,
}

/// Response to face detection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFaceResponse {
    /// Server-assigned face identifier.
    pub id: String,
}

/// Response to a face-mask check.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaceMaskResponse {
    /// Mask probability in `[0, 1]`.
    pub score: f64,
}
