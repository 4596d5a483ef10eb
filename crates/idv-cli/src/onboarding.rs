//! Full customer onboarding flow.
//!
//! One linear pass per invocation: create a customer, verify a selfie,
//! run the passive-liveness challenge, classify front and back document
//! pages, persist the crops, then combine extracted age with a
//! face-mask check into an eligibility decision before deleting the
//! customer record.
//!
//! Semantic error codes and quality warnings in otherwise-successful
//! responses abort the flow as data ([`RunOutcome::Aborted`]); only
//! transport and non-2xx failures surface as `Err`. There is no retry
//! and no partial rollback — an aborted run leaves the remote customer
//! record behind, which is accepted for this tool.

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use idv_client::types::{
    CreateDocumentRequest, Customer, Image, LivenessAssertion, LivenessType, PageSide,
};
use idv_client::IdvClient;

use crate::images;

/// Age (in years) from which a customer can be eligible.
pub const ELIGIBILITY_MIN_AGE: u32 = 18;

/// Default mask probability above which the customer counts as masked.
pub const DEFAULT_MASK_THRESHOLD: f64 = 0.6;

/// Environment fallback for the auxiliary mask-check image URL.
pub const ENV_MASK_IMAGE_URL: &str = "IDV_MASK_IMAGE_URL";

/// Arguments for `idv onboard`.
#[derive(Args, Debug, Clone)]
pub struct OnboardArgs {
    /// Selfie image used for face detection and the liveness selfie.
    #[arg(long, default_value = "resources/images/faces/face.jpeg")]
    pub face_image: PathBuf,

    /// Front page of the identity document.
    #[arg(long, default_value = "resources/images/documents/document-front.jpeg")]
    pub document_front: PathBuf,

    /// Back page of the identity document.
    #[arg(long, default_value = "resources/images/documents/document-back.jpeg")]
    pub document_back: PathBuf,

    /// Directory the decoded crops are written into (created if absent).
    #[arg(long, default_value = "onboarding-images")]
    pub output_dir: PathBuf,

    /// Expected document countries, passed as classification advice.
    #[arg(long = "country", default_values_t = [String::from("INO")])]
    pub countries: Vec<String>,

    /// URL of the auxiliary image used for the face-mask check.
    /// Falls back to the IDV_MASK_IMAGE_URL environment variable.
    #[arg(long)]
    pub mask_image_url: Option<String>,

    /// Mask probability threshold for the wearing-mask decision.
    #[arg(long, default_value_t = DEFAULT_MASK_THRESHOLD)]
    pub mask_threshold: f64,
}

/// Terminal state of one flow run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Full flow completed and the customer is eligible.
    Eligible,
    /// Full flow completed; the customer is not eligible.
    NotEligible,
    /// Flow completed without an eligibility decision (document-ocr).
    Completed,
    /// A semantic error code, warning, or missing field stopped the flow.
    Aborted,
}

impl RunOutcome {
    /// Process exit code for this outcome.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Eligible | Self::NotEligible | Self::Completed => 0,
            Self::Aborted => 1,
        }
    }
}

/// Eligibility rule: adult and not wearing a face mask.
pub fn decide_eligibility(age: u32, wearing_mask: bool) -> bool {
    age >= ELIGIBILITY_MIN_AGE && !wearing_mask
}

/// Run the full onboarding flow for one fresh customer.
pub async fn run_onboarding(client: &IdvClient, args: &OnboardArgs) -> anyhow::Result<RunOutcome> {
    let onboarding = client.onboarding();

    let customer_id = onboarding.create_customer().await?.id;
    tracing::info!(customer_id = %customer_id, "customer created");

    // Selfie detection.
    let face_bytes = images::read_image(&args.face_image)?;
    let selfie = onboarding
        .create_selfie(&customer_id, Image::from_bytes(face_bytes.clone()))
        .await?;
    if let Some(code) = selfie.error_code {
        tracing::error!("selfie rejected: {code}");
        return Ok(RunOutcome::Aborted);
    }
    tracing::info!("face detected on selfie");

    // Passive liveness: init, selfie without an active challenge, evaluate.
    onboarding.create_liveness(&customer_id).await?;
    let liveness_selfie = onboarding
        .create_liveness_selfie(
            &customer_id,
            Image::from_bytes(face_bytes),
            LivenessAssertion::None,
        )
        .await?;
    if let Some(warnings) = liveness_selfie
        .warnings
        .as_deref()
        .filter(|w| !w.is_empty())
    {
        for warning in warnings {
            tracing::warn!("liveness selfie warning: {warning}");
        }
        tracing::error!(
            "liveness selfie does not meet the quality required for passive liveness evaluation"
        );
        return Ok(RunOutcome::Aborted);
    }
    if let Some(code) = liveness_selfie.error_code {
        tracing::error!("liveness selfie rejected: {code}");
        return Ok(RunOutcome::Aborted);
    }

    let evaluation = onboarding
        .evaluate_liveness(&customer_id, LivenessType::PassiveLiveness)
        .await?;
    if let Some(code) = evaluation.error_code {
        tracing::error!("passive liveness evaluation failed: {code}");
        return Ok(RunOutcome::Aborted);
    }
    tracing::info!(score = ?evaluation.score, "passive liveness evaluated");

    // Document classification, front then back.
    let advice = CreateDocumentRequest::with_advice(args.countries.clone(), Vec::<String>::new());
    onboarding.create_document(&customer_id, &advice).await?;

    for (label, path) in [
        ("front", &args.document_front),
        ("back", &args.document_back),
    ] {
        let page = onboarding
            .create_document_page(&customer_id, Image::from_bytes(images::read_image(path)?))
            .await?;
        if let Some(code) = page.error_code {
            tracing::error!("document {label} page rejected: {code}");
            return Ok(RunOutcome::Aborted);
        }
        let doc_type = page
            .document_type
            .and_then(|d| d.doc_type)
            .unwrap_or_else(|| "unknown".into());
        let page_type = page.page_type.as_deref().unwrap_or("unknown");
        tracing::info!("document classified: {doc_type} page type: {page_type}");
    }

    // The portrait link only exists when a face was found on the document.
    let record = onboarding.get_customer(&customer_id).await?;
    let customer = record.customer.unwrap_or_default();
    if customer
        .document
        .as_ref()
        .and_then(|d| d.links.portrait.as_ref())
        .is_none()
    {
        tracing::error!("face not found on document portrait");
        return Ok(RunOutcome::Aborted);
    }
    tracing::info!(customer = ?customer, "customer record");

    // Persist crops re-encoded to PNG.
    for (side, file_name) in [
        (PageSide::Front, "document-front.png"),
        (PageSide::Back, "document-back.png"),
    ] {
        let crop = onboarding.document_page_crop(&customer_id, side).await?;
        let path = images::save_crop(&crop.data, &args.output_dir, file_name)?;
        tracing::info!(path = %path.display(), "saved document page crop");
    }
    let portrait = onboarding.document_portrait(&customer_id).await?;
    let path = images::save_crop(&portrait.data, &args.output_dir, "portrait.png")?;
    tracing::info!(path = %path.display(), "saved document portrait");

    let age = extract_age(&customer)?;

    // Mask check runs against an auxiliary hosted image, not the selfie.
    let mask_image_url = args
        .mask_image_url
        .clone()
        .or_else(|| std::env::var(ENV_MASK_IMAGE_URL).ok())
        .context("no mask-check image URL; pass --mask-image-url or set IDV_MASK_IMAGE_URL")?;

    let face_id = match client.faces().detect_face(Image::from_url(mask_image_url)).await {
        Ok(face) => face.id,
        Err(err) => {
            tracing::error!("face detection request failed: {err}");
            return Ok(RunOutcome::Aborted);
        }
    };
    tracing::info!(face_id = %face_id, "face detected");

    let wearing_mask = check_face_mask(client, &face_id, args.mask_threshold).await?;

    let eligible = decide_eligibility(age, wearing_mask);
    if eligible {
        tracing::info!("Customer is eligible");
    } else {
        tracing::info!("Customer is not eligible");
    }

    tracing::info!(customer_id = %customer_id, "deleting customer");
    onboarding.delete_customer(&customer_id).await?;

    Ok(if eligible {
        RunOutcome::Eligible
    } else {
        RunOutcome::NotEligible
    })
}

/// Age as printed in the document's visual zone; non-numeric is fatal.
fn extract_age(customer: &Customer) -> anyhow::Result<u32> {
    let visual_zone = customer
        .age
        .as_ref()
        .and_then(|age| age.visual_zone.as_deref())
        .context("customer record carries no age visual zone")?;
    visual_zone
        .trim()
        .parse()
        .with_context(|| format!("age visual zone is not numeric: {visual_zone:?}"))
}

/// Score the face against the mask threshold.
///
/// A failed mask call is propagated, not swallowed: without a score
/// there is nothing to base the eligibility decision on.
async fn check_face_mask(
    client: &IdvClient,
    face_id: &str,
    threshold: f64,
) -> anyhow::Result<bool> {
    match client.faces().check_face_mask(face_id).await {
        Ok(resp) => {
            let mask_detected = resp.score > threshold;
            tracing::info!(
                score = resp.score,
                "face mask detected on face image: {mask_detected}"
            );
            Ok(mask_detected)
        }
        Err(err) => {
            tracing::error!(
                "mask detection call failed; balanced or accurate detection mode must be enabled"
            );
            Err(err.into())
        }
    }
}
