//! Document OCR with classification advice — the reduced flow.
//!
//! Creates a customer, narrows classification to one expected
//! country/type pair, submits a single page, dumps the resulting
//! record, and deletes the customer. Same abort policy as the full
//! onboarding flow, narrower scope.

use std::path::PathBuf;

use clap::Args;

use idv_client::types::{CreateDocumentRequest, Image};
use idv_client::IdvClient;

use crate::images;
use crate::onboarding::RunOutcome;

/// Arguments for `idv document-ocr`.
#[derive(Args, Debug, Clone)]
pub struct DocumentOcrArgs {
    /// Document page image to classify.
    #[arg(long, default_value = "resources/images/documents/document-front.jpeg")]
    pub document_image: PathBuf,

    /// Expected document country, passed as classification advice.
    #[arg(long, default_value = "INO")]
    pub country: String,

    /// Expected document type, passed as classification advice.
    #[arg(long = "document-type", default_value = "identity-card")]
    pub doc_type: String,
}

/// Run the reduced document-OCR flow for one fresh customer.
pub async fn run_document_ocr(
    client: &IdvClient,
    args: &DocumentOcrArgs,
) -> anyhow::Result<RunOutcome> {
    let onboarding = client.onboarding();

    let customer_id = onboarding.create_customer().await?.id;
    tracing::info!(customer_id = %customer_id, "customer created");

    let advice =
        CreateDocumentRequest::with_advice([args.country.clone()], [args.doc_type.clone()]);
    onboarding.create_document(&customer_id, &advice).await?;

    let page = onboarding
        .create_document_page(
            &customer_id,
            Image::from_bytes(images::read_image(&args.document_image)?),
        )
        .await?;
    if let Some(code) = page.error_code {
        tracing::error!("document page rejected: {code}");
        return Ok(RunOutcome::Aborted);
    }

    let record = onboarding.get_customer(&customer_id).await?;
    tracing::info!(customer = ?record.customer, "customer record");

    tracing::info!(customer_id = %customer_id, "deleting customer");
    onboarding.delete_customer(&customer_id).await?;

    Ok(RunOutcome::Completed)
}
