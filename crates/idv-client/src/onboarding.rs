//! Customer onboarding endpoints.
//!
//! Covers the customer lifecycle (create/fetch/delete), selfie and
//! liveness submission, document classification, and crop retrieval.
//! Each method maps one REST call; semantic error codes inside the
//! responses are returned as data, not as `Err`.

use crate::client::IdvClient;
use crate::error::IdvApiError;
use crate::types::{
    CreateCustomerResponse, CreateDocumentPageRequest, CreateDocumentPageResponse,
    CreateDocumentRequest, CreateLivenessSelfieRequest, CreateLivenessSelfieResponse,
    CreateSelfieRequest, CreateSelfieResponse, EvaluateLivenessRequest, EvaluateLivenessResponse,
    GetCustomerResponse, Image, ImageCrop, LivenessAssertion, LivenessType, PageSide,
};

/// Facade over the `/customers` endpoint family.
#[derive(Debug, Clone, Copy)]
pub struct OnboardingClient<'a> {
    client: &'a IdvClient,
}

impl<'a> OnboardingClient<'a> {
    pub(crate) fn new(client: &'a IdvClient) -> Self {
        Self { client }
    }

    /// Create a new (empty) customer record, returning its identifier.
    pub async fn create_customer(&self) -> Result<CreateCustomerResponse, IdvApiError> {
        self.client
            .post_empty_json("/customers", "create_customer")
            .await
    }

    /// Submit a selfie image for face detection.
    pub async fn create_selfie(
        &self,
        customer_id: &str,
        image: Image,
    ) -> Result<CreateSelfieResponse, IdvApiError> {
        let path = format!("/customers/{customer_id}/selfie");
        let body = CreateSelfieRequest { image };
        self.client.put_json(&path, &body, "create_selfie").await
    }

    /// Initialize a liveness record for the customer.
    pub async fn create_liveness(&self, customer_id: &str) -> Result<(), IdvApiError> {
        let path = format!("/customers/{customer_id}/liveness");
        self.client.put_empty(&path, "create_liveness").await
    }

    /// Submit a selfie toward the liveness challenge.
    pub async fn create_liveness_selfie(
        &self,
        customer_id: &str,
        image: Image,
        assertion: LivenessAssertion,
    ) -> Result<CreateLivenessSelfieResponse, IdvApiError> {
        let path = format!("/customers/{customer_id}/liveness/selfies");
        let body = CreateLivenessSelfieRequest { image, assertion };
        self.client
            .post_json(&path, &body, "create_liveness_selfie")
            .await
    }

    /// Evaluate liveness from the submitted selfies.
    pub async fn evaluate_liveness(
        &self,
        customer_id: &str,
        liveness_type: LivenessType,
    ) -> Result<EvaluateLivenessResponse, IdvApiError> {
        let path = format!("/customers/{customer_id}/liveness/evaluation");
        let body = EvaluateLivenessRequest { liveness_type };
        self.client
            .post_json(&path, &body, "evaluate_liveness")
            .await
    }

    /// Declare the expected document (classification advice).
    pub async fn create_document(
        &self,
        customer_id: &str,
        request: &CreateDocumentRequest,
    ) -> Result<(), IdvApiError> {
        let path = format!("/customers/{customer_id}/document");
        self.client.put_unit(&path, request, "create_document").await
    }

    /// Submit one document page image for classification and OCR.
    pub async fn create_document_page(
        &self,
        customer_id: &str,
        image: Image,
    ) -> Result<CreateDocumentPageResponse, IdvApiError> {
        let path = format!("/customers/{customer_id}/document/pages");
        let body = CreateDocumentPageRequest { image };
        self.client
            .put_json(&path, &body, "create_document_page")
            .await
    }

    /// Fetch the full customer record.
    pub async fn get_customer(&self, customer_id: &str) -> Result<GetCustomerResponse, IdvApiError> {
        let path = format!("/customers/{customer_id}");
        self.client.get_json(&path, "get_customer").await
    }

    /// Fetch the cropped image of one document page.
    pub async fn document_page_crop(
        &self,
        customer_id: &str,
        side: PageSide,
    ) -> Result<ImageCrop, IdvApiError> {
        let path = format!("/customers/{customer_id}/document/pages/{side}/crop");
        self.client.get_json(&path, "document_page_crop").await
    }

    /// Fetch the portrait cropped from the document.
    pub async fn document_portrait(&self, customer_id: &str) -> Result<ImageCrop, IdvApiError> {
        let path = format!("/customers/{customer_id}/document/portrait");
        self.client.get_json(&path, "document_portrait").await
    }

    /// Delete the customer record and everything attached to it.
    pub async fn delete_customer(&self, customer_id: &str) -> Result<(), IdvApiError> {
        let path = format!("/customers/{customer_id}");
        self.client.delete(&path, "delete_customer").await
    }
}
