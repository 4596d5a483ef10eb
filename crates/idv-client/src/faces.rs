//! Standalone face operation endpoints.
//!
//! Face detection creates a server-side face entity from an image
//! (inline bytes or URL); the returned face id is then used for
//! follow-up checks such as face-mask scoring.

use crate::client::IdvClient;
use crate::error::IdvApiError;
use crate::types::{CreateFaceRequest, CreateFaceResponse, FaceMaskResponse, Image};

/// Facade over the `/faces` endpoint family.
#[derive(Debug, Clone, Copy)]
pub struct FaceOperationsClient<'a> {
    client: &'a IdvClient,
}

impl<'a> FaceOperationsClient<'a> {
    pub(crate) fn new(client: &'a IdvClient) -> Self {
        Self { client }
    }

    /// Detect a face on the given image, returning the face id.
    pub async fn detect_face(&self, image: Image) -> Result<CreateFaceResponse, IdvApiError> {
        let body = CreateFaceRequest { image };
        self.client.post_json("/faces", &body, "detect_face").await
    }

    /// Score the probability that the face is wearing a mask.
    ///
    /// Requires balanced or accurate detection mode on the service
    /// side; a fast-mode deployment rejects this call.
    pub async fn check_face_mask(&self, face_id: &str) -> Result<FaceMaskResponse, IdvApiError> {
        let path = format!("/faces/{face_id}/face-mask");
        self.client.get_json(&path, "check_face_mask").await
    }
}
