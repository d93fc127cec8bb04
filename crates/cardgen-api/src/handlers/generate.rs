//! Composite card generation endpoint.

use axum::{extract::State, Json};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use cardgen_core::models::identity::IdentityAliases;
use cardgen_core::models::{IdentityFields, PhotoSource};
use cardgen_core::AppError;

use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub name: Option<String>,
    pub address: Option<String>,
    pub date_of_birth: Option<String>,
    /// Accepted alias for `dateOfBirth`, lower priority.
    pub birth_date: Option<String>,
    pub issue_date: Option<String>,
    /// Accepted alias for `issueDate`; takes priority when both are present.
    pub delivery_date: Option<String>,
    pub expiration_date: Option<String>,
    /// Remote link to the reference photo. Takes priority over
    /// `originalImage` when both are present.
    pub original_image_url: Option<String>,
    /// Inline base64 photo, with or without a data-URI prefix.
    pub original_image: Option<String>,
}

impl GenerateRequest {
    fn identity_fields(&self) -> IdentityFields {
        IdentityFields::resolve(IdentityAliases {
            name: self.name.clone(),
            address: self.address.clone(),
            date_of_birth: self.date_of_birth.clone(),
            birth_date: self.birth_date.clone(),
            issue_date: self.issue_date.clone(),
            delivery_date: self.delivery_date.clone(),
            expiration_date: self.expiration_date.clone(),
        })
    }

    fn photo_source(&self) -> Option<PhotoSource> {
        PhotoSource::from_request(self.original_image_url.clone(), self.original_image.clone())
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CompositeStats {
    pub size_bytes: usize,
    /// Canvas dimensions in `WxH` form.
    pub dimensions: String,
    pub format: String,
    pub generated_at: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    pub success: bool,
    pub image_base64: String,
    pub preview_url: String,
    pub message: String,
    pub stats: CompositeStats,
}

#[utoipa::path(
    post,
    path = "/generate-license",
    tag = "composite",
    request_body = GenerateRequest,
    responses(
        (status = 200, description = "Card image generated", body = GenerateResponse),
        (status = 400, description = "Malformed request body", body = ErrorResponse),
        (status = 500, description = "Composition or encoding failed", body = ErrorResponse)
    )
)]
#[tracing::instrument(
    skip(state, request),
    fields(
        operation = "generate_card",
        has_remote = request.original_image_url.is_some(),
        has_inline = request.original_image.is_some(),
    )
)]
pub async fn generate_card(
    State(state): State<Arc<AppState>>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, HttpAppError> {
    let fields = request.identity_fields();
    tracing::info!(name = %fields.name, "Generating card image");

    let photo = state.photos.resolve(request.photo_source()).await;

    let card = state
        .composer
        .compose(&fields, photo)
        .map_err(|e| AppError::ImageProcessing(e.to_string()))?;

    // Only a successful composite is registered for preview.
    let id = state.previews.put(card.bytes.clone()).await;
    let preview_url = format!(
        "{}/preview/{}",
        state.config.public_base_url.trim_end_matches('/'),
        id
    );

    tracing::info!(size_bytes = card.bytes.len(), preview_id = %id, "Card image ready");

    Ok(Json(GenerateResponse {
        success: true,
        image_base64: BASE64.encode(&card.bytes),
        preview_url,
        message: "License image generated successfully".to_string(),
        stats: CompositeStats {
            size_bytes: card.bytes.len(),
            dimensions: card.dimensions(),
            format: card.format.to_string(),
            generated_at: Utc::now().to_rfc3339(),
        },
    }))
}
