//! Ephemeral preview lookup.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use std::sync::Arc;
use uuid::Uuid;

use crate::state::AppState;
use crate::store::StoredPreview;

#[utoipa::path(
    get,
    path = "/preview/{id}",
    tag = "preview",
    params(
        ("id" = Uuid, Path, description = "Preview identifier issued at generation time")
    ),
    responses(
        (status = 200, description = "HTML page embedding the stored image", content_type = "text/html"),
        (status = 404, description = "Identifier expired or never issued")
    )
)]
#[tracing::instrument(skip(state), fields(operation = "preview_card"))]
pub async fn preview_card(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Response {
    match state.previews.get(&id).await {
        Some(preview) => Html(preview_page(&preview)).into_response(),
        None => {
            tracing::debug!(%id, "Preview miss");
            (StatusCode::NOT_FOUND, "Image not found or expired").into_response()
        }
    }
}

fn preview_page(preview: &StoredPreview) -> String {
    let encoded = BASE64.encode(&preview.payload);
    let generated = preview.created_at_utc.format("%Y-%m-%d %H:%M:%S");
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <title>License Image</title>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <style>
        body {{
            margin: 0;
            background: #f5f5f5;
            display: flex;
            justify-content: center;
            align-items: center;
            min-height: 100vh;
        }}
        .container {{
            background: white;
            border-radius: 10px;
            box-shadow: 0 4px 20px rgba(0,0,0,0.1);
            overflow: hidden;
            max-width: 95%;
        }}
        img {{
            max-width: 100%;
            max-height: 90vh;
            display: block;
        }}
        .info {{
            position: fixed;
            top: 10px;
            right: 10px;
            background: rgba(0,0,0,0.7);
            color: white;
            padding: 10px;
            border-radius: 5px;
            font-size: 12px;
        }}
    </style>
</head>
<body>
    <div class="container">
        <img src="data:image/png;base64,{encoded}" alt="License" />
    </div>
    <div class="info">Generated: {generated}</div>
</body>
</html>
"#
    )
}
