//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::error;
use crate::handlers;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Cardgen API",
        version = "0.1.0",
        description = "License card composite image generator. Renders identity fields and a reference photo into a fixed-layout PNG and exposes the result through short-lived preview links."
    ),
    paths(
        handlers::generate::generate_card,
        handlers::preview::preview_card,
        handlers::health::health,
    ),
    components(schemas(
        handlers::generate::GenerateRequest,
        handlers::generate::GenerateResponse,
        handlers::generate::CompositeStats,
        handlers::health::HealthResponse,
        error::ErrorResponse,
    )),
    tags(
        (name = "composite", description = "Composite card image generation"),
        (name = "preview", description = "Ephemeral preview lookup"),
        (name = "health", description = "Service health")
    )
)]
pub struct ApiDoc;
