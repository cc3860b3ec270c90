//! # OpenAPI Document Assembly
//!
//! Assembles the utoipa-documented routes into a single OpenAPI document,
//! served at `/openapi.json`.

use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

use crate::state::AppState;

/// Assembled OpenAPI document for the API surface.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Class Forge API",
        description = "Declare data shapes with typed, visibility-tagged properties; store them as canonical documents and readable listings; read, replace, remove and instantiate them by name.",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server"),
    ),
    paths(
        crate::routes::objects::create_object,
        crate::routes::objects::list_objects,
        crate::routes::objects::get_object,
        crate::routes::objects::update_object,
        crate::routes::objects::delete_object,
        crate::routes::objects::instantiate_object,
        crate::routes::objects::object_listing,
    ),
    components(
        schemas(
            forge_core::ObjectDataDto,
            forge_core::PropertyDataDto,
            forge_core::Visibility,
            forge_core::ShapeKind,
            crate::error::ErrorBody,
            crate::error::ErrorDetail,
        )
    ),
    tags(
        (name = "objects", description = "Shape declarations"),
    )
)]
pub struct ApiDoc;

/// Router serving `/openapi.json`.
pub fn router() -> Router<AppState> {
    Router::new().route("/openapi.json", get(openapi_json))
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
