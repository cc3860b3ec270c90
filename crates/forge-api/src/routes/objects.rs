//! # Object Routes
//!
//! CRUD over shape declarations, plus instantiation and the readable
//! listing. Every route delegates to [`forge_engine::ObjectHandler`].
//!
//! | Method | Path | Result |
//! |---|---|---|
//! | POST | `/api/v1/objects` | 201 + normalized declaration |
//! | GET | `/api/v1/objects` | every declaration |
//! | GET | `/api/v1/objects/:name` | one declaration |
//! | PUT | `/api/v1/objects/:name` | replaced declaration |
//! | DELETE | `/api/v1/objects/:name` | 204 |
//! | GET | `/api/v1/objects/:name/instance` | default instance as JSON |
//! | GET | `/api/v1/objects/:name/listing` | listing as plain text |

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use forge_core::ObjectDataDto;

use crate::error::AppError;
use crate::extractors::extract_validated_json;
use crate::state::AppState;

/// Build the object router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/v1/objects", get(list_objects).post(create_object))
        .route(
            "/api/v1/objects/:name",
            get(get_object).put(update_object).delete(delete_object),
        )
        .route("/api/v1/objects/:name/instance", get(instantiate_object))
        .route("/api/v1/objects/:name/listing", get(object_listing))
}

/// POST /api/v1/objects: Declare a new shape.
#[utoipa::path(
    post,
    path = "/api/v1/objects",
    request_body = ObjectDataDto,
    responses(
        (status = 201, description = "Declaration stored", body = ObjectDataDto),
        (status = 400, description = "Malformed request body", body = crate::error::ErrorBody),
        (status = 409, description = "Name already declared", body = crate::error::ErrorBody),
        (status = 422, description = "Declaration rejected", body = crate::error::ErrorBody),
    ),
    tag = "objects"
)]
async fn create_object(
    State(state): State<AppState>,
    body: Result<Json<ObjectDataDto>, JsonRejection>,
) -> Result<(StatusCode, Json<ObjectDataDto>), AppError> {
    let dto = extract_validated_json(body)?;
    let created = state.handler.add(&dto).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /api/v1/objects: List every declaration.
#[utoipa::path(
    get,
    path = "/api/v1/objects",
    responses(
        (status = 200, description = "All declarations, sorted by name", body = Vec<ObjectDataDto>),
    ),
    tag = "objects"
)]
async fn list_objects(State(state): State<AppState>) -> Result<Json<Vec<ObjectDataDto>>, AppError> {
    Ok(Json(state.handler.get_all().await?))
}

/// GET /api/v1/objects/:name: Read one declaration.
#[utoipa::path(
    get,
    path = "/api/v1/objects/{name}",
    params(("name" = String, Path, description = "Shape name, matched case-insensitively")),
    responses(
        (status = 200, description = "Declaration found", body = ObjectDataDto),
        (status = 404, description = "Not found", body = crate::error::ErrorBody),
    ),
    tag = "objects"
)]
async fn get_object(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<ObjectDataDto>, AppError> {
    state
        .handler
        .get(&name)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("declaration \"{name}\"")))
}

/// PUT /api/v1/objects/:name: Replace a declaration.
#[utoipa::path(
    put,
    path = "/api/v1/objects/{name}",
    params(("name" = String, Path, description = "Shape name")),
    request_body = ObjectDataDto,
    responses(
        (status = 200, description = "Declaration replaced", body = ObjectDataDto),
        (status = 400, description = "Malformed request body", body = crate::error::ErrorBody),
        (status = 404, description = "Not found", body = crate::error::ErrorBody),
        (status = 422, description = "Declaration rejected", body = crate::error::ErrorBody),
    ),
    tag = "objects"
)]
async fn update_object(
    State(state): State<AppState>,
    Path(name): Path<String>,
    body: Result<Json<ObjectDataDto>, JsonRejection>,
) -> Result<Json<ObjectDataDto>, AppError> {
    let dto = extract_validated_json(body)?;
    if dto.name != name {
        return Err(AppError::Validation(format!(
            "path names \"{name}\" but body declares \"{}\"",
            dto.name
        )));
    }
    Ok(Json(state.handler.update(&dto).await?))
}

/// DELETE /api/v1/objects/:name: Remove a declaration.
#[utoipa::path(
    delete,
    path = "/api/v1/objects/{name}",
    params(("name" = String, Path, description = "Shape name, matched case-insensitively")),
    responses(
        (status = 204, description = "Declaration removed"),
        (status = 404, description = "Not found", body = crate::error::ErrorBody),
    ),
    tag = "objects"
)]
async fn delete_object(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<StatusCode, AppError> {
    state.handler.remove(&name).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/objects/:name/instance: Instantiate a declared shape.
///
/// Renders the publicly readable members of a fresh default instance.
#[utoipa::path(
    get,
    path = "/api/v1/objects/{name}/instance",
    params(("name" = String, Path, description = "Shape name, matched case-insensitively")),
    responses(
        (status = 200, description = "Fresh instance", body = serde_json::Value),
        (status = 404, description = "Unknown or not instantiable", body = crate::error::ErrorBody),
    ),
    tag = "objects"
)]
async fn instantiate_object(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    state
        .handler
        .instance_json(&name)
        .await
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("no instantiable declaration \"{name}\"")))
}

/// GET /api/v1/objects/:name/listing: Read the readable listing.
#[utoipa::path(
    get,
    path = "/api/v1/objects/{name}/listing",
    params(("name" = String, Path, description = "Shape name, matched case-insensitively")),
    responses(
        (status = 200, description = "Listing", body = String, content_type = "text/plain"),
        (status = 404, description = "Not found", body = crate::error::ErrorBody),
    ),
    tag = "objects"
)]
async fn object_listing(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let listing = state
        .handler
        .listing(&name)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("listing for \"{name}\"")))?;
    Ok(([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], listing))
}
