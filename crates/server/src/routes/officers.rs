use axum::{extract::Path, Extension, Json};
use common::types::Success;
use models::officer;
use sea_orm::DatabaseConnection;
use service::officer_service;
use tracing::info;

use crate::errors::ApiError;
use crate::extract::JsonBody;

#[utoipa::path(
    get, path = "/api/officers", tag = "officers",
    responses(
        (status = 200, description = "Officer rows", body = [crate::openapi::OfficerDoc]),
        (status = 500, description = "List Failed", body = crate::openapi::ErrorResponse)
    )
)]
pub async fn list(Extension(db): Extension<DatabaseConnection>) -> Result<Json<Vec<officer::Model>>, ApiError> {
    let rows = officer_service::list_officers(&db).await?;
    info!(count = rows.len(), "list officers");
    Ok(Json(rows))
}

#[utoipa::path(
    post, path = "/api/officers", tag = "officers",
    request_body = crate::openapi::OfficerDoc,
    responses(
        (status = 200, description = "Saved", body = crate::openapi::SuccessResponse),
        (status = 500, description = "Save Failed", body = crate::openapi::ErrorResponse)
    )
)]
pub async fn upsert(
    Extension(db): Extension<DatabaseConnection>,
    JsonBody(input): JsonBody<officer::Model>,
) -> Result<Json<Success>, ApiError> {
    officer_service::save_officer(&db, input).await?;
    Ok(Json(Success::default()))
}

#[utoipa::path(
    delete, path = "/api/officers/{id}", tag = "officers",
    params(("id" = String, Path, description = "Officer id")),
    responses(
        (status = 200, description = "Deleted, or already absent", body = crate::openapi::SuccessResponse),
        (status = 500, description = "Delete Failed", body = crate::openapi::ErrorResponse)
    )
)]
pub async fn delete(
    Extension(db): Extension<DatabaseConnection>,
    Path(id): Path<String>,
) -> Result<Json<Success>, ApiError> {
    officer_service::delete_officer(&db, &id).await?;
    Ok(Json(Success::default()))
}
