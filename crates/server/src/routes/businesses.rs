use axum::{extract::Path, Extension, Json};
use common::types::Success;
use models::business;
use sea_orm::DatabaseConnection;
use service::business_service;

use crate::errors::ApiError;
use crate::extract::JsonBody;

#[utoipa::path(
    post, path = "/api/businesses", tag = "businesses",
    request_body = crate::openapi::BusinessDoc,
    responses(
        (status = 200, description = "Saved", body = crate::openapi::SuccessResponse),
        (status = 500, description = "Save Failed", body = crate::openapi::ErrorResponse)
    )
)]
pub async fn upsert(
    Extension(db): Extension<DatabaseConnection>,
    JsonBody(input): JsonBody<business::Model>,
) -> Result<Json<Success>, ApiError> {
    business_service::save_business(&db, input).await?;
    Ok(Json(Success::default()))
}

#[utoipa::path(
    delete, path = "/api/businesses/{name}", tag = "businesses",
    params(("name" = String, Path, description = "Business name")),
    responses(
        (status = 200, description = "Deleted, or already absent", body = crate::openapi::SuccessResponse),
        (status = 500, description = "Delete Failed", body = crate::openapi::ErrorResponse)
    )
)]
pub async fn delete(
    Extension(db): Extension<DatabaseConnection>,
    Path(name): Path<String>,
) -> Result<Json<Success>, ApiError> {
    business_service::delete_business(&db, &name).await?;
    Ok(Json(Success::default()))
}
