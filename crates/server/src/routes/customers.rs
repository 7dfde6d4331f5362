use axum::{
    extract::{Path, Query},
    Extension, Json,
};
use common::types::Success;
use models::customer;
use sea_orm::DatabaseConnection;
use serde::Deserialize;
use service::customer_service;
use tracing::info;

use crate::errors::ApiError;
use crate::extract::JsonBody;

#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct ListQuery {
    /// Only customers of this business
    pub business: Option<String>,
}

#[utoipa::path(
    get, path = "/api/customers", tag = "customers",
    params(ListQuery),
    responses(
        (status = 200, description = "Customer rows", body = [crate::openapi::CustomerDoc]),
        (status = 500, description = "List Failed", body = crate::openapi::ErrorResponse)
    )
)]
pub async fn list(
    Extension(db): Extension<DatabaseConnection>,
    Query(q): Query<ListQuery>,
) -> Result<Json<Vec<customer::Model>>, ApiError> {
    let rows = customer_service::list_customers(&db, q.business.as_deref()).await?;
    info!(count = rows.len(), business = ?q.business, "list customers");
    Ok(Json(rows))
}

#[utoipa::path(
    post, path = "/api/customers", tag = "customers",
    request_body = crate::openapi::CustomerDoc,
    responses(
        (status = 200, description = "Saved", body = crate::openapi::SuccessResponse),
        (status = 500, description = "Save Failed", body = crate::openapi::ErrorResponse)
    )
)]
pub async fn upsert(
    Extension(db): Extension<DatabaseConnection>,
    JsonBody(input): JsonBody<customer::Model>,
) -> Result<Json<Success>, ApiError> {
    customer_service::save_customer(&db, input).await?;
    Ok(Json(Success::default()))
}

#[utoipa::path(
    delete, path = "/api/customers/{id}", tag = "customers",
    params(("id" = String, Path, description = "Customer id")),
    responses(
        (status = 200, description = "Deleted, or already absent", body = crate::openapi::SuccessResponse),
        (status = 500, description = "Delete Failed", body = crate::openapi::ErrorResponse)
    )
)]
pub async fn delete(
    Extension(db): Extension<DatabaseConnection>,
    Path(id): Path<String>,
) -> Result<Json<Success>, ApiError> {
    customer_service::delete_customer(&db, &id).await?;
    Ok(Json(Success::default()))
}
