use axum::{Extension, Json};
use sea_orm::DatabaseConnection;
use service::init_service::{self, InitData};
use tracing::info;

use crate::errors::ApiError;

#[utoipa::path(
    get, path = "/api/init", tag = "init",
    responses(
        (status = 200, description = "Business names, icons and officers", body = crate::openapi::InitDoc),
        (status = 500, description = "Store failure or missing configuration", body = crate::openapi::ErrorResponse)
    )
)]
pub async fn get_init(Extension(db): Extension<DatabaseConnection>) -> Result<Json<InitData>, ApiError> {
    let data = init_service::load_init_data(&db).await?;
    info!(businesses = data.businesses.len(), officers = data.officers.len(), "init data loaded");
    Ok(Json(data))
}
