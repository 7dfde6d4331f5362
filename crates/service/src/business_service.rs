use sea_orm::DatabaseConnection;
use tracing::info;

use models::business;
use crate::errors::ServiceError;

/// Create the business or replace its icon.
pub async fn save_business(db: &DatabaseConnection, input: business::Model) -> Result<(), ServiceError> {
    let name = input.name.clone();
    business::save(db, input).await?;
    info!(business = %name, "business saved");
    Ok(())
}

/// Delete by name. Officers and customers naming it are left alone.
pub async fn delete_business(db: &DatabaseConnection, name: &str) -> Result<(), ServiceError> {
    let removed = business::remove(db, name).await?;
    info!(business = %name, removed, "business deleted");
    Ok(())
}
