use sea_orm::{DatabaseConnection, EntityTrait};
use tracing::info;

use models::officer;
use crate::errors::ServiceError;

pub async fn list_officers(db: &DatabaseConnection) -> Result<Vec<officer::Model>, ServiceError> {
    Ok(officer::Entity::find().all(db).await?)
}

pub async fn save_officer(db: &DatabaseConnection, input: officer::Model) -> Result<(), ServiceError> {
    let id = input.id.clone();
    officer::save(db, input).await?;
    info!(officer_id = %id, "officer saved");
    Ok(())
}

pub async fn delete_officer(db: &DatabaseConnection, id: &str) -> Result<(), ServiceError> {
    let removed = officer::remove(db, id).await?;
    info!(officer_id = %id, removed, "officer deleted");
    Ok(())
}
