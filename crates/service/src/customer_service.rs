use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use tracing::info;

use models::customer;
use crate::errors::ServiceError;

/// List customers, optionally narrowed to one business.
/// An empty business filter is treated as no filter.
pub async fn list_customers(db: &DatabaseConnection, business: Option<&str>) -> Result<Vec<customer::Model>, ServiceError> {
    let mut finder = customer::Entity::find();
    if let Some(b) = business.filter(|b| !b.is_empty()) {
        finder = finder.filter(customer::Column::Business.eq(b));
    }
    let rows = finder.all(db).await?;
    Ok(rows)
}

/// Insert or fully overwrite the customer with the same id.
pub async fn save_customer(db: &DatabaseConnection, input: customer::Model) -> Result<(), ServiceError> {
    let id = input.id.clone();
    customer::save(db, input).await?;
    info!(customer_id = %id, "customer saved");
    Ok(())
}

/// Deleting an unknown id is not an error.
pub async fn delete_customer(db: &DatabaseConnection, id: &str) -> Result<(), ServiceError> {
    let removed = customer::remove(db, id).await?;
    info!(customer_id = %id, removed, "customer deleted");
    Ok(())
}
