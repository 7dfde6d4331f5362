use std::collections::BTreeMap;

use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};
use serde::Serialize;

use models::{business, officer};
use crate::errors::ServiceError;

/// Reference data a client loads once at start-up.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InitData {
    pub businesses: Vec<String>,
    /// Only businesses with a non-empty icon appear here.
    pub icons: BTreeMap<String, String>,
    pub officers: Vec<officer::Model>,
}

impl InitData {
    pub fn assemble(businesses: Vec<business::Model>, officers: Vec<officer::Model>) -> Self {
        let mut names = Vec::with_capacity(businesses.len());
        let mut icons = BTreeMap::new();
        for b in businesses {
            if let Some(icon) = b.icon.filter(|i| !i.is_empty()) {
                icons.insert(b.name.clone(), icon);
            }
            names.push(b.name);
        }
        Self { businesses: names, icons, officers }
    }
}

/// Read all businesses and all officers. The two reads are independent;
/// a write landing between them is not excluded.
pub async fn load_init_data(db: &DatabaseConnection) -> Result<InitData, ServiceError> {
    let businesses = business::Entity::find()
        .order_by_asc(business::Column::Name)
        .all(db)
        .await?;
    let officers = officer::Entity::find().all(db).await?;
    Ok(InitData::assemble(businesses, officers))
}
