use sea_orm::{entity::prelude::*, ConnectionTrait, Set};
use serde::{Deserialize, Serialize};

use crate::{errors::ModelError, upsert::upsert};

/// Value stored in `visit_completed` when the client leaves it out or blank.
pub const VISIT_NOT_COMPLETED: &str = "No";

#[derive(Clone, Debug, PartialEq, Eq, Default, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "customers")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    #[serde(deserialize_with = "crate::de::string_or_number")]
    pub id: String,
    #[serde(default, deserialize_with = "crate::de::opt_scalar")]
    pub customer_no: Option<String>,
    #[serde(default, deserialize_with = "crate::de::opt_scalar")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "crate::de::opt_scalar")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "crate::de::opt_scalar")]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "crate::de::opt_scalar")]
    pub model: Option<String>,
    #[serde(default, deserialize_with = "crate::de::opt_scalar")]
    pub sale_type: Option<String>,
    #[serde(default, deserialize_with = "crate::de::opt_scalar")]
    pub officer_id: Option<String>,
    #[serde(default, deserialize_with = "crate::de::opt_scalar")]
    pub officer_name: Option<String>,
    #[serde(default, deserialize_with = "crate::de::opt_scalar")]
    pub business: Option<String>,
    #[serde(default, deserialize_with = "crate::de::opt_truthy")]
    pub visit_completed: Option<String>,
    #[serde(default, deserialize_with = "crate::de::opt_scalar")]
    pub customer_type: Option<String>,
    #[serde(default, deserialize_with = "crate::de::opt_scalar")]
    pub field_visit_notes: Option<String>,
    #[serde(default, deserialize_with = "crate::de::opt_scalar")]
    pub booking_info: Option<String>,
    #[serde(default, deserialize_with = "crate::de::opt_scalar")]
    pub delivery_info: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        panic!("no relations defined here")
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn visit_completed_or_default(value: Option<String>) -> String {
    value
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| VISIT_NOT_COMPLETED.to_string())
}

/// Every column is set, so an upsert overwrites the whole row.
pub fn to_active(c: Model) -> ActiveModel {
    ActiveModel {
        id: Set(c.id),
        customer_no: Set(c.customer_no),
        name: Set(c.name),
        date: Set(c.date),
        address: Set(c.address),
        model: Set(c.model),
        sale_type: Set(c.sale_type),
        officer_id: Set(c.officer_id),
        officer_name: Set(c.officer_name),
        business: Set(c.business),
        visit_completed: Set(Some(visit_completed_or_default(c.visit_completed))),
        customer_type: Set(c.customer_type),
        field_visit_notes: Set(c.field_visit_notes),
        booking_info: Set(c.booking_info),
        delivery_info: Set(c.delivery_info),
    }
}

pub async fn save<C: ConnectionTrait>(db: &C, customer: Model) -> Result<(), ModelError> {
    upsert(db, to_active(customer)).await
}

pub async fn remove<C: ConnectionTrait>(db: &C, id: &str) -> Result<u64, ModelError> {
    let res = Entity::delete_by_id(id.to_owned()).exec(db).await?;
    Ok(res.rows_affected)
}
