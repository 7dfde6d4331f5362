use sea_orm::{entity::prelude::*, ConnectionTrait, Set};
use serde::{Deserialize, Serialize};

use crate::{errors::ModelError, upsert::upsert};

#[derive(Clone, Debug, PartialEq, Eq, Default, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "businesses")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    #[serde(deserialize_with = "crate::de::string_or_number")]
    pub name: String,
    #[serde(default, deserialize_with = "crate::de::opt_scalar")]
    pub icon: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        panic!("no relations defined here")
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn to_active(b: Model) -> ActiveModel {
    ActiveModel {
        name: Set(b.name),
        icon: Set(b.icon),
    }
}

/// Insert the business, or replace the icon of the one with the same name.
pub async fn save<C: ConnectionTrait>(db: &C, business: Model) -> Result<(), ModelError> {
    upsert(db, to_active(business)).await
}

/// Returns the number of rows removed (0 when the name was unknown).
pub async fn remove<C: ConnectionTrait>(db: &C, name: &str) -> Result<u64, ModelError> {
    let res = Entity::delete_by_id(name.to_owned()).exec(db).await?;
    Ok(res.rows_affected)
}
