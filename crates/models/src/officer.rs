use sea_orm::{entity::prelude::*, ConnectionTrait, Set};
use serde::{Deserialize, Serialize};

use crate::{errors::ModelError, upsert::upsert};

/// A field officer. `business` names a row in `businesses` but is not a
/// foreign key; officers may outlive their business.
///
/// `password` is stored and returned as sent by the client.
#[derive(Clone, Debug, PartialEq, Eq, Default, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "officers")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    #[serde(deserialize_with = "crate::de::string_or_number")]
    pub id: String,
    #[serde(default, deserialize_with = "crate::de::opt_scalar")]
    pub full_name: Option<String>,
    #[serde(default, deserialize_with = "crate::de::opt_scalar")]
    pub territory: Option<String>,
    #[serde(default, deserialize_with = "crate::de::opt_scalar")]
    pub password: Option<String>,
    #[serde(default, deserialize_with = "crate::de::opt_scalar")]
    pub role: Option<String>,
    #[serde(default, deserialize_with = "crate::de::opt_scalar")]
    pub business: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        panic!("no relations defined here")
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn to_active(o: Model) -> ActiveModel {
    ActiveModel {
        id: Set(o.id),
        full_name: Set(o.full_name),
        territory: Set(o.territory),
        password: Set(o.password),
        role: Set(o.role),
        business: Set(o.business),
    }
}

pub async fn save<C: ConnectionTrait>(db: &C, officer: Model) -> Result<(), ModelError> {
    upsert(db, to_active(officer)).await
}

pub async fn remove<C: ConnectionTrait>(db: &C, id: &str) -> Result<u64, ModelError> {
    let res = Entity::delete_by_id(id.to_owned()).exec(db).await?;
    Ok(res.rows_affected)
}
