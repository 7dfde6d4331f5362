//! Insert-or-overwrite for any entity.
//!
//! The conflict target is the entity's primary key and every other column is
//! overwritten with the incoming value, so a repeated write with the same key
//! leaves exactly the last write in the table.

use sea_orm::{
    entity::prelude::*, sea_query::OnConflict, ActiveModelTrait, ConnectionTrait, IdenStatic,
    Insert, IntoActiveModel, Iterable, PrimaryKeyToColumn,
};

use crate::errors::ModelError;

/// Primary key columns of `E`, in declaration order.
pub fn key_columns<E: EntityTrait>() -> Vec<E::Column> {
    E::PrimaryKey::iter().map(|k| k.into_column()).collect()
}

/// Every column of `E` that is not part of the primary key.
pub fn non_key_columns<E: EntityTrait>() -> Vec<E::Column> {
    let keys = key_columns::<E>();
    E::Column::iter()
        .filter(|c| !keys.iter().any(|k| k.as_str() == c.as_str()))
        .collect()
}

/// `INSERT ... ON CONFLICT (<key>) DO UPDATE SET <col> = EXCLUDED.<col>, ...`
pub fn upsert_statement<A>(model: A) -> Insert<A>
where
    A: ActiveModelTrait,
{
    let on_conflict = OnConflict::columns(key_columns::<A::Entity>())
        .update_columns(non_key_columns::<A::Entity>())
        .to_owned();
    <A::Entity as EntityTrait>::insert(model).on_conflict(on_conflict)
}

pub async fn upsert<A, C>(db: &C, model: A) -> Result<(), ModelError>
where
    A: ActiveModelTrait + Send + 'static,
    <A::Entity as EntityTrait>::Model: IntoActiveModel<A>,
    C: ConnectionTrait,
{
    upsert_statement(model).exec_without_returning(db).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use sea_orm::{DbBackend, QueryTrait};

    use super::*;
    use crate::{business, customer, officer};

    fn names<E: EntityTrait>(cols: Vec<E::Column>) -> Vec<String> {
        cols.iter().map(|c| c.as_str().to_owned()).collect()
    }

    #[test]
    fn business_keys_on_name_and_updates_icon() {
        assert_eq!(names::<business::Entity>(key_columns::<business::Entity>()), vec!["name"]);
        assert_eq!(names::<business::Entity>(non_key_columns::<business::Entity>()), vec!["icon"]);
    }

    #[test]
    fn officer_updates_every_non_key_column() {
        assert_eq!(
            names::<officer::Entity>(non_key_columns::<officer::Entity>()),
            vec!["full_name", "territory", "password", "role", "business"]
        );
    }

    #[test]
    fn customer_updates_fourteen_columns_and_never_the_id() {
        let cols = names::<customer::Entity>(non_key_columns::<customer::Entity>());
        assert_eq!(cols.len(), 14);
        assert!(!cols.iter().any(|c| c == "id"));
        assert!(cols.iter().any(|c| c == "visit_completed"));
        assert!(cols.iter().any(|c| c == "delivery_info"));
    }

    #[test]
    fn business_statement_overwrites_on_conflict() {
        let am = business::to_active(business::Model { name: "Acme".into(), icon: Some("a.png".into()) });
        let sql = upsert_statement(am).build(DbBackend::Postgres).sql;
        assert!(sql.starts_with(r#"INSERT INTO "businesses" ("name", "icon")"#), "{sql}");
        assert!(sql.contains(r#"ON CONFLICT ("name") DO UPDATE SET "icon" = "excluded"."icon""#), "{sql}");
    }

    #[test]
    fn customer_statement_targets_id() {
        let am = customer::to_active(customer::Model { id: "c1".into(), ..Default::default() });
        let sql = upsert_statement(am).build(DbBackend::Postgres).sql;
        assert!(sql.contains(r#"ON CONFLICT ("id") DO UPDATE SET"#), "{sql}");
        assert!(sql.contains(r#""business" = "excluded"."business""#), "{sql}");
        assert!(!sql.contains(r#""id" = "excluded"."id""#), "{sql}");
    }
}
