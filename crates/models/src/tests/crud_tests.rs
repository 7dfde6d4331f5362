use anyhow::Result;
use sea_orm::EntityTrait;
use uuid::Uuid;

use super::test_db;
use crate::{business, customer, officer};

#[tokio::test]
async fn business_upsert_replaces_icon() -> Result<()> {
    let Some(db) = test_db().await? else { return Ok(()) };
    let name = format!("biz_{}", Uuid::new_v4());

    business::save(&db, business::Model { name: name.clone(), icon: Some("a.png".into()) }).await?;
    business::save(&db, business::Model { name: name.clone(), icon: Some("b.png".into()) }).await?;

    let found = business::Entity::find_by_id(name.clone()).one(&db).await?.unwrap();
    assert_eq!(found.icon.as_deref(), Some("b.png"));

    assert_eq!(business::remove(&db, &name).await?, 1);
    assert_eq!(business::remove(&db, &name).await?, 0);
    db.close().await?;
    Ok(())
}

#[tokio::test]
async fn customer_upsert_is_last_write_wins() -> Result<()> {
    let Some(db) = test_db().await? else { return Ok(()) };
    let id = Uuid::new_v4().to_string();

    let first = customer::Model {
        id: id.clone(),
        name: Some("First".into()),
        address: Some("1 Main St".into()),
        visit_completed: Some("Yes".into()),
        ..Default::default()
    };
    customer::save(&db, first).await?;

    let second = customer::Model { id: id.clone(), name: Some("Second".into()), ..Default::default() };
    customer::save(&db, second).await?;

    let found = customer::Entity::find_by_id(id.clone()).one(&db).await?.unwrap();
    assert_eq!(found.name.as_deref(), Some("Second"));
    // non-key columns absent from the second write are cleared, not kept
    assert_eq!(found.address, None);
    assert_eq!(found.visit_completed.as_deref(), Some("No"));

    customer::remove(&db, &id).await?;
    db.close().await?;
    Ok(())
}

#[tokio::test]
async fn officer_upsert_and_remove() -> Result<()> {
    let Some(db) = test_db().await? else { return Ok(()) };
    let id = Uuid::new_v4().to_string();

    let o = officer::Model {
        id: id.clone(),
        full_name: Some("Ada Officer".into()),
        territory: Some("North".into()),
        password: Some("pw".into()),
        role: Some("officer".into()),
        business: Some("Acme".into()),
    };
    officer::save(&db, o.clone()).await?;

    let found = officer::Entity::find_by_id(id.clone()).one(&db).await?.unwrap();
    assert_eq!(found, o);

    assert_eq!(officer::remove(&db, &id).await?, 1);
    assert!(officer::Entity::find_by_id(id).one(&db).await?.is_none());
    db.close().await?;
    Ok(())
}
