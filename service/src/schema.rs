use entity::prelude::*;
use sea_orm::{ConnectionTrait, DbConn, DbErr, EntityTrait, Schema};

/// Creates the `bakeries` and `baked_goods` tables from the entity
/// definitions, leaving existing tables untouched.
pub async fn setup_schema(db: &DbConn) -> Result<(), DbErr> {
    create_table(db, Bakery).await?;
    // baked_goods references bakeries, so it must come second.
    create_table(db, BakedGood).await?;
    Ok(())
}

async fn create_table<E>(db: &DbConn, entity: E) -> Result<(), DbErr>
where
    E: EntityTrait,
{
    let backend = db.get_database_backend();
    let mut stmt = Schema::new(backend).create_table_from_entity(entity);
    stmt.if_not_exists();

    tracing::debug!(table = %entity.table_name(), "creating table if missing");
    db.execute(backend.build(&stmt)).await?;
    Ok(())
}
