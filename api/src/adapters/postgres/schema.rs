//! Schema bootstrap
//!
//! Creates the tables backing the SeaORM entities when they are missing.

use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, Schema};

use crate::entity::products;

/// Create the `products` table if it does not exist yet
pub async fn ensure_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    let mut statement = schema.create_table_from_entity(products::Entity);
    statement.if_not_exists();

    db.execute(backend.build(&statement)).await?;
    tracing::info!("Schema ready");

    Ok(())
}
