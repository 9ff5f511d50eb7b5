//! PostgreSQL adapter for ProductRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait,
    ActiveValue::{NotSet, Set, Unchanged},
    DatabaseConnection, DbErr, EntityTrait, QueryOrder,
};

use crate::domain::entities::{Product, ProductId};
use crate::domain::ports::ProductRepository;
use crate::entity::products;
use crate::error::DomainError;

/// PostgreSQL implementation of ProductRepository
pub struct PostgresProductRepository {
    db: DatabaseConnection,
}

impl PostgresProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductRepository for PostgresProductRepository {
    async fn save(&self, product: Product) -> Result<Product, DomainError> {
        let result = match product.id {
            None => {
                let model = products::ActiveModel {
                    id: NotSet,
                    name: Set(product.name),
                };

                model
                    .insert(&self.db)
                    .await
                    .map_err(|e| DomainError::Database(e.to_string()))?
            }
            Some(id) => {
                let model = products::ActiveModel {
                    id: Unchanged(id.0),
                    name: Set(product.name),
                };

                model.update(&self.db).await.map_err(|e| match e {
                    DbErr::RecordNotUpdated => DomainError::ProductNotFound(id),
                    e => DomainError::Database(e.to_string()),
                })?
            }
        };

        Ok(result.into())
    }

    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, DomainError> {
        let result = products::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn find_all(&self) -> Result<Vec<Product>, DomainError> {
        let results = products::Entity::find()
            .order_by_asc(products::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn delete_by_id(&self, id: ProductId) -> Result<(), DomainError> {
        let result = products::Entity::delete_by_id(id.0)
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        if result.rows_affected == 0 {
            tracing::debug!(product_id = %id, "Delete matched no rows");
        }

        Ok(())
    }
}

/// Convert SeaORM model to domain entity
impl From<products::Model> for Product {
    fn from(model: products::Model) -> Self {
        Product {
            id: Some(ProductId(model.id)),
            name: model.name,
        }
    }
}
