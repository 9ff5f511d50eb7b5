//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., PostgreSQL).

use async_trait::async_trait;

use crate::domain::entities::{Product, ProductId};
use crate::error::DomainError;

/// Repository for Product entities
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Insert the product if it has no id, otherwise update the stored record.
    ///
    /// Returns the persisted product, with its id populated on insert.
    async fn save(&self, product: Product) -> Result<Product, DomainError>;

    /// Find a product by ID
    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, DomainError>;

    /// Get every stored product
    async fn find_all(&self) -> Result<Vec<Product>, DomainError>;

    /// Delete a product by ID. Deleting a missing id is not an error.
    async fn delete_by_id(&self, id: ProductId) -> Result<(), DomainError>;
}
