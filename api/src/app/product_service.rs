//! Product service
//!
//! Create, read, update, list and delete products through the repository port.

use std::sync::Arc;

use crate::app::dto::{ProductRequest, ProductResponse, UpdateProductRequest};
use crate::app::product_mapper::ProductMapper;
use crate::domain::entities::{Product, ProductId};
use crate::domain::ports::ProductRepository;
use crate::error::DomainError;

/// Service for managing products
pub struct ProductService<PR>
where
    PR: ProductRepository,
{
    products: Arc<PR>,
    mapper: ProductMapper,
}

impl<PR> ProductService<PR>
where
    PR: ProductRepository,
{
    pub fn new(products: Arc<PR>, mapper: ProductMapper) -> Self {
        Self { products, mapper }
    }

    /// Create a product and return it with its assigned id
    pub async fn create(&self, request: &ProductRequest) -> Result<ProductResponse, DomainError> {
        let product = self.products.save(self.mapper.to_product(request)).await?;
        debug_assert!(product.is_persisted(), "store returned a product without an id");

        tracing::info!(product_id = ?product.id, name = %product.name, "Product created");

        Ok(self.mapper.to_product_response(&product))
    }

    /// Get a single product
    pub async fn find(&self, id: ProductId) -> Result<ProductResponse, DomainError> {
        let product = self.load(id).await?;
        Ok(self.mapper.to_product_response(&product))
    }

    /// Rename an existing product
    ///
    /// The response is built from the value the store hands back from `save`.
    pub async fn update(
        &self,
        id: ProductId,
        request: &UpdateProductRequest,
    ) -> Result<ProductResponse, DomainError> {
        let product = self.load(id).await?;
        let saved = self
            .products
            .save(self.mapper.to_updated_product(product, request))
            .await?;

        tracing::info!(product_id = %id, name = %saved.name, "Product updated");

        Ok(self.mapper.to_product_response(&saved))
    }

    /// List all products in store order
    pub async fn find_all(&self) -> Result<Vec<ProductResponse>, DomainError> {
        let products = self.products.find_all().await?;

        tracing::debug!(count = products.len(), "Listed products");

        Ok(products
            .iter()
            .map(|p| self.mapper.to_product_response(p))
            .collect())
    }

    /// Delete an existing product
    pub async fn delete(&self, id: ProductId) -> Result<(), DomainError> {
        self.load(id).await?;
        self.products.delete_by_id(id).await?;

        tracing::info!(product_id = %id, "Product deleted");

        Ok(())
    }

    async fn load(&self, id: ProductId) -> Result<Product, DomainError> {
        let product = self.products.find_by_id(id).await?;

        if product.is_none() {
            tracing::debug!(product_id = %id, "Product not found");
        }

        product.ok_or(DomainError::ProductNotFound(id))
    }
}
