//! Mock implementations of port traits

use async_trait::async_trait;
use mockall::mock;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, RwLock};

use crate::domain::entities::{Product, ProductId};
use crate::domain::ports::ProductRepository;
use crate::error::DomainError;

// ============================================================================
// In-Memory Product Repository
// ============================================================================

/// Product store backed by a map, handing out ids from 1 upwards
#[derive(Default)]
pub struct InMemoryProductRepository {
    products: Arc<RwLock<BTreeMap<ProductId, Product>>>,
    last_id: AtomicI64,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a persisted product
    pub fn with_product(self, product: Product) -> Self {
        let id = product.id.expect("fixture products must have an id");
        self.last_id.fetch_max(id.0, Ordering::SeqCst);
        self.products.write().unwrap().insert(id, product);
        self
    }

    pub fn len(&self) -> usize {
        self.products.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn save(&self, mut product: Product) -> Result<Product, DomainError> {
        let mut products = self.products.write().unwrap();

        match product.id {
            None => {
                let id = ProductId(self.last_id.fetch_add(1, Ordering::SeqCst) + 1);
                product.id = Some(id);
                products.insert(id, product.clone());
            }
            Some(id) => {
                let stored = products
                    .get_mut(&id)
                    .ok_or(DomainError::ProductNotFound(id))?;
                *stored = product.clone();
            }
        }

        Ok(product)
    }

    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, DomainError> {
        let products = self.products.read().unwrap();
        Ok(products.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Product>, DomainError> {
        let products = self.products.read().unwrap();
        Ok(products.values().cloned().collect())
    }

    async fn delete_by_id(&self, id: ProductId) -> Result<(), DomainError> {
        self.products.write().unwrap().remove(&id);
        Ok(())
    }
}

// ============================================================================
// mockall Product Repository
// ============================================================================

mock! {
    pub ProductRepo {}

    #[async_trait]
    impl ProductRepository for ProductRepo {
        async fn save(&self, product: Product) -> Result<Product, DomainError>;
        async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, DomainError>;
        async fn find_all(&self) -> Result<Vec<Product>, DomainError>;
        async fn delete_by_id(&self, id: ProductId) -> Result<(), DomainError>;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_product;

    #[tokio::test]
    async fn save_assigns_sequential_ids() {
        let repo = InMemoryProductRepository::new();

        let first = repo.save(Product::new("a")).await.unwrap();
        let second = repo.save(Product::new("b")).await.unwrap();

        assert_eq!(first.id, Some(ProductId(1)));
        assert_eq!(second.id, Some(ProductId(2)));
        assert_eq!(repo.len(), 2);
    }

    #[tokio::test]
    async fn ids_continue_after_prepopulated_products() {
        let repo = InMemoryProductRepository::new().with_product(test_product(10, "seed"));

        let saved = repo.save(Product::new("next")).await.unwrap();

        assert_eq!(saved.id, Some(ProductId(11)));
    }

    #[tokio::test]
    async fn save_with_unknown_id_fails() {
        let repo = InMemoryProductRepository::new();

        let result = repo.save(test_product(4, "ghost")).await;

        assert!(matches!(result, Err(DomainError::ProductNotFound(ProductId(4)))));
        assert!(repo.is_empty());
    }
}
