//! Conversions between product DTOs and the domain entity

use crate::app::dto::{ProductRequest, ProductResponse, UpdateProductRequest};
use crate::domain::entities::Product;

/// Stateless mapper between wire shapes and `Product`
#[derive(Debug, Clone, Copy, Default)]
pub struct ProductMapper;

impl ProductMapper {
    pub fn new() -> Self {
        Self
    }

    /// Build a transient product from a create request
    pub fn to_product(&self, request: &ProductRequest) -> Product {
        Product::new(request.name.clone())
    }

    /// Apply an update request to an existing product.
    ///
    /// Consumes the product and hands the same entity back with its new name;
    /// the id is left untouched.
    pub fn to_updated_product(&self, mut product: Product, request: &UpdateProductRequest) -> Product {
        product.name = request.name.clone();
        product
    }

    pub fn to_product_response(&self, product: &Product) -> ProductResponse {
        ProductResponse {
            id: product.id.map(|id| id.0),
            name: product.name.clone(),
        }
    }
}
