//! Test fixtures
//!
//! Factory functions for creating test data.

use crate::domain::entities::{Product, ProductId};

/// Create a persisted product with the given id and name
pub fn test_product(id: i64, name: &str) -> Product {
    Product {
        id: Some(ProductId(id)),
        name: name.to_string(),
    }
}
