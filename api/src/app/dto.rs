//! Request and response shapes for the product use-cases

use serde::{Deserialize, Serialize};

/// Input for creating a product
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRequest {
    pub name: String,
}

/// Input for renaming an existing product
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateProductRequest {
    pub name: String,
}

/// Product as returned to callers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductResponse {
    pub id: Option<i64>,
    pub name: String,
}
