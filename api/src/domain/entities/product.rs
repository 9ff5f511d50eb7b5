//! Product domain entity
//!
//! The single resource managed by the API.

use serde::{Deserialize, Serialize};

/// Unique identifier for a product, assigned by the store on insert
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub i64);

impl From<i64> for ProductId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A product record
///
/// `id` is `None` until the product has been saved. Once persisted the id
/// never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    pub id: Option<ProductId>,
    pub name: String,
}

impl Product {
    /// Create a transient product that has not been saved yet
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
        }
    }

    /// Check if this product has been assigned an id by the store
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}
