//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities and ports.

pub mod dto;
pub mod product_mapper;
pub mod product_service;

pub use dto::{ProductRequest, ProductResponse, UpdateProductRequest};
pub use product_mapper::ProductMapper;
pub use product_service::ProductService;
