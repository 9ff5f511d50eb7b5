//! SeaORM entities
//!
//! Table definitions used by the PostgreSQL adapters.

pub mod products;
