//! Test utilities
//!
//! In-memory and mockall implementations of the repository port, plus fixtures.
//!
//! `InMemoryProductRepository` behaves like the real store and is used for
//! state-based tests. `MockProductRepo` is for asserting which store calls a
//! service makes.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
