//! Domain layer
//!
//! Storage-agnostic product model and the ports it is persisted through.
//! - `entities`: the `Product` entity and its id
//! - `ports`: trait definitions implemented by adapters

pub mod entities;
pub mod ports;
