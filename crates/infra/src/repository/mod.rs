//! Product storage boundary.
//!
//! This module defines an infrastructure-facing abstraction for storing and
//! loading products, plus the in-memory and Postgres backends behind it.

pub mod in_memory;
pub mod postgres;
pub mod r#trait;

pub use in_memory::InMemoryProductRepository;
pub use postgres::PostgresProductRepository;
pub use r#trait::{ProductRepository, RepositoryError};
