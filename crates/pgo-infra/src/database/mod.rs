//! Post persistence: PostgreSQL via SeaORM, plus an in-memory fallback.

mod memory;

#[cfg(feature = "postgres")]
mod connections;
#[cfg(feature = "postgres")]
pub mod entity;
#[cfg(feature = "postgres")]
pub mod postgres_repo;

pub use memory::InMemoryPostRepository;

#[cfg(feature = "postgres")]
pub use connections::{DatabaseConfig, DatabaseHandle};

#[cfg(feature = "postgres")]
pub use postgres_repo::PostgresPostRepository;
