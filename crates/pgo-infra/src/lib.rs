//! # pgo Infrastructure
//!
//! Concrete implementations of the ports defined in `pgo-core`.
//!
//! ## Feature Flags
//!
//! - `postgres` (default) - PostgreSQL persistence via SeaORM, with migrations
//! - `minimal` - In-memory repository only

pub mod database;

// Re-exports - In-Memory
pub use database::InMemoryPostRepository;

// Re-exports - PostgreSQL
#[cfg(feature = "postgres")]
pub use database::{DatabaseConfig, DatabaseHandle, PostgresPostRepository};
#[cfg(feature = "postgres")]
pub use sea_orm::DbErr;
