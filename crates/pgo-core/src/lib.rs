//! # pgo Core
//!
//! The domain layer of the posts API.
//! This crate contains the post entity, pagination rules, the persistence port
//! and the post service. It has zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

pub use error::DomainError;
pub use service::PostService;
