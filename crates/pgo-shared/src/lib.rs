//! # pgo Shared
//!
//! Wire types shared by the API server and its clients.
//! Every type here also carries its OpenAPI schema.

pub mod dto;
pub mod response;

pub use response::{ApiResponse, ErrorResponse, MessageResponse};
