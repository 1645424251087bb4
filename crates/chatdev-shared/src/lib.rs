//! # ChatDev Shared
//!
//! Wire types for the HTTP API: request bodies, response bodies,
//! and the explicit mappings from domain entities into them.

pub mod dto;
pub mod response;

pub use response::ErrorResponse;
