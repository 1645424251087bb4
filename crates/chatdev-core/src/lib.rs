//! # ChatDev Core
//!
//! The domain layer of the ChatDev backend.
//! This crate contains the member and post entities, the repository ports,
//! and the services built on top of them. It has zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod services;

pub use error::{DomainError, RepoError};
