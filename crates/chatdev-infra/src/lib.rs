//! # ChatDev Infrastructure
//!
//! Concrete implementations of the repository ports defined in `chatdev-core`.
//!
//! ## Feature Flags
//!
//! - `postgres` (default) - PostgreSQL collections via SeaORM
//!
//! Building with `default-features = false` leaves only the in-memory collections.

pub mod database;

pub use database::{DatabaseConfig, InMemoryMemberRepository, InMemoryPostRepository};

#[cfg(feature = "postgres")]
pub use database::{DatabaseConnections, PostgresMemberRepository, PostgresPostRepository};
