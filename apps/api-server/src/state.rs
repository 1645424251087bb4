//! Application state - shared across all handlers.

use std::sync::Arc;

use chatdev_core::services::{MemberService, PostService};
use chatdev_infra::{InMemoryMemberRepository, InMemoryPostRepository};

#[cfg(feature = "postgres")]
use chatdev_infra::{DatabaseConnections, PostgresMemberRepository, PostgresPostRepository};

/// Which kind of store backs the collections; reported by the health check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    Postgres,
    Memory,
}

impl StoreKind {
    pub fn as_str(self) -> &'static str {
        match self {
            StoreKind::Postgres => "postgres",
            StoreKind::Memory => "memory",
        }
    }
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub members: MemberService,
    pub posts: PostService,
    pub store: StoreKind,
}

impl AppState {
    /// State backed by in-memory collections. Data is lost on restart.
    pub fn in_memory() -> Self {
        Self {
            members: MemberService::new(Arc::new(InMemoryMemberRepository::new())),
            posts: PostService::new(Arc::new(InMemoryPostRepository::new())),
            store: StoreKind::Memory,
        }
    }

    /// State backed by PostgreSQL; repositories share the pooled connection.
    #[cfg(feature = "postgres")]
    pub fn postgres(db: &DatabaseConnections) -> Self {
        Self {
            members: MemberService::new(Arc::new(PostgresMemberRepository::new(Arc::clone(
                &db.main,
            )))),
            posts: PostService::new(Arc::new(PostgresPostRepository::new(Arc::clone(
                &db.main,
            )))),
            store: StoreKind::Postgres,
        }
    }
}
