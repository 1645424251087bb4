//! Schema for the `members` and `posts` collections.

pub use sea_orm_migration::prelude::*;

mod m20241113_000001_create_members;
mod m20241113_000002_create_posts;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20241113_000001_create_members::Migration),
            Box::new(m20241113_000002_create_posts::Migration),
        ]
    }
}
