//! SeaORM entities, one per collection.

pub mod member;
pub mod post;
