//! Domain entities - the core business objects.

mod member;
mod post;

pub use member::{Member, NewMember};
pub use post::{NewPost, Post};
