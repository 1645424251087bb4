//! Services - the operations exposed to the HTTP layer.

mod member;
mod post;

pub use member::MemberService;
pub use post::PostService;
