//! Randomized fixtures for service tests.

#![allow(dead_code)]

use std::collections::BTreeSet;
use std::sync::Arc;

use fake::Fake;
use fake::faker::internet::en::Username;
use fake::faker::lorem::en::Sentence;
use fake::faker::name::en::Name;

use chatdev_core::domain::{NewMember, NewPost};
use chatdev_core::services::{MemberService, PostService};
use chatdev_infra::{InMemoryMemberRepository, InMemoryPostRepository};

/// A NetID-like token.
pub fn net_id() -> String {
    Username().fake()
}

/// `n` distinct NetIDs.
pub fn net_ids(n: usize) -> Vec<String> {
    let mut ids = BTreeSet::new();
    while ids.len() < n {
        ids.insert(net_id());
    }
    ids.into_iter().collect()
}

/// A NetID guaranteed not to be in `taken`.
pub fn net_id_not_in(taken: &[String]) -> String {
    loop {
        let candidate = net_id();
        if !taken.contains(&candidate) {
            return candidate;
        }
    }
}

/// A post with a random message and two likes.
pub fn new_post() -> NewPost {
    NewPost::new(Sentence(3..8).fake::<String>()).with_likes(net_ids(2))
}

pub fn new_posts(n: usize) -> Vec<NewPost> {
    (0..n).map(|_| new_post()).collect()
}

pub fn new_member() -> NewMember {
    NewMember::new(
        Name().fake::<String>(),
        Sentence(1..3).fake::<String>(),
        Sentence(1..2).fake::<String>(),
    )
}

pub fn new_members(n: usize) -> Vec<NewMember> {
    (0..n).map(|_| new_member()).collect()
}

pub fn post_service() -> (PostService, Arc<InMemoryPostRepository>) {
    let repo = Arc::new(InMemoryPostRepository::new());
    (PostService::new(repo.clone()), repo)
}

pub fn member_service() -> (MemberService, Arc<InMemoryMemberRepository>) {
    let repo = Arc::new(InMemoryMemberRepository::new());
    (MemberService::new(repo.clone()), repo)
}
