use std::sync::Arc;

use crate::domain::{Member, NewMember};
use crate::error::DomainError;
use crate::ports::MemberRepository;

/// Member roster operations. Each call is a single delegation to the repository.
#[derive(Clone)]
pub struct MemberService {
    repo: Arc<dyn MemberRepository>,
}

impl MemberService {
    pub fn new(repo: Arc<dyn MemberRepository>) -> Self {
        Self { repo }
    }

    pub async fn list(&self) -> Result<Vec<Member>, DomainError> {
        Ok(self.repo.find_all().await?)
    }

    pub async fn insert(&self, member: NewMember) -> Result<Member, DomainError> {
        Ok(self.repo.insert(member).await?)
    }

    /// Returns the number of members removed.
    pub async fn delete_all(&self) -> Result<u64, DomainError> {
        Ok(self.repo.delete_all().await?)
    }
}
