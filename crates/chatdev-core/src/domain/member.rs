use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Member entity - a person on the team roster.
///
/// Every field is fixed at creation; there is no update path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: Uuid,
    pub name: String,
    pub position: String,
    pub subteam: String,
}

/// Fields supplied when inserting a member. The store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMember {
    pub name: String,
    pub position: String,
    pub subteam: String,
}

impl NewMember {
    pub fn new(
        name: impl Into<String>,
        position: impl Into<String>,
        subteam: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            position: position.into(),
            subteam: subteam.into(),
        }
    }
}
