//! Data Transfer Objects - request/response types for the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use chatdev_core::domain::{Member, NewMember, NewPost, Post};

/// Request to create a new member.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[schema(example = json!({"name": "Vin Bui", "position": "Course Instructor", "subteam": "iOS"}))]
pub struct CreateMemberRequest {
    /// The name of the member.
    pub name: String,
    /// The position or role of the member.
    pub position: String,
    /// The subteam the member belongs to.
    pub subteam: String,
}

impl From<CreateMemberRequest> for NewMember {
    fn from(req: CreateMemberRequest) -> Self {
        NewMember::new(req.name, req.position, req.subteam)
    }
}

/// A member as returned by the API. Members are exposed without an identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({"name": "Vin Bui", "position": "Course Instructor", "subteam": "iOS"}))]
pub struct MemberResponse {
    pub name: String,
    pub position: String,
    pub subteam: String,
}

impl From<Member> for MemberResponse {
    fn from(member: Member) -> Self {
        Self {
            name: member.name,
            position: member.position,
            subteam: member.subteam,
        }
    }
}

/// Request to create a new post.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[schema(example = json!({"message": "Hi! Vin was here."}))]
pub struct CreatePostRequest {
    /// The message content of the post.
    pub message: String,
}

impl From<CreatePostRequest> for NewPost {
    fn from(req: CreatePostRequest) -> Self {
        NewPost::new(req.message)
    }
}

/// Request to like or unlike a post.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(example = json!({"netId": "vdb23"}))]
pub struct LikePostRequest {
    /// The NetID of the user liking or unliking the post.
    #[validate(length(min = 1, message = "netId must not be empty"))]
    pub net_id: String,
}

/// A post as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({
    "id": "5b0c8c4e-6c1e-4d8e-9f0a-2c7d1d0c9a11",
    "message": "Hi! Vin was here.",
    "time": "2024-11-13T19:16:40.940Z",
    "likes": ["vdb23"]
}))]
pub struct PostResponse {
    pub id: Uuid,
    pub message: String,
    pub time: DateTime<Utc>,
    /// NetIDs of the users who liked the post.
    pub likes: Vec<String>,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            message: post.message,
            time: post.time,
            likes: post.likes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn member_response_has_no_identifier() {
        let member = Member {
            id: Uuid::new_v4(),
            name: "Vin Bui".to_string(),
            position: "Course Instructor".to_string(),
            subteam: "iOS".to_string(),
        };

        let value = serde_json::to_value(MemberResponse::from(member)).unwrap();
        assert_eq!(
            value,
            json!({"name": "Vin Bui", "position": "Course Instructor", "subteam": "iOS"})
        );
    }

    #[test]
    fn post_response_keeps_public_fields() {
        let id = Uuid::new_v4();
        let post = Post {
            id,
            message: "hi".to_string(),
            likes: vec!["abc".to_string()],
            time: Utc::now(),
        };

        let value = serde_json::to_value(PostResponse::from(post)).unwrap();
        assert_eq!(value["id"], json!(id.to_string()));
        assert_eq!(value["likes"], json!(["abc"]));
        assert!(value.get("_id").is_none());
    }

    #[test]
    fn like_request_uses_camel_case_and_rejects_empty_net_id() {
        let req: LikePostRequest = serde_json::from_value(json!({"netId": ""})).unwrap();
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("net_id"));

        let req: LikePostRequest = serde_json::from_value(json!({"netId": "vdb23"})).unwrap();
        assert!(req.validate().is_ok());
    }
}
