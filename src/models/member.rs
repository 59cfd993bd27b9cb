use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Member {
    pub id: i64,
    pub name: String,
    pub active: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

impl Member {
    pub fn new(name: String, active: bool) -> Self {
        let now = chrono::Utc::now().timestamp();
        Self {
            id: 0, // Will be set by database
            name,
            active,
            created_at: now,
            updated_at: now,
        }
    }
}

fn default_active() -> bool {
    true
}

#[derive(Debug, Deserialize)]
pub struct CreateMemberRequest {
    pub name: String,
    #[serde(default = "default_active")]
    pub active: bool,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateMemberRequest {
    pub name: Option<String>,
    pub active: Option<bool>,
}

impl UpdateMemberRequest {
    /// Copy every field that was sent onto the stored member
    pub fn apply(self, member: &mut Member) {
        if let Some(name) = self.name {
            member.name = name;
        }
        if let Some(active) = self.active {
            member.active = active;
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct MemberResponse {
    pub id: i64,
    pub name: String,
    pub active: bool,
    pub classes: Vec<String>,
}

impl MemberResponse {
    pub fn new(member: Member, classes: Vec<String>) -> Self {
        Self {
            id: member.id,
            name: member.name,
            active: member.active,
            classes,
        }
    }
}
