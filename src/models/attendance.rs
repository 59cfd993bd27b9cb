use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A member's enrolment in a class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Attendance {
    pub member_id: i64,
    pub class_id: i64,
}

#[derive(Debug, Deserialize)]
pub struct AddMemberRequest {
    pub member_id: i64,
}
