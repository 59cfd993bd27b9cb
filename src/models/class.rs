use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A scheduled class. Always owned by exactly one trainer.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Class {
    pub id: i64,
    pub name: String,
    pub date: String,
    /// Length in minutes
    pub duration: i64,
    pub trainer_id: i64,
    pub created_at: i64,
    pub updated_at: i64,
}

impl Class {
    pub fn new(name: String, date: String, duration: i64, trainer_id: i64) -> Self {
        let now = chrono::Utc::now().timestamp();
        Self {
            id: 0, // Will be set by database
            name,
            date,
            duration,
            trainer_id,
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateClassRequest {
    pub name: String,
    pub date: String,
    pub duration: i64,
    pub trainer_id: i64,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateClassRequest {
    pub name: Option<String>,
    pub date: Option<String>,
    pub duration: Option<i64>,
}

impl UpdateClassRequest {
    pub fn apply(self, class: &mut Class) {
        if let Some(name) = self.name {
            class.name = name;
        }
        if let Some(date) = self.date {
            class.date = date;
        }
        if let Some(duration) = self.duration {
            class.duration = duration;
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AssignTrainerRequest {
    pub trainer_id: i64,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ClassResponse {
    pub id: i64,
    pub name: String,
    pub date: String,
    pub duration: i64,
    pub trainer: String,
    pub members: Vec<String>,
}

impl ClassResponse {
    pub fn new(class: Class, trainer: String, members: Vec<String>) -> Self {
        Self {
            id: class.id,
            name: class.name,
            date: class.date,
            duration: class.duration,
            trainer,
            members,
        }
    }
}

/// The date shared by the most classes
#[derive(Debug, Serialize, Deserialize, PartialEq, FromRow)]
pub struct PopularDay {
    pub date: String,
    pub classes: i64,
}
