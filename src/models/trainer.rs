use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Trainer {
    pub id: i64,
    pub name: String,
    pub specialty: String,
    pub created_at: i64,
    pub updated_at: i64,
}

impl Trainer {
    pub fn new(name: String, specialty: String) -> Self {
        let now = chrono::Utc::now().timestamp();
        Self {
            id: 0, // Will be set by database
            name,
            specialty,
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateTrainerRequest {
    pub name: String,
    pub specialty: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateTrainerRequest {
    pub name: Option<String>,
    pub specialty: Option<String>,
}

impl UpdateTrainerRequest {
    pub fn apply(self, trainer: &mut Trainer) {
        if let Some(name) = self.name {
            trainer.name = name;
        }
        if let Some(specialty) = self.specialty {
            trainer.specialty = specialty;
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct TrainerResponse {
    pub id: i64,
    pub name: String,
    pub specialty: String,
    pub classes: Vec<String>,
}

impl TrainerResponse {
    pub fn new(trainer: Trainer, classes: Vec<String>) -> Self {
        Self {
            id: trainer.id,
            name: trainer.name,
            specialty: trainer.specialty,
            classes,
        }
    }
}
