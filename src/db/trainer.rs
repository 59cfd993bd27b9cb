use crate::models::Trainer;
use sqlx::{Executor, Sqlite, SqlitePool};

pub struct TrainerRepository {
    pool: SqlitePool,
}

impl TrainerRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Option<Trainer>, sqlx::Error> {
        sqlx::query_as::<_, Trainer>("SELECT * FROM trainers WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    pub async fn get_all(&self) -> Result<Vec<Trainer>, sqlx::Error> {
        sqlx::query_as::<_, Trainer>("SELECT * FROM trainers ORDER BY id")
            .fetch_all(&self.pool)
            .await
    }

    pub async fn count(&self) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM trainers")
            .fetch_one(&self.pool)
            .await
    }

    pub async fn create(&self, trainer: &Trainer) -> Result<i64, sqlx::Error> {
        Self::insert(&self.pool, trainer).await
    }

    pub async fn insert<'e, E>(executor: E, trainer: &Trainer) -> Result<i64, sqlx::Error>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let result = sqlx::query(
            "INSERT INTO trainers (name, specialty, created_at, updated_at)
             VALUES (?, ?, ?, ?)"
        )
        .bind(&trainer.name)
        .bind(&trainer.specialty)
        .bind(trainer.created_at)
        .bind(trainer.updated_at)
        .execute(executor)
        .await?;
        Ok(result.last_insert_rowid())
    }

    pub async fn update(&self, trainer: &Trainer) -> Result<(), sqlx::Error> {
        let now = chrono::Utc::now().timestamp();
        sqlx::query(
            "UPDATE trainers SET name = ?, specialty = ?, updated_at = ? WHERE id = ?"
        )
        .bind(&trainer.name)
        .bind(&trainer.specialty)
        .bind(now)
        .bind(trainer.id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    pub async fn delete(&self, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM trainers WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Names of the classes this trainer teaches, in class order
    pub async fn class_names(&self, trainer_id: i64) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar::<_, String>(
            "SELECT name FROM classes WHERE trainer_id = ? ORDER BY id"
        )
        .bind(trainer_id)
        .fetch_all(&self.pool)
        .await
    }
}
