use crate::models::Attendance;
use sqlx::{Executor, Sqlite, SqlitePool};

pub struct AttendanceRepository {
    pool: SqlitePool,
}

impl AttendanceRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn get(&self, member_id: i64, class_id: i64) -> Result<Option<Attendance>, sqlx::Error> {
        sqlx::query_as::<_, Attendance>(
            "SELECT member_id, class_id FROM attendance WHERE member_id = ? AND class_id = ?"
        )
        .bind(member_id)
        .bind(class_id)
        .fetch_optional(&self.pool)
        .await
    }

    pub async fn create(&self, attendance: &Attendance) -> Result<(), sqlx::Error> {
        Self::insert(&self.pool, attendance).await
    }

    pub async fn insert<'e, E>(executor: E, attendance: &Attendance) -> Result<(), sqlx::Error>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        sqlx::query("INSERT INTO attendance (member_id, class_id) VALUES (?, ?)")
            .bind(attendance.member_id)
            .bind(attendance.class_id)
            .execute(executor)
            .await?;
        Ok(())
    }

    pub async fn delete(&self, member_id: i64, class_id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM attendance WHERE member_id = ? AND class_id = ?")
            .bind(member_id)
            .bind(class_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
