use crate::models::Member;
use sqlx::{Executor, Sqlite, SqlitePool};

pub struct MemberRepository {
    pool: SqlitePool,
}

impl MemberRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Option<Member>, sqlx::Error> {
        sqlx::query_as::<_, Member>("SELECT * FROM members WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    pub async fn get_all(&self) -> Result<Vec<Member>, sqlx::Error> {
        sqlx::query_as::<_, Member>("SELECT * FROM members ORDER BY id")
            .fetch_all(&self.pool)
            .await
    }

    pub async fn get_active(&self) -> Result<Vec<Member>, sqlx::Error> {
        sqlx::query_as::<_, Member>("SELECT * FROM members WHERE active = 1 ORDER BY id")
            .fetch_all(&self.pool)
            .await
    }

    /// Insert the member and return its new id
    pub async fn create(&self, member: &Member) -> Result<i64, sqlx::Error> {
        Self::insert(&self.pool, member).await
    }

    /// Insert on any executor, so callers can batch inserts in a transaction
    pub async fn insert<'e, E>(executor: E, member: &Member) -> Result<i64, sqlx::Error>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let result = sqlx::query(
            "INSERT INTO members (name, active, created_at, updated_at)
             VALUES (?, ?, ?, ?)"
        )
        .bind(&member.name)
        .bind(member.active)
        .bind(member.created_at)
        .bind(member.updated_at)
        .execute(executor)
        .await?;
        Ok(result.last_insert_rowid())
    }

    pub async fn update(&self, member: &Member) -> Result<(), sqlx::Error> {
        let now = chrono::Utc::now().timestamp();
        sqlx::query(
            "UPDATE members SET name = ?, active = ?, updated_at = ? WHERE id = ?"
        )
        .bind(&member.name)
        .bind(member.active)
        .bind(now)
        .bind(member.id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Returns false when no member had that id
    pub async fn delete(&self, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM members WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Names of the classes the member attends, in class order
    pub async fn class_names(&self, member_id: i64) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar::<_, String>(
            "SELECT c.name FROM classes c
             JOIN attendance a ON a.class_id = c.id
             WHERE a.member_id = ?
             ORDER BY c.id"
        )
        .bind(member_id)
        .fetch_all(&self.pool)
        .await
    }
}
