use crate::models::{Class, PopularDay};
use sqlx::{Executor, Sqlite, SqlitePool};

pub struct ClassRepository {
    pool: SqlitePool,
}

impl ClassRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Option<Class>, sqlx::Error> {
        sqlx::query_as::<_, Class>("SELECT * FROM classes WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    pub async fn get_all(&self) -> Result<Vec<Class>, sqlx::Error> {
        sqlx::query_as::<_, Class>("SELECT * FROM classes ORDER BY id")
            .fetch_all(&self.pool)
            .await
    }

    pub async fn create(&self, class: &Class) -> Result<i64, sqlx::Error> {
        Self::insert(&self.pool, class).await
    }

    pub async fn insert<'e, E>(executor: E, class: &Class) -> Result<i64, sqlx::Error>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let result = sqlx::query(
            "INSERT INTO classes (name, date, duration, trainer_id, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?)"
        )
        .bind(&class.name)
        .bind(&class.date)
        .bind(class.duration)
        .bind(class.trainer_id)
        .bind(class.created_at)
        .bind(class.updated_at)
        .execute(executor)
        .await?;
        Ok(result.last_insert_rowid())
    }

    pub async fn update(&self, class: &Class) -> Result<(), sqlx::Error> {
        let now = chrono::Utc::now().timestamp();
        sqlx::query(
            "UPDATE classes
             SET name = ?, date = ?, duration = ?, trainer_id = ?, updated_at = ?
             WHERE id = ?"
        )
        .bind(&class.name)
        .bind(&class.date)
        .bind(class.duration)
        .bind(class.trainer_id)
        .bind(now)
        .bind(class.id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    pub async fn delete(&self, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM classes WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn count_for_trainer(&self, trainer_id: i64) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM classes WHERE trainer_id = ?")
            .bind(trainer_id)
            .fetch_one(&self.pool)
            .await
    }

    /// Names of the members attending the class, in member order
    pub async fn member_names(&self, class_id: i64) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar::<_, String>(
            "SELECT m.name FROM members m
             JOIN attendance a ON a.member_id = m.id
             WHERE a.class_id = ?
             ORDER BY m.id"
        )
        .bind(class_id)
        .fetch_all(&self.pool)
        .await
    }

    pub async fn member_count(&self, class_id: i64) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM attendance WHERE class_id = ?")
            .bind(class_id)
            .fetch_one(&self.pool)
            .await
    }

    /// Date with the most classes. Ties go to the lowest date value.
    pub async fn most_popular_day(&self) -> Result<Option<PopularDay>, sqlx::Error> {
        sqlx::query_as::<_, PopularDay>(
            "SELECT date, COUNT(id) AS classes FROM classes
             GROUP BY date
             ORDER BY classes DESC, date ASC
             LIMIT 1"
        )
        .fetch_optional(&self.pool)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_pool;
    use crate::db::trainer::TrainerRepository;
    use crate::models::Trainer;

    async fn setup() -> (ClassRepository, i64) {
        let pool = test_pool().await;
        let trainer_id = TrainerRepository::new(pool.clone())
            .create(&Trainer::new("Alex".to_string(), "Strength".to_string()))
            .await
            .unwrap();
        (ClassRepository::new(pool), trainer_id)
    }

    #[tokio::test]
    async fn test_most_popular_day() {
        let (repo, trainer_id) = setup().await;
        assert!(repo.most_popular_day().await.unwrap().is_none());

        for (name, date) in [("A", "Tuesday"), ("B", "Monday"), ("C", "Tuesday"), ("D", "Friday")] {
            repo.create(&Class::new(name.to_string(), date.to_string(), 30, trainer_id)).await.unwrap();
        }

        let day = repo.most_popular_day().await.unwrap().unwrap();
        assert_eq!(day, PopularDay { date: "Tuesday".to_string(), classes: 2 });
    }

    #[tokio::test]
    async fn test_most_popular_day_tie_breaks_on_date() {
        let (repo, trainer_id) = setup().await;
        repo.create(&Class::new("A".to_string(), "Wednesday".to_string(), 30, trainer_id)).await.unwrap();
        repo.create(&Class::new("B".to_string(), "Friday".to_string(), 30, trainer_id)).await.unwrap();

        let day = repo.most_popular_day().await.unwrap().unwrap();
        assert_eq!(day.date, "Friday");
        assert_eq!(day.classes, 1);
    }

    #[tokio::test]
    async fn test_class_requires_existing_trainer() {
        let (repo, trainer_id) = setup().await;
        let result = repo
            .create(&Class::new("Ghost".to_string(), "Monday".to_string(), 30, trainer_id + 100))
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_update_and_count_for_trainer() {
        let (repo, trainer_id) = setup().await;
        let id = repo.create(&Class::new("Spin".to_string(), "Monday".to_string(), 40, trainer_id)).await.unwrap();

        let mut class = repo.get_by_id(id).await.unwrap().unwrap();
        class.duration = 55;
        repo.update(&class).await.unwrap();

        let class = repo.get_by_id(id).await.unwrap().unwrap();
        assert_eq!(class.duration, 55);
        assert_eq!(repo.count_for_trainer(trainer_id).await.unwrap(), 1);

        assert!(repo.delete(id).await.unwrap());
        assert_eq!(repo.count_for_trainer(trainer_id).await.unwrap(), 0);
    }
}
