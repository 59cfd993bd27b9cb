use crate::db::attendance::AttendanceRepository;
use crate::db::class::ClassRepository;
use crate::db::member::MemberRepository;
use crate::db::trainer::TrainerRepository;
use crate::models::{Attendance, Class, Member, Trainer};
use anyhow::{Context, Result};
use serde::Deserialize;
use sqlx::SqlitePool;
use std::collections::{HashMap, HashSet};

// Embed the demo data file directly in the binary
const SEED_CONTENT: &str = include_str!("../data/seed.json");

#[derive(Debug, Deserialize)]
pub struct SeedData {
    pub trainers: Vec<SeedTrainer>,
    pub members: Vec<SeedMember>,
}

#[derive(Debug, Deserialize)]
pub struct SeedTrainer {
    pub name: String,
    pub specialty: String,
    #[serde(default)]
    pub classes: Vec<SeedClass>,
}

#[derive(Debug, Deserialize)]
pub struct SeedClass {
    pub name: String,
    pub date: String,
    pub duration: i64,
}

#[derive(Debug, Deserialize)]
pub struct SeedMember {
    pub name: String,
    #[serde(default = "default_active")]
    pub active: bool,
    /// Class names, resolved against the seeded classes
    #[serde(default)]
    pub classes: Vec<String>,
}

fn default_active() -> bool {
    true
}

/// Parse seed data. Class names must be unique, members refer to classes by name.
pub fn parse_seed(content: &str) -> Result<SeedData> {
    let data: SeedData = serde_json::from_str(content).context("Failed to parse seed data")?;

    let mut names = HashSet::new();
    for seed_class in data.trainers.iter().flat_map(|t| &t.classes) {
        if !names.insert(seed_class.name.as_str()) {
            anyhow::bail!("Seed class '{}' is defined more than once", seed_class.name);
        }
    }

    Ok(data)
}

/// Load the embedded demo gym unless the database already has trainers
pub async fn load_demo_data(pool: &SqlitePool) -> Result<()> {
    let trainer_repo = TrainerRepository::new(pool.clone());

    if trainer_repo.count().await? > 0 {
        tracing::info!("Database already has trainers, skipping demo data");
        return Ok(());
    }

    let data = parse_seed(SEED_CONTENT)?;
    import(pool, &data).await
}

/// Write the seed in a single transaction: either all of it lands or none of it
pub async fn import(pool: &SqlitePool, data: &SeedData) -> Result<()> {
    tracing::info!(
        "Seeding demo data ({} trainers, {} members)...",
        data.trainers.len(),
        data.members.len()
    );

    let mut tx = pool.begin().await.context("Failed to start seed transaction")?;
    let mut class_ids: HashMap<&str, i64> = HashMap::new();
    let mut enrolments = 0;

    // First pass: trainers and the classes they own
    for seed_trainer in &data.trainers {
        let trainer = Trainer::new(seed_trainer.name.clone(), seed_trainer.specialty.clone());
        let trainer_id = TrainerRepository::insert(&mut *tx, &trainer).await?;

        for seed_class in &seed_trainer.classes {
            let class = Class::new(
                seed_class.name.clone(),
                seed_class.date.clone(),
                seed_class.duration,
                trainer_id,
            );
            let class_id = ClassRepository::insert(&mut *tx, &class).await?;
            class_ids.insert(seed_class.name.as_str(), class_id);
        }
    }

    // Second pass: members, now that every class exists
    for seed_member in &data.members {
        let member = Member::new(seed_member.name.clone(), seed_member.active);
        let member_id = MemberRepository::insert(&mut *tx, &member).await?;

        for class_name in &seed_member.classes {
            let class_id = *class_ids.get(class_name.as_str()).with_context(|| {
                format!("Seed member {} lists unknown class '{}'", seed_member.name, class_name)
            })?;
            AttendanceRepository::insert(&mut *tx, &Attendance { member_id, class_id }).await?;
            enrolments += 1;
        }
    }

    tx.commit().await.context("Failed to commit seed transaction")?;

    tracing::info!(
        "Seeded {} trainers, {} classes, {} members, {} enrolments",
        data.trainers.len(),
        class_ids.len(),
        data.members.len(),
        enrolments
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_pool;

    #[test]
    fn test_embedded_seed_parses() {
        let data = parse_seed(SEED_CONTENT).unwrap();
        assert!(!data.trainers.is_empty());
        assert!(!data.members.is_empty());
    }

    #[test]
    fn test_member_defaults() {
        let data = parse_seed(r#"{"trainers": [], "members": [{"name": "Jordan"}]}"#).unwrap();
        assert!(data.members[0].active);
        assert!(data.members[0].classes.is_empty());
    }

    #[tokio::test]
    async fn test_load_demo_data_runs_once() {
        let pool = test_pool().await;
        load_demo_data(&pool).await.unwrap();

        let trainers = TrainerRepository::new(pool.clone()).count().await.unwrap();
        let data = parse_seed(SEED_CONTENT).unwrap();
        assert_eq!(trainers, data.trainers.len() as i64);

        let class_repo = ClassRepository::new(pool.clone());
        let popular = class_repo.most_popular_day().await.unwrap().unwrap();
        assert_eq!(popular.date, "Monday");

        let lifting = class_repo
            .get_all()
            .await
            .unwrap()
            .into_iter()
            .find(|c| c.name == "Power Lifting")
            .unwrap();
        assert_eq!(class_repo.member_names(lifting.id).await.unwrap(), vec!["Jordan Lee", "Robin Chen"]);

        // Second run is a no-op
        load_demo_data(&pool).await.unwrap();
        let trainers = TrainerRepository::new(pool).count().await.unwrap();
        assert_eq!(trainers, data.trainers.len() as i64);
    }

    #[test]
    fn test_duplicate_class_names_are_rejected() {
        let content = r#"{
            "trainers": [
                {"name": "Alex", "specialty": "Strength", "classes": [{"name": "Spin", "date": "Monday", "duration": 40}]},
                {"name": "Priya", "specialty": "Cycling", "classes": [{"name": "Spin", "date": "Friday", "duration": 40}]}
            ],
            "members": []
        }"#;
        let err = parse_seed(content).unwrap_err();
        assert!(err.to_string().contains("'Spin' is defined more than once"));
    }

    #[tokio::test]
    async fn test_failed_import_leaves_database_empty() {
        let pool = test_pool().await;
        let data = parse_seed(
            r#"{
                "trainers": [
                    {"name": "Alex", "specialty": "Strength", "classes": [{"name": "Lifting", "date": "Monday", "duration": 60}]}
                ],
                "members": [{"name": "Jordan", "classes": ["Lifting", "Spin"]}]
            }"#,
        )
        .unwrap();

        let err = import(&pool, &data).await.unwrap_err();
        assert!(err.to_string().contains("unknown class 'Spin'"));

        // Nothing from the partial import survives
        assert_eq!(TrainerRepository::new(pool.clone()).count().await.unwrap(), 0);
        assert!(ClassRepository::new(pool.clone()).get_all().await.unwrap().is_empty());
        assert!(MemberRepository::new(pool.clone()).get_all().await.unwrap().is_empty());

        // A later start seeds normally
        load_demo_data(&pool).await.unwrap();
        assert!(TrainerRepository::new(pool).count().await.unwrap() > 0);
    }
}
