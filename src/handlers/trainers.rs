use crate::db::class::ClassRepository;
use crate::db::trainer::TrainerRepository;
use crate::error::{AppError, AppResult};
use crate::models::{CreateTrainerRequest, Trainer, TrainerResponse, UpdateTrainerRequest};
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

pub async fn list_trainers(State(state): State<Arc<AppState>>) -> AppResult<Json<Vec<TrainerResponse>>> {
    let trainer_repo = TrainerRepository::new(state.db_pool.clone());
    let trainers = trainer_repo.get_all().await?;

    let mut responses = Vec::with_capacity(trainers.len());
    for trainer in trainers {
        let classes = trainer_repo.class_names(trainer.id).await?;
        responses.push(TrainerResponse::new(trainer, classes));
    }
    Ok(Json(responses))
}

pub async fn get_trainer(
    State(state): State<Arc<AppState>>,
    Path(trainer_id): Path<i64>,
) -> AppResult<Json<TrainerResponse>> {
    let trainer_repo = TrainerRepository::new(state.db_pool.clone());
    let trainer = trainer_repo
        .get_by_id(trainer_id)
        .await?
        .ok_or_else(|| AppError::trainer_not_found(trainer_id))?;
    let classes = trainer_repo.class_names(trainer.id).await?;
    Ok(Json(TrainerResponse::new(trainer, classes)))
}

pub async fn create_trainer(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CreateTrainerRequest>,
) -> AppResult<(StatusCode, Json<i64>)> {
    let trainer_repo = TrainerRepository::new(state.db_pool.clone());
    let trainer = Trainer::new(request.name, request.specialty);
    let id = trainer_repo.create(&trainer).await?;

    tracing::info!("Created trainer {} ({}, {})", id, trainer.name, trainer.specialty);
    Ok((StatusCode::CREATED, Json(id)))
}

pub async fn update_trainer(
    State(state): State<Arc<AppState>>,
    Path(trainer_id): Path<i64>,
    Json(request): Json<UpdateTrainerRequest>,
) -> AppResult<StatusCode> {
    let trainer_repo = TrainerRepository::new(state.db_pool.clone());
    let mut trainer = trainer_repo
        .get_by_id(trainer_id)
        .await?
        .ok_or_else(|| AppError::trainer_not_found(trainer_id))?;

    request.apply(&mut trainer);
    trainer_repo.update(&trainer).await?;

    tracing::info!("Updated trainer {}", trainer_id);
    Ok(StatusCode::NO_CONTENT)
}

/// Trainers who still own classes cannot be removed. The foreign key
/// decides, so a class created concurrently still yields a conflict.
pub async fn delete_trainer(
    State(state): State<Arc<AppState>>,
    Path(trainer_id): Path<i64>,
) -> AppResult<StatusCode> {
    let trainer_repo = TrainerRepository::new(state.db_pool.clone());

    match trainer_repo.delete(trainer_id).await {
        Ok(true) => {}
        Ok(false) => return Err(AppError::trainer_not_found(trainer_id)),
        Err(sqlx::Error::Database(err)) if err.is_foreign_key_violation() => {
            let class_repo = ClassRepository::new(state.db_pool.clone());
            let owned = class_repo.count_for_trainer(trainer_id).await?;
            return Err(AppError::Conflict(format!(
                "Trainer with ID {} still teaches {} class(es).",
                trainer_id, owned
            )));
        }
        Err(err) => return Err(err.into()),
    }

    tracing::info!("Deleted trainer {}", trainer_id);
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use crate::handlers::test_helpers::{create, send, test_app};
    use axum::http::{Method, StatusCode};
    use serde_json::json;

    #[tokio::test]
    async fn test_trainer_crud() {
        let app = test_app().await;
        let id = create(&app, "/trainers", json!({ "name": "Sam", "specialty": "Yoga" })).await;

        let (status, _) = send(
            &app,
            Method::PATCH,
            &format!("/trainers/{}", id),
            Some(json!({ "specialty": "Pilates" })),
        )
        .await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, body) = send(&app, Method::GET, &format!("/trainers/{}", id), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "id": id, "name": "Sam", "specialty": "Pilates", "classes": [] }));

        let (status, _) = send(&app, Method::DELETE, &format!("/trainers/{}", id), None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, body) = send(&app, Method::GET, "/trainers", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn test_trainer_lists_classes() {
        let app = test_app().await;
        let id = create(&app, "/trainers", json!({ "name": "Alex", "specialty": "Strength" })).await;
        create(
            &app,
            "/classes",
            json!({ "name": "Lifting", "date": "Monday", "duration": 60, "trainer_id": id }),
        )
        .await;

        let (_, body) = send(&app, Method::GET, "/trainers", None).await;
        assert_eq!(body[0]["classes"], json!(["Lifting"]));
    }

    #[tokio::test]
    async fn test_delete_trainer_with_classes_conflicts() {
        let app = test_app().await;
        let id = create(&app, "/trainers", json!({ "name": "Alex", "specialty": "Strength" })).await;
        create(
            &app,
            "/classes",
            json!({ "name": "Lifting", "date": "Monday", "duration": 60, "trainer_id": id }),
        )
        .await;

        let (status, body) = send(&app, Method::DELETE, &format!("/trainers/{}", id), None).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["detail"], format!("Trainer with ID {} still teaches 1 class(es).", id));

        let (status, body) = send(&app, Method::DELETE, "/trainers/999", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["detail"], "Trainer with ID 999 not found.");

        // Still there, still owning its class
        let (status, body) = send(&app, Method::GET, &format!("/trainers/{}", id), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["classes"], json!(["Lifting"]));
    }

    #[tokio::test]
    async fn test_missing_trainer_errors() {
        let app = test_app().await;

        let (status, body) = send(&app, Method::GET, "/trainers/99", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["detail"], "Trainer with ID 99 not found.");

        let (status, body) = send(&app, Method::PATCH, "/trainers/99", Some(json!({ "name": "Sam" }))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["detail"], "Trainer with ID 99 not found.");
    }
}
