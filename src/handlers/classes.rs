use crate::db::class::ClassRepository;
use crate::db::trainer::TrainerRepository;
use crate::error::{AppError, AppResult};
use crate::models::{
    AssignTrainerRequest, Class, ClassResponse, CreateClassRequest, PopularDay, UpdateClassRequest,
};
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

async fn to_response(
    class_repo: &ClassRepository,
    trainer_repo: &TrainerRepository,
    class: Class,
) -> AppResult<ClassResponse> {
    let trainer = trainer_repo
        .get_by_id(class.trainer_id)
        .await?
        .ok_or_else(|| AppError::trainer_not_found(class.trainer_id))?;
    let members = class_repo.member_names(class.id).await?;
    Ok(ClassResponse::new(class, trainer.name, members))
}

pub async fn list_classes(State(state): State<Arc<AppState>>) -> AppResult<Json<Vec<ClassResponse>>> {
    let class_repo = ClassRepository::new(state.db_pool.clone());
    let trainer_repo = TrainerRepository::new(state.db_pool.clone());

    let classes = class_repo.get_all().await?;
    let mut responses = Vec::with_capacity(classes.len());
    for class in classes {
        responses.push(to_response(&class_repo, &trainer_repo, class).await?);
    }
    Ok(Json(responses))
}

pub async fn get_class(
    State(state): State<Arc<AppState>>,
    Path(class_id): Path<i64>,
) -> AppResult<Json<ClassResponse>> {
    let class_repo = ClassRepository::new(state.db_pool.clone());
    let trainer_repo = TrainerRepository::new(state.db_pool.clone());

    let class = class_repo
        .get_by_id(class_id)
        .await?
        .ok_or_else(|| AppError::class_not_found(class_id))?;
    Ok(Json(to_response(&class_repo, &trainer_repo, class).await?))
}

pub async fn most_popular_day(State(state): State<Arc<AppState>>) -> AppResult<Json<PopularDay>> {
    let class_repo = ClassRepository::new(state.db_pool.clone());
    let day = class_repo
        .most_popular_day()
        .await?
        .ok_or_else(|| AppError::NotFound("No classes found.".to_string()))?;

    tracing::debug!("Most popular day is {} with {} classes", day.date, day.classes);
    Ok(Json(day))
}

pub async fn create_class(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CreateClassRequest>,
) -> AppResult<(StatusCode, Json<i64>)> {
    let class_repo = ClassRepository::new(state.db_pool.clone());
    let trainer_repo = TrainerRepository::new(state.db_pool.clone());

    // A class cannot exist without its trainer
    if trainer_repo.get_by_id(request.trainer_id).await?.is_none() {
        return Err(AppError::trainer_not_found(request.trainer_id));
    }

    let class = Class::new(request.name, request.date, request.duration, request.trainer_id);
    let id = class_repo.create(&class).await?;

    tracing::info!("Created class {} ({} on {}) for trainer {}", id, class.name, class.date, class.trainer_id);
    Ok((StatusCode::CREATED, Json(id)))
}

pub async fn update_class(
    State(state): State<Arc<AppState>>,
    Path(class_id): Path<i64>,
    Json(request): Json<UpdateClassRequest>,
) -> AppResult<StatusCode> {
    let class_repo = ClassRepository::new(state.db_pool.clone());
    let mut class = class_repo
        .get_by_id(class_id)
        .await?
        .ok_or_else(|| AppError::class_not_found(class_id))?;

    request.apply(&mut class);
    class_repo.update(&class).await?;

    tracing::info!("Updated class {}", class_id);
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_class(
    State(state): State<Arc<AppState>>,
    Path(class_id): Path<i64>,
) -> AppResult<StatusCode> {
    let class_repo = ClassRepository::new(state.db_pool.clone());
    if !class_repo.delete(class_id).await? {
        return Err(AppError::class_not_found(class_id));
    }

    tracing::info!("Deleted class {}", class_id);
    Ok(StatusCode::NO_CONTENT)
}

/// Hand the class over to another trainer
pub async fn assign_trainer(
    State(state): State<Arc<AppState>>,
    Path(class_id): Path<i64>,
    Json(request): Json<AssignTrainerRequest>,
) -> AppResult<StatusCode> {
    let class_repo = ClassRepository::new(state.db_pool.clone());
    let trainer_repo = TrainerRepository::new(state.db_pool.clone());

    let trainer = trainer_repo
        .get_by_id(request.trainer_id)
        .await?
        .ok_or_else(|| AppError::trainer_not_found(request.trainer_id))?;
    let mut class = class_repo
        .get_by_id(class_id)
        .await?
        .ok_or_else(|| AppError::class_not_found(class_id))?;

    if class.trainer_id == trainer.id {
        return Err(AppError::BadRequest("Trainer already teaches this class.".to_string()));
    }

    let previous = class.trainer_id;
    class.trainer_id = trainer.id;
    class_repo.update(&class).await?;

    tracing::info!("Class {} moved from trainer {} to trainer {}", class_id, previous, trainer.id);
    Ok(StatusCode::CREATED)
}

/// Drop a class from the schedule of the trainer who owns it
pub async fn delete_class_trainer(
    State(state): State<Arc<AppState>>,
    Path((class_id, trainer_id)): Path<(i64, i64)>,
) -> AppResult<StatusCode> {
    let class_repo = ClassRepository::new(state.db_pool.clone());
    let trainer_repo = TrainerRepository::new(state.db_pool.clone());

    if trainer_repo.get_by_id(trainer_id).await?.is_none() {
        return Err(AppError::trainer_not_found(trainer_id));
    }
    let class = class_repo
        .get_by_id(class_id)
        .await?
        .ok_or_else(|| AppError::class_not_found(class_id))?;

    if class.trainer_id != trainer_id {
        return Err(AppError::NotFound(format!(
            "Trainer with ID {} not in class with ID {}.",
            trainer_id, class_id
        )));
    }

    class_repo.delete(class_id).await?;

    tracing::info!("Trainer {} dropped class {}", trainer_id, class_id);
    Ok(StatusCode::NO_CONTENT)
}
