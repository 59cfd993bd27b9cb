use crate::db::attendance::AttendanceRepository;
use crate::db::class::ClassRepository;
use crate::db::member::MemberRepository;
use crate::db::trainer::TrainerRepository;
use crate::error::{AppError, AppResult};
use crate::models::{AddMemberRequest, Attendance};
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

pub async fn list_class_members(
    State(state): State<Arc<AppState>>,
    Path(class_id): Path<i64>,
) -> AppResult<Json<Vec<String>>> {
    let class_repo = ClassRepository::new(state.db_pool.clone());
    if class_repo.get_by_id(class_id).await?.is_none() {
        return Err(AppError::class_not_found(class_id));
    }
    Ok(Json(class_repo.member_names(class_id).await?))
}

pub async fn class_member_count(
    State(state): State<Arc<AppState>>,
    Path(class_id): Path<i64>,
) -> AppResult<Json<i64>> {
    let class_repo = ClassRepository::new(state.db_pool.clone());
    if class_repo.get_by_id(class_id).await?.is_none() {
        return Err(AppError::class_not_found(class_id));
    }
    Ok(Json(class_repo.member_count(class_id).await?))
}

/// Member count of a class, only answered for the trainer who teaches it
pub async fn trainer_class_member_count(
    State(state): State<Arc<AppState>>,
    Path((trainer_id, class_id)): Path<(i64, i64)>,
) -> AppResult<Json<i64>> {
    let class_repo = ClassRepository::new(state.db_pool.clone());
    let trainer_repo = TrainerRepository::new(state.db_pool.clone());

    let class = class_repo
        .get_by_id(class_id)
        .await?
        .ok_or_else(|| AppError::class_not_found(class_id))?;
    let trainer = trainer_repo
        .get_by_id(trainer_id)
        .await?
        .ok_or_else(|| AppError::trainer_not_found(trainer_id))?;

    if trainer.id != class.trainer_id {
        return Err(AppError::NotFound("Trainer not teaching this class.".to_string()));
    }
    Ok(Json(class_repo.member_count(class_id).await?))
}

pub async fn add_member_to_class(
    State(state): State<Arc<AppState>>,
    Path(class_id): Path<i64>,
    Json(request): Json<AddMemberRequest>,
) -> AppResult<StatusCode> {
    let member_repo = MemberRepository::new(state.db_pool.clone());
    let class_repo = ClassRepository::new(state.db_pool.clone());
    let attendance_repo = AttendanceRepository::new(state.db_pool.clone());

    if member_repo.get_by_id(request.member_id).await?.is_none() {
        return Err(AppError::member_not_found(request.member_id));
    }
    if class_repo.get_by_id(class_id).await?.is_none() {
        return Err(AppError::class_not_found(class_id));
    }
    if attendance_repo.get(request.member_id, class_id).await?.is_some() {
        return Err(AppError::BadRequest("Member already in class.".to_string()));
    }

    attendance_repo
        .create(&Attendance { member_id: request.member_id, class_id })
        .await?;

    tracing::info!("Member {} joined class {}", request.member_id, class_id);
    Ok(StatusCode::CREATED)
}

pub async fn remove_member_from_class(
    State(state): State<Arc<AppState>>,
    Path((class_id, member_id)): Path<(i64, i64)>,
) -> AppResult<StatusCode> {
    let member_repo = MemberRepository::new(state.db_pool.clone());
    let class_repo = ClassRepository::new(state.db_pool.clone());
    let attendance_repo = AttendanceRepository::new(state.db_pool.clone());

    if member_repo.get_by_id(member_id).await?.is_none() {
        return Err(AppError::member_not_found(member_id));
    }
    if class_repo.get_by_id(class_id).await?.is_none() {
        return Err(AppError::class_not_found(class_id));
    }
    if !attendance_repo.delete(member_id, class_id).await? {
        return Err(AppError::NotFound(format!(
            "Member with ID {} not in class with ID {}.",
            member_id, class_id
        )));
    }

    tracing::info!("Member {} left class {}", member_id, class_id);
    Ok(StatusCode::NO_CONTENT)
}
