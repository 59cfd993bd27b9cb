use crate::db::member::MemberRepository;
use crate::error::{AppError, AppResult};
use crate::models::{CreateMemberRequest, Member, MemberResponse, UpdateMemberRequest};
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

async fn with_classes(repo: &MemberRepository, members: Vec<Member>) -> AppResult<Vec<MemberResponse>> {
    let mut responses = Vec::with_capacity(members.len());
    for member in members {
        let classes = repo.class_names(member.id).await?;
        responses.push(MemberResponse::new(member, classes));
    }
    Ok(responses)
}

pub async fn list_members(State(state): State<Arc<AppState>>) -> AppResult<Json<Vec<MemberResponse>>> {
    let member_repo = MemberRepository::new(state.db_pool.clone());
    let members = member_repo.get_all().await?;
    Ok(Json(with_classes(&member_repo, members).await?))
}

pub async fn list_active_members(State(state): State<Arc<AppState>>) -> AppResult<Json<Vec<MemberResponse>>> {
    let member_repo = MemberRepository::new(state.db_pool.clone());
    let members = member_repo.get_active().await?;
    Ok(Json(with_classes(&member_repo, members).await?))
}

pub async fn get_member(
    State(state): State<Arc<AppState>>,
    Path(member_id): Path<i64>,
) -> AppResult<Json<MemberResponse>> {
    let member_repo = MemberRepository::new(state.db_pool.clone());
    let member = member_repo
        .get_by_id(member_id)
        .await?
        .ok_or_else(|| AppError::member_not_found(member_id))?;
    let classes = member_repo.class_names(member.id).await?;
    Ok(Json(MemberResponse::new(member, classes)))
}

pub async fn create_member(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CreateMemberRequest>,
) -> AppResult<(StatusCode, Json<i64>)> {
    let member_repo = MemberRepository::new(state.db_pool.clone());
    let member = Member::new(request.name, request.active);
    let id = member_repo.create(&member).await?;

    tracing::info!("Created member {} ({})", id, member.name);
    Ok((StatusCode::CREATED, Json(id)))
}

pub async fn update_member(
    State(state): State<Arc<AppState>>,
    Path(member_id): Path<i64>,
    Json(request): Json<UpdateMemberRequest>,
) -> AppResult<StatusCode> {
    let member_repo = MemberRepository::new(state.db_pool.clone());
    let mut member = member_repo
        .get_by_id(member_id)
        .await?
        .ok_or_else(|| AppError::member_not_found(member_id))?;

    request.apply(&mut member);
    member_repo.update(&member).await?;

    tracing::info!("Updated member {}", member_id);
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_member(
    State(state): State<Arc<AppState>>,
    Path(member_id): Path<i64>,
) -> AppResult<StatusCode> {
    let member_repo = MemberRepository::new(state.db_pool.clone());
    if !member_repo.delete(member_id).await? {
        return Err(AppError::member_not_found(member_id));
    }

    tracing::info!("Deleted member {}", member_id);
    Ok(StatusCode::NO_CONTENT)
}
