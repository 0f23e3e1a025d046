//! Member API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::core::ServerState;
use crate::db::repository::{member, workout_session};
use crate::models::{Member, MemberCreate, MemberUpdate, WorkoutSession};
use crate::utils::{AppError, AppResult, ValidatedJson};

/// GET /members - 获取所有会员
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Member>>> {
    let members = member::find_all(&state.pool).await?;
    Ok(Json(members))
}

/// GET /members/{id} - 获取单个会员
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Member>> {
    let member = member::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Member {}", id)))?;

    Ok(Json(member))
}

/// POST /members - 创建会员
pub async fn create(
    State(state): State<ServerState>,
    ValidatedJson(payload): ValidatedJson<MemberCreate>,
) -> AppResult<(StatusCode, Json<Member>)> {
    let member = member::create(&state.pool, payload).await?;

    Ok((StatusCode::CREATED, Json(member)))
}

/// PUT /members/{id} - 更新会员
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    ValidatedJson(payload): ValidatedJson<MemberUpdate>,
) -> AppResult<Json<Member>> {
    member::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Member {}", id)))?;

    let member = member::update(&state.pool, id, payload).await?;

    Ok(Json(member))
}

/// DELETE /members/{id} - 删除会员
///
/// 拒绝删除仍有训练记录的会员（409）。
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    if !member::delete(&state.pool, id).await? {
        return Err(AppError::not_found(format!("Member {}", id)));
    }

    Ok(StatusCode::NO_CONTENT)
}

/// GET /members/{member_id}/workout_sessions - 获取会员的训练记录
///
/// 纯过滤查询，未知会员同样返回空数组。
pub async fn list_workout_sessions(
    State(state): State<ServerState>,
    Path(member_id): Path<i64>,
) -> AppResult<Json<Vec<WorkoutSession>>> {
    let sessions = workout_session::find_by_member(&state.pool, member_id).await?;

    Ok(Json(sessions))
}
