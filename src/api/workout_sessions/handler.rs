//! Workout Session API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::core::ServerState;
use crate::db::repository::{member, workout_session};
use crate::models::{WorkoutSession, WorkoutSessionCreate, WorkoutSessionUpdate};
use crate::utils::{AppError, AppResult, ValidatedJson};

/// GET /workout_sessions - 获取所有训练记录
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<WorkoutSession>>> {
    let sessions = workout_session::find_all(&state.pool).await?;
    Ok(Json(sessions))
}

/// POST /workout_sessions - 创建训练记录
///
/// member_id 必须指向已存在的会员，否则按字段错误返回 400。
pub async fn create(
    State(state): State<ServerState>,
    ValidatedJson(payload): ValidatedJson<WorkoutSessionCreate>,
) -> AppResult<(StatusCode, Json<WorkoutSession>)> {
    if member::find_by_id(&state.pool, payload.member_id)
        .await?
        .is_none()
    {
        return Err(AppError::field_error(
            "member_id",
            format!("member {} does not exist", payload.member_id),
        ));
    }

    let session = workout_session::create(&state.pool, payload).await?;

    Ok((StatusCode::CREATED, Json(session)))
}

/// PUT /workout_sessions/{id} - 更新训练记录
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    ValidatedJson(payload): ValidatedJson<WorkoutSessionUpdate>,
) -> AppResult<Json<WorkoutSession>> {
    workout_session::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Workout session {}", id)))?;

    let session = workout_session::update(&state.pool, id, payload).await?;

    Ok(Json(session))
}

/// DELETE /workout_sessions/{id} - 删除训练记录
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    if !workout_session::delete(&state.pool, id).await? {
        return Err(AppError::not_found(format!("Workout session {}", id)));
    }

    Ok(StatusCode::NO_CONTENT)
}
