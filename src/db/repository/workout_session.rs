//! Workout Session Repository

use super::{RepoError, RepoResult};
use crate::models::{WorkoutSession, WorkoutSessionCreate, WorkoutSessionUpdate};
use sqlx::SqlitePool;

const SESSION_SELECT: &str = "SELECT id, member_id, date, duration, type FROM workout_session";

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<WorkoutSession>> {
    let sql = format!("{} ORDER BY date, id", SESSION_SELECT);
    let rows = sqlx::query_as::<_, WorkoutSession>(&sql)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<WorkoutSession>> {
    let sql = format!("{} WHERE id = ?", SESSION_SELECT);
    let row = sqlx::query_as::<_, WorkoutSession>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn find_by_member(pool: &SqlitePool, member_id: i64) -> RepoResult<Vec<WorkoutSession>> {
    let sql = format!("{} WHERE member_id = ? ORDER BY date, id", SESSION_SELECT);
    let rows = sqlx::query_as::<_, WorkoutSession>(&sql)
        .bind(member_id)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

pub async fn create(pool: &SqlitePool, data: WorkoutSessionCreate) -> RepoResult<WorkoutSession> {
    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO workout_session (member_id, date, duration, type) VALUES (?, ?, ?, ?) RETURNING id",
    )
    .bind(data.member_id)
    .bind(data.date)
    .bind(data.duration)
    .bind(&data.session_type)
    .fetch_one(pool)
    .await?;
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create workout session".into()))
}

pub async fn update(
    pool: &SqlitePool,
    id: i64,
    data: WorkoutSessionUpdate,
) -> RepoResult<WorkoutSession> {
    let rows =
        sqlx::query("UPDATE workout_session SET date = ?1, duration = ?2, type = ?3 WHERE id = ?4")
            .bind(data.date)
            .bind(data.duration)
            .bind(&data.session_type)
            .bind(id)
            .execute(pool)
            .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!(
            "Workout session {id} not found"
        )));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Workout session {id} not found")))
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM workout_session WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected() > 0)
}
