//! Member Repository

use super::{RepoError, RepoResult};
use crate::models::{Member, MemberCreate, MemberUpdate};
use sqlx::SqlitePool;

const MEMBER_SELECT: &str = "SELECT id, name, email, phone FROM member";

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Member>> {
    let sql = format!("{} ORDER BY id", MEMBER_SELECT);
    let rows = sqlx::query_as::<_, Member>(&sql).fetch_all(pool).await?;
    Ok(rows)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Member>> {
    let sql = format!("{} WHERE id = ?", MEMBER_SELECT);
    let row = sqlx::query_as::<_, Member>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn create(pool: &SqlitePool, data: MemberCreate) -> RepoResult<Member> {
    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO member (name, email, phone) VALUES (?, ?, ?) RETURNING id",
    )
    .bind(&data.name)
    .bind(&data.email)
    .bind(&data.phone)
    .fetch_one(pool)
    .await?;
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create member".into()))
}

pub async fn update(pool: &SqlitePool, id: i64, data: MemberUpdate) -> RepoResult<Member> {
    let rows = sqlx::query("UPDATE member SET name = ?1, email = ?2, phone = ?3 WHERE id = ?4")
        .bind(&data.name)
        .bind(&data.email)
        .bind(&data.phone)
        .bind(id)
        .execute(pool)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Member {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Member {id} not found")))
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    // Check for owned workout sessions
    let count =
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM workout_session WHERE member_id = ?")
            .bind(id)
            .fetch_one(pool)
            .await?;
    if count > 0 {
        return Err(RepoError::Conflict(format!(
            "Cannot delete member {id}: {count} workout session(s) still reference it"
        )));
    }
    let rows = sqlx::query("DELETE FROM member WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected() > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbService;
    use tempfile::TempDir;

    async fn test_pool() -> (SqlitePool, TempDir) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("test.db");
        let db = DbService::new(path.to_str().unwrap()).await.unwrap();
        (db.pool, dir)
    }

    fn ann() -> MemberCreate {
        MemberCreate {
            name: "Ann".to_string(),
            email: "ann@example.com".to_string(),
            phone: "5551234567".to_string(),
        }
    }

    #[tokio::test]
    async fn create_then_find_round_trips() {
        let (pool, _dir) = test_pool().await;
        let created = create(&pool, ann()).await.unwrap();
        assert!(created.id > 0);

        let found = find_by_id(&pool, created.id).await.unwrap().unwrap();
        assert_eq!(found.name, "Ann");
        assert_eq!(found.email, "ann@example.com");
        assert_eq!(found.phone, "5551234567");
    }

    #[tokio::test]
    async fn duplicate_email_is_a_database_error() {
        let (pool, _dir) = test_pool().await;
        create(&pool, ann()).await.unwrap();

        let err = create(&pool, ann()).await.unwrap_err();
        assert!(matches!(err, RepoError::Database(_)));

        let all = find_all(&pool).await.unwrap();
        assert_eq!(all.len(), 1);
    }

    #[tokio::test]
    async fn update_missing_member_is_not_found() {
        let (pool, _dir) = test_pool().await;
        let err = update(
            &pool,
            999,
            MemberUpdate {
                name: "Bob".to_string(),
                email: "bob@example.com".to_string(),
                phone: "555".to_string(),
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, RepoError::NotFound(_)));
    }

    #[tokio::test]
    async fn delete_reports_whether_a_row_existed() {
        let (pool, _dir) = test_pool().await;
        let created = create(&pool, ann()).await.unwrap();

        assert!(delete(&pool, created.id).await.unwrap());
        assert!(!delete(&pool, created.id).await.unwrap());
        assert!(find_by_id(&pool, created.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn delete_refuses_member_with_sessions() {
        let (pool, _dir) = test_pool().await;
        let member = create(&pool, ann()).await.unwrap();
        crate::db::repository::workout_session::create(
            &pool,
            crate::models::WorkoutSessionCreate {
                member_id: member.id,
                date: chrono::NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
                duration: 45,
                session_type: "cardio".to_string(),
            },
        )
        .await
        .unwrap();

        let err = delete(&pool, member.id).await.unwrap_err();
        assert!(matches!(err, RepoError::Conflict(_)));
        assert!(find_by_id(&pool, member.id).await.unwrap().is_some());
    }
}
