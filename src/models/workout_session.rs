//! Workout Session Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Workout session entity (训练记录)
///
/// `type` is a Rust keyword, so the field is `session_type` internally and
/// renamed on both the JSON and row boundaries.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct WorkoutSession {
    pub id: i64,
    pub member_id: i64,
    pub date: NaiveDate,
    /// Duration in minutes
    pub duration: i64,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub session_type: String,
}

/// Create workout session payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct WorkoutSessionCreate {
    pub member_id: i64,
    pub date: NaiveDate,
    pub duration: i64,
    #[validate(length(max = 50, message = "must be at most 50 characters"))]
    #[serde(rename = "type")]
    pub session_type: String,
}

/// Update workout session payload
///
/// The owning member is fixed at creation; updates only touch the
/// session's own fields.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct WorkoutSessionUpdate {
    pub date: NaiveDate,
    pub duration: i64,
    #[validate(length(max = 50, message = "must be at most 50 characters"))]
    #[serde(rename = "type")]
    pub session_type: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_field_renames_on_json() {
        let raw = r#"{"member_id":1,"date":"2025-03-10","duration":45,"type":"cardio"}"#;
        let payload: WorkoutSessionCreate = serde_json::from_str(raw).unwrap();
        assert_eq!(payload.session_type, "cardio");
        assert_eq!(payload.date, NaiveDate::from_ymd_opt(2025, 3, 10).unwrap());

        let back = serde_json::to_value(&payload).unwrap();
        assert_eq!(back["type"], "cardio");
        assert!(back.get("session_type").is_none());
    }

    #[test]
    fn rejects_malformed_date() {
        let raw = r#"{"member_id":1,"date":"not-a-date","duration":45,"type":"cardio"}"#;
        assert!(serde_json::from_str::<WorkoutSessionCreate>(raw).is_err());
    }

    #[test]
    fn rejects_overlong_type() {
        let payload = WorkoutSessionCreate {
            member_id: 1,
            date: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
            duration: 45,
            session_type: "x".repeat(51),
        };
        let errors = payload.validate().unwrap_err();
        assert!(errors.field_errors().into_iter().any(|(f, _)| f == "type"));
    }

    #[test]
    fn update_omits_member_id() {
        let raw = r#"{"member_id":2,"date":"2025-03-10","duration":45,"type":"cardio"}"#;
        assert!(serde_json::from_str::<WorkoutSessionUpdate>(raw).is_err());
    }
}
