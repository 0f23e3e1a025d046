//! Member Model

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Member entity (会员)
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Member {
    pub id: i64,
    pub name: String,
    /// Unique across all members (UNIQUE constraint on the table)
    pub email: String,
    pub phone: String,
}

/// Create member payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct MemberCreate {
    #[validate(length(min = 1, max = 100, message = "must be 1 to 100 characters"))]
    pub name: String,
    #[validate(length(min = 1, max = 100, message = "must be 1 to 100 characters"))]
    pub email: String,
    #[validate(length(max = 15, message = "must be at most 15 characters"))]
    pub phone: String,
}

/// Update member payload
///
/// PUT replaces the whole record, so every field is required, unlike a
/// partial update.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct MemberUpdate {
    #[validate(length(min = 1, max = 100, message = "must be 1 to 100 characters"))]
    pub name: String,
    #[validate(length(min = 1, max = 100, message = "must be 1 to 100 characters"))]
    pub email: String,
    #[validate(length(max = 15, message = "must be at most 15 characters"))]
    pub phone: String,
}
