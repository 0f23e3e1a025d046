//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 欢迎页和健康检查
//! - [`members`] - 会员管理接口
//! - [`workout_sessions`] - 训练记录管理接口

pub mod health;
pub mod members;
pub mod workout_sessions;

// Re-export common types for handlers
pub use crate::utils::AppResult;
