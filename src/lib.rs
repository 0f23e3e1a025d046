//! Fitness Server - 健身中心管理系统
//!
//! # 架构概述
//!
//! 本模块是 Fitness Server 的主入口，提供以下核心功能：
//!
//! - **HTTP API** (`api`): 会员与训练记录的 RESTful 接口
//! - **数据库** (`db`): 嵌入式 SQLite 存储 (sqlx)
//! - **数据模型** (`models`): 实体与请求负载类型
//!
//! # 模块结构
//!
//! ```text
//! src/
//! ├── core/          # 配置、状态、服务器
//! ├── api/           # HTTP 路由和处理器
//! ├── db/            # 数据库层
//! ├── models/        # 数据模型
//! └── utils/         # 错误、日志、校验
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod models;
pub mod utils;

// Re-export 公共类型
pub use crate::core::{Config, Server, ServerState};
pub use crate::utils::{AppError, AppResult};

// Re-export logger functions
pub use crate::utils::logger::{init_logger, init_logger_with_file};

/// 设置运行环境 (dotenv, 日志)
pub fn setup_environment() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    let log_level = std::env::var("LOG_LEVEL").ok();
    let log_dir = std::env::var("LOG_DIR").ok();

    init_logger_with_file(log_level.as_deref(), log_dir.as_deref());

    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
    _______ __
   / ____(_) /_____  ___  __________
  / /_  / / __/ __ \/ _ \/ ___/ ___/
 / __/ / / /_/ / / /  __(__  |__  )
/_/   /_/\__/_/ /_/\___/____/____/
    "#
    );
}
