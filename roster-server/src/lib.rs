//! Roster Server - 员工目录服务
//!
//! # 架构概述
//!
//! 本模块是 Roster Server 的主入口，提供以下核心功能：
//!
//! - **记录存储** (`store`): JSON 文件支持的员工集合，互斥的读-改-写
//! - **HTTP API** (`api`): RESTful 增删改查接口
//! - **核心** (`core`): 配置、状态、HTTP 服务器
//!
//! # 模块结构
//!
//! ```text
//! roster-server/src/
//! ├── core/          # 配置、状态、HTTP 服务器
//! ├── api/           # HTTP 路由和处理器
//! ├── store/         # JSON 文件记录存储
//! └── utils/         # 错误、日志等工具
//! ```

pub mod api;
pub mod core;
pub mod store;
pub mod utils;

// Re-export 公共类型
pub use crate::core::{Config, Server, ServerState, build_app};
pub use crate::store::{EmployeeStore, StoreError};
pub use crate::utils::{AppError, AppResult};

// Re-export logger functions
pub use crate::utils::logger::{init_logger, init_logger_with_file};

/// 设置环境 (dotenv, 日志)
///
/// 没有 .env 文件时静默跳过
pub fn setup_environment() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    init_logger();
    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
    ____             __
   / __ \____  _____/ /____  _____
  / /_/ / __ \/ ___/ __/ _ \/ ___/
 / _, _/ /_/ (__  ) /_/  __/ /
/_/ |_|\____/____/\__/\___/_/
    "#
    );
}
