//! Brigade Server - 餐厅后场每日运营指标与班前简报服务
//!
//! # 架构概述
//!
//! - **数据库** (`db`): 嵌入式 SQLite 存储 (宾客、预订、员工、排班、营业配置)
//! - **简报** (`briefing`): 每日指标汇总 + 班前简报文本生成
//! - **HTTP API** (`api`): RESTful API 接口
//!
//! # 模块结构
//!
//! ```text
//! brigade-server/src/
//! ├── core/          # 配置、状态、错误
//! ├── api/           # HTTP 路由和处理器
//! ├── briefing/      # 指标汇总、摘要、文本生成
//! ├── db/            # 数据库层
//! └── utils/         # 工具函数
//! ```

pub mod api;
pub mod briefing;
pub mod core;
pub mod db;
pub mod utils;

use anyhow::Context;

// Re-export 公共类型
pub use briefing::{BriefingError, BriefingService, NarrativeGenerator};
pub use core::{Config, Server, ServerState};
pub use utils::{AppError, AppResult};

// Re-export unified error types from shared
pub use utils::{ApiResponse, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// 设置运行环境
///
/// 1. 加载 `.env` (存在时)
/// 2. 创建工作目录结构
/// 3. 初始化日志 (控制台 + `{work_dir}/logs` 按天滚动)
///
/// 返回本次读取的配置，调用方不需要再 `Config::from_env()`
pub fn setup_environment() -> anyhow::Result<Config> {
    dotenv::dotenv().ok();

    let config = Config::from_env();
    prepare_work_dir(&config)?;

    let log_dir = config.log_dir();
    init_logger_with_file(Some(&config.log_level), Some(&log_dir));
    Ok(config)
}

fn prepare_work_dir(config: &Config) -> anyhow::Result<()> {
    config
        .ensure_work_dir_structure()
        .with_context(|| format!("Failed to create work directory {}", config.work_dir))
}

pub fn print_banner() {
    println!(
        r#"
    ____       _                 __
   / __ )_____(_)___ _____ _____/ /__
  / __  / ___/ / __ `/ __ `/ __  / _ \
 / /_/ / /  / / /_/ / /_/ / /_/ /  __/
/_____/_/  /_/\__, /\__,_/\__,_/\___/
             /____/
    "#
    );
}
