use std::sync::Arc;
use std::time::Duration;

use sqlx::SqlitePool;

use crate::briefing::{
    BriefingService, NarrativeGenerator, OpenAiNarrator, ServiceDataSource, SqliteDataSource,
    TemplateNarrator,
};
use crate::core::{Config, NarrativeBackend, Result, ServerError};
use crate::db::DbService;

/// 服务器状态 - 持有所有服务的引用
///
/// ServerState 是整个应用的核心状态容器，所有字段都是 Arc 或轻量句柄，
/// clone 成本极低，可以直接作为 axum 的 State。
///
/// | 字段 | 说明 |
/// |------|------|
/// | config | 服务器配置 |
/// | pool | SQLite 连接池 |
/// | source | 记录读取接口 (聚合、简报共用) |
/// | briefing | 简报生成服务 |
#[derive(Clone)]
pub struct ServerState {
    pub config: Config,
    pub pool: SqlitePool,
    pub source: Arc<dyn ServiceDataSource>,
    pub briefing: Arc<BriefingService>,
}

impl ServerState {
    /// 用已打开的连接池和指定的文本生成器组装状态
    pub fn new(config: Config, pool: SqlitePool, narrator: Arc<dyn NarrativeGenerator>) -> Self {
        let source: Arc<dyn ServiceDataSource> = Arc::new(SqliteDataSource::new(pool.clone()));
        let briefing = Arc::new(BriefingService::new(source.clone(), narrator));
        Self {
            config,
            pool,
            source,
            briefing,
        }
    }

    /// 初始化服务器状态
    ///
    /// 1. 确保工作目录结构存在
    /// 2. 打开数据库并执行迁移
    /// 3. 按配置选择简报文本生成方式
    pub async fn initialize(config: &Config) -> Result<Self> {
        config.ensure_work_dir_structure()?;

        let db_path = config.database_path();
        let db = DbService::new(&db_path.to_string_lossy())
            .await
            .map_err(|e| ServerError::Database(e.message))?;

        let narrator = build_narrator(config)?;
        tracing::info!(backend = narrator.name(), "Briefing narrator ready");

        Ok(Self::new(config.clone(), db.pool, narrator))
    }
}

fn build_narrator(config: &Config) -> Result<Arc<dyn NarrativeGenerator>> {
    match config.narrative_backend {
        NarrativeBackend::Template => Ok(Arc::new(TemplateNarrator::new())),
        NarrativeBackend::OpenAi => {
            let api_key = config.llm.api_key.clone().ok_or_else(|| {
                ServerError::Config("BRIEFING_BACKEND=openai requires LLM_API_KEY".into())
            })?;
            let narrator = OpenAiNarrator::new(
                api_key,
                config.llm.base_url.clone(),
                config.llm.model.clone(),
                Duration::from_millis(config.llm.timeout_ms),
            )
            .map_err(|e| ServerError::Config(e.to_string()))?;
            Ok(Arc::new(narrator))
        }
    }
}
