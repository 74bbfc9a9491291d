use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use super::error::{Result, ServerError};

/// 简报文本的生成方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NarrativeBackend {
    /// 固定模板，离线可用
    #[default]
    Template,
    /// OpenAI 兼容的 chat completions 接口
    OpenAi,
}

impl FromStr for NarrativeBackend {
    type Err = ServerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "template" => Ok(Self::Template),
            "openai" => Ok(Self::OpenAi),
            other => Err(ServerError::Config(format!(
                "BRIEFING_BACKEND must be 'template' or 'openai', got '{other}'"
            ))),
        }
    }
}

/// 文本生成服务配置
#[derive(Clone)]
pub struct LlmConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    /// HTTP 客户端超时 (毫秒)
    pub timeout_ms: u64,
}

impl fmt::Debug for LlmConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LlmConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("timeout_ms", &self.timeout_ms)
            .finish()
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: "https://api.openai.com/v1".into(),
            model: "gpt-4o".into(),
            timeout_ms: 60_000,
        }
    }
}

/// 服务器配置
///
/// # 环境变量
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | WORK_DIR | ./data | 工作目录 (数据库、日志) |
/// | HTTP_PORT | 8000 | HTTP 服务端口 |
/// | ENVIRONMENT | development | 运行环境 |
/// | LOG_LEVEL | info | 日志级别 |
/// | CORS_ORIGINS | * | 允许的来源，逗号分隔 |
/// | BRIEFING_BACKEND | template | template / openai |
/// | LLM_API_KEY | - | openai 模式下必填 |
/// | LLM_BASE_URL | https://api.openai.com/v1 | chat completions 地址 |
/// | LLM_MODEL | gpt-4o | 模型 |
/// | LLM_TIMEOUT_MS | 60000 | 生成请求超时(毫秒) |
///
/// # 示例
///
/// ```ignore
/// WORK_DIR=/srv/brigade BRIEFING_BACKEND=openai LLM_API_KEY=sk-... cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// 工作目录，存储数据库、日志等文件
    pub work_dir: String,
    /// HTTP API 服务端口
    pub http_port: u16,
    /// 运行环境: development | staging | production
    pub environment: String,
    /// 日志级别
    pub log_level: String,
    /// CORS 允许来源 (`*` 表示任意)
    pub cors_origins: Vec<String>,
    /// 简报生成方式
    pub narrative_backend: NarrativeBackend,
    /// 文本生成服务
    pub llm: LlmConfig,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置或无法解析，使用默认值。
    /// 未知的 BRIEFING_BACKEND 回落到 template 并在 [`validate`](Self::validate) 中报告。
    pub fn from_env() -> Self {
        let defaults = LlmConfig::default();
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "./data".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            cors_origins: std::env::var("CORS_ORIGINS")
                .map(|v| parse_origins(&v))
                .unwrap_or_else(|_| vec!["*".into()]),
            narrative_backend: std::env::var("BRIEFING_BACKEND")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_default(),
            llm: LlmConfig {
                api_key: std::env::var("LLM_API_KEY")
                    .ok()
                    .filter(|k| !k.trim().is_empty()),
                base_url: std::env::var("LLM_BASE_URL").unwrap_or(defaults.base_url),
                model: std::env::var("LLM_MODEL").unwrap_or(defaults.model),
                timeout_ms: std::env::var("LLM_TIMEOUT_MS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.timeout_ms),
            },
        }
    }

    /// 启动前校验
    pub fn validate(&self) -> Result<()> {
        if let Ok(raw) = std::env::var("BRIEFING_BACKEND") {
            raw.parse::<NarrativeBackend>()?;
        }
        if self.narrative_backend == NarrativeBackend::OpenAi && self.llm.api_key.is_none() {
            return Err(ServerError::Config(
                "BRIEFING_BACKEND=openai requires LLM_API_KEY".into(),
            ));
        }
        Ok(())
    }

    /// 使用自定义工作目录 (测试用)
    pub fn with_work_dir(work_dir: impl Into<String>) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config
    }

    /// 数据库目录: {work_dir}/database
    pub fn database_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("database")
    }

    /// 数据库文件: {work_dir}/database/brigade.db
    pub fn database_path(&self) -> PathBuf {
        self.database_dir().join("brigade.db")
    }

    /// 日志目录: {work_dir}/logs
    pub fn log_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("logs")
    }

    /// 确保工作目录结构存在
    pub fn ensure_work_dir_structure(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(self.database_dir())?;
        std::fs::create_dir_all(self.log_dir())?;
        Ok(())
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// 是否开发环境
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    let origins: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(String::from)
        .collect();
    if origins.is_empty() {
        vec!["*".into()]
    } else {
        origins
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn template_config() -> Config {
        Config {
            work_dir: "./data".into(),
            http_port: 8000,
            environment: "development".into(),
            log_level: "info".into(),
            cors_origins: vec!["*".into()],
            narrative_backend: NarrativeBackend::Template,
            llm: LlmConfig::default(),
        }
    }

    #[test]
    fn test_backend_parse() {
        assert_eq!(
            "openai".parse::<NarrativeBackend>().unwrap(),
            NarrativeBackend::OpenAi
        );
        assert_eq!(
            " Template ".parse::<NarrativeBackend>().unwrap(),
            NarrativeBackend::Template
        );
        assert!("gpt".parse::<NarrativeBackend>().is_err());
    }

    #[test]
    fn test_parse_origins() {
        assert_eq!(
            parse_origins("http://a.test, http://b.test"),
            vec!["http://a.test", "http://b.test"]
        );
        assert_eq!(parse_origins(" , "), vec!["*"]);
    }

    #[test]
    fn test_openai_without_key_is_config_error() {
        let mut config = template_config();
        config.narrative_backend = NarrativeBackend::OpenAi;
        assert!(matches!(config.validate(), Err(ServerError::Config(_))));

        config.llm.api_key = Some("sk-test".into());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_api_key_redacted_in_debug() {
        let llm = LlmConfig {
            api_key: Some("sk-secret".into()),
            ..LlmConfig::default()
        };
        let debug = format!("{llm:?}");
        assert!(!debug.contains("sk-secret"));
        assert!(debug.contains("REDACTED"));
    }

    #[test]
    fn test_paths() {
        let mut config = template_config();
        config.work_dir = "/srv/brigade".into();
        assert_eq!(
            config.database_path(),
            PathBuf::from("/srv/brigade/database/brigade.db")
        );
        assert_eq!(config.log_dir(), PathBuf::from("/srv/brigade/logs"));
    }
}
