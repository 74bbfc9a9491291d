//! 营业简报模块 - 每日运营指标汇总与班前简报生成
//!
//! # 数据流
//!
//! ```text
//! service_date
//!     │
//!     ├─► ServiceDataSource  (reservations ∥ schedules ∥ config ∥ guests)
//!     │
//!     ├─► aggregate()        → ServiceMetrics
//!     ├─► build_summary()    → StructuredSummary
//!     └─► NarrativeGenerator → briefing_text
//! ```
//!
//! 指标计算是纯函数，每次请求完整重算，不做缓存。
//! 配置缺失或读取失败按 0/0 walk-in 处理；预订、排班读取失败则整体失败。
//! 文本生成失败直接返回 [`BriefingError::Generation`]，不回退到模板。

pub mod error;
pub mod metrics;
pub mod narrator;
pub mod openai;
pub mod service;
pub mod source;
pub mod summary;
pub mod template;

pub use error::BriefingError;
pub use metrics::{aggregate, compute_metrics};
pub use narrator::NarrativeGenerator;
pub use openai::OpenAiNarrator;
pub use service::BriefingService;
pub use source::{ServiceDataSource, SqliteDataSource};
pub use summary::{StructuredSummary, build_summary};
pub use template::TemplateNarrator;

#[cfg(test)]
pub(crate) mod testing;
