//! Briefing Generator
//!
//! 单次请求：并发拉取当日数据 → 汇总指标 → 结构化摘要 → 生成文本。
//! 不缓存、不持久化、不重试。

use std::sync::Arc;

use chrono::Utc;
use shared::models::Briefing;

use super::error::BriefingError;
use super::metrics::{aggregate, optional_config, required};
use super::narrator::NarrativeGenerator;
use super::source::ServiceDataSource;
use super::summary::build_summary;
use crate::utils::time;

/// Generates pre-shift briefings for a service date
#[derive(Clone)]
pub struct BriefingService {
    source: Arc<dyn ServiceDataSource>,
    narrator: Arc<dyn NarrativeGenerator>,
}

impl BriefingService {
    pub fn new(source: Arc<dyn ServiceDataSource>, narrator: Arc<dyn NarrativeGenerator>) -> Self {
        Self { source, narrator }
    }

    /// Name of the configured narrative backend
    pub fn narrator_name(&self) -> &'static str {
        self.narrator.name()
    }

    /// Generate the briefing for `service_date`
    ///
    /// # Errors
    /// - [`BriefingError::Validation`]: malformed date
    /// - [`BriefingError::Aggregation`]: reservations, schedules or guests unavailable
    /// - [`BriefingError::Generation`]: narrator failed or returned blank text
    pub async fn generate(&self, service_date: &str) -> Result<Briefing, BriefingError> {
        time::parse_date(service_date).map_err(BriefingError::Validation)?;

        let src = self.source.as_ref();
        let (reservations, schedules, config, guests) = tokio::join!(
            src.list_reservations(Some(service_date)),
            src.list_schedules(Some(service_date)),
            src.get_service_config(service_date),
            src.list_guests(),
        );
        let reservations = required(reservations, "reservations")?;
        let schedules = required(schedules, "schedules")?;
        let guests = required(guests, "guests")?;
        let config = optional_config(config, service_date);

        let metrics = aggregate(service_date, &reservations, &schedules, config.as_ref());
        let summary = build_summary(
            metrics,
            &reservations,
            &schedules,
            config.as_ref(),
            &guests,
        );

        let text = match self.narrator.generate(&summary).await {
            Ok(text) if !text.trim().is_empty() => text,
            Ok(_) => {
                tracing::error!(
                    service_date = %service_date,
                    narrator = self.narrator.name(),
                    "Narrative generator returned empty text"
                );
                return Err(BriefingError::Generation("empty briefing text".into()));
            }
            Err(e) => {
                tracing::error!(
                    service_date = %service_date,
                    narrator = self.narrator.name(),
                    error = %e,
                    "Briefing generation failed"
                );
                return Err(e);
            }
        };

        tracing::info!(
            service_date = %service_date,
            narrator = self.narrator.name(),
            covers = summary.metrics.total_covers,
            "Briefing generated"
        );

        Ok(Briefing {
            service_date: service_date.to_string(),
            generated_at: Utc::now().to_rfc3339(),
            briefing_text: text,
            metrics: summary.metrics,
        })
    }
}
