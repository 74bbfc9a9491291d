//! Narrative generation boundary

use async_trait::async_trait;

use super::error::BriefingError;
use super::summary::StructuredSummary;

/// Turns a [`StructuredSummary`] into briefing prose.
///
/// Implementations must fail with [`BriefingError::Generation`] rather
/// than return partial or placeholder text.
#[async_trait]
pub trait NarrativeGenerator: Send + Sync {
    /// Backend name for logs
    fn name(&self) -> &'static str;

    async fn generate(&self, summary: &StructuredSummary) -> Result<String, BriefingError>;
}
