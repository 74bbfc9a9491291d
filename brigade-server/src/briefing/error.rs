//! Briefing pipeline errors

use shared::error::{AppError, ErrorCode};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BriefingError {
    /// Malformed input (e.g. service date not `YYYY-MM-DD`)
    #[error("{0}")]
    Validation(AppError),

    /// A required per-date fetch (reservations / schedules / guests) failed
    #[error("Failed to gather service data: {0}")]
    Aggregation(String),

    /// The narrative could not be produced
    #[error("Failed to generate briefing: {0}")]
    Generation(String),
}

impl From<BriefingError> for AppError {
    fn from(err: BriefingError) -> Self {
        match err {
            BriefingError::Validation(app_err) => app_err,
            BriefingError::Aggregation(detail) => {
                AppError::with_message(ErrorCode::AggregationFailed, format!("Failed to gather service data: {detail}"))
            }
            BriefingError::Generation(detail) => {
                AppError::with_message(ErrorCode::GenerationFailed, format!("Failed to generate briefing: {detail}"))
            }
        }
    }
}
