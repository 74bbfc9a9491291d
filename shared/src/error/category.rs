//! Error category classification

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Error category classification based on error code ranges
///
/// - 0xxx: General errors
/// - 4xxx: Guest & reservation errors
/// - 5xxx: Staffing errors
/// - 6xxx: Service configuration errors
/// - 7xxx: Briefing errors
/// - 9xxx: System errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// General errors (0xxx)
    General,
    /// Guest & reservation errors (4xxx)
    Guest,
    /// Staffing errors (5xxx)
    Staffing,
    /// Service configuration errors (6xxx)
    ServiceConfig,
    /// Briefing errors (7xxx)
    Briefing,
    /// System errors (9xxx)
    System,
}

impl ErrorCategory {
    /// Determine category from error code value
    pub fn from_code(code: u16) -> Self {
        match code {
            0..4000 => Self::General,
            4000..5000 => Self::Guest,
            5000..6000 => Self::Staffing,
            6000..7000 => Self::ServiceConfig,
            7000..8000 => Self::Briefing,
            _ => Self::System,
        }
    }

    /// Get the string name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Guest => "guest",
            Self::Staffing => "staffing",
            Self::ServiceConfig => "service_config",
            Self::Briefing => "briefing",
            Self::System => "system",
        }
    }
}

impl ErrorCode {
    /// Get the category for this error code
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}
