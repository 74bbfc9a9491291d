//! Staff Model (团队成员)

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{AppError, ErrorCode};

/// Staff position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "lowercase"))]
pub enum StaffPosition {
    Server,
    Host,
    Bartender,
    Chef,
    Manager,
}

impl StaffPosition {
    pub const ALL: [StaffPosition; 5] = [
        Self::Server,
        Self::Host,
        Self::Bartender,
        Self::Chef,
        Self::Manager,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Server => "server",
            Self::Host => "host",
            Self::Bartender => "bartender",
            Self::Chef => "chef",
            Self::Manager => "manager",
        }
    }
}

impl fmt::Display for StaffPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StaffPosition {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| {
                AppError::with_message(
                    ErrorCode::InvalidPosition,
                    format!(
                        "position must be one of server, host, bartender, chef, manager (got '{s}')"
                    ),
                )
                .with_detail("field", "position")
            })
    }
}

/// Staff member entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct StaffMember {
    pub id: i64,
    pub name: String,
    pub position: StaffPosition,
    pub hourly_rate: f64,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Create staff member payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffCreate {
    pub name: String,
    pub position: String,
    pub hourly_rate: f64,
}

/// Update staff member payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StaffUpdate {
    pub name: Option<String>,
    pub position: Option<String>,
    pub hourly_rate: Option<f64>,
}

impl StaffUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.position.is_none() && self.hourly_rate.is_none()
    }
}
