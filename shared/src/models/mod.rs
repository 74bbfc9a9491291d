//! Data models
//!
//! Shared between brigade-server and its clients (via API).
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are `i64` (SQLite INTEGER PRIMARY KEY, snowflake generated).
//! Service dates are `YYYY-MM-DD` strings, times of day are `HH:MM`.

pub mod briefing;
pub mod guest;
pub mod reservation;
pub mod schedule;
pub mod service_config;
pub mod staff;

// Re-exports
pub use briefing::*;
pub use guest::*;
pub use reservation::*;
pub use schedule::*;
pub use service_config::*;
pub use staff::*;
