//! Shared types for the Brigade back-of-house workspace
//!
//! Record models exchanged between the server and its clients, plus the
//! unified error system every crate converges on.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use axum::Json;
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
