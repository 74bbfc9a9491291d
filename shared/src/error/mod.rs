//! Unified error system for Brigade
//!
//! - [`ErrorCode`]: Standardized error codes for all error types
//! - [`ErrorCategory`]: Classification of errors by domain
//! - [`AppError`]: Rich error type with codes, messages, and details
//! - [`ApiResponse`]: Error body returned by failing endpoints
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 4xxx: Guest & reservation errors
//! - 5xxx: Staffing errors
//! - 6xxx: Service configuration errors
//! - 7xxx: Briefing errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode, ApiResponse};
//!
//! let err = AppError::with_message(ErrorCode::InvalidPartySize, "party_size must be at least 1")
//!     .with_detail("field", "party_size");
//!
//! let response = ApiResponse::error(&err);
//! assert_eq!(response.code, 4102);
//! ```

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{ApiResponse, AppError, AppResult};
