//! Error handling for the console API server.

pub mod response;
pub mod types;

pub use types::{ApiError, ApiResult};
