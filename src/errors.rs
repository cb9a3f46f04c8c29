//! Centralized error handling.
//!
//! The error type lives in the shared `common` crate so every workspace
//! member converts failures to HTTP responses the same way.

pub use common::{AppError, AppResult, OptionExt};
