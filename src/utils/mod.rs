//! Utility module — shared helpers
//!
//! # Contents
//!
//! - [`AppError`] / [`AppResult`] — application error type and result alias
//! - [`ValidatedJson`] — JSON extractor that runs schema validation
//! - [`logger`] — tracing subscriber setup

pub mod error;
pub mod logger;
pub mod validation;

pub use error::{AppError, AppResult};
pub use validation::ValidatedJson;
