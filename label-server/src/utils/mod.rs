//! Utility modules - errors and logging

pub mod error;
pub mod logger;

pub use error::{AppError, AppResult};
