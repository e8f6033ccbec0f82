//! Unified error handling for the ritrends crate
//!
//! The analytics core never fails: thin data is reported through
//! [`Insufficient`](crate::analytics::keyword_trends::Insufficient) values
//! carried inside results. This module covers the boundary around it,
//! reading report files and loading configuration.
//!
//! # Architecture
//!
//! - [`TrendsErrorTrait`] - Common interface for error handling strategies
//! - [`ErrorCategory`] - Classification of errors
//! - [`Error`] - Unified error enum
//!
//! # Usage
//!
//! ```rust,ignore
//! use ritrends::error::{Error, TrendsErrorTrait};
//!
//! fn report(err: &Error) {
//!     eprintln!("[{}] {}", err.category().localized_desc(), err.localized_desc());
//! }
//! ```

use std::io;
use thiserror::Error;

/// Common trait for ritrends error types
pub trait TrendsErrorTrait: std::error::Error {
    /// Check if this error is recoverable (can be retried)
    fn is_recoverable(&self) -> bool;

    /// Get localized description for user-facing messages
    fn localized_desc(&self) -> String;

    /// Get the error category for handling strategies
    fn category(&self) -> ErrorCategory;
}

/// Classification of errors for handling strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Malformed or unreadable report data
    Input,
    /// Storage and I/O errors
    Storage,
    /// Configuration and validation errors
    Config,
}

impl ErrorCategory {
    /// Get localized description for the category
    pub fn localized_desc(&self) -> &'static str {
        match self {
            Self::Input => "입력 데이터 오류",
            Self::Storage => "저장소 오류",
            Self::Config => "설정 오류",
        }
    }
}

/// Unified error type for the ritrends crate
#[derive(Error, Debug)]
pub enum Error {
    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration errors
    #[error("Config error: {0}")]
    Config(String),

    /// Report data that cannot be normalized
    #[error("Invalid input {origin}: {message}")]
    Input { origin: String, message: String },
}

impl TrendsErrorTrait for Error {
    fn is_recoverable(&self) -> bool {
        match self {
            Self::Io(_) => true, // I/O errors are often transient
            Self::Json(_) => false,
            Self::Config(_) => false,
            Self::Input { .. } => false,
        }
    }

    fn localized_desc(&self) -> String {
        match self {
            Self::Io(e) => format!("입출력 오류: {e}"),
            Self::Json(e) => format!("JSON 처리 오류: {e}"),
            Self::Config(msg) => format!("설정 오류: {msg}"),
            Self::Input { origin, message } => format!("잘못된 입력 ({origin}): {message}"),
        }
    }

    fn category(&self) -> ErrorCategory {
        match self {
            Self::Io(_) => ErrorCategory::Storage,
            Self::Json(_) | Self::Input { .. } => ErrorCategory::Input,
            Self::Config(_) => ErrorCategory::Config,
        }
    }
}

impl Error {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an input error for the named origin (usually a file path)
    pub fn input(origin: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Input {
            origin: origin.into(),
            message: message.into(),
        }
    }
}

/// Result type alias using the unified Error type
pub type Result<T> = std::result::Result<T, Error>;
