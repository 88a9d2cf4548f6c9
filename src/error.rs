//! Global error handling for accumulate
//!
//! This module provides a centralized error type that can represent errors
//! from all modules in the project.

use std::io;

use thiserror::Error;

/// Global error type for accumulate operations
#[derive(Error, Debug)]
pub enum AccumulateError {
    /// File system errors
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Interactive prompt errors
    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    /// The user interrupted an interactive prompt; not a failure
    #[error("selection cancelled by user")]
    Cancelled,
}

/// Specialized Result type for accumulate operations
pub type Result<T> = std::result::Result<T, AccumulateError>;

/// Creates an AccumulateError with a formatted message
#[macro_export]
macro_rules! error {
    ($error_type:ident, $($arg:tt)*) => {
        $crate::error::AccumulateError::$error_type(format!($($arg)*))
    };
}

/// Returns an error result with a formatted message
#[macro_export]
macro_rules! bail {
    ($error_type:ident, $($arg:tt)*) => {
        return Err($crate::error!($error_type, $($arg)*))
    };
}

/// Ensures a condition is true, otherwise returns an error
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $error_type:ident, $($arg:tt)*) => {
        if !($cond) {
            $crate::bail!($error_type, $($arg)*)
        }
    };
}
