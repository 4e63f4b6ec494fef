// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error types for the chunkwise grouping library.
//!
//! This module provides the error handling system shared by all grouping
//! operations. It defines a root [`ChunkError`] type with specific variants for
//! the different failure modes, allowing library users to handle errors
//! appropriately.
//!
//! # Examples
//!
//! ```
//! use chunkwise_core::{ChunkError, Result};
//!
//! fn deliver_batch() -> Result<()> {
//!     // Operation that might fail
//!     Err(ChunkError::group_error("Bulk insert rejected"))
//! }
//! ```

/// Root error type for all chunkwise operations
///
/// This enum encompasses all possible error conditions that can occur while a
/// grouping call drives its source: failures raised by a caller-supplied split
/// rule, and failures raised by the group callback itself.
#[derive(Debug, thiserror::Error)]
pub enum ChunkError {
    /// Group processing encountered an error
    ///
    /// This is a general error for grouping operations that don't fit
    /// other specific categories.
    #[error("Group processing error: {context}")]
    GroupProcessingError {
        /// Description of what went wrong while forming or delivering a group
        context: String,
    },

    /// Custom error from user code
    ///
    /// This wraps errors produced by user-provided split rules and callbacks,
    /// allowing them to be propagated through the chunkwise error system.
    #[error("User error: {0}")]
    UserError(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl ChunkError {
    /// Create a group processing error with the given context
    pub fn group_error(context: impl Into<String>) -> Self {
        Self::GroupProcessingError {
            context: context.into(),
        }
    }

    /// Wrap a user error
    pub fn user_error(error: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::UserError(Box::new(error))
    }
}

/// Specialized Result type for chunkwise operations
///
/// This is a type alias for `std::result::Result<T, ChunkError>`, providing
/// a convenient shorthand for functions that return chunkwise errors.
///
/// # Examples
///
/// ```
/// use chunkwise_core::Result;
///
/// fn process() -> Result<String> {
///     Ok("processed".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChunkError>;

/// Helper trait for adding context to `Result`s
///
/// This allows chaining context information onto errors in a fluent style.
pub trait ResultExt<T> {
    /// Add context to an error
    ///
    /// # Errors
    /// Returns `Err(ChunkError)` if the underlying result is `Err`.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context to an error using a closure (lazy evaluation)
    ///
    /// # Errors
    /// Returns `Err(ChunkError)` if the underlying result is `Err`.
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<ChunkError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let context = context.into();
            match e.into() {
                ChunkError::UserError(inner) => ChunkError::GroupProcessingError {
                    context: format!("{context}: {inner}"),
                },
                other => other,
            }
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let context = f();
            match e.into() {
                ChunkError::UserError(inner) => ChunkError::GroupProcessingError {
                    context: format!("{context}: {inner}"),
                },
                other => other,
            }
        })
    }
}

impl Clone for ChunkError {
    fn clone(&self) -> Self {
        match self {
            Self::GroupProcessingError { context } => Self::GroupProcessingError {
                context: context.clone(),
            },
            // For UserError, we can't clone the boxed error, so convert to string
            Self::UserError(e) => Self::GroupProcessingError {
                context: format!("User error: {}", e),
            },
        }
    }
}
