//! # Error Handling for Shop Operations
//!
//! Every menu operation returns `Result<T, ShopError>`. The menu loop catches
//! the error at the operation boundary, prints [`ShopError`]'s `Display`
//! message to the console and returns to the main menu.
//!
//! ## Philosophy
//!
//! **The console only ever shows the user-facing message.** Database errors
//! are printed as a generic sentence while the underlying `DbErr` is logged
//! through `tracing` (see [`ShopError::log_internal`]).
//!
//! Cancellation is also an error variant so a nested workflow step can
//! short-circuit the whole operation with `?`:
//!
//! ```rust,ignore
//! if !console.confirm("Try another VIN?")? {
//!     return Err(ShopError::cancelled("duplicate VIN"));
//! }
//! ```

use chrono::NaiveDate;
use sea_orm::DbErr;
use thiserror::Error;

/// Result type alias using the shop error type.
pub type Result<T> = std::result::Result<T, ShopError>;

/// Error raised by a shop operation.
#[derive(Debug, Error)]
pub enum ShopError {
    /// A referenced record does not exist
    #[error("{}", not_found_message(.resource, .id.as_deref()))]
    NotFound {
        /// Resource type (e.g., "customer", "mechanic")
        resource: String,
        /// Optional ID that wasn't found
        id: Option<String>,
    },

    /// The operation would violate a uniqueness or state rule
    #[error("{message}")]
    Conflict {
        /// User-facing error message
        message: String,
    },

    /// A service request cannot be closed before it was opened
    #[error("Closing date {closing} is earlier than the request date {opened}")]
    ClosingBeforeRequest {
        /// Date the service request was opened
        opened: NaiveDate,
        /// Date the closing was attempted
        closing: NaiveDate,
    },

    /// The user backed out of a workflow
    #[error("Operation cancelled: {reason}")]
    Cancelled {
        /// Why the workflow stopped
        reason: String,
    },

    /// Standard input reached end of file while a prompt was waiting
    #[error("Input closed")]
    InputClosed,

    /// Reading from or writing to the console failed
    #[error("Console I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Settings could not be loaded
    #[error("Invalid configuration: {0}")]
    Config(#[from] config::ConfigError),

    /// Database error (details logged, not shown)
    #[error("A database error occurred")]
    Database {
        /// Internal error (logged, not shown to the user)
        #[source]
        internal: DbErr,
    },
}

fn not_found_message(resource: &str, id: Option<&str>) -> String {
    match id {
        Some(id) => format!("{resource} with ID '{id}' not found"),
        None => format!("{resource} not found"),
    }
}

impl ShopError {
    /// Create a not-found error
    pub fn not_found(resource: impl Into<String>, id: Option<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
            id,
        }
    }

    /// Create a conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    /// Create a cancellation
    pub fn cancelled(reason: impl Into<String>) -> Self {
        Self::Cancelled {
            reason: reason.into(),
        }
    }

    /// Wrap a database error
    #[must_use]
    pub fn database(err: DbErr) -> Self {
        Self::Database { internal: err }
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled { .. })
    }

    /// Log internal error details (not shown to the user)
    pub fn log_internal(&self) {
        match self {
            Self::Database { internal } => {
                tracing::error!(error = ?internal, "Database error occurred");
            }
            Self::Io(err) => {
                tracing::error!(error = %err, "Console error occurred");
            }
            Self::Cancelled { reason } => {
                tracing::warn!(reason = %reason, "Operation cancelled");
            }
            _ => {
                tracing::debug!(error = %self, "Operation rejected");
            }
        }
    }
}

/// Convert SeaORM `DbErr` to `ShopError`
///
/// - `DbErr::RecordNotFound` becomes [`ShopError::NotFound`]
/// - every other variant becomes [`ShopError::Database`]
impl From<DbErr> for ShopError {
    fn from(err: DbErr) -> Self {
        match &err {
            DbErr::RecordNotFound(msg) => {
                let resource = msg.split_whitespace().next().unwrap_or("Record");
                Self::NotFound {
                    resource: resource.to_string(),
                    id: None,
                }
            }
            _ => Self::Database { internal: err },
        }
    }
}
