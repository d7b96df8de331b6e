use std::fmt;

/// A violated record or filter rule.
///
/// Carries a human-readable message naming the offending field and, where
/// useful, the offending value. Validation is fail-fast, so a single error
/// describes the first rule a record broke.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Wrap this error with a prefix identifying the delegating context.
    ///
    /// The root message is kept verbatim after the prefix.
    pub fn context(self, prefix: &str) -> Self {
        Self {
            message: format!("{}: {}", prefix, self.message),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Result of a single field check or a whole-record validation.
pub type Validation = std::result::Result<(), ValidationError>;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[cfg(feature = "duckdb")]
    #[error("DuckDB error: {0}")]
    DuckDb(#[from] duckdb::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl CatalogError {
    /// Whether the failure was caused by caller input rather than the store.
    ///
    /// Dispatchers map `true` to a client-input failure and `false` to a
    /// transient server failure.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            CatalogError::Validation(_) | CatalogError::NotFound(_) | CatalogError::InvalidArgument(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
