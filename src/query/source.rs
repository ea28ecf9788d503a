//! Query source trait and error types.

use thiserror::Error;

use super::record::{AdapterEntry, ConfigEntry};

/// Filter predicate for queries against the adapter entity set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryFilter {
    /// Match every adapter that has an assigned connection identifier.
    HasConnectionId,
    /// Match the adapter whose display name equals the given string exactly.
    NameEquals(String),
}

impl QueryFilter {
    /// Applies the name part of the predicate to an adapter's display name.
    ///
    /// `HasConnectionId` does not constrain the name; sources apply the
    /// connection identifier constraint when building their adapter rows.
    #[must_use]
    pub fn matches_name(&self, name: Option<&str>) -> bool {
        match self {
            Self::HasConnectionId => true,
            Self::NameEquals(expected) => name == Some(expected.as_str()),
        }
    }
}

/// Error type for management-layer queries.
///
/// Describes what went wrong without dictating recovery strategy.
#[derive(Debug, Error)]
pub enum QueryError {
    /// Windows API call failed.
    #[cfg(windows)]
    #[error("Windows API error: {0}")]
    WindowsApi(#[from] windows::core::Error),

    /// No query backend exists for this platform.
    #[error("Adapter queries are not supported on this platform")]
    Unsupported,

    /// Platform-specific error with a generic message.
    #[error("Platform error: {message}")]
    Platform {
        /// Error message describing the platform-specific failure.
        message: String,
    },
}

/// Trait for querying the management layer's adapter entity sets.
///
/// # Design
///
/// - Platform backends implement this trait; submodules of
///   [`platform`](crate::query::platform) provide them.
/// - Enables dependency injection for testing with in-memory implementations.
/// - Both queries are synchronous blocking calls; there is no cancellation
///   and no timeout.
pub trait AdapterSource: Send + Sync {
    /// Queries the adapter entity set.
    ///
    /// Returns matching rows in the order the underlying layer reports them.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError`] when the underlying system interface is
    /// unavailable or the query fails.
    fn adapters(&self, filter: &QueryFilter) -> Result<Vec<AdapterEntry>, QueryError>;

    /// Queries the configuration entity set for one interface index.
    ///
    /// Normally returns zero or one row.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError`] when the underlying system interface is
    /// unavailable or the query fails.
    fn configurations(&self, index: u32) -> Result<Vec<ConfigEntry>, QueryError>;
}
