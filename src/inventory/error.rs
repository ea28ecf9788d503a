//! Error types for the resolution layer.

use std::fmt;

use thiserror::Error;

use crate::query::QueryError;

/// The step of a resolution pass that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetrievalStep {
    /// The primary query against the adapter entity set.
    AdapterQuery,
    /// Reading an adapter's display name.
    AdapterName,
    /// Reading the inputs of the status derivation.
    AdapterStatus,
    /// The secondary query against the configuration entity set.
    ConfigurationQuery,
}

impl RetrievalStep {
    /// Fixed phrase naming the failing step.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::AdapterQuery => "retrieving network adapters",
            Self::AdapterName => "retrieving adapter name",
            Self::AdapterStatus => "retrieving adapter status",
            Self::ConfigurationQuery => "retrieving adapter configuration",
        }
    }
}

impl fmt::Display for RetrievalStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// Error type for resolution failures.
///
/// Every failure carries a fixed message naming the step that failed; the
/// underlying cause, when there is one, is preserved as the error source
/// and never interpolated into the message.
#[derive(Debug, Error)]
#[error("Something went wrong during {step}")]
pub struct ResolveError {
    /// The step that failed.
    pub step: RetrievalStep,
    /// The underlying query failure, when the step involved a query.
    #[source]
    pub source: Option<QueryError>,
}

impl ResolveError {
    /// Creates an error for a step that failed without an underlying query
    /// failure (an absent field).
    #[must_use]
    pub const fn new(step: RetrievalStep) -> Self {
        Self { step, source: None }
    }

    /// Creates an error wrapping an underlying query failure.
    #[must_use]
    pub const fn with_source(step: RetrievalStep, source: QueryError) -> Self {
        Self {
            step,
            source: Some(source),
        }
    }
}
