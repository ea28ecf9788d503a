//! Stub source for platforms without a management-layer backend.

use crate::query::record::{AdapterEntry, ConfigEntry};
use crate::query::source::{AdapterSource, QueryError, QueryFilter};

/// Placeholder [`AdapterSource`] whose queries always fail.
///
/// Lets the binary build and report a clear error on platforms where no
/// query backend exists yet.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnsupportedSource {
    _private: (),
}

impl UnsupportedSource {
    /// Creates a new stub source.
    #[must_use]
    pub const fn new() -> Self {
        Self { _private: () }
    }
}

impl AdapterSource for UnsupportedSource {
    fn adapters(&self, _filter: &QueryFilter) -> Result<Vec<AdapterEntry>, QueryError> {
        Err(QueryError::Unsupported)
    }

    fn configurations(&self, _index: u32) -> Result<Vec<ConfigEntry>, QueryError> {
        Err(QueryError::Unsupported)
    }
}
