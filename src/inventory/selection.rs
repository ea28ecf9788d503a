//! Adapter selection for the detail resolver.

use std::fmt;

/// The fixed pseudo-entry appended to the adapter listing.
pub const SELECT_ALL_ADAPTERS: &str = "Select all adapters";

/// What the resolver should resolve.
///
/// The listing's "select all" pseudo-entry is its own variant so a control
/// value can never be confused with a real adapter name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Resolve every adapter that has an assigned connection identifier.
    AllAdapters,
    /// Resolve the single adapter with this display name.
    Named(String),
}

impl Selection {
    /// Interprets a name picked from the adapter listing.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        if name == SELECT_ALL_ADAPTERS {
            Self::AllAdapters
        } else {
            Self::Named(name.to_string())
        }
    }

    /// Returns true for the select-all variant.
    #[must_use]
    pub const fn is_all(&self) -> bool {
        matches!(self, Self::AllAdapters)
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllAdapters => write!(f, "{SELECT_ALL_ADAPTERS}"),
            Self::Named(name) => write!(f, "{name}"),
        }
    }
}
