//! Adapter name filtering for selective display.
//!
//! # Design
//!
//! - **Pure matcher**: [`NameRegexFilter`] only answers "does this adapter
//!   match?" without include/exclude semantics.
//! - **Filter chain**: [`FilterChain`] combines matchers with the right
//!   semantics: an adapter must pass ALL excludes and ANY include (no
//!   includes means everything passes).
//! - **Decorator**: [`FilteredSource`] applies a filter transparently to any
//!   [`AdapterSource`] implementation.

use regex::Regex;

use super::record::{AdapterEntry, ConfigEntry};
use super::source::{AdapterSource, QueryError, QueryFilter};

/// Trait for filtering adapter rows.
pub trait AdapterFilter: Send + Sync {
    /// Returns `true` if the adapter should be kept, `false` to drop it.
    fn matches(&self, entry: &AdapterEntry) -> bool;
}

/// Filters adapters by display name pattern.
///
/// A row without a display name never matches a pattern.
#[derive(Debug)]
pub struct NameRegexFilter {
    pattern: Regex,
}

impl NameRegexFilter {
    /// Creates a name filter with the given regex pattern.
    ///
    /// # Errors
    ///
    /// Returns an error if the regex pattern is invalid.
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
        })
    }

    /// Returns a reference to the regex pattern.
    #[must_use]
    pub const fn pattern(&self) -> &Regex {
        &self.pattern
    }
}

impl AdapterFilter for NameRegexFilter {
    fn matches(&self, entry: &AdapterEntry) -> bool {
        entry
            .name
            .as_deref()
            .is_some_and(|name| self.pattern.is_match(name))
    }
}

/// Filter chain with include OR / exclude AND semantics.
///
/// Evaluation order:
/// 1. **Exclude filters (AND)**: any match rejects the adapter.
/// 2. **Include filters (OR)**: any match accepts it; an empty include list
///    accepts everything.
#[derive(Default)]
pub struct FilterChain {
    includes: Vec<Box<dyn AdapterFilter>>,
    excludes: Vec<Box<dyn AdapterFilter>>,
}

impl FilterChain {
    /// Creates an empty filter chain (keeps all adapters).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an include filter (OR semantics).
    #[must_use]
    pub fn include<F: AdapterFilter + 'static>(mut self, filter: F) -> Self {
        self.includes.push(Box::new(filter));
        self
    }

    /// Adds an exclude filter (AND semantics - must not match ANY).
    #[must_use]
    pub fn exclude<F: AdapterFilter + 'static>(mut self, filter: F) -> Self {
        self.excludes.push(Box::new(filter));
        self
    }

    /// Returns the number of include filters.
    #[must_use]
    pub fn include_count(&self) -> usize {
        self.includes.len()
    }

    /// Returns the number of exclude filters.
    #[must_use]
    pub fn exclude_count(&self) -> usize {
        self.excludes.len()
    }

    /// Returns true if no filters are configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.includes.is_empty() && self.excludes.is_empty()
    }
}

impl AdapterFilter for FilterChain {
    fn matches(&self, entry: &AdapterEntry) -> bool {
        if self.excludes.iter().any(|f| f.matches(entry)) {
            return false;
        }

        self.includes.is_empty() || self.includes.iter().any(|f| f.matches(entry))
    }
}

impl std::fmt::Debug for FilterChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilterChain")
            .field("include_count", &self.includes.len())
            .field("exclude_count", &self.excludes.len())
            .finish()
    }
}

/// A source decorator that filters adapter query results.
///
/// Configuration lookups pass through unchanged; only rows of the adapter
/// entity set are filtered.
#[derive(Debug)]
pub struct FilteredSource<S, F> {
    inner: S,
    filter: F,
}

impl<S, F> FilteredSource<S, F> {
    /// Creates a new filtered source.
    #[must_use]
    pub const fn new(inner: S, filter: F) -> Self {
        Self { inner, filter }
    }

    /// Returns a reference to the inner source.
    pub const fn inner(&self) -> &S {
        &self.inner
    }

    /// Returns a reference to the filter.
    pub const fn filter(&self) -> &F {
        &self.filter
    }

    /// Consumes the decorator and returns the inner source.
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: AdapterSource, F: AdapterFilter> AdapterSource for FilteredSource<S, F> {
    fn adapters(&self, filter: &QueryFilter) -> Result<Vec<AdapterEntry>, QueryError> {
        let entries = self.inner.adapters(filter)?;
        Ok(entries
            .into_iter()
            .filter(|entry| self.filter.matches(entry))
            .collect())
    }

    fn configurations(&self, index: u32) -> Result<Vec<ConfigEntry>, QueryError> {
        self.inner.configurations(index)
    }
}

// Blanket implementation: any &T where T: AdapterFilter also implements AdapterFilter
impl<T: AdapterFilter + ?Sized> AdapterFilter for &T {
    fn matches(&self, entry: &AdapterEntry) -> bool {
        (*self).matches(entry)
    }
}

// Box<dyn AdapterFilter> implements AdapterFilter
impl AdapterFilter for Box<dyn AdapterFilter> {
    fn matches(&self, entry: &AdapterEntry) -> bool {
        self.as_ref().matches(entry)
    }
}
