//! Management-layer query interface.
//!
//! This module provides:
//! - Raw records of the two entity sets ([`AdapterEntry`], [`ConfigEntry`])
//! - The query source trait ([`AdapterSource`]) and its filter predicate
//!   ([`QueryFilter`])
//! - Adapter name filtering ([`FilterChain`], [`FilteredSource`])
//! - Platform-specific implementations ([`platform`])

mod filter;
pub mod platform;
mod record;
mod source;

pub use filter::{AdapterFilter, FilterChain, FilteredSource, NameRegexFilter};
pub use record::{AdapterEntry, ConfigEntry};
pub use source::{AdapterSource, QueryError, QueryFilter};
