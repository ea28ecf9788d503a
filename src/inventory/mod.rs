//! Normalization core: adapter listing, selection, status derivation, and
//! the adapter/configuration join.
//!
//! This module provides:
//! - The normalized output record ([`IpConfiguration`])
//! - The adapter status enumeration and its derivation ([`Status`],
//!   [`derive_status`])
//! - Selection modeling for the resolver ([`Selection`])
//! - The resolver itself ([`ConfigurationResolver`])

mod error;
mod record;
mod resolver;
mod selection;
mod status;

pub use error::{ResolveError, RetrievalStep};
pub use record::{IpConfiguration, NOT_AVAILABLE};
pub use resolver::ConfigurationResolver;
pub use selection::{SELECT_ALL_ADAPTERS, Selection};
pub use status::{Status, connection_status_label, derive_status};
