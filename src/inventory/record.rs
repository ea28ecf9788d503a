//! Normalized output record for a resolved adapter configuration.

use serde::Serialize;

use super::status::Status;

/// Sentinel shown when the underlying query yields no value for a field.
pub const NOT_AVAILABLE: &str = "N/A";

/// One resolved adapter/configuration pair.
///
/// Constructed fresh for each resolution pass, immutable once populated,
/// and replaced wholesale on every refresh; nothing is persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IpConfiguration {
    /// Display name of the adapter.
    pub adapter_name: String,
    /// First assigned IP address, or [`NOT_AVAILABLE`].
    pub ip_address: String,
    /// Derived connection status.
    pub status: Status,
    /// Adapter type description, or [`NOT_AVAILABLE`].
    pub adapter_type: String,
    /// Hardware address, or [`NOT_AVAILABLE`].
    pub mac_address: String,
    /// DNS domain suffix, or [`NOT_AVAILABLE`].
    pub dns_domain: String,
    /// Subnet mask of the first assigned address, or [`NOT_AVAILABLE`].
    pub subnet_mask: String,
}

/// Substitutes the sentinel for an absent value.
pub fn value_or_na(value: Option<String>) -> String {
    value.unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// Takes the first element of a list-valued field, substituting the sentinel
/// when the list is empty.
pub fn first_or_na(values: &[String]) -> String {
    values
        .first()
        .cloned()
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}
