//! Raw record types returned by the management-layer query interface.
//!
//! The management layer exposes two entity sets: network adapters and
//! network adapter configurations. Both are keyed by a numeric interface
//! index. Fields the layer could not populate are `None` (or an empty list
//! for the address-valued fields).

use serde::{Deserialize, Serialize};

/// One row of the "network adapters" entity set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdapterEntry {
    /// Display name of the adapter.
    pub name: Option<String>,
    /// Adapter type description (e.g. "Ethernet 802.3").
    pub adapter_type: Option<String>,
    /// Whether the adapter is administratively enabled.
    pub net_enabled: Option<bool>,
    /// Raw connection status code as reported by the management layer.
    pub connection_status: Option<u32>,
    /// Interface index, the join key against the configuration entity set.
    pub index: u32,
}

impl AdapterEntry {
    /// Creates an adapter row with only its index populated.
    #[must_use]
    pub const fn new(index: u32) -> Self {
        Self {
            name: None,
            adapter_type: None,
            net_enabled: None,
            connection_status: None,
            index,
        }
    }

    /// Sets the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the adapter type description.
    #[must_use]
    pub fn with_type(mut self, adapter_type: impl Into<String>) -> Self {
        self.adapter_type = Some(adapter_type.into());
        self
    }

    /// Sets the enabled flag and raw connection status code together.
    #[must_use]
    pub const fn with_state(mut self, enabled: bool, connection_status: u32) -> Self {
        self.net_enabled = Some(enabled);
        self.connection_status = Some(connection_status);
        self
    }
}

/// One row of the "network adapter configurations" entity set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigEntry {
    /// Interface index of the adapter this configuration belongs to.
    pub index: u32,
    /// Hardware address, formatted as colon-separated hex octets.
    pub mac_address: Option<String>,
    /// Assigned addresses, IPv4 entries before IPv6 entries.
    pub ip_addresses: Vec<String>,
    /// Subnet masks (IPv4) or prefix lengths (IPv6), positionally aligned
    /// with `ip_addresses`.
    pub ip_subnets: Vec<String>,
    /// DNS domain suffix assigned to the adapter.
    pub dns_domain: Option<String>,
}

impl ConfigEntry {
    /// Creates an empty configuration row for the given interface index.
    #[must_use]
    pub const fn new(index: u32) -> Self {
        Self {
            index,
            mac_address: None,
            ip_addresses: Vec::new(),
            ip_subnets: Vec::new(),
            dns_domain: None,
        }
    }

    /// Sets the hardware address.
    #[must_use]
    pub fn with_mac(mut self, mac: impl Into<String>) -> Self {
        self.mac_address = Some(mac.into());
        self
    }

    /// Appends an assigned address.
    #[must_use]
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.ip_addresses.push(address.into());
        self
    }

    /// Appends a subnet mask or prefix length.
    #[must_use]
    pub fn with_subnet(mut self, subnet: impl Into<String>) -> Self {
        self.ip_subnets.push(subnet.into());
        self
    }

    /// Sets the DNS domain suffix.
    #[must_use]
    pub fn with_dns(mut self, domain: impl Into<String>) -> Self {
        self.dns_domain = Some(domain.into());
        self
    }

    /// Returns true if this row carries at least one assigned address.
    #[must_use]
    pub fn has_addresses(&self) -> bool {
        !self.ip_addresses.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod adapter_entry {
        use super::*;

        #[test]
        fn new_populates_only_the_index() {
            let entry = AdapterEntry::new(7);

            assert_eq!(entry.index, 7);
            assert_eq!(entry.name, None);
            assert_eq!(entry.adapter_type, None);
            assert_eq!(entry.net_enabled, None);
            assert_eq!(entry.connection_status, None);
        }

        #[test]
        fn builders_populate_fields() {
            let entry = AdapterEntry::new(1)
                .with_name("Ethernet")
                .with_type("Ethernet 802.3")
                .with_state(true, 2);

            assert_eq!(entry.name.as_deref(), Some("Ethernet"));
            assert_eq!(entry.adapter_type.as_deref(), Some("Ethernet 802.3"));
            assert_eq!(entry.net_enabled, Some(true));
            assert_eq!(entry.connection_status, Some(2));
        }
    }

    mod config_entry {
        use super::*;

        #[test]
        fn new_creates_empty_row() {
            let entry = ConfigEntry::new(3);

            assert_eq!(entry.index, 3);
            assert!(entry.ip_addresses.is_empty());
            assert!(entry.ip_subnets.is_empty());
            assert!(!entry.has_addresses());
        }

        #[test]
        fn addresses_preserve_insertion_order() {
            let entry = ConfigEntry::new(1)
                .with_address("10.0.0.5")
                .with_address("fe80::1")
                .with_subnet("255.255.255.0")
                .with_subnet("64");

            assert_eq!(entry.ip_addresses, vec!["10.0.0.5", "fe80::1"]);
            assert_eq!(entry.ip_subnets, vec!["255.255.255.0", "64"]);
            assert!(entry.has_addresses());
        }
    }
}
