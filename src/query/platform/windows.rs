//! Windows query source backed by `GetAdaptersAddresses`.

use std::net::{Ipv4Addr, Ipv6Addr};

use windows::Win32::Foundation::{ERROR_BUFFER_OVERFLOW, ERROR_NO_DATA, NO_ERROR, WIN32_ERROR};
use windows::Win32::NetworkManagement::IpHelper::{
    GAA_FLAG_SKIP_ANYCAST, GAA_FLAG_SKIP_DNS_SERVER, GAA_FLAG_SKIP_MULTICAST, GetAdaptersAddresses,
    IF_TYPE_ETHERNET_CSMACD, IF_TYPE_IEEE80211, IF_TYPE_SOFTWARE_LOOPBACK,
    IP_ADAPTER_ADDRESSES_LH,
};
use windows::Win32::NetworkManagement::Ndis::{
    IF_OPER_STATUS, IfOperStatusDormant, IfOperStatusDown, IfOperStatusLowerLayerDown,
    IfOperStatusNotPresent, IfOperStatusTesting, IfOperStatusUp,
};
use windows::Win32::Networking::WinSock::{
    AF_INET, AF_INET6, AF_UNSPEC, SOCKADDR_IN, SOCKADDR_IN6,
};

use crate::query::record::{AdapterEntry, ConfigEntry};
use crate::query::source::{AdapterSource, QueryError, QueryFilter};

/// Interface type for PPP (Point-to-Point Protocol) adapters.
/// Value from Windows SDK `iptypes.h` - not exported by the `windows` crate.
const IF_TYPE_PPP: u32 = 23;

/// Interface type for tunnel adapters (VPN, etc.).
/// Value from Windows SDK `iptypes.h` - not exported by the `windows` crate.
const IF_TYPE_TUNNEL: u32 = 131;

/// Buffer size hint for `GetAdaptersAddresses`.
/// The API will tell us the actual required size if this is insufficient.
const INITIAL_BUFFER_SIZE: u32 = 16384;

/// Windows implementation of [`AdapterSource`] using `GetAdaptersAddresses`.
///
/// Presents the interface table as the two entity sets of the management
/// layer. The interface's friendly name plays the role of the connection
/// identifier; the device description is the adapter display name.
#[derive(Debug, Clone, Default)]
pub struct WindowsSource {
    // Currently no configuration needed, but struct allows future extension
    _private: (),
}

impl WindowsSource {
    /// Creates a new Windows adapter source.
    #[must_use]
    pub const fn new() -> Self {
        Self { _private: () }
    }
}

impl AdapterSource for WindowsSource {
    fn adapters(&self, filter: &QueryFilter) -> Result<Vec<AdapterEntry>, QueryError> {
        let table = AdapterTable::read()?;

        let mut entries = Vec::new();
        for adapter in table.rows() {
            if let Some(entry) = parse_adapter(adapter) {
                if filter.matches_name(entry.name.as_deref()) {
                    entries.push(entry);
                }
            }
        }
        Ok(entries)
    }

    fn configurations(&self, index: u32) -> Result<Vec<ConfigEntry>, QueryError> {
        let table = AdapterTable::read()?;

        let mut entries = Vec::new();
        for adapter in table.rows() {
            if adapter_index(adapter) == index {
                entries.push(parse_configuration(adapter));
            }
        }
        Ok(entries)
    }
}

/// Owned buffer holding the adapter linked list written by the API.
struct AdapterTable {
    buffer: Vec<u8>,
}

impl AdapterTable {
    /// Calls `GetAdaptersAddresses` with the two-call pattern:
    /// 1. First call with an estimated buffer size
    /// 2. Retry with the exact size if the buffer was too small
    fn read() -> Result<Self, QueryError> {
        // Flags to skip data we don't need (anycast, multicast, DNS servers)
        let flags = GAA_FLAG_SKIP_ANYCAST | GAA_FLAG_SKIP_MULTICAST | GAA_FLAG_SKIP_DNS_SERVER;
        let family = u32::from(AF_UNSPEC.0); // Get both IPv4 and IPv6

        let mut buffer: Vec<u8> = vec![0u8; INITIAL_BUFFER_SIZE as usize];
        let mut size = INITIAL_BUFFER_SIZE;

        // SAFETY: We provide a valid buffer and size. The function writes
        // adapter information to the buffer and updates `size` with the
        // required length.
        let mut result = unsafe {
            GetAdaptersAddresses(
                family,
                flags,
                None,
                Some(buffer.as_mut_ptr().cast()),
                &raw mut size,
            )
        };

        if result == ERROR_BUFFER_OVERFLOW.0 {
            buffer.resize(size as usize, 0);

            // SAFETY: Same as above, but with correctly sized buffer
            result = unsafe {
                GetAdaptersAddresses(
                    family,
                    flags,
                    None,
                    Some(buffer.as_mut_ptr().cast()),
                    &raw mut size,
                )
            };
        }

        if result == ERROR_NO_DATA.0 {
            return Ok(Self { buffer: Vec::new() });
        }
        if result != NO_ERROR.0 {
            return Err(windows::core::Error::from(WIN32_ERROR(result)).into());
        }

        Ok(Self { buffer })
    }

    /// Collects references to every node of the adapter linked list.
    fn rows(&self) -> Vec<&IP_ADAPTER_ADDRESSES_LH> {
        let mut rows = Vec::new();
        if self.buffer.is_empty() {
            return rows;
        }

        // SAFETY: GetAdaptersAddresses returns a properly aligned buffer for
        // IP_ADAPTER_ADDRESSES_LH, and every node of the list stays valid
        // while the buffer is alive.
        #[allow(clippy::cast_ptr_alignment)]
        let mut current = self.buffer.as_ptr().cast::<IP_ADAPTER_ADDRESSES_LH>();
        while !current.is_null() {
            let adapter = unsafe { &*current };
            rows.push(adapter);
            current = adapter.Next;
        }
        rows
    }
}

/// Interface index, the join key shared by both entity sets.
fn adapter_index(adapter: &IP_ADAPTER_ADDRESSES_LH) -> u32 {
    // SAFETY: the union member is always initialized by the API.
    unsafe { adapter.Anonymous1.Anonymous.IfIndex }
}

/// Parses one interface into an adapter row.
///
/// Returns `None` for interfaces outside the adapter entity set: the
/// software loopback and interfaces without a connection identifier.
fn parse_adapter(adapter: &IP_ADAPTER_ADDRESSES_LH) -> Option<AdapterEntry> {
    if adapter.IfType == IF_TYPE_SOFTWARE_LOOPBACK {
        return None;
    }

    // SAFETY: FriendlyName points at a NUL-terminated wide string owned by
    // the adapter buffer.
    let connection_id = unsafe { adapter.FriendlyName.to_string().ok()? };
    if connection_id.is_empty() {
        return None;
    }

    let (enabled, status_code) = map_oper_status(adapter.OperStatus);

    let mut entry = AdapterEntry::new(adapter_index(adapter)).with_state(enabled, status_code);
    // SAFETY: Description has the same representation as FriendlyName.
    entry.name = unsafe { adapter.Description.to_string().ok() };
    entry.adapter_type = adapter_type_name(adapter.IfType).map(str::to_string);
    Some(entry)
}

/// Parses one interface into a configuration row.
fn parse_configuration(adapter: &IP_ADAPTER_ADDRESSES_LH) -> ConfigEntry {
    let (ip_addresses, ip_subnets) = collect_addresses(adapter);

    let mut entry = ConfigEntry::new(adapter_index(adapter));
    entry.mac_address = physical_address(adapter);
    entry.ip_addresses = ip_addresses;
    entry.ip_subnets = ip_subnets;
    entry.dns_domain = dns_suffix(adapter);
    entry
}

/// Maps `IF_TYPE_*` constants to the adapter type names reported by the
/// management layer.
const fn adapter_type_name(if_type: u32) -> Option<&'static str> {
    match if_type {
        IF_TYPE_ETHERNET_CSMACD => Some("Ethernet 802.3"),
        IF_TYPE_IEEE80211 => Some("Wireless"),
        IF_TYPE_PPP | IF_TYPE_TUNNEL => Some("Wide Area Network (WAN)"),
        _ => None,
    }
}

/// Maps the interface operational status onto the management layer's
/// `(NetEnabled, NetConnectionStatus)` pair.
///
/// An administratively disabled interface also reports Down; the API does
/// not distinguish it from an unplugged cable, so Down maps to media
/// disconnected rather than disabled.
fn map_oper_status(status: IF_OPER_STATUS) -> (bool, u32) {
    match status {
        s if s == IfOperStatusUp => (true, 2),
        s if s == IfOperStatusDormant => (true, 1),
        s if s == IfOperStatusTesting => (true, 8),
        s if s == IfOperStatusDown || s == IfOperStatusLowerLayerDown => (true, 7),
        s if s == IfOperStatusNotPresent => (false, 4),
        _ => (true, 0),
    }
}

/// Hardware address formatted as colon-separated hex octets.
fn physical_address(adapter: &IP_ADAPTER_ADDRESSES_LH) -> Option<String> {
    let length = adapter.PhysicalAddressLength as usize;
    if length == 0 || length > adapter.PhysicalAddress.len() {
        return None;
    }

    Some(
        adapter.PhysicalAddress[..length]
            .iter()
            .map(|byte| format!("{byte:02X}"))
            .collect::<Vec<_>>()
            .join(":"),
    )
}

/// DNS suffix assigned to the adapter; empty suffixes are treated as absent.
fn dns_suffix(adapter: &IP_ADAPTER_ADDRESSES_LH) -> Option<String> {
    // SAFETY: DnsSuffix points at a NUL-terminated wide string owned by the
    // adapter buffer.
    let suffix = unsafe { adapter.DnsSuffix.to_string().ok()? };
    if suffix.is_empty() { None } else { Some(suffix) }
}

/// Collects unicast addresses with their positionally aligned subnet
/// entries, IPv4 rows before IPv6 rows to match the address ordering of the
/// management layer. IPv4 rows carry a dotted-decimal mask; IPv6 rows carry
/// the prefix length.
///
/// # Safety Note
///
/// The pointer casts to `SOCKADDR_IN` and `SOCKADDR_IN6` are allowed despite
/// alignment concerns because Windows guarantees proper alignment of these
/// structures when returned from the networking APIs.
#[allow(clippy::cast_ptr_alignment)]
fn collect_addresses(adapter: &IP_ADAPTER_ADDRESSES_LH) -> (Vec<String>, Vec<String>) {
    let mut v4: Vec<(String, String)> = Vec::new();
    let mut v6: Vec<(String, String)> = Vec::new();

    let mut unicast = adapter.FirstUnicastAddress;

    // SAFETY: We iterate through a linked list of unicast addresses.
    // Each address is valid as long as the parent adapter buffer is alive.
    while !unicast.is_null() {
        let addr_entry = unsafe { &*unicast };
        let prefix = addr_entry.OnLinkPrefixLength;

        // SAFETY: The Address field contains a valid SOCKET_ADDRESS structure
        // pointing to either SOCKADDR_IN (IPv4) or SOCKADDR_IN6 (IPv6).
        if let Some(sockaddr) = unsafe { addr_entry.Address.lpSockaddr.as_ref() } {
            match sockaddr.sa_family {
                f if f == AF_INET => {
                    // SAFETY: We verified the family is AF_INET, so this is a valid cast.
                    let sockaddr_in =
                        unsafe { &*(std::ptr::from_ref(sockaddr).cast::<SOCKADDR_IN>()) };
                    // SAFETY: sin_addr contains the IPv4 address bytes in network order.
                    let octets = unsafe { sockaddr_in.sin_addr.S_un.S_un_b };
                    let addr = Ipv4Addr::new(octets.s_b1, octets.s_b2, octets.s_b3, octets.s_b4);
                    v4.push((addr.to_string(), subnet_mask(prefix).to_string()));
                }
                f if f == AF_INET6 => {
                    // SAFETY: We verified the family is AF_INET6, so this is a valid cast.
                    let sockaddr_in6 =
                        unsafe { &*(std::ptr::from_ref(sockaddr).cast::<SOCKADDR_IN6>()) };
                    // SAFETY: We verified this is an IPv6 address, so the union field is valid.
                    let octets = unsafe { sockaddr_in6.sin6_addr.u.Byte };
                    let addr = Ipv6Addr::from(octets);
                    v6.push((addr.to_string(), prefix.to_string()));
                }
                // Unknown address family, skip - Windows typically only returns
                // AF_INET or AF_INET6 for unicast addresses
                _ => {}
            }
        }

        unicast = unsafe { (*unicast).Next };
    }

    v4.into_iter().chain(v6).unzip()
}

/// Converts an IPv4 on-link prefix length to a dotted-decimal subnet mask.
fn subnet_mask(prefix: u8) -> Ipv4Addr {
    let bits = u32::from(prefix.min(32));
    let mask = if bits == 0 { 0 } else { u32::MAX << (32 - bits) };
    Ipv4Addr::from(mask)
}
