//! ipcfg: network adapter IP configuration viewer
//!
//! A library for enumerating a machine's network adapters and resolving
//! each adapter's configuration (IP address, MAC address, subnet mask,
//! DNS domain, connection status) from the operating system's management
//! layer.

pub mod config;
pub mod inventory;
pub mod query;
pub mod render;
