//! Adapter status derivation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Connection status of a network adapter.
///
/// A closed three-value enumeration; no other states exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    /// The adapter is administratively disabled.
    Disabled,
    /// The adapter is enabled but not connected.
    Disconnected,
    /// The adapter is enabled and connected.
    Connected,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Disabled => write!(f, "Disabled"),
            Self::Disconnected => write!(f, "Disconnected"),
            Self::Connected => write!(f, "Connected"),
        }
    }
}

/// Maps a raw connection status code to its human-readable label.
#[must_use]
pub const fn connection_status_label(code: u32) -> &'static str {
    match code {
        0 => "Disconnected",
        1 => "Connecting",
        2 => "Connected",
        3 => "Disconnecting",
        4 => "Hardware not present",
        5 => "Hardware disabled",
        6 => "Hardware malfunction",
        7 => "Media disconnected",
        8 => "Authenticating",
        9 => "Invalid address",
        10 => "Credentials required",
        _ => "Unknown",
    }
}

/// Derives the adapter status from the enabled flag and the raw connection
/// status code.
///
/// A disabled adapter is `Disabled` regardless of its connection status
/// code. Every label other than "Connected" collapses to `Disconnected`,
/// including transitional ones like "Connecting".
#[must_use]
pub fn derive_status(enabled: bool, code: u32) -> Status {
    if !enabled {
        return Status::Disabled;
    }

    match connection_status_label(code) {
        "Connected" => Status::Connected,
        _ => Status::Disconnected,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_table_is_exact() {
        let expected = [
            (0, "Disconnected"),
            (1, "Connecting"),
            (2, "Connected"),
            (3, "Disconnecting"),
            (4, "Hardware not present"),
            (5, "Hardware disabled"),
            (6, "Hardware malfunction"),
            (7, "Media disconnected"),
            (8, "Authenticating"),
            (9, "Invalid address"),
            (10, "Credentials required"),
        ];

        for (code, label) in expected {
            assert_eq!(connection_status_label(code), label, "code {code}");
        }
    }

    #[test]
    fn out_of_table_codes_are_unknown() {
        assert_eq!(connection_status_label(11), "Unknown");
        assert_eq!(connection_status_label(999), "Unknown");
        assert_eq!(connection_status_label(u32::MAX), "Unknown");
    }

    #[test]
    fn disabled_wins_over_any_code() {
        assert_eq!(derive_status(false, 2), Status::Disabled);
        assert_eq!(derive_status(false, 0), Status::Disabled);
        assert_eq!(derive_status(false, 999), Status::Disabled);
    }

    #[test]
    fn enabled_and_connected() {
        assert_eq!(derive_status(true, 2), Status::Connected);
    }

    #[test]
    fn enabled_and_disconnected() {
        assert_eq!(derive_status(true, 0), Status::Disconnected);
    }

    #[test]
    fn transitional_labels_collapse_to_disconnected() {
        // "Connecting"
        assert_eq!(derive_status(true, 1), Status::Disconnected);
        // "Disconnecting"
        assert_eq!(derive_status(true, 3), Status::Disconnected);
        // "Media disconnected"
        assert_eq!(derive_status(true, 7), Status::Disconnected);
        // "Authenticating"
        assert_eq!(derive_status(true, 8), Status::Disconnected);
    }

    #[test]
    fn unknown_codes_collapse_to_disconnected() {
        assert_eq!(derive_status(true, 999), Status::Disconnected);
    }

    #[test]
    fn display_matches_variant_names() {
        assert_eq!(Status::Disabled.to_string(), "Disabled");
        assert_eq!(Status::Disconnected.to_string(), "Disconnected");
        assert_eq!(Status::Connected.to_string(), "Connected");
    }
}
