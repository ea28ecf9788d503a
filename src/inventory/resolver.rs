//! Adapter enumeration and configuration resolution.

use crate::query::{AdapterEntry, AdapterSource, QueryFilter};

use super::error::{ResolveError, RetrievalStep};
use super::record::{IpConfiguration, first_or_na, value_or_na};
use super::selection::{SELECT_ALL_ADAPTERS, Selection};
use super::status::{Status, derive_status};

/// Resolves adapter listings and per-adapter configuration records.
///
/// Generic over the query source so tests can substitute an in-memory one.
/// Each call performs a fresh pass against the source; no results are
/// cached between calls.
#[derive(Debug)]
pub struct ConfigurationResolver<S> {
    source: S,
}

impl<S> ConfigurationResolver<S> {
    /// Creates a resolver over the given query source.
    #[must_use]
    pub const fn new(source: S) -> Self {
        Self { source }
    }

    /// Returns a reference to the query source.
    pub const fn source(&self) -> &S {
        &self.source
    }

    /// Consumes the resolver and returns the query source.
    pub fn into_inner(self) -> S {
        self.source
    }
}

impl<S: AdapterSource> ConfigurationResolver<S> {
    /// Lists the display names of every adapter with an assigned connection
    /// identifier, in query order, followed by the select-all pseudo-entry.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError`] when the adapter query fails or an adapter
    /// has no display name.
    pub fn list_adapter_names(&self) -> Result<Vec<String>, ResolveError> {
        let adapters = self
            .source
            .adapters(&QueryFilter::HasConnectionId)
            .map_err(|e| ResolveError::with_source(RetrievalStep::AdapterQuery, e))?;

        let mut names = Vec::with_capacity(adapters.len() + 1);
        for adapter in &adapters {
            names.push(adapter_name(adapter)?);
        }
        names.push(SELECT_ALL_ADAPTERS.to_string());
        Ok(names)
    }

    /// Resolves one normalized record per matched adapter/configuration
    /// pair.
    ///
    /// An adapter with no matching configuration row contributes no record.
    /// A selection that matches no adapter resolves to an empty list, not an
    /// error.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError`] when a query fails or a required adapter
    /// field is absent.
    pub fn resolve(&self, selection: &Selection) -> Result<Vec<IpConfiguration>, ResolveError> {
        let filter = match selection {
            Selection::AllAdapters => QueryFilter::HasConnectionId,
            Selection::Named(name) => QueryFilter::NameEquals(name.clone()),
        };

        let adapters = self
            .source
            .adapters(&filter)
            .map_err(|e| ResolveError::with_source(RetrievalStep::AdapterQuery, e))?;

        let mut records = Vec::new();
        for adapter in &adapters {
            self.resolve_adapter(adapter, &mut records)?;
        }
        Ok(records)
    }

    fn resolve_adapter(
        &self,
        adapter: &AdapterEntry,
        records: &mut Vec<IpConfiguration>,
    ) -> Result<(), ResolveError> {
        let adapter_name = adapter_name(adapter)?;
        let adapter_type = value_or_na(adapter.adapter_type.clone());
        let status = adapter_status(adapter)?;

        let configurations = self
            .source
            .configurations(adapter.index)
            .map_err(|e| ResolveError::with_source(RetrievalStep::ConfigurationQuery, e))?;

        if configurations.is_empty() {
            tracing::debug!(adapter = %adapter_name, "no configuration record, adapter omitted");
        }

        for configuration in configurations {
            records.push(IpConfiguration {
                adapter_name: adapter_name.clone(),
                ip_address: first_or_na(&configuration.ip_addresses),
                status,
                adapter_type: adapter_type.clone(),
                mac_address: value_or_na(configuration.mac_address),
                dns_domain: value_or_na(configuration.dns_domain),
                subnet_mask: first_or_na(&configuration.ip_subnets),
            });
        }
        Ok(())
    }
}

/// Extracts the display name, failing when the field is absent.
fn adapter_name(adapter: &AdapterEntry) -> Result<String, ResolveError> {
    adapter
        .name
        .clone()
        .ok_or_else(|| ResolveError::new(RetrievalStep::AdapterName))
}

/// Derives the status, failing when either derivation input is absent.
fn adapter_status(adapter: &AdapterEntry) -> Result<Status, ResolveError> {
    match (adapter.net_enabled, adapter.connection_status) {
        (Some(enabled), Some(code)) => Ok(derive_status(enabled, code)),
        _ => Err(ResolveError::new(RetrievalStep::AdapterStatus)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::record::NOT_AVAILABLE;
    use crate::query::{ConfigEntry, QueryError};

    /// In-memory source over fixed adapter and configuration tables.
    struct TableSource {
        adapters: Vec<AdapterEntry>,
        configurations: Vec<ConfigEntry>,
    }

    impl AdapterSource for TableSource {
        fn adapters(&self, filter: &QueryFilter) -> Result<Vec<AdapterEntry>, QueryError> {
            Ok(self
                .adapters
                .iter()
                .filter(|entry| filter.matches_name(entry.name.as_deref()))
                .cloned()
                .collect())
        }

        fn configurations(&self, index: u32) -> Result<Vec<ConfigEntry>, QueryError> {
            Ok(self
                .configurations
                .iter()
                .filter(|entry| entry.index == index)
                .cloned()
                .collect())
        }
    }

    /// Source whose primary query fails.
    struct FailingSource;

    impl AdapterSource for FailingSource {
        fn adapters(&self, _filter: &QueryFilter) -> Result<Vec<AdapterEntry>, QueryError> {
            Err(QueryError::Platform {
                message: "query failed".to_string(),
            })
        }

        fn configurations(&self, _index: u32) -> Result<Vec<ConfigEntry>, QueryError> {
            Err(QueryError::Platform {
                message: "query failed".to_string(),
            })
        }
    }

    /// Source whose secondary (configuration) query fails.
    struct FailingConfigSource {
        adapters: Vec<AdapterEntry>,
    }

    impl AdapterSource for FailingConfigSource {
        fn adapters(&self, _filter: &QueryFilter) -> Result<Vec<AdapterEntry>, QueryError> {
            Ok(self.adapters.clone())
        }

        fn configurations(&self, _index: u32) -> Result<Vec<ConfigEntry>, QueryError> {
            Err(QueryError::Platform {
                message: "secondary query failed".to_string(),
            })
        }
    }

    fn ethernet() -> AdapterEntry {
        AdapterEntry::new(1)
            .with_name("Ethernet")
            .with_type("Ethernet 802.3")
            .with_state(true, 2)
    }

    fn wifi() -> AdapterEntry {
        AdapterEntry::new(2)
            .with_name("Wi-Fi")
            .with_type("Wireless")
            .with_state(true, 7)
    }

    fn ethernet_config() -> ConfigEntry {
        ConfigEntry::new(1)
            .with_mac("00:1A:2B:3C:4D:5E")
            .with_address("10.0.0.5")
            .with_address("fe80::1")
            .with_subnet("255.255.255.0")
            .with_subnet("64")
            .with_dns("corp.example.com")
    }

    mod listing {
        use super::*;

        #[test]
        fn names_end_with_select_all() {
            let resolver = ConfigurationResolver::new(TableSource {
                adapters: vec![ethernet(), wifi()],
                configurations: vec![],
            });

            let names = resolver.list_adapter_names().unwrap();

            assert_eq!(names, vec!["Ethernet", "Wi-Fi", SELECT_ALL_ADAPTERS]);
        }

        #[test]
        fn empty_table_still_lists_select_all() {
            let resolver = ConfigurationResolver::new(TableSource {
                adapters: vec![],
                configurations: vec![],
            });

            let names = resolver.list_adapter_names().unwrap();

            assert_eq!(names, vec![SELECT_ALL_ADAPTERS]);
        }

        #[test]
        fn listing_preserves_query_order() {
            let resolver = ConfigurationResolver::new(TableSource {
                adapters: vec![wifi(), ethernet()],
                configurations: vec![],
            });

            let names = resolver.list_adapter_names().unwrap();

            assert_eq!(names[0], "Wi-Fi");
            assert_eq!(names[1], "Ethernet");
        }

        #[test]
        fn query_failure_is_wrapped() {
            let resolver = ConfigurationResolver::new(FailingSource);

            let error = resolver.list_adapter_names().unwrap_err();

            assert_eq!(error.step, RetrievalStep::AdapterQuery);
            assert!(error.source.is_some());
        }

        #[test]
        fn nameless_adapter_fails_the_listing() {
            let resolver = ConfigurationResolver::new(TableSource {
                adapters: vec![AdapterEntry::new(1).with_state(true, 2)],
                configurations: vec![],
            });

            let error = resolver.list_adapter_names().unwrap_err();

            assert_eq!(error.step, RetrievalStep::AdapterName);
        }

        #[test]
        fn lists_adapters_regardless_of_configuration_matches() {
            // The listing shows every adapter even when resolution would
            // drop it for having no configuration row.
            let resolver = ConfigurationResolver::new(TableSource {
                adapters: vec![ethernet(), wifi()],
                configurations: vec![ethernet_config()],
            });

            let names = resolver.list_adapter_names().unwrap();
            let records = resolver.resolve(&Selection::AllAdapters).unwrap();

            assert_eq!(names.len(), 3);
            assert_eq!(records.len(), 1);
        }
    }

    mod resolution {
        use super::*;

        #[test]
        fn all_adapters_joins_each_configuration() {
            let resolver = ConfigurationResolver::new(TableSource {
                adapters: vec![ethernet(), wifi()],
                configurations: vec![ethernet_config(), ConfigEntry::new(2).with_address("192.168.1.7")],
            });

            let records = resolver.resolve(&Selection::AllAdapters).unwrap();

            assert_eq!(records.len(), 2);
            assert_eq!(records[0].adapter_name, "Ethernet");
            assert_eq!(records[1].adapter_name, "Wi-Fi");
        }

        #[test]
        fn adapter_without_configuration_is_dropped() {
            let resolver = ConfigurationResolver::new(TableSource {
                adapters: vec![ethernet(), wifi()],
                configurations: vec![ethernet_config()],
            });

            let records = resolver.resolve(&Selection::AllAdapters).unwrap();

            assert_eq!(records.len(), 1);
            assert_eq!(records[0].adapter_name, "Ethernet");
        }

        #[test]
        fn named_selection_resolves_one_adapter() {
            let resolver = ConfigurationResolver::new(TableSource {
                adapters: vec![ethernet(), wifi()],
                configurations: vec![
                    ethernet_config(),
                    ConfigEntry::new(2).with_address("192.168.1.7"),
                ],
            });

            let records = resolver
                .resolve(&Selection::Named("Wi-Fi".to_string()))
                .unwrap();

            assert_eq!(records.len(), 1);
            assert_eq!(records[0].adapter_name, "Wi-Fi");
        }

        #[test]
        fn unknown_name_resolves_empty() {
            let resolver = ConfigurationResolver::new(TableSource {
                adapters: vec![ethernet()],
                configurations: vec![ethernet_config()],
            });

            let records = resolver
                .resolve(&Selection::Named("NonexistentAdapterName".to_string()))
                .unwrap();

            assert!(records.is_empty());
        }

        #[test]
        fn first_ip_address_is_used() {
            let resolver = ConfigurationResolver::new(TableSource {
                adapters: vec![ethernet()],
                configurations: vec![ethernet_config()],
            });

            let records = resolver.resolve(&Selection::AllAdapters).unwrap();

            assert_eq!(records[0].ip_address, "10.0.0.5");
            assert_eq!(records[0].subnet_mask, "255.255.255.0");
        }

        #[test]
        fn record_carries_all_resolved_fields() {
            let resolver = ConfigurationResolver::new(TableSource {
                adapters: vec![ethernet()],
                configurations: vec![ethernet_config()],
            });

            let records = resolver.resolve(&Selection::AllAdapters).unwrap();

            let record = &records[0];
            assert_eq!(record.adapter_name, "Ethernet");
            assert_eq!(record.adapter_type, "Ethernet 802.3");
            assert_eq!(record.status, Status::Connected);
            assert_eq!(record.mac_address, "00:1A:2B:3C:4D:5E");
            assert_eq!(record.dns_domain, "corp.example.com");
        }

        #[test]
        fn absent_fields_fall_back_to_sentinel() {
            let resolver = ConfigurationResolver::new(TableSource {
                adapters: vec![AdapterEntry::new(1).with_name("Ethernet").with_state(true, 2)],
                configurations: vec![ConfigEntry::new(1)],
            });

            let records = resolver.resolve(&Selection::AllAdapters).unwrap();

            let record = &records[0];
            assert_eq!(record.adapter_type, NOT_AVAILABLE);
            assert_eq!(record.mac_address, NOT_AVAILABLE);
            assert_eq!(record.ip_address, NOT_AVAILABLE);
            assert_eq!(record.subnet_mask, NOT_AVAILABLE);
            assert_eq!(record.dns_domain, NOT_AVAILABLE);
        }

        #[test]
        fn status_comes_from_derivation() {
            let resolver = ConfigurationResolver::new(TableSource {
                adapters: vec![
                    AdapterEntry::new(1).with_name("Ethernet").with_state(false, 2),
                    AdapterEntry::new(2).with_name("Wi-Fi").with_state(true, 7),
                ],
                configurations: vec![ConfigEntry::new(1), ConfigEntry::new(2)],
            });

            let records = resolver.resolve(&Selection::AllAdapters).unwrap();

            assert_eq!(records[0].status, Status::Disabled);
            assert_eq!(records[1].status, Status::Disconnected);
        }

        #[test]
        fn multiple_configuration_rows_yield_multiple_records() {
            let resolver = ConfigurationResolver::new(TableSource {
                adapters: vec![ethernet()],
                configurations: vec![
                    ConfigEntry::new(1).with_address("10.0.0.5"),
                    ConfigEntry::new(1).with_address("10.0.0.6"),
                ],
            });

            let records = resolver.resolve(&Selection::AllAdapters).unwrap();

            assert_eq!(records.len(), 2);
            assert_eq!(records[0].ip_address, "10.0.0.5");
            assert_eq!(records[1].ip_address, "10.0.0.6");
        }

        #[test]
        fn resolve_is_idempotent() {
            let resolver = ConfigurationResolver::new(TableSource {
                adapters: vec![ethernet(), wifi()],
                configurations: vec![ethernet_config()],
            });

            let first = resolver.resolve(&Selection::AllAdapters).unwrap();
            let second = resolver.resolve(&Selection::AllAdapters).unwrap();

            assert_eq!(first, second);
        }
    }

    mod failures {
        use super::*;

        #[test]
        fn primary_query_failure_is_wrapped() {
            let resolver = ConfigurationResolver::new(FailingSource);

            let error = resolver.resolve(&Selection::AllAdapters).unwrap_err();

            assert_eq!(error.step, RetrievalStep::AdapterQuery);
        }

        #[test]
        fn configuration_query_failure_is_wrapped() {
            let resolver = ConfigurationResolver::new(FailingConfigSource {
                adapters: vec![ethernet()],
            });

            let error = resolver.resolve(&Selection::AllAdapters).unwrap_err();

            assert_eq!(error.step, RetrievalStep::ConfigurationQuery);
            assert!(error.source.is_some());
        }

        #[test]
        fn missing_name_fails_with_name_step() {
            let resolver = ConfigurationResolver::new(TableSource {
                adapters: vec![AdapterEntry::new(1).with_state(true, 2)],
                configurations: vec![],
            });

            let error = resolver.resolve(&Selection::AllAdapters).unwrap_err();

            assert_eq!(error.step, RetrievalStep::AdapterName);
        }

        #[test]
        fn missing_status_inputs_fail_with_status_step() {
            let resolver = ConfigurationResolver::new(TableSource {
                adapters: vec![AdapterEntry::new(1).with_name("Ethernet")],
                configurations: vec![],
            });

            let error = resolver.resolve(&Selection::AllAdapters).unwrap_err();

            assert_eq!(error.step, RetrievalStep::AdapterStatus);
        }
    }
}
