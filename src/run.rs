//! Application execution logic.
//!
//! Builds the platform query source, applies the configured name filters,
//! and drives the resolver for a single pass or a blocking watch loop.

use std::thread;
use std::time::Duration;

use thiserror::Error;

use ipcfg::config::ValidatedConfig;
use ipcfg::inventory::{ConfigurationResolver, ResolveError, Selection};
use ipcfg::query::platform::PlatformSource;
use ipcfg::query::{AdapterSource, FilteredSource};
use ipcfg::render::{self, OutputFormat, RenderError};

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for runtime execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// Adapter resolution failed.
    #[error("Failed to resolve adapter information: {0}")]
    Resolve(#[source] ResolveError),

    /// Output rendering failed.
    #[error("Failed to render output: {0}")]
    Render(#[source] RenderError),
}

/// Executes one invocation of the application.
///
/// This function:
/// 1. Creates the platform query source with configured filters
/// 2. Lists adapter names (`--list`), or
/// 3. Resolves the configured selection once, or repeatedly in watch mode
///
/// # Errors
///
/// Returns an error if an adapter query or rendering fails. Failures are
/// fatal to the current refresh; there is no retry.
pub fn execute(config: ValidatedConfig) -> Result<(), RunError> {
    let source = FilteredSource::new(PlatformSource::default(), config.filter);
    let resolver = ConfigurationResolver::new(source);

    if config.list {
        return list_names(&resolver);
    }

    if config.watch {
        watch_loop(
            &resolver,
            &config.selection,
            config.format,
            config.watch_interval,
        )
    } else {
        render_once(&resolver, &config.selection, config.format)
    }
}

/// Prints the adapter name listing, one name per line.
fn list_names<S: AdapterSource>(resolver: &ConfigurationResolver<S>) -> Result<(), RunError> {
    let names = resolver.list_adapter_names().map_err(RunError::Resolve)?;
    for name in names {
        println!("{name}");
    }
    Ok(())
}

/// Resolves the selection once and prints the rendered records.
fn render_once<S: AdapterSource>(
    resolver: &ConfigurationResolver<S>,
    selection: &Selection,
    format: OutputFormat,
) -> Result<(), RunError> {
    let records = resolver.resolve(selection).map_err(RunError::Resolve)?;
    if records.is_empty() {
        tracing::info!(selection = %selection, "no adapter configuration records matched");
    }

    let output = render::render(&records, format).map_err(RunError::Render)?;
    println!("{output}");
    Ok(())
}

/// Re-resolves and renders on a fixed interval until the process is
/// interrupted or a pass fails.
///
/// Excluded from coverage - loops until the process is killed.
#[cfg(not(tarpaulin_include))]
fn watch_loop<S: AdapterSource>(
    resolver: &ConfigurationResolver<S>,
    selection: &Selection,
    format: OutputFormat,
    interval: Duration,
) -> Result<(), RunError> {
    tracing::info!(
        "Watch mode enabled (interval: {}s)",
        interval.as_secs()
    );

    loop {
        render_once(resolver, selection, format)?;
        thread::sleep(interval);
    }
}
