//! Validated configuration after merging CLI and TOML sources.
//!
//! This module contains the final, validated configuration that is used
//! by the application. All validation is performed during construction.

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::inventory::Selection;
use crate::query::{FilterChain, NameRegexFilter};
use crate::render::OutputFormat;

use super::cli::Cli;
use super::defaults;
use super::error::ConfigError;
use super::toml::TomlConfig;

/// Fully validated configuration ready for use by the application.
///
/// # Construction
///
/// Use [`ValidatedConfig::from_raw`] to create from CLI args and optional
/// TOML config. The function validates all inputs and returns errors for
/// invalid configurations.
#[derive(Debug)]
pub struct ValidatedConfig {
    /// What to resolve (all adapters, or one by name)
    pub selection: Selection,

    /// List adapter names instead of resolving configuration
    pub list: bool,

    /// Output format for resolved records
    pub format: OutputFormat,

    /// Re-resolve periodically instead of exiting after one pass
    pub watch: bool,

    /// Refresh interval for watch mode
    pub watch_interval: Duration,

    /// Adapter name filter configuration
    pub filter: FilterChain,

    /// Verbose logging enabled
    pub verbose: bool,
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Config {{ selection: {}, list: {}, format: {}, watch: {}, interval: {}s, filters: {}+{} }}",
            self.selection,
            self.list,
            self.format,
            self.watch,
            self.watch_interval.as_secs(),
            self.filter.include_count(),
            self.filter.exclude_count(),
        )
    }
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments and optional
    /// TOML config.
    ///
    /// CLI arguments take precedence over TOML config values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The format value is unrecognized
    /// - Regex patterns are invalid
    /// - The watch interval is zero
    pub fn from_raw(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Self, ConfigError> {
        let selection = cli
            .adapter
            .as_deref()
            .map_or(Selection::AllAdapters, Selection::from_name);

        let format = Self::resolve_format(cli, toml)?;
        let watch_interval = Self::resolve_watch_interval(cli, toml)?;
        let filter = Self::build_filter(cli, toml)?;

        Ok(Self {
            selection,
            list: cli.list,
            format,
            watch: cli.watch,
            watch_interval,
            filter,
            verbose: cli.verbose,
        })
    }

    /// Loads and merges configuration from CLI and optional config file.
    ///
    /// If `cli.config` is set, loads the TOML file from that path.
    /// Otherwise the default config file is loaded when it exists.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file cannot be read or parsed
    /// - The merged configuration is invalid
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let toml = match cli.config.as_ref() {
            Some(path) => Some(TomlConfig::load(path)?),
            None => match default_config_path() {
                Some(path) if path.exists() => Some(TomlConfig::load(&path)?),
                _ => None,
            },
        };

        Self::from_raw(cli, toml.as_ref())
    }

    fn resolve_format(cli: &Cli, toml: Option<&TomlConfig>) -> Result<OutputFormat, ConfigError> {
        // CLI takes precedence
        if let Some(format) = cli.format {
            return Ok(format.into());
        }

        // Fall back to TOML, then the built-in default
        let format_str = toml
            .and_then(|t| t.display.format.as_deref())
            .unwrap_or(defaults::FORMAT);

        parse_format(format_str)
    }

    fn resolve_watch_interval(
        cli: &Cli,
        toml: Option<&TomlConfig>,
    ) -> Result<Duration, ConfigError> {
        // Priority: CLI explicit > TOML > default
        let seconds = cli
            .interval
            .or_else(|| toml.and_then(|t| t.watch.interval))
            .unwrap_or(defaults::WATCH_INTERVAL_SECS);

        if seconds == 0 {
            return Err(ConfigError::InvalidDuration {
                field: "interval",
                reason: "must be greater than 0".to_string(),
            });
        }

        Ok(Duration::from_secs(seconds))
    }

    fn build_filter(cli: &Cli, toml: Option<&TomlConfig>) -> Result<FilterChain, ConfigError> {
        let mut filter = FilterChain::new();

        // Include patterns: CLI replaces TOML entirely
        let includes = if cli.include_adapters.is_empty() {
            toml.map(|t| t.filter.include.as_slice()).unwrap_or(&[])
        } else {
            cli.include_adapters.as_slice()
        };
        for pattern in includes {
            filter = filter.include(name_filter(pattern)?);
        }

        // Exclude patterns: CLI replaces TOML entirely
        let excludes = if cli.exclude_adapters.is_empty() {
            toml.map(|t| t.filter.exclude.as_slice()).unwrap_or(&[])
        } else {
            cli.exclude_adapters.as_slice()
        };
        for pattern in excludes {
            filter = filter.exclude(name_filter(pattern)?);
        }

        Ok(filter)
    }
}

/// Writes the default configuration template to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let template = super::toml::default_config_template();
    std::fs::write(path, template).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Location of the default config file under the user's config directory.
fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("ipcfg").join(defaults::CONFIG_FILE_NAME))
}

// Helper functions

fn name_filter(pattern: &str) -> Result<NameRegexFilter, ConfigError> {
    NameRegexFilter::new(pattern).map_err(|e| ConfigError::InvalidRegex {
        pattern: pattern.to_string(),
        source: e,
    })
}

fn parse_format(s: &str) -> Result<OutputFormat, ConfigError> {
    match s.to_lowercase().as_str() {
        "table" => Ok(OutputFormat::Table),
        "json" => Ok(OutputFormat::Json),
        _ => Err(ConfigError::InvalidFormat {
            value: s.to_string(),
        }),
    }
}
