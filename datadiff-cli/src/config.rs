//! datadiff configuration loading from `.datadiffrc.toml`.
//!
//! Configuration is optional; without a file every setting falls back to its
//! default. Command-line flags win over anything configured here.
//!
//! # Example Configuration
//!
//! ```toml
//! [compare]
//! ignore_order = true
//! ignore_lengths = false
//! name = "Person"
//!
//! [output]
//! format = "table"
//! color = true
//! ```

use serde::Deserialize;
use std::path::Path;

/// Name of the config file looked up in the working directory.
pub const CONFIG_FILE: &str = ".datadiffrc.toml";

/// Root configuration structure loaded from `.datadiffrc.toml`.
#[derive(Debug, Deserialize, Default)]
pub struct DatadiffConfig {
    /// Default comparison relaxations.
    #[serde(default)]
    pub compare: CompareSettings,

    /// Output formatting preferences.
    #[serde(default)]
    pub output: OutputSettings,
}

/// Defaults for `datadiff compare`.
///
/// Flags given on the command line can only switch relaxations on, so a
/// configured `ignore_order = true` cannot be turned off for a single run.
#[derive(Debug, Deserialize, Default)]
pub struct CompareSettings {
    /// Match rows by closest counterpart instead of by position.
    #[serde(default)]
    pub ignore_order: bool,

    /// Report extra rows without failing.
    #[serde(default)]
    pub ignore_lengths: bool,

    /// Record type label used in reports when `--name` is not given.
    #[serde(default)]
    pub name: Option<String>,
}

/// Output formatting preferences.
#[derive(Debug, Deserialize, Default)]
pub struct OutputSettings {
    /// Default output format: `table` or `json`.
    #[serde(default)]
    pub format: Option<String>,

    /// Force colored output on or off. Unset means auto-detect from the TTY.
    #[serde(default)]
    pub color: Option<bool>,
}

impl DatadiffConfig {
    /// Load configuration from `.datadiffrc.toml` in the given directory.
    ///
    /// A missing file yields defaults. Read and parse errors are logged as
    /// warnings and also yield defaults.
    pub fn load(root: &Path) -> Self {
        let config_path = root.join(CONFIG_FILE);
        if config_path.exists() {
            match std::fs::read_to_string(&config_path) {
                Ok(content) => match toml::from_str(&content) {
                    Ok(config) => return config,
                    Err(e) => {
                        tracing::warn!("Failed to parse {}: {}", CONFIG_FILE, e);
                    }
                },
                Err(e) => {
                    tracing::warn!("Failed to read {}: {}", CONFIG_FILE, e);
                }
            }
        }
        Self::default()
    }

    /// Get the default output format, if configured.
    pub fn default_format(&self) -> Option<&str> {
        self.output.format.as_deref()
    }

    /// Get the configured color override, or `None` to auto-detect.
    pub fn use_color(&self) -> Option<bool> {
        self.output.color
    }

    /// Get the configured record type label, if any.
    pub fn default_name(&self) -> Option<&str> {
        self.compare.name.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = DatadiffConfig::default();
        assert!(!config.compare.ignore_order);
        assert!(!config.compare.ignore_lengths);
        assert!(config.default_format().is_none());
        assert!(config.use_color().is_none());
        assert!(config.default_name().is_none());
    }

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[compare]
ignore_order = true
ignore_lengths = true
name = "Person"

[output]
format = "json"
color = false
"#;
        let config: DatadiffConfig = toml::from_str(toml_content).unwrap();

        assert!(config.compare.ignore_order);
        assert!(config.compare.ignore_lengths);
        assert_eq!(config.default_name(), Some("Person"));
        assert_eq!(config.default_format(), Some("json"));
        assert_eq!(config.use_color(), Some(false));
    }

    #[test]
    fn test_partial_config() {
        let config: DatadiffConfig = toml::from_str("[compare]\nignore_order = true\n").unwrap();
        assert!(config.compare.ignore_order);
        assert!(!config.compare.ignore_lengths);
        assert!(config.output.format.is_none());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let config = DatadiffConfig::load(dir.path());
        assert!(!config.compare.ignore_order);
    }

    #[test]
    fn test_load_invalid_file_falls_back() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "[compare\nbroken").unwrap();
        let config = DatadiffConfig::load(dir.path());
        assert!(config.default_format().is_none());
    }

    #[test]
    fn test_load_from_disk() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE),
            "[compare]\nignore_lengths = true\n[output]\nformat = \"json\"\n",
        )
        .unwrap();
        let config = DatadiffConfig::load(dir.path());
        assert!(config.compare.ignore_lengths);
        assert_eq!(config.default_format(), Some("json"));
    }
}
