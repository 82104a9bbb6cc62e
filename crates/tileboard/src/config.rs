//! Dashboard configuration.
//!
//! Values are layered, later layers winning:
//!
//! 1. **Built-in defaults**: [`DashboardConfig::default()`]
//! 2. **Config file**: `--config <path>` if given, otherwise
//!    `<config dir>/tileboard/config.toml` when it exists
//! 3. **Command-line flags**
//!
//! An explicit `--config` path must exist. The default location is optional.

use crate::cli::Cli;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tileboard_core::{default_seed, Catalog, CatalogEntry, CatalogError};
use tileboard_runtime::ProgramOptions;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid catalog: {0}")]
    Catalog(#[from] CatalogError),
    #[error("columns must be at least 1")]
    ZeroColumns,
}

/// Top-level configuration, mapping directly onto `config.toml`.
///
/// Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DashboardConfig {
    /// Heading shown at the top left.
    pub title: String,
    /// Static range label shown at the top right.
    pub range_label: String,
    /// Card columns in the grid.
    pub columns: u16,
    pub program: ProgramConfig,
    /// Kinds offered by the picker. `None` keeps the stock catalog.
    pub catalog: Option<Vec<CatalogEntry>>,
    /// Widgets on the board at startup. `None` keeps the stock seed.
    pub seed: Option<Vec<CatalogEntry>>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            title: "CNAPP Dashboard".to_string(),
            range_label: "Last 7 days ▼".to_string(),
            columns: 2,
            program: ProgramConfig::default(),
            catalog: None,
            seed: None,
        }
    }
}

/// `[program]`: terminal and logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProgramConfig {
    pub fps: u32,
    pub alt_screen: bool,
    pub log_file: Option<PathBuf>,
    pub log_level: Option<String>,
}

impl Default for ProgramConfig {
    fn default() -> Self {
        let options = ProgramOptions::default();
        Self {
            fps: options.fps,
            alt_screen: options.alt_screen,
            log_file: None,
            log_level: None,
        }
    }
}

impl DashboardConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Read and parse a config file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Apply command-line overrides on top of the file values.
    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(fps) = cli.fps {
            self.program.fps = fps;
        }
        if let Some(columns) = cli.columns {
            self.columns = columns;
        }
        if cli.inline {
            self.program.alt_screen = false;
        }
        if let Some(path) = &cli.log_file {
            self.program.log_file = Some(path.clone());
        }
        if let Some(level) = &cli.log_level {
            self.program.log_level = Some(level.clone());
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.columns == 0 {
            return Err(ConfigError::ZeroColumns);
        }
        self.catalog()?;
        Ok(())
    }

    /// The picker catalog: the configured entries or the stock list.
    pub fn catalog(&self) -> Result<Catalog, ConfigError> {
        match &self.catalog {
            Some(entries) => Ok(Catalog::new(entries.clone())?),
            None => Ok(Catalog::default()),
        }
    }

    /// Startup widgets: the configured entries or the stock seed.
    pub fn seed(&self) -> Vec<CatalogEntry> {
        self.seed.clone().unwrap_or_else(default_seed)
    }

    pub fn program_options(&self) -> ProgramOptions {
        ProgramOptions {
            fps: self.program.fps,
            alt_screen: self.program.alt_screen,
            title: Some(self.title.clone()),
            ..ProgramOptions::default()
        }
    }
}

/// `<config dir>/tileboard/config.toml`, if the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("tileboard").join("config.toml"))
}

/// Resolve the full configuration for this run.
pub fn load(cli: &Cli) -> Result<DashboardConfig, ConfigError> {
    load_layers(cli, default_config_path())
}

fn load_layers(cli: &Cli, fallback: Option<PathBuf>) -> Result<DashboardConfig, ConfigError> {
    let mut config = match (&cli.config, fallback) {
        (Some(path), _) => {
            tracing::debug!(path = %path.display(), "loading config");
            DashboardConfig::from_file(path)?
        }
        (None, Some(path)) if path.is_file() => {
            tracing::debug!(path = %path.display(), "loading default config");
            DashboardConfig::from_file(&path)?
        }
        _ => DashboardConfig::default(),
    };
    config.apply_cli(cli);
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tileboard_core::WidgetKind;

    fn write_file(dir: &tempfile::TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).expect("write config");
        path
    }

    #[test]
    fn empty_file_gives_defaults() {
        let config = DashboardConfig::from_toml_str("").unwrap();
        assert_eq!(config, DashboardConfig::default());
        assert_eq!(config.title, "CNAPP Dashboard");
        assert_eq!(config.columns, 2);
    }

    #[test]
    fn parses_full_file() {
        let config = DashboardConfig::from_toml_str(
            r#"
            title = "Prod"
            range_label = "Last 30 days"
            columns = 3

            [program]
            fps = 30
            alt_screen = false
            log_file = "/tmp/tileboard.log"
            log_level = "debug"

            [[catalog]]
            kind = "widget1"
            title = "Widget 1"

            [[seed]]
            kind = "clientAccounts"
            title = "Client Accounts"
            "#,
        )
        .unwrap();
        assert_eq!(config.title, "Prod");
        assert_eq!(config.columns, 3);
        assert_eq!(config.program.fps, 30);
        assert!(!config.program.alt_screen);
        assert_eq!(config.program.log_level.as_deref(), Some("debug"));
        let catalog = config.catalog().unwrap();
        assert_eq!(catalog.len(), 1);
        assert!(catalog.contains(&WidgetKind::WIDGET_1));
        let seed = config.seed();
        assert_eq!(seed.len(), 1);
        assert_eq!(seed[0].kind, WidgetKind::CLIENT_ACCOUNTS);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(DashboardConfig::from_toml_str("colums = 3").is_err());
    }

    #[test]
    fn missing_lists_fall_back_to_stock() {
        let config = DashboardConfig::default();
        assert_eq!(config.catalog().unwrap(), Catalog::default());
        assert_eq!(config.seed(), default_seed());
    }

    #[test]
    fn zero_columns_is_invalid() {
        let config = DashboardConfig {
            columns: 0,
            ..DashboardConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::ZeroColumns)));
    }

    #[test]
    fn duplicate_catalog_kind_is_invalid() {
        let config = DashboardConfig::from_toml_str(
            r#"
            [[catalog]]
            kind = "widget1"
            title = "Widget 1"

            [[catalog]]
            kind = "widget1"
            title = "Again"
            "#,
        )
        .unwrap();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Catalog(CatalogError::DuplicateKind(_)))
        ));
    }

    #[test]
    fn cli_overrides_file_values() {
        let mut config = DashboardConfig::default();
        let cli = Cli {
            fps: Some(15),
            columns: Some(4),
            inline: true,
            log_level: Some("trace".into()),
            ..Cli::default()
        };
        config.apply_cli(&cli);
        assert_eq!(config.program.fps, 15);
        assert_eq!(config.columns, 4);
        assert!(!config.program.alt_screen);
        assert_eq!(config.program.log_level.as_deref(), Some("trace"));
    }

    #[test]
    fn program_options_carry_title_and_fps() {
        let config = DashboardConfig::default();
        let options = config.program_options();
        assert_eq!(options.fps, 60);
        assert!(options.alt_screen);
        assert_eq!(options.title.as_deref(), Some("CNAPP Dashboard"));
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let cli = Cli {
            config: Some(dir.path().join("missing.toml")),
            ..Cli::default()
        };
        assert!(matches!(load_layers(&cli, None), Err(ConfigError::Read { .. })));
    }

    #[test]
    fn missing_default_file_is_fine() {
        let dir = tempfile::tempdir().expect("temp dir");
        let fallback = dir.path().join("config.toml");
        let config = load_layers(&Cli::default(), Some(fallback)).unwrap();
        assert_eq!(config, DashboardConfig::default());
    }

    #[test]
    fn default_file_is_loaded_then_overridden() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = write_file(&dir, "layered.toml", "title = \"From file\"\ncolumns = 3\n");
        let cli = Cli {
            columns: Some(1),
            ..Cli::default()
        };
        let config = load_layers(&cli, Some(path)).unwrap();
        assert_eq!(config.title, "From file");
        assert_eq!(config.columns, 1);
    }

    #[test]
    fn malformed_file_reports_parse_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = write_file(&dir, "broken.toml", "columns = \"two\"\n");
        let cli = Cli {
            config: Some(path),
            ..Cli::default()
        };
        assert!(matches!(load_layers(&cli, None), Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn explicit_file_wins_over_default_location() {
        let dir = tempfile::tempdir().expect("temp dir");
        let explicit = write_file(&dir, "explicit.toml", "title = \"Explicit\"\n");
        let fallback = write_file(&dir, "fallback.toml", "title = \"Fallback\"\n");
        let cli = Cli {
            config: Some(explicit),
            ..Cli::default()
        };
        let config = load_layers(&cli, Some(fallback)).unwrap();
        assert_eq!(config.title, "Explicit");
    }
}
