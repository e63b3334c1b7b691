//! YAML configuration for smartgrid.
//!
//! XDG-compliant loading: an explicit path wins, then
//! `$XDG_CONFIG_HOME/smartgrid/config.yaml`, then
//! `~/.config/smartgrid/config.yaml`, else built-in defaults.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default row capacity of the occupancy grid.
pub const DEFAULT_MAX_ROWS: u16 = 50;

/// What happens when a widget does not fit in the row capacity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverflowPolicy {
    /// Leave the widget out and report it in the layout's omitted list.
    #[default]
    Drop,
    /// Add rows until the widget fits.
    Grow,
    /// Abort generation with an error.
    Reject,
}

impl std::str::FromStr for OverflowPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "drop" => Ok(Self::Drop),
            "grow" => Ok(Self::Grow),
            "reject" => Ok(Self::Reject),
            other => Err(format!("unknown overflow policy '{other}' (drop|grow|reject)")),
        }
    }
}

/// Occupancy grid sizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Pre-allocated row capacity.
    pub max_rows: u16,
    /// Behaviour when the capacity is exhausted.
    pub overflow: OverflowPolicy,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            max_rows: DEFAULT_MAX_ROWS,
            overflow: OverflowPolicy::Drop,
        }
    }
}

impl GridConfig {
    /// Set the row capacity.
    #[must_use]
    pub const fn with_max_rows(mut self, max_rows: u16) -> Self {
        self.max_rows = max_rows;
        self
    }

    /// Set the overflow policy.
    #[must_use]
    pub const fn with_overflow(mut self, overflow: OverflowPolicy) -> Self {
        self.overflow = overflow;
        self
    }
}

/// How widget identifiers are generated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdStrategy {
    /// `{type}-{n}`, deterministic.
    #[default]
    Sequential,
    /// `{type}-{uuid}`, unique across calls.
    Random,
}

impl std::str::FromStr for IdStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sequential" => Ok(Self::Sequential),
            "random" => Ok(Self::Random),
            other => Err(format!("unknown id strategy '{other}' (sequential|random)")),
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SmartgridConfig {
    /// Grid settings.
    pub grid: GridConfig,
    /// Identifier strategy.
    pub ids: IdStrategy,
    /// Optional custom catalog file; the built-in catalog is used otherwise.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog: Option<PathBuf>,
}

impl SmartgridConfig {
    /// Get XDG-compliant config paths to search.
    pub fn config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
            paths.push(PathBuf::from(xdg_config).join("smartgrid/config.yaml"));
        }

        if let Ok(home) = std::env::var("HOME") {
            paths.push(PathBuf::from(home).join(".config/smartgrid/config.yaml"));
        }

        paths
    }

    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, the first existing XDG path
    /// is used, falling back to defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load_from_file(path);
        }

        for path in Self::config_paths() {
            if path.exists() {
                return Self::load_from_file(&path);
            }
        }

        tracing::debug!("no config file found, using defaults");
        Ok(Self::default())
    }

    /// Load configuration from a specific file path.
    ///
    /// A relative `catalog` path is taken relative to the file's directory.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let mut config = Self::from_yaml(&contents)?;
        if let (Some(catalog), Some(dir)) = (config.catalog.as_mut(), path.parent()) {
            if catalog.is_relative() {
                *catalog = dir.join(&*catalog);
            }
        }
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Parse and validate configuration YAML.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        // An empty or comment-only document deserializes as null.
        if yaml.lines().all(|l| l.trim().is_empty() || l.trim_start().starts_with('#')) {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml_ng::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid.max_rows == 0 {
            return Err(ConfigError::Invalid {
                field: "grid.max_rows".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Generate default configuration as YAML string.
    pub fn default_yaml() -> String {
        r"# smartgrid configuration file
# Location: ~/.config/smartgrid/config.yaml

grid:
  # Rows pre-allocated for placement
  max_rows: 50
  # What to do when a widget does not fit: drop | grow | reject
  overflow: drop

# Widget id generation: sequential | random
ids: sequential

# Optional custom widget catalog (YAML); relative paths are resolved
# against this file's directory
# catalog: catalog.yaml
"
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_config_default() {
        let grid = GridConfig::default();
        assert_eq!(grid.max_rows, 50);
        assert_eq!(grid.overflow, OverflowPolicy::Drop);
    }

    #[test]
    fn test_grid_config_builder() {
        let grid = GridConfig::default()
            .with_max_rows(8)
            .with_overflow(OverflowPolicy::Grow);
        assert_eq!(grid.max_rows, 8);
        assert_eq!(grid.overflow, OverflowPolicy::Grow);
    }

    #[test]
    fn test_overflow_policy_parse() {
        assert_eq!("grow".parse::<OverflowPolicy>(), Ok(OverflowPolicy::Grow));
        assert_eq!("reject".parse::<OverflowPolicy>(), Ok(OverflowPolicy::Reject));
        assert!("explode".parse::<OverflowPolicy>().is_err());
    }

    #[test]
    fn test_id_strategy_parse() {
        assert_eq!("random".parse::<IdStrategy>(), Ok(IdStrategy::Random));
        assert!("uuid".parse::<IdStrategy>().is_err());
    }

    #[test]
    fn test_default_yaml_parses_to_default() {
        let config = SmartgridConfig::from_yaml(&SmartgridConfig::default_yaml()).unwrap();
        assert_eq!(config, SmartgridConfig::default());
    }

    #[test]
    fn test_from_yaml_partial() {
        let config = SmartgridConfig::from_yaml("grid:\n  overflow: reject\n").unwrap();
        assert_eq!(config.grid.overflow, OverflowPolicy::Reject);
        assert_eq!(config.grid.max_rows, DEFAULT_MAX_ROWS);
        assert_eq!(config.ids, IdStrategy::Sequential);
    }

    #[test]
    fn test_from_yaml_empty() {
        assert_eq!(
            SmartgridConfig::from_yaml("").unwrap(),
            SmartgridConfig::default()
        );
        assert_eq!(
            SmartgridConfig::from_yaml("# nothing here\n").unwrap(),
            SmartgridConfig::default()
        );
    }

    #[test]
    fn test_from_yaml_rejects_zero_rows() {
        let err = SmartgridConfig::from_yaml("grid:\n  max_rows: 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
    }

    #[test]
    fn test_from_yaml_bad_enum() {
        let err = SmartgridConfig::from_yaml("ids: guid\n").unwrap_err();
        assert!(matches!(err, ConfigError::Yaml(_)));
    }

    #[test]
    fn test_load_explicit_missing_is_error() {
        let err = SmartgridConfig::load(Some(Path::new("/nonexistent/smartgrid.yaml")))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_load_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(
            &path,
            "grid:\n  max_rows: 12\nids: random\ncatalog: widgets.yaml\n",
        )
        .unwrap();

        let config = SmartgridConfig::load(Some(&path)).unwrap();
        assert_eq!(config.grid.max_rows, 12);
        assert_eq!(config.ids, IdStrategy::Random);
        assert_eq!(config.catalog, Some(dir.path().join("widgets.yaml")));
    }

    #[test]
    fn test_load_keeps_absolute_catalog_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "catalog: /opt/smartgrid/widgets.yaml\n").unwrap();

        let config = SmartgridConfig::load_from_file(&path).unwrap();
        assert_eq!(
            config.catalog,
            Some(PathBuf::from("/opt/smartgrid/widgets.yaml"))
        );
    }

    #[test]
    fn test_from_yaml_leaves_catalog_path_untouched() {
        let config = SmartgridConfig::from_yaml("catalog: widgets.yaml\n").unwrap();
        assert_eq!(config.catalog, Some(PathBuf::from("widgets.yaml")));
    }

    #[test]
    fn test_config_paths_end_with_file_name() {
        for path in SmartgridConfig::config_paths() {
            assert!(path.ends_with("smartgrid/config.yaml"));
        }
    }
}
