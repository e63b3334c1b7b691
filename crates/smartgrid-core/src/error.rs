//! Error types for smartgrid-core.

use crate::geometry::GridSize;
use thiserror::Error;

/// Errors raised while building a widget catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// IO error reading a catalog file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Catalog YAML could not be parsed.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// A size is empty or wider than the grid.
    #[error("invalid {field} {size} for '{widget}': {reason}")]
    InvalidSize {
        widget: String,
        field: &'static str,
        size: GridSize,
        reason: String,
    },

    /// The same type appears twice.
    #[error("duplicate widget type '{0}'")]
    DuplicateType(String),

    /// A display group names a type missing from the catalog.
    #[error("group '{group}' references unknown widget type '{widget}'")]
    UnknownGroupMember { group: String, widget: String },
}

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// IO error reading the config file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config YAML could not be parsed.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// A value is out of range.
    #[error("invalid value for '{field}': {message}")]
    Invalid { field: String, message: String },
}
