#![allow(clippy::module_name_repetitions)]
#![allow(clippy::doc_markdown)]
//! Core types for the smartgrid dashboard layout engine.
//!
//! - [`WidgetType`]: open-ended widget identifier backed by the closed
//!   [`WidgetKind`] enum of built-in widgets
//! - [`WidgetCatalog`]: read-only metadata table (priority, category, sizes,
//!   expandability) plus UI display groups
//! - [`WidgetPosition`] / [`WidgetConfig`]: placement records handed to the
//!   host grid renderer
//! - [`SmartgridConfig`]: YAML configuration

mod catalog;
mod config;
mod error;
mod geometry;
mod widget;

pub use catalog::{
    can_expand, display_groups, get_all_widget_types, get_smart_size, CatalogEntry,
    DisplayGroup, WidgetCatalog, WidgetMetadata,
};
pub use config::{GridConfig, IdStrategy, OverflowPolicy, SmartgridConfig, DEFAULT_MAX_ROWS};
pub use error::{CatalogError, ConfigError};
pub use geometry::{GridSize, WidgetPosition, COLUMNS, DEFAULT_SIZE};
pub use widget::{Category, Priority, WidgetConfig, WidgetKind, WidgetType};
