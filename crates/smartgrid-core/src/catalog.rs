//! Widget catalog: static metadata for every known widget type.
//!
//! The catalog is read-only once built. The built-in catalog lives for the
//! whole process behind a [`OnceLock`]; custom catalogs can be loaded from
//! YAML and passed by reference to the layout engine.
//!
//! ```yaml
//! widgets:
//!   - type: market_indices
//!     priority: high
//!     category: banner
//!     default_size: { w: 6, h: 2 }
//!     expandable: true
//! groups:
//!   - id: market
//!     label: Market Overview
//!     widgets: [market_indices]
//! ```

use crate::error::CatalogError;
use crate::geometry::{GridSize, COLUMNS, DEFAULT_SIZE};
use crate::widget::{Category, Priority, WidgetKind, WidgetType};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

/// Layout-relevant metadata of one widget type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetMetadata {
    /// Placement priority tier.
    #[serde(default)]
    pub priority: Priority,
    /// Presentation category.
    #[serde(default)]
    pub category: Category,
    /// Size before any row-fill expansion.
    #[serde(default)]
    pub default_size: GridSize,
    /// Upper bound for row-fill expansion.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_size: Option<GridSize>,
    /// Whether row-fill may widen this widget.
    #[serde(default)]
    pub expandable: bool,
}

impl WidgetMetadata {
    /// Metadata used for types the catalog does not describe.
    pub const FALLBACK: Self = Self {
        priority: Priority::Medium,
        category: Category::Chart,
        default_size: DEFAULT_SIZE,
        max_size: None,
        expandable: false,
    };

    const fn fixed(priority: Priority, category: Category, w: u16, h: u16) -> Self {
        Self {
            priority,
            category,
            default_size: GridSize::new(w, h),
            max_size: None,
            expandable: false,
        }
    }

    const fn expandable(mut self) -> Self {
        self.expandable = true;
        self
    }

    const fn max(mut self, w: u16, h: u16) -> Self {
        self.max_size = Some(GridSize::new(w, h));
        self
    }

    /// Widest this widget may grow during row-fill (grid width when unbounded).
    #[must_use]
    pub fn max_width(&self) -> u16 {
        self.max_size.map_or(COLUMNS, |max| max.w.min(COLUMNS))
    }

    fn validate(&self, widget: &WidgetType) -> Result<(), CatalogError> {
        let invalid = |field: &'static str, size: GridSize, reason: &str| {
            Err(CatalogError::InvalidSize {
                widget: widget.to_string(),
                field,
                size,
                reason: reason.to_string(),
            })
        };

        if !self.default_size.fits_grid() {
            return invalid(
                "default_size",
                self.default_size,
                "must be 1..=12 columns wide and at least 1 row tall",
            );
        }
        if let Some(max) = self.max_size {
            if !max.fits_grid() {
                return invalid(
                    "max_size",
                    max,
                    "must be 1..=12 columns wide and at least 1 row tall",
                );
            }
            if max.w < self.default_size.w || max.h < self.default_size.h {
                return invalid("max_size", max, "smaller than default_size");
            }
        }
        Ok(())
    }
}

impl Default for WidgetMetadata {
    fn default() -> Self {
        Self::FALLBACK
    }
}

/// A catalog row: widget type plus its metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Widget type.
    #[serde(rename = "type")]
    pub widget_type: WidgetType,
    /// Metadata.
    #[serde(flatten)]
    pub metadata: WidgetMetadata,
}

/// UI-facing grouping used by widget pickers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayGroup {
    /// Stable identifier.
    pub id: String,
    /// Human-readable label.
    pub label: String,
    /// Member widget types, in display order.
    pub widgets: Vec<WidgetType>,
}

impl DisplayGroup {
    fn builtin(id: &str, label: &str, widgets: &[WidgetKind]) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            widgets: widgets.iter().copied().map(WidgetType::Known).collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    widgets: Vec<CatalogEntry>,
    #[serde(default)]
    groups: Vec<DisplayGroup>,
}

/// Read-only table of widget metadata.
#[derive(Debug, Clone, Default)]
pub struct WidgetCatalog {
    entries: Vec<CatalogEntry>,
    index: HashMap<WidgetType, usize>,
    groups: Vec<DisplayGroup>,
}

impl WidgetCatalog {
    /// Build and validate a catalog.
    pub fn new(
        entries: Vec<CatalogEntry>,
        groups: Vec<DisplayGroup>,
    ) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(entries.len());
        for (i, entry) in entries.iter().enumerate() {
            entry.metadata.validate(&entry.widget_type)?;
            if index.insert(entry.widget_type.clone(), i).is_some() {
                return Err(CatalogError::DuplicateType(entry.widget_type.to_string()));
            }
        }

        for group in &groups {
            if let Some(missing) = group.widgets.iter().find(|w| !index.contains_key(*w)) {
                return Err(CatalogError::UnknownGroupMember {
                    group: group.id.clone(),
                    widget: missing.to_string(),
                });
            }
        }

        Ok(Self {
            entries,
            index,
            groups,
        })
    }

    /// The built-in financial dashboard catalog.
    pub fn builtin() -> &'static Self {
        static BUILTIN: OnceLock<WidgetCatalog> = OnceLock::new();
        BUILTIN.get_or_init(|| {
            let entries = builtin_entries();
            let index = entries
                .iter()
                .enumerate()
                .map(|(i, e)| (e.widget_type.clone(), i))
                .collect();
            Self {
                entries,
                index,
                groups: builtin_groups(),
            }
        })
    }

    /// Parse a catalog from YAML.
    pub fn from_yaml(yaml: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_yaml_ng::from_str(yaml)?;
        let catalog = Self::new(file.widgets, file.groups)?;
        tracing::debug!(
            widgets = catalog.len(),
            groups = catalog.groups.len(),
            "loaded widget catalog"
        );
        Ok(catalog)
    }

    /// Load a catalog from a YAML file.
    pub fn from_file(path: &Path) -> Result<Self, CatalogError> {
        let contents = fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Metadata for a type, if the catalog describes it.
    #[must_use]
    pub fn metadata(&self, widget: &WidgetType) -> Option<&WidgetMetadata> {
        self.index.get(widget).map(|&i| &self.entries[i].metadata)
    }

    /// Metadata for a type, falling back to [`WidgetMetadata::FALLBACK`].
    #[must_use]
    pub fn resolve(&self, widget: &WidgetType) -> WidgetMetadata {
        self.metadata(widget).copied().unwrap_or_default()
    }

    /// Size a widget is placed with.
    #[must_use]
    pub fn smart_size(&self, widget: &WidgetType) -> GridSize {
        self.metadata(widget)
            .map_or(DEFAULT_SIZE, |meta| meta.default_size)
    }

    /// Whether row-fill may widen this widget. Unknown types never expand.
    #[must_use]
    pub fn can_expand(&self, widget: &WidgetType) -> bool {
        self.metadata(widget).is_some_and(|meta| meta.expandable)
    }

    /// Widest a widget may grow to.
    #[must_use]
    pub fn max_width(&self, widget: &WidgetType) -> u16 {
        self.resolve(widget).max_width()
    }

    /// Every type in catalog order.
    pub fn widget_types(&self) -> impl Iterator<Item = &WidgetType> + '_ {
        self.entries.iter().map(|e| &e.widget_type)
    }

    /// All entries in catalog order.
    #[must_use]
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Display groups.
    #[must_use]
    pub fn display_groups(&self) -> &[DisplayGroup] {
        &self.groups
    }

    /// The first display group containing `widget`.
    #[must_use]
    pub fn group_of(&self, widget: &WidgetType) -> Option<&DisplayGroup> {
        self.groups.iter().find(|g| g.widgets.contains(widget))
    }

    /// Number of widget types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Resolved size of `widget` in the built-in catalog (6x4 when unknown).
#[must_use]
pub fn get_smart_size(widget: &WidgetType) -> GridSize {
    WidgetCatalog::builtin().smart_size(widget)
}

/// Whether `widget` is expandable in the built-in catalog.
#[must_use]
pub fn can_expand(widget: &WidgetType) -> bool {
    WidgetCatalog::builtin().can_expand(widget)
}

/// Every built-in widget type, in catalog order.
#[must_use]
pub fn get_all_widget_types() -> Vec<WidgetType> {
    WidgetCatalog::builtin().widget_types().cloned().collect()
}

/// Built-in display groups.
#[must_use]
pub fn display_groups() -> &'static [DisplayGroup] {
    WidgetCatalog::builtin().display_groups()
}

fn builtin_metadata(kind: WidgetKind) -> WidgetMetadata {
    use Category::{Banner, Card, Chart, Stream, Table};
    use Priority::{High, Low, Medium};

    match kind {
        WidgetKind::MarketIndices => WidgetMetadata::fixed(High, Banner, 6, 2).expandable(),
        WidgetKind::PortfolioSummary => WidgetMetadata::fixed(High, Card, 4, 3)
            .max(6, 3)
            .expandable(),
        WidgetKind::MarketSentiment => WidgetMetadata::fixed(Medium, Card, 4, 3),
        WidgetKind::Watchlist => WidgetMetadata::fixed(High, Table, 4, 6)
            .max(6, 6)
            .expandable(),
        WidgetKind::PriceChart => WidgetMetadata::fixed(Medium, Chart, 8, 5).expandable(),
        WidgetKind::SectorPerformance => WidgetMetadata::fixed(Medium, Chart, 6, 4)
            .max(12, 4)
            .expandable(),
        WidgetKind::Heatmap => WidgetMetadata::fixed(Medium, Chart, 6, 5).expandable(),
        WidgetKind::TopMovers => WidgetMetadata::fixed(Medium, Table, 4, 5)
            .max(6, 5)
            .expandable(),
        WidgetKind::TrendingStocks => WidgetMetadata::fixed(Low, Table, 4, 4),
        WidgetKind::CryptoPrices => WidgetMetadata::fixed(Low, Card, 3, 3)
            .max(4, 3)
            .expandable(),
        WidgetKind::ForexRates => WidgetMetadata::fixed(Low, Card, 3, 3)
            .max(4, 3)
            .expandable(),
        WidgetKind::EconomicCalendar => WidgetMetadata::fixed(Low, Table, 6, 4),
        WidgetKind::EarningsCalendar => WidgetMetadata::fixed(Low, Table, 6, 4),
        WidgetKind::News => WidgetMetadata::fixed(Medium, Stream, 4, 6),
    }
}

fn builtin_entries() -> Vec<CatalogEntry> {
    WidgetKind::all()
        .iter()
        .map(|&kind| CatalogEntry {
            widget_type: WidgetType::Known(kind),
            metadata: builtin_metadata(kind),
        })
        .collect()
}

fn builtin_groups() -> Vec<DisplayGroup> {
    use WidgetKind as K;

    vec![
        DisplayGroup::builtin(
            "market",
            "Market Overview",
            &[
                K::MarketIndices,
                K::MarketSentiment,
                K::SectorPerformance,
                K::Heatmap,
            ],
        ),
        DisplayGroup::builtin("portfolio", "Portfolio", &[K::PortfolioSummary, K::Watchlist]),
        DisplayGroup::builtin(
            "trading",
            "Trading",
            &[K::PriceChart, K::TopMovers, K::TrendingStocks],
        ),
        DisplayGroup::builtin("global", "Global Markets", &[K::CryptoPrices, K::ForexRates]),
        DisplayGroup::builtin(
            "news",
            "News & Events",
            &[K::News, K::EconomicCalendar, K::EarningsCalendar],
        ),
    ]
}
