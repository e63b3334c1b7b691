//! Layout generation pipeline.
//!
//! ```text
//! selected types ──▶ priority_order ──▶ first-fit per widget ──▶ row-fill ──▶ Layout
//!                                         │
//!                                         └─ no fit: OverflowPolicy (drop | grow | reject)
//! ```
//!
//! Placement is a pure function of the input list, the catalog and the grid
//! configuration. Identifiers come from the caller's [`IdGenerator`].

use crate::error::LayoutError;
use crate::ids::{IdGenerator, SequentialIds};
use crate::layout::Layout;
use crate::occupancy::OccupancyGrid;
use crate::order::priority_order;
use crate::placement::find_first_fit;
use crate::row_fill::optimize_row_filling;
use smartgrid_core::{
    GridConfig, GridSize, OverflowPolicy, WidgetCatalog, WidgetConfig, WidgetPosition, WidgetType,
};

/// Automatic dashboard layout generator.
#[derive(Debug, Clone, Copy)]
pub struct LayoutGenerator<'a> {
    catalog: &'a WidgetCatalog,
    grid: GridConfig,
}

impl Default for LayoutGenerator<'static> {
    fn default() -> Self {
        Self::new(WidgetCatalog::builtin())
    }
}

impl<'a> LayoutGenerator<'a> {
    /// Create a generator over `catalog` with the default grid.
    #[must_use]
    pub fn new(catalog: &'a WidgetCatalog) -> Self {
        Self {
            catalog,
            grid: GridConfig::default(),
        }
    }

    /// Set grid configuration.
    #[must_use]
    pub const fn with_grid(mut self, grid: GridConfig) -> Self {
        self.grid = grid;
        self
    }

    /// The catalog in use.
    #[must_use]
    pub const fn catalog(&self) -> &'a WidgetCatalog {
        self.catalog
    }

    /// The grid configuration in use.
    #[must_use]
    pub const fn grid(&self) -> GridConfig {
        self.grid
    }

    /// Generate a layout for `selected`.
    ///
    /// Fails only under [`OverflowPolicy::Reject`].
    pub fn generate(
        &self,
        selected: &[WidgetType],
        ids: &mut dyn IdGenerator,
    ) -> Result<Layout, LayoutError> {
        let ordered = priority_order(self.catalog, selected);
        let mut grid = OccupancyGrid::new(self.grid.max_rows);
        let mut layout = Layout::default();

        for widget_type in ordered {
            let size = self.catalog.smart_size(&widget_type);
            let Some((x, y)) = self.place(&mut grid, &widget_type, size)? else {
                tracing::warn!(
                    widget = %widget_type,
                    size = %size,
                    rows = grid.rows(),
                    "no room for widget, dropping it"
                );
                layout.omitted.push(widget_type);
                continue;
            };

            let position = WidgetPosition::at(x, y, size);
            grid.occupy(&position);
            let id = ids.next_id(&widget_type);
            tracing::debug!(widget = %widget_type, %id, %position, "placed widget");
            layout
                .widgets
                .push(WidgetConfig::new(id, widget_type, position));
        }

        let expanded = optimize_row_filling(&mut layout.widgets, &mut grid, self.catalog);
        tracing::debug!(
            placed = layout.widgets.len(),
            omitted = layout.omitted.len(),
            expanded,
            rows = layout.rows_used(),
            "generated layout"
        );

        Ok(layout)
    }

    /// First-fit position for one widget, applying the overflow policy.
    fn place(
        &self,
        grid: &mut OccupancyGrid,
        widget: &WidgetType,
        size: GridSize,
    ) -> Result<Option<(u16, u16)>, LayoutError> {
        if let Some(origin) = find_first_fit(grid, size) {
            return Ok(Some(origin));
        }

        match self.grid.overflow {
            OverflowPolicy::Drop => Ok(None),
            OverflowPolicy::Reject => Err(LayoutError::GridExhausted {
                widget: widget.clone(),
                size,
                rows: grid.rows(),
            }),
            OverflowPolicy::Grow => {
                // The new rows are empty, so a widget no wider than the grid
                // always fits after this.
                grid.ensure_rows(grid.rows().saturating_add(size.h));
                tracing::debug!(widget = %widget, rows = grid.rows(), "grew occupancy grid");
                Ok(find_first_fit(grid, size))
            }
        }
    }
}

/// Generate a layout over the built-in catalog with default settings and
/// sequential identifiers.
///
/// Widgets that do not fit the default row capacity are left out.
#[must_use]
pub fn generate_smart_layout<I, T>(selected: I) -> Vec<WidgetConfig>
where
    I: IntoIterator<Item = T>,
    T: Into<WidgetType>,
{
    let selected: Vec<WidgetType> = selected.into_iter().map(Into::into).collect();
    LayoutGenerator::default()
        .generate(&selected, &mut SequentialIds::new())
        .map(|layout| layout.widgets)
        .unwrap_or_default()
}
