//! Row-fill: widen placed widgets into free columns on their right.
//!
//! One forward pass in placement order. A widget visited early is not
//! revisited when a later widget changes what is free, and the pass does not
//! iterate to a fixpoint. This is a gap filler, not a repacking.

use crate::occupancy::OccupancyGrid;
use smartgrid_core::{WidgetCatalog, WidgetConfig};

/// Widen every expandable widget by the run of free columns directly to its
/// right, bounded by its catalog max width and the grid width.
///
/// Returns the number of widgets that grew.
pub fn optimize_row_filling(
    widgets: &mut [WidgetConfig],
    grid: &mut OccupancyGrid,
    catalog: &WidgetCatalog,
) -> usize {
    let mut expanded = 0;

    for widget in widgets.iter_mut() {
        if !catalog.can_expand(&widget.widget_type) {
            continue;
        }

        let pos = widget.position;
        let limit = pos
            .x
            .saturating_add(catalog.max_width(&widget.widget_type))
            .min(grid.columns());
        let expand_by = (pos.right()..limit)
            .take_while(|&col| grid.column_free(col, pos.y, pos.h))
            .count() as u16;

        if expand_by > 0 {
            grid.mark_occupied(pos.right(), pos.y, expand_by, pos.h);
            widget.position.w += expand_by;
            expanded += 1;
            tracing::debug!(
                widget = %widget.widget_type,
                id = %widget.id,
                from = pos.w,
                to = widget.position.w,
                "expanded widget"
            );
        }
    }

    expanded
}
