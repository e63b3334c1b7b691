//! Generated layout result.

use serde::{Deserialize, Serialize};
use smartgrid_core::{WidgetConfig, WidgetType, COLUMNS};

const GLYPHS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Widgets placed by one generation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    /// Placed widgets, in placement order.
    pub widgets: Vec<WidgetConfig>,
    /// Requested widgets that did not fit, in placement order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub omitted: Vec<WidgetType>,
}

impl Layout {
    /// Number of rows covered by placed widgets.
    #[must_use]
    pub fn rows_used(&self) -> u16 {
        self.widgets
            .iter()
            .map(|w| w.position.bottom())
            .max()
            .unwrap_or(0)
    }

    /// Whether every requested widget was placed.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.omitted.is_empty()
    }

    /// Glyph used for the widget at `index` in [`Layout::render_ascii`].
    #[must_use]
    pub fn glyph(index: usize) -> char {
        char::from(GLYPHS[index % GLYPHS.len()])
    }

    /// Text occupancy map: one line per row, one character per column,
    /// `.` for free cells.
    #[must_use]
    pub fn render_ascii(&self) -> String {
        let rows = usize::from(self.rows_used());
        let cols = usize::from(COLUMNS);
        let mut map = vec![vec!['.'; cols]; rows];

        for (i, widget) in self.widgets.iter().enumerate() {
            let pos = widget.position;
            for row in map.iter_mut().take(usize::from(pos.bottom())).skip(usize::from(pos.y)) {
                for cell in row.iter_mut().take(usize::from(pos.right())).skip(usize::from(pos.x)) {
                    *cell = Self::glyph(i);
                }
            }
        }

        let mut out = String::with_capacity(rows * (cols + 1));
        for row in map {
            out.extend(row);
            out.push('\n');
        }
        out
    }
}
