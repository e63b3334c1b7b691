//! Error types for smartgrid-layout.

use smartgrid_core::{GridSize, WidgetType};
use thiserror::Error;

/// Errors from layout generation.
///
/// Only raised under [`smartgrid_core::OverflowPolicy::Reject`]; the other
/// policies never fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// No free position for a widget within the row capacity.
    #[error("no room for '{widget}' ({size}) within {rows} rows")]
    GridExhausted {
        widget: WidgetType,
        size: GridSize,
        rows: u16,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_exhausted_display() {
        let err = LayoutError::GridExhausted {
            widget: WidgetType::from("news"),
            size: GridSize::new(4, 6),
            rows: 8,
        };
        assert_eq!(err.to_string(), "no room for 'news' (4x6) within 8 rows");
    }
}
