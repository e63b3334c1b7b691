//! Grid-cell geometry.
//!
//! All values are in grid-cell units: one column is 1/12 of the dashboard
//! width, one row is a fixed row height chosen by the host renderer.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of columns in the dashboard grid.
pub const COLUMNS: u16 = 12;

/// Size used for widget types the catalog does not know.
pub const DEFAULT_SIZE: GridSize = GridSize { w: 6, h: 4 };

/// Column/row span of a widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridSize {
    /// Width in columns.
    pub w: u16,
    /// Height in rows.
    pub h: u16,
}

impl GridSize {
    /// Create a new size.
    #[must_use]
    pub const fn new(w: u16, h: u16) -> Self {
        Self { w, h }
    }

    /// Whether this size can ever be placed on the grid.
    #[must_use]
    pub const fn fits_grid(&self) -> bool {
        self.w >= 1 && self.w <= COLUMNS && self.h >= 1
    }

    /// Number of cells covered.
    #[must_use]
    pub const fn area(&self) -> u32 {
        self.w as u32 * self.h as u32
    }
}

impl Default for GridSize {
    fn default() -> Self {
        DEFAULT_SIZE
    }
}

impl fmt::Display for GridSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.w, self.h)
    }
}

/// Placed rectangle of a widget on the grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WidgetPosition {
    /// Left column (0-indexed).
    pub x: u16,
    /// Top row (0-indexed).
    pub y: u16,
    /// Width in columns.
    pub w: u16,
    /// Height in rows.
    pub h: u16,
}

impl WidgetPosition {
    /// Create a new position.
    #[must_use]
    pub const fn new(x: u16, y: u16, w: u16, h: u16) -> Self {
        Self { x, y, w, h }
    }

    /// Position of `size` with its top-left corner at `(x, y)`.
    #[must_use]
    pub const fn at(x: u16, y: u16, size: GridSize) -> Self {
        Self {
            x,
            y,
            w: size.w,
            h: size.h,
        }
    }

    /// Exclusive right edge.
    #[must_use]
    pub const fn right(&self) -> u16 {
        self.x.saturating_add(self.w)
    }

    /// Exclusive bottom edge.
    #[must_use]
    pub const fn bottom(&self) -> u16 {
        self.y.saturating_add(self.h)
    }

    /// Span of this position.
    #[must_use]
    pub const fn size(&self) -> GridSize {
        GridSize {
            w: self.w,
            h: self.h,
        }
    }

    /// Get the area of this rectangle.
    #[must_use]
    pub const fn area(&self) -> u32 {
        self.w as u32 * self.h as u32
    }

    /// Check if a cell is within this rectangle.
    #[must_use]
    pub const fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Whether two rectangles share at least one cell.
    #[must_use]
    pub const fn intersects(&self, other: &Self) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// Whether the rectangle lies inside a `COLUMNS`-wide grid with nonzero span.
    #[must_use]
    pub const fn is_in_bounds(&self) -> bool {
        self.w >= 1 && self.h >= 1 && self.right() <= COLUMNS
    }
}

impl fmt::Display for WidgetPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}) {}x{}", self.x, self.y, self.w, self.h)
    }
}
