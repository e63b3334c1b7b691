//! Cell occupancy bookkeeping for a 12-column grid.

use smartgrid_core::{WidgetPosition, COLUMNS};

/// Bounded 2D occupancy map.
///
/// Pure spatial bookkeeping: cells are either free or taken, with no notion
/// of which widget took them. Row capacity is fixed at construction and only
/// changes through [`OccupancyGrid::ensure_rows`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccupancyGrid {
    cells: Vec<Vec<bool>>,
    columns: u16,
}

impl OccupancyGrid {
    /// Create an empty grid with `rows` rows of [`COLUMNS`] columns.
    #[must_use]
    pub fn new(rows: u16) -> Self {
        Self {
            cells: vec![vec![false; usize::from(COLUMNS)]; usize::from(rows)],
            columns: COLUMNS,
        }
    }

    /// Column count.
    #[must_use]
    pub const fn columns(&self) -> u16 {
        self.columns
    }

    /// Current row capacity.
    #[must_use]
    pub fn rows(&self) -> u16 {
        u16::try_from(self.cells.len()).unwrap_or(u16::MAX)
    }

    /// Grow the row capacity to at least `min_rows`.
    pub fn ensure_rows(&mut self, min_rows: u16) {
        let cols = usize::from(self.columns);
        while self.cells.len() < usize::from(min_rows) {
            self.cells.push(vec![false; cols]);
        }
    }

    /// Whether the cell is taken. Out-of-bounds cells read as free.
    #[must_use]
    pub fn is_occupied(&self, x: u16, y: u16) -> bool {
        self.cells
            .get(usize::from(y))
            .and_then(|row| row.get(usize::from(x)))
            .copied()
            .unwrap_or(false)
    }

    /// True iff the rectangle lies inside the grid and every cell is free.
    #[must_use]
    pub fn can_fit(&self, x: u16, y: u16, w: u16, h: u16) -> bool {
        let (Some(right), Some(bottom)) = (x.checked_add(w), y.checked_add(h)) else {
            return false;
        };
        if right > self.columns || bottom > self.rows() {
            return false;
        }

        (y..bottom).all(|r| (x..right).all(|c| !self.is_occupied(c, r)))
    }

    /// Whether column `col` is free for every row in `[y, y + h)`.
    #[must_use]
    pub fn column_free(&self, col: u16, y: u16, h: u16) -> bool {
        self.can_fit(col, y, 1, h)
    }

    /// Mark every covered cell as taken, clipped to the grid bounds.
    pub fn mark_occupied(&mut self, x: u16, y: u16, w: u16, h: u16) {
        let right = x.saturating_add(w).min(self.columns);
        let bottom = y.saturating_add(h).min(self.rows());
        for r in y..bottom {
            for c in x..right {
                self.cells[usize::from(r)][usize::from(c)] = true;
            }
        }
    }

    /// Mark a widget rectangle as taken.
    pub fn occupy(&mut self, position: &WidgetPosition) {
        self.mark_occupied(position.x, position.y, position.w, position.h);
    }

    /// Number of taken cells.
    #[must_use]
    pub fn occupied_cells(&self) -> usize {
        self.cells
            .iter()
            .map(|row| row.iter().filter(|&&taken| taken).count())
            .sum()
    }
}
