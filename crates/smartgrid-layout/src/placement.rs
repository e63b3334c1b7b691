//! First-fit placement.

use crate::occupancy::OccupancyGrid;
use smartgrid_core::GridSize;

/// Find the first free top-left origin for `size`.
///
/// Scans row-major: rows from the top while `y + h` stays within capacity,
/// columns left to right. Returns `None` when nothing fits; the caller
/// decides what that means.
#[must_use]
pub fn find_first_fit(grid: &OccupancyGrid, size: GridSize) -> Option<(u16, u16)> {
    if size.w == 0 || size.h == 0 || size.w > grid.columns() || size.h > grid.rows() {
        return None;
    }

    let last_x = grid.columns() - size.w;
    let last_y = grid.rows() - size.h;
    (0..=last_y).find_map(|y| {
        (0..=last_x)
            .find(|&x| grid.can_fit(x, y, size.w, size.h))
            .map(|x| (x, y))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_grid_fits_at_origin() {
        let grid = OccupancyGrid::new(50);
        assert_eq!(find_first_fit(&grid, GridSize::new(6, 4)), Some((0, 0)));
    }

    #[test]
    fn test_fills_row_before_moving_down() {
        let mut grid = OccupancyGrid::new(50);
        grid.mark_occupied(0, 0, 6, 2);
        assert_eq!(find_first_fit(&grid, GridSize::new(4, 3)), Some((6, 0)));
    }

    #[test]
    fn test_moves_down_when_row_is_full() {
        let mut grid = OccupancyGrid::new(50);
        grid.mark_occupied(0, 0, 10, 3);
        assert_eq!(find_first_fit(&grid, GridSize::new(4, 2)), Some((0, 3)));
    }

    #[test]
    fn test_fits_into_gap_under_short_widget() {
        // [ 6x2 ][ 6x4 ]: columns 0..6 are free from row 2 down.
        let mut grid = OccupancyGrid::new(50);
        grid.mark_occupied(0, 0, 6, 2);
        grid.mark_occupied(6, 0, 6, 4);
        assert_eq!(find_first_fit(&grid, GridSize::new(6, 2)), Some((0, 2)));
        assert_eq!(find_first_fit(&grid, GridSize::new(6, 3)), Some((0, 2)));
        // Seven columns overlap the taller widget until row 4.
        assert_eq!(find_first_fit(&grid, GridSize::new(7, 3)), Some((0, 4)));
    }

    #[test]
    fn test_no_fit_when_capacity_exhausted() {
        let mut grid = OccupancyGrid::new(4);
        grid.mark_occupied(0, 0, 12, 2);
        assert_eq!(find_first_fit(&grid, GridSize::new(4, 2)), Some((0, 2)));
        assert_eq!(find_first_fit(&grid, GridSize::new(4, 3)), None);
    }

    #[test]
    fn test_too_tall_for_capacity() {
        let grid = OccupancyGrid::new(3);
        assert_eq!(find_first_fit(&grid, GridSize::new(1, 4)), None);
    }

    #[test]
    fn test_degenerate_sizes() {
        let grid = OccupancyGrid::new(10);
        assert_eq!(find_first_fit(&grid, GridSize::new(13, 1)), None);
        assert_eq!(find_first_fit(&grid, GridSize::new(0, 1)), None);
        assert_eq!(find_first_fit(&grid, GridSize::new(1, 0)), None);
    }

    #[test]
    fn test_full_width() {
        let mut grid = OccupancyGrid::new(10);
        grid.mark_occupied(11, 0, 1, 1);
        assert_eq!(find_first_fit(&grid, GridSize::new(12, 1)), Some((0, 1)));
    }
}
