//! Grid-space to scene-space transform
//!
//! Derived once per viewport size. A layout with no cell size (before the first
//! resize, or from a zero-sized viewport) is "unestablished" and every caller
//! must treat it as a no-op.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::grid::Cell;

/// Cell size and origin offset of the maze inside the viewport
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    /// Side length of one cell in scene units (0 = not established)
    pub cell_size: f32,
    /// Scene position of the top-left maze corner
    pub origin: Vec2,
    rows: usize,
    cols: usize,
}

impl Layout {
    /// Layout with no geometry yet
    pub fn unset(rows: usize, cols: usize) -> Self {
        Self {
            cell_size: 0.0,
            origin: Vec2::ZERO,
            rows: rows.max(1),
            cols: cols.max(1),
        }
    }

    /// Fit a rows x cols maze into `fill` of the viewport, centred
    pub fn from_viewport(width: f32, height: f32, rows: usize, cols: usize, fill: f32) -> Self {
        let mut layout = Self::unset(rows, cols);
        if !(width.is_finite() && height.is_finite()) || width <= 0.0 || height <= 0.0 {
            return layout;
        }

        let cell_size = (width * fill / layout.cols as f32).min(height * fill / layout.rows as f32);
        layout.cell_size = cell_size;
        layout.origin = Vec2::new(
            (width - cell_size * layout.cols as f32) / 2.0,
            (height - cell_size * layout.rows as f32) / 2.0,
        );
        layout
    }

    #[inline]
    pub fn is_established(&self) -> bool {
        self.cell_size.is_finite() && self.cell_size > 0.0
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Maze width and height in scene units
    pub fn extent(&self) -> Vec2 {
        Vec2::new(
            self.cell_size * self.cols as f32,
            self.cell_size * self.rows as f32,
        )
    }

    /// Scene x of the vertical grid line left of column `col`
    #[inline]
    pub fn line_x(&self, col: usize) -> f32 {
        self.origin.x + col as f32 * self.cell_size
    }

    /// Scene y of the horizontal grid line above row `row`
    #[inline]
    pub fn line_y(&self, row: usize) -> f32 {
        self.origin.y + row as f32 * self.cell_size
    }

    /// Scene position of a cell's centre
    pub fn cell_center(&self, cell: Cell) -> Vec2 {
        self.origin
            + Vec2::new(
                (cell.col as f32 + 0.5) * self.cell_size,
                (cell.row as f32 + 0.5) * self.cell_size,
            )
    }

    /// Cell containing a scene point, clamped into the grid.
    ///
    /// Points on or past the playfield edge map to the nearest edge cell. An
    /// unestablished layout maps everything to the origin cell.
    pub fn cell_at(&self, point: Vec2) -> Cell {
        if !self.is_established() {
            return Cell::ORIGIN;
        }
        let local = (point - self.origin) / self.cell_size;
        // Float-to-int casts saturate (NaN -> 0), so only the upper bound needs clamping
        let col = (local.x.floor() as usize).min(self.cols - 1);
        let row = (local.y.floor() as usize).min(self.rows - 1);
        Cell::new(row, col)
    }

    /// Smallest and largest centre position for a ball of `radius` inside the playfield
    pub fn ball_bounds(&self, radius: f32) -> (Vec2, Vec2) {
        let min = self.origin + Vec2::splat(radius);
        let max = self.origin + self.extent() - Vec2::splat(radius);
        (min, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn test_from_viewport_portrait() {
        // 1000x2000 viewport, 10 rows x 8 cols
        let layout = Layout::from_viewport(1000.0, 2000.0, 10, 8, 0.9);
        // min(900/8, 1800/10) = 112.5
        assert!(approx(layout.cell_size, 112.5));
        assert!(approx(layout.origin.x, (1000.0 - 900.0) / 2.0));
        assert!(approx(layout.origin.y, (2000.0 - 1125.0) / 2.0));
        assert!(layout.is_established());
    }

    #[test]
    fn test_zero_viewport_unestablished() {
        assert!(!Layout::from_viewport(0.0, 600.0, 10, 8, 0.9).is_established());
        assert!(!Layout::from_viewport(800.0, -1.0, 10, 8, 0.9).is_established());
        assert!(!Layout::from_viewport(f32::NAN, 600.0, 10, 8, 0.9).is_established());
        assert!(!Layout::unset(10, 8).is_established());
    }

    #[test]
    fn test_cell_center_and_lookup() {
        let layout = Layout::from_viewport(500.0, 500.0, 5, 5, 1.0);
        assert!(approx(layout.cell_size, 100.0));
        let center = layout.cell_center(Cell::new(2, 3));
        assert!(approx(center.x, 350.0));
        assert!(approx(center.y, 250.0));
        assert_eq!(layout.cell_at(center), Cell::new(2, 3));
    }

    #[test]
    fn test_cell_lookup_clamps() {
        let layout = Layout::from_viewport(500.0, 500.0, 5, 5, 1.0);
        assert_eq!(layout.cell_at(Vec2::new(-30.0, -1.0)), Cell::new(0, 0));
        assert_eq!(layout.cell_at(Vec2::new(500.0, 500.0)), Cell::new(4, 4));
        assert_eq!(layout.cell_at(Vec2::new(1e9, 20.0)), Cell::new(0, 4));
        assert_eq!(layout.cell_at(Vec2::new(f32::NAN, f32::NAN)), Cell::new(0, 0));
    }

    #[test]
    fn test_ball_bounds() {
        let layout = Layout::from_viewport(500.0, 500.0, 5, 5, 1.0);
        let (min, max) = layout.ball_bounds(25.0);
        assert!(approx(min.x, 25.0) && approx(min.y, 25.0));
        assert!(approx(max.x, 475.0) && approx(max.y, 475.0));
    }
}
