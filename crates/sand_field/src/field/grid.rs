//! Square cell grid addressing for the displacement field.
//!
//! [`FieldGrid`] maps the normalized `[0,1]×[0,1]` field space onto integer cell
//! coordinates. Row `iy` covers `v ∈ [iy/N, (iy+1)/N)`, column `ix` covers
//! `u ∈ [ix/N, (ix+1)/N)`, and storage is row-major (`iy * N + ix`).
use glam::{IVec2, Vec2};

/// Defines an `N × N` grid of cells over normalized field space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FieldGrid {
    /// Number of cells per side.
    pub resolution: usize,
}

impl FieldGrid {
    pub fn new(resolution: usize) -> Self {
        Self { resolution }
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.resolution * self.resolution
    }

    pub fn is_empty(&self) -> bool {
        self.resolution == 0
    }

    /// Converts a field-space position to continuous cell coordinates.
    #[inline]
    pub fn to_cell_space(&self, p: Vec2) -> Vec2 {
        p * self.resolution as f32
    }

    /// Converts a field-space position to the index of the cell containing it.
    /// The result may lie outside the grid.
    #[inline]
    pub fn cell_of(&self, p: Vec2) -> IVec2 {
        self.to_cell_space(p).floor().as_ivec2()
    }

    /// Field-space position of a cell center.
    pub fn cell_center(&self, cell: IVec2) -> Vec2 {
        (cell.as_vec2() + Vec2::splat(0.5)) / self.resolution as f32
    }

    /// Returns `true` if the cell lies inside the grid.
    #[inline]
    pub fn contains(&self, cell: IVec2) -> bool {
        let n = self.resolution as i64;
        let (x, y) = (cell.x as i64, cell.y as i64);
        x >= 0 && y >= 0 && x < n && y < n
    }

    /// Row-major storage index of a cell, or `None` if it lies outside the grid.
    #[inline]
    pub fn index(&self, cell: IVec2) -> Option<usize> {
        if self.contains(cell) {
            Some(cell.y as usize * self.resolution + cell.x as usize)
        } else {
            None
        }
    }

    /// Clamps a field-space position to the nearest in-grid cell.
    pub fn nearest_cell(&self, p: Vec2) -> IVec2 {
        let max = self.resolution.saturating_sub(1) as i32;
        self.cell_of(p).clamp(IVec2::ZERO, IVec2::splat(max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_of_floors_scaled_position() {
        let grid = FieldGrid::new(256);
        assert_eq!(grid.cell_of(Vec2::new(0.5, 0.5)), IVec2::new(128, 128));
        assert_eq!(grid.cell_of(Vec2::new(0.1, 0.9)), IVec2::new(25, 230));
        assert_eq!(grid.cell_of(Vec2::new(-0.01, 1.0)), IVec2::new(-3, 256));
    }

    #[test]
    fn index_is_row_major_and_bounds_checked() {
        let grid = FieldGrid::new(4);
        assert_eq!(grid.len(), 16);
        assert_eq!(grid.index(IVec2::new(0, 0)), Some(0));
        assert_eq!(grid.index(IVec2::new(3, 1)), Some(7));
        assert_eq!(grid.index(IVec2::new(4, 0)), None);
        assert_eq!(grid.index(IVec2::new(0, -1)), None);
    }

    #[test]
    fn cell_center_roundtrip() {
        let grid = FieldGrid::new(8);
        let cell = IVec2::new(5, 2);
        assert_eq!(grid.cell_of(grid.cell_center(cell)), cell);
    }

    #[test]
    fn nearest_cell_clamps_outside_positions() {
        let grid = FieldGrid::new(8);
        assert_eq!(grid.nearest_cell(Vec2::new(-2.0, 3.0)), IVec2::new(0, 7));
        assert_eq!(grid.nearest_cell(Vec2::new(1.0, 1.0)), IVec2::new(7, 7));
    }
}
