//! Flat raster storage for groove depth values.
//!
//! Values live in one contiguous buffer indexed by [`FieldGrid::index`].
use glam::{IVec2, Vec2};

use super::grid::FieldGrid;

/// A square raster of depth values in `[0, 1]`.
#[derive(Clone, Debug)]
pub struct FieldRaster {
    pub(crate) grid: FieldGrid,
    pub(crate) data: Vec<f32>,
}

impl FieldRaster {
    /// Create a new raster over `grid`, initializing all values to `value`.
    pub fn new(grid: FieldGrid, value: f32) -> Self {
        Self {
            grid,
            data: vec![value; grid.len()],
        }
    }

    pub fn grid(&self) -> FieldGrid {
        self.grid
    }

    /// Overwrites every value in place.
    pub fn fill(&mut self, value: f32) {
        self.data.fill(value);
    }

    /// Value of a cell, or `None` if it lies outside the grid.
    #[inline]
    pub fn get(&self, cell: IVec2) -> Option<f32> {
        self.grid.index(cell).map(|i| self.data[i])
    }

    /// Lowers the cell at storage index `idx` to `min(current, candidate)`.
    /// Returns `true` if the value changed.
    #[inline]
    pub(crate) fn lower(&mut self, idx: usize, candidate: f32) -> bool {
        let slot = &mut self.data[idx];
        let next = slot.min(candidate).max(0.0);
        if next < *slot {
            *slot = next;
            true
        } else {
            false
        }
    }

    /// Values of row `iy`.
    pub fn row(&self, iy: usize) -> &[f32] {
        let n = self.grid.resolution;
        &self.data[iy * n..(iy + 1) * n]
    }

    /// Sample at a field-space position using the containing (clamped) cell.
    pub fn sample_nearest(&self, p: Vec2) -> f32 {
        let cell = self.grid.nearest_cell(p);
        self.data[cell.y as usize * self.grid.resolution + cell.x as usize]
    }

    /// Sample at a field-space position with bilinear interpolation between
    /// cell centers. Positions outside `[0,1]` clamp to the border cells.
    pub fn sample_bilinear(&self, p: Vec2) -> f32 {
        let n = self.grid.resolution;
        let last = n.saturating_sub(1) as f32;

        let x = (p.x * n as f32 - 0.5).clamp(0.0, last);
        let y = (p.y * n as f32 - 0.5).clamp(0.0, last);
        if !x.is_finite() || !y.is_finite() {
            return self.sample_nearest(p);
        }

        let x0 = x.floor() as usize;
        let y0 = y.floor() as usize;
        let x1 = (x0 + 1).min(n - 1);
        let y1 = (y0 + 1).min(n - 1);
        let fx = x - x0 as f32;
        let fy = y - y0 as f32;

        let idx = |ix: usize, iy: usize| iy * n + ix;
        let v00 = self.data[idx(x0, y0)];
        let v10 = self.data[idx(x1, y0)];
        let v01 = self.data[idx(x0, y1)];
        let v11 = self.data[idx(x1, y1)];

        let vx0 = v00 * (1.0 - fx) + v10 * fx;
        let vx1 = v01 * (1.0 - fx) + v11 * fx;
        vx0 * (1.0 - fy) + vx1 * fy
    }
}
