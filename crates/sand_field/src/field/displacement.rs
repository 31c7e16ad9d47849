//! The displacement field: authoritative groove-depth state for the sand surface.
use glam::{IVec2, Vec2};
use tracing::{debug, info, warn};

use super::config::FieldConfig;
use super::grid::FieldGrid;
use super::raster::FieldRaster;
use super::region::{self, CellRect};
use crate::error::Result;
use crate::events::{EventSink, FieldEvent};
use crate::stroke::{Brush, DiscStamp, Stroke, StrokeRasterizer, StrokeReport};

/// An `N × N` grid of groove depths in `[0, 1]`.
///
/// `1.0` is undisturbed sand and `0.0` the deepest possible groove. The field
/// starts at the configured neutral value, is lowered only by
/// [`DisplacementField::apply_stroke`] and is overwritten in place by
/// [`DisplacementField::reset`]. Changed cells are tracked as a dirty rectangle
/// so a renderer can re-upload only what moved.
#[derive(Clone, Debug)]
pub struct DisplacementField {
    config: FieldConfig,
    raster: FieldRaster,
    dirty: Option<CellRect>,
    stamp: Option<DiscStamp>,
}

impl DisplacementField {
    /// Creates a field after validating `config`.
    pub fn try_new(config: FieldConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    /// Creates a field. The configuration is a construction-time contract and is
    /// only checked in debug builds; use [`DisplacementField::try_new`] to get an error.
    pub fn new(config: FieldConfig) -> Self {
        debug_assert!(config.resolution > 0, "resolution must be > 0");
        debug_assert!(
            (0.0..=1.0).contains(&config.neutral_value),
            "neutral_value must be in [0, 1]"
        );
        debug_assert!(
            (0.0..=1.0).contains(&config.max_stamp_depth),
            "max_stamp_depth must be in [0, 1]"
        );
        Self::build(config)
    }

    /// Creates an `N × N` field with default depth settings.
    pub fn with_resolution(resolution: usize) -> Self {
        Self::new(FieldConfig::new(resolution))
    }

    fn build(config: FieldConfig) -> Self {
        let grid = FieldGrid::new(config.resolution);
        info!(
            resolution = config.resolution,
            neutral = config.neutral_value,
            "Initialized displacement field."
        );
        Self {
            raster: FieldRaster::new(grid, config.neutral_value),
            config,
            dirty: None,
            stamp: None,
        }
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn grid(&self) -> FieldGrid {
        self.raster.grid()
    }

    /// Cells per side.
    pub fn resolution(&self) -> usize {
        self.config.resolution
    }

    /// Rakes a polyline of field-space points into the field.
    ///
    /// `brush_width` is a fraction of the field size. Fewer than two points is a
    /// no-op. Returns what the stroke changed; the changed area is added to the
    /// dirty region.
    pub fn apply_stroke(&mut self, points: &[Vec2], brush_width: f32) -> StrokeReport {
        self.apply_stroke_inner(points, brush_width, &mut None, &mut ())
    }

    /// Rakes a [`Stroke`] into the field. Same as [`DisplacementField::apply_stroke`]
    /// on its points.
    pub fn apply(&mut self, stroke: &Stroke, brush_width: f32) -> StrokeReport {
        self.apply_stroke(stroke.points(), brush_width)
    }

    /// Rakes `points` as the continuation of a stroke whose last walked cell is
    /// `last`, so the joint between calls is not stamped twice.
    pub(crate) fn apply_continued(
        &mut self,
        points: &[Vec2],
        brush_width: f32,
        last: &mut Option<IVec2>,
    ) -> StrokeReport {
        self.apply_stroke_inner(points, brush_width, last, &mut ())
    }

    /// Like [`DisplacementField::apply_stroke`], reporting the outcome to `sink`.
    pub fn apply_stroke_with_events(
        &mut self,
        points: &[Vec2],
        brush_width: f32,
        sink: &mut dyn EventSink,
    ) -> StrokeReport {
        self.apply_stroke_inner(points, brush_width, &mut None, sink)
    }

    fn apply_stroke_inner(
        &mut self,
        points: &[Vec2],
        brush_width: f32,
        last: &mut Option<IVec2>,
        sink: &mut dyn EventSink,
    ) -> StrokeReport {
        if points.len() < 2 {
            sink.send(FieldEvent::StrokeIgnored {
                point_count: points.len(),
            });
            return StrokeReport::default();
        }

        let brush = Brush::new(brush_width);
        if !brush.is_valid() {
            warn!("Unusable brush width {brush_width}; using a one-cell brush.");
        }
        let radius = brush.radius_cells(self.config.resolution);

        let max_depth = self.config.max_stamp_depth;
        if !self
            .stamp
            .as_ref()
            .is_some_and(|s| s.matches(radius, max_depth))
        {
            self.stamp = Some(DiscStamp::new(radius, max_depth));
        }
        let Some(stamp) = self.stamp.as_ref() else {
            return StrokeReport::default();
        };

        let rasterizer = StrokeRasterizer::new(stamp, self.config.accumulation);
        let report = rasterizer.rasterize_continued(&mut self.raster, points, last);
        self.dirty = region::merge(self.dirty, report.region);

        debug!(
            points = points.len(),
            radius,
            stamps = report.stamps,
            cells_lowered = report.cells_lowered,
            "Applied stroke."
        );
        sink.send(FieldEvent::StrokeApplied {
            point_count: points.len(),
            radius_cells: radius,
            report: report.clone(),
        });
        report
    }

    /// Restores every cell to the neutral value and marks the whole grid dirty.
    pub fn reset(&mut self) {
        self.reset_inner(&mut ());
    }

    /// Like [`DisplacementField::reset`], reporting to `sink`.
    pub fn reset_with_events(&mut self, sink: &mut dyn EventSink) {
        self.reset_inner(sink);
    }

    fn reset_inner(&mut self, sink: &mut dyn EventSink) {
        self.raster.fill(self.config.neutral_value);
        self.dirty = Some(CellRect::full(self.config.resolution));
        debug!(resolution = self.config.resolution, "Reset displacement field.");
        sink.send(FieldEvent::Reset {
            resolution: self.config.resolution,
            neutral_value: self.config.neutral_value,
        });
    }

    /// Depth at a field-space position, read from the containing cell.
    /// Positions outside `[0,1]` clamp to the border.
    pub fn sample(&self, x: f32, y: f32) -> f32 {
        self.raster.sample_nearest(Vec2::new(x, y))
    }

    /// Depth at a field-space position, interpolated between cell centers.
    pub fn sample_bilinear(&self, x: f32, y: f32) -> f32 {
        self.raster.sample_bilinear(Vec2::new(x, y))
    }

    /// Value of cell `(ix, iy)`, or `None` outside the grid.
    pub fn get(&self, ix: i32, iy: i32) -> Option<f32> {
        self.raster.get(IVec2::new(ix, iy))
    }

    /// All values, row-major (`iy * N + ix`).
    pub fn values(&self) -> &[f32] {
        &self.raster.data
    }

    /// Values of row `iy`.
    pub fn row(&self, iy: usize) -> &[f32] {
        self.raster.row(iy)
    }

    /// Values quantized to 8 bits for single-channel texture upload.
    pub fn to_r8(&self) -> Vec<u8> {
        self.raster
            .data
            .iter()
            .map(|v| (v.clamp(0.0, 1.0) * 255.0).round() as u8)
            .collect()
    }

    /// Lowest value currently in the field.
    pub fn min_value(&self) -> f32 {
        self.raster.data.iter().copied().fold(f32::INFINITY, f32::min)
    }

    /// Returns `true` if cells changed since the last [`DisplacementField::take_dirty`].
    pub fn is_dirty(&self) -> bool {
        self.dirty.is_some()
    }

    /// Bounding rectangle of cells changed since the last [`DisplacementField::take_dirty`].
    pub fn dirty_region(&self) -> Option<CellRect> {
        self.dirty
    }

    /// Returns the dirty rectangle and marks the field clean.
    pub fn take_dirty(&mut self) -> Option<CellRect> {
        self.dirty.take()
    }
}
