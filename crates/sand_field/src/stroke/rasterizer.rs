//! Converts polylines into monotonic depth reductions on a [`FieldRaster`].
//!
//! Each segment is clipped to the grid (expanded by the brush radius), walked
//! cell by cell with [`BresenhamLine`], and a [`DiscStamp`] is applied at every
//! step. A stamped cell becomes `min(current, candidate)`, so a stroke can lower
//! values but never raise them, and overlapping stamps commute.
use glam::{IVec2, Vec2};
use tracing::warn;

use crate::field::config::DepthAccumulation;
use crate::field::raster::FieldRaster;
use crate::field::region::{self, CellRect};
use crate::stroke::line::{clip_segment, BresenhamLine};
use crate::stroke::stamp::DiscStamp;

/// Summary of one rasterization call.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StrokeReport {
    /// Segments walked (after clipping).
    pub segments: usize,
    /// Segments dropped because they had non-finite endpoints or lay entirely off-grid.
    pub skipped_segments: usize,
    /// Disc stamps applied.
    pub stamps: usize,
    /// Cell writes that lowered a value.
    pub cells_lowered: usize,
    /// Bounding rectangle of lowered cells.
    pub region: Option<CellRect>,
}

impl StrokeReport {
    /// Returns `true` if no cell changed.
    pub fn is_unchanged(&self) -> bool {
        self.cells_lowered == 0
    }

    /// Accumulates another report into this one.
    pub fn merge(&mut self, other: &StrokeReport) {
        self.segments += other.segments;
        self.skipped_segments += other.skipped_segments;
        self.stamps += other.stamps;
        self.cells_lowered += other.cells_lowered;
        self.region = region::merge(self.region, other.region);
    }
}

/// Stateless stroke rasterizer bound to a disc kernel and a candidate rule.
#[derive(Clone, Copy, Debug)]
pub struct StrokeRasterizer<'a> {
    stamp: &'a DiscStamp,
    accumulation: DepthAccumulation,
}

impl<'a> StrokeRasterizer<'a> {
    pub fn new(stamp: &'a DiscStamp, accumulation: DepthAccumulation) -> Self {
        Self {
            stamp,
            accumulation,
        }
    }

    /// Rasterizes every consecutive pair of `points` (field space) into `raster`.
    ///
    /// Fewer than two points is a no-op. A cell shared by the end of one segment
    /// and the start of the next is stamped once.
    pub fn rasterize_stroke(&self, raster: &mut FieldRaster, points: &[Vec2]) -> StrokeReport {
        self.rasterize_continued(raster, points, &mut None)
    }

    /// Like [`Self::rasterize_stroke`], but continues a stroke whose previous
    /// walk ended on `last`. That cell is not stamped again, and `last` is left
    /// on the final cell walked so the next call can pick up from it.
    pub fn rasterize_continued(
        &self,
        raster: &mut FieldRaster,
        points: &[Vec2],
        last: &mut Option<IVec2>,
    ) -> StrokeReport {
        let mut report = StrokeReport::default();
        for pair in points.windows(2) {
            self.walk_segment(raster, pair[0], pair[1], last, &mut report);
        }
        report
    }

    /// Rasterizes a single segment `a → b` (field space) into `raster`.
    pub fn rasterize_segment(&self, raster: &mut FieldRaster, a: Vec2, b: Vec2) -> StrokeReport {
        let mut report = StrokeReport::default();
        self.walk_segment(raster, a, b, &mut None, &mut report);
        report
    }

    /// Applies one disc centered on `center` (cell coordinates).
    pub fn stamp(&self, raster: &mut FieldRaster, center: IVec2) -> StrokeReport {
        let mut report = StrokeReport::default();
        self.stamp_into(raster, center, &mut report);
        report
    }

    fn walk_segment(
        &self,
        raster: &mut FieldRaster,
        a: Vec2,
        b: Vec2,
        last: &mut Option<IVec2>,
        report: &mut StrokeReport,
    ) {
        if !a.is_finite() || !b.is_finite() {
            warn!("Skipping stroke segment with non-finite endpoint ({a} -> {b}).");
            report.skipped_segments += 1;
            *last = None;
            return;
        }

        // Cell space in f64: `p * N` overflows f32 for coordinates near f32::MAX.
        let n = raster.grid().resolution as f64;
        let margin = self.stamp.radius() as i32 + 1;
        let lo = IVec2::splat(-margin);
        let hi = IVec2::splat(n as i32 + margin);

        let Some((ca, cb)) = clip_segment(
            a.as_dvec2() * n,
            b.as_dvec2() * n,
            lo.as_dvec2(),
            hi.as_dvec2(),
        ) else {
            report.skipped_segments += 1;
            *last = None;
            return;
        };

        report.segments += 1;
        let from = ca.floor().as_ivec2().clamp(lo, hi);
        let to = cb.floor().as_ivec2().clamp(lo, hi);
        for cell in BresenhamLine::new(from, to) {
            if *last == Some(cell) {
                continue;
            }
            self.stamp_into(raster, cell, report);
            *last = Some(cell);
        }
    }

    fn stamp_into(&self, raster: &mut FieldRaster, center: IVec2, report: &mut StrokeReport) {
        report.stamps += 1;
        let grid = raster.grid();
        for tap in self.stamp.taps() {
            let cell = center + tap.offset;
            let Some(idx) = grid.index(cell) else {
                continue;
            };
            let candidate = self.accumulation.candidate(raster.data[idx], tap.reduction);
            if raster.lower(idx, candidate) {
                report.cells_lowered += 1;
                region::include_cell(&mut report.region, cell);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::grid::FieldGrid;

    fn flat(n: usize) -> FieldRaster {
        FieldRaster::new(FieldGrid::new(n), 1.0)
    }

    #[test]
    fn single_stamp_reaches_max_depth_at_center() {
        let stamp = DiscStamp::new(3, 0.7);
        let rasterizer = StrokeRasterizer::new(&stamp, DepthAccumulation::Absolute);
        let mut raster = flat(16);
        let report = rasterizer.stamp(&mut raster, IVec2::new(8, 8));

        assert_eq!(report.stamps, 1);
        let center = raster.get(IVec2::new(8, 8)).expect("in grid");
        assert!((center - 0.3).abs() < 1e-6);
        assert_eq!(raster.get(IVec2::new(11, 8)), Some(1.0));
        assert_eq!(raster.get(IVec2::new(8, 5)), Some(1.0));
        let rect = report.region.expect("cells changed");
        assert_eq!(rect.min, IVec2::new(6, 6));
        assert_eq!(rect.max, IVec2::new(10, 10));
    }

    #[test]
    fn stamps_near_edges_drop_outside_cells() {
        let stamp = DiscStamp::new(2, 0.7);
        let rasterizer = StrokeRasterizer::new(&stamp, DepthAccumulation::Absolute);
        let mut raster = flat(8);
        let report = rasterizer.stamp(&mut raster, IVec2::new(0, 0));
        // center, two axis neighbours, one diagonal
        assert_eq!(report.cells_lowered, 4);
        assert!(raster.data.iter().all(|v| (0.0..=1.0).contains(v)));
    }

    #[test]
    fn zero_length_segment_stamps_once() {
        let stamp = DiscStamp::new(2, 0.7);
        let rasterizer = StrokeRasterizer::new(&stamp, DepthAccumulation::Absolute);
        let mut raster = flat(32);
        let p = Vec2::new(0.5, 0.5);
        let report = rasterizer.rasterize_segment(&mut raster, p, p);
        assert_eq!(report.segments, 1);
        assert_eq!(report.stamps, 1);
    }

    #[test]
    fn shared_joints_are_stamped_once() {
        let stamp = DiscStamp::new(1, 0.7);
        let rasterizer = StrokeRasterizer::new(&stamp, DepthAccumulation::Absolute);
        let mut raster = flat(16);
        let points = [
            Vec2::new(2.5 / 16.0, 2.5 / 16.0),
            Vec2::new(6.5 / 16.0, 2.5 / 16.0),
            Vec2::new(6.5 / 16.0, 9.5 / 16.0),
        ];
        let report = rasterizer.rasterize_stroke(&mut raster, &points);
        assert_eq!(report.segments, 2);
        // 5 cells on the first leg, 8 on the second, joint shared
        assert_eq!(report.stamps, 12);
    }

    #[test]
    fn off_grid_and_non_finite_segments_are_skipped() {
        let stamp = DiscStamp::new(2, 0.7);
        let rasterizer = StrokeRasterizer::new(&stamp, DepthAccumulation::Absolute);
        let mut raster = flat(32);
        let points = [
            Vec2::new(5.0, 5.0),
            Vec2::new(9.0, 5.0),
            Vec2::new(f32::NAN, 0.5),
            Vec2::new(0.5, 0.5),
        ];
        let report = rasterizer.rasterize_stroke(&mut raster, &points);
        assert_eq!(report.segments, 0);
        assert_eq!(report.skipped_segments, 3);
        assert!(report.is_unchanged());
        assert!(raster.data.iter().all(|v| *v == 1.0));
    }

    #[test]
    fn extreme_finite_coordinates_are_clipped() {
        let stamp = DiscStamp::new(1, 0.7);
        let rasterizer = StrokeRasterizer::new(&stamp, DepthAccumulation::Absolute);
        let mut raster = flat(16);
        let report = rasterizer.rasterize_segment(
            &mut raster,
            Vec2::new(3.0e38, 0.5),
            Vec2::new(0.5, 0.5),
        );
        assert_eq!(report.segments, 1);
        assert_eq!(report.skipped_segments, 0);
        // From the clip edge at x = 16 + 2 back to the endpoint cell x = 8.
        assert_eq!(report.stamps, 11);
        for ix in 8..16 {
            let v = raster.get(IVec2::new(ix, 8)).expect("in grid");
            assert!((v - 0.3).abs() < 1e-6, "column {ix} not lowered");
        }
        assert_eq!(raster.get(IVec2::new(6, 8)), Some(1.0));

        let mut raster = flat(16);
        let report = rasterizer.rasterize_segment(
            &mut raster,
            Vec2::new(-f32::MAX, -f32::MAX),
            Vec2::new(f32::MAX, f32::MAX),
        );
        assert_eq!(report.segments, 1);
        // The walk never leaves the clip box of side 16 + 2 * 2.
        assert!(report.stamps <= 16 + 2 * 2 + 1);
        assert!(!report.is_unchanged());
    }

    #[test]
    fn continued_walk_skips_the_carried_joint() {
        let stamp = DiscStamp::new(1, 0.7);
        let rasterizer = StrokeRasterizer::new(&stamp, DepthAccumulation::Compounding);
        let points = [
            Vec2::new(2.5 / 16.0, 2.5 / 16.0),
            Vec2::new(6.5 / 16.0, 2.5 / 16.0),
            Vec2::new(6.5 / 16.0, 9.5 / 16.0),
        ];

        let mut whole = flat(16);
        let expected = rasterizer.rasterize_stroke(&mut whole, &points);

        let mut pieces = flat(16);
        let mut last = None;
        let first = rasterizer.rasterize_continued(&mut pieces, &points[..2], &mut last);
        assert_eq!(last, Some(IVec2::new(6, 2)));
        let second = rasterizer.rasterize_continued(&mut pieces, &points[1..], &mut last);
        assert_eq!(first.stamps + second.stamps, expected.stamps);
        assert_eq!(pieces.data, whole.data);
    }

    #[test]
    fn partly_off_grid_segment_keeps_inside_cells() {
        let stamp = DiscStamp::new(1, 0.7);
        let rasterizer = StrokeRasterizer::new(&stamp, DepthAccumulation::Absolute);
        let mut raster = flat(16);
        let report = rasterizer.rasterize_segment(
            &mut raster,
            Vec2::new(-3.0, 0.5),
            Vec2::new(0.5, 0.5),
        );
        assert_eq!(report.segments, 1);
        for ix in 0..=8 {
            let v = raster.get(IVec2::new(ix, 8)).expect("in grid");
            assert!((v - 0.3).abs() < 1e-6, "column {ix} not lowered");
        }
        assert_eq!(raster.get(IVec2::new(10, 8)), Some(1.0));
    }

    #[test]
    fn absolute_accumulation_is_idempotent_per_stroke() {
        let stamp = DiscStamp::new(3, 0.7);
        let rasterizer = StrokeRasterizer::new(&stamp, DepthAccumulation::Absolute);
        let mut raster = flat(64);
        let points = [Vec2::new(0.1, 0.2), Vec2::new(0.8, 0.7)];
        rasterizer.rasterize_stroke(&mut raster, &points);
        let once = raster.data.clone();
        let again = rasterizer.rasterize_stroke(&mut raster, &points);
        assert!(again.is_unchanged());
        assert_eq!(raster.data, once);
        let floor = once.iter().copied().fold(f32::INFINITY, f32::min);
        assert!(floor >= 0.3 - 1e-6);
    }

    #[test]
    fn compounding_accumulation_deepens_on_repeat() {
        let stamp = DiscStamp::new(3, 0.7);
        let rasterizer = StrokeRasterizer::new(&stamp, DepthAccumulation::Compounding);
        let mut raster = flat(64);
        let points = [Vec2::new(0.1, 0.5), Vec2::new(0.9, 0.5)];
        rasterizer.rasterize_stroke(&mut raster, &points);
        let center = IVec2::new(32, 32);
        let first = raster.get(center).expect("in grid");
        assert!(first < 0.3);

        let again = rasterizer.rasterize_stroke(&mut raster, &points);
        assert!(!again.is_unchanged());
        let second = raster.get(center).expect("in grid");
        assert!(second < first);
        assert!(second >= 0.0);
    }

    #[test]
    fn report_merge_accumulates() {
        let mut a = StrokeReport {
            segments: 1,
            stamps: 3,
            cells_lowered: 5,
            region: Some(CellRect::from_cell(IVec2::new(1, 1))),
            ..Default::default()
        };
        let b = StrokeReport {
            segments: 2,
            skipped_segments: 1,
            stamps: 4,
            cells_lowered: 0,
            region: None,
        };
        a.merge(&b);
        assert_eq!(
            (a.segments, a.skipped_segments, a.stamps, a.cells_lowered),
            (3, 1, 7, 5)
        );
        assert_eq!(a.region, Some(CellRect::from_cell(IVec2::new(1, 1))));
    }
}
