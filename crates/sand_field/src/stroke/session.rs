//! Live drag tracking in field space.
use glam::{IVec2, Vec2};
use mint::Vector2;

use crate::field::DisplacementField;
use crate::stroke::{Stroke, StrokeReport};

/// Follows one drag: collects its points and rakes each new segment as it arrives.
///
/// Points are already in normalized field space; projecting pointer input onto
/// the surface is the host's job.
#[derive(Clone, Debug)]
pub struct StrokeSession {
    brush_width: f32,
    stroke: Stroke,
    active: bool,
    last_cell: Option<IVec2>,
}

impl StrokeSession {
    pub fn new(brush_width: f32) -> Self {
        Self {
            brush_width,
            stroke: Stroke::new(),
            active: false,
            last_cell: None,
        }
    }

    pub fn brush_width(&self) -> f32 {
        self.brush_width
    }

    pub fn set_brush_width(&mut self, brush_width: f32) {
        self.brush_width = brush_width;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Points collected so far in the current drag.
    pub fn stroke(&self) -> &Stroke {
        &self.stroke
    }

    /// Starts a new drag at `point`, discarding any unfinished one.
    pub fn begin(&mut self, point: impl Into<Vector2<f32>>) {
        self.stroke.clear();
        self.stroke.push(point);
        self.active = true;
        self.last_cell = None;
    }

    /// Adds `point` to the active drag and rakes the segment from the previous point.
    /// Ignored when no drag is active.
    ///
    /// The cell where one segment ends is not stamped again by the next, so a drag
    /// carves exactly what [`DisplacementField::apply_stroke`] carves for the whole
    /// polyline.
    pub fn extend(
        &mut self,
        field: &mut DisplacementField,
        point: impl Into<Vector2<f32>>,
    ) -> StrokeReport {
        if !self.active {
            return StrokeReport::default();
        }
        let point = Vec2::from(point.into());
        let previous = self.stroke.last();
        self.stroke.push(point);
        match previous {
            Some(prev) => {
                field.apply_continued(&[prev, point], self.brush_width, &mut self.last_cell)
            }
            None => StrokeReport::default(),
        }
    }

    /// Ends the drag and returns its points. Segments were already raked by
    /// [`StrokeSession::extend`].
    pub fn finish(&mut self) -> Stroke {
        self.active = false;
        self.last_cell = None;
        std::mem::take(&mut self.stroke)
    }

    /// Ends the drag without returning its points.
    pub fn cancel(&mut self) {
        self.active = false;
        self.last_cell = None;
        self.stroke.clear();
    }
}
