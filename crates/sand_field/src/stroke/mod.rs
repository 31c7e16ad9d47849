//! Strokes and the rasterizer that carves them into the field.
//!
//! A [`Stroke`] is an ordered polyline in normalized field space. The
//! [`StrokeRasterizer`] turns it into per-cell depth reductions using a
//! [`DiscStamp`] swept along [`BresenhamLine`] walks. [`StrokeSession`] follows a
//! drag as it happens and rakes each new segment immediately.
use glam::Vec2;
use mint::Vector2;

pub mod brush;
pub mod line;
pub mod rasterizer;
pub mod session;
pub mod stamp;

pub use brush::Brush;
pub use line::{clip_segment, BresenhamLine};
pub use rasterizer::{StrokeRasterizer, StrokeReport};
pub use session::StrokeSession;
pub use stamp::{DiscStamp, StampTap};

/// An ordered polyline in normalized `[0,1]×[0,1]` field space.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Stroke {
    points: Vec<Vec2>,
}

impl Stroke {
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Builds a stroke from any point type convertible to [`mint::Vector2`].
    pub fn from_points<I, P>(points: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Vector2<f32>>,
    {
        Self {
            points: points.into_iter().map(|p| Vec2::from(p.into())).collect(),
        }
    }

    pub fn push(&mut self, point: impl Into<Vector2<f32>>) {
        self.points.push(Vec2::from(point.into()));
    }

    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    pub fn last(&self) -> Option<Vec2> {
        self.points.last().copied()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns `true` if the stroke has at least one segment.
    pub fn is_drawable(&self) -> bool {
        self.points.len() >= 2
    }

    /// Consecutive point pairs.
    pub fn segments(&self) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
        self.points.windows(2).map(|w| (w[0], w[1]))
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }
}

impl From<Vec<Vec2>> for Stroke {
    fn from(points: Vec<Vec2>) -> Self {
        Self { points }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_points_accepts_mint_vectors() {
        let stroke = Stroke::from_points([
            Vector2 { x: 0.1f32, y: 0.2 },
            Vector2 { x: 0.3, y: 0.4 },
        ]);
        assert_eq!(stroke.len(), 2);
        assert_eq!(stroke.points()[1], Vec2::new(0.3, 0.4));
    }

    #[test]
    fn drawable_needs_two_points() {
        let mut stroke = Stroke::new();
        assert!(stroke.is_empty());
        stroke.push(Vec2::new(0.5, 0.5));
        assert!(!stroke.is_drawable());
        assert_eq!(stroke.segments().count(), 0);
        stroke.push(Vec2::new(0.6, 0.5));
        assert!(stroke.is_drawable());
        assert_eq!(
            stroke.segments().collect::<Vec<_>>(),
            vec![(Vec2::new(0.5, 0.5), Vec2::new(0.6, 0.5))]
        );
    }
}
