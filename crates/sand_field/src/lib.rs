#![forbid(unsafe_code)]
//! sand_field: the displacement field engine behind a raked sand garden.
//!
//! Modules:
//! - field: the `N × N` groove-depth grid, its configuration, sampling and dirty tracking
//! - stroke: strokes, brushes, Bresenham walks, disc stamps and the rasterizer
//! - events: observe stroke and reset outcomes
//!
//! The field only stores numbers in `[0, 1]`. Projecting pointer input into field
//! space and shading the surface belong to the host.
pub mod error;
pub mod events;
pub mod field;
pub mod stroke;

/// Convenient re-exports for common types. Import with `use sand_field::prelude::*;`.
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::events::{EventSink, FieldEvent, FnSink, MultiSink, VecSink};
    pub use crate::field::{
        CellRect, DepthAccumulation, DisplacementField, FieldConfig, FieldGrid, FLAT_VALUE,
        MID_SCALE_NEUTRAL,
    };
    pub use crate::stroke::{Brush, Stroke, StrokeRasterizer, StrokeReport, StrokeSession};
}
