//! Displacement field state: configuration, grid addressing, raster storage and
//! the [`DisplacementField`] that owns them.
pub mod config;
pub mod displacement;
pub mod grid;
pub mod raster;
pub mod region;

pub use config::{
    DepthAccumulation, FieldConfig, DEFAULT_MAX_STAMP_DEPTH, DEFAULT_RESOLUTION, FLAT_VALUE,
    MAX_RESOLUTION, MID_SCALE_NEUTRAL,
};
pub use displacement::DisplacementField;
pub use grid::FieldGrid;
pub use raster::FieldRaster;
pub use region::CellRect;
