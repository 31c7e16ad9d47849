//! Field configuration and depth constants.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Cell value of undisturbed, flat sand.
pub const FLAT_VALUE: f32 = 1.0;

/// Mid-scale neutral value (`128/255`) for hosts that reserve headroom above the
/// surface for raised features.
pub const MID_SCALE_NEUTRAL: f32 = 128.0 / 255.0;

/// Default grid resolution (cells per side).
pub const DEFAULT_RESOLUTION: usize = 2048;

/// Largest accepted resolution. Keeps `resolution²` well inside `usize` and the
/// cell coordinates inside `i32`.
pub const MAX_RESOLUTION: usize = 1 << 15;

/// Maximum depth reduction a single disc stamp applies at its center.
pub const DEFAULT_MAX_STAMP_DEPTH: f32 = 0.7;

/// How a stamp's reduction is turned into a candidate cell value.
///
/// Both modes combine the candidate with the current value through `min()`, so a
/// stamp never raises a cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DepthAccumulation {
    /// Candidate is `1 - reduction`. Re-applying an identical stroke leaves the
    /// field unchanged and no cell drops below `1 - max_stamp_depth`.
    Absolute,
    /// Candidate is `current * (1 - reduction)`: each stamp removes a share of the
    /// remaining headroom, so overlapping stamps and repeated passes carve deeper
    /// toward `0.0`.
    #[default]
    Compounding,
}

impl DepthAccumulation {
    /// Candidate value for a cell currently at `current` under `reduction`.
    #[inline]
    pub fn candidate(self, current: f32, reduction: f32) -> f32 {
        match self {
            DepthAccumulation::Absolute => 1.0 - reduction,
            DepthAccumulation::Compounding => current * (1.0 - reduction),
        }
    }
}

/// Configuration for a [`crate::field::DisplacementField`].
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FieldConfig {
    /// Number of cells per side (the grid is `resolution × resolution`).
    pub resolution: usize,
    /// Value written to every cell on initialization and reset.
    pub neutral_value: f32,
    /// Reduction applied at the center of a stamp (falloff 1.0).
    pub max_stamp_depth: f32,
    /// Candidate rule used by the stroke rasterizer.
    pub accumulation: DepthAccumulation,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            resolution: DEFAULT_RESOLUTION,
            neutral_value: FLAT_VALUE,
            max_stamp_depth: DEFAULT_MAX_STAMP_DEPTH,
            accumulation: DepthAccumulation::Compounding,
        }
    }
}

impl FieldConfig {
    /// Creates a new [`FieldConfig`] with the given resolution and default depth settings.
    pub fn new(resolution: usize) -> Self {
        Self {
            resolution,
            ..Default::default()
        }
    }

    /// Sets the neutral (initial and reset) value.
    pub fn with_neutral_value(mut self, neutral_value: f32) -> Self {
        self.neutral_value = neutral_value;
        self
    }

    /// Sets the maximum per-stamp depth reduction.
    pub fn with_max_stamp_depth(mut self, max_stamp_depth: f32) -> Self {
        self.max_stamp_depth = max_stamp_depth;
        self
    }

    /// Sets the depth accumulation rule.
    pub fn with_accumulation(mut self, accumulation: DepthAccumulation) -> Self {
        self.accumulation = accumulation;
        self
    }

    /// Number of cells in the grid.
    pub fn cell_count(&self) -> usize {
        self.resolution * self.resolution
    }

    /// Validates the configuration, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if self.resolution == 0 {
            return Err(Error::InvalidConfig("resolution must be > 0".into()));
        }
        if self.resolution > MAX_RESOLUTION {
            return Err(Error::InvalidConfig(format!(
                "resolution must be <= {MAX_RESOLUTION}, got {}",
                self.resolution
            )));
        }
        if !self.neutral_value.is_finite() || !(0.0..=1.0).contains(&self.neutral_value) {
            return Err(Error::InvalidConfig(
                "neutral_value must be in [0, 1]".into(),
            ));
        }
        if !self.max_stamp_depth.is_finite() || !(0.0..=1.0).contains(&self.max_stamp_depth) {
            return Err(Error::InvalidConfig(
                "max_stamp_depth must be in [0, 1]".into(),
            ));
        }
        Ok(())
    }
}
