//! Brush sizing.

/// Brush used to rake a stroke into the field.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Brush {
    /// Brush width as a fraction of the field size.
    pub width: f32,
}

impl Brush {
    pub fn new(width: f32) -> Self {
        Self { width }
    }

    /// Returns `true` if the width is finite and positive.
    pub fn is_valid(&self) -> bool {
        self.width.is_finite() && self.width > 0.0
    }

    /// Disc radius in cells on a grid of `resolution` cells per side.
    ///
    /// The radius is `floor(width * resolution / 2)`, raised to at least one cell
    /// and capped at `resolution`. Unusable widths fall back to one cell.
    pub fn radius_cells(&self, resolution: usize) -> i32 {
        if !self.is_valid() {
            return 1;
        }
        let cap = resolution.max(1) as f32;
        let r = (self.width * resolution as f32 / 2.0).floor().min(cap);
        (r as i32).max(1)
    }
}
