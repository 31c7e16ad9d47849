//! Precomputed disc kernels with radial falloff.
use glam::IVec2;

/// One cell of a disc kernel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StampTap {
    /// Offset from the disc center in cells.
    pub offset: IVec2,
    /// Depth reduction at this offset, `(1 - dist / r) * max_depth`.
    pub reduction: f32,
}

/// A filled disc of radius `r` cells with a linear taper from the center to the rim.
///
/// Cells on or beyond the rim carry no reduction and are left out of the kernel.
#[derive(Clone, Debug)]
pub struct DiscStamp {
    radius: i32,
    max_depth: f32,
    taps: Vec<StampTap>,
}

impl DiscStamp {
    pub fn new(radius: i32, max_depth: f32) -> Self {
        let radius = radius.max(1);
        let r = radius as f32;
        let side = (2 * radius + 1) as usize;
        let mut taps = Vec::with_capacity(side * side);

        for dy in -radius..=radius {
            for dx in -radius..=radius {
                let dist = ((dx * dx + dy * dy) as f32).sqrt();
                if dist > r {
                    continue;
                }
                let falloff = 1.0 - dist / r;
                let reduction = falloff * max_depth;
                if reduction > 0.0 {
                    taps.push(StampTap {
                        offset: IVec2::new(dx, dy),
                        reduction,
                    });
                }
            }
        }

        Self {
            radius,
            max_depth,
            taps,
        }
    }

    pub fn radius(&self) -> i32 {
        self.radius
    }

    pub fn max_depth(&self) -> f32 {
        self.max_depth
    }

    pub fn taps(&self) -> &[StampTap] {
        &self.taps
    }

    /// Returns `true` if this kernel was built for the given parameters.
    pub fn matches(&self, radius: i32, max_depth: f32) -> bool {
        self.radius == radius && self.max_depth == max_depth
    }
}
