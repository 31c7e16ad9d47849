//! Axis-aligned cell rectangles used for dirty-region tracking.
use glam::IVec2;

/// Inclusive rectangle of cells (`min..=max` on both axes).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CellRect {
    pub min: IVec2,
    pub max: IVec2,
}

impl CellRect {
    /// Rectangle covering a single cell.
    pub fn from_cell(cell: IVec2) -> Self {
        Self {
            min: cell,
            max: cell,
        }
    }

    /// Rectangle covering a whole `resolution × resolution` grid.
    pub fn full(resolution: usize) -> Self {
        let max = resolution.saturating_sub(1) as i32;
        Self {
            min: IVec2::ZERO,
            max: IVec2::splat(max),
        }
    }

    /// Grows the rectangle to include `cell`.
    #[inline]
    pub fn include(&mut self, cell: IVec2) {
        self.min = self.min.min(cell);
        self.max = self.max.max(cell);
    }

    /// Smallest rectangle covering both inputs.
    pub fn union(self, other: CellRect) -> CellRect {
        CellRect {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    pub fn width(&self) -> usize {
        (self.max.x - self.min.x + 1) as usize
    }

    pub fn height(&self) -> usize {
        (self.max.y - self.min.y + 1) as usize
    }

    pub fn area(&self) -> usize {
        self.width() * self.height()
    }

    pub fn contains(&self, cell: IVec2) -> bool {
        cell.cmpge(self.min).all() && cell.cmple(self.max).all()
    }
}

/// Grows an optional rectangle to include `cell`.
#[inline]
pub(crate) fn include_cell(rect: &mut Option<CellRect>, cell: IVec2) {
    match rect {
        Some(r) => r.include(cell),
        None => *rect = Some(CellRect::from_cell(cell)),
    }
}

/// Merges two optional rectangles.
pub(crate) fn merge(a: Option<CellRect>, b: Option<CellRect>) -> Option<CellRect> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.union(b)),
        (a, None) => a,
        (None, b) => b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn include_grows_bounds() {
        let mut rect = CellRect::from_cell(IVec2::new(3, 3));
        rect.include(IVec2::new(1, 5));
        assert_eq!(rect.min, IVec2::new(1, 3));
        assert_eq!(rect.max, IVec2::new(3, 5));
        assert_eq!((rect.width(), rect.height(), rect.area()), (3, 3, 9));
        assert!(rect.contains(IVec2::new(2, 4)));
        assert!(!rect.contains(IVec2::new(0, 4)));
    }

    #[test]
    fn full_covers_grid() {
        let rect = CellRect::full(16);
        assert_eq!(rect.area(), 256);
    }

    #[test]
    fn merge_handles_missing_sides() {
        let a = Some(CellRect::from_cell(IVec2::new(0, 0)));
        let b = Some(CellRect::from_cell(IVec2::new(4, 2)));
        assert_eq!(merge(a, None), a);
        assert_eq!(merge(None, b), b);
        assert_eq!(merge(a, b).map(|r| r.area()), Some(15));

        let mut none = None;
        include_cell(&mut none, IVec2::new(7, 7));
        assert_eq!(none, Some(CellRect::from_cell(IVec2::new(7, 7))));
    }
}
