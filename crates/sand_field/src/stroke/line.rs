//! Integer line stepping and segment clipping.
//!
//! [`BresenhamLine`] walks every cell of an 8-connected line between two cells
//! using only integer arithmetic. [`clip_segment`] trims a segment to an
//! axis-aligned box before the walk so far off-grid input stays cheap and the
//! walk's integer arithmetic stays small. Clipping runs in `f64` so any finite
//! `f32` point scaled by the grid resolution stays finite.
use glam::{DVec2, IVec2};

/// Iterator over the cells of a Bresenham line, both endpoints included.
#[derive(Clone, Debug)]
pub struct BresenhamLine {
    cur: IVec2,
    end: IVec2,
    dx: i32,
    dy: i32,
    step: IVec2,
    err: i32,
    done: bool,
}

impl BresenhamLine {
    pub fn new(from: IVec2, to: IVec2) -> Self {
        let dx = (to.x - from.x).abs();
        let dy = -(to.y - from.y).abs();
        Self {
            cur: from,
            end: to,
            dx,
            dy,
            step: IVec2::new((to.x - from.x).signum(), (to.y - from.y).signum()),
            err: dx + dy,
            done: false,
        }
    }

    fn remaining(&self) -> usize {
        if self.done {
            return 0;
        }
        let d = (self.end - self.cur).abs();
        d.x.max(d.y) as usize + 1
    }
}

impl Iterator for BresenhamLine {
    type Item = IVec2;

    fn next(&mut self) -> Option<IVec2> {
        if self.done {
            return None;
        }
        let out = self.cur;
        if self.cur == self.end {
            self.done = true;
        } else {
            let e2 = 2 * self.err;
            if e2 >= self.dy {
                self.err += self.dy;
                self.cur.x += self.step.x;
            }
            if e2 <= self.dx {
                self.err += self.dx;
                self.cur.y += self.step.y;
            }
        }
        Some(out)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining();
        (n, Some(n))
    }
}

impl ExactSizeIterator for BresenhamLine {}

const LEFT: u8 = 1;
const RIGHT: u8 = 2;
const BOTTOM: u8 = 4;
const TOP: u8 = 8;

fn outcode(p: DVec2, min: DVec2, max: DVec2) -> u8 {
    let mut code = 0;
    if p.x < min.x {
        code |= LEFT;
    } else if p.x > max.x {
        code |= RIGHT;
    }
    if p.y < min.y {
        code |= BOTTOM;
    } else if p.y > max.y {
        code |= TOP;
    }
    code
}

/// Clips the segment `a → b` to the box `min..=max` (Cohen–Sutherland).
///
/// Returns `None` if no part of the segment lies inside the box or an endpoint is
/// not finite. Endpoints already inside are returned unchanged; clipped endpoints
/// land exactly on the box edge they cross, however far away they started.
pub fn clip_segment(a: DVec2, b: DVec2, min: DVec2, max: DVec2) -> Option<(DVec2, DVec2)> {
    if !a.is_finite() || !b.is_finite() {
        return None;
    }

    let (mut a, mut b) = (a, b);
    let mut code_a = outcode(a, min, max);
    let mut code_b = outcode(b, min, max);

    // Each pass pins one coordinate to an edge; rounding can add a pass or two.
    for _ in 0..8 {
        if code_a | code_b == 0 {
            return Some((a, b));
        }
        if code_a & code_b != 0 {
            return None;
        }

        let code = if code_a != 0 { code_a } else { code_b };
        let d = b - a;
        let p = if code & TOP != 0 {
            DVec2::new(a.x + d.x * (max.y - a.y) / d.y, max.y)
        } else if code & BOTTOM != 0 {
            DVec2::new(a.x + d.x * (min.y - a.y) / d.y, min.y)
        } else if code & RIGHT != 0 {
            DVec2::new(max.x, a.y + d.y * (max.x - a.x) / d.x)
        } else {
            DVec2::new(min.x, a.y + d.y * (min.x - a.x) / d.x)
        };

        if code == code_a {
            a = p;
            code_a = outcode(a, min, max);
        } else {
            b = p;
            code_b = outcode(b, min, max);
        }
    }

    if code_a & code_b != 0 {
        return None;
    }
    Some((a.clamp(min, max), b.clamp(min, max)))
}
