//! Closed cubic Bézier loop through the control points.
//!
//! Each segment runs from point `i` to `i + 1` with Catmull-Rom style tangents:
//! the leaving control is offset by a fraction of `next - prev`, the arriving
//! control by the same fraction of `next_next - current`. The path is built in
//! canvas pixel space (shape-centred points translated by `origin`) and that
//! single value serves both the fill and the hit test, so what the user sees is
//! exactly what the pointer hits.

use crate::constants::{BEZIER_TENSION, FLATTEN_STEPS};
use crate::shape::ControlPoint;
use glam::Vec2;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubicSegment {
    pub ctrl1: Vec2,
    pub ctrl2: Vec2,
    pub end: Vec2,
}

#[derive(Clone, Debug, Default)]
pub struct BlobPath {
    start: Vec2,
    segments: SmallVec<[CubicSegment; 12]>,
    // Flattened outline for point-in-path queries
    outline: Vec<Vec2>,
}

impl BlobPath {
    pub fn build(points: &[ControlPoint], origin: Vec2) -> Self {
        let n = points.len();
        if n == 0 {
            return Self {
                start: origin,
                ..Default::default()
            };
        }
        let at = |i: usize| points[i % n].position + origin;
        let mut segments = SmallVec::with_capacity(n);
        for i in 0..n {
            let prev = at(i + n - 1);
            let current = at(i);
            let next = at(i + 1);
            let next_next = at(i + 2);
            segments.push(CubicSegment {
                ctrl1: current + (next - prev) * BEZIER_TENSION,
                ctrl2: next - (next_next - current) * BEZIER_TENSION,
                end: next,
            });
        }
        let start = at(0);
        let outline = flatten(start, &segments, FLATTEN_STEPS);
        Self {
            start,
            segments,
            outline,
        }
    }

    #[inline]
    pub fn start(&self) -> Vec2 {
        self.start
    }

    #[inline]
    pub fn segments(&self) -> &[CubicSegment] {
        &self.segments
    }

    /// Non-zero winding test, the default fill rule of Canvas2D paths.
    pub fn contains_point(&self, x: f32, y: f32) -> bool {
        winding_number(&self.outline, Vec2::new(x, y)) != 0
    }
}

fn cubic_at(p0: Vec2, seg: &CubicSegment, t: f32) -> Vec2 {
    let u = 1.0 - t;
    p0 * (u * u * u)
        + seg.ctrl1 * (3.0 * u * u * t)
        + seg.ctrl2 * (3.0 * u * t * t)
        + seg.end * (t * t * t)
}

fn flatten(start: Vec2, segments: &[CubicSegment], steps: usize) -> Vec<Vec2> {
    let mut out = Vec::with_capacity(segments.len() * steps + 1);
    out.push(start);
    let mut p0 = start;
    for seg in segments {
        for k in 1..=steps {
            out.push(cubic_at(p0, seg, k as f32 / steps as f32));
        }
        p0 = seg.end;
    }
    out
}

fn winding_number(polygon: &[Vec2], p: Vec2) -> i32 {
    let n = polygon.len();
    if n < 3 {
        return 0;
    }
    let mut wn = 0;
    for i in 0..n {
        let a = polygon[i];
        let b = polygon[(i + 1) % n];
        let side = (b - a).perp_dot(p - a);
        if a.y <= p.y {
            if b.y > p.y && side > 0.0 {
                wn += 1;
            }
        } else if b.y <= p.y && side < 0.0 {
            wn -= 1;
        }
    }
    wn
}
