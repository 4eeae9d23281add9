//! Ring of control points in polar form, eased toward per-point targets.
//!
//! Angles are fixed at construction and evenly spaced over a full turn; only
//! radii change afterwards. Positions are relative to the shape centre.

use crate::constants::EDGE_SAFETY_MARGIN_PX;
use glam::Vec2;
use smallvec::SmallVec;
use std::f32::consts::TAU;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ControlPoint {
    pub angle: f32,
    pub radius: f32,
    pub target_radius: f32,
    /// Radius at the last reset; inward pushes are floored relative to it.
    pub initial_radius: f32,
    /// `radius` projected along `angle`, refreshed on every step.
    pub position: Vec2,
}

impl ControlPoint {
    fn new(angle: f32, radius: f32) -> Self {
        Self {
            angle,
            radius,
            target_radius: radius,
            initial_radius: radius,
            position: polar(angle, radius),
        }
    }
}

#[inline]
fn polar(angle: f32, radius: f32) -> Vec2 {
    Vec2::new(angle.cos() * radius, angle.sin() * radius)
}

pub type ControlPoints = SmallVec<[ControlPoint; 12]>;

#[derive(Clone, Debug)]
pub struct ShapeModel {
    points: ControlPoints,
    initial_radius: f32,
    point_count: usize,
    radius_fraction: f32,
}

impl ShapeModel {
    pub fn new(point_count: usize, radius_fraction: f32, width: f32, height: f32) -> Self {
        let mut shape = Self {
            points: SmallVec::new(),
            initial_radius: 0.0,
            point_count,
            radius_fraction,
        };
        shape.reset(width, height);
        shape
    }

    /// Rebuild every point at the initial radius for a `width` x `height` surface.
    pub fn reset(&mut self, width: f32, height: f32) {
        self.initial_radius = width.min(height) * self.radius_fraction;
        let n = self.point_count;
        self.points = (0..n)
            .map(|i| ControlPoint::new(i as f32 / n as f32 * TAU, self.initial_radius))
            .collect();
        log::debug!(
            "[shape] reset points={} initial_radius={:.2}",
            n,
            self.initial_radius
        );
    }

    /// Move every radius a fraction `easing` of the way to its target.
    pub fn step(&mut self, easing: f32) {
        for p in self.points.iter_mut() {
            p.radius += (p.target_radius - p.radius) * easing;
            p.position = polar(p.angle, p.radius);
        }
    }

    #[inline]
    pub fn points(&self) -> &[ControlPoint] {
        &self.points
    }

    #[inline]
    pub fn points_mut(&mut self) -> &mut [ControlPoint] {
        &mut self.points
    }

    #[inline]
    pub fn initial_radius(&self) -> f32 {
        self.initial_radius
    }
}

/// Largest radius along `angle` that keeps a point inside the surface
/// inset by `inset_fraction` of each dimension on every edge.
///
/// Axis-aligned directions leave the other axis unconstrained. The result
/// includes a fixed pixel safety margin.
pub fn max_radius_at_angle(angle: f32, width: f32, height: f32, inset_fraction: f32) -> f32 {
    let half_w = width * (1.0 - 2.0 * inset_fraction) / 2.0;
    let half_h = height * (1.0 - 2.0 * inset_fraction) / 2.0;
    let (s, c) = angle.sin_cos();
    let limit_x = if c != 0.0 { half_w / c.abs() } else { f32::INFINITY };
    let limit_y = if s != 0.0 { half_h / s.abs() } else { f32::INFINITY };
    limit_x.min(limit_y) - EDGE_SAFETY_MARGIN_PX
}
