//! Pointer response: radius perturbation and the single-slot drag session.

use crate::labels::LabelId;
use crate::shape::{max_radius_at_angle, ControlPoint};
use glam::Vec2;
use std::f32::consts::TAU;

/// Shortest arc between two angles, in `[0, π]`.
#[inline]
pub fn angular_distance(a: f32, b: f32) -> f32 {
    let diff = (a - b).abs().rem_euclid(TAU);
    diff.min(TAU - diff)
}

/// Linear falloff from 1 at zero distance to 0 at `span` and beyond.
#[inline]
pub fn influence(angular_dist: f32, span: f32) -> f32 {
    1.0 - (angular_dist / span).min(1.0)
}

/// Angle of `rel` measured from +x, normalised to `[0, 2π)`.
#[inline]
pub fn click_angle(rel: Vec2) -> f32 {
    let a = rel.y.atan2(rel.x);
    if a < 0.0 {
        a + TAU
    } else {
        a
    }
}

/// Parameters shared by both click responses.
#[derive(Clone, Copy, Debug)]
pub struct Perturbation {
    pub angle: f32,
    pub distance: f32,
    pub span: f32,
}

impl Perturbation {
    pub fn from_relative(rel: Vec2, span: f32) -> Self {
        Self {
            angle: click_angle(rel),
            distance: rel.length(),
            span,
        }
    }

    #[inline]
    fn influence_on(&self, p: &ControlPoint) -> f32 {
        influence(angular_distance(p.angle, self.angle), self.span)
    }

    /// Damped inward pull for clicks inside the blob.
    ///
    /// Targets never drop below `floor * initial_radius`.
    pub fn apply_inward(&self, points: &mut [ControlPoint], damping: f32, floor: f32) {
        for p in points.iter_mut() {
            let pull = self.distance * self.influence_on(p) * damping;
            p.target_radius = (p.target_radius + pull).max(p.initial_radius * floor);
        }
    }

    /// Outward growth for clicks beyond the boundary.
    ///
    /// Only points whose target lies inside the click distance are touched.
    /// They grow toward the click, capped at [`max_radius_at_angle`] for the
    /// given surface; a target already at or beyond the cap is left alone.
    pub fn apply_outward(
        &self,
        points: &mut [ControlPoint],
        width: f32,
        height: f32,
        inset_fraction: f32,
    ) {
        for p in points.iter_mut() {
            if self.distance <= p.target_radius {
                continue;
            }
            let expansion = self.distance * self.influence_on(p);
            if p.target_radius >= expansion {
                continue;
            }
            let cap = max_radius_at_angle(p.angle, width, height, inset_fraction);
            if cap > p.target_radius {
                p.target_radius = expansion.min(cap);
            }
        }
    }
}

/// At most one drag in flight; it targets the label placed by the press.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DragSession {
    #[default]
    Idle,
    Dragging {
        target: LabelId,
        started_on_shape: bool,
    },
}

impl DragSession {
    #[inline]
    pub fn begin(&mut self, target: LabelId, started_on_shape: bool) {
        *self = DragSession::Dragging {
            target,
            started_on_shape,
        };
    }

    #[inline]
    pub fn end(&mut self) {
        *self = DragSession::Idle;
    }

    #[inline]
    pub fn target(&self) -> Option<LabelId> {
        match self {
            DragSession::Idle => None,
            DragSession::Dragging { target, .. } => Some(*target),
        }
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        matches!(self, DragSession::Dragging { .. })
    }
}
