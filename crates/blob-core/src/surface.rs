use crate::error::SketchError;
use glam::Vec2;

/// Drawing surface size in canvas pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
}

impl SurfaceSize {
    pub fn new(width: u32, height: u32) -> Result<Self, SketchError> {
        if width == 0 || height == 0 {
            return Err(SketchError::DegenerateSurface { width, height });
        }
        Ok(Self { width, height })
    }

    /// Origin of shape-centred coordinates, in canvas pixels.
    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width as f32 / 2.0, self.height as f32 / 2.0)
    }
}
