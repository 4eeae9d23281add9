//! Two-colour palette shared by the background and blob renderers.
//!
//! Colours are specified in HSB with hue in degrees (0..360) and saturation
//! and brightness in 0..100. Interpolation happens component-wise in HSB and
//! the hue is lerped straight, without taking the short way around the wheel,
//! so a warm-to-pink gradient passes through the intermediate hues.

use glam::Vec4;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsb {
    pub hue: f32,
    pub saturation: f32,
    pub brightness: f32,
}

impl Hsb {
    pub const fn new(hue: f32, saturation: f32, brightness: f32) -> Self {
        Self {
            hue,
            saturation,
            brightness,
        }
    }

    pub const fn from_array(v: [f32; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }

    pub fn lerp(self, other: Hsb, t: f32) -> Hsb {
        Hsb {
            hue: self.hue + (other.hue - self.hue) * t,
            saturation: self.saturation + (other.saturation - self.saturation) * t,
            brightness: self.brightness + (other.brightness - self.brightness) * t,
        }
    }

    /// Opaque linear-in-bytes RGBA in 0..1.
    pub fn to_rgba(self) -> Vec4 {
        let h = self.hue.rem_euclid(360.0) / 60.0;
        let s = (self.saturation / 100.0).clamp(0.0, 1.0);
        let v = (self.brightness / 100.0).clamp(0.0, 1.0);
        let sector = h.floor();
        let f = h - sector;
        let p = v * (1.0 - s);
        let q = v * (1.0 - s * f);
        let t = v * (1.0 - s * (1.0 - f));
        let (r, g, b) = match sector as u32 {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        };
        Vec4::new(r, g, b, 1.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub start: Hsb,
    pub end: Hsb,
}

impl Palette {
    pub fn new(start: Hsb, end: Hsb) -> Self {
        Self { start, end }
    }

    /// Colour at fraction `t` from `start` (0) to `end` (1).
    pub fn at(&self, t: f32) -> Vec4 {
        self.start.lerp(self.end, t.clamp(0.0, 1.0)).to_rgba()
    }
}

/// Format an RGBA colour for Canvas2D `fillStyle`.
pub fn css_rgb(c: Vec4) -> String {
    let to_byte = |x: f32| (x.clamp(0.0, 1.0) * 255.0).round() as u8;
    if c.w >= 1.0 {
        format!("rgb({},{},{})", to_byte(c.x), to_byte(c.y), to_byte(c.z))
    } else {
        format!(
            "rgba({},{},{},{:.3})",
            to_byte(c.x),
            to_byte(c.y),
            to_byte(c.z),
            c.w.clamp(0.0, 1.0)
        )
    }
}
