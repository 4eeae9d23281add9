use crate::palette::Palette;
use glam::Vec4;

/// Which way a vertical gradient runs relative to the palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GradientDirection {
    /// `start` at the top row, `end` at the bottom (the background).
    Downward,
    /// `end` at the top row, `start` at the bottom (the blob interior).
    Inverted,
}

/// One colour per 1px row, top to bottom.
///
/// Row `y` samples the palette at `y / height`, so the final row stops one
/// step short of the far colour.
pub fn rows(palette: &Palette, height: u32, direction: GradientDirection) -> Vec<Vec4> {
    let h = height.max(1) as f32;
    (0..height)
        .map(|y| {
            let inter = y as f32 / h;
            match direction {
                GradientDirection::Downward => palette.at(inter),
                GradientDirection::Inverted => palette.at(1.0 - inter),
            }
        })
        .collect()
}

/// Full-frame background: `height` horizontal lines, no inversion.
#[inline]
pub fn background_rows(palette: &Palette, height: u32) -> Vec<Vec4> {
    rows(palette, height, GradientDirection::Downward)
}

/// Scanline colours painted inside the blob clip.
#[inline]
pub fn blob_rows(palette: &Palette, height: u32) -> Vec<Vec4> {
    rows(palette, height, GradientDirection::Inverted)
}
