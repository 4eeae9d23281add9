// Host-side tests for HSB palette interpolation and gradient rows.

use blob_core::constants::{COLOR_END_HSB, COLOR_START_HSB};
use blob_core::gradient::{background_rows, blob_rows};
use blob_core::palette::{css_rgb, Hsb, Palette};
use glam::Vec4;

fn palette() -> Palette {
    Palette::new(
        Hsb::from_array(COLOR_START_HSB),
        Hsb::from_array(COLOR_END_HSB),
    )
}

fn approx(a: Vec4, b: Vec4) -> bool {
    (a - b).abs().max_element() < 1e-3
}

#[test]
fn hsb_primary_hues_convert_to_rgb() {
    assert!(approx(Hsb::new(0.0, 100.0, 100.0).to_rgba(), Vec4::new(1.0, 0.0, 0.0, 1.0)));
    assert!(approx(Hsb::new(120.0, 100.0, 100.0).to_rgba(), Vec4::new(0.0, 1.0, 0.0, 1.0)));
    assert!(approx(Hsb::new(240.0, 100.0, 50.0).to_rgba(), Vec4::new(0.0, 0.0, 0.5, 1.0)));
    assert!(approx(Hsb::new(360.0, 0.0, 100.0).to_rgba(), Vec4::ONE));
}

#[test]
fn palette_endpoints_match_configured_colours() {
    let p = palette();
    // (20, 40, 100): warm peach
    assert!(approx(p.at(0.0), Vec4::new(1.0, 0.7333, 0.6, 1.0)));
    // (300, 10, 100): light pink
    assert!(approx(p.at(1.0), Vec4::new(1.0, 0.9, 1.0, 1.0)));
}

#[test]
fn hue_is_lerped_without_wrapping() {
    let mid = Hsb::new(20.0, 40.0, 100.0).lerp(Hsb::new(300.0, 10.0, 100.0), 0.5);
    assert!((mid.hue - 160.0).abs() < 1e-4);
    assert!((mid.saturation - 25.0).abs() < 1e-4);
}

#[test]
fn background_and_blob_rows_are_inverted() {
    let p = palette();
    let h = 200;
    let bg = background_rows(&p, h);
    let blob = blob_rows(&p, h);
    assert_eq!(bg.len(), h as usize);
    assert_eq!(blob.len(), h as usize);
    assert!(approx(bg[0], p.at(0.0)));
    assert!(approx(blob[0], p.at(1.0)));
    // row y in one is row (h - y) in the other
    for y in 1..h as usize {
        assert!(approx(bg[y], blob[h as usize - y]), "row {y}");
    }
}

#[test]
fn css_rgb_formats_opaque_and_translucent() {
    assert_eq!(css_rgb(Vec4::new(1.0, 0.5, 0.0, 1.0)), "rgb(255,128,0)");
    assert_eq!(css_rgb(Vec4::new(0.0, 0.0, 0.0, 0.5)), "rgba(0,0,0,0.500)");
}
