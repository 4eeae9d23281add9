// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use glam::Vec2;
use input::*;

#[test]
fn client_position_is_offset_by_canvas_rect() {
    let p = client_to_canvas_px(
        Vec2::new(150.0, 80.0),
        Vec2::new(50.0, 30.0),
        Vec2::new(400.0, 300.0),
        Vec2::new(400.0, 300.0),
    );
    assert_eq!(p, Vec2::new(100.0, 50.0));
}

#[test]
fn client_position_scales_to_backing_size() {
    // CSS rect half the backing store size
    let p = client_to_canvas_px(
        Vec2::new(100.0, 50.0),
        Vec2::ZERO,
        Vec2::new(200.0, 100.0),
        Vec2::new(400.0, 200.0),
    );
    assert_eq!(p, Vec2::new(200.0, 100.0));
}

#[test]
fn collapsed_rect_leaves_position_unscaled() {
    let p = client_to_canvas_px(
        Vec2::new(10.0, 20.0),
        Vec2::new(5.0, 5.0),
        Vec2::ZERO,
        Vec2::new(400.0, 300.0),
    );
    assert_eq!(p, Vec2::new(5.0, 15.0));
}

#[test]
fn positions_outside_the_canvas_are_not_clamped() {
    let p = client_to_canvas_px(
        Vec2::new(-20.0, 500.0),
        Vec2::ZERO,
        Vec2::new(400.0, 300.0),
        Vec2::new(400.0, 300.0),
    );
    assert_eq!(p, Vec2::new(-20.0, 500.0));
}
