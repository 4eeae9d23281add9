// Host-side tests for front-end constants and styles.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
fn element_ids_are_distinct_and_non_empty() {
    let ids = [CANVAS_ID, WORD_CONTAINER_ID, MOBILE_NOTICE_ID];
    for (i, a) in ids.iter().enumerate() {
        assert!(!a.is_empty());
        for b in &ids[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn overlay_label_style_centres_on_position() {
    let style = overlay_label_style(120.5, 40.0, "Alata", 18.0);
    assert!(style.contains("position:absolute;"));
    assert!(style.contains("left:120.5px;"));
    assert!(style.contains("top:40px;"));
    assert!(style.contains("transform:translate(-50%,-50%);"));
    assert!(style.contains("font-family:Alata;"));
    assert!(style.contains("font-size:18px;"));
    assert!(style.contains("font-weight:normal;"));
    assert!(style.contains("color:black;"));
}

#[test]
fn overlay_labels_ignore_the_pointer() {
    let style = overlay_label_style(0.0, 0.0, "Alata", 18.0);
    assert!(style.contains("pointer-events:none;"));
    assert!(style.contains("user-select:none;"));
    assert!(style.contains(&format!("z-index:{};", OVERLAY_LABEL_Z_INDEX)));
    assert_eq!(OVERLAY_LABEL_Z_INDEX, 100);
}

#[test]
fn word_container_does_not_capture_input() {
    assert!(WORD_CONTAINER_STYLE.contains("pointer-events:none"));
    assert!(WORD_CONTAINER_STYLE.contains("overflow:hidden"));
    assert!(CANVAS_STYLE.contains("touch-action:none"));
}

#[test]
fn mobile_notice_sits_above_overlay_words() {
    let z: u32 = MOBILE_NOTICE_STYLE
        .split(';')
        .find_map(|decl| decl.strip_prefix("z-index:"))
        .and_then(|v| v.parse().ok())
        .unwrap();
    assert!(z > OVERLAY_LABEL_Z_INDEX);
}
