// Host-side tests for the application state and frame pipeline.

use blob_core::config::TextStyle;
use blob_core::curve::BlobPath;
use blob_core::interaction::DragSession;
use blob_core::labels::{LabelLayer, Labels};
use blob_core::pipeline::{FrameSink, SoftwareSink};
use blob_core::raster::Image;
use blob_core::shading::{EdgeShader, EdgeUniforms};
use blob_core::{Sketch, SketchConfig, SketchError, SurfaceSize};
use glam::Vec4;
use std::cell::Cell;

fn make_sketch(w: u32, h: u32) -> Sketch {
    Sketch::new(SketchConfig::default(), SurfaceSize::new(w, h).unwrap()).unwrap()
}

#[derive(Debug, PartialEq)]
enum Call {
    Begin(u32, u32),
    Background(usize),
    BelowText(usize, String),
    Blob(f32),
    Composite(f32),
}

#[derive(Default)]
struct RecordingSink {
    calls: Vec<Call>,
}

impl FrameSink for RecordingSink {
    type Error = ();

    fn begin_frame(&mut self, size: SurfaceSize) {
        self.calls.push(Call::Begin(size.width, size.height));
    }

    fn paint_background(&mut self, rows: &[Vec4]) {
        self.calls.push(Call::Background(rows.len()));
    }

    fn paint_below_text(&mut self, labels: &Labels, style: &TextStyle) {
        self.calls
            .push(Call::BelowText(labels.embedded().count(), style.css_font()));
    }

    fn paint_blob(&mut self, path: &BlobPath, _rows: &[Vec4]) {
        // distance from canvas centre to the path start, i.e. point 0 radius
        let start = path.start();
        self.calls.push(Call::Blob(start.x - 200.0));
    }

    fn composite(&mut self, uniforms: &EdgeUniforms) -> Result<(), Self::Error> {
        self.calls.push(Call::Composite(uniforms.time));
        Ok(())
    }
}

// Passes the blob layer through untouched and counts invocations
#[derive(Default)]
struct PassThroughShader {
    calls: Cell<usize>,
}

impl EdgeShader for PassThroughShader {
    fn shade(&self, source: &Image, _uniforms: &EdgeUniforms) -> Image {
        self.calls.set(self.calls.get() + 1);
        source.clone()
    }
}

#[test]
fn default_config_is_valid() {
    assert_eq!(SketchConfig::default().validate(), Ok(()));
}

#[test]
fn invalid_config_is_rejected() {
    let mut config = SketchConfig::default();
    config.words.clear();
    assert_eq!(config.validate(), Err(SketchError::EmptyWordList));

    let config = SketchConfig {
        point_count: 2,
        ..SketchConfig::default()
    };
    assert_eq!(config.validate(), Err(SketchError::TooFewPoints(2)));

    let config = SketchConfig {
        easing: 0.0,
        ..SketchConfig::default()
    };
    assert!(matches!(
        config.validate(),
        Err(SketchError::EasingOutOfRange(_))
    ));
}

#[test]
fn zero_sized_surface_is_rejected() {
    assert_eq!(
        SurfaceSize::new(0, 10),
        Err(SketchError::DegenerateSurface {
            width: 0,
            height: 10
        })
    );
    let mut sketch = make_sketch(400, 300);
    assert!(sketch.resize(400, 0).is_err());
    assert_eq!(sketch.size(), SurfaceSize::new(400, 300).unwrap());
}

#[test]
fn frame_runs_stages_in_order() {
    let mut sketch = make_sketch(400, 300);
    // Push point 0 outward so stepping is observable at the blob stage
    sketch.pointer_down(200.0 + 150.0, 150.0);
    sketch.pointer_up();

    let mut sink = RecordingSink::default();
    sketch.render_frame(&mut sink).unwrap();

    assert_eq!(sink.calls.len(), 5);
    assert_eq!(sink.calls[0], Call::Begin(400, 300));
    assert_eq!(sink.calls[1], Call::Background(300));
    assert_eq!(sink.calls[2], Call::BelowText(1, "18px Alata".to_string()));
    match sink.calls[3] {
        // initial 30, target 150: one step of 0.05 gives 36
        Call::Blob(r) => assert!((r - 36.0).abs() < 1e-3, "r={r}"),
        ref other => panic!("expected blob, got {other:?}"),
    }
    match sink.calls[4] {
        Call::Composite(t) => assert!((t - 0.01).abs() < 1e-6),
        ref other => panic!("expected composite, got {other:?}"),
    }
}

#[test]
fn time_uniform_follows_frame_count() {
    let mut sketch = make_sketch(200, 200);
    let mut sink = RecordingSink::default();
    for _ in 0..100 {
        sketch.render_frame(&mut sink).unwrap();
    }
    assert_eq!(sketch.frame_count(), 100);
    assert!((sketch.edge_uniforms().time - 1.0).abs() < 1e-5);
    assert_eq!(sketch.edge_uniforms().edge_width, 0.60);
    assert_eq!(sketch.edge_uniforms().blur_amount, 2.0);
}

#[test]
fn software_sink_composites_layers_with_mock_shader() {
    let size = SurfaceSize::new(80, 60).unwrap();
    let mut sketch = Sketch::new(SketchConfig::default(), size).unwrap();
    let mut sink = SoftwareSink::new(PassThroughShader::default(), size);
    sketch.render_frame(&mut sink).unwrap();

    assert_eq!(sink.shader().calls.get(), 1);
    // Blob layer before shading: filled centre, transparent corner
    assert_eq!(sink.blob_layer().get(40, 30).w, 1.0);
    assert_eq!(sink.blob_layer().get(0, 0), Vec4::ZERO);
    let out = sink.output();
    // Blob centre shows the inverted gradient, the corner the background
    let centre_row = 30;
    let blob_colour = sketch.palette().at(1.0 - centre_row as f32 / 60.0);
    let bg_colour = sketch.palette().at(0.0);
    assert!((out.get(40, centre_row) - blob_colour).abs().max_element() < 1e-4);
    assert!((out.get(0, 0) - bg_colour).abs().max_element() < 1e-4);
    assert_eq!(sink.text_font(), Some("18px Alata"));
}

#[test]
fn software_sink_records_embedded_labels_each_frame() {
    let size = SurfaceSize::new(200, 200).unwrap();
    let mut sketch = Sketch::new(SketchConfig::default(), size).unwrap();
    let mut sink = SoftwareSink::new(PassThroughShader::default(), size);
    sketch.pointer_down(10.0, 10.0);
    sketch.pointer_up();
    sketch.pointer_down(100.0, 100.0); // centre: overlay, not drawn on the layer
    sketch.pointer_up();
    sketch.render_frame(&mut sink).unwrap();
    sketch.render_frame(&mut sink).unwrap();
    assert_eq!(sink.text_anchors().len(), 1);
    assert_eq!(sink.text_anchors()[0].0, "every");
}

#[test]
fn press_outside_places_embedded_label_and_drags_it() {
    let mut sketch = make_sketch(400, 300);
    let outcome = sketch.pointer_down(20.0, 20.0);
    assert!(!outcome.inside);
    let label = sketch.labels().get(outcome.label).cloned().unwrap();
    assert_eq!(label.layer, LabelLayer::Embedded);
    assert_eq!(label.word, "every");
    assert_eq!(
        sketch.drag(),
        DragSession::Dragging {
            target: outcome.label,
            started_on_shape: false
        }
    );

    let moved = sketch.pointer_move(50.0, 60.0).map(|l| l.position);
    assert_eq!(moved, Some(glam::Vec2::new(50.0, 60.0)));

    sketch.pointer_up();
    assert!(sketch.pointer_move(0.0, 0.0).is_none());
    let label = sketch.labels().get(outcome.label).unwrap();
    assert_eq!(label.position, glam::Vec2::new(50.0, 60.0));
}

#[test]
fn press_inside_places_overlay_label_and_shrinks_targets() {
    let mut sketch = make_sketch(400, 300);
    let outcome = sketch.pointer_down(205.0, 150.0);
    assert!(outcome.inside);
    let label = sketch.labels().get(outcome.label).unwrap();
    assert_eq!(label.layer, LabelLayer::Overlay);
    // 30 + 5 * -0.3 = 28.5 (floor 21)
    let p0 = sketch.shape().points()[0];
    assert!((p0.target_radius - 28.5).abs() < 1e-3);
    assert!(sketch
        .shape()
        .points()
        .iter()
        .all(|p| p.target_radius >= 0.7 * p.initial_radius));
}

#[test]
fn pointer_move_without_press_does_nothing() {
    let mut sketch = make_sketch(400, 300);
    assert!(sketch.pointer_move(10.0, 10.0).is_none());
    assert!(sketch.labels().is_empty());
}

#[test]
fn resize_cancels_drag_and_keeps_labels() {
    let mut sketch = make_sketch(400, 300);
    sketch.pointer_down(10.0, 10.0);
    assert!(sketch.drag().is_active());

    sketch.resize(1000, 800).unwrap();
    assert_eq!(sketch.drag(), DragSession::Idle);
    assert_eq!(sketch.labels().len(), 1);
    assert!((sketch.shape().initial_radius() - 80.0).abs() < 1e-3);
    assert!(sketch.contains_point(500.0, 400.0));
    assert!(sketch.pointer_move(1.0, 1.0).is_none());
}

#[test]
fn word_sequence_can_be_restarted() {
    let mut sketch = make_sketch(400, 300);
    sketch.pointer_down(1.0, 1.0);
    sketch.pointer_up();
    sketch.reset_words();
    let outcome = sketch.pointer_down(2.0, 2.0);
    assert_eq!(
        sketch.labels().get(outcome.label).map(|l| l.word.as_str()),
        Some("every")
    );
}
