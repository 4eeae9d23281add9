//! Application state owned by the frame loop and the pointer handlers.
//!
//! Everything the sketch mutates lives in [`Sketch`]: the control points, the
//! path built from them, the labels, the drag session, the palette and the
//! frame counter. The front-end shares one `Rc<RefCell<Sketch>>` between its
//! animation callback and its event closures; there are no other writers.

use crate::config::SketchConfig;
use crate::constants::INFLUENCE_SPAN;
use crate::curve::BlobPath;
use crate::error::SketchError;
use crate::gradient;
use crate::interaction::{DragSession, Perturbation};
use crate::labels::{Label, LabelId, Labels, WordCycle};
use crate::palette::Palette;
use crate::pipeline::FrameSink;
use crate::shading::{shimmer_time, EdgeUniforms};
use crate::shape::ShapeModel;
use crate::surface::SurfaceSize;
use glam::{Vec2, Vec4};

/// Result of a pointer press, for the front-end to materialise the label.
#[derive(Clone, Debug, PartialEq)]
pub struct PressOutcome {
    pub inside: bool,
    pub label: LabelId,
}

pub struct Sketch {
    config: SketchConfig,
    size: SurfaceSize,
    shape: ShapeModel,
    path: BlobPath,
    palette: Palette,
    background_rows: Vec<Vec4>,
    blob_rows: Vec<Vec4>,
    labels: Labels,
    drag: DragSession,
    frame_count: u64,
}

impl Sketch {
    pub fn new(config: SketchConfig, size: SurfaceSize) -> Result<Self, SketchError> {
        config.validate()?;
        let shape = ShapeModel::new(
            config.point_count,
            config.initial_radius_fraction,
            size.width as f32,
            size.height as f32,
        );
        let path = BlobPath::build(shape.points(), size.center());
        let palette = Palette::new(config.color_start, config.color_end);
        let labels = Labels::new(WordCycle::new(config.words.clone()));
        log::info!(
            "[sketch] created {}x{} with {} points",
            size.width,
            size.height,
            config.point_count
        );
        Ok(Self {
            background_rows: gradient::background_rows(&palette, size.height),
            blob_rows: gradient::blob_rows(&palette, size.height),
            config,
            size,
            shape,
            path,
            palette,
            labels,
            drag: DragSession::Idle,
            frame_count: 0,
        })
    }

    /// Rebuild surface-dependent state for a new size.
    ///
    /// Control points return to the initial radius, the palette and gradient
    /// rows are recreated and an in-flight drag is cancelled. Labels keep their
    /// pixel positions.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), SketchError> {
        let size = SurfaceSize::new(width, height)?;
        if size == self.size {
            return Ok(());
        }
        self.size = size;
        self.shape.reset(width as f32, height as f32);
        self.path = BlobPath::build(self.shape.points(), size.center());
        self.palette = Palette::new(self.config.color_start, self.config.color_end);
        self.background_rows = gradient::background_rows(&self.palette, height);
        self.blob_rows = gradient::blob_rows(&self.palette, height);
        if self.drag.is_active() {
            log::info!("[resize] cancelling active drag");
        }
        self.drag.end();
        log::info!("[resize] {}x{}", width, height);
        Ok(())
    }

    /// Run one frame through `sink` in pipeline order.
    pub fn render_frame<S: FrameSink>(&mut self, sink: &mut S) -> Result<(), S::Error> {
        self.frame_count += 1;
        sink.begin_frame(self.size);
        sink.paint_background(&self.background_rows);
        sink.paint_below_text(&self.labels, &self.config.text_style);
        self.shape.step(self.config.easing);
        self.path = BlobPath::build(self.shape.points(), self.size.center());
        sink.paint_blob(&self.path, &self.blob_rows);
        sink.composite(&self.edge_uniforms())
    }

    pub fn edge_uniforms(&self) -> EdgeUniforms {
        EdgeUniforms::new(
            self.size,
            self.config.edge_width,
            self.config.blur_amount,
            shimmer_time(self.frame_count, self.config.time_per_frame),
        )
    }

    /// Pointer pressed at canvas pixel `(x, y)`.
    ///
    /// Deforms the blob (inward if the press is inside the current path,
    /// outward otherwise), places a label on the matching layer and starts
    /// dragging it.
    pub fn pointer_down(&mut self, x: f32, y: f32) -> PressOutcome {
        let inside = self.path.contains_point(x, y);
        let rel = Vec2::new(x, y) - self.size.center();
        let push = Perturbation::from_relative(rel, INFLUENCE_SPAN);
        if inside {
            push.apply_inward(
                self.shape.points_mut(),
                self.config.inward_damping,
                self.config.inward_floor,
            );
        } else {
            push.apply_outward(
                self.shape.points_mut(),
                self.size.width as f32,
                self.size.height as f32,
                self.config.inset_fraction,
            );
        }
        let id = if inside {
            self.labels.place_above(x, y)
        } else {
            self.labels.place_below(x, y)
        };
        self.drag.begin(id, inside);
        log::debug!(
            "[press] ({:.1},{:.1}) inside={} angle={:.3} dist={:.1}",
            x,
            y,
            inside,
            push.angle,
            push.distance
        );
        PressOutcome { inside, label: id }
    }

    /// Pointer moved while pressed; returns the repositioned label, if any.
    pub fn pointer_move(&mut self, x: f32, y: f32) -> Option<&Label> {
        let id = self.drag.target()?;
        self.labels.move_to(id, x, y)
    }

    /// Restart the word sequence from its first entry.
    pub fn reset_words(&mut self) {
        self.labels.words_mut().reset();
    }

    pub fn pointer_up(&mut self) {
        if self.drag.is_active() {
            log::debug!("[drag] end");
        }
        self.drag.end();
    }

    #[inline]
    pub fn contains_point(&self, x: f32, y: f32) -> bool {
        self.path.contains_point(x, y)
    }

    #[inline]
    pub fn size(&self) -> SurfaceSize {
        self.size
    }

    #[inline]
    pub fn shape(&self) -> &ShapeModel {
        &self.shape
    }

    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    #[inline]
    pub fn labels(&self) -> &Labels {
        &self.labels
    }

    #[inline]
    pub fn drag(&self) -> DragSession {
        self.drag
    }

    #[inline]
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}
