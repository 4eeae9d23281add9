use thiserror::Error;

/// Errors raised while configuring or resizing a [`crate::Sketch`].
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SketchError {
    #[error("word list must not be empty")]
    EmptyWordList,
    #[error("a closed blob needs at least 3 control points, got {0}")]
    TooFewPoints(usize),
    #[error("easing factor {0} is outside (0, 1]")]
    EasingOutOfRange(f32),
    #[error("inset fraction {0} is outside [0, 0.5)")]
    InsetOutOfRange(f32),
    #[error("surface size {width}x{height} is degenerate")]
    DegenerateSurface { width: u32, height: u32 },
}
