// Shared tuning constants for the sketch.

// Words placed by clicks, cycled in order
pub const WORDS: [&str; 4] = ["every", "conversation", "changed", "me"];

// Shape model
pub const POINT_COUNT: usize = 12;
pub const INITIAL_RADIUS_FRACTION: f32 = 0.1; // of min(width, height)
pub const EASING: f32 = 0.05; // per-frame low-pass factor toward target radius

// Screen-edge clamp for outward growth
pub const INSET_FRACTION: f32 = 0.025; // of each screen dimension, per edge
pub const EDGE_SAFETY_MARGIN_PX: f32 = 5.0;

// Click response
pub const INWARD_DAMPING: f32 = -0.3; // inside clicks pull in, weakly
pub const INWARD_FLOOR: f32 = 0.7; // fraction of initial radius
pub const INFLUENCE_SPAN: f32 = std::f32::consts::FRAC_PI_2; // zero influence beyond 90°

// Curve
pub const BEZIER_TENSION: f32 = 0.2; // control offset, fraction of neighbour chord
pub const FLATTEN_STEPS: usize = 16; // line segments per cubic for hit testing

// Edge shader uniforms
pub const EDGE_WIDTH: f32 = 0.60;
pub const BLUR_AMOUNT: f32 = 2.0;
pub const TIME_PER_FRAME: f32 = 0.01;

// Palette (HSB: hue 0..360, saturation/brightness 0..100)
pub const COLOR_START_HSB: [f32; 3] = [20.0, 40.0, 100.0]; // warm, top
pub const COLOR_END_HSB: [f32; 3] = [300.0, 10.0, 100.0]; // light pink, bottom

// Label text
pub const FONT_FAMILY: &str = "Alata";
pub const FONT_SIZE_PX: f32 = 18.0;
