pub mod config;
pub mod constants;
pub mod curve;
pub mod device;
pub mod error;
pub mod gradient;
pub mod interaction;
pub mod labels;
pub mod palette;
pub mod pipeline;
pub mod raster;
pub mod shading;
pub mod shape;
pub mod state;
pub mod surface;

pub use config::{SketchConfig, TextStyle};
pub use curve::BlobPath;
pub use error::SketchError;
pub use labels::{Label, LabelId, LabelLayer};
pub use pipeline::{FrameSink, SoftwareSink};
pub use shading::{EdgeShader, EdgeUniforms, ReferenceEdgeShader};
pub use state::{PressOutcome, Sketch};
pub use surface::SurfaceSize;

// Edge/composite shader bundled as a string constant
pub static EDGE_WGSL: &str = include_str!("../shaders/edge.wgsl");
