// DOM identifiers and overlay styling used by the web frontend.

// Element ids
pub const CANVAS_ID: &str = "app-canvas";
pub const WORD_CONTAINER_ID: &str = "word-container";
pub const MOBILE_NOTICE_ID: &str = "mobile-notice";

// Overlay words stack above the canvas
pub const OVERLAY_LABEL_Z_INDEX: u32 = 100;

// Full-window layers
pub const CANVAS_STYLE: &str =
    "position:fixed;top:0;left:0;width:100vw;height:100vh;display:block;touch-action:none;";
pub const WORD_CONTAINER_STYLE: &str =
    "position:absolute;top:0;left:0;width:100%;height:100%;overflow:hidden;pointer-events:none;";

pub const MOBILE_NOTICE_STYLE: &str = "position:fixed;top:5%;left:5%;width:80%;height:80%;\
background-color:rgba(0,0,0,0.8);color:white;display:flex;align-items:center;\
justify-content:center;z-index:1000;padding:20px;text-align:center;font-family:Alata;";

// Text colour for both label layers
pub const LABEL_COLOR: &str = "black";

/// Inline style for an overlay word centred on `(x, y)` in CSS pixels.
pub fn overlay_label_style(x: f32, y: f32, font_family: &str, font_px: f32) -> String {
    format!(
        "position:absolute;left:{x}px;top:{y}px;transform:translate(-50%,-50%);\
font-family:{font_family};font-size:{font_px}px;font-weight:normal;color:{LABEL_COLOR};\
pointer-events:none;user-select:none;z-index:{OVERLAY_LABEL_Z_INDEX};white-space:nowrap;"
    )
}
