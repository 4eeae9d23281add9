use crate::constants::overlay_label_style;
use blob_core::{Label, LabelId, TextStyle};
use fnv::FnvHashMap;
use wasm_bindgen::JsCast;
use web_sys as web;

/// DOM nodes for overlay labels, keyed by the label they mirror.
///
/// Nodes are created once and only ever repositioned; they are never removed.
pub struct OverlayLabels {
    document: web::Document,
    container: web::Element,
    style: TextStyle,
    nodes: FnvHashMap<LabelId, web::HtmlElement>,
}

impl OverlayLabels {
    pub fn new(document: web::Document, container: web::Element, style: TextStyle) -> Self {
        Self {
            document,
            container,
            style,
            nodes: FnvHashMap::default(),
        }
    }

    pub fn place(&mut self, label: &Label) -> anyhow::Result<()> {
        let node: web::HtmlElement = self
            .document
            .create_element("div")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .dyn_into()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        node.set_text_content(Some(&label.word));
        node.set_attribute("style", &self.style_for(label))
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        self.container
            .append_child(&node)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        self.nodes.insert(label.id, node);
        Ok(())
    }

    pub fn move_to(&self, label: &Label) {
        if let Some(node) = self.nodes.get(&label.id) {
            let style = node.style();
            _ = style.set_property("left", &format!("{}px", label.position.x));
            _ = style.set_property("top", &format!("{}px", label.position.y));
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    fn style_for(&self, label: &Label) -> String {
        overlay_label_style(
            label.position.x,
            label.position.y,
            &self.style.family,
            self.style.size_px,
        )
    }
}
