//! Words dropped onto the sketch by clicks.
//!
//! A [`Label`] lives either on the pixel layer under the blob
//! ([`LabelLayer::Embedded`]) or as an overlay node above it
//! ([`LabelLayer::Overlay`]). Placement and dragging are shared; the front-end
//! decides how each layer is drawn or repositioned. Labels are never removed.

use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LabelId(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LabelLayer {
    /// Redrawn every frame onto the below-blob pixel layer.
    Embedded,
    /// A persistent overlay node stacked above the canvas.
    Overlay,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Label {
    pub id: LabelId,
    pub layer: LabelLayer,
    pub word: String,
    /// Centre of the text in canvas pixels.
    pub position: Vec2,
}

/// Deterministic, endlessly repeating word source.
#[derive(Clone, Debug)]
pub struct WordCycle {
    words: Vec<String>,
    counter: usize,
}

impl WordCycle {
    pub fn new(words: Vec<String>) -> Self {
        Self { words, counter: 0 }
    }

    /// Returns `words[counter % len]` and advances. Empty lists yield "".
    pub fn next_word(&mut self) -> String {
        if self.words.is_empty() {
            return String::new();
        }
        let word = self.words[self.counter % self.words.len()].clone();
        self.counter = self.counter.wrapping_add(1);
        word
    }

    pub fn reset(&mut self) {
        self.counter = 0;
    }

    #[inline]
    pub fn counter(&self) -> usize {
        self.counter
    }
}

#[derive(Clone, Debug)]
pub struct Labels {
    words: WordCycle,
    labels: Vec<Label>,
    next_id: u64,
}

impl Labels {
    pub fn new(words: WordCycle) -> Self {
        Self {
            words,
            labels: Vec::new(),
            next_id: 0,
        }
    }

    fn place(&mut self, layer: LabelLayer, x: f32, y: f32) -> LabelId {
        let id = LabelId(self.next_id);
        self.next_id += 1;
        let word = self.words.next_word();
        log::debug!("[labels] place {:?} '{}' at ({:.1},{:.1})", layer, word, x, y);
        self.labels.push(Label {
            id,
            layer,
            word,
            position: Vec2::new(x, y),
        });
        id
    }

    /// Append a word to the pixel layer under the blob.
    pub fn place_below(&mut self, x: f32, y: f32) -> LabelId {
        self.place(LabelLayer::Embedded, x, y)
    }

    /// Create an overlay word centred at `(x, y)`; the id is the handle used to move it.
    pub fn place_above(&mut self, x: f32, y: f32) -> LabelId {
        self.place(LabelLayer::Overlay, x, y)
    }

    pub fn get(&self, id: LabelId) -> Option<&Label> {
        // ids are sequential and labels are never removed, so id == index
        self.labels.get(id.0 as usize)
    }

    pub fn move_to(&mut self, id: LabelId, x: f32, y: f32) -> Option<&Label> {
        let label = self.labels.get_mut(id.0 as usize)?;
        label.position = Vec2::new(x, y);
        Some(label)
    }

    /// Pixel-layer labels in placement order (later ones draw on top).
    pub fn embedded(&self) -> impl Iterator<Item = &Label> {
        self.labels
            .iter()
            .filter(|l| l.layer == LabelLayer::Embedded)
    }

    pub fn overlays(&self) -> impl Iterator<Item = &Label> {
        self.labels.iter().filter(|l| l.layer == LabelLayer::Overlay)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn words_mut(&mut self) -> &mut WordCycle {
        &mut self.words
    }
}
