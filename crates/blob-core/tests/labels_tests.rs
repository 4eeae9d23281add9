// Host-side tests for the word cycle and label collections.

use blob_core::constants::WORDS;
use blob_core::labels::{LabelId, LabelLayer, Labels, WordCycle};
use glam::Vec2;

fn default_words() -> WordCycle {
    WordCycle::new(WORDS.iter().map(|w| w.to_string()).collect())
}

#[test]
fn next_word_cycles_in_order() {
    let mut words = default_words();
    let got: Vec<String> = (0..6).map(|_| words.next_word()).collect();
    assert_eq!(
        got,
        vec!["every", "conversation", "changed", "me", "every", "conversation"]
    );
}

#[test]
fn next_word_returns_to_start_after_multiples_of_len() {
    for k in 1..5 {
        let mut words = default_words();
        let first = words.next_word();
        for _ in 0..(4 * k - 1) {
            words.next_word();
        }
        assert_eq!(words.next_word(), first, "k={k}");
    }
}

#[test]
fn reset_restarts_sequence() {
    let mut words = default_words();
    words.next_word();
    words.next_word();
    words.reset();
    assert_eq!(words.counter(), 0);
    assert_eq!(words.next_word(), "every");
}

#[test]
fn empty_word_list_yields_empty_strings() {
    let mut words = WordCycle::new(Vec::new());
    assert_eq!(words.next_word(), "");
}

#[test]
fn placement_shares_one_word_sequence_across_layers() {
    let mut labels = Labels::new(default_words());
    let a = labels.place_below(10.0, 20.0);
    let b = labels.place_above(30.0, 40.0);
    let c = labels.place_below(50.0, 60.0);

    assert_eq!(labels.len(), 3);
    assert_eq!(labels.get(a).map(|l| l.word.as_str()), Some("every"));
    assert_eq!(labels.get(b).map(|l| l.word.as_str()), Some("conversation"));
    assert_eq!(labels.get(c).map(|l| l.word.as_str()), Some("changed"));

    assert_eq!(labels.get(b).map(|l| l.layer), Some(LabelLayer::Overlay));
    let embedded: Vec<LabelId> = labels.embedded().map(|l| l.id).collect();
    assert_eq!(embedded, vec![a, c]);
    assert_eq!(labels.overlays().count(), 1);
}

#[test]
fn move_to_repositions_only_that_label() {
    let mut labels = Labels::new(default_words());
    let a = labels.place_below(10.0, 20.0);
    let b = labels.place_above(30.0, 40.0);
    let moved = labels.move_to(b, 300.0, 400.0).map(|l| l.position);
    assert_eq!(moved, Some(Vec2::new(300.0, 400.0)));
    assert_eq!(labels.get(a).map(|l| l.position), Some(Vec2::new(10.0, 20.0)));
    assert!(labels.move_to(LabelId(99), 0.0, 0.0).is_none());
}
