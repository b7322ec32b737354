use unicode_segmentation::UnicodeSegmentation;

use super::KeyCodec;

/// Units are extended grapheme clusters, so flags, emoji sequences, and base characters with
/// combining marks are never split apart inside an edge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct GraphemeCodec;

impl KeyCodec for GraphemeCodec {
    type Unit = Box<str>;

    fn decompose(&self, text: &str) -> Vec<Box<str>> {
        text.graphemes(true).map(Into::into).collect()
    }

    fn compose(&self, units: &[Box<str>]) -> String {
        units.concat()
    }
}

#[test]
fn umlauts_and_flags() {
    // "o" followed by a combining diaeresis.
    let units = GraphemeCodec.decompose("fo\u{308}o");
    assert_eq!(units.len(), 3);
    assert_eq!(&*units[1], "o\u{308}");

    let units = GraphemeCodec.decompose("🇩🇪🇪🇺");
    assert_eq!(units.len(), 2, "regional indicator pairs stay together");
    assert_eq!(GraphemeCodec.compose(&units), "🇩🇪🇪🇺");
}
