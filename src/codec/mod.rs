//! Conversion between display strings and the sequences of atomic units the trie is keyed by.

mod delimited;
mod grapheme;
mod hangul;

use std::hash::Hash;

pub use delimited::DelimitedCodec;
pub use grapheme::GraphemeCodec;
pub use hangul::HangulCodec;

/// Turns display text into the units the trie compares and branches on, and back.
///
/// Implementations must be deterministic and total: `decompose` never fails, and
/// `compose(&decompose(s)) == s` for every string `s` that was decomposed by the same codec.
/// Composing a sequence that is not a clean `decompose` output (e.g., a syllable cut in half)
/// must not fail either; fragments are rendered literally.
///
/// The trie does not detect violations of this contract, they show up as lookups that miss or
/// completions that render differently from what was inserted.
pub trait KeyCodec {
    type Unit: Clone + Eq + Hash;

    fn decompose(&self, text: &str) -> Vec<Self::Unit>;

    fn compose(&self, units: &[Self::Unit]) -> String;
}

/// Every Unicode scalar value is its own unit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CharCodec;

impl KeyCodec for CharCodec {
    type Unit = char;

    fn decompose(&self, text: &str) -> Vec<char> {
        text.chars().collect()
    }

    fn compose(&self, units: &[char]) -> String {
        units.iter().collect()
    }
}

#[test]
fn char_codec() {
    assert_eq!(CharCodec.decompose("가a "), vec!['가', 'a', ' ']);
    assert_eq!(CharCodec.compose(&['가', 'a', ' ']), "가a ");
    assert!(CharCodec.decompose("").is_empty());
}
