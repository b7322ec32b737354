//! A compressed prefix tree (radix trie) over strings, for exact membership tests and
//! autocompletion.
//!
//! Keys are not compared character by character, but as sequences of units produced by a
//! [`KeyCodec`]. The default [`HangulCodec`] splits Hangul syllables into their letters, so that
//! partially typed input still completes:
//!
//! ```
//! use jamo_trie::Trie;
//!
//! let mut trie = Trie::new();
//! trie.insert("나비");
//! trie.insert("나방");
//! trie.insert("나쁜");
//!
//! assert!(trie.has("나비"));
//! let mut completions = trie.auto_complete("납");
//! completions.sort();
//! assert_eq!(completions, ["나방", "나비"]);
//! ```

pub mod codec;
pub mod common_prefix;
pub mod trie;

pub use codec::{CharCodec, DelimitedCodec, GraphemeCodec, HangulCodec, KeyCodec};
pub use trie::{Trie, TrieNode};
