use std::collections::HashSet;

use jamo_trie::{CharCodec, GraphemeCodec, KeyCodec, Trie};

fn set(keys: Vec<String>) -> HashSet<String> {
    keys.into_iter().collect()
}

#[test]
fn distinct_latin_keys() {
    let mut trie = Trie::new();
    trie.insert("abc");
    trie.insert("abd");
    assert_eq!(set(trie.get_all()), set(vec!["abc".into(), "abd".into()]));
    assert_eq!(trie.len(), 2);
}

#[test]
fn hangul_completion() {
    let mut trie = Trie::new();
    trie.insert("가나다");
    trie.insert("가나라");
    assert!(trie.has("가나다"));
    let mut completions = trie.auto_complete("가나");
    completions.sort();
    assert_eq!(completions, ["가나다", "가나라"]);
}

#[test]
fn remove_extension_keeps_prefix() {
    let mut trie = Trie::new();
    trie.insert("ㄱㄴㄷ");
    trie.insert("ㄱㄴㄷㄹ");
    trie.remove("ㄱㄴㄷㄹ");
    assert!(!trie.has("ㄱㄴㄷㄹ"));
    assert!(trie.has("ㄱㄴㄷ"));
    assert_eq!(trie.len(), 1);
}

#[test]
fn remove_prefix_keeps_extension() {
    let mut trie = Trie::new();
    trie.insert("나비");
    trie.insert("나비야");
    trie.remove("나비");
    assert!(!trie.has("나비"));
    assert!(trie.has("나비야"));
    assert_eq!(trie.auto_complete("나"), ["나비야"]);
}

#[test]
fn empty_trie_answers_nothing() {
    let trie = Trie::new();
    for key in ["", "a", "가", "ㄱ", "나비는 butterfly야"] {
        assert!(!trie.has(key));
        assert!(trie.auto_complete(key).is_empty());
    }
    assert!(trie.get_all().is_empty());
}

#[test]
fn round_trip_and_idempotence() {
    let keys = ["바나나는 banana야", "개굴개굴 개구리", "값", "닭갈비", "의사", "🇩🇪", "x"];
    let mut trie = Trie::new();
    for key in keys {
        assert!(trie.insert(key));
        assert!(trie.has(key));
    }
    let all = set(trie.get_all());
    for key in keys {
        assert!(!trie.insert(key));
    }
    assert_eq!(trie.len(), keys.len());
    assert_eq!(set(trie.get_all()), all);

    for (removed, key) in keys.iter().enumerate() {
        assert!(trie.remove(key));
        assert!(!trie.has(key));
        assert_eq!(trie.len(), keys.len() - removed - 1);
    }
    assert!(trie.is_empty());
}

#[test]
fn completion_inside_syllable() {
    let trie: Trie = ["닭", "달걀", "달빛", "다리"].into_iter().collect();
    let mut completions = trie.auto_complete("달");
    completions.sort();
    // "다리" is ㄷㅏㄹㅣ and "닭" is ㄷㅏㄹㄱ, so both extend "달" (ㄷㅏㄹ) as well.
    assert_eq!(completions, ["다리", "달걀", "달빛", "닭"]);
    assert_eq!(set(trie.auto_complete("다")), set(trie.get_all()));
}

#[test]
fn other_codecs() {
    let trie: Trie<CharCodec> = ["나비", "납부"].into_iter().collect();
    assert_eq!(trie.auto_complete("납"), ["납부"]);

    let mut trie = Trie::with_codec(GraphemeCodec);
    trie.insert("🇩🇪🇪🇺");
    trie.insert("🇩🇪");
    assert_eq!(trie.codec().decompose("🇩🇪🇪🇺").len(), 2);
    assert!(trie.has("🇩🇪"));
    // Half of a flag is not a grapheme cluster of any key.
    assert!(trie.auto_complete("\u{1F1E9}").is_empty());
    assert_eq!(trie.len(), 2);
}
