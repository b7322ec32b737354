//! Hangul syllables as sequences of their letters (jamo), so that a partially typed syllable
//! such as "납" (ㄴ ㅏ ㅂ) is a prefix of "나비" (ㄴ ㅏ ㅂ ㅣ).

use super::KeyCodec;

const SYLLABLE_FIRST: u32 = 0xAC00;
const SYLLABLE_LAST: u32 = 0xD7A3;

const INITIALS: [char; 19] = [
    'ㄱ', 'ㄲ', 'ㄴ', 'ㄷ', 'ㄸ', 'ㄹ', 'ㅁ', 'ㅂ', 'ㅃ', 'ㅅ',
    'ㅆ', 'ㅇ', 'ㅈ', 'ㅉ', 'ㅊ', 'ㅋ', 'ㅌ', 'ㅍ', 'ㅎ',
];

const MEDIALS: [char; 21] = [
    'ㅏ', 'ㅐ', 'ㅑ', 'ㅒ', 'ㅓ', 'ㅔ', 'ㅕ', 'ㅖ', 'ㅗ', 'ㅘ', 'ㅙ',
    'ㅚ', 'ㅛ', 'ㅜ', 'ㅝ', 'ㅞ', 'ㅟ', 'ㅠ', 'ㅡ', 'ㅢ', 'ㅣ',
];

// Index 0 is "no final consonant".
const FINALS: [Option<char>; 28] = [
    None, Some('ㄱ'), Some('ㄲ'), Some('ㄳ'), Some('ㄴ'), Some('ㄵ'), Some('ㄶ'),
    Some('ㄷ'), Some('ㄹ'), Some('ㄺ'), Some('ㄻ'), Some('ㄼ'), Some('ㄽ'), Some('ㄾ'),
    Some('ㄿ'), Some('ㅀ'), Some('ㅁ'), Some('ㅂ'), Some('ㅄ'), Some('ㅅ'), Some('ㅆ'),
    Some('ㅇ'), Some('ㅈ'), Some('ㅊ'), Some('ㅋ'), Some('ㅌ'), Some('ㅍ'), Some('ㅎ'),
];

/// Compound letters and the two simple letters they are written with.
const COMPOUNDS: [(char, [char; 2]); 18] = [
    ('ㅘ', ['ㅗ', 'ㅏ']),
    ('ㅙ', ['ㅗ', 'ㅐ']),
    ('ㅚ', ['ㅗ', 'ㅣ']),
    ('ㅝ', ['ㅜ', 'ㅓ']),
    ('ㅞ', ['ㅜ', 'ㅔ']),
    ('ㅟ', ['ㅜ', 'ㅣ']),
    ('ㅢ', ['ㅡ', 'ㅣ']),
    ('ㄳ', ['ㄱ', 'ㅅ']),
    ('ㄵ', ['ㄴ', 'ㅈ']),
    ('ㄶ', ['ㄴ', 'ㅎ']),
    ('ㄺ', ['ㄹ', 'ㄱ']),
    ('ㄻ', ['ㄹ', 'ㅁ']),
    ('ㄼ', ['ㄹ', 'ㅂ']),
    ('ㄽ', ['ㄹ', 'ㅅ']),
    ('ㄾ', ['ㄹ', 'ㅌ']),
    ('ㄿ', ['ㄹ', 'ㅍ']),
    ('ㅀ', ['ㄹ', 'ㅎ']),
    ('ㅄ', ['ㅂ', 'ㅅ']),
];

fn is_syllable(c: char) -> bool {
    (SYLLABLE_FIRST..=SYLLABLE_LAST).contains(&(c as u32))
}

fn is_consonant(c: char) -> bool {
    ('ㄱ'..='ㅎ').contains(&c)
}

fn is_vowel(c: char) -> bool {
    ('ㅏ'..='ㅣ').contains(&c)
}

fn split_compound(c: char) -> Option<[char; 2]> {
    COMPOUNDS.iter().find(|(compound, _)| *compound == c).map(|(_, parts)| *parts)
}

fn join_compound(first: char, second: char) -> Option<char> {
    COMPOUNDS.iter().find(|(_, parts)| *parts == [first, second]).map(|(compound, _)| *compound)
}

fn final_index(c: char) -> Option<usize> {
    FINALS.iter().position(|f| *f == Some(c))
}

/// Pushes a single letter, split into its simple letters if it is a compound.
fn push_letter(units: &mut Vec<char>, c: char) {
    match split_compound(c) {
        Some(parts) => units.extend(parts),
        None => units.push(c),
    }
}

/// Decomposes Hangul into simple letters (initial, medial, final, with compound vowels and
/// compound final consonants split in two). Double consonants such as ㄲ are kept as one unit.
/// All other characters are units of their own.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct HangulCodec;

impl KeyCodec for HangulCodec {
    type Unit = char;

    fn decompose(&self, text: &str) -> Vec<char> {
        let mut units = Vec::with_capacity(text.len());
        for c in text.chars() {
            if is_syllable(c) {
                let offset = (c as u32 - SYLLABLE_FIRST) as usize;
                let (initial, medial, final_) = (offset / (21 * 28), offset / 28 % 21, offset % 28);
                units.push(INITIALS[initial]);
                push_letter(&mut units, MEDIALS[medial]);
                if let Some(final_) = FINALS[final_] {
                    push_letter(&mut units, final_);
                }
            } else if is_consonant(c) || is_vowel(c) {
                push_letter(&mut units, c);
            } else {
                units.push(c);
            }
        }
        units
    }

    fn compose(&self, units: &[char]) -> String {
        let mut output = String::with_capacity(units.len() * 2);
        let mut syllable = Syllable::default();
        for (i, &unit) in units.iter().enumerate() {
            let next_is_vowel = units.get(i + 1).copied().map_or(false, is_vowel);
            if is_vowel(unit) {
                if !syllable.push_vowel(unit) {
                    syllable.flush(&mut output);
                    syllable.medial = Some(unit);
                }
            } else if is_consonant(unit) {
                // A consonant right before a vowel always opens the next syllable.
                if next_is_vowel || !syllable.push_final(unit) {
                    syllable.flush(&mut output);
                    if INITIALS.contains(&unit) {
                        syllable.initial = Some(unit);
                    } else {
                        output.push(unit);
                    }
                }
            } else {
                syllable.flush(&mut output);
                output.push(unit);
            }
        }
        syllable.flush(&mut output);
        output
    }
}

/// Letters of the syllable currently being assembled by `compose`.
#[derive(Debug, Default)]
struct Syllable {
    initial: Option<char>,
    medial: Option<char>,
    final_: Option<char>,
}

impl Syllable {
    /// Returns `false` if the vowel cannot be added and must start a new syllable.
    fn push_vowel(&mut self, vowel: char) -> bool {
        match (self.initial, self.medial, self.final_) {
            (Some(_), None, None) => {
                self.medial = Some(vowel);
                true
            }
            (_, Some(medial), None) => match join_compound(medial, vowel) {
                Some(compound) => {
                    self.medial = Some(compound);
                    true
                }
                None => false,
            },
            _ => false,
        }
    }

    /// Returns `false` if the consonant cannot close this syllable.
    fn push_final(&mut self, consonant: char) -> bool {
        let joined = match (self.initial, self.medial, self.final_) {
            (Some(_), Some(_), None) => Some(consonant),
            (Some(_), Some(_), Some(final_)) => join_compound(final_, consonant),
            _ => None,
        };
        match joined.filter(|c| final_index(*c).is_some()) {
            Some(final_) => {
                self.final_ = Some(final_);
                true
            }
            None => false,
        }
    }

    fn flush(&mut self, output: &mut String) {
        match std::mem::take(self) {
            Syllable { initial: Some(initial), medial: Some(medial), final_ } => {
                let initial = INITIALS.iter().position(|c| *c == initial).unwrap_or(0);
                let medial = MEDIALS.iter().position(|c| *c == medial).unwrap_or(0);
                let final_ = final_.and_then(final_index).unwrap_or(0);
                let code = SYLLABLE_FIRST + ((initial * 21 + medial) * 28 + final_) as u32;
                // All indices are in range, so the code point is always a valid syllable.
                output.extend(char::from_u32(code));
            }
            Syllable { initial, medial, final_ } => {
                output.extend(initial);
                output.extend(medial);
                output.extend(final_);
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn decompose(text: &str) -> String {
        HangulCodec.decompose(text).into_iter().collect()
    }

    fn compose(units: &str) -> String {
        HangulCodec.compose(&units.chars().collect::<Vec<_>>())
    }

    #[test]
    fn decompose_syllables() {
        assert_eq!(decompose("ㄱㄴㄷ"), "ㄱㄴㄷ");
        assert_eq!(decompose("가방과 나방"), "ㄱㅏㅂㅏㅇㄱㅗㅏ ㄴㅏㅂㅏㅇ");
        assert_eq!(decompose("abc"), "abc");
        assert_eq!(decompose("나비는 butterfly야"), "ㄴㅏㅂㅣㄴㅡㄴ butterflyㅇㅑ");
        assert_eq!(decompose("값"), "ㄱㅏㅂㅅ", "compound final");
        assert_eq!(decompose("까"), "ㄲㅏ", "double consonants are atomic");
        assert_eq!(decompose("ㅘ"), "ㅗㅏ", "standalone compound vowel");
        assert_eq!(decompose("힣"), "ㅎㅣㅎ", "last syllable");
    }

    #[test]
    fn compose_letters() {
        assert_eq!(compose("ㄱㅏㅁ"), "감");
        assert_eq!(compose("ㄱㅏㅁㅏ"), "가마");
        assert_eq!(compose("abc"), "abc");
        assert_eq!(compose("ㄱㅏa ㅁㅜㄹ b치"), "가a 물 b치");
        assert_eq!(compose("ㄱㄴㄷ"), "ㄱㄴㄷ");
        assert_eq!(compose("ㄷㅏㄹㄱㅏ"), "달가", "final moves to next syllable before a vowel");
    }

    #[test]
    fn compose_fragments_never_fails() {
        assert_eq!(compose("ㄴㅏㅂ"), "납");
        assert_eq!(compose("ㅏ"), "ㅏ");
        assert_eq!(compose("ㄸㄸ"), "ㄸㄸ");
        assert_eq!(compose("ㄱㅏㄸ"), "가ㄸ", "ㄸ cannot be a final consonant");
        assert_eq!(compose(""), "");
        // Standalone compound consonants are split, and not recombined outside a syllable.
        assert_eq!(HangulCodec.compose(&HangulCodec.decompose("ㄳ")), "ㄱㅅ");
        assert_eq!(compose("ㄱㅅ"), "ㄱㅅ");
    }

    #[test]
    fn round_trip() {
        for text in ["개굴개굴 개구리", "바나나는 banana야", "값이 없어요", "의사와 괜찮은 뭘", "닭갈비", "ㄱㄴㄷㄹ"] {
            assert_eq!(compose(&decompose(text)), text, "{text}");
        }
    }
}
