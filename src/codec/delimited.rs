use regex::Regex;

use super::KeyCodec;

/// Splits keys only right after matches of a delimiter pattern, e.g., `/|\.` for paths,
/// so that branches only happen at directory or file extension boundaries.
/// Each unit includes its trailing delimiter, the last unit the rest of the key.
#[derive(Debug, Clone)]
pub struct DelimitedCodec {
    delimiter: Regex,
}

impl DelimitedCodec {
    pub fn new(delimiter: Regex) -> Self {
        Self { delimiter }
    }

    pub fn from_pattern(pattern: &str) -> Result<Self, regex::Error> {
        Regex::new(pattern).map(Self::new)
    }

    pub fn delimiter(&self) -> &Regex {
        &self.delimiter
    }
}

impl KeyCodec for DelimitedCodec {
    type Unit = Box<str>;

    fn decompose(&self, text: &str) -> Vec<Box<str>> {
        let mut units = Vec::new();
        let mut start = 0;
        for m in self.delimiter.find_iter(text) {
            // Empty matches would produce empty units, which cannot key a child.
            if m.end() > start {
                units.push(text[start..m.end()].into());
                start = m.end();
            }
        }
        if start < text.len() {
            units.push(text[start..].into());
        }
        units
    }

    fn compose(&self, units: &[Box<str>]) -> String {
        units.concat()
    }
}
