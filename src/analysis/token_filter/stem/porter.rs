//! Porter stemming algorithm implementation.
//!
//! The Porter stemmer applies a series of rewrite rules in five steps:
//! 1. Plurals and -ed/-ing suffixes, terminal y → i
//! 2. -ational → -ate, -tional → -tion, etc.
//! 3. -icate → -ic, -ative → "", etc.
//! 4. Remove -al, -ance, -ence, etc.
//! 5. Remove final -e and -ll
//!
//! Words are lowercased first. Words of two letters or fewer, and words
//! containing non-ASCII-letter characters, are returned lowercased but
//! otherwise untouched.
//!
//! # Examples
//!
//! ```
//! use narrative::analysis::token_filter::stem::Stemmer;
//! use narrative::analysis::token_filter::stem::porter::PorterStemmer;
//!
//! let stemmer = PorterStemmer::new();
//!
//! assert_eq!(stemmer.stem("running"), "run");
//! assert_eq!(stemmer.stem("flies"), "fli");
//! assert_eq!(stemmer.stem("relational"), "relat");
//! ```

use crate::analysis::token_filter::stem::Stemmer;

const STEP2_RULES: &[(&str, &str)] = &[
    ("ational", "ate"),
    ("tional", "tion"),
    ("enci", "ence"),
    ("anci", "ance"),
    ("izer", "ize"),
    ("abli", "able"),
    ("alli", "al"),
    ("entli", "ent"),
    ("eli", "e"),
    ("ousli", "ous"),
    ("ization", "ize"),
    ("ation", "ate"),
    ("ator", "ate"),
    ("alism", "al"),
    ("iveness", "ive"),
    ("fulness", "ful"),
    ("ousness", "ous"),
    ("aliti", "al"),
    ("iviti", "ive"),
    ("biliti", "ble"),
];

const STEP3_RULES: &[(&str, &str)] = &[
    ("icate", "ic"),
    ("ative", ""),
    ("alize", "al"),
    ("iciti", "ic"),
    ("ical", "ic"),
    ("ful", ""),
    ("ness", ""),
];

const STEP4_SUFFIXES: &[&str] = &[
    "al", "ance", "ence", "er", "ic", "able", "ible", "ant", "ement", "ment", "ent", "ion", "ou",
    "ism", "ate", "iti", "ous", "ive", "ize",
];

/// Porter stemming algorithm implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct PorterStemmer;

impl PorterStemmer {
    /// Create a new Porter stemmer.
    pub fn new() -> Self {
        PorterStemmer
    }

    /// Flag every letter of `word` as consonant (`true`) or vowel.
    ///
    /// `y` is a consonant at the start of a word or after a vowel, so one
    /// left-to-right pass settles each position from the one before it.
    fn consonants(word: &[u8]) -> Vec<bool> {
        let mut mask: Vec<bool> = Vec::with_capacity(word.len());
        for (pos, &letter) in word.iter().enumerate() {
            let consonant = match letter {
                b'a' | b'e' | b'i' | b'o' | b'u' => false,
                b'y' => pos == 0 || !mask[pos - 1],
                _ => true,
            };
            mask.push(consonant);
        }
        mask
    }

    /// Calculate the measure of a word (number of VC sequences).
    fn measure(word: &[u8]) -> usize {
        let mask = Self::consonants(word);
        let first_vowel = mask.iter().position(|&c| !c).unwrap_or(mask.len());
        mask[first_vowel..]
            .windows(2)
            .filter(|pair| !pair[0] && pair[1])
            .count()
    }

    fn contains_vowel(word: &[u8]) -> bool {
        Self::consonants(word).iter().any(|&c| !c)
    }

    fn ends_with_double_consonant(word: &[u8]) -> bool {
        let len = word.len();
        len >= 2 && word[len - 1] == word[len - 2] && Self::consonants(word)[len - 1]
    }

    /// Check if word ends consonant-vowel-consonant, the last not w, x or y.
    fn ends_cvc(word: &[u8]) -> bool {
        let len = word.len();
        if len < 3 || matches!(word[len - 1], b'w' | b'x' | b'y') {
            return false;
        }
        let mask = Self::consonants(word);
        mask[len - 3] && !mask[len - 2] && mask[len - 1]
    }

    fn stem_of<'a>(word: &'a [u8], suffix: &str) -> Option<&'a [u8]> {
        word.strip_suffix(suffix.as_bytes())
    }

    fn replace(stem: &[u8], replacement: &str) -> Vec<u8> {
        let mut out = stem.to_vec();
        out.extend_from_slice(replacement.as_bytes());
        out
    }

    fn step1a(word: Vec<u8>) -> Vec<u8> {
        if let Some(stem) = Self::stem_of(&word, "sses") {
            Self::replace(stem, "ss")
        } else if let Some(stem) = Self::stem_of(&word, "ies") {
            Self::replace(stem, "i")
        } else if word.ends_with(b"ss") {
            word
        } else if let Some(stem) = Self::stem_of(&word, "s") {
            stem.to_vec()
        } else {
            word
        }
    }

    fn step1b(word: Vec<u8>) -> Vec<u8> {
        if let Some(stem) = Self::stem_of(&word, "eed") {
            return if Self::measure(stem) > 0 {
                Self::replace(stem, "ee")
            } else {
                word
            };
        }

        let stripped = ["ed", "ing"].iter().find_map(|suffix| {
            Self::stem_of(&word, suffix).filter(|stem| Self::contains_vowel(stem))
        });

        let Some(stem) = stripped else {
            return word;
        };

        if stem.ends_with(b"at") || stem.ends_with(b"bl") || stem.ends_with(b"iz") {
            Self::replace(stem, "e")
        } else if Self::ends_with_double_consonant(stem)
            && !matches!(stem[stem.len() - 1], b'l' | b's' | b'z')
        {
            stem[..stem.len() - 1].to_vec()
        } else if Self::measure(stem) == 1 && Self::ends_cvc(stem) {
            Self::replace(stem, "e")
        } else {
            stem.to_vec()
        }
    }

    fn step1c(word: Vec<u8>) -> Vec<u8> {
        match Self::stem_of(&word, "y") {
            Some(stem) if Self::contains_vowel(stem) => Self::replace(stem, "i"),
            _ => word,
        }
    }

    /// Apply the first rule whose suffix matches, if the stem measure allows.
    fn apply_rules(word: Vec<u8>, rules: &[(&str, &str)]) -> Vec<u8> {
        for (suffix, replacement) in rules {
            if let Some(stem) = Self::stem_of(&word, suffix) {
                return if Self::measure(stem) > 0 {
                    Self::replace(stem, replacement)
                } else {
                    word
                };
            }
        }
        word
    }

    fn step4(word: Vec<u8>) -> Vec<u8> {
        for suffix in STEP4_SUFFIXES {
            if let Some(stem) = Self::stem_of(&word, suffix) {
                let allowed = *suffix != "ion" || stem.ends_with(b"s") || stem.ends_with(b"t");
                return if allowed && Self::measure(stem) > 1 {
                    stem.to_vec()
                } else {
                    word
                };
            }
        }
        word
    }

    fn step5(word: Vec<u8>) -> Vec<u8> {
        let word = match Self::stem_of(&word, "e") {
            Some(stem) => {
                let m = Self::measure(stem);
                if m > 1 || (m == 1 && !Self::ends_cvc(stem)) {
                    stem.to_vec()
                } else {
                    word
                }
            }
            None => word,
        };

        if word.ends_with(b"ll") && Self::measure(&word) > 1 {
            word[..word.len() - 1].to_vec()
        } else {
            word
        }
    }
}

impl Stemmer for PorterStemmer {
    fn stem(&self, word: &str) -> String {
        let word = word.to_lowercase();
        if word.len() <= 2 || !word.bytes().all(|b| b.is_ascii_lowercase()) {
            return word;
        }

        let bytes = word.into_bytes();
        let bytes = Self::step1a(bytes);
        let bytes = Self::step1b(bytes);
        let bytes = Self::step1c(bytes);
        let bytes = Self::apply_rules(bytes, STEP2_RULES);
        let bytes = Self::apply_rules(bytes, STEP3_RULES);
        let bytes = Self::step4(bytes);
        let bytes = Self::step5(bytes);

        // Only ASCII letters ever enter or leave the steps above.
        String::from_utf8(bytes).unwrap_or_default()
    }

    fn name(&self) -> &'static str {
        "porter"
    }
}
