//! Porter stemming for reducing words to their root forms.
//!
//! The forum keyword weight table and the synonym expander both key on
//! stems, so stemming has to be deterministic and pure. The algorithm
//! applies the classic five rewrite steps:
//! 1. Plurals and -ed/-ing suffixes
//! 2. -ational → -ate, -tional → -tion, etc.
//! 3. -icate → -ic, -ative → "", etc.
//! 4. Remove -al, -ance, -ence, etc.
//! 5. Remove final -e and -ll
//!
//! # Examples
//!
//! ```
//! use parlance::analysis::stem::{PorterStemmer, Stemmer};
//!
//! let stemmer = PorterStemmer::new();
//!
//! assert_eq!(stemmer.stem("solved"), "solv");
//! assert_eq!(stemmer.stem("running"), "run");
//! assert_eq!(stemmer.stem("traditional"), "tradit");
//! ```

/// Trait for stemming algorithms.
pub trait Stemmer: Send + Sync {
    /// Stem a word to its root form.
    fn stem(&self, word: &str) -> String;

    /// Get the name of this stemmer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

/// Porter stemming algorithm implementation.
#[derive(Clone, Copy, Debug, Default)]
pub struct PorterStemmer;

impl PorterStemmer {
    /// Create a new Porter stemmer.
    pub fn new() -> Self {
        PorterStemmer
    }

    /// Check if the character at `pos` acts as a vowel.
    ///
    /// `y` counts as a vowel only after a consonant.
    fn is_vowel(chars: &[char], pos: usize) -> bool {
        match chars.get(pos) {
            Some('a' | 'e' | 'i' | 'o' | 'u') => true,
            Some('y') if pos > 0 => !Self::is_vowel(chars, pos - 1),
            _ => false,
        }
    }

    /// The measure of a word: the number of vowel-consonant transitions.
    fn measure(word: &str) -> usize {
        let chars: Vec<char> = word.chars().collect();
        let n = chars.len();
        let mut m = 0;
        let mut i = 0;

        while i < n && !Self::is_vowel(&chars, i) {
            i += 1;
        }

        while i < n {
            while i < n && Self::is_vowel(&chars, i) {
                i += 1;
            }
            if i >= n {
                break;
            }
            m += 1;
            while i < n && !Self::is_vowel(&chars, i) {
                i += 1;
            }
        }

        m
    }

    fn ends_with(word: &str, suffix: &str) -> bool {
        // Suffixes are ASCII; a cut inside a multi-byte character cannot
        // start a match.
        match word.len().checked_sub(suffix.len()) {
            Some(start) => {
                word.is_char_boundary(start) && word[start..].eq_ignore_ascii_case(suffix)
            }
            None => false,
        }
    }

    fn contains_vowel(word: &str) -> bool {
        let chars: Vec<char> = word.chars().collect();
        (0..chars.len()).any(|i| Self::is_vowel(&chars, i))
    }

    fn ends_with_double_consonant(word: &str) -> bool {
        let chars: Vec<char> = word.chars().collect();
        let len = chars.len();
        if len < 2 {
            return false;
        }
        chars[len - 1] == chars[len - 2] && !Self::is_vowel(&chars, len - 1)
    }

    /// Check for a consonant-vowel-consonant ending where the final
    /// consonant is not `w`, `x`, or `y`.
    fn ends_cvc(word: &str) -> bool {
        let chars: Vec<char> = word.chars().collect();
        let len = chars.len();
        if len < 3 {
            return false;
        }

        !Self::is_vowel(&chars, len - 3)
            && Self::is_vowel(&chars, len - 2)
            && !Self::is_vowel(&chars, len - 1)
            && !matches!(chars[len - 1], 'w' | 'x' | 'y')
    }

    fn replace_suffix(
        word: &str,
        old_suffix: &str,
        new_suffix: &str,
        min_measure: usize,
    ) -> String {
        if Self::ends_with(word, old_suffix) {
            let stem = &word[..word.len() - old_suffix.len()];
            if Self::measure(stem) >= min_measure {
                return format!("{stem}{new_suffix}");
            }
        }
        word.to_string()
    }

    /// Step 1a: plural forms.
    fn step1a(word: &str) -> String {
        if Self::ends_with(word, "sses") {
            format!("{}ss", &word[..word.len() - 4])
        } else if Self::ends_with(word, "ies") {
            format!("{}i", &word[..word.len() - 3])
        } else if Self::ends_with(word, "ss") {
            word.to_string()
        } else if Self::ends_with(word, "s") && word.len() > 1 {
            word[..word.len() - 1].to_string()
        } else {
            word.to_string()
        }
    }

    /// Step 1b: -eed, -ed, -ing suffixes.
    fn step1b(word: &str) -> String {
        let original = word;
        let word = if Self::ends_with(word, "eed") {
            Self::replace_suffix(word, "eed", "ee", 1)
        } else if Self::ends_with(word, "ed") {
            let stem = &word[..word.len() - 2];
            if Self::contains_vowel(stem) {
                stem.to_string()
            } else {
                word.to_string()
            }
        } else if Self::ends_with(word, "ing") {
            let stem = &word[..word.len() - 3];
            if Self::contains_vowel(stem) {
                stem.to_string()
            } else {
                word.to_string()
            }
        } else {
            word.to_string()
        };

        if word == original {
            return word;
        }

        // Repair the stem left behind by -ed/-ing removal.
        if Self::ends_with(&word, "at") || Self::ends_with(&word, "bl") || Self::ends_with(&word, "iz")
        {
            format!("{word}e")
        } else if Self::ends_with_double_consonant(&word)
            && !Self::ends_with(&word, "l")
            && !Self::ends_with(&word, "s")
            && !Self::ends_with(&word, "z")
        {
            // The doubled consonant may be multi-byte, so truncate by char.
            let mut word = word;
            word.pop();
            word
        } else if Self::measure(&word) == 1 && Self::ends_cvc(&word) {
            format!("{word}e")
        } else {
            word
        }
    }

    /// Step 2: double suffixes mapped to single ones.
    fn step2(word: &str) -> String {
        let suffixes = [
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

        for (old_suffix, new_suffix) in &suffixes {
            if Self::ends_with(word, old_suffix) {
                return Self::replace_suffix(word, old_suffix, new_suffix, 1);
            }
        }

        word.to_string()
    }

    /// Step 3: -icate, -ative, and friends.
    fn step3(word: &str) -> String {
        let suffixes = [
            ("icate", "ic"),
            ("ative", ""),
            ("alize", "al"),
            ("iciti", "ic"),
            ("ical", "ic"),
            ("ful", ""),
            ("ness", ""),
        ];

        for (old_suffix, new_suffix) in &suffixes {
            if Self::ends_with(word, old_suffix) {
                return Self::replace_suffix(word, old_suffix, new_suffix, 1);
            }
        }

        word.to_string()
    }

    /// Step 4: strip remaining derivational suffixes.
    fn step4(word: &str) -> String {
        let suffixes = [
            "al", "ance", "ence", "er", "ic", "able", "ible", "ant", "ement", "ment", "ent", "ion",
            "ou", "ism", "ate", "iti", "ous", "ive", "ize",
        ];

        for suffix in &suffixes {
            if Self::ends_with(word, suffix) {
                let stem = &word[..word.len() - suffix.len()];
                if Self::measure(stem) > 1 {
                    // -ion only comes off after s or t.
                    if *suffix != "ion" || Self::ends_with(stem, "s") || Self::ends_with(stem, "t") {
                        return stem.to_string();
                    }
                }
            }
        }

        word.to_string()
    }

    /// Step 5: final -e and -ll cleanup.
    fn step5(word: &str) -> String {
        let word = if Self::ends_with(word, "e") {
            let stem = &word[..word.len() - 1];
            let m = Self::measure(stem);
            if m > 1 || (m == 1 && !Self::ends_cvc(stem)) {
                stem.to_string()
            } else {
                word.to_string()
            }
        } else {
            word.to_string()
        };

        if Self::ends_with(&word, "ll") && Self::measure(&word) > 1 {
            word[..word.len() - 1].to_string()
        } else {
            word
        }
    }
}

impl Stemmer for PorterStemmer {
    fn stem(&self, word: &str) -> String {
        if word.len() <= 2 {
            return word.to_lowercase();
        }

        let word = word.to_lowercase();

        let word = Self::step1a(&word);
        let word = Self::step1b(&word);
        let word = Self::step2(&word);
        let word = Self::step3(&word);
        let word = Self::step4(&word);
        Self::step5(&word)
    }

    fn name(&self) -> &'static str {
        "porter"
    }
}
