use std::fmt;

/// A punctuation mark together with the spaces that follow it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Punctuation {
    value: char,
    trail_space_count: usize,
}

impl Punctuation {
    pub fn new(c: char) -> Self {
        Self {
            value: c,
            trail_space_count: 0,
        }
    }

    pub fn value(&self) -> char {
        self.value
    }

    pub fn trail_space_count(&self) -> usize {
        self.trail_space_count
    }

    pub(crate) fn trail_space_count_mut(&mut self) -> &mut usize {
        &mut self.trail_space_count
    }

    /// Check whether `c` belongs to the punctuation class
    /// WHY: locale-independent ASCII class, so `«`, `—` and friends are rejected by the parser
    pub fn is_punctuation(c: char) -> bool {
        c.is_ascii_punctuation()
    }

    /// Check whether `c` terminates a sentence
    pub fn is_sentence_end(c: char) -> bool {
        matches!(c, '.' | '!' | '?')
    }

    pub fn ends_sentence(&self) -> bool {
        Self::is_sentence_end(self.value)
    }
}

impl fmt::Display for Punctuation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_punctuation_class() {
        for c in "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~".chars() {
            assert!(Punctuation::is_punctuation(c), "expected {c:?} to be punctuation");
        }
        for c in ['a', 'Я', '5', ' ', '\t', '«', '—', '\u{7}'] {
            assert!(!Punctuation::is_punctuation(c), "expected {c:?} not to be punctuation");
        }
    }

    #[test]
    fn test_sentence_end() {
        assert!(Punctuation::is_sentence_end('.'));
        assert!(Punctuation::is_sentence_end('!'));
        assert!(Punctuation::is_sentence_end('?'));
        assert!(!Punctuation::is_sentence_end(','));
        assert!(!Punctuation::is_sentence_end(';'));
        assert!(Punctuation::new('?').ends_sentence());
    }
}
