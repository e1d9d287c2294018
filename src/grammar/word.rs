use super::Letter;
use std::fmt;

/// A run of letters together with the spaces that follow it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    letters: Vec<Letter>,
    trail_space_count: usize,
}

impl Word {
    /// Build a word from its letters; `None` for an empty sequence
    pub fn new(letters: Vec<Letter>) -> Option<Self> {
        if letters.is_empty() {
            return None;
        }
        Some(Self {
            letters,
            trail_space_count: 0,
        })
    }

    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Always false for a constructed word, kept for the `len` convention
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    pub fn trail_space_count(&self) -> usize {
        self.trail_space_count
    }

    pub(crate) fn trail_space_count_mut(&mut self) -> &mut usize {
        &mut self.trail_space_count
    }

    /// Find `target` scanning from the start, or from the end when `reversed`
    pub fn index_of(&self, target: Letter, ignore_case: bool, reversed: bool) -> Option<usize> {
        let matches = |letter: &Letter| letter.equals(target, ignore_case);
        if reversed {
            self.letters.iter().rposition(matches)
        } else {
            self.letters.iter().position(matches)
        }
    }

    /// Join `start_word[..start_to]` with `end_word[end_from + 1..]`
    ///
    /// Both boundary letters are dropped. Returns `None` when either index
    /// falls outside its word or when nothing is left of the two fragments.
    /// The result inherits `end_word`'s trailing spaces since it ends where
    /// `end_word` ended.
    pub fn concat(
        start_word: &Word,
        start_to: usize,
        end_word: &Word,
        end_from: usize,
    ) -> Option<Word> {
        if start_to >= start_word.len() || end_from >= end_word.len() {
            return None;
        }

        let letters: Vec<Letter> = start_word.letters[..start_to]
            .iter()
            .chain(&end_word.letters[end_from + 1..])
            .copied()
            .collect();

        let mut word = Word::new(letters)?;
        word.trail_space_count = end_word.trail_space_count;
        Some(word)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in &self.letters {
            write!(f, "{letter}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(s: &str) -> Word {
        Word::new(s.chars().map(Letter::new).collect()).unwrap()
    }

    fn spaced(s: &str, trail: usize) -> Word {
        let mut w = word(s);
        w.trail_space_count = trail;
        w
    }

    #[test]
    fn test_empty_word_rejected() {
        assert!(Word::new(Vec::new()).is_none());
    }

    #[test]
    fn test_index_of_direction() {
        let w = word("banana");
        assert_eq!(w.index_of(Letter::new('a'), false, false), Some(1));
        assert_eq!(w.index_of(Letter::new('a'), false, true), Some(5));
        assert_eq!(w.index_of(Letter::new('x'), false, false), None);
        assert_eq!(w.index_of(Letter::new('x'), false, true), None);
    }

    #[test]
    fn test_index_of_single_occurrence_is_symmetric() {
        let w = word("вежа");
        let target = Letter::new('ж');
        assert_eq!(w.index_of(target, true, false), Some(2));
        assert_eq!(w.index_of(target, true, true), Some(2));
    }

    #[test]
    fn test_index_of_respects_case_flag() {
        let w = word("Велика");
        assert_eq!(w.index_of(Letter::new('в'), false, false), None);
        assert_eq!(w.index_of(Letter::new('в'), true, false), Some(0));
    }

    #[test]
    fn test_concat_same_word_interior() {
        // "abcde" without b..d
        let w = spaced("abcde", 2);
        let result = Word::concat(&w, 1, &w, 3).unwrap();
        assert_eq!(result.to_string(), "ae");
        assert_eq!(result.trail_space_count(), 2);
    }

    #[test]
    fn test_concat_same_letter_removes_only_it() {
        let w = word("abc");
        assert_eq!(Word::concat(&w, 1, &w, 1).unwrap().to_string(), "ac");
    }

    #[test]
    fn test_concat_cross_word_takes_end_spacing() {
        let start = spaced("hello", 1);
        let end = spaced("world", 3);
        let result = Word::concat(&start, 2, &end, 1).unwrap();
        assert_eq!(result.to_string(), "herld");
        assert_eq!(result.trail_space_count(), 3);
    }

    #[test]
    fn test_concat_start_at_first_letter_keeps_end_suffix() {
        let start = word("Велика");
        let end = spaced("просто", 1);
        let result = Word::concat(&start, 0, &end, 4).unwrap();
        assert_eq!(result.to_string(), "о");
        assert_eq!(result.trail_space_count(), 1);
    }

    #[test]
    fn test_concat_end_at_last_letter_keeps_start_prefix() {
        let start = word("stone");
        let end = word("cart");
        assert_eq!(Word::concat(&start, 2, &end, 3).unwrap().to_string(), "st");
    }

    #[test]
    fn test_concat_start_at_last_letter_end_at_first_letter() {
        let start = word("abc");
        let end = spaced("xyz", 1);
        let result = Word::concat(&start, 2, &end, 0).unwrap();
        assert_eq!(result.to_string(), "abyz");
        assert_eq!(result.trail_space_count(), 1);
    }

    #[test]
    fn test_concat_single_letter_words_cancel() {
        let start = word("a");
        let end = word("b");
        assert!(Word::concat(&start, 0, &end, 0).is_none());
    }

    #[test]
    fn test_concat_fully_cancelled_is_none() {
        let start = word("tree");
        let end = word("cat");
        assert!(Word::concat(&start, 0, &end, 2).is_none());
    }

    #[test]
    fn test_concat_out_of_range_is_none() {
        let w = word("abc");
        assert!(Word::concat(&w, 3, &w, 0).is_none());
        assert!(Word::concat(&w, 0, &w, 3).is_none());
    }
}
