use super::{Letter, Punctuation, ValidationError, Word};
use std::fmt;

/// One token of a sentence
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SentenceItem {
    Word(Word),
    Punctuation(Punctuation),
}

impl SentenceItem {
    /// Number of spaces between this token and the next one
    pub fn trail_space_count(&self) -> usize {
        match self {
            SentenceItem::Word(word) => word.trail_space_count(),
            SentenceItem::Punctuation(punct) => punct.trail_space_count(),
        }
    }

    fn trail_space_count_mut(&mut self) -> &mut usize {
        match self {
            SentenceItem::Word(word) => word.trail_space_count_mut(),
            SentenceItem::Punctuation(punct) => punct.trail_space_count_mut(),
        }
    }

    pub fn as_word(&self) -> Option<&Word> {
        match self {
            SentenceItem::Word(word) => Some(word),
            SentenceItem::Punctuation(_) => None,
        }
    }
}

impl fmt::Display for SentenceItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SentenceItem::Word(word) => write!(f, "{word}"),
            SentenceItem::Punctuation(punct) => write!(f, "{punct}"),
        }
    }
}

/// Location of a letter: index of the item, then index inside that word
/// WHY: field order gives the derived `Ord` left-to-right text order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct LetterPos {
    word_idx: usize,
    letter_idx: usize,
}

/// A sequence of words and punctuation marks with its spacing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sentence {
    items: Vec<SentenceItem>,
    lead_space_count: usize,
}

impl Sentence {
    /// Split raw characters into words, punctuation marks and space counts
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let mut sentence = Sentence::default();
        let mut pending: Vec<Letter> = Vec::new();

        for c in raw.chars() {
            if is_letter(c) {
                pending.push(Letter::new(c));
                continue;
            }

            sentence.flush_word(&mut pending);

            if Punctuation::is_punctuation(c) {
                sentence.items.push(SentenceItem::Punctuation(Punctuation::new(c)));
            } else if c.is_whitespace() {
                match sentence.items.last_mut() {
                    Some(item) => *item.trail_space_count_mut() += 1,
                    None => sentence.lead_space_count += 1,
                }
            } else {
                return Err(ValidationError::InvalidCharacter(c));
            }
        }
        sentence.flush_word(&mut pending);

        Ok(sentence)
    }

    fn flush_word(&mut self, pending: &mut Vec<Letter>) {
        if let Some(word) = Word::new(std::mem::take(pending)) {
            self.items.push(SentenceItem::Word(word));
        }
    }

    pub fn items(&self) -> &[SentenceItem] {
        &self.items
    }

    /// Spaces before the first token
    pub fn lead_space_count(&self) -> usize {
        self.lead_space_count
    }

    pub fn word_count(&self) -> usize {
        self.words().count()
    }

    pub fn letter_count(&self) -> usize {
        self.words().map(Word::len).sum()
    }

    fn words(&self) -> impl Iterator<Item = &Word> {
        self.items.iter().filter_map(SentenceItem::as_word)
    }

    /// Remove everything from the first `start_letter` through the last
    /// `end_letter`, both inclusive
    ///
    /// The sentence is returned unchanged when either letter is missing or the
    /// first start letter comes after the last end letter. A start and end
    /// landing on the same letter removes just that letter.
    pub fn without_longest_substr(
        &self,
        start_letter: Letter,
        end_letter: Letter,
        ignore_case: bool,
    ) -> Sentence {
        let start = self.find_letter(start_letter, ignore_case, false);
        let end = self.find_letter(end_letter, ignore_case, true);
        self.without_substr(start, end)
    }

    fn find_letter(&self, target: Letter, ignore_case: bool, reversed: bool) -> Option<LetterPos> {
        let locate = |(word_idx, item): (usize, &SentenceItem)| {
            let word = item.as_word()?;
            let letter_idx = word.index_of(target, ignore_case, reversed)?;
            Some(LetterPos { word_idx, letter_idx })
        };

        if reversed {
            self.items.iter().enumerate().rev().find_map(locate)
        } else {
            self.items.iter().enumerate().find_map(locate)
        }
    }

    fn without_substr(&self, start: Option<LetterPos>, end: Option<LetterPos>) -> Sentence {
        let (start, end) = match (start, end) {
            (Some(start), Some(end)) if start <= end => (start, end),
            _ => return self.clone(),
        };

        let (Some(start_word), Some(end_word)) = (
            self.items[start.word_idx].as_word(),
            self.items[end.word_idx].as_word(),
        ) else {
            return self.clone();
        };

        let mut items: Vec<SentenceItem> = self.items[..start.word_idx].to_vec();
        let mut lead_space_count = self.lead_space_count;

        match Word::concat(start_word, start.letter_idx, end_word, end.letter_idx) {
            Some(word) => items.push(SentenceItem::Word(word)),
            None => match items.last_mut() {
                Some(item) => *item.trail_space_count_mut() += end_word.trail_space_count(),
                None => lead_space_count += end_word.trail_space_count(),
            },
        }

        items.extend_from_slice(&self.items[end.word_idx + 1..]);

        Sentence {
            items,
            lead_space_count,
        }
    }
}

/// Letters proper; letter-numbers such as `Ⅻ` are alphabetic but not letters
fn is_letter(c: char) -> bool {
    c.is_alphabetic() && !c.is_numeric()
}

impl fmt::Display for Sentence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for item in &self.items {
            write!(f, "{item}{:width$}", "", width = item.trail_space_count())?;
        }
        Ok(())
    }
}
