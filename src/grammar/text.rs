use super::{normalize_whitespace, Punctuation, Sentence, ValidationError};
use std::fmt;
use tracing::debug;

/// A validated text split into sentences
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text {
    sentences: Vec<Sentence>,
}

impl Text {
    /// Validate, normalize whitespace and split `raw` into sentences
    ///
    /// The text must start with an uppercase letter and end with `.`, `!` or
    /// `?`. Each sentence runs up to and including its terminator; the spaces
    /// after a terminator become the next sentence's lead spaces.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let first = raw.chars().next().ok_or(ValidationError::Empty)?;
        if !first.is_uppercase() {
            return Err(ValidationError::NotCapitalized(first));
        }

        // non-empty, checked above
        let last = raw.chars().next_back().unwrap_or(first);
        if !Punctuation::is_sentence_end(last) {
            return Err(ValidationError::MissingTerminator(last));
        }

        let normalized = normalize_whitespace(raw);

        let mut sentences = Vec::new();
        let mut pending = String::new();

        for ch in normalized.chars() {
            pending.push(ch);
            if Punctuation::is_sentence_end(ch) {
                sentences.push(Sentence::parse(&pending)?);
                pending.clear();
            }
        }

        debug!(
            "Parsed {} sentences from {} characters",
            sentences.len(),
            normalized.chars().count()
        );

        Ok(Self { sentences })
    }

    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }

    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    /// Always false for a parsed text
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    /// Replace every sentence with the result of `edit`
    pub fn apply_to_each_sentence<F>(&mut self, mut edit: F)
    where
        F: FnMut(&Sentence) -> Sentence,
    {
        for sentence in &mut self.sentences {
            *sentence = edit(sentence);
        }
    }

    /// Serialize back to a string, lead spaces included
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for sentence in &self.sentences {
            write!(f, "{:width$}{sentence}", "", width = sentence.lead_space_count())?;
        }
        Ok(())
    }
}
