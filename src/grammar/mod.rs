// WHY: Grammar model shared by the CLI and the removal pipeline
// Text -> Sentence -> SentenceItem (Word | Punctuation) -> Letter

use thiserror::Error;

pub mod letter;
pub mod normalization;
pub mod punctuation;
pub mod sentence;
pub mod text;
pub mod word;

// Re-export core types
pub use letter::Letter;
pub use normalization::{normalize_whitespace, normalize_whitespace_into};
pub use punctuation::Punctuation;
pub use sentence::{Sentence, SentenceItem};
pub use text::Text;
pub use word::Word;

/// Reasons raw input cannot be turned into a `Text` or `Sentence`
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("text must be non-empty")]
    Empty,

    #[error("text should start with an uppercase letter, found '{0}'")]
    NotCapitalized(char),

    #[error("the last character of the text should be a sentence-ending punctuation mark, found '{0}'")]
    MissingTerminator(char),

    #[error("invalid character: '{}'", .0.escape_debug())]
    InvalidCharacter(char),
}
