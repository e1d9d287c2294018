use std::fmt;

/// A single letter of a word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Letter(char);

impl Letter {
    pub fn new(c: char) -> Self {
        Self(c)
    }

    pub fn value(self) -> char {
        self.0
    }

    /// Compare two letters, folding both to lowercase when `ignore_case` is set
    pub fn equals(self, other: Letter, ignore_case: bool) -> bool {
        if ignore_case {
            simple_lowercase(self.0) == simple_lowercase(other.0)
        } else {
            self.0 == other.0
        }
    }
}

/// One-to-one lowercase mapping
/// WHY: full mappings expand some letters (`İ` -> `i̇`); keep only the single-char part
fn simple_lowercase(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        (Some('i'), Some('\u{307}')) => 'i',
        _ => c,
    }
}

impl From<char> for Letter {
    fn from(c: char) -> Self {
        Self(c)
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
