// WHY: Removal settings shared by the CLI, the pipeline and the stats report
// Loaded from JSON so a run can be reproduced from its config file

use crate::grammar::{Letter, Sentence};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Which span to cut out of every sentence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RemovalConfig {
    /// Letter opening the span (first occurrence in the sentence)
    pub start_letter: char,
    /// Letter closing the span (last occurrence in the sentence)
    pub end_letter: char,
    /// Compare letters after folding to lowercase
    pub ignore_case: bool,
}

impl Default for RemovalConfig {
    fn default() -> Self {
        Self {
            start_letter: 'в',
            end_letter: 'т',
            ignore_case: true,
        }
    }
}

impl RemovalConfig {
    pub fn new(start_letter: char, end_letter: char, ignore_case: bool) -> Self {
        Self {
            start_letter,
            end_letter,
            ignore_case,
        }
    }

    /// Load config from a JSON file; missing fields fall back to defaults
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Cut the longest start..end span out of one sentence
    pub fn apply(&self, sentence: &Sentence) -> Sentence {
        sentence.without_longest_substr(
            Letter::new(self.start_letter),
            Letter::new(self.end_letter),
            self.ignore_case,
        )
    }
}
