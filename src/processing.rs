// WHY: Parse -> edit -> render pipeline with run statistics
// Kept out of main.rs so tests and benchmarks drive the same code path as the CLI

use crate::grammar::{Text, ValidationError};
use crate::removal::RemovalConfig;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

/// Statistics for one processed text
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RunStats {
    /// Characters in the raw input
    pub chars_in: u64,
    /// Characters in the rendered output
    pub chars_out: u64,
    /// Number of sentences parsed
    pub sentences: u64,
    /// Sentences the removal actually changed
    pub sentences_edited: u64,
    /// Letters dropped across all sentences
    pub letters_removed: u64,
    /// Processing time in milliseconds
    pub processing_time_ms: u64,
    /// Throughput in input characters per second
    pub chars_per_sec: f64,
    pub start_letter: char,
    pub end_letter: char,
    pub ignore_case: bool,
}

/// Rendered output together with the stats that produced it
#[derive(Debug, Clone)]
pub struct ProcessedText {
    pub output: String,
    pub stats: RunStats,
}

/// Parse `raw`, cut the configured span out of every sentence and render the result
pub fn process_text(raw: &str, config: &RemovalConfig) -> Result<ProcessedText, ValidationError> {
    let start = Instant::now();

    let mut text = Text::parse(raw)?;

    let mut sentences_edited = 0u64;
    let mut letters_removed = 0u64;
    text.apply_to_each_sentence(|sentence| {
        let edited = config.apply(sentence);
        if edited != *sentence {
            sentences_edited += 1;
            letters_removed += (sentence.letter_count() - edited.letter_count()) as u64;
        }
        edited
    });

    let output = text.render();
    let elapsed = start.elapsed();

    let chars_in = raw.chars().count() as u64;
    let secs = elapsed.as_secs_f64();
    // WHY: tiny inputs finish below timer resolution
    let chars_per_sec = if secs > 0.0 { chars_in as f64 / secs } else { 0.0 };

    debug!(
        "Edited {} of {} sentences, removed {} letters",
        sentences_edited,
        text.len(),
        letters_removed
    );

    let stats = RunStats {
        chars_in,
        chars_out: output.chars().count() as u64,
        sentences: text.len() as u64,
        sentences_edited,
        letters_removed,
        processing_time_ms: elapsed.as_millis() as u64,
        chars_per_sec,
        start_letter: config.start_letter,
        end_letter: config.end_letter,
        ignore_case: config.ignore_case,
    };

    Ok(ProcessedText { output, stats })
}

/// Write run statistics as pretty JSON
pub async fn write_stats(path: &Path, stats: &RunStats) -> Result<()> {
    let content = serde_json::to_string_pretty(stats)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }

    tokio::fs::write(path, content).await?;
    info!("Stats written to: {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_counts_edits() {
        let config = RemovalConfig::new('a', 't', false);
        let processed = process_text("Tab cat. Nothing here. Bat tub.", &config).unwrap();

        assert_eq!(processed.output, "T. Nothing here. Bub.");
        assert_eq!(processed.stats.sentences, 3);
        assert_eq!(processed.stats.sentences_edited, 2);
        // "Tabcat" -> "T", "Battub" -> "Bub"
        assert_eq!(processed.stats.letters_removed, 8);
        assert_eq!(processed.stats.chars_in, 31);
        assert_eq!(processed.stats.chars_out, 21);
    }

    #[test]
    fn test_process_propagates_validation_error() {
        let err = process_text("lowercase start.", &RemovalConfig::default()).unwrap_err();
        assert_eq!(err, ValidationError::NotCapitalized('l'));
    }

    #[tokio::test]
    async fn test_write_stats_round_trip() {
        let temp_dir = tempfile::TempDir::new().expect("Failed to create temp directory");
        let path = temp_dir.path().join("nested").join("stats.json");

        let processed = process_text("Вітер дув.", &RemovalConfig::default()).unwrap();
        write_stats(&path, &processed.stats).await.unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let loaded: RunStats = serde_json::from_str(&content).unwrap();
        assert_eq!(loaded.sentences, 1);
        assert_eq!(loaded.sentences_edited, 1);
        assert_eq!(loaded.letters_removed, 3);
        assert_eq!(loaded.start_letter, 'в');
        assert!(loaded.ignore_case);
    }
}
