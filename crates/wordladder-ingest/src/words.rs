//! Dictionary reading and token normalization.
//!
//! A dictionary is a text file with one word per line. Each line is trimmed,
//! blank lines are dropped and, when case folding is enabled, the word is
//! upper-cased. Order is preserved; duplicates are left for the graph to
//! reject.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, info};
use wordladder_core::{Error, LadderConfig, Result};

/// Normalize one dictionary line. `None` for blank lines.
pub fn normalize_line(line: &str, config: &LadderConfig) -> Option<String> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(config.fold(trimmed))
}

/// Normalize every line of an in-memory dictionary.
pub fn normalize_words(text: &str, config: &LadderConfig) -> Vec<String> {
    text.lines()
        .filter_map(|line| normalize_line(line, config))
        .collect()
}

/// Read and normalize a whole dictionary file.
pub fn read_words(path: &Path, config: &LadderConfig) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path).map_err(Error::Io)?;
    let words = normalize_words(&content, config);
    info!("Read {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Stream normalized words from a dictionary file.
///
/// Opening the file fails eagerly; read errors (including invalid UTF-8)
/// surface as `Err` items so the consumer decides whether to stop.
pub fn word_stream<'a>(
    path: &Path,
    config: &'a LadderConfig,
) -> Result<impl Iterator<Item = Result<String>> + 'a> {
    let file = File::open(path).map_err(|e| {
        Error::Ingest(format!("cannot open dictionary {}: {}", path.display(), e))
    })?;
    debug!("Streaming words from {}", path.display());

    let lines = BufReader::new(file).lines();
    Ok(lines.filter_map(move |line| match line {
        Ok(line) => normalize_line(&line, config).map(Ok),
        Err(e) => Some(Err(Error::Io(e))),
    }))
}
