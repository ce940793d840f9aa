//! Runtime configuration for graph construction and precomputation.

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Vertex count at which the all-pairs precomputation fans out over rayon.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 256;

/// Top-level word ladder configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LadderConfig {
    /// Relax Floyd–Warshall rows in parallel once the graph has at least
    /// this many vertices.
    pub parallel_threshold: usize,
    /// Upper-case dictionary words and query words on ingestion.
    pub case_fold: bool,
}

impl LadderConfig {
    /// Create configuration from environment and defaults.
    ///
    /// Malformed values are logged and replaced by their defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let parallel_threshold = match std::env::var("WORDLADDER_PARALLEL_THRESHOLD") {
            Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
                warn!(
                    "Ignoring WORDLADDER_PARALLEL_THRESHOLD={:?}, using {}",
                    raw, defaults.parallel_threshold
                );
                defaults.parallel_threshold
            }),
            Err(_) => defaults.parallel_threshold,
        };

        let case_fold = match std::env::var("WORDLADDER_CASE_FOLD") {
            Ok(raw) => parse_flag(&raw).unwrap_or_else(|| {
                warn!(
                    "Ignoring WORDLADDER_CASE_FOLD={:?}, using {}",
                    raw, defaults.case_fold
                );
                defaults.case_fold
            }),
            Err(_) => defaults.case_fold,
        };

        Self {
            parallel_threshold,
            case_fold,
        }
    }

    /// Apply the configured case folding to a single word.
    pub fn fold(&self, word: &str) -> String {
        if self.case_fold {
            word.to_uppercase()
        } else {
            word.to_string()
        }
    }
}

impl Default for LadderConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            case_fold: true,
        }
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
