//! Subcommand implementations. Each returns the text to print on stdout.

use std::path::Path;

use anyhow::Context;
use serde::Serialize;
use tracing::info;
use wordladder_core::LadderConfig;
use wordladder_graph::{edit_kind, Distance, GraphProcessor, GraphStats};

/// Load a dictionary into a processor and precompute shortest paths.
pub fn load(dictionary: &Path, config: &LadderConfig) -> anyhow::Result<GraphProcessor> {
    let words = wordladder_ingest::word_stream(dictionary, config)?;
    let mut processor = GraphProcessor::with_config(config.clone());
    let count = processor
        .populate_graph_from(words)
        .with_context(|| format!("Failed to read dictionary {}", dictionary.display()))?;
    info!("Loaded {} words from {}", count, dictionary.display());
    processor.shortest_path_precomputation();
    Ok(processor)
}

/// Render the ladder between two words, one step per line.
pub fn path(
    processor: &GraphProcessor,
    config: &LadderConfig,
    from: &str,
    to: &str,
) -> anyhow::Result<String> {
    let from = config.fold(from);
    let to = config.fold(to);
    let ladder = processor.shortest_path(&from, &to)?;

    if ladder.is_empty() {
        return Ok(format!("No ladder from {} to {}", from, to));
    }

    let mut lines = vec![ladder[0].clone()];
    for step in ladder.windows(2) {
        match edit_kind(&step[0], &step[1]) {
            Some(edit) => lines.push(format!("  -> {} ({})", step[1], edit)),
            None => lines.push(format!("  -> {}", step[1])),
        }
    }
    lines.push(format!("distance: {}", ladder.len() - 1));
    Ok(lines.join("\n"))
}

/// Render the shortest distance between two words.
pub fn distance(
    processor: &GraphProcessor,
    config: &LadderConfig,
    from: &str,
    to: &str,
) -> anyhow::Result<String> {
    let distance = processor.shortest_distance(&config.fold(from), &config.fold(to))?;
    Ok(distance.to_string())
}

/// Render the words one edit away from `word`, sorted.
pub fn neighbors(
    processor: &GraphProcessor,
    config: &LadderConfig,
    word: &str,
) -> anyhow::Result<String> {
    let mut words = processor.neighbors(&config.fold(word))?;
    words.sort();
    Ok(words.join("\n"))
}

#[derive(Debug, Serialize)]
struct StatsReport<'a> {
    graph: GraphStats,
    #[serde(skip_serializing_if = "Option::is_none")]
    diameter: Option<Diameter>,
    config: &'a LadderConfig,
}

#[derive(Debug, Serialize)]
struct Diameter {
    from: String,
    to: String,
    distance: Distance,
}

/// Graph statistics as pretty-printed JSON.
pub fn stats(processor: &GraphProcessor) -> anyhow::Result<String> {
    let diameter = processor
        .snapshot()
        .and_then(|index| index.diameter())
        .map(|(from, to, d)| Diameter {
            from,
            to,
            distance: Distance::Steps(d),
        });
    let report = StatsReport {
        graph: processor.graph().stats(),
        diameter,
        config: processor.config(),
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn fixture() -> (GraphProcessor, LadderConfig, tempfile::NamedTempFile) {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "cat\nchat\nwhat\ncheat\nwheat\n\nbag").unwrap();
        let config = LadderConfig::default();
        let processor = load(file.path(), &config).unwrap();
        (processor, config, file)
    }

    #[test]
    fn test_load() {
        let (processor, _config, _file) = fixture();
        assert_eq!(processor.graph().vertex_count(), 6);
        assert_eq!(processor.graph().edge_count(), 5);
    }

    #[test]
    fn test_path_output() {
        let (processor, config, _file) = fixture();
        let out = path(&processor, &config, "cat", "wheat").unwrap();
        assert_eq!(
            out,
            "CAT\n  -> CHAT (insert at 1)\n  -> WHAT (substitute at 0)\n  -> WHEAT (insert at 2)\ndistance: 3"
        );
    }

    #[test]
    fn test_path_unreachable() {
        let (processor, config, _file) = fixture();
        let out = path(&processor, &config, "cat", "bag").unwrap();
        assert_eq!(out, "No ladder from CAT to BAG");
    }

    #[test]
    fn test_distance_output() {
        let (processor, config, _file) = fixture();
        assert_eq!(distance(&processor, &config, "chat", "wheat").unwrap(), "2");
        assert_eq!(
            distance(&processor, &config, "cat", "bag").unwrap(),
            "unreachable"
        );
        assert!(distance(&processor, &config, "cat", "zebra").is_err());
    }

    #[test]
    fn test_neighbors_output() {
        let (processor, config, _file) = fixture();
        assert_eq!(
            neighbors(&processor, &config, "chat").unwrap(),
            "CAT\nCHEAT\nWHAT"
        );
        assert_eq!(neighbors(&processor, &config, "bag").unwrap(), "");
        assert!(neighbors(&processor, &config, "zebra").is_err());
    }

    #[test]
    fn test_stats_output() {
        let (processor, _config, _file) = fixture();
        let json: serde_json::Value = serde_json::from_str(&stats(&processor).unwrap()).unwrap();
        assert_eq!(json["graph"]["node_count"], 6);
        assert_eq!(json["graph"]["isolated_count"], 1);
        assert_eq!(json["diameter"]["distance"]["steps"], 3);
        assert_eq!(json["config"]["case_fold"], true);
    }

    #[test]
    fn test_load_missing_dictionary() {
        let dir = tempfile::tempdir().unwrap();
        let result = load(&dir.path().join("nope.txt"), &LadderConfig::default());
        assert!(result.is_err());
    }
}
