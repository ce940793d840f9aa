//! Graph processor — builds the word graph and serves shortest-path queries.
//!
//! Tokens are inserted as vertices in order; each new word is tested against
//! every word already present and connected to the adjacent ones. Queries
//! are answered from a [`PathIndex`] snapshot that the caller refreshes with
//! [`GraphProcessor::shortest_path_precomputation`] after populating.

use std::sync::Arc;

use tracing::{debug, info, warn};
use wordladder_core::{Error, LadderConfig, Result};

use crate::adjacency;
use crate::graph::Graph;
use crate::path_index::{Distance, PathIndex};

/// Word graph plus the most recent shortest-path snapshot.
pub struct GraphProcessor {
    graph: Graph<String>,
    index: Option<Arc<PathIndex<String>>>,
    config: LadderConfig,
}

impl GraphProcessor {
    pub fn new() -> Self {
        Self::with_config(LadderConfig::default())
    }

    pub fn with_config(config: LadderConfig) -> Self {
        Self {
            graph: Graph::new(),
            index: None,
            config,
        }
    }

    /// Add normalized words to the graph, discovering edges for each new one.
    ///
    /// Duplicates and empty tokens are skipped. Returns the total number of
    /// vertices in the graph. Does not refresh the shortest-path snapshot.
    pub fn populate_graph<I, S>(&mut self, tokens: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut added = 0usize;
        let mut linked = 0usize;

        for token in tokens {
            let word: String = token.into();
            if word.is_empty() {
                warn!("Skipping empty token");
                continue;
            }
            if !self.graph.add_vertex(word.clone()) {
                debug!("Duplicate word skipped: {}", word);
                continue;
            }
            added += 1;

            let adjacent: Vec<String> = self
                .graph
                .vertices()
                .filter(|existing| adjacency::is_adjacent(existing, &word))
                .cloned()
                .collect();
            for existing in adjacent {
                if self.graph.add_edge(existing.as_str(), word.as_str()) {
                    linked += 1;
                    debug!("Edge {} - {}", existing, word);
                }
            }
        }

        info!(
            "Populated {} new words with {} new edges; graph has {} vertices, {} edges",
            added,
            linked,
            self.graph.vertex_count(),
            self.graph.edge_count()
        );
        self.graph.vertex_count()
    }

    /// Like [`populate_graph`](Self::populate_graph) for a fallible token
    /// source. The first ingestion error is returned and nothing is inserted.
    pub fn populate_graph_from<I>(&mut self, tokens: I) -> Result<usize>
    where
        I: IntoIterator<Item = Result<String>>,
    {
        let words = tokens.into_iter().collect::<Result<Vec<_>>>()?;
        Ok(self.populate_graph(words))
    }

    /// Rebuild the shortest-path snapshot from the current graph.
    pub fn shortest_path_precomputation(&mut self) {
        let index = PathIndex::precompute(&self.graph, self.config.parallel_threshold);
        self.index = Some(Arc::new(index));
    }

    /// Number of edges on a shortest path between two words.
    pub fn shortest_distance(&self, word1: &str, word2: &str) -> Result<Distance> {
        self.fresh_index()?.distance(word1, word2)
    }

    /// Words on a shortest path from `word1` to `word2`, both included.
    ///
    /// Empty when the words are not connected, `[word1]` when they are equal.
    pub fn shortest_path(&self, word1: &str, word2: &str) -> Result<Vec<String>> {
        self.fresh_index()?.path(word1, word2)
    }

    /// Words one edit away from `word` in the graph, in no particular order.
    ///
    /// Reads the live graph, so no precomputation is needed.
    pub fn neighbors(&self, word: &str) -> Result<Vec<String>> {
        if word.is_empty() {
            return Err(Error::InvalidVertex("empty word".into()));
        }
        if !self.graph.contains(word) {
            return Err(Error::InvalidVertex(word.to_string()));
        }
        Ok(self
            .graph
            .neighbors(word)
            .map(|words| words.into_iter().cloned().collect::<Vec<_>>())
            .unwrap_or_default())
    }

    /// The last computed snapshot, fresh or not. Compare its revision with
    /// `graph().revision()` before trusting it.
    pub fn snapshot(&self) -> Option<Arc<PathIndex<String>>> {
        self.index.clone()
    }

    pub fn graph(&self) -> &Graph<String> {
        &self.graph
    }

    /// Direct graph access. Any mutation makes the snapshot stale.
    pub fn graph_mut(&mut self) -> &mut Graph<String> {
        &mut self.graph
    }

    pub fn config(&self) -> &LadderConfig {
        &self.config
    }

    fn fresh_index(&self) -> Result<&PathIndex<String>> {
        let index = self.index.as_deref().ok_or(Error::MissingPrecomputation)?;
        if index.revision() != self.graph.revision() {
            return Err(Error::StalePrecomputation {
                graph: self.graph.revision(),
                index: index.revision(),
            });
        }
        Ok(index)
    }
}

impl Default for GraphProcessor {
    fn default() -> Self {
        Self::new()
    }
}
