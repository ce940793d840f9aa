//! All-pairs shortest paths (Floyd–Warshall) with predecessor tracking.
//!
//! A [`PathIndex`] is an immutable snapshot of a [`Graph`]: it copies the
//! vertex list in insertion order, assigns each vertex a dense matrix
//! position, and stores two row-major V×V matrices:
//!
//! - `distances[i][j]`: hop count of a shortest path, [`UNREACHABLE`] if none.
//! - `predecessors[i][j]`: position of the vertex just before `j` on a
//!   shortest path from `i`; `i` itself on the diagonal; [`NO_PREDECESSOR`]
//!   when unreachable.
//!
//! The snapshot records the graph revision it was built from so callers can
//! tell when it no longer describes the graph.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt::Display;
use std::hash::Hash;
use std::time::Instant;

use petgraph::stable_graph::NodeIndex;
use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info};
use wordladder_core::{Error, Result};

use crate::graph::Graph;

/// Distance matrix sentinel for vertex pairs with no connecting path.
pub const UNREACHABLE: u32 = u32::MAX;
/// Predecessor matrix sentinel for vertex pairs with no connecting path.
pub const NO_PREDECESSOR: u32 = u32::MAX;

/// Shortest-path length between two known vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Distance {
    /// Number of edges on a shortest path.
    Steps(u32),
    /// Both vertices exist but no path connects them.
    Unreachable,
}

impl Distance {
    fn from_raw(raw: u32) -> Self {
        if raw == UNREACHABLE {
            Self::Unreachable
        } else {
            Self::Steps(raw)
        }
    }

    pub fn steps(self) -> Option<u32> {
        match self {
            Self::Steps(n) => Some(n),
            Self::Unreachable => None,
        }
    }

    pub fn is_reachable(self) -> bool {
        matches!(self, Self::Steps(_))
    }
}

impl std::fmt::Display for Distance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Steps(n) => write!(f, "{}", n),
            Self::Unreachable => write!(f, "unreachable"),
        }
    }
}

/// Precomputed all-pairs shortest paths over one graph revision.
#[derive(Debug, Clone, PartialEq)]
pub struct PathIndex<V>
where
    V: Eq + Hash,
{
    vertices: Vec<V>,
    positions: HashMap<V, usize>,
    distances: Vec<u32>,
    predecessors: Vec<u32>,
    revision: u64,
}

impl<V> PathIndex<V>
where
    V: Clone + Eq + Hash,
{
    /// Snapshot `graph` and run Floyd–Warshall over it.
    ///
    /// Rows are relaxed on the rayon pool once the graph has at least
    /// `parallel_threshold` vertices. Both paths produce identical matrices.
    pub fn precompute(graph: &Graph<V>, parallel_threshold: usize) -> Self {
        let started = Instant::now();
        let handles = graph.handles();
        let n = handles.len();

        let vertices: Vec<V> = graph.vertices().cloned().collect();
        let positions: HashMap<V, usize> = vertices
            .iter()
            .enumerate()
            .map(|(pos, v)| (v.clone(), pos))
            .collect();
        let slots: HashMap<NodeIndex, usize> = handles
            .iter()
            .enumerate()
            .map(|(pos, &h)| (h, pos))
            .collect();

        let mut distances = vec![UNREACHABLE; n * n];
        let mut predecessors = vec![NO_PREDECESSOR; n * n];

        for (i, &handle) in handles.iter().enumerate() {
            distances[i * n + i] = 0;
            predecessors[i * n + i] = i as u32;
            for neighbor in graph.neighbor_handles(handle) {
                if let Some(&j) = slots.get(&neighbor) {
                    distances[i * n + j] = 1;
                    predecessors[i * n + j] = i as u32;
                }
            }
        }

        let parallel = n >= parallel_threshold;
        for k in 0..n {
            // Row k is fixed during round k: d[k][k] = 0 so no entry in it
            // can improve. Copying it lets every other row update in place.
            let via_distances = distances[k * n..(k + 1) * n].to_vec();
            let via_predecessors = predecessors[k * n..(k + 1) * n].to_vec();

            if parallel {
                distances
                    .par_chunks_mut(n)
                    .zip(predecessors.par_chunks_mut(n))
                    .for_each(|(dist_row, pred_row)| {
                        relax_row(k, dist_row, pred_row, &via_distances, &via_predecessors)
                    });
            } else {
                distances
                    .chunks_mut(n)
                    .zip(predecessors.chunks_mut(n))
                    .for_each(|(dist_row, pred_row)| {
                        relax_row(k, dist_row, pred_row, &via_distances, &via_predecessors)
                    });
            }
        }

        info!(
            "Precomputed shortest paths for {} vertices ({} edges) in {:?}{}",
            n,
            graph.edge_count(),
            started.elapsed(),
            if parallel { " [parallel]" } else { "" }
        );

        Self {
            vertices,
            positions,
            distances,
            predecessors,
            revision: graph.revision(),
        }
    }

    /// Shortest-path length from `from` to `to`.
    pub fn distance<Q>(&self, from: &Q, to: &Q) -> Result<Distance>
    where
        V: Borrow<Q>,
        Q: Hash + Eq + Display + ?Sized,
    {
        let i = self.position(from)?;
        let j = self.position(to)?;
        Ok(Distance::from_raw(self.distances[i * self.len() + j]))
    }

    /// Vertices on a shortest path from `from` to `to`, both included.
    ///
    /// `[from]` when both are the same vertex, empty when unreachable. The
    /// chain is always walked from the lower-positioned endpoint so that
    /// `path(b, a)` is `path(a, b)` reversed, even among tied paths.
    pub fn path<Q>(&self, from: &Q, to: &Q) -> Result<Vec<V>>
    where
        V: Borrow<Q>,
        Q: Hash + Eq + Display + ?Sized,
    {
        let i = self.position(from)?;
        let j = self.position(to)?;
        if i == j {
            return Ok(vec![self.vertices[i].clone()]);
        }

        let (origin, target) = if i < j { (i, j) } else { (j, i) };
        let n = self.len();
        let hops = self.distances[origin * n + target];
        if hops == UNREACHABLE {
            return Ok(Vec::new());
        }

        // Every lookup stays on the origin's row.
        let pred_row = &self.predecessors[origin * n..(origin + 1) * n];
        let mut walk = Vec::with_capacity(hops as usize + 1);
        let mut cursor = target;
        walk.push(cursor);
        for _ in 0..hops {
            cursor = pred_row[cursor] as usize;
            walk.push(cursor);
        }
        debug_assert_eq!(cursor, origin);

        // `walk` runs target → origin.
        if i == origin {
            walk.reverse();
        }
        debug!("Reconstructed {}-hop path", hops);

        Ok(walk.into_iter().map(|p| self.vertices[p].clone()).collect())
    }

    /// The pair of distinct vertices with the longest finite shortest path.
    pub fn diameter(&self) -> Option<(V, V, u32)> {
        let n = self.len();
        let mut best: Option<(usize, usize, u32)> = None;
        for i in 0..n {
            for j in (i + 1)..n {
                let d = self.distances[i * n + j];
                if d != UNREACHABLE && best.map_or(true, |(_, _, b)| d > b) {
                    best = Some((i, j, d));
                }
            }
        }
        best.map(|(i, j, d)| (self.vertices[i].clone(), self.vertices[j].clone(), d))
    }

    /// Dense matrix position of a vertex.
    pub fn position<Q>(&self, vertex: &Q) -> Result<usize>
    where
        V: Borrow<Q>,
        Q: Hash + Eq + Display + ?Sized,
    {
        self.positions
            .get(vertex)
            .copied()
            .ok_or_else(|| Error::UnknownWord(vertex.to_string()))
    }

    /// Indexed vertices, ordered by matrix position.
    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Graph revision this snapshot was built from.
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

/// Relax one row of the matrices through intermediate vertex `k`.
fn relax_row(
    k: usize,
    dist_row: &mut [u32],
    pred_row: &mut [u32],
    via_distances: &[u32],
    via_predecessors: &[u32],
) {
    let to_k = dist_row[k];
    if to_k == UNREACHABLE {
        return;
    }
    for (j, &from_k) in via_distances.iter().enumerate() {
        if from_k == UNREACHABLE {
            continue;
        }
        let candidate = to_k + from_k;
        if candidate < dist_row[j] {
            dist_row[j] = candidate;
            pred_row[j] = via_predecessors[j];
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Graph from a vertex list and an edge list.
    fn build(words: &[&str], edges: &[(&str, &str)]) -> Graph<String> {
        let mut graph = Graph::new();
        for w in words {
            graph.add_vertex(w.to_string());
        }
        for (a, b) in edges {
            assert!(graph.add_edge(*a, *b), "edge {}-{}", a, b);
        }
        graph
    }

    fn ladder() -> Graph<String> {
        build(
            &["CAT", "CHAT", "CHEAT", "WHAT", "WHEAT", "BAG"],
            &[
                ("CAT", "CHAT"),
                ("CHAT", "WHAT"),
                ("CHAT", "CHEAT"),
                ("WHAT", "WHEAT"),
            ],
        )
    }

    #[test]
    fn test_distances() {
        let index = PathIndex::precompute(&ladder(), usize::MAX);
        assert_eq!(index.distance("CHAT", "WHEAT").unwrap(), Distance::Steps(2));
        assert_eq!(index.distance("CHEAT", "CHAT").unwrap(), Distance::Steps(1));
        assert_eq!(index.distance("CAT", "WHEAT").unwrap(), Distance::Steps(3));
        assert_eq!(index.distance("CAT", "CAT").unwrap(), Distance::Steps(0));
        assert_eq!(index.distance("CAT", "BAG").unwrap(), Distance::Unreachable);
    }

    #[test]
    fn test_paths() {
        let index = PathIndex::precompute(&ladder(), usize::MAX);
        assert_eq!(index.path("CHAT", "WHEAT").unwrap(), ["CHAT", "WHAT", "WHEAT"]);
        assert_eq!(
            index.path("CAT", "WHEAT").unwrap(),
            ["CAT", "CHAT", "WHAT", "WHEAT"]
        );
        assert_eq!(
            index.path("WHEAT", "CAT").unwrap(),
            ["WHEAT", "WHAT", "CHAT", "CAT"]
        );
        assert_eq!(index.path("CHEAT", "CHEAT").unwrap(), ["CHEAT"]);
        assert!(index.path("CAT", "BAG").unwrap().is_empty());
    }

    #[test]
    fn test_unknown_word() {
        let index = PathIndex::precompute(&ladder(), usize::MAX);
        assert!(matches!(
            index.distance("CAT", "DOG"),
            Err(Error::UnknownWord(w)) if w == "DOG"
        ));
        assert!(matches!(index.path("DOG", "CAT"), Err(Error::UnknownWord(_))));
    }

    #[test]
    fn test_tied_paths_are_mirror_images() {
        // Square: A-B-D and A-C-D are both shortest.
        let graph = build(
            &["A", "B", "C", "D"],
            &[("A", "B"), ("A", "C"), ("B", "D"), ("C", "D")],
        );
        let index = PathIndex::precompute(&graph, usize::MAX);
        let forward = index.path("A", "D").unwrap();
        let mut backward = index.path("D", "A").unwrap();
        backward.reverse();
        assert_eq!(forward.len(), 3);
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        // A long cycle with chords, large enough to exercise rayon.
        let words: Vec<String> = (0..40).map(|i| format!("V{}", i)).collect();
        let mut graph = Graph::new();
        for w in &words {
            graph.add_vertex(w.clone());
        }
        for i in 0..words.len() {
            graph.add_edge(&words[i], &words[(i + 1) % words.len()]);
            if i % 7 == 0 {
                graph.add_edge(&words[i], &words[(i + 13) % words.len()]);
            }
        }
        let sequential = PathIndex::precompute(&graph, usize::MAX);
        let parallel = PathIndex::precompute(&graph, 0);
        assert_eq!(sequential, parallel);
    }

    #[test]
    fn test_precompute_is_idempotent() {
        let graph = ladder();
        let first = PathIndex::precompute(&graph, usize::MAX);
        let second = PathIndex::precompute(&graph, usize::MAX);
        assert_eq!(first, second);
        assert_eq!(first.revision(), graph.revision());
    }

    #[test]
    fn test_empty_graph() {
        let graph: Graph<String> = Graph::new();
        let index = PathIndex::precompute(&graph, 0);
        assert!(index.is_empty());
        assert!(index.diameter().is_none());
        assert!(matches!(index.distance("A", "B"), Err(Error::UnknownWord(_))));
    }

    #[test]
    fn test_positions_follow_insertion_order_after_removal() {
        let mut graph = ladder();
        graph.remove_vertex("CHEAT");
        let index = PathIndex::precompute(&graph, usize::MAX);
        assert_eq!(index.vertices(), ["CAT", "CHAT", "WHAT", "WHEAT", "BAG"]);
        assert_eq!(index.position("WHAT").unwrap(), 2);
        assert_eq!(index.distance("CAT", "WHEAT").unwrap(), Distance::Steps(3));
    }

    #[test]
    fn test_diameter() {
        let index = PathIndex::precompute(&ladder(), usize::MAX);
        let (a, b, d) = index.diameter().unwrap();
        assert_eq!(d, 3);
        assert_eq!((a.as_str(), b.as_str()), ("CAT", "WHEAT"));
    }

    #[test]
    fn test_distance_display() {
        assert_eq!(Distance::Steps(3).to_string(), "3");
        assert_eq!(Distance::Unreachable.to_string(), "unreachable");
        assert_eq!(Distance::Steps(2).steps(), Some(2));
        assert!(!Distance::Unreachable.is_reachable());
    }
}
