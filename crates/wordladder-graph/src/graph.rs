//! Undirected, unweighted graph over opaque vertex values, backed by petgraph.
//!
//! Vertices live in a `StableUnGraph` arena: each one gets a `NodeIndex`
//! handle at insertion time and keeps it until removed, even when other
//! vertices are removed. Adjacency is the arena's edge set, so there are
//! no owning references between vertices.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

use petgraph::stable_graph::{NodeIndex, StableUnGraph};
use serde::{Deserialize, Serialize};

/// Undirected, unweighted graph with unique vertices.
#[derive(Debug, Clone)]
pub struct Graph<V> {
    inner: StableUnGraph<V, ()>,
    handles: HashMap<V, NodeIndex>,
    /// Live handles in insertion order.
    order: Vec<NodeIndex>,
    revision: u64,
}

impl<V> Graph<V>
where
    V: Clone + Eq + Hash,
{
    pub fn new() -> Self {
        Self {
            inner: StableUnGraph::default(),
            handles: HashMap::new(),
            order: Vec::new(),
            revision: 0,
        }
    }

    /// Insert a vertex. Returns false if it is already present.
    pub fn add_vertex(&mut self, vertex: V) -> bool {
        if self.handles.contains_key(&vertex) {
            return false;
        }
        let handle = self.inner.add_node(vertex.clone());
        self.handles.insert(vertex, handle);
        self.order.push(handle);
        self.revision += 1;
        true
    }

    /// Remove a vertex and every edge touching it. Returns false if absent.
    pub fn remove_vertex<Q>(&mut self, vertex: &Q) -> bool
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let Some(handle) = self.handles.remove(vertex) else {
            return false;
        };
        self.order.retain(|&h| h != handle);
        self.inner.remove_node(handle);
        self.revision += 1;
        true
    }

    /// Connect two distinct, present vertices. Returns false if either is
    /// absent, they are equal, or the edge already exists.
    pub fn add_edge<Q>(&mut self, u: &Q, v: &Q) -> bool
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let Some((a, b)) = self.distinct_pair(u, v) else {
            return false;
        };
        if self.inner.contains_edge(a, b) {
            return false;
        }
        self.inner.add_edge(a, b, ());
        self.revision += 1;
        true
    }

    /// Disconnect two vertices. Returns false if there was no such edge.
    pub fn remove_edge<Q>(&mut self, u: &Q, v: &Q) -> bool
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let Some((a, b)) = self.distinct_pair(u, v) else {
            return false;
        };
        let Some(edge) = self.inner.find_edge(a, b) else {
            return false;
        };
        self.inner.remove_edge(edge);
        self.revision += 1;
        true
    }

    /// Whether `u` and `v` are distinct, present and directly connected.
    pub fn is_adjacent<Q>(&self, u: &Q, v: &Q) -> bool
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.distinct_pair(u, v)
            .is_some_and(|(a, b)| self.inner.contains_edge(a, b))
    }

    /// Vertices directly connected to `vertex`, or `None` if it is absent.
    pub fn neighbors<Q>(&self, vertex: &Q) -> Option<Vec<&V>>
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let handle = self.handle(vertex)?;
        Some(self.neighbor_handles(handle).map(|n| &self.inner[n]).collect())
    }

    /// All vertices in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = &V> + '_ {
        self.order.iter().map(move |&h| &self.inner[h])
    }

    /// Whether `vertex` is in the graph.
    pub fn contains<Q>(&self, vertex: &Q) -> bool
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.handles.contains_key(vertex)
    }

    /// Stable arena handle of a vertex.
    pub fn handle<Q>(&self, vertex: &Q) -> Option<NodeIndex>
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.handles.get(vertex).copied()
    }

    /// Live handles in insertion order.
    pub fn handles(&self) -> &[NodeIndex] {
        &self.order
    }

    /// Vertex stored under `handle`, if it is live.
    pub fn vertex(&self, handle: NodeIndex) -> Option<&V> {
        self.inner.node_weight(handle)
    }

    pub fn neighbor_handles(&self, handle: NodeIndex) -> impl Iterator<Item = NodeIndex> + '_ {
        self.inner.neighbors(handle)
    }

    pub fn vertex_count(&self) -> usize {
        self.inner.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.inner.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Counter bumped by every mutation that took effect.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Get graph statistics.
    pub fn stats(&self) -> GraphStats {
        let isolated_count = self
            .order
            .iter()
            .filter(|&&h| self.inner.neighbors(h).next().is_none())
            .count();
        GraphStats {
            node_count: self.vertex_count(),
            edge_count: self.edge_count(),
            isolated_count,
            revision: self.revision,
        }
    }

    fn distinct_pair<Q>(&self, u: &Q, v: &Q) -> Option<(NodeIndex, NodeIndex)>
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let a = self.handle(u)?;
        let b = self.handle(v)?;
        (a != b).then_some((a, b))
    }
}

impl<V> Default for Graph<V>
where
    V: Clone + Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphStats {
    pub node_count: usize,
    pub edge_count: usize,
    /// Vertices with no neighbours.
    pub isolated_count: usize,
    pub revision: u64,
}
