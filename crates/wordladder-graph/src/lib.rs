//! Word Ladder Graph — edit-distance-one word graph with precomputed
//! all-pairs shortest paths.
//!
//! [`GraphProcessor`] is the entry point: feed it normalized words, run the
//! precomputation, then query distances and ladders between words.

pub mod adjacency;
pub mod graph;
pub mod path_index;
pub mod processor;

pub use adjacency::{edit_kind, is_adjacent, Edit};
pub use graph::{Graph, GraphStats};
pub use path_index::{Distance, PathIndex, UNREACHABLE};
pub use processor::GraphProcessor;
