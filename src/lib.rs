//! In-memory graph keyed by string labels.
//!
//! Supports directed/undirected and weighted/unweighted graphs, bulk edge
//! loading from `"A,B;B,C"` style text, adjacency and weight lookups, and
//! fewest-edges shortest paths via breadth-first search.
//!
//! ```
//! use graph_paths::Graph;
//!
//! let mut graph = Graph::new(false, false);
//! graph.add_edges_from_text("A,B;B,C;A,C").unwrap();
//! assert_eq!(graph.shortest_path("A", "C"), vec!["A", "C"]);
//! ```

pub mod adjacency_lists;
pub mod edge_parsing;
pub mod error;
pub mod graph_analysis;

pub use adjacency_lists::{Edge, Graph};
pub use edge_parsing::EdgeListSummary;
pub use error::{GraphError, Result};
