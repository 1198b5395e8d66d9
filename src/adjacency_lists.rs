//! Adjacency-list storage: construction, edge insertion and lookups.

use std::collections::HashMap;

use crate::error::{GraphError, Result};

/// An outgoing edge: where it goes and what it costs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    pub destination: String,
    pub weight: i32,
}

/// Graph stored as node label -> outgoing edges in insertion order.
///
/// `directed` and `weighted` are fixed for the lifetime of the graph.
/// Edges are only ever added.
#[derive(Debug, Clone)]
pub struct Graph {
    adjacency: HashMap<String, Vec<Edge>>,
    directed: bool,
    weighted: bool,
}

impl Graph {
    pub fn new(directed: bool, weighted: bool) -> Self {
        Self {
            adjacency: HashMap::new(),
            directed,
            weighted,
        }
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    pub fn is_weighted(&self) -> bool {
        self.weighted
    }

    /// Add an edge with weight 1.
    ///
    /// Rejected with [`GraphError::UnsupportedConfiguration`] on a weighted
    /// graph; use [`Graph::add_weighted_edge`] there instead.
    pub fn add_edge(&mut self, from: &str, to: &str) -> Result<()> {
        self.ensure_unweighted("add_edge")?;
        self.add_weighted_edge(from, to, 1);
        Ok(())
    }

    /// Add an edge carrying `weight`, mirrored when the graph is undirected.
    ///
    /// Works on any graph; the weighted flag only gates [`Graph::add_edge`].
    pub fn add_weighted_edge(&mut self, from: &str, to: &str, weight: i32) {
        self.add_one_way(from, to, weight);
        if !self.directed {
            self.add_one_way(to, from, weight);
        }
    }

    fn add_one_way(&mut self, origin: &str, destination: &str, weight: i32) {
        self.adjacency
            .entry(origin.to_string())
            .or_default()
            .push(Edge {
                destination: destination.to_string(),
                weight,
            });
        // destination becomes a known node even with no outgoing edges
        if !self.adjacency.contains_key(destination) {
            self.adjacency.insert(destination.to_string(), Vec::new());
        }
    }

    pub(crate) fn ensure_unweighted(&self, operation: &'static str) -> Result<()> {
        if self.weighted {
            return Err(GraphError::UnsupportedConfiguration { operation });
        }
        Ok(())
    }

    /// True if there is a direct edge `from -> to`.
    pub fn is_adjacent(&self, from: &str, to: &str) -> bool {
        self.neighbors(from).iter().any(|edge| edge.destination == to)
    }

    /// Weight of the first inserted edge `from -> to`, if any.
    ///
    /// Later duplicates of the same pair are never visible here.
    pub fn weight(&self, from: &str, to: &str) -> Option<i32> {
        self.neighbors(from)
            .iter()
            .find(|edge| edge.destination == to)
            .map(|edge| edge.weight)
    }

    /// Outgoing edges of `node` in insertion order (empty for unknown nodes).
    pub fn neighbors(&self, node: &str) -> &[Edge] {
        self.adjacency.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains_node(&self, node: &str) -> bool {
        self.adjacency.contains_key(node)
    }

    /// All node labels, sorted.
    pub fn nodes(&self) -> Vec<&str> {
        let mut nodes: Vec<&str> = self.adjacency.keys().map(String::as_str).collect();
        nodes.sort_unstable();
        nodes
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of stored edges. An undirected edge is stored, and counted, twice.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_edge_undirected_mirrors() {
        let mut graph = Graph::new(false, false);
        graph.add_edge("A", "B").unwrap();

        assert!(graph.is_adjacent("A", "B"));
        assert!(graph.is_adjacent("B", "A"));
        assert_eq!(graph.weight("A", "B"), Some(1));
        assert_eq!(graph.weight("B", "A"), Some(1));
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn test_add_edge_directed_one_way() {
        let mut graph = Graph::new(true, false);
        assert!(graph.is_directed());
        assert!(!graph.is_weighted());
        graph.add_edge("A", "B").unwrap();

        assert!(graph.is_adjacent("A", "B"));
        assert!(!graph.is_adjacent("B", "A"));
        assert_eq!(graph.weight("B", "A"), None);
        assert!(graph.contains_node("B")); // destination is still a node
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_unweighted_insert_rejected_on_weighted_graph() {
        let mut graph = Graph::new(false, true);
        let err = graph.add_edge("A", "B").unwrap_err();

        assert!(matches!(
            err,
            GraphError::UnsupportedConfiguration { operation: "add_edge" }
        ));
        assert_eq!(graph.node_count(), 0); // nothing inserted
    }

    #[test]
    fn test_weighted_insert_works_on_any_graph() {
        let mut weighted = Graph::new(false, true);
        weighted.add_weighted_edge("A", "B", 7);
        assert_eq!(weighted.weight("A", "B"), Some(7));
        assert_eq!(weighted.weight("B", "A"), Some(7));

        let mut unweighted = Graph::new(true, false);
        unweighted.add_weighted_edge("A", "B", 4);
        assert_eq!(unweighted.weight("A", "B"), Some(4));
    }

    #[test]
    fn test_duplicate_edge_first_weight_wins() {
        let mut graph = Graph::new(true, true);
        graph.add_weighted_edge("A", "B", 3);
        graph.add_weighted_edge("A", "B", 9);

        assert!(graph.is_adjacent("A", "B"));
        assert_eq!(graph.weight("A", "B"), Some(3));
        assert_eq!(graph.neighbors("A").len(), 2);
    }

    #[test]
    fn test_lookups_on_unknown_nodes() {
        let graph = Graph::new(false, false);
        assert!(!graph.is_adjacent("X", "Y"));
        assert_eq!(graph.weight("X", "Y"), None);
        assert!(graph.neighbors("X").is_empty());
        assert!(!graph.contains_node("X"));
    }

    #[test]
    fn test_labels_are_case_sensitive() {
        let mut graph = Graph::new(false, false);
        graph.add_edge("a", "B").unwrap();

        assert!(graph.is_adjacent("a", "B"));
        assert!(!graph.is_adjacent("A", "B"));
        assert!(!graph.is_adjacent("a", "b"));
    }

    #[test]
    fn test_neighbors_keep_insertion_order() {
        let mut graph = Graph::new(true, false);
        graph.add_edge("A", "C").unwrap();
        graph.add_edge("A", "B").unwrap();
        graph.add_edge("A", "D").unwrap();

        let destinations: Vec<&str> = graph
            .neighbors("A")
            .iter()
            .map(|edge| edge.destination.as_str())
            .collect();
        assert_eq!(destinations, vec!["C", "B", "D"]);
        assert_eq!(graph.nodes(), vec!["A", "B", "C", "D"]);
    }
}
