//! Breadth-first shortest paths.

use std::collections::{HashMap, VecDeque};

use tracing::trace;

use crate::adjacency_lists::Graph;

impl Graph {
    /// Fewest-edges path from `from` to `to`, both ends included.
    ///
    /// Edge weights are ignored, even on weighted graphs. Neighbors are
    /// explored in insertion order, so among equally short paths the one
    /// found first by that order wins. Returns an empty path when `to` is
    /// unreachable or `from` is not a node; `shortest_path(x, x)` is `[x]`.
    pub fn shortest_path(&self, from: &str, to: &str) -> Vec<String> {
        if !self.contains_node(from) {
            return Vec::new();
        }

        // predecessor map doubles as the visited set; None marks the start
        let mut visited: HashMap<&str, Option<&str>> = HashMap::new();
        let mut queue: VecDeque<&str> = VecDeque::new();
        visited.insert(from, None);
        queue.push_back(from);

        while let Some(top) = queue.pop_front() {
            for edge in self.neighbors(top) {
                let next = edge.destination.as_str();
                if !visited.contains_key(next) {
                    visited.insert(next, Some(top));
                    queue.push_back(next);
                }
            }
            if top == to {
                break;
            }
        } // loop also ends when the queue drains without reaching `to`
        trace!(from, to, explored = visited.len(), "bfs finished");

        let mut path = Vec::new();
        let mut current = visited.contains_key(to).then_some(to);
        while let Some(node) = current {
            path.push(node.to_string());
            current = visited.get(node).copied().flatten();
        }
        path.reverse();
        path
    }
}
