//! Bulk edge loading from `"from,to;from,to"` text.
//!
//! Entries are separated by `;` and fields by `,`. Whitespace around each
//! field is trimmed and quote characters have no special meaning. A single
//! `;` at the very end closes the last entry rather than opening an empty one.
//!
//! Parsing is lenient: an entry with the wrong number of fields (an empty
//! entry counts as one empty field), an empty label or, for weighted lists,
//! a non-integer weight is skipped and counted in the returned
//! [`EdgeListSummary`] instead of failing the load.

use csv::StringRecord;
use serde::Deserialize;
use tracing::debug;

use crate::adjacency_lists::Graph;
use crate::error::Result;

/// Outcome of a bulk load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EdgeListSummary {
    /// Entries inserted into the graph.
    pub added: usize,
    /// Malformed entries that were dropped.
    pub skipped: usize,
}

#[derive(Debug, Deserialize)]
struct EdgePair {
    from: String,
    to: String,
}

#[derive(Debug, Deserialize)]
struct WeightedEdgePair {
    from: String,
    to: String,
    weight: i32,
}

/// Split `edge_list` into trimmed records, one per `;`-separated entry.
fn edge_records(edge_list: &str) -> impl Iterator<Item = StringRecord> + '_ {
    let body = edge_list.trim_end();
    let body = body.strip_suffix(';').unwrap_or(body);
    // blank input has no entries at all
    let entries = (!body.trim().is_empty()).then(|| body.split(';'));

    entries.into_iter().flatten().map(|entry| {
        let mut record: StringRecord = entry.split(',').collect();
        record.trim();
        record
    })
}

fn parse_pair(record: &StringRecord) -> Option<EdgePair> {
    if record.len() != 2 {
        return None;
    }
    let pair: EdgePair = record.deserialize(None).ok()?;
    if pair.from.is_empty() || pair.to.is_empty() {
        return None;
    }
    Some(pair)
}

fn parse_weighted_pair(record: &StringRecord) -> Option<WeightedEdgePair> {
    if record.len() != 3 {
        return None;
    }
    let pair: WeightedEdgePair = record.deserialize(None).ok()?;
    if pair.from.is_empty() || pair.to.is_empty() {
        return None;
    }
    Some(pair)
}

impl Graph {
    /// Add every `from,to` pair in `edge_list` as an unweighted edge.
    ///
    /// Fails up front with `UnsupportedConfiguration` on a weighted graph,
    /// before any edge is inserted.
    pub fn add_edges_from_text(&mut self, edge_list: &str) -> Result<EdgeListSummary> {
        self.ensure_unweighted("add_edges_from_text")?;

        let mut summary = EdgeListSummary::default();
        for record in edge_records(edge_list) {
            match parse_pair(&record) {
                Some(pair) => {
                    self.add_edge(&pair.from, &pair.to)?;
                    summary.added += 1;
                }
                None => {
                    debug!(entry = ?record, "skipping malformed edge entry");
                    summary.skipped += 1;
                }
            }
        }

        debug!(added = summary.added, skipped = summary.skipped, "loaded edge list");
        Ok(summary)
    }

    /// Add every `from,to,weight` triple in `edge_list`, e.g. `"A,B,3;B,C,5"`.
    ///
    /// Valid on any graph, so it never fails.
    pub fn add_weighted_edges_from_text(&mut self, edge_list: &str) -> EdgeListSummary {
        let mut summary = EdgeListSummary::default();
        for record in edge_records(edge_list) {
            match parse_weighted_pair(&record) {
                Some(pair) => {
                    self.add_weighted_edge(&pair.from, &pair.to, pair.weight);
                    summary.added += 1;
                }
                None => {
                    debug!(entry = ?record, "skipping malformed weighted edge entry");
                    summary.skipped += 1;
                }
            }
        }

        debug!(added = summary.added, skipped = summary.skipped, "loaded weighted edge list");
        summary
    }
}
