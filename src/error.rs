//! Error types for graph construction.

use thiserror::Error;

/// Result type alias for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Errors that can occur while building a graph.
///
/// Lookups never produce one of these: a missing node, edge or path is an
/// ordinary `false`, `None` or empty result. Malformed bulk-load entries are
/// skipped and counted rather than reported here.
#[derive(Error, Debug)]
pub enum GraphError {
    /// An unweighted entry point was called on a weighted graph.
    #[error("Unsupported configuration: {operation} is not available on a weighted graph")]
    UnsupportedConfiguration {
        /// Name of the rejected operation.
        operation: &'static str,
    },
}
