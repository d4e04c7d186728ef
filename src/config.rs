//! Parser configuration.
//!
//! The parser has no behavioral knobs: every parse of the same input yields
//! the same graph. Configuration only shapes diagnostics.

use serde::{Deserialize, Serialize};

/// Default cap on entries dumped per collection at `trace` level.
pub const DEFAULT_COLLECTION_LOG_LIMIT: usize = 32;

/// Diagnostic settings for [`GraphParser`](crate::GraphParser).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Dump edges, main ids and component ids at `trace` level.
    pub log_collections: bool,
    /// Maximum entries per dumped collection.
    pub collection_log_limit: usize,
}

impl ParserConfig {
    /// Enable or disable collection dumps.
    pub fn with_log_collections(mut self, enabled: bool) -> Self {
        self.log_collections = enabled;
        self
    }

    /// Set the per-collection dump cap.
    pub fn with_collection_log_limit(mut self, limit: usize) -> Self {
        self.collection_log_limit = limit;
        self
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            log_collections: false,
            collection_log_limit: DEFAULT_COLLECTION_LOG_LIMIT,
        }
    }
}
