//! Opaque rows of the externally ingested records table.

/// One row, keyed by column name.
pub type Record = serde_json::Map<String, serde_json::Value>;
