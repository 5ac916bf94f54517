//! JSON output adapter

use crate::ast::Document;
use crate::error::{Error, Result};

/// JSON view of a built configuration tree.
///
/// The builder has no text- or JSON-loading path, so the adapter only
/// serializes.
pub struct JsonAdapter;

impl JsonAdapter {
    /// Serialize a document to pretty-printed JSON.
    pub fn serialize(document: &Document) -> Result<String> {
        serde_json::to_string_pretty(document).map_err(|e| Error::Serialize(e.to_string()))
    }
}
