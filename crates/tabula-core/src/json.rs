//! The document serializer collaborator.
//!
//! Documents cross this boundary as `serde_json::Value` so that one
//! serializer object can serve every document type; the typed conversion
//! happens in the document's own `from_json` / `to_json`.

use crate::{schema::DocumentSchema, Result};

use std::io::Read;

pub trait DocumentSerializer: Send + Sync + std::fmt::Debug {
    /// Serializes a document to JSON text for the `JSON` column.
    fn serialize_text(&self, doc: &serde_json::Value, schema: &DocumentSchema) -> Result<String>;

    /// Serializes a document to compressed bytes for the `JSONBlob` column.
    fn serialize_compressed(
        &self,
        doc: &serde_json::Value,
        schema: &DocumentSchema,
    ) -> Result<Vec<u8>>;

    /// Parses JSON text already held in memory.
    fn deserialize_small_text(&self, text: &str) -> Result<serde_json::Value>;

    /// Parses JSON text from a character stream.
    fn deserialize_large_text(&self, reader: &mut dyn Read) -> Result<serde_json::Value>;

    /// Decompresses and parses a `JSONBlob` value.
    fn deserialize_compressed(&self, reader: &mut dyn Read) -> Result<serde_json::Value>;
}
