use crate::Result;

use flate2::{read::GzDecoder, write::GzEncoder, Compression};
use std::io::{Read, Write};
use tabula_core::{schema::DocumentSchema, DocumentSerializer};

/// The default [`DocumentSerializer`]: `serde_json` text, gzip for the
/// compressed column.
#[derive(Debug, Clone)]
pub struct JsonSerializer {
    pretty: bool,
    compression: Compression,
}

impl JsonSerializer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes indented JSON text. Off by default.
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn compression(mut self, compression: Compression) -> Self {
        self.compression = compression;
        self
    }
}

impl Default for JsonSerializer {
    fn default() -> Self {
        Self {
            pretty: false,
            compression: Compression::default(),
        }
    }
}

impl DocumentSerializer for JsonSerializer {
    fn serialize_text(&self, doc: &serde_json::Value, _schema: &DocumentSchema) -> Result<String> {
        Ok(if self.pretty {
            serde_json::to_string_pretty(doc)?
        } else {
            serde_json::to_string(doc)?
        })
    }

    fn serialize_compressed(
        &self,
        doc: &serde_json::Value,
        _schema: &DocumentSchema,
    ) -> Result<Vec<u8>> {
        let mut encoder = GzEncoder::new(Vec::new(), self.compression);
        serde_json::to_writer(&mut encoder, doc)?;
        encoder.flush()?;
        Ok(encoder.finish()?)
    }

    fn deserialize_small_text(&self, text: &str) -> Result<serde_json::Value> {
        Ok(serde_json::from_str(text)?)
    }

    fn deserialize_large_text(&self, reader: &mut dyn Read) -> Result<serde_json::Value> {
        Ok(serde_json::from_reader(reader)?)
    }

    fn deserialize_compressed(&self, reader: &mut dyn Read) -> Result<serde_json::Value> {
        Ok(serde_json::from_reader(GzDecoder::new(reader))?)
    }
}
