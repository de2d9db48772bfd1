/// Name of the text JSON column.
pub const JSON_COLUMN: &str = "JSON";

/// Name of the gzip-compressed JSON column.
pub const JSON_BLOB_COLUMN: &str = "JSONBlob";

/// How the non-indexed state of a document is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    #[default]
    TextOnly,
    CompressedOnly,
    MixedPreferText,
    MixedPreferCompressed,

    /// The document is fully described by its indexed columns
    NoJson,
}

impl JsonFormat {
    pub fn has_text(self) -> bool {
        matches!(
            self,
            Self::TextOnly | Self::MixedPreferText | Self::MixedPreferCompressed
        )
    }

    pub fn has_blob(self) -> bool {
        matches!(
            self,
            Self::CompressedOnly | Self::MixedPreferText | Self::MixedPreferCompressed
        )
    }

    pub fn is_mixed(self) -> bool {
        matches!(self, Self::MixedPreferText | Self::MixedPreferCompressed)
    }

    /// Whether text wins when a row carries both representations, and is the
    /// one written.
    pub fn prefers_text(self) -> bool {
        !matches!(self, Self::CompressedOnly | Self::MixedPreferCompressed)
    }

    /// JSON columns a query against this format must return.
    pub fn required_columns(self) -> &'static [&'static str] {
        match self {
            Self::TextOnly => &[JSON_COLUMN],
            Self::CompressedOnly => &[JSON_BLOB_COLUMN],
            Self::MixedPreferText | Self::MixedPreferCompressed => {
                &[JSON_COLUMN, JSON_BLOB_COLUMN]
            }
            Self::NoJson => &[],
        }
    }
}

/// Returns `true` if `name` is one of the JSON storage columns.
pub fn is_json_column(name: &str) -> bool {
    name.eq_ignore_ascii_case(JSON_COLUMN) || name.eq_ignore_ascii_case(JSON_BLOB_COLUMN)
}
