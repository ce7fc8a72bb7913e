//! Row parser port
//!
//! The pipeline does not read tabular text itself. A [`RowParser`] adapter
//! turns an uploaded [`Document`] into [`RawRow`]s or fails with a
//! [`ParseFailure`].
//!
//! ```text
//! Document --RowParser--> Vec<RawRow> --normalize--> Vec<Claim>
//! ```

use std::path::Path;
use thiserror::Error;

use crate::raw_row::RawRow;

/// An uploaded document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    /// File name as provided by the uploader
    pub name: Option<String>,
    /// Declared media type, without parameters
    pub media_type: Option<String>,
    /// Raw bytes
    pub content: Vec<u8>,
}

impl Document {
    /// Creates a document from its content
    pub fn new(content: impl Into<Vec<u8>>) -> Self {
        Self {
            name: None,
            media_type: None,
            content: content.into(),
        }
    }

    /// Sets the file name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the media type. Parameters such as `charset` are stripped.
    pub fn with_media_type(mut self, media_type: impl AsRef<str>) -> Self {
        let essence = media_type
            .as_ref()
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();
        self.media_type = (!essence.is_empty()).then_some(essence);
        self
    }

    /// Returns the lowercase file extension, if the name has one
    pub fn extension(&self) -> Option<String> {
        self.name
            .as_deref()
            .and_then(|name| Path::new(name).extension())
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
    }

    /// Human-readable description of the document's format
    pub fn describe_format(&self) -> String {
        match (&self.media_type, self.extension()) {
            (Some(media_type), _) => media_type.clone(),
            (None, Some(ext)) => format!(".{ext}"),
            (None, None) => "unknown".to_string(),
        }
    }
}

/// Failure reported by a row parser
#[derive(Debug, Error)]
pub enum ParseFailure {
    #[error("Header row is not valid text")]
    UndecodableHeader,

    #[error("Malformed record at line {line}: {message}")]
    Malformed { line: u64, message: String },

    #[error("Read error: {0}")]
    Read(String),
}

/// Converts documents into raw rows
pub trait RowParser {
    /// Name of the format handled, e.g. `"csv"`
    fn format_name(&self) -> &'static str;

    /// Whether the document's name or media type is one this parser handles
    fn accepts(&self, document: &Document) -> bool;

    /// Parses the document into rows, in document order
    fn parse(&self, document: &Document) -> Result<Vec<RawRow>, ParseFailure>;
}
