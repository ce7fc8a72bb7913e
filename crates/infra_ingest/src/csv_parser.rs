//! CSV row parser
//!
//! Reads the header row and every record as bytes, so that a single bad cell
//! does not fail the whole document: cells that are not valid UTF-8 become
//! [`RawCell::Undecodable`]. Headers must decode.

use csv::{ByteRecord, ReaderBuilder};
use tracing::{debug, instrument};

use domain_claims::{Document, ParseFailure, RawCell, RawRow, RowParser};

use crate::config::{CsvParserConfig, CSV_MEDIA_TYPES};

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Trims a cell and strips one pair of surrounding quote characters
///
/// ```
/// use infra_ingest::clean_cell;
///
/// assert_eq!(clean_cell("  \"Pune\" "), "Pune");
/// assert_eq!(clean_cell("'policy_expired'"), "policy_expired");
/// assert_eq!(clean_cell("\"\"x\"\""), "\"x\"");
/// ```
pub fn clean_cell(raw: &str) -> String {
    let trimmed = raw.trim();
    for quote in ['"', '\''] {
        if trimmed.len() >= 2 && trimmed.starts_with(quote) && trimmed.ends_with(quote) {
            return trimmed[1..trimmed.len() - 1].to_string();
        }
    }
    trimmed.to_string()
}

/// [`RowParser`] for comma-separated exports
#[derive(Debug, Clone, Default)]
pub struct CsvRowParser {
    config: CsvParserConfig,
}

impl CsvRowParser {
    /// Creates a parser with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser with the given configuration
    pub fn with_config(config: CsvParserConfig) -> Self {
        Self { config }
    }

    fn decode_headers(record: &ByteRecord) -> Result<Vec<String>, ParseFailure> {
        record
            .iter()
            .enumerate()
            .map(|(index, bytes)| {
                let text = std::str::from_utf8(bytes).map_err(|_| ParseFailure::UndecodableHeader)?;
                let text = if index == 0 {
                    text.trim_start_matches(BYTE_ORDER_MARK)
                } else {
                    text
                };
                Ok(clean_cell(text))
            })
            .collect()
    }

    fn decode_cell(bytes: &[u8]) -> RawCell {
        match std::str::from_utf8(bytes) {
            Ok(text) => RawCell::Text(clean_cell(text)),
            Err(_) => RawCell::Undecodable(clean_cell(&String::from_utf8_lossy(bytes))),
        }
    }

    /// A blank line: at most one field, holding only whitespace.
    ///
    /// Records made of delimiters alone still become rows, so the
    /// normalizer counts them as dropped.
    fn is_blank(record: &ByteRecord) -> bool {
        record.len() <= 1
            && record
                .iter()
                .all(|field| field.iter().all(|b| b.is_ascii_whitespace()))
    }
}

impl RowParser for CsvRowParser {
    fn format_name(&self) -> &'static str {
        "csv"
    }

    fn accepts(&self, document: &Document) -> bool {
        let by_media_type = document
            .media_type
            .as_deref()
            .map(|media_type| CSV_MEDIA_TYPES.contains(&media_type));
        let by_extension = document.extension().map(|ext| ext == "csv");

        match (by_media_type, by_extension) {
            (Some(true), _) | (_, Some(true)) => true,
            (None, None) => true,
            _ => false,
        }
    }

    #[instrument(skip(self, document), fields(bytes = document.content.len()))]
    fn parse(&self, document: &Document) -> Result<Vec<RawRow>, ParseFailure> {
        let mut reader = ReaderBuilder::new()
            .delimiter(self.config.delimiter)
            .quote(self.config.quote)
            .has_headers(true)
            .flexible(true)
            .from_reader(document.content.as_slice());

        let headers = Self::decode_headers(reader.byte_headers().map_err(map_csv_error)?)?;
        debug!(columns = headers.len(), "Read header row");

        let mut rows = Vec::new();
        for result in reader.byte_records() {
            let record = result.map_err(map_csv_error)?;
            if Self::is_blank(&record) {
                continue;
            }

            let mut row = RawRow::new();
            for (index, header) in headers.iter().enumerate() {
                let cell = record
                    .get(index)
                    .map(Self::decode_cell)
                    .unwrap_or_else(|| RawCell::Text(String::new()));
                row.insert(header, cell);
            }
            rows.push(row);
        }

        debug!(rows = rows.len(), "Parsed CSV document");
        Ok(rows)
    }
}

fn map_csv_error(err: csv::Error) -> ParseFailure {
    match err.position() {
        Some(position) => ParseFailure::Malformed {
            line: position.line(),
            message: err.to_string(),
        },
        None => ParseFailure::Read(err.to_string()),
    }
}
