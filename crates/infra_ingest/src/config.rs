//! CSV reader configuration

/// Media types accepted as CSV uploads
pub const CSV_MEDIA_TYPES: &[&str] = &[
    "text/csv",
    "application/csv",
    "application/vnd.ms-excel",
    "text/plain",
];

/// Configuration options for the CSV row parser
///
/// # Example
///
/// ```rust
/// use infra_ingest::CsvParserConfig;
///
/// let config = CsvParserConfig::new().delimiter(b';');
/// assert_eq!(config.delimiter, b';');
/// ```
#[derive(Debug, Clone)]
pub struct CsvParserConfig {
    /// Field delimiter
    pub delimiter: u8,
    /// Quote character understood by the CSV reader
    pub quote: u8,
}

impl CsvParserConfig {
    /// Creates a configuration for comma-separated, double-quoted input
    pub fn new() -> Self {
        Self {
            delimiter: b',',
            quote: b'"',
        }
    }

    /// Sets the field delimiter
    pub fn delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets the quote character
    pub fn quote(mut self, quote: u8) -> Self {
        self.quote = quote;
        self
    }
}

impl Default for CsvParserConfig {
    fn default() -> Self {
        Self::new()
    }
}
