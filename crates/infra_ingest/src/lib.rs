//! Ingestion Infrastructure Layer
//!
//! Adapters that turn uploaded documents into raw rows for the claims
//! pipeline. The domain defines the [`RowParser`](domain_claims::RowParser)
//! port; this crate implements it for CSV using the `csv` crate.
//!
//! # Example
//!
//! ```rust
//! use domain_claims::{Column, Document, RowParser};
//! use infra_ingest::CsvRowParser;
//!
//! let document = Document::new("CLAIM_ID,CITY\n\"7\", 'Pune' \n").with_name("claims.csv");
//! let rows = CsvRowParser::new().parse(&document).unwrap();
//!
//! assert_eq!(rows[0].text(Column::ClaimId), Some("7"));
//! assert_eq!(rows[0].text(Column::City), Some("Pune"));
//! ```

pub mod csv_parser;
pub mod config;

pub use csv_parser::{CsvRowParser, clean_cell};
pub use config::CsvParserConfig;
