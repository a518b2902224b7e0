//! CSV options

use crate::error::{CsvError, CsvResult};

/// Options for reading CSV input
#[derive(Debug, Clone)]
pub struct CsvReadOptions {
    /// Field delimiter (default: semicolon)
    pub delimiter: u8,
    /// Quote character (default: double quote)
    pub quote: u8,
    /// Text encoding of the input (default: "utf-8", the only supported one)
    pub encoding: String,
    /// Whether the first record holds the table name
    pub has_table_name: bool,
    /// Whether the first data record holds column titles
    pub has_column_titles: bool,
    /// Whether the first field of each row record holds the row title
    pub has_row_titles: bool,
}

impl Default for CsvReadOptions {
    fn default() -> Self {
        Self {
            delimiter: b';',
            quote: b'"',
            encoding: "utf-8".to_owned(),
            has_table_name: false,
            has_column_titles: true,
            has_row_titles: false,
        }
    }
}

/// Options for writing CSV output
#[derive(Debug, Clone)]
pub struct CsvWriteOptions {
    /// Field delimiter (default: semicolon)
    pub delimiter: u8,
    /// Quote character (default: double quote)
    pub quote: u8,
    /// Text encoding of the output (default: "utf-8", the only supported one)
    pub encoding: String,
    /// Emit a leading record holding the table name
    pub emit_table_name: bool,
    /// Emit a record of column titles before the rows
    pub emit_column_titles: bool,
    /// Emit each row's title as its first field
    pub emit_row_titles: bool,
    /// Line terminator
    pub line_terminator: LineTerminator,
}

impl Default for CsvWriteOptions {
    fn default() -> Self {
        Self {
            delimiter: b';',
            quote: b'"',
            encoding: "utf-8".to_owned(),
            emit_table_name: false,
            emit_column_titles: true,
            emit_row_titles: false,
            line_terminator: LineTerminator::CRLF,
        }
    }
}

/// Line terminator type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineTerminator {
    /// Unix-style (LF)
    LF,
    /// Windows-style (CRLF)
    CRLF,
    /// Mac classic (CR)
    CR,
}

pub(crate) fn ensure_supported_encoding(encoding: &str) -> CsvResult<()> {
    if encoding.eq_ignore_ascii_case("utf-8") || encoding.eq_ignore_ascii_case("utf8") {
        Ok(())
    } else {
        Err(CsvError::UnsupportedEncoding(encoding.to_owned()))
    }
}
