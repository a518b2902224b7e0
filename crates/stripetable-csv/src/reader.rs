//! CSV reader

use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use crate::error::{CsvError, CsvResult};
use crate::options::{ensure_supported_encoding, CsvReadOptions};
use stripetable_core::{Orientation, StripeKey, Table};

/// CSV reader
pub struct CsvReader;

impl CsvReader {
    /// Read a CSV file into a table
    pub fn read_file<T, P>(path: P, options: &CsvReadOptions) -> CsvResult<Table<T>>
    where
        T: FromStr,
        T::Err: fmt::Display,
        P: AsRef<Path>,
    {
        let file = File::open(path)?;
        Self::read(file, options)
    }

    /// Read CSV from a reader into a table
    ///
    /// Elements are parsed with [`FromStr`]. An empty field produces no
    /// cell, and records may be ragged; short records simply leave the
    /// trailing cells unmaterialized.
    pub fn read<T, R>(reader: R, options: &CsvReadOptions) -> CsvResult<Table<T>>
    where
        T: FromStr,
        T::Err: fmt::Display,
        R: Read,
    {
        ensure_supported_encoding(&options.encoding)?;
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(options.delimiter)
            .quote(options.quote)
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let mut table = Table::new("table");
        let mut records = csv_reader.records();

        if options.has_table_name {
            match records.next() {
                Some(record) => {
                    let record = record?;
                    if let Some(name) = record.get(0) {
                        table.set_name(name)?;
                    }
                }
                None => return Ok(table),
            }
        }

        if options.has_column_titles {
            match records.next() {
                Some(record) => {
                    let record = record?;
                    let skip = usize::from(options.has_row_titles);
                    for (column, title) in record.iter().skip(skip).enumerate() {
                        let title = if title.is_empty() {
                            None
                        } else {
                            Some(title.to_owned())
                        };
                        table.set_column_title(column, title)?;
                    }
                }
                None => return Ok(table),
            }
        }

        let mut row = 0usize;
        for result in records {
            let record = result?;
            let skip = usize::from(options.has_row_titles);
            if options.has_row_titles {
                let title = match record.get(0) {
                    Some(t) if !t.is_empty() => Some(t.to_owned()),
                    _ => None,
                };
                table.set_row_title(row, title)?;
            }
            for (column, field) in record.iter().skip(skip).enumerate() {
                if field.is_empty() {
                    continue;
                }
                let element = field.parse::<T>().map_err(|err| CsvError::Parse {
                    row,
                    column,
                    message: err.to_string(),
                })?;
                table.set_element(row, column, element)?;
            }
            // the row and the record's width exist even when every field
            // was empty
            let width = record.len().saturating_sub(skip);
            let content = table.content_mut();
            content.resolve_or_create_stripe(Orientation::Row, StripeKey::Index(row))?;
            if width > 0 {
                content
                    .resolve_or_create_stripe(Orientation::Column, StripeKey::Index(width - 1))?;
            }
            row += 1;
        }

        Ok(table)
    }
}
