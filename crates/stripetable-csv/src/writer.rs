//! CSV writer

use std::fmt;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::CsvResult;
use crate::options::{ensure_supported_encoding, CsvWriteOptions, LineTerminator};
use stripetable_core::Table;

/// CSV writer
pub struct CsvWriter;

impl CsvWriter {
    /// Write a table to a CSV file
    pub fn write_file<T, P>(table: &Table<T>, path: P, options: &CsvWriteOptions) -> CsvResult<()>
    where
        T: fmt::Display,
        P: AsRef<Path>,
    {
        let file = File::create(path)?;
        Self::write(table, file, options)
    }

    /// Write a table to a writer
    ///
    /// Rows come out top to bottom, one record per row; cells without an
    /// element become empty fields.
    pub fn write<T, W>(table: &Table<T>, writer: W, options: &CsvWriteOptions) -> CsvResult<()>
    where
        T: fmt::Display,
        W: Write,
    {
        ensure_supported_encoding(&options.encoding)?;
        let terminator = match options.line_terminator {
            LineTerminator::LF => csv::Terminator::Any(b'\n'),
            LineTerminator::CRLF => csv::Terminator::CRLF,
            LineTerminator::CR => csv::Terminator::Any(b'\r'),
        };

        let mut csv_writer = csv::WriterBuilder::new()
            .delimiter(options.delimiter)
            .quote(options.quote)
            .terminator(terminator)
            .flexible(true)
            .from_writer(writer);

        if options.emit_table_name {
            csv_writer.write_record([table.name()])?;
        }

        if options.emit_column_titles {
            let mut record: Vec<&str> = Vec::new();
            if options.emit_row_titles {
                record.push(""); // corner field above the row titles
            }
            for title in table.column_titles() {
                record.push(title.unwrap_or(""));
            }
            if !record.is_empty() {
                csv_writer.write_record(&record)?;
            }
        }

        for row in 0..table.row_count() {
            let mut record: Vec<String> = Vec::new();
            if options.emit_row_titles {
                record.push(table.row_title(row).unwrap_or("").to_owned());
            }
            for element in table.row_elements(row) {
                record.push(match element {
                    Some(e) => e.to_string(),
                    None => String::new(),
                });
            }
            if !record.is_empty() {
                csv_writer.write_record(&record)?;
            }
        }

        csv_writer.flush()?;
        Ok(())
    }
}
