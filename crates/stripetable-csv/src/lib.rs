//! # stripetable-csv
//!
//! CSV reader and writer for stripetable.
//!
//! Tables are written row-major with one record per row; cells without an
//! element become empty fields, and empty fields read back as missing
//! cells. Column titles, row titles and the table name ride along as
//! optional leading records and fields, controlled per call through
//! [`CsvReadOptions`] and [`CsvWriteOptions`].

mod reader;
mod writer;
mod options;
mod error;

pub use reader::CsvReader;
pub use writer::CsvWriter;
pub use options::{CsvReadOptions, CsvWriteOptions, LineTerminator};
pub use error::{CsvError, CsvResult};
