//! # stripetable
//!
//! An in-memory tabular data engine where rows and columns are the same
//! structure, a stripe, under two orientation tags.
//!
//! Stripetable keeps a table as two stripe lists plus an arena of cells;
//! a cell exists only where an element was actually placed, so sparse
//! tables stay sparse. Because the two lists are symmetric, transposing
//! the whole table is a constant-time operation.
//!
//! ## Features
//!
//! - Lazily growing tables: writing at (2, 3) creates the rows and
//!   columns on the way there, but only one cell
//! - Dual addressing by position or by title
//! - Constant-time row/column switch
//! - Aggregates that read several stripes as one
//! - Row-by-row persistence through pluggable [`RowStore`] backends
//! - CSV import and export
//!
//! ## Example
//!
//! ```rust
//! use stripetable::prelude::*;
//!
//! let mut table = Table::new("inventory");
//! table.set_column_title(0, Some("part".into())).unwrap();
//! table.set_column_title(1, Some("count".into())).unwrap();
//!
//! table.set_element(0, 0, "bolt".to_owned()).unwrap();
//! table.set_element_by_title(0, "count", "12".to_owned()).unwrap();
//!
//! assert_eq!(table.element_by_title(0, "part"), Some(&"bolt".to_owned()));
//!
//! // Save to file
//! // table.save("inventory.csv").unwrap();
//! ```

pub mod prelude;

// Re-export core types
pub use stripetable_core::{
    // Cell types
    Cell,
    CellArena,
    CellId,
    // Column views
    Column,
    ColumnMut,
    // Error types
    Error,
    // Store types
    MemoryStore,
    Orientation,
    Result,
    // Row views
    Row,
    RowId,
    RowMut,
    RowStore,
    StoreError,
    StoreResult,
    // Stripe types
    Stripe,
    StripeAggregate,
    StripeId,
    StripeKey,
    StripeList,
    // Main types
    Table,
    TableContent,

    // Constants
    MAX_STRIPES,
};

// Re-export I/O types
pub use stripetable_csv::{
    CsvError, CsvReadOptions, CsvReader, CsvResult, CsvWriteOptions, CsvWriter, LineTerminator,
};

use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Extension trait for Table to add file I/O
pub trait TableExt<T>: Sized {
    /// Open a table from a file
    fn open<P: AsRef<Path>>(path: P) -> Result<Table<T>>
    where
        T: FromStr,
        T::Err: fmt::Display;

    /// Save the table to a file
    fn save<P: AsRef<Path>>(&self, path: P) -> Result<()>
    where
        T: fmt::Display;
}

impl<T> TableExt<T> for Table<T> {
    fn open<P: AsRef<Path>>(path: P) -> Result<Table<T>>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase());

        match extension.as_deref() {
            Some("csv") => CsvReader::read_file(path, &CsvReadOptions::default())
                .map_err(|e| Error::other(e.to_string())),
            _ => Err(Error::other(format!(
                "Unsupported file format: {}",
                path.display()
            ))),
        }
    }

    fn save<P: AsRef<Path>>(&self, path: P) -> Result<()>
    where
        T: fmt::Display,
    {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase());

        match extension.as_deref() {
            Some("csv") => CsvWriter::write_file(self, path, &CsvWriteOptions::default())
                .map_err(|e| Error::other(e.to_string())),
            _ => Err(Error::other(format!(
                "Unsupported file format: {}",
                path.display()
            ))),
        }
    }
}
