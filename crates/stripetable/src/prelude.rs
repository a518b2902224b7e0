//! Prelude module - common imports for stripetable users
//!
//! ```rust
//! use stripetable::prelude::*;
//! ```

pub use crate::{
    // Cell types
    Cell,
    CellArena,
    CellId,
    // Column views
    Column,
    ColumnMut,

    CsvReadOptions,
    CsvReader,
    CsvWriteOptions,
    CsvWriter,

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
    TableExt,

    // Constants
    MAX_STRIPES,
};
