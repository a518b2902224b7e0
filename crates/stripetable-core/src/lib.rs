//! # stripetable-core
//!
//! Core engine of the stripetable tabular data library.
//!
//! This crate provides the fundamental types used throughout stripetable:
//! - [`Stripe`] and [`StripeList`] - Rows and columns as one symmetric concept
//! - [`Cell`] and [`CellArena`] - Lazily-created intersections holding elements
//! - [`TableContent`] - The stripe lists plus the cell arena, with resolution
//! - [`StripeAggregate`] - Several stripes read as one
//! - [`Table`] - The named, index-addressed entry point
//! - [`RowStore`] - Row-by-row persistence of table changes
//!
//! Rows and columns are the same structure under two orientation tags, which
//! is what makes [`TableContent::switch_rows_and_columns`] a constant-time
//! transpose. Cells exist only where an element was actually placed.
//!
//! ## Example
//!
//! ```rust
//! use stripetable_core::Table;
//!
//! let mut table = Table::new("orders");
//! table.set_column_title(0, Some("item".into())).unwrap();
//!
//! // Index-based writes grow the table lazily
//! table.set_element(0, 0, "bolts".to_owned()).unwrap();
//! table.set_element_by_title(1, "item", "nuts".to_owned()).unwrap();
//!
//! assert_eq!(table.row_count(), 2);
//! assert_eq!(table.element(1, 0), Some(&"nuts".to_owned()));
//! ```

pub mod aggregate;
pub mod cell;
pub mod column;
pub mod content;
pub mod error;
mod resolver;
pub mod row;
pub mod store;
pub mod stripe;
pub mod stripe_list;
pub mod table;

// Re-exports for convenience
pub use aggregate::StripeAggregate;
pub use cell::{Cell, CellArena, CellId};
pub use column::{Column, ColumnMut};
pub use content::TableContent;
pub use error::{Error, Result};
pub use row::{Row, RowMut};
pub use store::{MemoryStore, RowId, RowStore, StoreError, StoreResult};
pub use stripe::{Orientation, Stripe, StripeId};
pub use stripe_list::{StripeKey, StripeList};
pub use table::Table;

/// Maximum number of stripes per orientation
///
/// Index-driven growth past this cap is rejected; plain appends always
/// succeed.
pub const MAX_STRIPES: usize = 1_048_576;
