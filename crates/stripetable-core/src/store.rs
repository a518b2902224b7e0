//! Row persistence
//!
//! A [`RowStore`] mirrors a table row by row. The table drives it through
//! whole-row notifications: it attaches first, announcing the table name and
//! column titles, then keeps the store in sync as rows are added, updated
//! and removed. Stores never call back into the table.
//!
//! [`MemoryStore`] is the bundled implementation, useful as a test double
//! and as the model for real backends.

use std::collections::BTreeMap;

use thiserror::Error;

pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Identifier a store keeps per row; the table uses the row's index
pub type RowId = usize;

/// Errors raised by a row store backend
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// The backing store rejected or failed an operation
    #[error("Store backend error: {0}")]
    Backend(String),
    /// A row operation arrived before [`RowStore::attach`]
    #[error("Store is not attached to a table")]
    NotAttached,
}

/// A sink for whole-row change notifications
///
/// Implementations persist rows keyed by [`RowId`]. The table re-keys rows
/// itself when indices shift, so a store only ever sees `add`, `update` and
/// `remove` for individual ids. Elements arrive borrowed, one slot per
/// column; a `None` marks a position without an element. Stores that keep
/// the data copy what they need.
pub trait RowStore<T> {
    /// Bind the store to a table, announcing its name and column titles
    ///
    /// Called once when the store is installed and again whenever the
    /// table's identity changes, such as a column title edit or a new
    /// column appearing. Stored rows survive re-attachment.
    fn attach(&mut self, table_name: &str, column_titles: &[Option<String>]) -> StoreResult<()>;

    /// Persist a new row
    fn add(&mut self, row: RowId, elements: &[Option<&T>]) -> StoreResult<()>;

    /// Replace the elements of a persisted row, inserting it when the id
    /// is new
    ///
    /// A modification can reach a row the store has never seen: tables
    /// grow rows lazily and only announce them once an element lands, so
    /// implementations must treat this as an upsert.
    fn update(&mut self, row: RowId, elements: &[Option<&T>]) -> StoreResult<()>;

    /// Drop a persisted row
    fn remove(&mut self, row: RowId) -> StoreResult<()>;

    /// Drop every persisted row
    fn remove_all(&mut self) -> StoreResult<()>;

    /// All persisted rows in ascending [`RowId`] order
    fn all_rows(&self) -> StoreResult<Vec<(RowId, Vec<Option<T>>)>>;
}

/// In-memory [`RowStore`] backed by an ordered map
///
/// Tolerant by design: `add` on an existing id overwrites, `update` on a
/// missing id inserts, `remove` of a missing id is a no-op. This keeps the
/// store usable as a crash-recovery model where notifications may replay.
#[derive(Debug, Clone)]
pub struct MemoryStore<T> {
    table_name: Option<String>,
    column_titles: Vec<Option<String>>,
    rows: BTreeMap<RowId, Vec<Option<T>>>,
}

impl<T> MemoryStore<T> {
    pub fn new() -> Self {
        Self {
            table_name: None,
            column_titles: Vec::new(),
            rows: BTreeMap::new(),
        }
    }

    /// The table name announced by the last attach
    pub fn table_name(&self) -> Option<&str> {
        self.table_name.as_deref()
    }

    /// The column titles announced by the last attach
    pub fn column_titles(&self) -> &[Option<String>] {
        &self.column_titles
    }

    /// Number of persisted rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Elements of one persisted row
    pub fn row(&self, id: RowId) -> Option<&[Option<T>]> {
        self.rows.get(&id).map(Vec::as_slice)
    }

    fn ensure_attached(&self) -> StoreResult<()> {
        if self.table_name.is_some() {
            Ok(())
        } else {
            Err(StoreError::NotAttached)
        }
    }
}

impl<T> Default for MemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> RowStore<T> for MemoryStore<T> {
    fn attach(&mut self, table_name: &str, column_titles: &[Option<String>]) -> StoreResult<()> {
        self.table_name = Some(table_name.to_owned());
        self.column_titles = column_titles.to_vec();
        Ok(())
    }

    fn add(&mut self, row: RowId, elements: &[Option<&T>]) -> StoreResult<()> {
        self.ensure_attached()?;
        self.rows.insert(row, copy_elements(elements));
        Ok(())
    }

    fn update(&mut self, row: RowId, elements: &[Option<&T>]) -> StoreResult<()> {
        self.ensure_attached()?;
        self.rows.insert(row, copy_elements(elements));
        Ok(())
    }

    fn remove(&mut self, row: RowId) -> StoreResult<()> {
        self.ensure_attached()?;
        self.rows.remove(&row);
        Ok(())
    }

    fn remove_all(&mut self) -> StoreResult<()> {
        self.ensure_attached()?;
        self.rows.clear();
        Ok(())
    }

    fn all_rows(&self) -> StoreResult<Vec<(RowId, Vec<Option<T>>)>> {
        self.ensure_attached()?;
        Ok(self
            .rows
            .iter()
            .map(|(&id, elements)| (id, elements.clone()))
            .collect())
    }
}

fn copy_elements<T: Clone>(elements: &[Option<&T>]) -> Vec<Option<T>> {
    elements.iter().map(|e| e.cloned()).collect()
}
