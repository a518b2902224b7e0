//! The table
//!
//! [`Table`] is the primary entry point of the crate: a named
//! [`TableContent`] addressed by plain `usize` indices and column titles,
//! with an optional [`RowStore`] that mirrors every row change. All
//! index-based writes grow the table lazily, so `set_element(2, 3, ..)` on
//! an empty table produces three rows and four columns with exactly one
//! materialized cell.

use std::fmt;

use crate::cell::Cell;
use crate::column::{Column, ColumnMut};
use crate::content::TableContent;
use crate::error::{Error, Result};
use crate::row::{Row, RowMut};
use crate::store::RowStore;
use crate::stripe::Orientation;
use crate::stripe_list::StripeKey;
use crate::MAX_STRIPES;

/// A named, lazily growing table of elements
pub struct Table<T> {
    name: String,
    content: TableContent<T>,
    store: Option<Box<dyn RowStore<T>>>,
}

impl<T> Table<T> {
    /// Create an empty table with the given name
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            content: TableContent::new(),
            store: None,
        }
    }

    /// The table name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename the table; an attached store is re-attached under the new name
    pub fn set_name<S: Into<String>>(&mut self, name: S) -> Result<()> {
        self.name = name.into();
        self.reattach()
    }

    /// Number of rows
    pub fn row_count(&self) -> usize {
        self.content.stripe_list_len(Orientation::Row)
    }

    /// Number of columns
    pub fn column_count(&self) -> usize {
        self.content.stripe_list_len(Orientation::Column)
    }

    pub fn is_empty(&self) -> bool {
        self.row_count() == 0
    }

    /// The underlying content, for handle-level access
    pub fn content(&self) -> &TableContent<T> {
        &self.content
    }

    /// The underlying content, mutably
    ///
    /// Changes made through this bypass the attached store; use the table
    /// methods when store mirroring matters.
    pub fn content_mut(&mut self) -> &mut TableContent<T> {
        &mut self.content
    }

    // === Elements ===

    /// The element at (row, column), if that cell exists and is filled
    pub fn element(&self, row: usize, column: usize) -> Option<&T> {
        let row_id = self.content.resolve_stripe(Orientation::Row, row)?;
        let cell = self.content.resolve_cell_by(row_id, column)?;
        self.content.cell(cell).and_then(Cell::element)
    }

    /// The element at (row, titled column)
    pub fn element_by_title(&self, row: usize, title: &str) -> Option<&T> {
        let row_id = self.content.resolve_stripe(Orientation::Row, row)?;
        let cell = self.content.resolve_cell_by(row_id, title)?;
        self.content.cell(cell).and_then(Cell::element)
    }

    /// Put an element at (row, column), returning the displaced one
    ///
    /// Rows of the table and columns grow as needed; only the addressed
    /// cell is materialized. The touched row is mirrored to the store.
    pub fn set_element(&mut self, row: usize, column: usize, element: T) -> Result<Option<T>> {
        let columns_before = self.column_count();
        let row_id = self
            .content
            .resolve_or_create_stripe(Orientation::Row, StripeKey::Index(row))?;
        let column_id = self
            .content
            .resolve_or_create_stripe(Orientation::Column, StripeKey::Index(column))?;
        let cell = self.content.resolve_or_create_cell(row_id, column_id)?;
        let displaced = self
            .content
            .cell_mut(cell)
            .map(|c| c.set_element(element))
            .ok_or(Error::UnknownCell(cell))?;
        if self.column_count() != columns_before {
            self.reattach()?;
        }
        self.store_update(row)?;
        Ok(displaced)
    }

    /// Put an element at (row, titled column), creating the column on
    /// first use of the title
    pub fn set_element_by_title(
        &mut self,
        row: usize,
        title: &str,
        element: T,
    ) -> Result<Option<T>> {
        let columns_before = self.column_count();
        let column_id = self
            .content
            .resolve_or_create_stripe(Orientation::Column, title)?;
        let row_id = self
            .content
            .resolve_or_create_stripe(Orientation::Row, StripeKey::Index(row))?;
        let cell = self.content.resolve_or_create_cell(row_id, column_id)?;
        let displaced = self
            .content
            .cell_mut(cell)
            .map(|c| c.set_element(element))
            .ok_or(Error::UnknownCell(cell))?;
        if self.column_count() != columns_before {
            self.reattach()?;
        }
        self.store_update(row)?;
        Ok(displaced)
    }

    /// Take the element out of (row, column), leaving the cell in place
    pub fn take_element(&mut self, row: usize, column: usize) -> Result<Option<T>> {
        let row_id = match self.content.resolve_stripe(Orientation::Row, row) {
            Some(id) => id,
            None => return Ok(None),
        };
        let cell = match self.content.resolve_cell_by(row_id, column) {
            Some(cell) => cell,
            None => return Ok(None),
        };
        let taken = self.content.cell_mut(cell).and_then(Cell::take_element);
        if taken.is_some() {
            self.store_update(row)?;
        }
        Ok(taken)
    }

    /// Modify the element at (row, column) in place
    ///
    /// Returns `false` without calling the closure when there is no
    /// element at that position; nothing is created.
    pub fn apply<F>(&mut self, row: usize, column: usize, f: F) -> Result<bool>
    where
        F: FnOnce(&mut T),
    {
        let row_id = match self.content.resolve_stripe(Orientation::Row, row) {
            Some(id) => id,
            None => return Ok(false),
        };
        let cell = match self.content.resolve_cell_by(row_id, column) {
            Some(cell) => cell,
            None => return Ok(false),
        };
        match self.content.cell_mut(cell).and_then(Cell::element_mut) {
            Some(element) => {
                f(element);
                self.store_update(row)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    // === Rows ===

    /// Append a row of elements, returning its index
    ///
    /// `None` positions get no cell. Columns grow to the announced width
    /// even when the trailing elements are `None`.
    pub fn append_row(&mut self, elements: Vec<Option<T>>) -> Result<usize> {
        let width = elements.len();
        if width > MAX_STRIPES {
            return Err(Error::IndexOutOfRange {
                index: width - 1,
                max: MAX_STRIPES - 1,
            });
        }
        let columns_before = self.column_count();
        let row = self.row_count();
        let row_id = self.content.add_stripe(Orientation::Row);
        for (column, element) in elements.into_iter().enumerate() {
            if let Some(element) = element {
                let column_id = self
                    .content
                    .resolve_or_create_stripe(Orientation::Column, StripeKey::Index(column))?;
                let cell = self.content.resolve_or_create_cell(row_id, column_id)?;
                if let Some(c) = self.content.cell_mut(cell) {
                    c.set_element(element);
                }
            }
        }
        if width > 0 {
            self.content
                .resolve_or_create_stripe(Orientation::Column, StripeKey::Index(width - 1))?;
        }
        if self.column_count() != columns_before {
            self.reattach()?;
        }
        if let Some(store) = self.store.as_deref_mut() {
            let refs = row_refs(&self.content, row);
            store.add(row, &refs)?;
        }
        Ok(row)
    }

    /// Remove a row, returning its elements by column position
    ///
    /// Cells of the row are detached from their columns and following rows
    /// shift up. An attached store is re-keyed: the shifted rows are
    /// updated under their new ids and the stale last id is removed.
    pub fn remove_row(&mut self, row: usize) -> Result<Vec<Option<T>>> {
        let count = self.row_count();
        if row >= count {
            return Err(Error::IndexOutOfRange {
                index: row,
                max: count.saturating_sub(1),
            });
        }
        let row_id = self
            .content
            .resolve_stripe(Orientation::Row, row)
            .ok_or(Error::IndexOutOfRange {
                index: row,
                max: count.saturating_sub(1),
            })?;

        let columns = self.column_count();
        let mut removed = Vec::with_capacity(columns);
        for column in 0..columns {
            let taken = match self.content.resolve_cell_by(row_id, column) {
                Some(cell) => self.content.cell_mut(cell).and_then(Cell::take_element),
                None => None,
            };
            removed.push(taken);
        }
        self.content.remove_stripe(row_id)?;

        if let Some(store) = self.store.as_deref_mut() {
            let remaining = count - 1;
            for index in row..remaining {
                let refs = row_refs(&self.content, index);
                store.update(index, &refs)?;
            }
            store.remove(remaining)?;
        }
        Ok(removed)
    }

    /// Drop all rows, columns and cells; an attached store is emptied too
    pub fn clear(&mut self) -> Result<()> {
        self.content.clear();
        if let Some(store) = self.store.as_deref_mut() {
            store.remove_all()?;
        }
        Ok(())
    }

    /// Elements of one row by column position; empty when the row does
    /// not exist
    pub fn row_elements(&self, row: usize) -> Vec<Option<&T>> {
        if row < self.row_count() {
            row_refs(&self.content, row)
        } else {
            Vec::new()
        }
    }

    /// Iterate rows top to bottom, each as elements by column position
    pub fn iter_rows(&self) -> impl Iterator<Item = Vec<Option<&T>>> + '_ {
        (0..self.row_count()).map(move |row| row_refs(&self.content, row))
    }

    // === Titles ===

    /// Title of a row
    pub fn row_title(&self, row: usize) -> Option<&str> {
        let id = self.content.resolve_stripe(Orientation::Row, row)?;
        self.content.stripe_title(id)
    }

    /// Set or clear a row title; the row is created if needed
    pub fn set_row_title(&mut self, row: usize, title: Option<String>) -> Result<()> {
        let id = self
            .content
            .resolve_or_create_stripe(Orientation::Row, StripeKey::Index(row))?;
        self.content.set_stripe_title(id, title)
    }

    /// Title of a column
    pub fn column_title(&self, column: usize) -> Option<&str> {
        let id = self.content.resolve_stripe(Orientation::Column, column)?;
        self.content.stripe_title(id)
    }

    /// Set or clear a column title; the column is created if needed and an
    /// attached store is re-attached under the new titles
    pub fn set_column_title(&mut self, column: usize, title: Option<String>) -> Result<()> {
        let id = self
            .content
            .resolve_or_create_stripe(Orientation::Column, StripeKey::Index(column))?;
        self.content.set_stripe_title(id, title)?;
        self.reattach()
    }

    /// All column titles by position
    pub fn column_titles(&self) -> Vec<Option<&str>> {
        self.content
            .stripe_list(Orientation::Column)
            .titles()
            .collect()
    }

    // === Views ===

    /// Borrow one row as a view
    pub fn row(&self, row: usize) -> Option<Row<'_, T>> {
        if row < self.row_count() {
            Some(Row::new(self, row))
        } else {
            None
        }
    }

    /// Borrow one row as a mutating view
    pub fn row_mut(&mut self, row: usize) -> Option<RowMut<'_, T>> {
        if row < self.row_count() {
            Some(RowMut::new(self, row))
        } else {
            None
        }
    }

    /// Borrow one column as a view
    pub fn column(&self, column: usize) -> Option<Column<'_, T>> {
        if column < self.column_count() {
            Some(Column::new(self, column))
        } else {
            None
        }
    }

    /// Borrow the column carrying a title as a view
    pub fn column_by_title(&self, title: &str) -> Option<Column<'_, T>> {
        let id = self.content.resolve_stripe(Orientation::Column, title)?;
        let index = self
            .content
            .stripe_list(Orientation::Column)
            .index_of(id)?;
        Some(Column::new(self, index))
    }

    /// Borrow one column as a mutating view
    pub fn column_mut(&mut self, column: usize) -> Option<ColumnMut<'_, T>> {
        if column < self.column_count() {
            Some(ColumnMut::new(self, column))
        } else {
            None
        }
    }

    // === Store ===

    /// Install a row store and attach it under the table's identity
    ///
    /// Rows already in the table are not pushed; a store installed on a
    /// populated table only sees changes from now on. Call
    /// [`save_to_store`](Self::save_to_store) to push the current rows
    /// explicitly.
    pub fn set_store(&mut self, store: Box<dyn RowStore<T>>) -> Result<()> {
        self.store = Some(store);
        self.reattach()
    }

    /// Remove and return the installed store
    pub fn take_store(&mut self) -> Option<Box<dyn RowStore<T>>> {
        self.store.take()
    }

    pub fn has_store(&self) -> bool {
        self.store.is_some()
    }

    /// Replace the store's rows with the table's current rows
    pub fn save_to_store(&mut self) -> Result<()> {
        let count = self.row_count();
        match self.store.as_deref_mut() {
            Some(store) => {
                log::debug!("saving {} rows of table '{}'", count, self.name);
                store.remove_all()?;
                for row in 0..count {
                    let refs = row_refs(&self.content, row);
                    store.add(row, &refs)?;
                }
                Ok(())
            }
            None => Err(Error::NoStore),
        }
    }

    /// Rebuild the table's rows from the store
    ///
    /// Stored rows are replayed in ascending id order and compacted: gaps
    /// left by removed ids close up, and the store is re-announced under
    /// the compacted ids. Current rows and cells are dropped first; column
    /// titles are kept.
    pub fn load(&mut self) -> Result<()> {
        let rows = match self.store.as_deref() {
            Some(store) => store.all_rows()?,
            None => return Err(Error::NoStore),
        };
        log::debug!("loading {} stored rows into table '{}'", rows.len(), self.name);
        self.content.clear_rows();
        if let Some(store) = self.store.as_deref_mut() {
            store.remove_all()?;
        }
        for (_, elements) in rows {
            self.append_row(elements)?;
        }
        Ok(())
    }

    fn reattach(&mut self) -> Result<()> {
        if let Some(store) = self.store.as_deref_mut() {
            let titles = column_titles_of(&self.content);
            store.attach(&self.name, &titles)?;
        }
        Ok(())
    }

    fn store_update(&mut self, row: usize) -> Result<()> {
        if let Some(store) = self.store.as_deref_mut() {
            let refs = row_refs(&self.content, row);
            store.update(row, &refs)?;
        }
        Ok(())
    }
}

impl<T: fmt::Debug> fmt::Debug for Table<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Table")
            .field("name", &self.name)
            .field("content", &self.content)
            .field("store", &self.store.as_ref().map(|_| "RowStore"))
            .finish()
    }
}

fn row_refs<'c, T>(content: &'c TableContent<T>, row: usize) -> Vec<Option<&'c T>> {
    let columns = content.stripe_list_len(Orientation::Column);
    let row_id = match content.resolve_stripe(Orientation::Row, row) {
        Some(id) => id,
        None => return vec![None; columns],
    };
    (0..columns)
        .map(|column| {
            content
                .resolve_cell_by(row_id, column)
                .and_then(|cell| content.cell(cell))
                .and_then(Cell::element)
        })
        .collect()
}

fn column_titles_of<T>(content: &TableContent<T>) -> Vec<Option<String>> {
    content
        .stripe_list(Orientation::Column)
        .titles()
        .map(|t| t.map(str::to_owned))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{MemoryStore, RowId, StoreResult};
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Store double the tests can keep inspecting after installation
    #[derive(Clone)]
    struct SharedStore<T>(Rc<RefCell<MemoryStore<T>>>);

    impl<T> SharedStore<T> {
        fn new() -> Self {
            Self(Rc::new(RefCell::new(MemoryStore::new())))
        }
    }

    impl<T: Clone> RowStore<T> for SharedStore<T> {
        fn attach(&mut self, name: &str, titles: &[Option<String>]) -> StoreResult<()> {
            self.0.borrow_mut().attach(name, titles)
        }
        fn add(&mut self, row: RowId, elements: &[Option<&T>]) -> StoreResult<()> {
            self.0.borrow_mut().add(row, elements)
        }
        fn update(&mut self, row: RowId, elements: &[Option<&T>]) -> StoreResult<()> {
            self.0.borrow_mut().update(row, elements)
        }
        fn remove(&mut self, row: RowId) -> StoreResult<()> {
            self.0.borrow_mut().remove(row)
        }
        fn remove_all(&mut self) -> StoreResult<()> {
            self.0.borrow_mut().remove_all()
        }
        fn all_rows(&self) -> StoreResult<Vec<(RowId, Vec<Option<T>>)>> {
            self.0.borrow().all_rows()
        }
    }

    fn with_shared_store(table: &mut Table<String>) -> SharedStore<String> {
        let shared = SharedStore::new();
        table.set_store(Box::new(shared.clone())).unwrap();
        shared
    }

    #[test]
    fn test_new_table_is_empty() {
        let table: Table<i32> = Table::new("empty");
        assert_eq!(table.name(), "empty");
        assert_eq!(table.row_count(), 0);
        assert_eq!(table.column_count(), 0);
        assert!(table.is_empty());
    }

    #[test]
    fn test_set_element_grows_lazily() {
        let mut table: Table<&str> = Table::new("t");
        table.set_element(2, 3, "x").unwrap();

        assert_eq!(table.row_count(), 3);
        assert_eq!(table.column_count(), 4);
        assert_eq!(table.element(2, 3), Some(&"x"));
        // only the addressed intersection is materialized
        assert_eq!(table.content().cell_count(), 1);
        assert_eq!(table.element(0, 0), None);
    }

    #[test]
    fn test_set_element_returns_displaced() {
        let mut table: Table<i32> = Table::new("t");
        assert_eq!(table.set_element(0, 0, 1).unwrap(), None);
        assert_eq!(table.set_element(0, 0, 2).unwrap(), Some(1));
        assert_eq!(table.element(0, 0), Some(&2));
    }

    #[test]
    fn test_element_by_title() {
        let mut table: Table<i32> = Table::new("t");
        table.set_element_by_title(0, "amount", 42).unwrap();

        assert_eq!(table.column_count(), 1);
        assert_eq!(table.column_title(0), Some("amount"));
        assert_eq!(table.element_by_title(0, "amount"), Some(&42));
        assert_eq!(table.element_by_title(0, "missing"), None);

        // the same title resolves to the same column
        table.set_element_by_title(1, "amount", 7).unwrap();
        assert_eq!(table.column_count(), 1);
        assert_eq!(table.element(1, 0), Some(&7));
    }

    #[test]
    fn test_take_element() {
        let mut table: Table<i32> = Table::new("t");
        table.set_element(0, 0, 5).unwrap();

        assert_eq!(table.take_element(0, 0).unwrap(), Some(5));
        assert_eq!(table.element(0, 0), None);
        // the cell survives, empty
        assert_eq!(table.content().cell_count(), 1);
        // absent positions are not an error
        assert_eq!(table.take_element(0, 0).unwrap(), None);
        assert_eq!(table.take_element(9, 9).unwrap(), None);
    }

    #[test]
    fn test_apply_in_place() {
        let mut table: Table<i32> = Table::new("t");
        table.set_element(0, 0, 10).unwrap();

        assert!(table.apply(0, 0, |v| *v += 1).unwrap());
        assert_eq!(table.element(0, 0), Some(&11));
        // no element, no call, no creation
        assert!(!table.apply(0, 1, |v| *v += 1).unwrap());
        assert_eq!(table.content().cell_count(), 1);
    }

    #[test]
    fn test_append_row() {
        let mut table: Table<&str> = Table::new("t");
        let first = table
            .append_row(vec![Some("a"), None, Some("c")])
            .unwrap();
        let second = table.append_row(vec![Some("d"), None, None]).unwrap();

        assert_eq!((first, second), (0, 1));
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.column_count(), 3);
        assert_eq!(table.element(0, 0), Some(&"a"));
        assert_eq!(table.element(0, 1), None);
        assert_eq!(table.element(0, 2), Some(&"c"));
        // None positions got no cell
        assert_eq!(table.content().cell_count(), 3);
    }

    #[test]
    fn test_append_empty_row() {
        let mut table: Table<i32> = Table::new("t");
        table.append_row(Vec::new()).unwrap();
        assert_eq!(table.row_count(), 1);
        assert_eq!(table.column_count(), 0);
    }

    #[test]
    fn test_remove_row_returns_elements_and_shifts() {
        let mut table: Table<&str> = Table::new("t");
        table.append_row(vec![Some("a0"), Some("a1")]).unwrap();
        table.append_row(vec![Some("b0"), None]).unwrap();
        table.append_row(vec![Some("c0"), Some("c1")]).unwrap();

        let removed = table.remove_row(1).unwrap();
        assert_eq!(removed, vec![Some("b0"), None]);
        assert_eq!(table.row_count(), 3 - 1);
        assert_eq!(table.element(1, 0), Some(&"c0"));
        // the removed row's cells are gone from the columns
        assert_eq!(table.content().cell_count(), 4);
    }

    #[test]
    fn test_remove_row_out_of_range() {
        let mut table: Table<i32> = Table::new("t");
        let err = table.remove_row(0).unwrap_err();
        assert!(matches!(err, Error::IndexOutOfRange { .. }));
    }

    #[test]
    fn test_row_elements_and_iter_rows() {
        let mut table: Table<i32> = Table::new("t");
        table.append_row(vec![Some(1), None]).unwrap();
        table.append_row(vec![None, Some(2)]).unwrap();

        assert_eq!(table.row_elements(0), vec![Some(&1), None]);
        assert_eq!(table.row_elements(5), Vec::<Option<&i32>>::new());

        let rows: Vec<Vec<Option<&i32>>> = table.iter_rows().collect();
        assert_eq!(rows, vec![vec![Some(&1), None], vec![None, Some(&2)]]);
    }

    #[test]
    fn test_row_and_column_titles() {
        let mut table: Table<i32> = Table::new("t");
        table.set_column_title(1, Some("b".into())).unwrap();
        table.set_row_title(0, Some("first".into())).unwrap();

        assert_eq!(table.column_count(), 2);
        assert_eq!(table.column_title(0), None);
        assert_eq!(table.column_title(1), Some("b"));
        assert_eq!(table.column_titles(), vec![None, Some("b")]);
        assert_eq!(table.row_title(0), Some("first"));
        assert_eq!(table.row_title(3), None);
    }

    #[test]
    fn test_clear() {
        let mut table: Table<i32> = Table::new("t");
        table.set_element(1, 1, 9).unwrap();
        table.clear().unwrap();

        assert_eq!(table.row_count(), 0);
        assert_eq!(table.column_count(), 0);
        assert_eq!(table.content().cell_count(), 0);
    }

    // === Store mirroring ===

    #[test]
    fn test_store_attach_announces_identity() {
        let mut table: Table<String> = Table::new("orders");
        table.set_column_title(0, Some("item".into())).unwrap();
        let shared = with_shared_store(&mut table);

        assert_eq!(shared.0.borrow().table_name(), Some("orders"));
        assert_eq!(
            shared.0.borrow().column_titles(),
            &[Some("item".to_owned())]
        );
    }

    #[test]
    fn test_store_sees_element_changes() {
        let mut table: Table<String> = Table::new("t");
        let shared = with_shared_store(&mut table);

        table.set_element(0, 0, "a".into()).unwrap();
        table.set_element(0, 1, "b".into()).unwrap();

        assert_eq!(
            shared.0.borrow().row(0),
            Some(&[Some("a".to_owned()), Some("b".to_owned())][..])
        );
    }

    #[test]
    fn test_store_reattached_when_columns_grow() {
        let mut table: Table<String> = Table::new("t");
        let shared = with_shared_store(&mut table);
        assert_eq!(shared.0.borrow().column_titles().len(), 0);

        table.set_element(0, 2, "x".into()).unwrap();
        assert_eq!(shared.0.borrow().column_titles().len(), 3);

        table.set_element_by_title(0, "extra", "y".into()).unwrap();
        assert_eq!(
            shared.0.borrow().column_titles().last(),
            Some(&Some("extra".to_owned()))
        );
    }

    #[test]
    fn test_store_rekeyed_on_remove_row() {
        let mut table: Table<String> = Table::new("t");
        let shared = with_shared_store(&mut table);
        table.append_row(vec![Some("a".into())]).unwrap();
        table.append_row(vec![Some("b".into())]).unwrap();
        table.append_row(vec![Some("c".into())]).unwrap();

        table.remove_row(1).unwrap();

        let rows = shared.0.borrow().all_rows().unwrap();
        assert_eq!(
            rows,
            vec![
                (0, vec![Some("a".to_owned())]),
                (1, vec![Some("c".to_owned())]),
            ]
        );
    }

    #[test]
    fn test_store_cleared_with_table() {
        let mut table: Table<String> = Table::new("t");
        let shared = with_shared_store(&mut table);
        table.append_row(vec![Some("a".into())]).unwrap();

        table.clear().unwrap();
        assert!(shared.0.borrow().is_empty());
    }

    #[test]
    fn test_save_pushes_existing_rows() {
        let mut table: Table<String> = Table::new("t");
        table.append_row(vec![Some("early".into())]).unwrap();
        let shared = with_shared_store(&mut table);
        // installation alone does not push rows
        assert!(shared.0.borrow().is_empty());

        table.save_to_store().unwrap();
        assert_eq!(shared.0.borrow().len(), 1);
        assert_eq!(
            shared.0.borrow().row(0),
            Some(&[Some("early".to_owned())][..])
        );
    }

    #[test]
    fn test_load_replays_and_compacts() {
        let shared = SharedStore::<String>::new();
        {
            let mut direct = shared.0.borrow_mut();
            direct.attach("t", &[None]).unwrap();
            let (a, c) = ("a".to_owned(), "c".to_owned());
            direct.add(0, &[Some(&a)]).unwrap();
            direct.add(2, &[Some(&c)]).unwrap(); // gap at 1
        }

        let mut table: Table<String> = Table::new("t");
        table.set_store(Box::new(shared.clone())).unwrap();
        table.load().unwrap();

        assert_eq!(table.row_count(), 2);
        assert_eq!(table.element(0, 0), Some(&"a".to_owned()));
        assert_eq!(table.element(1, 0), Some(&"c".to_owned()));
        // the gap is compacted away in the store as well
        let rows = shared.0.borrow().all_rows().unwrap();
        assert_eq!(
            rows,
            vec![
                (0, vec![Some("a".to_owned())]),
                (1, vec![Some("c".to_owned())]),
            ]
        );
    }

    #[test]
    fn test_load_keeps_column_titles() {
        let mut table: Table<String> = Table::new("orders");
        table.set_column_title(0, Some("item".into())).unwrap();
        table.set_column_title(1, Some("count".into())).unwrap();
        let shared = with_shared_store(&mut table);
        table
            .append_row(vec![Some("bolt".into()), Some("12".into())])
            .unwrap();

        table.load().unwrap();

        assert_eq!(table.column_titles(), vec![Some("item"), Some("count")]);
        assert_eq!(table.element(0, 0), Some(&"bolt".to_owned()));
        // the store stays attached under the kept titles
        assert_eq!(
            shared.0.borrow().column_titles(),
            &[Some("item".to_owned()), Some("count".to_owned())]
        );
    }

    #[test]
    fn test_load_without_store() {
        let mut table: Table<i32> = Table::new("t");
        assert!(matches!(table.load().unwrap_err(), Error::NoStore));
        assert!(matches!(table.save_to_store().unwrap_err(), Error::NoStore));
    }

    #[test]
    fn test_take_store() {
        let mut table: Table<String> = Table::new("t");
        table.set_store(Box::new(MemoryStore::new())).unwrap();
        assert!(table.has_store());

        let store = table.take_store().unwrap();
        assert!(!table.has_store());
        assert_eq!(store.all_rows().unwrap(), Vec::new());

        // changes after removal touch no store
        table.set_element(0, 0, "x".into()).unwrap();
    }

    #[test]
    fn test_rename_reattaches() {
        let mut table: Table<String> = Table::new("before");
        let shared = with_shared_store(&mut table);

        table.set_name("after").unwrap();
        assert_eq!(shared.0.borrow().table_name(), Some("after"));
    }
}
