//! Column views
//!
//! The column-side counterparts of the row views: borrowed, positional,
//! writing through the table.

use crate::error::Result;
use crate::stripe::Orientation;
use crate::table::Table;

/// Read-only view of one table column
pub struct Column<'a, T> {
    table: &'a Table<T>,
    index: usize,
}

impl<'a, T> Column<'a, T> {
    pub(crate) fn new(table: &'a Table<T>, index: usize) -> Self {
        Self { table, index }
    }

    /// Position of this column in the table
    pub fn index(&self) -> usize {
        self.index
    }

    /// Title of this column
    pub fn title(&self) -> Option<&'a str> {
        self.table.column_title(self.index)
    }

    /// Number of rows the column spans
    pub fn len(&self) -> usize {
        self.table.row_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Element at a row position
    pub fn element(&self, row: usize) -> Option<&'a T> {
        self.table.element(row, self.index)
    }

    /// All elements by row position
    pub fn elements(&self) -> Vec<Option<&'a T>> {
        (0..self.len()).map(|row| self.element(row)).collect()
    }

    /// Iterate elements by row position
    pub fn iter(&self) -> impl Iterator<Item = Option<&'a T>> {
        self.elements().into_iter()
    }

    /// Check whether any cell of this column holds an equal element
    pub fn contains(&self, element: &T) -> bool
    where
        T: PartialEq,
    {
        match self
            .table
            .content()
            .resolve_stripe(Orientation::Column, self.index)
        {
            Some(id) => self.table.content().stripe_contains_element(id, element),
            None => false,
        }
    }
}

/// Mutating view of one table column
pub struct ColumnMut<'a, T> {
    table: &'a mut Table<T>,
    index: usize,
}

impl<'a, T> ColumnMut<'a, T> {
    pub(crate) fn new(table: &'a mut Table<T>, index: usize) -> Self {
        Self { table, index }
    }

    /// Position of this column in the table
    pub fn index(&self) -> usize {
        self.index
    }

    /// Title of this column
    pub fn title(&self) -> Option<&str> {
        self.table.column_title(self.index)
    }

    /// Set or clear this column's title, re-announcing it to any store
    pub fn set_title(&mut self, title: Option<String>) -> Result<()> {
        self.table.set_column_title(self.index, title)
    }

    /// Element at a row position
    pub fn element(&self, row: usize) -> Option<&T> {
        self.table.element(row, self.index)
    }

    /// Put an element at a row position, returning the displaced one
    pub fn set(&mut self, row: usize, element: T) -> Result<Option<T>> {
        self.table.set_element(row, self.index, element)
    }

    /// Take the element out of a row position
    pub fn take(&mut self, row: usize) -> Result<Option<T>> {
        self.table.take_element(row, self.index)
    }

    /// Modify the element at a row position in place
    pub fn apply<F>(&mut self, row: usize, f: F) -> Result<bool>
    where
        F: FnOnce(&mut T),
    {
        self.table.apply(row, self.index, f)
    }
}
