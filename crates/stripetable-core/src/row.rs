//! Row views
//!
//! Borrowed views over one row of a [`Table`]. [`Row`] reads, [`RowMut`]
//! writes through the table so store mirroring stays intact.

use crate::error::Result;
use crate::stripe::Orientation;
use crate::table::Table;

/// Read-only view of one table row
pub struct Row<'a, T> {
    table: &'a Table<T>,
    index: usize,
}

impl<'a, T> Row<'a, T> {
    pub(crate) fn new(table: &'a Table<T>, index: usize) -> Self {
        Self { table, index }
    }

    /// Position of this row in the table
    pub fn index(&self) -> usize {
        self.index
    }

    /// Title of this row
    pub fn title(&self) -> Option<&'a str> {
        self.table.row_title(self.index)
    }

    /// Number of columns the row spans
    pub fn len(&self) -> usize {
        self.table.column_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Element at a column position
    pub fn element(&self, column: usize) -> Option<&'a T> {
        self.table.element(self.index, column)
    }

    /// All elements by column position
    pub fn elements(&self) -> Vec<Option<&'a T>> {
        self.table.row_elements(self.index)
    }

    /// Iterate elements by column position
    pub fn iter(&self) -> impl Iterator<Item = Option<&'a T>> {
        self.elements().into_iter()
    }

    /// Check whether any cell of this row holds an equal element
    pub fn contains(&self, element: &T) -> bool
    where
        T: PartialEq,
    {
        match self
            .table
            .content()
            .resolve_stripe(Orientation::Row, self.index)
        {
            Some(id) => self.table.content().stripe_contains_element(id, element),
            None => false,
        }
    }
}

/// Mutating view of one table row
pub struct RowMut<'a, T> {
    table: &'a mut Table<T>,
    index: usize,
}

impl<'a, T> RowMut<'a, T> {
    pub(crate) fn new(table: &'a mut Table<T>, index: usize) -> Self {
        Self { table, index }
    }

    /// Position of this row in the table
    pub fn index(&self) -> usize {
        self.index
    }

    /// Title of this row
    pub fn title(&self) -> Option<&str> {
        self.table.row_title(self.index)
    }

    /// Set or clear this row's title
    pub fn set_title(&mut self, title: Option<String>) -> Result<()> {
        self.table.set_row_title(self.index, title)
    }

    /// Element at a column position
    pub fn element(&self, column: usize) -> Option<&T> {
        self.table.element(self.index, column)
    }

    /// Put an element at a column position, returning the displaced one
    pub fn set(&mut self, column: usize, element: T) -> Result<Option<T>> {
        self.table.set_element(self.index, column, element)
    }

    /// Take the element out of a column position
    pub fn take(&mut self, column: usize) -> Result<Option<T>> {
        self.table.take_element(self.index, column)
    }

    /// Modify the element at a column position in place
    pub fn apply<F>(&mut self, column: usize, f: F) -> Result<bool>
    where
        F: FnOnce(&mut T),
    {
        self.table.apply(self.index, column, f)
    }
}
