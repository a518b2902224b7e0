//! Cell types and the cell arena
//!
//! Cells are the lazily-created intersections of exactly one row-stripe and
//! one column-stripe. All cells of a table live in one [`CellArena`], and
//! stripes refer to them by [`CellId`]; the arena owning every cell is what
//! keeps the membership graph free of reference cycles.

use ahash::AHashMap;

use crate::stripe::StripeId;

/// Handle to a cell within one [`TableContent`](crate::TableContent)
///
/// Like [`StripeId`](crate::StripeId), cell handles are minted from a
/// monotonic counter and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellId(pub(crate) u64);

/// The element-holding intersection of exactly one row-stripe and one
/// column-stripe
///
/// A cell is never shared between two different (row, column) pairs; its
/// identity is the [`CellId`], not the element value. The two owners are
/// fixed at creation and survive [row/column
/// switching](crate::TableContent::switch_rows_and_columns), which is why they
/// are stored unlabeled: which owner currently acts as the row is decided by
/// the list holding it, not by the cell.
#[derive(Debug, Clone)]
pub struct Cell<T> {
    /// The two owning stripes; `owners[0]` is the row-stripe at creation time
    owners: [StripeId; 2],
    /// The element held at this intersection, if any
    element: Option<T>,
}

impl<T> Cell<T> {
    /// Create a new, empty cell owned by the given (row, column) pair
    pub(crate) fn new(row: StripeId, column: StripeId) -> Self {
        Self {
            owners: [row, column],
            element: None,
        }
    }

    /// The two owning stripes
    pub fn owners(&self) -> [StripeId; 2] {
        self.owners
    }

    /// Check if the given stripe is one of this cell's two owners
    pub fn is_owned_by(&self, stripe: StripeId) -> bool {
        self.owners[0] == stripe || self.owners[1] == stripe
    }

    /// Given one owner, get the other
    ///
    /// Returns `None` if `stripe` is not an owner of this cell.
    pub fn other_owner(&self, stripe: StripeId) -> Option<StripeId> {
        if self.owners[0] == stripe {
            Some(self.owners[1])
        } else if self.owners[1] == stripe {
            Some(self.owners[0])
        } else {
            None
        }
    }

    /// Get the element held by this cell
    pub fn element(&self) -> Option<&T> {
        self.element.as_ref()
    }

    /// Get the element held by this cell, mutably
    pub fn element_mut(&mut self) -> Option<&mut T> {
        self.element.as_mut()
    }

    /// Check if this cell holds an element
    pub fn has_element(&self) -> bool {
        self.element.is_some()
    }

    /// Put an element into this cell, returning the displaced one
    pub fn set_element(&mut self, element: T) -> Option<T> {
        self.element.replace(element)
    }

    /// Take the element out of this cell, leaving it empty
    pub fn take_element(&mut self) -> Option<T> {
        self.element.take()
    }
}

/// Central owner of all cells in a table
///
/// Stripes never own cells; they hold [`CellId`]s into this arena. Removal
/// is plain index bookkeeping: dropping a cell here plus unregistering its id
/// from the two owner stripes detaches it completely.
#[derive(Debug)]
pub struct CellArena<T> {
    cells: AHashMap<CellId, Cell<T>>,
    next_id: u64,
}

impl<T> CellArena<T> {
    /// Create a new, empty arena
    pub(crate) fn new() -> Self {
        Self {
            cells: AHashMap::new(),
            next_id: 0,
        }
    }

    /// Create a new cell owned by the given (row, column) pair
    pub(crate) fn insert(&mut self, row: StripeId, column: StripeId) -> CellId {
        let id = CellId(self.next_id);
        self.next_id += 1;
        self.cells.insert(id, Cell::new(row, column));
        id
    }

    /// Get a cell by handle
    pub fn get(&self, id: CellId) -> Option<&Cell<T>> {
        self.cells.get(&id)
    }

    /// Get a cell by handle, mutably
    pub(crate) fn get_mut(&mut self, id: CellId) -> Option<&mut Cell<T>> {
        self.cells.get_mut(&id)
    }

    /// Check if the handle resolves to a live cell
    pub fn contains(&self, id: CellId) -> bool {
        self.cells.contains_key(&id)
    }

    /// Remove a cell, returning it
    pub(crate) fn remove(&mut self, id: CellId) -> Option<Cell<T>> {
        self.cells.remove(&id)
    }

    /// Number of live cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if the arena holds no cells
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Drop all cells; the id counter keeps running so old handles stay stale
    pub(crate) fn clear(&mut self) {
        self.cells.clear();
    }

    /// Iterate over all live cells in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (CellId, &Cell<T>)> {
        self.cells.iter().map(|(&id, cell)| (id, cell))
    }
}

impl<T> Default for CellArena<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owners() {
        let row = StripeId(1);
        let col = StripeId(2);
        let cell: Cell<i32> = Cell::new(row, col);

        assert!(cell.is_owned_by(row));
        assert!(cell.is_owned_by(col));
        assert!(!cell.is_owned_by(StripeId(3)));

        assert_eq!(cell.other_owner(row), Some(col));
        assert_eq!(cell.other_owner(col), Some(row));
        assert_eq!(cell.other_owner(StripeId(3)), None);
    }

    #[test]
    fn test_element_lifecycle() {
        let mut cell: Cell<&str> = Cell::new(StripeId(0), StripeId(1));
        assert!(!cell.has_element());

        assert_eq!(cell.set_element("a"), None);
        assert_eq!(cell.set_element("b"), Some("a"));
        assert_eq!(cell.element(), Some(&"b"));

        assert_eq!(cell.take_element(), Some("b"));
        assert!(!cell.has_element());
    }

    #[test]
    fn test_arena_ids_never_reused() {
        let mut arena: CellArena<i32> = CellArena::new();

        let a = arena.insert(StripeId(0), StripeId(1));
        arena.remove(a);
        let b = arena.insert(StripeId(0), StripeId(1));

        assert_ne!(a, b);
        assert!(arena.get(a).is_none()); // stale handle resolves to nothing
        assert!(arena.get(b).is_some());
    }

    #[test]
    fn test_arena_clear_keeps_counter() {
        let mut arena: CellArena<i32> = CellArena::new();
        let a = arena.insert(StripeId(0), StripeId(1));
        arena.clear();

        let b = arena.insert(StripeId(0), StripeId(1));
        assert_ne!(a, b);
        assert_eq!(arena.len(), 1);
    }
}
