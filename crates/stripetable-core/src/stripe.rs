//! Stripe types
//!
//! A stripe is the orientation-agnostic storage object behind one row or one
//! column: an optional title plus the set of cells currently belonging to it.

use ahash::AHashSet;

use crate::cell::CellId;

/// Orientation of a stripe (row or column)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// A horizontal stripe
    Row,
    /// A vertical stripe
    Column,
}

impl Orientation {
    /// Get the opposite orientation
    pub fn orthogonal(self) -> Self {
        match self {
            Orientation::Row => Orientation::Column,
            Orientation::Column => Orientation::Row,
        }
    }
}

/// Handle to a stripe within one [`TableContent`](crate::TableContent)
///
/// Handles are minted from a monotonic counter and never reused, so a handle
/// kept across a removal resolves to nothing rather than to a different
/// stripe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StripeId(pub(crate) u64);

/// The storage object behind one stripe: title + cell membership set
///
/// Membership is kept in insertion order with set semantics (registering a
/// cell twice is a no-op). A stripe's orientation is a property of the
/// [`StripeList`](crate::StripeList) holding it; keeping the tag on the list
/// is what lets [`TableContent::switch_rows_and_columns`](crate::TableContent::switch_rows_and_columns)
/// transpose the table in O(1).
#[derive(Debug, Clone, Default)]
pub struct Stripe {
    /// Optional title (duplicate titles within a list are allowed)
    title: Option<String>,
    /// Cells belonging to this stripe, in registration order
    cells: Vec<CellId>,
    /// The same membership, indexed for O(1) containment tests
    members: AHashSet<CellId>,
}

impl Stripe {
    /// Create a new, empty stripe without a title
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Create a new, empty stripe with the given title
    pub(crate) fn with_title<S: Into<String>>(title: S) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    /// Get the stripe's title
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Set or clear the stripe's title
    pub(crate) fn set_title(&mut self, title: Option<String>) {
        self.title = title;
    }

    /// Cells belonging to this stripe, in registration order
    pub fn cell_ids(&self) -> &[CellId] {
        &self.cells
    }

    /// Number of cells belonging to this stripe
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Check if the stripe has no cells
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Check if the given cell belongs to this stripe
    pub fn contains_cell(&self, cell: CellId) -> bool {
        self.members.contains(&cell)
    }

    /// Add a cell to the membership set
    ///
    /// Returns `false` if the cell was already a member.
    pub(crate) fn register_cell(&mut self, cell: CellId) -> bool {
        if !self.members.insert(cell) {
            return false;
        }
        self.cells.push(cell);
        true
    }

    /// Remove a cell from the membership set
    ///
    /// Returns `false` if the cell was not a member.
    pub(crate) fn unregister_cell(&mut self, cell: CellId) -> bool {
        if !self.members.remove(&cell) {
            return false;
        }
        if let Some(pos) = self.cells.iter().position(|&c| c == cell) {
            self.cells.remove(pos);
        }
        true
    }

    /// Take the whole membership set, leaving the stripe empty
    pub(crate) fn take_cell_ids(&mut self) -> Vec<CellId> {
        self.members.clear();
        std::mem::take(&mut self.cells)
    }
}
