//! Table content - the main engine structure
//!
//! [`TableContent`] owns exactly two stripe lists (one ROW, one COLUMN) plus
//! the cell arena, and is the single place where stripe and cell handles are
//! minted. Every structural mutation that touches both orientations at once
//! (cell detachment, clearing, the row/column switch) lives here.

use crate::cell::{Cell, CellArena, CellId};
use crate::error::{Error, Result};
use crate::stripe::{Orientation, Stripe, StripeId};
use crate::stripe_list::StripeList;
use crate::MAX_STRIPES;

/// A two-dimensional grid of stripes with lazily-created intersection cells
///
/// Rows and columns are both [`StripeList`]s; cells belong to one stripe from
/// each list and live in the central [`CellArena`]. The element type `T` is
/// whatever the caller stores at the intersections; the engine itself never
/// inspects it.
#[derive(Debug)]
pub struct TableContent<T> {
    rows: StripeList,
    columns: StripeList,
    cells: CellArena<T>,
    next_stripe: u64,
}

impl<T> TableContent<T> {
    /// Create a new, empty table content
    pub fn new() -> Self {
        Self {
            rows: StripeList::new(Orientation::Row),
            columns: StripeList::new(Orientation::Column),
            cells: CellArena::new(),
            next_stripe: 0,
        }
    }

    // === Stripe lists ===

    /// Get the stripe list of the given orientation; always present
    pub fn stripe_list(&self, orientation: Orientation) -> &StripeList {
        match orientation {
            Orientation::Row => &self.rows,
            Orientation::Column => &self.columns,
        }
    }

    fn stripe_list_mut(&mut self, orientation: Orientation) -> &mut StripeList {
        match orientation {
            Orientation::Row => &mut self.rows,
            Orientation::Column => &mut self.columns,
        }
    }

    /// Number of stripes of the given orientation
    pub fn stripe_list_len(&self, orientation: Orientation) -> usize {
        self.stripe_list(orientation).len()
    }

    /// Get a stripe by handle, whichever list holds it
    pub fn stripe(&self, id: StripeId) -> Option<&Stripe> {
        self.rows.stripe(id).or_else(|| self.columns.stripe(id))
    }

    /// Orientation of the list currently holding the stripe
    ///
    /// After [`switch_rows_and_columns`](Self::switch_rows_and_columns) a
    /// stripe created as a row reports `Column`, and vice versa.
    pub fn orientation_of(&self, id: StripeId) -> Option<Orientation> {
        if self.rows.contains(id) {
            Some(Orientation::Row)
        } else if self.columns.contains(id) {
            Some(Orientation::Column)
        } else {
            None
        }
    }

    /// Position of a stripe: its orientation and index within that list
    pub fn stripe_position(&self, id: StripeId) -> Option<(Orientation, usize)> {
        let orientation = self.orientation_of(id)?;
        let index = self.stripe_list(orientation).index_of(id)?;
        Some((orientation, index))
    }

    /// Get a stripe's title
    pub fn stripe_title(&self, id: StripeId) -> Option<&str> {
        self.stripe(id).and_then(Stripe::title)
    }

    /// Set or clear a stripe's title
    pub fn set_stripe_title(&mut self, id: StripeId, title: Option<String>) -> Result<()> {
        let orientation = self.orientation_of(id).ok_or(Error::UnknownStripe(id))?;
        match self.stripe_list_mut(orientation).stripe_mut(id) {
            Some(stripe) => {
                stripe.set_title(title);
                Ok(())
            }
            None => Err(Error::UnknownStripe(id)),
        }
    }

    /// Find the stripe of the given orientation whose membership set
    /// contains the cell
    pub fn stripe_of_cell(&self, orientation: Orientation, cell: CellId) -> Option<StripeId> {
        self.stripe_list(orientation).stripe_of_cell(cell)
    }

    // === Stripe creation and removal ===

    fn mint_stripe(&mut self) -> StripeId {
        let id = StripeId(self.next_stripe);
        self.next_stripe += 1;
        id
    }

    /// Append a new, empty stripe; never fails
    pub fn add_stripe(&mut self, orientation: Orientation) -> StripeId {
        let id = self.mint_stripe();
        self.stripe_list_mut(orientation).push(id, Stripe::new());
        id
    }

    /// Append a new, empty stripe carrying a title; never fails
    pub fn add_titled_stripe<S>(&mut self, orientation: Orientation, title: S) -> StripeId
    where
        S: Into<String>,
    {
        let id = self.mint_stripe();
        self.stripe_list_mut(orientation)
            .push(id, Stripe::with_title(title));
        id
    }

    /// Insert a new, empty stripe at `index`, shifting later stripes
    ///
    /// The list first grows by repeated appends until a stripe exists at
    /// `index`, then the new stripe is inserted there. Rejecting an index
    /// beyond [`MAX_STRIPES`] leaves existing stripes untouched.
    pub fn add_stripe_at(&mut self, orientation: Orientation, index: usize) -> Result<StripeId> {
        if index >= MAX_STRIPES {
            return Err(Error::IndexOutOfRange {
                index,
                max: MAX_STRIPES - 1,
            });
        }
        while self.stripe_list(orientation).len() <= index {
            self.add_stripe(orientation);
        }
        let id = self.mint_stripe();
        self.stripe_list_mut(orientation)
            .insert(index, id, Stripe::new());
        Ok(id)
    }

    /// Remove a stripe and detach all its cells from the table
    ///
    /// Every cell of the stripe is unregistered from both of its owners and
    /// dropped from the arena, leaving each orthogonal stripe consistent but
    /// missing those cells; then the stripe is removed and following indices
    /// shift down by one. Atomic from the caller's point of view: on error
    /// the table is unchanged.
    pub fn remove_stripe(&mut self, id: StripeId) -> Result<Stripe> {
        let orientation = self.orientation_of(id).ok_or(Error::UnknownStripe(id))?;
        self.detach_stripe_cells(id)?;
        self.stripe_list_mut(orientation)
            .remove(id)
            .ok_or(Error::UnknownStripe(id))
    }

    /// Remove the stripe at `index`, detaching its cells
    ///
    /// `Ok(None)` when there is no stripe at that index. Detachment
    /// failures surface unchanged, with the table left as it was.
    pub fn remove_stripe_at(
        &mut self,
        orientation: Orientation,
        index: usize,
    ) -> Result<Option<Stripe>> {
        match self.stripe_list(orientation).get(index) {
            Some(id) => self.remove_stripe(id).map(Some),
            None => Ok(None),
        }
    }

    /// Detach every cell of a stripe from the table
    ///
    /// Each cell is unregistered from both owners and dropped from the
    /// arena; the stripe itself stays in its list, empty. Returns the number
    /// of cells detached. The membership graph is validated before anything
    /// is mutated, so a failure leaves the table unchanged.
    pub fn detach_stripe_cells(&mut self, id: StripeId) -> Result<usize> {
        let orientation = self.orientation_of(id).ok_or(Error::UnknownStripe(id))?;
        let cell_ids: Vec<CellId> = match self.stripe_list(orientation).stripe(id) {
            Some(stripe) => stripe.cell_ids().to_vec(),
            None => return Err(Error::UnknownStripe(id)),
        };

        // Validate the whole membership graph first; mutation below is
        // infallible, which is what makes the operation atomic.
        let mut partners = Vec::with_capacity(cell_ids.len());
        for &cell_id in &cell_ids {
            let cell = self.cells.get(cell_id).ok_or(Error::UnknownCell(cell_id))?;
            let partner = cell.other_owner(id).ok_or(Error::ForeignCell {
                cell: cell_id,
                stripe: id,
            })?;
            if !self.rows.contains(partner) && !self.columns.contains(partner) {
                return Err(Error::UnknownStripe(partner));
            }
            partners.push((cell_id, partner));
        }

        for (cell_id, partner) in partners {
            self.cells.remove(cell_id);
            if let Some(stripe) = self.rows.stripe_mut(partner) {
                stripe.unregister_cell(cell_id);
            } else if let Some(stripe) = self.columns.stripe_mut(partner) {
                stripe.unregister_cell(cell_id);
            }
        }

        let count = cell_ids.len();
        if let Some(stripe) = self.stripe_list_mut(orientation).stripe_mut(id) {
            stripe.take_cell_ids();
        }
        Ok(count)
    }

    // === Cells ===

    /// The cell arena
    pub fn cells(&self) -> &CellArena<T> {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut CellArena<T> {
        &mut self.cells
    }

    /// Get a cell by handle
    pub fn cell(&self, id: CellId) -> Option<&Cell<T>> {
        self.cells.get(id)
    }

    /// Get a cell by handle, mutably
    ///
    /// Only the element is mutable through this; the owner pair is fixed at
    /// creation.
    pub fn cell_mut(&mut self, id: CellId) -> Option<&mut Cell<T>> {
        self.cells.get_mut(id)
    }

    /// Number of cells in the whole table
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Current (row index, column index) position of a cell
    pub fn cell_position(&self, id: CellId) -> Option<(usize, usize)> {
        let cell = self.cells.get(id)?;
        let [a, b] = cell.owners();
        let (row_id, column_id) = if self.rows.contains(a) { (a, b) } else { (b, a) };
        let row = self.rows.index_of(row_id)?;
        let column = self.columns.index_of(column_id)?;
        Some((row, column))
    }

    /// Register an existing cell into one of its owner stripes
    ///
    /// Re-registration after an unregister is the supported use; a cell can
    /// never be pushed into a stripe that is not one of its two owners.
    /// Returns `false` if the cell was already a member.
    pub fn register_cell_in_stripe(&mut self, stripe: StripeId, cell: CellId) -> Result<bool> {
        let orientation = self
            .orientation_of(stripe)
            .ok_or(Error::UnknownStripe(stripe))?;
        let owner = self.cells.get(cell).ok_or(Error::UnknownCell(cell))?;
        if !owner.is_owned_by(stripe) {
            return Err(Error::ForeignCell { cell, stripe });
        }
        match self.stripe_list_mut(orientation).stripe_mut(stripe) {
            Some(s) => Ok(s.register_cell(cell)),
            None => Err(Error::UnknownStripe(stripe)),
        }
    }

    /// Remove a cell from a stripe's membership set
    ///
    /// The cell itself stays in the arena. Returns `false` if the cell was
    /// not a member.
    pub fn unregister_cell_from_stripe(&mut self, stripe: StripeId, cell: CellId) -> Result<bool> {
        let orientation = self
            .orientation_of(stripe)
            .ok_or(Error::UnknownStripe(stripe))?;
        match self.stripe_list_mut(orientation).stripe_mut(stripe) {
            Some(s) => Ok(s.unregister_cell(cell)),
            None => Err(Error::UnknownStripe(stripe)),
        }
    }

    /// Elements of a stripe's cells, in registration order
    ///
    /// Cells without an element contribute nothing.
    pub fn stripe_elements(&self, id: StripeId) -> Vec<&T> {
        match self.stripe(id) {
            Some(stripe) => stripe
                .cell_ids()
                .iter()
                .filter_map(|&c| self.cells.get(c).and_then(Cell::element))
                .collect(),
            None => Vec::new(),
        }
    }

    /// Check if any cell of the stripe holds an equal element
    pub fn stripe_contains_element(&self, id: StripeId, element: &T) -> bool
    where
        T: PartialEq,
    {
        self.stripe(id).is_some_and(|stripe| {
            stripe
                .cell_ids()
                .iter()
                .any(|&c| self.cells.get(c).and_then(Cell::element) == Some(element))
        })
    }

    // === Table-wide operations ===

    /// Empty both stripe lists and the cell arena
    ///
    /// Symmetric: no detachment bookkeeping is needed because both sides of
    /// every membership are dropped together. Handle counters keep running,
    /// so handles from before the clear stay stale.
    pub fn clear(&mut self) {
        self.rows.clear();
        self.columns.clear();
        self.cells.clear();
    }

    /// Drop every row and every cell, keeping the columns
    ///
    /// Column stripes keep their handles and titles; their membership sets
    /// are emptied along with the rows that owned the cells. Handle
    /// counters keep running, as with [`clear`](Self::clear).
    pub fn clear_rows(&mut self) {
        self.rows.clear();
        self.cells.clear();
        let columns: Vec<StripeId> = self.columns.ids().to_vec();
        for id in columns {
            if let Some(stripe) = self.columns.stripe_mut(id) {
                stripe.take_cell_ids();
            }
        }
    }

    /// Swap the row and column lists in place, transposing the table
    ///
    /// No stripe or cell data moves; only the two lists trade places and
    /// orientation tags. O(1).
    pub fn switch_rows_and_columns(&mut self) {
        std::mem::swap(&mut self.rows, &mut self.columns);
        self.rows.set_orientation(Orientation::Row);
        self.columns.set_orientation(Orientation::Column);
    }

    /// Produce a structural skeleton of this table
    ///
    /// The clone has stripes with the same titles at the same positions and
    /// no cells. Stripe handles carry over: an id valid for the source
    /// resolves to the corresponding copied stripe.
    pub fn clone_structure(&self) -> TableContent<T> {
        fn strip_cells(list: &StripeList) -> StripeList {
            let mut copy = list.clone();
            let ids: Vec<StripeId> = copy.ids().to_vec();
            for id in ids {
                if let Some(stripe) = copy.stripe_mut(id) {
                    stripe.take_cell_ids();
                }
            }
            copy
        }

        TableContent {
            rows: strip_cells(&self.rows),
            columns: strip_cells(&self.columns),
            cells: CellArena::new(),
            next_stripe: self.next_stripe,
        }
    }
}

impl<T> Default for TableContent<T> {
    fn default() -> Self {
        Self::new()
    }
}
