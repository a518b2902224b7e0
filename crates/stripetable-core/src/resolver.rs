//! Cell and stripe resolution
//!
//! Lookup and lazy creation of stripes and intersection cells, plus the
//! row-major flat-index arithmetic. Resolution never creates anything;
//! the `resolve_or_create_*` variants do, and are idempotent.

use crate::cell::CellId;
use crate::content::TableContent;
use crate::error::{Error, Result};
use crate::stripe::{Orientation, StripeId};
use crate::stripe_list::StripeKey;
use crate::MAX_STRIPES;

impl<T> TableContent<T> {
    // === Cell resolution ===

    /// Find the existing cell at the intersection of two stripes
    ///
    /// The intersection is the cell currently belonging to both membership
    /// sets: the smaller set is scanned and each candidate is tested for
    /// membership in the other, keeping the cost O(min) of the two cell
    /// counts. A cell carrying a stripe in its owner pair but unregistered
    /// from it does not qualify. Returns `None` when the intersection has
    /// never been materialized, when either handle is stale, and when both
    /// stripes have the same orientation (such stripes never share a cell).
    pub fn resolve_cell(&self, a: StripeId, b: StripeId) -> Option<CellId> {
        if a == b {
            return None;
        }
        let stripe_a = self.stripe(a)?;
        let stripe_b = self.stripe(b)?;
        let (scan, other) = if stripe_a.cell_count() <= stripe_b.cell_count() {
            (stripe_a, stripe_b)
        } else {
            (stripe_b, stripe_a)
        };
        scan.cell_ids()
            .iter()
            .copied()
            .find(|&id| other.contains_cell(id))
    }

    /// Get the cell at the intersection of two stripes, creating it on
    /// first access
    ///
    /// The two stripes must have orthogonal orientations. Calling this
    /// again with the same pair (in either order) returns the same cell.
    pub fn resolve_or_create_cell(&mut self, a: StripeId, b: StripeId) -> Result<CellId> {
        let orientation_a = self.orientation_of(a).ok_or(Error::UnknownStripe(a))?;
        let orientation_b = self.orientation_of(b).ok_or(Error::UnknownStripe(b))?;
        if orientation_a == orientation_b {
            return Err(Error::OrientationMismatch(orientation_a));
        }
        if let Some(existing) = self.resolve_cell(a, b) {
            return Ok(existing);
        }

        let (row, column) = match orientation_a {
            Orientation::Row => (a, b),
            Orientation::Column => (b, a),
        };
        let id = self.cells_mut().insert(row, column);
        // registering with both owners keeps the membership graph symmetric
        self.register_cell_in_stripe(a, id)?;
        self.register_cell_in_stripe(b, id)?;
        Ok(id)
    }

    /// Find the cell at the intersection of `stripe` and the orthogonal
    /// stripe addressed by `key`
    pub fn resolve_cell_by<'a, K>(&self, stripe: StripeId, key: K) -> Option<CellId>
    where
        K: Into<StripeKey<'a>>,
    {
        let orientation = self.orientation_of(stripe)?;
        let other = self.stripe_list(orientation.orthogonal()).get(key)?;
        self.resolve_cell(stripe, other)
    }

    // === Stripe resolution ===

    /// Look up a stripe by index or title without creating anything
    pub fn resolve_stripe<'a, K>(&self, orientation: Orientation, key: K) -> Option<StripeId>
    where
        K: Into<StripeKey<'a>>,
    {
        self.stripe_list(orientation).get(key)
    }

    /// Get the stripe addressed by `key`, creating it on first access
    ///
    /// An unknown title appends one new stripe carrying that title. An
    /// index past the end grows the list with untitled stripes until the
    /// index exists; the returned stripe is the one at that index. Growth
    /// is capped at [`MAX_STRIPES`].
    pub fn resolve_or_create_stripe<'a, K>(
        &mut self,
        orientation: Orientation,
        key: K,
    ) -> Result<StripeId>
    where
        K: Into<StripeKey<'a>>,
    {
        match key.into() {
            StripeKey::Index(index) => {
                if let Some(id) = self.stripe_list(orientation).get(index) {
                    return Ok(id);
                }
                if index >= MAX_STRIPES {
                    return Err(Error::IndexOutOfRange {
                        index,
                        max: MAX_STRIPES - 1,
                    });
                }
                while self.stripe_list(orientation).len() <= index {
                    self.add_stripe(orientation);
                }
                match self.stripe_list(orientation).get(index) {
                    Some(id) => Ok(id),
                    None => Err(Error::IndexOutOfRange {
                        index,
                        max: MAX_STRIPES - 1,
                    }),
                }
            }
            StripeKey::Title(title) => {
                if let Some(id) = self.stripe_list(orientation).get(title) {
                    return Ok(id);
                }
                Ok(self.add_titled_stripe(orientation, title))
            }
        }
    }

    // === Flat-index arithmetic ===

    /// Row index of a row-major flat offset, `flat / column_count`
    ///
    /// `None` when the table has no columns, where the division is
    /// undefined.
    pub fn row_index_of_flat(&self, flat: usize) -> Option<usize> {
        let columns = self.stripe_list_len(Orientation::Column);
        if columns == 0 {
            None
        } else {
            Some(flat / columns)
        }
    }

    /// Column index of a row-major flat offset, `flat % column_count`
    pub fn column_index_of_flat(&self, flat: usize) -> Option<usize> {
        let columns = self.stripe_list_len(Orientation::Column);
        if columns == 0 {
            None
        } else {
            Some(flat % columns)
        }
    }

    /// Row-major flat offset of a (row, column) position
    ///
    /// `None` when the table has no columns or `column` is past the last
    /// column; such an offset would alias into a different row.
    pub fn flat_index_of(&self, row: usize, column: usize) -> Option<usize> {
        let columns = self.stripe_list_len(Orientation::Column);
        if columns == 0 || column >= columns {
            None
        } else {
            Some(row * columns + column)
        }
    }
}
