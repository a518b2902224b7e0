//! Stripe aggregates
//!
//! A [`StripeAggregate`] bundles several stripes behind one stripe-like
//! surface. Reads union the members in order; writes are directed at a
//! single modification target, the first member. The aggregate holds only
//! handles, so it stays valid across structural changes and goes stale
//! member by member.

use crate::cell::CellId;
use crate::content::TableContent;
use crate::error::{Error, Result};
use crate::stripe::{Orientation, StripeId};

/// Several stripes read as one
///
/// The first member doubles as the modification target: registering or
/// unregistering a cell through the aggregate only ever touches it. Reads
/// walk all members in construction order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StripeAggregate {
    members: Vec<StripeId>,
}

impl StripeAggregate {
    /// Bundle the given stripes; the first becomes the modification target
    pub fn new(members: Vec<StripeId>) -> Result<Self> {
        if members.is_empty() {
            return Err(Error::EmptyAggregate);
        }
        Ok(Self { members })
    }

    /// The stripe all writes are directed at
    pub fn target(&self) -> StripeId {
        self.members[0]
    }

    /// All member stripes, target first
    pub fn members(&self) -> &[StripeId] {
        &self.members
    }

    // === Unioned reads ===

    /// Check whether any member holds the cell; stops at the first hit
    pub fn contains_cell<T>(&self, content: &TableContent<T>, cell: CellId) -> bool {
        self.members
            .iter()
            .any(|&m| content.stripe(m).is_some_and(|s| s.contains_cell(cell)))
    }

    /// Check whether any member holds a cell with an equal element
    pub fn contains_element<T>(&self, content: &TableContent<T>, element: &T) -> bool
    where
        T: PartialEq,
    {
        self.members
            .iter()
            .any(|&m| content.stripe_contains_element(m, element))
    }

    /// Cells of all members, concatenated in member order
    ///
    /// A cell shared by two members appears once per membership; stale
    /// members contribute nothing.
    pub fn cell_ids<T>(&self, content: &TableContent<T>) -> Vec<CellId> {
        self.members
            .iter()
            .filter_map(|&m| content.stripe(m))
            .flat_map(|s| s.cell_ids().iter().copied())
            .collect()
    }

    /// Elements of all members' cells, concatenated in member order
    pub fn elements<'c, T>(&self, content: &'c TableContent<T>) -> Vec<&'c T> {
        self.members
            .iter()
            .flat_map(|&m| content.stripe_elements(m))
            .collect()
    }

    /// Total cell count across members
    pub fn cell_count<T>(&self, content: &TableContent<T>) -> usize {
        self.members
            .iter()
            .filter_map(|&m| content.stripe(m))
            .map(|s| s.cell_count())
            .sum()
    }

    // === Target delegation ===

    /// Title of the modification target
    pub fn title<'c, T>(&self, content: &'c TableContent<T>) -> Option<&'c str> {
        content.stripe_title(self.target())
    }

    /// Set the title of the modification target
    pub fn set_title<T>(&self, content: &mut TableContent<T>, title: Option<String>) -> Result<()> {
        content.set_stripe_title(self.target(), title)
    }

    /// Orientation of the modification target
    pub fn orientation<T>(&self, content: &TableContent<T>) -> Option<Orientation> {
        content.orientation_of(self.target())
    }

    /// Register a cell into the modification target only
    ///
    /// The other members are left alone even when the cell is owned by one
    /// of them.
    pub fn register_cell<T>(&self, content: &mut TableContent<T>, cell: CellId) -> Result<bool> {
        content.register_cell_in_stripe(self.target(), cell)
    }

    /// Unregister a cell from the modification target only
    pub fn unregister_cell<T>(&self, content: &mut TableContent<T>, cell: CellId) -> Result<bool> {
        content.unregister_cell_from_stripe(self.target(), cell)
    }

    // === Whole-aggregate operations ===

    /// Detach the cells of every member, in member order
    ///
    /// All members are validated before anything is detached. A cell owned
    /// by two members disappears during the first member's pass and is
    /// counted once. Returns the total number of cells detached.
    pub fn detach_all<T>(&self, content: &mut TableContent<T>) -> Result<usize> {
        for &member in &self.members {
            if content.stripe(member).is_none() {
                return Err(Error::UnknownStripe(member));
            }
        }
        let mut detached = 0;
        for &member in &self.members {
            detached += content.detach_stripe_cells(member)?;
        }
        Ok(detached)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn content_with_rows(n: usize) -> (TableContent<i32>, Vec<StripeId>, StripeId) {
        let mut content = TableContent::new();
        let rows: Vec<StripeId> = (0..n).map(|_| content.add_stripe(Orientation::Row)).collect();
        let column = content.add_stripe(Orientation::Column);
        (content, rows, column)
    }

    #[test]
    fn test_new_rejects_empty() {
        let err = StripeAggregate::new(Vec::new()).unwrap_err();
        assert!(matches!(err, Error::EmptyAggregate));
    }

    #[test]
    fn test_target_is_first_member() {
        let (_, rows, _) = content_with_rows(3);
        let aggregate = StripeAggregate::new(rows.clone()).unwrap();
        assert_eq!(aggregate.target(), rows[0]);
        assert_eq!(aggregate.members(), &rows[..]);
    }

    #[test]
    fn test_reads_union_members_in_order() {
        let (mut content, rows, column) = content_with_rows(2);
        let first = content.resolve_or_create_cell(rows[0], column).unwrap();
        let second = content.resolve_or_create_cell(rows[1], column).unwrap();
        content.cell_mut(first).unwrap().set_element(10);
        content.cell_mut(second).unwrap().set_element(20);

        let aggregate = StripeAggregate::new(vec![rows[1], rows[0]]).unwrap();

        assert_eq!(aggregate.cell_ids(&content), vec![second, first]);
        assert_eq!(aggregate.elements(&content), vec![&20, &10]);
        assert_eq!(aggregate.cell_count(&content), 2);
        assert!(aggregate.contains_cell(&content, first));
        assert!(aggregate.contains_element(&content, &20));
        assert!(!aggregate.contains_element(&content, &30));
    }

    #[test]
    fn test_shared_cell_appears_once_per_membership() {
        let mut content: TableContent<i32> = TableContent::new();
        let row = content.add_stripe(Orientation::Row);
        let column = content.add_stripe(Orientation::Column);
        let cell = content.resolve_or_create_cell(row, column).unwrap();

        // a mixed aggregate over both owners sees the cell through each
        let aggregate = StripeAggregate::new(vec![row, column]).unwrap();
        assert_eq!(aggregate.cell_ids(&content), vec![cell, cell]);
        assert_eq!(aggregate.cell_count(&content), 2);
    }

    #[test]
    fn test_writes_only_touch_the_target() {
        let (mut content, rows, column) = content_with_rows(2);
        let cell = content.resolve_or_create_cell(rows[0], column).unwrap();
        content.unregister_cell_from_stripe(rows[0], cell).unwrap();

        let aggregate = StripeAggregate::new(vec![rows[0], rows[1]]).unwrap();
        assert!(aggregate.register_cell(&mut content, cell).unwrap());

        assert!(content.stripe(rows[0]).unwrap().contains_cell(cell));
        assert!(content.stripe(rows[1]).unwrap().is_empty());

        assert!(aggregate.unregister_cell(&mut content, cell).unwrap());
        assert!(content.stripe(rows[0]).unwrap().is_empty());
    }

    #[test]
    fn test_register_foreign_cell_through_aggregate() {
        let (mut content, rows, column) = content_with_rows(2);
        let cell = content.resolve_or_create_cell(rows[1], column).unwrap();

        // rows[0] is the target but does not own the cell
        let aggregate = StripeAggregate::new(vec![rows[0], rows[1]]).unwrap();
        let err = aggregate.register_cell(&mut content, cell).unwrap_err();
        assert!(matches!(err, Error::ForeignCell { .. }));
    }

    #[test]
    fn test_title_and_orientation_delegate_to_target() {
        let (mut content, rows, _) = content_with_rows(2);
        let aggregate = StripeAggregate::new(rows.clone()).unwrap();

        aggregate
            .set_title(&mut content, Some("merged".into()))
            .unwrap();
        assert_eq!(aggregate.title(&content), Some("merged"));
        assert_eq!(content.stripe_title(rows[0]), Some("merged"));
        assert_eq!(content.stripe_title(rows[1]), None);
        assert_eq!(aggregate.orientation(&content), Some(Orientation::Row));
    }

    #[test]
    fn test_detach_all_empties_every_member() {
        let (mut content, rows, column) = content_with_rows(2);
        content.resolve_or_create_cell(rows[0], column).unwrap();
        content.resolve_or_create_cell(rows[1], column).unwrap();

        let aggregate = StripeAggregate::new(rows.clone()).unwrap();
        let detached = aggregate.detach_all(&mut content).unwrap();

        assert_eq!(detached, 2);
        assert_eq!(content.cell_count(), 0);
        assert!(content.stripe(rows[0]).unwrap().is_empty());
        assert!(content.stripe(rows[1]).unwrap().is_empty());
        assert!(content.stripe(column).unwrap().is_empty());
    }

    #[test]
    fn test_detach_all_with_stale_member() {
        let (mut content, rows, column) = content_with_rows(2);
        content.resolve_or_create_cell(rows[0], column).unwrap();
        content.remove_stripe(rows[1]).unwrap();

        let aggregate = StripeAggregate::new(rows.clone()).unwrap();
        let err = aggregate.detach_all(&mut content).unwrap_err();

        assert!(matches!(err, Error::UnknownStripe(_)));
        // validation happens before any member is touched
        assert_eq!(content.cell_count(), 1);
    }

    #[test]
    fn test_stale_members_contribute_nothing_to_reads() {
        let (mut content, rows, column) = content_with_rows(2);
        let kept = content.resolve_or_create_cell(rows[0], column).unwrap();
        content.resolve_or_create_cell(rows[1], column).unwrap();
        let aggregate = StripeAggregate::new(rows.clone()).unwrap();

        content.remove_stripe(rows[1]).unwrap();

        assert_eq!(aggregate.cell_ids(&content), vec![kept]);
        assert_eq!(aggregate.cell_count(&content), 1);
    }
}
