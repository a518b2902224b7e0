//! Ordered stripe collections
//!
//! A [`StripeList`] holds every stripe of one orientation. The list position
//! is the stripe's row- or column-number: indices are contiguous from 0,
//! growth appends, and removal shifts every following stripe down by one.

use ahash::AHashMap;

use crate::cell::CellId;
use crate::stripe::{Orientation, Stripe, StripeId};

/// A stripe address: either a list position or a title
///
/// Index- and title-based addressing share one lookup path
/// ([`StripeList::get`]); `From` conversions let callers pass either form
/// directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StripeKey<'a> {
    /// Position in the list (0-based row- or column-number)
    Index(usize),
    /// First stripe whose title matches exactly
    Title(&'a str),
}

impl<'a> From<usize> for StripeKey<'a> {
    fn from(index: usize) -> Self {
        StripeKey::Index(index)
    }
}

impl<'a> From<&'a str> for StripeKey<'a> {
    fn from(title: &'a str) -> Self {
        StripeKey::Title(title)
    }
}

impl<'a> From<&'a String> for StripeKey<'a> {
    fn from(title: &'a String) -> Self {
        StripeKey::Title(title)
    }
}

/// An ordered collection of same-orientation stripes
///
/// Stripes are owned by the list and addressed by [`StripeId`]; `order`
/// carries the list positions. Creation and removal go through
/// [`TableContent`](crate::TableContent), which mints ids and keeps cell
/// memberships consistent across both orientations.
#[derive(Debug, Clone)]
pub struct StripeList {
    orientation: Orientation,
    order: Vec<StripeId>,
    stripes: AHashMap<StripeId, Stripe>,
}

impl StripeList {
    /// Create a new, empty list of the given orientation
    pub(crate) fn new(orientation: Orientation) -> Self {
        Self {
            orientation,
            order: Vec::new(),
            stripes: AHashMap::new(),
        }
    }

    /// The orientation shared by every stripe in this list
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Re-tag the list; only used by the wholesale row/column switch
    pub(crate) fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation = orientation;
    }

    /// Number of stripes in the list
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Check if the list has no stripes
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Look up a stripe by index or title
    ///
    /// Index lookup is bounds-checked; title lookup is a linear scan
    /// returning the first exact match. Duplicate titles are allowed, so
    /// title addressing is only deterministic while titles are distinct.
    pub fn get<'a, K: Into<StripeKey<'a>>>(&self, key: K) -> Option<StripeId> {
        self.find(key.into())
    }

    fn find(&self, key: StripeKey<'_>) -> Option<StripeId> {
        match key {
            StripeKey::Index(index) => self.order.get(index).copied(),
            StripeKey::Title(title) => self
                .order
                .iter()
                .copied()
                .find(|id| self.stripes.get(id).and_then(Stripe::title) == Some(title)),
        }
    }

    /// Get a stripe by handle
    pub fn stripe(&self, id: StripeId) -> Option<&Stripe> {
        self.stripes.get(&id)
    }

    /// Get a stripe by handle, mutably
    pub(crate) fn stripe_mut(&mut self, id: StripeId) -> Option<&mut Stripe> {
        self.stripes.get_mut(&id)
    }

    /// Check if the handle resolves to a stripe in this list
    pub fn contains(&self, id: StripeId) -> bool {
        self.stripes.contains_key(&id)
    }

    /// Position of a stripe in the list
    ///
    /// Returns `None` if the stripe is not a member of this list.
    pub fn index_of(&self, id: StripeId) -> Option<usize> {
        self.order.iter().position(|&s| s == id)
    }

    /// Find the stripe whose membership set contains the given cell
    pub fn stripe_of_cell(&self, cell: CellId) -> Option<StripeId> {
        self.order
            .iter()
            .copied()
            .find(|id| self.stripes.get(id).is_some_and(|s| s.contains_cell(cell)))
    }

    /// Stripe handles in list order
    pub fn ids(&self) -> &[StripeId] {
        &self.order
    }

    /// Iterate over stripes in list order
    pub fn iter(&self) -> impl Iterator<Item = (StripeId, &Stripe)> {
        self.order.iter().map(|&id| (id, &self.stripes[&id]))
    }

    /// Stripe titles in list order
    pub fn titles(&self) -> impl Iterator<Item = Option<&str>> {
        self.order.iter().map(|id| self.stripes[id].title())
    }

    /// Append a stripe
    pub(crate) fn push(&mut self, id: StripeId, stripe: Stripe) {
        self.stripes.insert(id, stripe);
        self.order.push(id);
    }

    /// Insert a stripe at `index`, shifting later stripes
    ///
    /// Callers must have grown the list so that `index <= len()`.
    pub(crate) fn insert(&mut self, index: usize, id: StripeId, stripe: Stripe) {
        debug_assert!(index <= self.order.len());
        self.stripes.insert(id, stripe);
        self.order.insert(index, id);
    }

    /// Remove a stripe by handle; following indices shift down by one
    pub(crate) fn remove(&mut self, id: StripeId) -> Option<Stripe> {
        let index = self.index_of(id)?;
        self.order.remove(index);
        self.stripes.remove(&id)
    }

    /// Drop all stripes without detaching their cells
    ///
    /// Cells referencing a cleared stripe are simply discarded; callers
    /// needing symmetric cleanup go through
    /// [`TableContent::clear`](crate::TableContent::clear).
    pub(crate) fn clear(&mut self) {
        self.order.clear();
        self.stripes.clear();
    }
}
