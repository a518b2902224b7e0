//! Error types for stripetable-core

use crate::cell::CellId;
use crate::stripe::{Orientation, StripeId};
use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in stripetable-core
///
/// Lookup failures (missing index, missing title, no cell at an
/// intersection) are never errors; they come back as `None` from the
/// resolving call. The variants here cover structural violations that
/// cannot be expressed as "not found".
#[derive(Debug, Error)]
pub enum Error {
    /// Stripe index beyond the growth cap
    #[error("Stripe index {index} out of range (max: {max})")]
    IndexOutOfRange { index: usize, max: usize },

    /// Two stripes of the same orientation where a row/column pair is required
    #[error("Orientation mismatch: both stripes are {0:?} stripes")]
    OrientationMismatch(Orientation),

    /// A stripe handle that no longer resolves (removed or never minted here)
    #[error("Unknown stripe: {0:?}")]
    UnknownStripe(StripeId),

    /// A cell handle that no longer resolves (detached or never minted here)
    #[error("Unknown cell: {0:?}")]
    UnknownCell(CellId),

    /// A cell registered into a stripe that is not one of its two owners
    #[error("Cell {cell:?} is not owned by stripe {stripe:?}")]
    ForeignCell { cell: CellId, stripe: StripeId },

    /// An aggregate needs at least one underlying stripe
    #[error("Aggregate stripe requires at least one member")]
    EmptyAggregate,

    /// An attached row store refused a notification
    #[error("Row store error: {0}")]
    Store(#[from] crate::store::StoreError),

    /// A load or save was requested on a table without a row store
    #[error("Table has no row store attached")]
    NoStore,

    /// Any other error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Build an [`Error::Other`] from any message
    pub fn other<S: Into<String>>(message: S) -> Self {
        Error::Other(message.into())
    }
}
