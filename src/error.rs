//! Failure conditions for catalog loading, lookup, and scale arithmetic.

/// All the ways a catalog operation or scale computation can fail.
///
/// Every condition is a distinct variant so callers can match on the failure
/// rather than parse a message. Nothing in this crate converts a failure into
/// a default or placeholder result.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The catalog source was malformed: unparseable document, missing
    /// required fields, a non-positive size, an inverted range, or a
    /// duplicate object id.
    #[error("invalid catalog data: {reason}")]
    CatalogLoad { reason: String },

    /// An object id was looked up that the catalog does not contain.
    #[error("object '{id}' not found in catalog")]
    NotFound { id: String },

    /// A size-range query had its bounds inverted.
    #[error("invalid size range: min ({min}) is greater than max ({max})")]
    InvalidRange { min: f64, max: f64 },

    /// A non-positive (or non-finite) size reached the unit formatter.
    #[error("invalid size {size}: physical sizes must be positive")]
    InvalidSize { size: f64 },

    /// A zero-valued denominator reached a ratio, scale, or accuracy
    /// computation.
    #[error("division by zero in scale computation")]
    DivisionByZero,

    /// A closest-match search was requested over zero candidates.
    #[error("no candidate objects to match against")]
    EmptyCatalog,
}
