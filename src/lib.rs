//! Core library for sizewise
//!
//! This library implements a reference lookup and proportional-scaling
//! calculator over a static catalog of physical objects spanning 61 orders
//! of magnitude, from the Planck length to the observable universe.
//!
//! # Module Organization
//!
//! - [`catalog`]: The immutable object catalog and its load/search operations
//! - [`units`]: Metric-prefix selection and scale categories
//! - [`compare`]: Size ratios and pairwise comparisons
//! - [`matcher`]: Nearest-match search by absolute size
//! - [`analogy`]: The scale-analogy engine composing the above
//!
//! The catalog is loaded once and treated as immutable for the life of the
//! process; every other operation is a pure function over it, safe to call
//! from any number of readers without synchronization.

/// Result type alias using the crate's typed [`Error`] as the default error type.
pub type Result<T, E = Error> = core::result::Result<T, E>;

pub mod analogy;
pub mod catalog;
pub mod compare;
pub mod matcher;
pub mod units;

mod error;

pub use crate::analogy::{AnalogyResult, MatchPolicy, create_analogy};
pub use crate::catalog::{Catalog, CatalogMetadata, ObjectRecord, SizeRange};
pub use crate::compare::{Comparison, compare, effective_size, ratio};
pub use crate::error::Error;
pub use crate::matcher::find_closest;
pub use crate::units::{FormattedSize, MetricPrefix, ScaleCategory, format_size};
