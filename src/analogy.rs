//! The scale-analogy engine: "A is to B as C is to ?".
//!
//! An analogy takes the ratio between two known objects and applies it to a
//! third, then asks the catalog which real object best matches the result.
//! The answer carries an explicit accuracy score rather than a black-box
//! "best guess", so a poor match is visible as one.

use crate::Result;
use crate::catalog::Catalog;
use crate::compare::{effective_size, ratio};
use crate::error::Error;
use crate::matcher::find_closest;
use serde::Serialize;

/// Which catalog entries are eligible as the analogy's closest match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchPolicy {
    /// The whole catalog, the three input objects included. An input's own
    /// domain peers are legitimate matches, so this is the default.
    #[default]
    IncludeAll,

    /// Exclude the three input objects from candidacy.
    ExcludeInputs,
}

/// The resolved analogy: the applied scale factor, the size it predicts,
/// and the catalog's nearest real object with an accuracy score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalogyResult {
    /// `effective_size(B) / effective_size(A)`.
    pub scale_factor: f64,

    /// `effective_size(C) * scale_factor`, in meters.
    pub expected_size: f64,

    /// Id of the catalog entry closest to the expected size.
    pub closest_match_id: String,

    /// `(1 - |closest - expected| / expected) * 100`. Deliberately
    /// unclamped: a negative value or one above 100 signals a catalog with
    /// no good match rather than being hidden by a clamp.
    pub accuracy_percent: f64,
}

/// Solve `A : B :: C : ?` over the catalog.
///
/// All three ids must resolve ([`Error::NotFound`] otherwise). The zero
/// checks on the denominators are defensive: catalog invariants keep sizes
/// positive, but this boundary also serves raw callers.
pub fn create_analogy(catalog: &Catalog, id_a: &str, id_b: &str, id_c: &str, policy: MatchPolicy) -> Result<AnalogyResult> {
    let a = catalog.get(id_a)?;
    let b = catalog.get(id_b)?;
    let c = catalog.get(id_c)?;

    let scale_factor = ratio(effective_size(b), effective_size(a))?;
    let expected_size = effective_size(c) * scale_factor;

    let candidates = catalog.all().iter().filter(|record| match policy {
        MatchPolicy::IncludeAll => true,
        MatchPolicy::ExcludeInputs => record.id != a.id && record.id != b.id && record.id != c.id,
    });

    let closest = find_closest(expected_size, candidates)?;
    let accuracy_percent = accuracy(effective_size(closest), expected_size)?;

    Ok(AnalogyResult {
        scale_factor,
        expected_size,
        closest_match_id: closest.id.clone(),
        accuracy_percent,
    })
}

/// How well `actual` matches `expected`, as a percentage. 100 is a perfect
/// match; the value goes negative once the miss exceeds 2x. Reported as
/// computed, never clamped.
fn accuracy(actual: f64, expected: f64) -> Result<f64> {
    if expected == 0.0 {
        return Err(Error::DivisionByZero);
    }
    Ok((1.0 - (actual - expected).abs() / expected) * 100.0)
}
