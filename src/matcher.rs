//! Nearest-match search over catalog candidates.

use crate::Result;
use crate::catalog::ObjectRecord;
use crate::compare::effective_size;
use crate::error::Error;

/// Find the candidate whose effective size is closest to `target_size` by
/// absolute difference.
///
/// Always a full linear scan in iteration order. Ties go to the first
/// candidate encountered: the comparison is strictly less-than, so a later
/// candidate at the same distance never displaces an earlier one. Any
/// sorted or indexed replacement would silently change that tie rule.
pub fn find_closest<'a, I>(target_size: f64, candidates: I) -> Result<&'a ObjectRecord>
where
    I: IntoIterator<Item = &'a ObjectRecord>,
{
    let mut best: Option<(&ObjectRecord, f64)> = None;

    for candidate in candidates {
        let distance = (effective_size(candidate) - target_size).abs();
        let better = match best {
            None => true,
            Some((_, best_distance)) => distance < best_distance,
        };
        if better {
            best = Some((candidate, distance));
        }
    }

    best.map(|(record, _)| record).ok_or(Error::EmptyCatalog)
}
