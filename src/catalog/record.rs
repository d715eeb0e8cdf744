use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A single object in the catalog.
///
/// All sizes are in meters, the base unit every internal computation uses.
/// Display units are derived only at formatting time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObjectRecord {
    /// Unique, stable identifier (e.g. `golf_ball`). Lookup key across the
    /// whole catalog; collisions are rejected at load time.
    pub id: String,

    /// Human-readable display name.
    ///
    /// **Source**: `n` field of the persisted record (alias: `name`)
    pub name: String,

    /// Representative size in meters. Always positive. When [`range`] is
    /// present this is the derived arithmetic mean of the bounds, so it
    /// always lies within them.
    ///
    /// **Source**: `d` field of the persisted record (alias: `size`),
    /// overridden by the range mean when a range is present
    ///
    /// [`range`]: ObjectRecord::range
    pub size: f64,

    /// Optional size range in meters for objects whose extent varies
    /// (a virus, a human hair). Present or absent, never a sentinel pair.
    ///
    /// **Source**: `r` field of the persisted record (alias: `range`)
    pub range: Option<SizeRange>,

    /// Free-text description. May be empty.
    ///
    /// **Source**: `desc` field of the persisted record (alias: `description`)
    pub description: String,

    /// Classification tags. Duplicates collapse; order is irrelevant.
    ///
    /// **Source**: `tags` field of the persisted record
    pub tags: BTreeSet<String>,
}

/// Inclusive size bounds in meters, with `min <= max` and both positive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SizeRange {
    pub min: f64,
    pub max: f64,
}

impl SizeRange {
    /// The arithmetic mean of the bounds, the single representative size
    /// used in comparisons.
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        (self.min + self.max) / 2.0
    }
}

/// Informational header of the persisted catalog document.
///
/// Carried through for display but never validated against the actual
/// contents; a flat legacy document has none of it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CatalogMetadata {
    /// Catalog format/content version string.
    #[serde(default)]
    pub version: Option<String>,

    /// Object count the producer claims the document holds.
    #[serde(default)]
    pub total_objects: Option<u64>,

    /// Human-readable span of sizes the producer claims the document covers.
    #[serde(default)]
    pub scale_range: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_midpoint_is_arithmetic_mean() {
        let range = SizeRange { min: 2.0, max: 4.0 };
        assert!((range.midpoint() - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_midpoint_within_bounds() {
        let range = SizeRange { min: 1.0e-9, max: 1.0e-3 };
        let mid = range.midpoint();
        assert!(mid > range.min && mid < range.max);
    }

    #[test]
    fn test_metadata_defaults_to_empty() {
        let metadata = CatalogMetadata::default();
        assert_eq!(metadata.version, None);
        assert_eq!(metadata.total_objects, None);
        assert_eq!(metadata.scale_range, None);
    }
}
