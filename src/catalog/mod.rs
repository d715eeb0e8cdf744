//! The in-memory object catalog: load, lookup, search, and filter.
//!
//! A [`Catalog`] is built once from a persisted JSON document (or directly
//! from records, in tests) and is immutable for the life of the process.
//! Every query operation is a pure read; none of them can observe a
//! half-loaded or mutated catalog.

mod format;
mod record;

pub use record::{CatalogMetadata, ObjectRecord, SizeRange};

use crate::Result;
use crate::compare::effective_size;
use crate::error::Error;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// The shipped catalog, embedded so the tool works without a path argument.
const BUILTIN_CATALOG: &str = include_str!("../../data/objects.json");

/// An immutable, ordered collection of object records keyed by id.
///
/// Records keep document order, so repeated scans visit candidates in the
/// same sequence every time; the matcher's tie-breaking depends on this.
#[derive(Debug, Clone)]
pub struct Catalog {
    metadata: CatalogMetadata,
    records: Vec<ObjectRecord>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Load a catalog from a JSON file on disk.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| Error::CatalogLoad {
            reason: format!("unable to read '{}': {e}", path.display()),
        })?;
        Self::from_json(&text)
    }

    /// Parse a catalog from JSON text, accepting both the nested
    /// metadata/objects shape and the flat legacy shape.
    pub fn from_json(text: &str) -> Result<Self> {
        let (metadata, records) = format::parse(text)?;
        let catalog = Self::with_metadata(metadata, records)?;

        log::info!(
            "loaded {} objects from catalog (version {})",
            catalog.len(),
            catalog.metadata.version.as_deref().unwrap_or("unknown")
        );
        Ok(catalog)
    }

    /// Build a catalog from records directly, running the same validation
    /// pass as the JSON loaders. This is how tests construct small synthetic
    /// catalogs.
    pub fn from_records(records: Vec<ObjectRecord>) -> Result<Self> {
        Self::with_metadata(CatalogMetadata::default(), records)
    }

    /// The catalog shipped with the tool.
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_CATALOG)
    }

    fn with_metadata(metadata: CatalogMetadata, records: Vec<ObjectRecord>) -> Result<Self> {
        let mut index = HashMap::with_capacity(records.len());
        for (position, record) in records.iter().enumerate() {
            validate(record)?;
            if index.insert(record.id.clone(), position).is_some() {
                return Err(Error::CatalogLoad {
                    reason: format!("duplicate object id '{}'", record.id),
                });
            }
        }

        Ok(Self { metadata, records, index })
    }

    /// Look up a record by id. Unknown ids are a typed failure, never a
    /// default object.
    pub fn get(&self, id: &str) -> Result<&ObjectRecord> {
        self.index
            .get(id)
            .map(|&position| &self.records[position])
            .ok_or_else(|| Error::NotFound { id: id.to_string() })
    }

    /// All records in catalog order.
    #[must_use]
    pub fn all(&self) -> &[ObjectRecord] {
        &self.records
    }

    /// The informational metadata block of the source document, if any.
    #[must_use]
    pub const fn metadata(&self) -> &CatalogMetadata {
        &self.metadata
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Case-insensitive substring search over name and description.
    /// An empty query returns the full catalog.
    #[must_use]
    pub fn search(&self, text: &str) -> Vec<&ObjectRecord> {
        if text.is_empty() {
            return self.records.iter().collect();
        }

        let query = text.to_lowercase();
        self.records
            .iter()
            .filter(|r| r.name.to_lowercase().contains(&query) || r.description.to_lowercase().contains(&query))
            .collect()
    }

    /// Records whose tag set intersects the query tags (logical OR).
    /// An empty query tag set returns the full catalog.
    #[must_use]
    pub fn filter_by_tags<S: AsRef<str>>(&self, tags: &[S]) -> Vec<&ObjectRecord> {
        if tags.is_empty() {
            return self.records.iter().collect();
        }

        self.records
            .iter()
            .filter(|r| tags.iter().any(|tag| r.tags.contains(tag.as_ref())))
            .collect()
    }

    /// Records whose effective size lies in `[min, max]`, inclusive on both
    /// ends. Fails with [`Error::InvalidRange`] when the bounds are inverted.
    pub fn find_by_size_range(&self, min: f64, max: f64) -> Result<Vec<&ObjectRecord>> {
        if min > max {
            return Err(Error::InvalidRange { min, max });
        }

        Ok(self
            .records
            .iter()
            .filter(|r| {
                let size = effective_size(r);
                min <= size && size <= max
            })
            .collect())
    }
}

/// Enforce the per-record invariants: positive finite sizes, ordered
/// positive range bounds, and a representative size inside the range.
fn validate(record: &ObjectRecord) -> Result<()> {
    if let Some(range) = &record.range {
        if !(range.min > 0.0) || !(range.max > 0.0) || !range.min.is_finite() || !range.max.is_finite() {
            return Err(Error::CatalogLoad {
                reason: format!("object '{}' has a non-positive range bound [{}, {}]", record.id, range.min, range.max),
            });
        }
        if range.min > range.max {
            return Err(Error::CatalogLoad {
                reason: format!("object '{}' has an inverted range [{}, {}]", record.id, range.min, range.max),
            });
        }
        if record.size < range.min || record.size > range.max {
            return Err(Error::CatalogLoad {
                reason: format!("object '{}' has size {} outside its range [{}, {}]", record.id, record.size, range.min, range.max),
            });
        }
    }

    if !(record.size > 0.0) || !record.size.is_finite() {
        return Err(Error::CatalogLoad {
            reason: format!("object '{}' has non-positive size {}", record.id, record.size),
        });
    }

    Ok(())
}
