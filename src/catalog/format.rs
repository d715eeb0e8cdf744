//! The two persisted catalog shapes and their normalization.
//!
//! A catalog document is either the efficient nested form (a `_metadata`
//! block plus an `objects` map) or the flat legacy form (records directly at
//! the top level, `_`-prefixed keys skipped). Both collapse here into plain
//! [`ObjectRecord`]s; nothing downstream ever branches on the source shape.

use super::record::{CatalogMetadata, ObjectRecord, SizeRange};
use crate::Result;
use crate::error::Error;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::BTreeSet;

/// One record as persisted. Field names follow the efficient short form;
/// the long-form names are accepted as aliases.
#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(alias = "name")]
    n: String,

    #[serde(alias = "size")]
    d: f64,

    #[serde(default, alias = "range")]
    r: Option<[f64; 2]>,

    #[serde(default, alias = "description")]
    desc: String,

    #[serde(default)]
    tags: Vec<String>,
}

/// Parse either document shape into metadata plus records in document order.
///
/// This only normalizes shape; the catalog invariants (positive sizes,
/// ordered range bounds, unique ids) are enforced by the caller so that
/// programmatically built catalogs pass through the same checks.
pub(super) fn parse(text: &str) -> Result<(CatalogMetadata, Vec<ObjectRecord>)> {
    let document: Map<String, Value> = serde_json::from_str(text).map_err(|e| Error::CatalogLoad {
        reason: format!("unparseable JSON document: {e}"),
    })?;

    let metadata = parse_metadata(&document)?;

    let records = match document.get("objects") {
        Some(Value::Object(objects)) => parse_records(objects)?,
        Some(other) => {
            return Err(Error::CatalogLoad {
                reason: format!("'objects' must be a map of records, got {}", type_name(other)),
            });
        }
        // Flat legacy shape: records at the top level, metadata keys skipped.
        None => {
            let mut flat = Map::new();
            for (key, value) in &document {
                if !key.starts_with('_') && key != "metadata" {
                    let _ = flat.insert(key.clone(), value.clone());
                }
            }
            parse_records(&flat)?
        }
    };

    Ok((metadata, records))
}

fn parse_metadata(document: &Map<String, Value>) -> Result<CatalogMetadata> {
    let Some(raw) = document.get("_metadata").or_else(|| document.get("metadata")) else {
        return Ok(CatalogMetadata::default());
    };

    CatalogMetadata::deserialize(raw).map_err(|e| Error::CatalogLoad {
        reason: format!("malformed metadata block: {e}"),
    })
}

fn parse_records(objects: &Map<String, Value>) -> Result<Vec<ObjectRecord>> {
    let mut records = Vec::with_capacity(objects.len());
    for (id, value) in objects {
        let raw = RawRecord::deserialize(value).map_err(|e| Error::CatalogLoad {
            reason: format!("object '{id}' is malformed: {e}"),
        })?;
        records.push(normalize(id, raw));
    }
    Ok(records)
}

/// Collapse a raw record into the internal representation. When a range is
/// present the representative size is its arithmetic mean; the scalar size
/// field is authoritative only without one.
fn normalize(id: &str, raw: RawRecord) -> ObjectRecord {
    let range = raw.r.map(|[min, max]| SizeRange { min, max });
    let size = range.map_or(raw.d, |r| r.midpoint());

    ObjectRecord {
        id: id.to_string(),
        name: raw.n,
        size,
        range,
        description: raw.desc,
        tags: raw.tags.into_iter().collect::<BTreeSet<_>>(),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "a map",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NESTED: &str = r#"{
        "_metadata": { "version": "2.1", "total_objects": 2, "scale_range": "1e-10 m to 1e7 m" },
        "objects": {
            "hydrogen_atom": { "n": "Hydrogen Atom", "d": 1.06e-10, "desc": "Smallest atom", "tags": ["atomic"] },
            "earth": { "n": "Earth", "d": 1.2749e7, "desc": "Home", "tags": ["planetary"] }
        }
    }"#;

    const FLAT: &str = r#"{
        "_metadata": { "version": "1.0" },
        "golf_ball": { "n": "Golf Ball", "d": 4.267e-2 },
        "earth": { "n": "Earth", "d": 1.2749e7 }
    }"#;

    #[test]
    fn test_parse_nested_shape() {
        let (metadata, records) = parse(NESTED).unwrap();
        assert_eq!(metadata.version.as_deref(), Some("2.1"));
        assert_eq!(metadata.total_objects, Some(2));
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, "hydrogen_atom");
        assert_eq!(records[1].id, "earth");
    }

    #[test]
    fn test_parse_flat_shape_skips_metadata_keys() {
        let (metadata, records) = parse(FLAT).unwrap();
        assert_eq!(metadata.version.as_deref(), Some("1.0"));
        let ids: Vec<_> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["golf_ball", "earth"]);
    }

    #[test]
    fn test_parse_accepts_long_field_names() {
        let text = r#"{
            "objects": {
                "moon": {
                    "name": "Moon",
                    "size": 3.4748e6,
                    "description": "Earth's satellite",
                    "tags": ["planetary"]
                }
            }
        }"#;
        let (_, records) = parse(text).unwrap();
        assert_eq!(records[0].name, "Moon");
        assert!((records[0].size - 3.4748e6).abs() < 1.0);
        assert_eq!(records[0].description, "Earth's satellite");
    }

    #[test]
    fn test_range_overrides_scalar_size() {
        let text = r#"{
            "objects": {
                "virus": { "n": "Virus", "d": 999.0, "r": [2.0e-8, 3.0e-7] }
            }
        }"#;
        let (_, records) = parse(text).unwrap();
        let expected = (2.0e-8 + 3.0e-7) / 2.0;
        assert!((records[0].size - expected).abs() < 1e-20);
        assert!(records[0].range.is_some());
    }

    #[test]
    fn test_absent_range_is_none_not_sentinel() {
        let (_, records) = parse(FLAT).unwrap();
        assert_eq!(records[0].range, None);
    }

    #[test]
    fn test_duplicate_tags_collapse() {
        let text = r#"{
            "objects": {
                "ant": { "n": "Ant", "d": 5.0e-3, "tags": ["everyday", "biological", "everyday"] }
            }
        }"#;
        let (_, records) = parse(text).unwrap();
        assert_eq!(records[0].tags.len(), 2);
    }

    #[test]
    fn test_missing_required_field_is_load_error() {
        let text = r#"{ "objects": { "mystery": { "d": 1.0 } } }"#;
        let err = parse(text).unwrap_err();
        match err {
            Error::CatalogLoad { reason } => assert!(reason.contains("mystery")),
            other => panic!("expected CatalogLoad, got {other:?}"),
        }
    }

    #[test]
    fn test_unparseable_document_is_load_error() {
        let err = parse("not json at all").unwrap_err();
        assert!(matches!(err, Error::CatalogLoad { .. }));
    }

    #[test]
    fn test_objects_key_with_wrong_type_is_load_error() {
        let err = parse(r#"{ "objects": [1, 2, 3] }"#).unwrap_err();
        match err {
            Error::CatalogLoad { reason } => assert!(reason.contains("an array")),
            other => panic!("expected CatalogLoad, got {other:?}"),
        }
    }
}
