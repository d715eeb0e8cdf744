//! Dimensionless ratios between sizes and pairwise object comparisons.

use crate::Result;
use crate::catalog::ObjectRecord;
use crate::error::Error;
use serde::Serialize;

/// The ratio `a / b` of two sizes in the base unit.
///
/// Catalog invariants keep sizes positive, but raw input reaches this
/// boundary too, so the zero denominator is checked rather than assumed away.
pub fn ratio(a: f64, b: f64) -> Result<f64> {
    if b == 0.0 {
        return Err(Error::DivisionByZero);
    }
    Ok(a / b)
}

/// The single representative size of a record: the scalar size, or the
/// arithmetic mean of the range bounds when a range is present.
///
/// The arithmetic mean is a deliberate simplification: the geometric mean
/// would be the more natural choice for log-scale quantities, but the
/// arithmetic mean is what every fixture downstream is calibrated against.
#[must_use]
pub fn effective_size(record: &ObjectRecord) -> f64 {
    record.range.map_or(record.size, |range| range.midpoint())
}

/// The outcome of comparing two objects by effective size.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    /// `effective_size(a) / effective_size(b)`, direction preserved.
    pub ratio: f64,

    /// The same ratio normalized to be at least 1, whichever direction.
    pub size_ratio: f64,

    /// Id of the larger object, or `None` when the sizes are equal.
    pub larger_id: Option<String>,

    /// Human-readable sentence describing the relationship.
    pub summary: String,
}

/// Compare two records, reporting which is larger and by how much.
pub fn compare(a: &ObjectRecord, b: &ObjectRecord) -> Result<Comparison> {
    let size_a = effective_size(a);
    let size_b = effective_size(b);
    let ratio = ratio(size_a, size_b)?;

    let (larger_id, size_ratio) = if size_a > size_b {
        (Some(a.id.clone()), ratio)
    } else if size_b > size_a {
        (Some(b.id.clone()), 1.0 / ratio)
    } else {
        (None, 1.0)
    };

    let summary = summarize(a, b, ratio);

    Ok(Comparison {
        ratio,
        size_ratio,
        larger_id,
        summary,
    })
}

/// Precision ladder for the comparison sentence: two decimals under 2x,
/// one decimal under 1000x, scientific notation beyond.
fn summarize(a: &ObjectRecord, b: &ObjectRecord, ratio: f64) -> String {
    fn times(factor: f64) -> String {
        if factor < 2.0 {
            format!("{factor:.2}")
        } else if factor < 1000.0 {
            format!("{factor:.1}")
        } else {
            format!("{factor:.2e}")
        }
    }

    if ratio > 1.0 {
        format!("{} is {} times larger than {}", a.name, times(ratio), b.name)
    } else if ratio < 1.0 {
        let inverse = 1.0 / ratio;
        format!("{} is {} times larger than {}", b.name, times(inverse), a.name)
    } else {
        format!("{} and {} are the same size", a.name, b.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::SizeRange;
    use std::collections::BTreeSet;

    fn object(id: &str, name: &str, size: f64) -> ObjectRecord {
        ObjectRecord {
            id: id.to_string(),
            name: name.to_string(),
            size,
            range: None,
            description: String::new(),
            tags: BTreeSet::new(),
        }
    }

    #[test]
    fn test_ratio_direction() {
        assert!((ratio(10.0, 2.0).unwrap() - 5.0).abs() < f64::EPSILON);
        assert!((ratio(2.0, 10.0).unwrap() - 0.2).abs() < f64::EPSILON);
    }

    #[test]
    fn test_ratio_zero_denominator() {
        assert_eq!(ratio(1.0, 0.0).unwrap_err(), Error::DivisionByZero);
    }

    #[test]
    fn test_ratio_symmetry() {
        for (a, b) in [(1.06e-10, 4.267e-2), (1.2749e7, 1.3914e9), (3.0, 7.0)] {
            let product = ratio(a, b).unwrap() * ratio(b, a).unwrap();
            assert!((product - 1.0).abs() < 1.0e-12, "ratio symmetry broke for ({a}, {b})");
        }
    }

    #[test]
    fn test_effective_size_without_range() {
        let record = object("golf_ball", "Golf Ball", 4.267e-2);
        assert!((effective_size(&record) - 4.267e-2).abs() < f64::EPSILON);
    }

    #[test]
    fn test_effective_size_is_range_mean() {
        let record = ObjectRecord {
            range: Some(SizeRange { min: 2.0e-8, max: 3.0e-7 }),
            ..object("virus", "Virus", 1.6e-7)
        };
        let expected = (2.0e-8 + 3.0e-7) / 2.0;
        assert!((effective_size(&record) - expected).abs() < 1.0e-20);
    }

    #[test]
    fn test_effective_size_strictly_within_range() {
        let record = ObjectRecord {
            range: Some(SizeRange { min: 1.0e-6, max: 1.0e-5 }),
            ..object("bacterium", "Bacterium", 5.5e-6)
        };
        let size = effective_size(&record);
        assert!(size > 1.0e-6 && size < 1.0e-5);
    }

    #[test]
    fn test_compare_identifies_larger_object() {
        let earth = object("earth", "Earth", 1.2749e7);
        let golf_ball = object("golf_ball", "Golf Ball", 4.267e-2);

        let comparison = compare(&earth, &golf_ball).unwrap();
        assert_eq!(comparison.larger_id.as_deref(), Some("earth"));
        assert!(((comparison.ratio / 2.99e8) - 1.0).abs() < 0.01);
        assert!((comparison.size_ratio - comparison.ratio).abs() < f64::EPSILON);
    }

    #[test]
    fn test_compare_reversed_normalizes_size_ratio() {
        let earth = object("earth", "Earth", 1.2749e7);
        let golf_ball = object("golf_ball", "Golf Ball", 4.267e-2);

        let comparison = compare(&golf_ball, &earth).unwrap();
        assert_eq!(comparison.larger_id.as_deref(), Some("earth"));
        assert!(comparison.ratio < 1.0);
        assert!(comparison.size_ratio > 1.0);
    }

    #[test]
    fn test_compare_equal_sizes() {
        let a = object("a", "A", 3.0);
        let b = object("b", "B", 3.0);

        let comparison = compare(&a, &b).unwrap();
        assert_eq!(comparison.larger_id, None);
        assert!((comparison.size_ratio - 1.0).abs() < f64::EPSILON);
        assert_eq!(comparison.summary, "A and B are the same size");
    }

    #[test]
    fn test_summary_precision_ladder() {
        let a = object("a", "A", 3.0);
        let close = compare(&object("b", "B", 2.0), &a).unwrap();
        assert_eq!(close.summary, "A is 1.50 times larger than B");

        let medium = compare(&object("c", "C", 300.0), &a).unwrap();
        assert_eq!(medium.summary, "C is 100.0 times larger than A");

        let vast = compare(&object("d", "D", 3.0e6), &a).unwrap();
        assert_eq!(vast.summary, "D is 1.00e6 times larger than A");
    }
}
