//! Metric-prefix selection: turning a raw size in meters into the most
//! legible unit a human can read.
//!
//! The table spans the full SI ladder, yoctometer through yottameter, 61
//! orders of magnitude. Selection favours legibility over precision: the
//! chosen unit is the largest one that keeps the mantissa at or above 1,
//! so 1.27e7 m renders as "12.7 Mm" rather than "12700 km".

use crate::Result;
use crate::error::Error;
use core::fmt;
use strum::{Display, EnumIter};

/// One entry of the SI prefix ladder: a unit symbol and its power of ten
/// relative to the meter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricPrefix {
    pub symbol: &'static str,
    pub power: i32,
}

impl MetricPrefix {
    /// The multiplier this prefix represents, e.g. `1e3` for `km`.
    #[must_use]
    pub fn factor(&self) -> f64 {
        10.0_f64.powi(self.power)
    }
}

/// The 21 standard metric prefixes, smallest to largest. Selection walks
/// this table in order, so it must stay ascending.
pub const METRIC_PREFIXES: [MetricPrefix; 21] = [
    MetricPrefix { symbol: "ym", power: -24 },
    MetricPrefix { symbol: "zm", power: -21 },
    MetricPrefix { symbol: "am", power: -18 },
    MetricPrefix { symbol: "fm", power: -15 },
    MetricPrefix { symbol: "pm", power: -12 },
    MetricPrefix { symbol: "nm", power: -9 },
    MetricPrefix { symbol: "μm", power: -6 },
    MetricPrefix { symbol: "mm", power: -3 },
    MetricPrefix { symbol: "cm", power: -2 },
    MetricPrefix { symbol: "dm", power: -1 },
    MetricPrefix { symbol: "m", power: 0 },
    MetricPrefix { symbol: "dam", power: 1 },
    MetricPrefix { symbol: "hm", power: 2 },
    MetricPrefix { symbol: "km", power: 3 },
    MetricPrefix { symbol: "Mm", power: 6 },
    MetricPrefix { symbol: "Gm", power: 9 },
    MetricPrefix { symbol: "Tm", power: 12 },
    MetricPrefix { symbol: "Pm", power: 15 },
    MetricPrefix { symbol: "Em", power: 18 },
    MetricPrefix { symbol: "Zm", power: 21 },
    MetricPrefix { symbol: "Ym", power: 24 },
];

/// A size re-expressed in its most legible metric unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FormattedSize {
    /// The mantissa in the chosen unit. At least 1 except below the bottom
    /// of the table, where the smallest prefix is kept and the value drops
    /// under 1 rather than inventing a sub-yocto unit.
    pub value: f64,
    pub prefix: MetricPrefix,
}

impl fmt::Display for FormattedSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Precision ladder: more digits the smaller the mantissa.
        if self.value >= 1000.0 {
            write!(f, "{:.2e} {}", self.value, self.prefix.symbol)
        } else if self.value >= 100.0 {
            write!(f, "{:.1} {}", self.value, self.prefix.symbol)
        } else if self.value >= 10.0 {
            write!(f, "{:.2} {}", self.value, self.prefix.symbol)
        } else {
            write!(f, "{:.3} {}", self.value, self.prefix.symbol)
        }
    }
}

/// Pick the largest prefix whose mantissa stays at or above 1 and express
/// the size in it.
///
/// Sizes beyond the ends of the table clamp to the outermost prefixes: below
/// a yoctometer the mantissa drops under 1, above a yottameter it grows past
/// three digits. Non-positive and non-finite sizes fail with
/// [`Error::InvalidSize`]; no physical object has such an extent.
pub fn format_size(size_in_meters: f64) -> Result<FormattedSize> {
    if !(size_in_meters > 0.0) || !size_in_meters.is_finite() {
        return Err(Error::InvalidSize { size: size_in_meters });
    }

    let mut best = &METRIC_PREFIXES[0];
    for prefix in &METRIC_PREFIXES {
        if size_in_meters / prefix.factor() >= 1.0 {
            best = prefix;
        } else {
            break;
        }
    }

    Ok(FormattedSize {
        value: size_in_meters / best.factor(),
        prefix: *best,
    })
}

/// The broad domain a size belongs to, from quantum foam to the cosmic web.
/// Used to group catalog listings the way a reader thinks about scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumIter)]
pub enum ScaleCategory {
    Quantum,
    Atomic,
    Molecular,
    Cellular,
    Everyday,
    Geographic,
    Planetary,
    Stellar,
    Galactic,
}

impl ScaleCategory {
    /// Classify a size in meters onto the ladder.
    #[must_use]
    pub fn for_size(meters: f64) -> Self {
        if meters < 1.0e-15 {
            Self::Quantum
        } else if meters < 1.0e-9 {
            Self::Atomic
        } else if meters < 1.0e-6 {
            Self::Molecular
        } else if meters < 1.0e-3 {
            Self::Cellular
        } else if meters < 1.0e3 {
            Self::Everyday
        } else if meters < 1.0e7 {
            Self::Geographic
        } else if meters < 1.0e9 {
            Self::Planetary
        } else if meters < 1.0e12 {
            Self::Stellar
        } else {
            Self::Galactic
        }
    }

    /// Display label including the size band.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Quantum => "Quantum (< 1 fm)",
            Self::Atomic => "Atomic (1 fm - 1 nm)",
            Self::Molecular => "Molecular (1 nm - 1 μm)",
            Self::Cellular => "Cellular (1 μm - 1 mm)",
            Self::Everyday => "Everyday (1 mm - 1 km)",
            Self::Geographic => "Geographic (1 km - 10,000 km)",
            Self::Planetary => "Planetary (10,000 km - 1 Gm)",
            Self::Stellar => "Stellar (1 Gm - 1 Tm)",
            Self::Galactic => "Galactic (> 1 Tm)",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    fn close(a: f64, b: f64) -> bool {
        ((a / b) - 1.0).abs() < 1.0e-9
    }

    #[test]
    fn test_one_hundred_nanometers() {
        let formatted = format_size(1.0e-7).unwrap();
        assert!(close(formatted.value, 100.0));
        assert_eq!(formatted.prefix.symbol, "nm");
    }

    #[test]
    fn test_earth_renders_in_megameters() {
        let formatted = format_size(1.2749e7).unwrap();
        assert!(close(formatted.value, 12.749));
        assert_eq!(formatted.prefix.symbol, "Mm");
    }

    #[test]
    fn test_exact_meter() {
        let formatted = format_size(1.0).unwrap();
        assert!(close(formatted.value, 1.0));
        assert_eq!(formatted.prefix.symbol, "m");
    }

    #[test]
    fn test_sub_meter_uses_decimeters() {
        let formatted = format_size(0.5).unwrap();
        assert!(close(formatted.value, 5.0));
        assert_eq!(formatted.prefix.symbol, "dm");
    }

    #[test]
    fn test_below_table_clamps_to_yoctometers() {
        let formatted = format_size(1.616e-35).unwrap();
        assert_eq!(formatted.prefix.symbol, "ym");
        assert!(formatted.value < 1.0);
    }

    #[test]
    fn test_above_table_clamps_to_yottameters() {
        let formatted = format_size(8.8e26).unwrap();
        assert_eq!(formatted.prefix.symbol, "Ym");
        assert!(close(formatted.value, 880.0));
    }

    #[test]
    fn test_zero_size_is_invalid() {
        assert_eq!(format_size(0.0).unwrap_err(), Error::InvalidSize { size: 0.0 });
    }

    #[test]
    fn test_negative_size_is_invalid() {
        assert!(matches!(format_size(-3.0), Err(Error::InvalidSize { .. })));
    }

    #[test]
    fn test_non_finite_size_is_invalid() {
        assert!(matches!(format_size(f64::NAN), Err(Error::InvalidSize { .. })));
        assert!(matches!(format_size(f64::INFINITY), Err(Error::InvalidSize { .. })));
    }

    #[test]
    fn test_table_is_ascending_and_complete() {
        assert_eq!(METRIC_PREFIXES.len(), 21);
        for pair in METRIC_PREFIXES.windows(2) {
            assert!(pair[0].power < pair[1].power);
        }
        assert_eq!(METRIC_PREFIXES[0].power, -24);
        assert_eq!(METRIC_PREFIXES[20].power, 24);
    }

    #[test]
    fn test_mantissa_stays_legible_within_table() {
        // Anywhere inside the table's span the chosen mantissa sits in
        // [1, 1000); only beyond the ends may it leave that band.
        let mut exponent = -24;
        while exponent <= 24 {
            for mantissa in [1.0, 2.5, 9.99] {
                let size = mantissa * 10.0_f64.powi(exponent);
                let formatted = format_size(size).unwrap();
                assert!(
                    formatted.value >= 1.0 - 1.0e-9 && formatted.value < 1000.0,
                    "size {size} produced mantissa {} {}",
                    formatted.value,
                    formatted.prefix.symbol
                );
            }
            exponent += 1;
        }
    }

    #[test]
    fn test_display_precision_ladder() {
        assert_eq!(format_size(4.267e-2).unwrap().to_string(), "4.267 cm");
        assert_eq!(format_size(1.2749e7).unwrap().to_string(), "12.75 Mm");
        assert_eq!(format_size(5.0e5).unwrap().to_string(), "500.0 km");
        assert_eq!(format_size(2.0e27).unwrap().to_string(), "2.00e3 Ym");
    }

    #[test]
    fn test_scale_category_ladder() {
        assert_eq!(ScaleCategory::for_size(1.616e-35), ScaleCategory::Quantum);
        assert_eq!(ScaleCategory::for_size(1.06e-10), ScaleCategory::Atomic);
        assert_eq!(ScaleCategory::for_size(2.0e-9), ScaleCategory::Molecular);
        assert_eq!(ScaleCategory::for_size(7.8e-6), ScaleCategory::Cellular);
        assert_eq!(ScaleCategory::for_size(4.267e-2), ScaleCategory::Everyday);
        assert_eq!(ScaleCategory::for_size(8.849e3), ScaleCategory::Geographic);
        assert_eq!(ScaleCategory::for_size(1.2749e7), ScaleCategory::Planetary);
        assert_eq!(ScaleCategory::for_size(1.3914e9), ScaleCategory::Stellar);
        assert_eq!(ScaleCategory::for_size(9.5e20), ScaleCategory::Galactic);
    }

    #[test]
    fn test_scale_categories_iterate_in_ladder_order() {
        let categories: Vec<_> = ScaleCategory::iter().collect();
        assert_eq!(categories.first(), Some(&ScaleCategory::Quantum));
        assert_eq!(categories.last(), Some(&ScaleCategory::Galactic));
        assert_eq!(categories.len(), 9);
    }
}
