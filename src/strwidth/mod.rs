//! String width measurement.
//!
//! Pagination needs to know how many rendered lines a cell will occupy,
//! which requires the typographic width of its text in the face and size
//! that will render it. Widths are computed by summing per-character
//! advances from the embedded metric tables; there is no shaping or
//! kerning, matching how report tables are measured in practice.
//!
//! Measurement is deterministic and involves no I/O: the metric tables are
//! compiled in and safe to read from any thread.

mod metrics;

use crate::common::{Error, Result, unit};
use crate::fonts;

/// Measurement unit accepted by [`string_width`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Unit {
    /// Inches
    #[default]
    Inches,
    /// Millimeters
    Millimeters,
    /// Pixels at the given dpi
    Pixels,
}

impl Unit {
    /// Parse a unit abbreviation (`"in"`, `"mm"`, `"px"`).
    pub fn from_abbreviation(abbrev: &str) -> Result<Self> {
        match abbrev {
            "in" => Ok(Self::Inches),
            "mm" => Ok(Self::Millimeters),
            "px" => Ok(Self::Pixels),
            other => Err(Error::UnsupportedUnit(other.to_string())),
        }
    }
}

/// Width of `text` in the given font slot and point size.
///
/// The size is interpreted as the pixel em-size of the face, matching the
/// rendering convention of the upstream report toolchain; at the default
/// 72 dpi one point equals one pixel.
pub fn string_width(text: &str, font: u8, font_size: f64, unit: Unit, dpi: f64) -> Result<f64> {
    if font_size <= 0.0 {
        return Err(Error::Validation(format!("Invalid font size: {font_size}")));
    }

    let slot = fonts::font_slot(font)?;
    let advances: u64 = text
        .chars()
        .map(|ch| metrics::advance(slot.metrics, ch) as u64)
        .sum();
    let width_px = advances as f64 / 1000.0 * font_size;

    Ok(match unit {
        Unit::Pixels => width_px,
        Unit::Inches => width_px / dpi,
        Unit::Millimeters => width_px / dpi * unit::MM_PER_INCH,
    })
}

/// Width of `text` for a named face (resolved to its font slot).
pub fn string_width_named(
    text: &str,
    font_name: &str,
    font_size: f64,
    unit: Unit,
    dpi: f64,
) -> Result<f64> {
    string_width(text, fonts::font_number(font_name)?, font_size, unit, dpi)
}

/// Width in inches with the default font and dpi, the common pagination call.
#[inline]
pub fn string_width_inches(text: &str, font: u8, font_size: f64) -> Result<f64> {
    string_width(text, font, font_size, Unit::Inches, 72.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_width() {
        let width = string_width("abc", 1, 12.0, Unit::Inches, 72.0).unwrap();
        // a=444 b=500 c=444 -> 1388/1000*12/72
        assert!((width - 1388.0 / 1000.0 * 12.0 / 72.0).abs() < 1e-9);
        assert!(width > 0.1 && width < 1.0);
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(string_width("", 1, 12.0, Unit::Inches, 72.0).unwrap(), 0.0);
    }

    #[test]
    fn test_units() {
        let inches = string_width("abc", 1, 12.0, Unit::Inches, 72.0).unwrap();
        let mm = string_width("abc", 1, 12.0, Unit::Millimeters, 72.0).unwrap();
        let px = string_width("abc", 1, 12.0, Unit::Pixels, 72.0).unwrap();

        assert!((mm - inches * 25.4).abs() < 1e-9);
        assert!((px - inches * 72.0).abs() < 1e-9);
    }

    #[test]
    fn test_size_scales_width() {
        let small = string_width("abc", 1, 8.0, Unit::Inches, 72.0).unwrap();
        let large = string_width("abc", 1, 16.0, Unit::Inches, 72.0).unwrap();
        assert!((large - small * 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_fonts_differ() {
        let serif = string_width("illustrate", 1, 9.0, Unit::Inches, 72.0).unwrap();
        let mono = string_width("illustrate", 9, 9.0, Unit::Inches, 72.0).unwrap();
        assert_ne!(serif, mono);
    }

    #[test]
    fn test_named_font() {
        let by_slot = string_width("abc", 4, 9.0, Unit::Inches, 72.0).unwrap();
        let by_name = string_width_named("abc", "Arial", 9.0, Unit::Inches, 72.0).unwrap();
        assert_eq!(by_slot, by_name);
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(matches!(
            string_width("abc", 42, 9.0, Unit::Inches, 72.0),
            Err(Error::UnknownFont(_))
        ));
        assert!(string_width("abc", 1, 0.0, Unit::Inches, 72.0).is_err());
        assert!(string_width("abc", 1, -3.0, Unit::Inches, 72.0).is_err());
        assert!(matches!(
            Unit::from_abbreviation("furlong"),
            Err(Error::UnsupportedUnit(_))
        ));
    }

    #[test]
    fn test_longer_text_is_wider() {
        let short = string_width("a", 1, 12.0, Unit::Inches, 72.0).unwrap();
        let long = string_width("abcdefghijklmnop", 1, 12.0, Unit::Inches, 72.0).unwrap();
        assert!(long / short > 10.0);
    }
}
