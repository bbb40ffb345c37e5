//! RTF font table slots.
//!
//! Documents carry a fixed ten-slot font table. Descriptors reference fonts
//! by slot number (1-10) or by name; slot 1 is the default serif face. Each
//! slot maps to a metric family used by the string width oracle, so width
//! estimates track the face that will render the text.

use crate::common::{Error, Result};

/// Metric family backing a font slot's width measurements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricFamily {
    /// Times-compatible serif metrics
    Serif,
    /// Helvetica/Arial-compatible sans metrics
    Sans,
    /// Fixed-pitch Courier metrics
    Mono,
}

/// One slot of the document font table.
#[derive(Debug, Clone, Copy)]
pub struct FontSlot {
    /// Slot number (1-10)
    pub number: u8,
    /// Face name written to the font table
    pub name: &'static str,
    /// RTF family control word
    pub style: &'static str,
    /// RTF charset control word
    pub charset: &'static str,
    /// Metric family for width measurement
    pub metrics: MetricFamily,
}

/// The fixed ten-slot font table.
pub const FONT_TABLE: [FontSlot; 10] = [
    FontSlot {
        number: 1,
        name: "Times New Roman",
        style: "\\froman",
        charset: "\\fcharset1",
        metrics: MetricFamily::Serif,
    },
    FontSlot {
        number: 2,
        name: "Times New Roman Greek",
        style: "\\froman",
        charset: "\\fcharset161",
        metrics: MetricFamily::Serif,
    },
    FontSlot {
        number: 3,
        name: "Arial Greek",
        style: "\\fswiss",
        charset: "\\fcharset161",
        metrics: MetricFamily::Sans,
    },
    FontSlot {
        number: 4,
        name: "Arial",
        style: "\\fswiss",
        charset: "\\fcharset0",
        metrics: MetricFamily::Sans,
    },
    FontSlot {
        number: 5,
        name: "Helvetica",
        style: "\\fswiss",
        charset: "\\fcharset1",
        metrics: MetricFamily::Sans,
    },
    FontSlot {
        number: 6,
        name: "Calibri",
        style: "\\fswiss",
        charset: "\\fcharset1",
        metrics: MetricFamily::Sans,
    },
    FontSlot {
        number: 7,
        name: "Georgia",
        style: "\\froman",
        charset: "\\fcharset1",
        metrics: MetricFamily::Serif,
    },
    FontSlot {
        number: 8,
        name: "Cambria",
        style: "\\froman",
        charset: "\\fcharset1",
        metrics: MetricFamily::Serif,
    },
    FontSlot {
        number: 9,
        name: "Courier New",
        style: "\\fmodern",
        charset: "\\fcharset0",
        metrics: MetricFamily::Mono,
    },
    FontSlot {
        number: 10,
        name: "Symbol",
        style: "\\ftech",
        charset: "\\fcharset2",
        metrics: MetricFamily::Serif,
    },
];

/// Look up a slot by its 1-based number.
pub fn font_slot(number: u8) -> Result<&'static FontSlot> {
    FONT_TABLE
        .get(number.wrapping_sub(1) as usize)
        .ok_or_else(|| Error::UnknownFont(number.to_string()))
}

/// Resolve a face name to its slot number.
pub fn font_number(name: &str) -> Result<u8> {
    FONT_TABLE
        .iter()
        .find(|slot| slot.name == name)
        .map(|slot| slot.number)
        .ok_or_else(|| Error::UnknownFont(name.to_string()))
}

/// RTF index of a slot (`\f0` holds slot 1).
#[inline]
pub fn rtf_index(number: u8) -> i32 {
    number as i32 - 1
}

/// Emit the `{\fonttbl ...}` group for the fixed table.
pub fn encode_font_table() -> String {
    let mut out = String::from("{\\fonttbl");
    let mut buf = itoa::Buffer::new();
    for slot in &FONT_TABLE {
        out.push_str("{\\f");
        out.push_str(buf.format(rtf_index(slot.number)));
        out.push_str(slot.style);
        out.push_str(slot.charset);
        out.push_str("\\fprq2 ");
        out.push_str(slot.name);
        out.push_str(";}\n");
    }
    out.push('}');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_lookup() {
        assert_eq!(font_slot(1).unwrap().name, "Times New Roman");
        assert_eq!(font_slot(9).unwrap().metrics, MetricFamily::Mono);
        assert!(font_slot(0).is_err());
        assert!(font_slot(11).is_err());
    }

    #[test]
    fn test_name_lookup() {
        assert_eq!(font_number("Arial").unwrap(), 4);
        assert_eq!(font_number("Courier New").unwrap(), 9);
        assert!(font_number("Comic Sans").is_err());
    }

    #[test]
    fn test_font_table_encoding() {
        let table = encode_font_table();
        assert!(table.starts_with("{\\fonttbl"));
        assert!(table.contains("{\\f0\\froman\\fcharset1\\fprq2 Times New Roman;}"));
        assert!(table.contains("{\\f1\\froman\\fcharset161\\fprq2 Times New Roman Greek;}"));
        assert!(table.contains("{\\f8\\fmodern\\fcharset0\\fprq2 Courier New;}"));
        assert!(table.ends_with("}"));
        assert_eq!(table.matches("\\fprq2").count(), 10);
    }
}
