//! Embedded advance-width tables.
//!
//! Widths are in font units per 1000-unit em for the printable ASCII range
//! (0x20..=0x7E), matching the metrics of the standard serif, sans, and
//! monospace report faces. Characters outside the table fall back to the
//! family's average letter width, which keeps line estimates stable for the
//! occasional Greek letter or typographic mark in a cell.

use crate::fonts::MetricFamily;

/// Times-compatible serif advance widths for ASCII 0x20..=0x7E.
pub(crate) const SERIF_WIDTHS: [u16; 95] = [
    250, // space
    333, // !
    408, // "
    500, // #
    500, // $
    833, // %
    778, // &
    180, // '
    333, // (
    333, // )
    500, // *
    564, // +
    250, // ,
    333, // -
    250, // .
    278, // /
    500, 500, 500, 500, 500, 500, 500, 500, 500, 500, // 0-9
    278, // :
    278, // ;
    564, // <
    564, // =
    564, // >
    444, // ?
    921, // @
    722, 667, 667, 722, 611, 556, 722, 722, 333, 389, 722, 611, 889, 722, 722,
    556, 722, 667, 556, 611, 722, 722, 944, 722, 722, 611, // A-Z
    333, // [
    278, // backslash
    333, // ]
    469, // ^
    500, // _
    333, // `
    444, 500, 444, 500, 444, 333, 500, 500, 278, 278, 500, 278, 778, 500, 500,
    500, 500, 333, 389, 278, 500, 500, 722, 500, 500, 444, // a-z
    480, // {
    200, // |
    480, // }
    541, // ~
];

/// Helvetica/Arial-compatible sans advance widths for ASCII 0x20..=0x7E.
pub(crate) const SANS_WIDTHS: [u16; 95] = [
    278, // space
    278, // !
    355, // "
    556, // #
    556, // $
    889, // %
    667, // &
    191, // '
    333, // (
    333, // )
    389, // *
    584, // +
    278, // ,
    333, // -
    278, // .
    278, // /
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, // 0-9
    278, // :
    278, // ;
    584, // <
    584, // =
    584, // >
    556, // ?
    1015, // @
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, // A-Z
    278, // [
    278, // backslash
    278, // ]
    469, // ^
    556, // _
    333, // `
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, // a-z
    334, // {
    260, // |
    334, // }
    584, // ~
];

/// Fixed advance of every Courier-compatible glyph.
pub(crate) const MONO_WIDTH: u16 = 600;

/// Fallback widths for characters outside the embedded ASCII range.
const SERIF_FALLBACK: u16 = 500;
const SANS_FALLBACK: u16 = 556;

/// Advance width of one character, in units per 1000-unit em.
pub(crate) fn advance(family: MetricFamily, ch: char) -> u16 {
    if family == MetricFamily::Mono {
        return MONO_WIDTH;
    }

    let table: &[u16; 95] = match family {
        MetricFamily::Serif => &SERIF_WIDTHS,
        MetricFamily::Sans => &SANS_WIDTHS,
        MetricFamily::Mono => unreachable!(),
    };

    let code = ch as u32;
    if (0x20..=0x7E).contains(&code) {
        table[(code - 0x20) as usize]
    } else {
        match family {
            MetricFamily::Serif => SERIF_FALLBACK,
            _ => SANS_FALLBACK,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_lengths() {
        assert_eq!(SERIF_WIDTHS.len(), 95);
        assert_eq!(SANS_WIDTHS.len(), 95);
    }

    #[test]
    fn test_known_advances() {
        assert_eq!(advance(MetricFamily::Serif, ' '), 250);
        assert_eq!(advance(MetricFamily::Serif, 'a'), 444);
        assert_eq!(advance(MetricFamily::Serif, 'M'), 889);
        assert_eq!(advance(MetricFamily::Sans, 'a'), 556);
        assert_eq!(advance(MetricFamily::Sans, 'i'), 222);
        assert_eq!(advance(MetricFamily::Mono, 'W'), 600);
        assert_eq!(advance(MetricFamily::Mono, '.'), 600);
    }

    #[test]
    fn test_fallback_for_non_ascii() {
        assert_eq!(advance(MetricFamily::Serif, 'α'), 500);
        assert_eq!(advance(MetricFamily::Sans, '†'), 556);
        assert_eq!(advance(MetricFamily::Mono, 'α'), 600);
    }
}
