//! Closed attribute vocabularies used by table and text components.
//!
//! Border styles, justification codes, text format flags, and the fixed
//! color palette. Each vocabulary knows its own RTF control words so the
//! encoders never pattern-match on strings.

use crate::common::{Error, Result};
use bitflags::bitflags;

/// Border style for a cell edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BorderStyle {
    /// No border
    #[default]
    None,
    /// Single line border
    Single,
    /// Double line border
    Double,
    /// Thick line border
    Thick,
    /// Dotted border
    Dotted,
    /// Dashed border
    Dashed,
    /// Dot-dash border
    DotDash,
    /// Dot-dot-dash border
    DotDotDash,
    /// Triple line border
    Triple,
    /// Hairline border
    Hairline,
    /// Small dash border
    SmallDash,
    /// Wavy border
    Wavy,
    /// Double wavy border
    WavyDouble,
    /// Striped border
    Striped,
    /// Embossed border
    Embossed,
    /// Engraved border
    Engraved,
    /// Outset border (3D)
    Outset,
    /// Inset border (3D)
    Inset,
}

impl BorderStyle {
    /// RTF control word for this style, without width or color suffixes.
    #[inline]
    pub fn control_word(&self) -> &'static str {
        match self {
            Self::None => "",
            Self::Single => "\\brdrs",
            Self::Double => "\\brdrdb",
            Self::Thick => "\\brdrth",
            Self::Dotted => "\\brdrdot",
            Self::Dashed => "\\brdrdash",
            Self::DotDash => "\\brdrdashd",
            Self::DotDotDash => "\\brdrdashdd",
            Self::Triple => "\\brdrtriple",
            Self::Hairline => "\\brdrhair",
            Self::SmallDash => "\\brdrdashsm",
            Self::Wavy => "\\brdrwavy",
            Self::WavyDouble => "\\brdrwavydb",
            Self::Striped => "\\brdrdashdotstr",
            Self::Embossed => "\\brdremboss",
            Self::Engraved => "\\brdrengrave",
            Self::Outset => "\\brdroutset",
            Self::Inset => "\\brdrinset",
        }
    }

    /// Whether the edge produces any output at all.
    #[inline]
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::None)
    }

    /// Resolve a descriptor name (`"single"`, `"dot-dash"`, `""`, ...).
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "" => Self::None,
            "single" => Self::Single,
            "double" => Self::Double,
            "thick" => Self::Thick,
            "dot" | "dotted" => Self::Dotted,
            "dash" | "dashed" => Self::Dashed,
            "dot-dash" => Self::DotDash,
            "dot-dot-dash" => Self::DotDotDash,
            "triple" => Self::Triple,
            "hairline" => Self::Hairline,
            "small-dash" => Self::SmallDash,
            "wavy" => Self::Wavy,
            "double-wavy" => Self::WavyDouble,
            "striped" => Self::Striped,
            "embossed" => Self::Embossed,
            "engraved" => Self::Engraved,
            "outset" => Self::Outset,
            "inset" => Self::Inset,
            _ => return None,
        })
    }
}

/// Horizontal justification for paragraphs, cells, and rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Justification {
    /// Left aligned
    Left,
    /// Centered
    #[default]
    Center,
    /// Right aligned
    Right,
    /// Justified
    Justify,
}

impl Justification {
    /// Paragraph-level control word (`\ql`, `\qc`, `\qr`, `\qj`).
    #[inline]
    pub fn paragraph_code(&self) -> &'static str {
        match self {
            Self::Left => "\\ql",
            Self::Center => "\\qc",
            Self::Right => "\\qr",
            Self::Justify => "\\qj",
        }
    }

    /// Row-placement control word (`\trql`, `\trqc`, `\trqr`).
    ///
    /// RTF has no justified row placement; `Justify` emits nothing.
    #[inline]
    pub fn row_code(&self) -> &'static str {
        match self {
            Self::Left => "\\trql",
            Self::Center => "\\trqc",
            Self::Right => "\\trqr",
            Self::Justify => "",
        }
    }
}

/// Vertical alignment of cell content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VerticalJustification {
    /// Align to cell top
    Top,
    /// Center vertically
    #[default]
    Center,
    /// Align to cell bottom
    Bottom,
}

impl VerticalJustification {
    /// Cell vertical alignment control word.
    #[inline]
    pub fn control_word(&self) -> &'static str {
        match self {
            Self::Top => "\\clvertalt",
            Self::Center => "\\clvertalc",
            Self::Bottom => "\\clvertalb",
        }
    }
}

bitflags! {
    /// Character format flags for a run of text.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct TextFormat: u8 {
        const BOLD = 0b0001;
        const ITALIC = 0b0010;
        const UNDERLINE = 0b0100;
        const STRIKE = 0b1000;
    }
}

impl TextFormat {
    /// Parse compact format codes such as `"b"`, `"bi"`, `"us"`.
    pub fn from_codes(codes: &str) -> Result<Self> {
        let mut format = Self::empty();
        for ch in codes.chars() {
            format |= match ch {
                'b' => Self::BOLD,
                'i' => Self::ITALIC,
                'u' => Self::UNDERLINE,
                's' => Self::STRIKE,
                _ => return Err(Error::Validation(format!("Invalid text format: {ch}"))),
            };
        }
        Ok(format)
    }

    /// Emit format control words in stable order.
    pub fn control_words(&self) -> String {
        let mut out = String::new();
        if self.contains(Self::BOLD) {
            out.push_str("\\b");
        }
        if self.contains(Self::ITALIC) {
            out.push_str("\\i");
        }
        if self.contains(Self::UNDERLINE) {
            out.push_str("\\ul");
        }
        if self.contains(Self::STRIKE) {
            out.push_str("\\strike");
        }
        out
    }
}

/// RTF color representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Color {
    /// Red component (0-255)
    pub red: u8,
    /// Green component (0-255)
    pub green: u8,
    /// Blue component (0-255)
    pub blue: u8,
}

impl Color {
    /// Create a new color.
    #[inline]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }
}

/// Fixed palette of color names accepted by descriptors.
static PALETTE: phf::Map<&'static str, (u8, u8, u8)> = phf::phf_map! {
    "black" => (0, 0, 0),
    "white" => (255, 255, 255),
    "red" => (255, 0, 0),
    "green" => (0, 255, 0),
    "blue" => (0, 0, 255),
    "yellow" => (255, 255, 0),
    "cyan" => (0, 255, 255),
    "magenta" => (255, 0, 255),
    "orange" => (255, 165, 0),
    "purple" => (160, 32, 240),
    "violet" => (238, 130, 238),
    "brown" => (165, 42, 42),
    "pink" => (255, 192, 203),
    "gold" => (255, 215, 0),
    "silver" => (192, 192, 192),
    "gray" => (190, 190, 190),
    "grey" => (190, 190, 190),
    "lightgray" => (211, 211, 211),
    "lightgrey" => (211, 211, 211),
    "darkgray" => (169, 169, 169),
    "darkgrey" => (169, 169, 169),
    "lightblue" => (173, 216, 230),
    "lightgreen" => (144, 238, 144),
    "darkred" => (139, 0, 0),
    "darkgreen" => (0, 100, 0),
    "darkblue" => (0, 0, 139),
    "navy" => (0, 0, 128),
    "teal" => (0, 128, 128),
    "olive" => (128, 128, 0),
    "maroon" => (176, 48, 96),
};

/// Resolve a color name against the fixed palette.
pub fn resolve_color(name: &str) -> Result<Color> {
    PALETTE
        .get(name)
        .map(|&(r, g, b)| Color::new(r, g, b))
        .ok_or_else(|| Error::UnknownColor(name.to_string()))
}

/// Color table built from the color names a document references.
///
/// The RTF color table is 1-indexed: index 0 is the implicit "auto" color
/// written as the leading semicolon of the `{\colortbl;...}` group.
#[derive(Debug, Clone, Default)]
pub struct ColorTable {
    names: Vec<String>,
    colors: Vec<Color>,
}

impl ColorTable {
    /// Create an empty color table.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a color name, returning its 1-based table index.
    pub fn add(&mut self, name: &str) -> Result<u16> {
        if let Some(pos) = self.names.iter().position(|n| n.as_str() == name) {
            return Ok(pos as u16 + 1);
        }
        let color = resolve_color(name)?;
        self.names.push(name.to_string());
        self.colors.push(color);
        Ok(self.colors.len() as u16)
    }

    /// Look up the index of an already-registered color.
    #[inline]
    pub fn index_of(&self, name: &str) -> Option<u16> {
        self.names
            .iter()
            .position(|n| n.as_str() == name)
            .map(|p| p as u16 + 1)
    }

    /// Whether any color has been registered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Emit the `{\colortbl;...}` group, or `None` when no colors are used.
    pub fn encode(&self) -> Option<String> {
        if self.colors.is_empty() {
            return None;
        }
        let mut out = String::from("{\\colortbl;");
        let mut buf = itoa::Buffer::new();
        for color in &self.colors {
            out.push_str("\\red");
            out.push_str(buf.format(color.red));
            out.push_str("\\green");
            out.push_str(buf.format(color.green));
            out.push_str("\\blue");
            out.push_str(buf.format(color.blue));
            out.push(';');
        }
        out.push('}');
        Some(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_border_control_words() {
        assert_eq!(BorderStyle::Single.control_word(), "\\brdrs");
        assert_eq!(BorderStyle::Double.control_word(), "\\brdrdb");
        assert_eq!(BorderStyle::None.control_word(), "");
        assert!(!BorderStyle::None.is_visible());
        assert!(BorderStyle::Hairline.is_visible());
    }

    #[test]
    fn test_border_from_name() {
        assert_eq!(BorderStyle::from_name("single"), Some(BorderStyle::Single));
        assert_eq!(BorderStyle::from_name(""), Some(BorderStyle::None));
        assert_eq!(BorderStyle::from_name("dot-dash"), Some(BorderStyle::DotDash));
        assert_eq!(BorderStyle::from_name("bogus"), None);
    }

    #[test]
    fn test_justification_codes() {
        assert_eq!(Justification::Center.paragraph_code(), "\\qc");
        assert_eq!(Justification::Center.row_code(), "\\trqc");
        assert_eq!(Justification::Justify.row_code(), "");
    }

    #[test]
    fn test_text_format_parse_and_emit() {
        let format = TextFormat::from_codes("bi").unwrap();
        assert_eq!(format.control_words(), "\\b\\i");

        let format = TextFormat::from_codes("sub").unwrap();
        assert_eq!(format.control_words(), "\\b\\ul\\strike");

        assert!(TextFormat::from_codes("x").is_err());
        assert_eq!(TextFormat::empty().control_words(), "");
    }

    #[test]
    fn test_color_table_dedup_and_encode() {
        let mut table = ColorTable::new();
        assert_eq!(table.add("red").unwrap(), 1);
        assert_eq!(table.add("blue").unwrap(), 2);
        assert_eq!(table.add("red").unwrap(), 1);
        assert_eq!(
            table.encode().unwrap(),
            "{\\colortbl;\\red255\\green0\\blue0;\\red0\\green0\\blue255;}"
        );
    }

    #[test]
    fn test_unknown_color() {
        assert!(resolve_color("chartreuse-ish").is_err());
        assert!(resolve_color("black").is_ok());
    }
}
