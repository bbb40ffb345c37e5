//! Row, cell, and text content RTF encoders.
//!
//! These are the lowest-level emitters: given fully resolved per-cell
//! values (no broadcasting left), they produce the RTF command stream for
//! one physical table row or one text paragraph. Output is
//! byte-reproducible: control words are emitted in a fixed order with
//! stable number formatting.

use crate::common::unit::{inch_to_twip, point_to_halfpoint};
use crate::convert::substitute;
use crate::fonts::rtf_index;
use crate::style::{BorderStyle, ColorTable, Justification, TextFormat, VerticalJustification};
use smallvec::SmallVec;

/// A resolved run of text with its character and paragraph formatting.
#[derive(Debug, Clone)]
pub struct TextContent {
    pub text: String,
    /// Font slot (1-10)
    pub font: u8,
    /// Size in points
    pub size: f64,
    pub format: TextFormat,
    /// Text color name, resolved against the document color table
    pub color: Option<String>,
    /// Highlight color name
    pub background_color: Option<String>,
    pub justification: Justification,
    /// First line indent in twips
    pub indent_first: i32,
    /// Left indent in twips
    pub indent_left: i32,
    /// Right indent in twips
    pub indent_right: i32,
    /// Line spacing multiplier
    pub space: f64,
    /// Space before paragraph in twips
    pub space_before: i32,
    /// Space after paragraph in twips
    pub space_after: i32,
    pub hyphenation: bool,
    /// Apply LaTeX-to-Unicode conversion
    pub convert: bool,
}

impl Default for TextContent {
    fn default() -> Self {
        Self {
            text: String::new(),
            font: 1,
            size: 9.0,
            format: TextFormat::empty(),
            color: None,
            background_color: None,
            justification: Justification::Left,
            indent_first: 0,
            indent_left: 0,
            indent_right: 0,
            space: 1.0,
            space_before: 15,
            space_after: 15,
            hyphenation: false,
            convert: true,
        }
    }
}

impl TextContent {
    /// The sized text group: `\fs18{\f0 text}` with optional color,
    /// highlight, and format control words.
    pub fn chunk(&self, colors: &ColorTable) -> String {
        let mut buf = itoa::Buffer::new();
        let mut out = String::with_capacity(self.text.len() + 24);

        out.push_str("\\fs");
        out.push_str(buf.format(point_to_halfpoint(self.size)));
        out.push_str("{\\f");
        out.push_str(buf.format(rtf_index(self.font)));
        if let Some(index) = self.color.as_deref().and_then(|n| colors.index_of(n)) {
            out.push_str("\\cf");
            out.push_str(buf.format(index));
        }
        if let Some(index) = self
            .background_color
            .as_deref()
            .and_then(|n| colors.index_of(n))
        {
            out.push_str("\\highlight");
            out.push_str(buf.format(index));
        }
        out.push_str(&self.format.control_words());
        out.push(' ');
        out.push_str(&substitute(&self.text, self.convert));
        out.push('}');
        out
    }

    /// Paragraph-level control words, `\pard` through the justification.
    pub fn paragraph_controls(&self) -> String {
        let mut buf = itoa::Buffer::new();
        let mut out = String::with_capacity(48);

        out.push_str("\\pard");
        out.push_str(if self.hyphenation {
            "\\hyphpar"
        } else {
            "\\hyphpar0"
        });
        out.push_str("\\sb");
        out.push_str(buf.format(self.space_before));
        out.push_str("\\sa");
        out.push_str(buf.format(self.space_after));
        if self.space != 1.0 {
            out.push_str("\\sl");
            out.push_str(buf.format((self.space * 240.0).round() as i32));
            out.push_str("\\slmult1");
        }
        out.push_str("\\fi");
        out.push_str(buf.format(self.indent_first));
        out.push_str("\\li");
        out.push_str(buf.format(self.indent_left));
        out.push_str("\\ri");
        out.push_str(buf.format(self.indent_right));
        out.push_str(self.justification.paragraph_code());
        out
    }

    /// A standalone paragraph: `{\pard...\fs18{\f0 text}\par}`.
    pub fn as_paragraph(&self, colors: &ColorTable) -> String {
        format!("{{{}{}\\par}}", self.paragraph_controls(), self.chunk(colors))
    }

    /// A table cell paragraph: `{\pard...\fs18{\f0 text}\intbl\cell}`.
    pub fn as_cell(&self, colors: &ColorTable) -> String {
        format!(
            "{{{}{}\\intbl\\cell}}",
            self.paragraph_controls(),
            self.chunk(colors)
        )
    }
}

/// Encode several text lines as one paragraph joined by `\line`.
///
/// Paragraph-level formatting comes from the last line's attributes; each
/// line keeps its own sized text group.
pub fn encode_line_block(lines: &[TextContent], colors: &ColorTable) -> Option<String> {
    let last = lines.last()?;
    let chunks: Vec<String> = lines.iter().map(|line| line.chunk(colors)).collect();
    Some(format!(
        "{{{}{}\\par}}",
        last.paragraph_controls(),
        chunks.join("\\line")
    ))
}

/// Encode several text lines as independent paragraphs.
pub fn encode_paragraph_block(lines: &[TextContent], colors: &ColorTable) -> Vec<String> {
    lines.iter().map(|line| line.as_paragraph(colors)).collect()
}

/// A resolved border for one cell edge.
#[derive(Debug, Clone, Default)]
pub struct Border {
    pub style: BorderStyle,
    /// Width in twips
    pub width: i32,
    /// Border color name
    pub color: Option<String>,
}

impl Border {
    /// Create a border of the given style at the default 15 twip width.
    pub fn new(style: BorderStyle) -> Self {
        Self {
            style,
            width: 15,
            color: None,
        }
    }

    /// Emit `\clbrdr<side><style>\brdrw<width>[\brdrcf<index>]`.
    fn encode(&self, side: char, colors: &ColorTable, out: &mut String) {
        if !self.style.is_visible() {
            return;
        }
        let mut buf = itoa::Buffer::new();
        out.push_str("\\clbrdr");
        out.push(side);
        out.push_str(self.style.control_word());
        out.push_str("\\brdrw");
        out.push_str(buf.format(self.width));
        if let Some(index) = self.color.as_deref().and_then(|n| colors.index_of(n)) {
            out.push_str("\\brdrcf");
            out.push_str(buf.format(index));
        }
    }
}

/// A resolved table cell.
#[derive(Debug, Clone)]
pub struct Cell {
    pub text: TextContent,
    /// Cumulative right boundary in inches (the `\cellx` position)
    pub width: f64,
    pub border_top: Option<Border>,
    pub border_bottom: Option<Border>,
    pub border_left: Option<Border>,
    pub border_right: Option<Border>,
    pub vertical_justification: VerticalJustification,
}

impl Cell {
    /// The cell definition line: borders, vertical alignment, boundary.
    pub fn definition(&self, colors: &ColorTable) -> String {
        let mut out = String::with_capacity(64);
        if let Some(border) = &self.border_top {
            border.encode('t', colors, &mut out);
        }
        if let Some(border) = &self.border_bottom {
            border.encode('b', colors, &mut out);
        }
        if let Some(border) = &self.border_left {
            border.encode('l', colors, &mut out);
        }
        if let Some(border) = &self.border_right {
            border.encode('r', colors, &mut out);
        }
        out.push_str(self.vertical_justification.control_word());
        let mut buf = itoa::Buffer::new();
        out.push_str("\\cellx");
        out.push_str(buf.format(inch_to_twip(self.width)));
        out
    }
}

/// A resolved physical table row.
#[derive(Debug, Clone)]
pub struct Row {
    pub cells: Vec<Cell>,
    /// Row placement within the page band
    pub justification: Justification,
    /// Row height in inches
    pub height: f64,
}

impl Row {
    /// Emit the full command sequence for this row.
    ///
    /// One string per structural line: the row opening, one definition per
    /// cell, one content paragraph per cell, and the row close.
    pub fn as_rtf(&self, colors: &ColorTable) -> Vec<String> {
        let mut buf = itoa::Buffer::new();
        let mut lines: SmallVec<[String; 8]> =
            SmallVec::with_capacity(self.cells.len() * 2 + 2);

        let mut open = String::with_capacity(32);
        open.push_str("\\trowd\\trgaph");
        open.push_str(buf.format(inch_to_twip(self.height) / 2));
        open.push_str("\\trleft0");
        open.push_str(self.justification.row_code());
        lines.push(open);

        for cell in &self.cells {
            lines.push(cell.definition(colors));
        }
        for cell in &self.cells {
            lines.push(cell.text.as_cell(colors));
        }
        lines.push("\\intbl\\row\\pard".to_string());

        lines.into_vec()
    }
}
